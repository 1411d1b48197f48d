// crates/omnilogic-rs-mspconfig/src/types/system.rs

use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::Serialize;

/// Installation-wide settings from the `<System>` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemSettings {
    /// Scalar values keyed by tag.
    pub attributes: BTreeMap<String, String>,
}

impl SystemSettings {
    /// `Units` (e.g., "Standard" or "Metric").
    pub fn units(&self) -> Option<&str> {
        self.attributes.get("Units").map(String::as_str)
    }

    /// `Msp-Vsp-Speed-Format` (e.g., "Percent" or "RPM").
    pub fn vsp_speed_format(&self) -> Option<&str> {
        self.attributes
            .get("Msp-Vsp-Speed-Format")
            .map(String::as_str)
    }
}
