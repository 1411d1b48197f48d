// crates/omnilogic-rs-mspconfig/src/resolver/mod.rs

//! Turns a raw element tree into the typed entity tree.
//!
//! The `entity` module resolves single elements through the registry, the
//! `backyard` module assembles the root. Propagation happens afterwards.

use crate::config::UnknownEntityPolicy;
use crate::error::ConfigError;
use crate::model::RawElement;
use crate::types::{Backyard, SystemSettings};
use log::debug;

// --- Sub-modules ---

mod backyard;
mod entity;
mod utils;

const BACKYARD_TAG: &str = "Backyard";
const SYSTEM_TAG: &str = "System";

/// The typed document before propagation.
#[derive(Debug)]
pub(crate) struct ResolvedDocument {
    pub system: SystemSettings,
    pub backyard: Backyard,
}

/// Resolves the `System` settings and the `Backyard` tree from the document root.
pub(crate) fn resolve_document(
    root: &RawElement,
    policy: UnknownEntityPolicy,
) -> Result<ResolvedDocument, ConfigError> {
    let backyard = backyard::resolve_backyard(root, policy)?;

    let system = root
        .child(SYSTEM_TAG)
        .map(|raw| SystemSettings {
            attributes: utils::scalar_attributes(raw),
        })
        .unwrap_or_default();

    if root.tag != BACKYARD_TAG {
        for section in root
            .children
            .iter()
            .filter(|c| c.tag != BACKYARD_TAG && c.tag != SYSTEM_TAG)
        {
            debug!("Ignoring top-level section <{}>", section.tag);
        }
    }

    Ok(ResolvedDocument { system, backyard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_system_settings() {
        let root = RawElement::new("MSPConfig")
            .with_child(
                RawElement::new("System")
                    .with_child(RawElement::leaf("Msp-Vsp-Speed-Format", "Percent"))
                    .with_child(RawElement::leaf("Units", "Metric")),
            )
            .with_child(RawElement::new("Backyard"))
            .with_child(RawElement::new("Schedules"));

        let document = resolve_document(&root, UnknownEntityPolicy::Fallback).unwrap();

        assert_eq!(document.system.units(), Some("Metric"));
        assert_eq!(document.system.vsp_speed_format(), Some("Percent"));
        assert!(document.backyard.bow.is_empty());
    }

    #[test]
    fn test_system_section_is_optional() {
        let root = RawElement::new("MSPConfig").with_child(RawElement::new("Backyard"));
        let document = resolve_document(&root, UnknownEntityPolicy::Fallback).unwrap();
        assert_eq!(document.system, SystemSettings::default());
    }
}
