// crates/omnilogic-rs-mspconfig/src/types/backyard.rs

use super::{
    push_other, split_type_code, Adopt, BodyOfWater, ChildVisitor, ColorLogicLight, Entity,
    EntityHeader, EntityKind, Node, NodeMut, Relay, Sensor, Slot, TypeCode, NO_BODY_OF_WATER,
};
use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

entity! {
    /// The root of a configuration: one physical installation.
    ///
    /// The backyard and everything it owns outside a body of water keep
    /// `bow_id == NO_BODY_OF_WATER`.
    pub struct Backyard {
        kind: Backyard,
        type_code: String,
        slots {
            /// Ambient sensors (e.g., air temperature).
            #[serde(skip_serializing_if = "Option::is_none")]
            sensor: Option<Vec<Sensor>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            relay: Option<Vec<Relay>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            colorlogic_light: Option<Vec<ColorLogicLight>>,
            /// Bodies of water in document order.
            bow: Vec<BodyOfWater>,
        }
    }
}
