// crates/omnilogic-rs-mspconfig/src/types/body_of_water.rs

use super::{
    push_other, split_type_code, Adopt, BodyOfWaterType, ChildVisitor, Chlorinator,
    ColorLogicLight, Csad, Entity, EntityHeader, EntityKind, Filter, Node, NodeMut, Pump, Relay,
    Sensor, Slot, TypeCode, VirtualHeater, NO_BODY_OF_WATER,
};
use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

entity! {
    /// A single pool or spa and the equipment attached to it.
    ///
    /// Once propagated, `bow_id == system_id` and every descendant carries the
    /// same value.
    pub struct BodyOfWater {
        kind: BodyOfWater,
        type_code: BodyOfWaterType,
        slots {
            #[serde(skip_serializing_if = "Option::is_none")]
            filter: Option<Vec<Filter>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            csad: Option<Vec<Csad>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            chlorinator: Option<Chlorinator>,
            #[serde(skip_serializing_if = "Option::is_none")]
            colorlogic_light: Option<Vec<ColorLogicLight>>,
            /// Water temperature and flow sensors.
            #[serde(skip_serializing_if = "Option::is_none")]
            sensor: Option<Vec<Sensor>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            heater: Option<VirtualHeater>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pump: Option<Vec<Pump>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            relay: Option<Vec<Relay>>,
        }
    }
}

entity_slot!(BodyOfWater);

impl BodyOfWater {
    pub fn is_spa(&self) -> bool {
        self.type_code == Some(BodyOfWaterType::Spa)
    }
}
