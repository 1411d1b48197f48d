// crates/omnilogic-rs-mspconfig/src/types/heater.rs

use super::{
    push_other, split_type_code, Adopt, ChildVisitor, Entity, EntityHeader, EntityKind,
    HeaterType, Node, NodeMut, Slot, TypeCode, NO_BODY_OF_WATER,
};
use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

entity! {
    /// The heating logic of a body of water, grouping one or more heater units.
    pub struct VirtualHeater {
        kind: VirtualHeater,
        type_code: String,
        slots {
            #[serde(skip_serializing_if = "Option::is_none")]
            heater_equipment: Option<Vec<HeaterEquipment>>,
        }
    }
}

entity! {
    /// A physical heater unit (gas, heat pump, solar, ...).
    pub struct HeaterEquipment {
        kind: HeaterEquipment,
        type_code: String,
        slots {}
    }
}

impl HeaterEquipment {
    /// The `Heater-Type` sub-type code.
    pub fn heater_type(&self) -> Option<HeaterType> {
        self.attribute("Heater-Type").and_then(HeaterType::from_code)
    }
}

entity_slot!(VirtualHeater);
entity_slot!(HeaterEquipment);
