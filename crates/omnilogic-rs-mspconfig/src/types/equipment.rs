// crates/omnilogic-rs-mspconfig/src/types/equipment.rs

//! Equipment without declared children of its own.

use super::{
    push_other, split_type_code, Adopt, ChildVisitor, ColorLogicLightType, Entity, EntityHeader,
    EntityKind, FilterType, Node, NodeMut, PumpType, RelayType, SensorType, Slot, TypeCode,
    NO_BODY_OF_WATER,
};
use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

entity! {
    /// The filter pump of a body of water.
    pub struct Filter {
        kind: Filter,
        type_code: FilterType,
        slots {}
    }
}

entity! {
    pub struct Pump {
        kind: Pump,
        type_code: PumpType,
        slots {}
    }
}

entity! {
    pub struct Relay {
        kind: Relay,
        type_code: RelayType,
        slots {}
    }
}

entity! {
    pub struct Sensor {
        kind: Sensor,
        type_code: SensorType,
        slots {}
    }
}

entity! {
    pub struct ColorLogicLight {
        kind: ColorLogicLight,
        type_code: ColorLogicLightType,
        slots {}
    }
}

entity_slot!(Filter);
entity_slot!(Pump);
entity_slot!(Relay);
entity_slot!(Sensor);
entity_slot!(ColorLogicLight);
