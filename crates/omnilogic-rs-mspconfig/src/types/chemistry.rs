// crates/omnilogic-rs-mspconfig/src/types/chemistry.rs

//! Water chemistry: chlorinators and CSADs with their nested equipment.

use super::{
    push_other, split_type_code, Adopt, ChildVisitor, ChlorinatorType, CsadType, Entity,
    EntityHeader, EntityKind, Node, NodeMut, Slot, TypeCode, NO_BODY_OF_WATER,
};
use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

entity! {
    pub struct Chlorinator {
        kind: Chlorinator,
        type_code: String,
        slots {
            #[serde(skip_serializing_if = "Option::is_none")]
            chlorinator_equipment: Option<Vec<ChlorinatorEquipment>>,
        }
    }
}

entity! {
    /// A physical cell or dispenser driven by a chlorinator.
    pub struct ChlorinatorEquipment {
        kind: ChlorinatorEquipment,
        type_code: String,
        slots {}
    }
}

impl ChlorinatorEquipment {
    /// The `Chlorinator-Type` sub-type code.
    pub fn chlorinator_type(&self) -> Option<ChlorinatorType> {
        self.attribute("Chlorinator-Type")
            .and_then(ChlorinatorType::from_code)
    }
}

entity! {
    /// Chemistry sense and dispense controller.
    pub struct Csad {
        kind: Csad,
        type_code: CsadType,
        slots {
            #[serde(skip_serializing_if = "Option::is_none")]
            csad_equipment: Option<Vec<CsadEquipment>>,
        }
    }
}

entity! {
    pub struct CsadEquipment {
        kind: CsadEquipment,
        type_code: String,
        slots {}
    }
}

entity_slot!(Chlorinator);
entity_slot!(ChlorinatorEquipment);
entity_slot!(Csad);
entity_slot!(CsadEquipment);
