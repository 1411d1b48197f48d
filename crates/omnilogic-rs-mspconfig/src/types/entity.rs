// crates/omnilogic-rs-mspconfig/src/types/entity.rs

use super::{
    BodyOfWater, ChildVisitor, Chlorinator, ChlorinatorEquipment, ColorLogicLight, Csad,
    CsadEquipment, EntityHeader, EntityKind, Filter, HeaterEquipment, Node, NodeMut, Pump, Relay,
    Sensor, Slot, VirtualHeater, NO_BODY_OF_WATER,
};
use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

/// Any entity that can appear below the backyard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entity {
    BodyOfWater(BodyOfWater),
    Filter(Filter),
    Pump(Pump),
    Relay(Relay),
    Sensor(Sensor),
    ColorLogicLight(ColorLogicLight),
    Chlorinator(Chlorinator),
    ChlorinatorEquipment(ChlorinatorEquipment),
    Csad(Csad),
    CsadEquipment(CsadEquipment),
    VirtualHeater(VirtualHeater),
    HeaterEquipment(HeaterEquipment),
    Unknown(UnknownEntity),
}

/// Expands `$body` once per variant with `$inner` bound to the wrapped entity.
macro_rules! dispatch {
    ($entity:expr, $inner:ident => $body:expr) => {
        match $entity {
            Entity::BodyOfWater($inner) => $body,
            Entity::Filter($inner) => $body,
            Entity::Pump($inner) => $body,
            Entity::Relay($inner) => $body,
            Entity::Sensor($inner) => $body,
            Entity::ColorLogicLight($inner) => $body,
            Entity::Chlorinator($inner) => $body,
            Entity::ChlorinatorEquipment($inner) => $body,
            Entity::Csad($inner) => $body,
            Entity::CsadEquipment($inner) => $body,
            Entity::VirtualHeater($inner) => $body,
            Entity::HeaterEquipment($inner) => $body,
            Entity::Unknown($inner) => $body,
        }
    };
}

impl Entity {
    /// Creates the variant selected by the registry, with no children yet.
    pub(crate) fn from_header(kind: EntityKind, header: EntityHeader) -> Result<Self, ConfigError> {
        Ok(match kind {
            EntityKind::BodyOfWater => Entity::BodyOfWater(BodyOfWater::from_header(header)),
            EntityKind::Filter => Entity::Filter(Filter::from_header(header)),
            EntityKind::Pump => Entity::Pump(Pump::from_header(header)),
            EntityKind::Relay => Entity::Relay(Relay::from_header(header)),
            EntityKind::Sensor => Entity::Sensor(Sensor::from_header(header)),
            EntityKind::ColorLogicLight => {
                Entity::ColorLogicLight(ColorLogicLight::from_header(header))
            }
            EntityKind::Chlorinator => Entity::Chlorinator(Chlorinator::from_header(header)),
            EntityKind::ChlorinatorEquipment => {
                Entity::ChlorinatorEquipment(ChlorinatorEquipment::from_header(header))
            }
            EntityKind::Csad => Entity::Csad(Csad::from_header(header)),
            EntityKind::CsadEquipment => Entity::CsadEquipment(CsadEquipment::from_header(header)),
            EntityKind::VirtualHeater => Entity::VirtualHeater(VirtualHeater::from_header(header)),
            EntityKind::HeaterEquipment => {
                Entity::HeaterEquipment(HeaterEquipment::from_header(header))
            }
            EntityKind::Unknown => Entity::Unknown(UnknownEntity::from_header(header)),
            EntityKind::Backyard => {
                return Err(ConfigError::UnsupportedEntityShape {
                    kind,
                    reason: "a backyard is only valid as the document root",
                });
            }
        })
    }

    /// Places a built child into this entity's matching slot.
    pub(crate) fn adopt(&mut self, child: Entity) {
        dispatch!(self, inner => inner.adopt(child))
    }
}

impl Node for Entity {
    fn kind(&self) -> EntityKind {
        dispatch!(self, inner => inner.kind())
    }

    fn system_id(&self) -> Option<i32> {
        dispatch!(self, inner => inner.system_id())
    }

    fn bow_id(&self) -> i32 {
        dispatch!(self, inner => inner.bow_id())
    }

    fn name(&self) -> Option<&str> {
        dispatch!(self, inner => Node::name(inner))
    }

    fn type_code(&self) -> Option<&str> {
        dispatch!(self, inner => Node::type_code(inner))
    }

    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
        dispatch!(self, inner => inner.for_each_child(f))
    }
}

impl NodeMut for Entity {
    fn set_bow_id(&mut self, bow_id: i32) {
        dispatch!(self, inner => inner.set_bow_id(bow_id))
    }

    fn for_each_child_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
        dispatch!(self, inner => inner.for_each_child_mut(f))
    }
}

impl Slot for Entity {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
        f(self);
    }

    fn visit_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
        f(self)
    }
}

/// Fallback for an element whose tag or type code the registry does not know.
///
/// The raw scalars are preserved and its entity children are built with the
/// same resolution rule, so nothing below it is lost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownEntity {
    /// The XML tag of the element.
    pub tag: String,
    pub system_id: Option<i32>,
    pub bow_id: i32,
    pub name: Option<String>,
    pub type_code: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Entity>,
}

impl UnknownEntity {
    pub(crate) fn from_header(header: EntityHeader) -> Self {
        Self {
            tag: header.tag,
            system_id: header.system_id,
            bow_id: NO_BODY_OF_WATER,
            name: header.name,
            type_code: header.type_code,
            attributes: header.attributes,
            children: Vec::new(),
        }
    }

    pub(crate) fn adopt(&mut self, child: Entity) {
        self.children.push(child);
    }

    pub fn attribute(&self, tag: &str) -> Option<&str> {
        self.attributes.get(tag).map(String::as_str)
    }
}

impl Node for UnknownEntity {
    fn kind(&self) -> EntityKind {
        EntityKind::Unknown
    }

    fn system_id(&self) -> Option<i32> {
        self.system_id
    }

    fn bow_id(&self) -> i32 {
        self.bow_id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn type_code(&self) -> Option<&str> {
        self.type_code.as_deref()
    }

    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
        self.children.visit(f);
    }
}

impl NodeMut for UnknownEntity {
    fn set_bow_id(&mut self, bow_id: i32) {
        self.bow_id = bow_id;
    }

    fn for_each_child_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
        self.children.visit_mut(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn header(tag: &str, system_id: i32) -> EntityHeader {
        EntityHeader {
            tag: tag.to_string(),
            system_id: Some(system_id),
            ..Default::default()
        }
    }

    #[test]
    fn test_adopt_routes_children_to_declared_slots() {
        let mut chlorinator =
            Entity::from_header(EntityKind::Chlorinator, header("Chlorinator", 7)).unwrap();
        let cell = Entity::from_header(
            EntityKind::ChlorinatorEquipment,
            header("Chlorinator-Equipment", 8),
        )
        .unwrap();
        let stray = Entity::from_header(EntityKind::Pump, header("Pump", 9)).unwrap();

        chlorinator.adopt(cell);
        chlorinator.adopt(stray);

        let Entity::Chlorinator(chlorinator) = chlorinator else {
            panic!("Expected a chlorinator");
        };
        let equipment = chlorinator.chlorinator_equipment.as_ref().unwrap();
        assert_eq!(equipment.len(), 1);
        assert_eq!(equipment[0].system_id, Some(8));

        // The pump has no slot on a chlorinator
        let other = chlorinator.other.as_ref().unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].kind(), EntityKind::Pump);
    }

    #[test]
    fn test_singular_slot_keeps_first_and_spills_second() {
        let mut bow = Entity::from_header(EntityKind::BodyOfWater, header("Body-of-water", 1)).unwrap();
        bow.adopt(Entity::from_header(EntityKind::Chlorinator, header("Chlorinator", 2)).unwrap());
        bow.adopt(Entity::from_header(EntityKind::Chlorinator, header("Chlorinator", 3)).unwrap());

        let Entity::BodyOfWater(bow) = bow else {
            panic!("Expected a body of water");
        };
        assert_eq!(bow.chlorinator.as_ref().unwrap().system_id, Some(2));
        assert_eq!(bow.other.as_ref().unwrap()[0].system_id(), Some(3));
    }

    #[test]
    fn test_backyard_is_not_an_entity_variant() {
        let result = Entity::from_header(EntityKind::Backyard, header("Backyard", 0));
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedEntityShape {
                kind: EntityKind::Backyard,
                ..
            })
        ));
    }

    #[test]
    fn test_for_each_child_visits_slots_in_order() {
        let mut heater =
            Entity::from_header(EntityKind::VirtualHeater, header("Heater", 18)).unwrap();
        heater.adopt(Entity::from_header(EntityKind::HeaterEquipment, header("Heater-Equipment", 19)).unwrap());
        heater.adopt(Entity::from_header(EntityKind::HeaterEquipment, header("Heater-Equipment", 20)).unwrap());

        let mut seen = Vec::new();
        heater.for_each_child(&mut |child| seen.push(child.system_id()));
        assert_eq!(seen, [Some(19), Some(20)]);
    }
}
