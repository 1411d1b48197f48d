// crates/omnilogic-rs-mspconfig/src/resolver/entity.rs

//! The discriminated entity builder.

use super::utils::{entity_children, resolve_header};
use crate::config::UnknownEntityPolicy;
use crate::error::ConfigError;
use crate::model::RawElement;
use crate::registry::resolve_kind;
use crate::types::{Entity, EntityKind, UnknownEntity};
use alloc::format;
use log::warn;

/// Builds one typed entity from a raw element, then recursively builds and
/// adopts its entity children with the same rule.
///
/// Every entity comes out with `bow_id == NO_BODY_OF_WATER`; only the
/// propagator changes it.
pub(super) fn build_entity(
    raw: &RawElement,
    policy: UnknownEntityPolicy,
) -> Result<Entity, ConfigError> {
    let header = resolve_header(raw)?;

    let mut entity = match resolve_kind(&raw.tag, header.type_code.as_deref()) {
        Ok(EntityKind::BodyOfWater) if !header.system_id.is_some_and(|id| id >= 0) => {
            return Err(ConfigError::MalformedConfig(format!(
                "body of water {:?} needs a non-negative System-Id, found {:?}",
                header.name, header.system_id
            )));
        }
        Ok(kind) => Entity::from_header(kind, header)?,
        Err(err @ ConfigError::UnknownEntityType { .. }) => match policy {
            UnknownEntityPolicy::Reject => return Err(err),
            UnknownEntityPolicy::Fallback => {
                warn!("{}; keeping it as an unknown entity", err);
                Entity::Unknown(UnknownEntity::from_header(header))
            }
        },
        Err(err) => return Err(err),
    };

    for child in entity_children(raw) {
        entity.adopt(build_entity(child, policy)?);
    }

    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeaterType, Node, NO_BODY_OF_WATER};

    fn heater_element() -> RawElement {
        RawElement::new("Heater")
            .with_child(RawElement::leaf("System-Id", "18"))
            .with_child(
                RawElement::new("Operation")
                    .with_child(
                        RawElement::new("Heater-Equipment")
                            .with_child(RawElement::leaf("System-Id", "19"))
                            .with_child(RawElement::leaf("Type", "PET_HEATER"))
                            .with_child(RawElement::leaf("Heater-Type", "HTR_GAS")),
                    )
                    .with_child(
                        RawElement::new("Heater-Equipment")
                            .with_child(RawElement::leaf("System-Id", "20"))
                            .with_child(RawElement::leaf("Type", "PET_HEATER"))
                            .with_child(RawElement::leaf("Heater-Type", "HTR_HEAT_PUMP")),
                    ),
            )
    }

    #[test]
    fn test_build_nested_equipment() {
        let entity = build_entity(&heater_element(), UnknownEntityPolicy::Fallback).unwrap();

        let Entity::VirtualHeater(heater) = entity else {
            panic!("Expected a virtual heater");
        };
        assert_eq!(heater.system_id, Some(18));
        assert_eq!(heater.bow_id, NO_BODY_OF_WATER);

        let equipment = heater.heater_equipment.as_ref().unwrap();
        assert_eq!(equipment.len(), 2);
        assert_eq!(equipment[0].heater_type(), Some(HeaterType::Gas));
        assert_eq!(equipment[1].heater_type(), Some(HeaterType::HeatPump));
        assert!(equipment.iter().all(|eq| eq.bow_id == NO_BODY_OF_WATER));
        assert!(heater.other.is_none());
    }

    #[test]
    fn test_absent_collection_stays_absent() {
        let raw = RawElement::new("Heater").with_child(RawElement::leaf("System-Id", "18"));
        let Entity::VirtualHeater(heater) = build_entity(&raw, UnknownEntityPolicy::Fallback).unwrap()
        else {
            panic!("Expected a virtual heater");
        };
        assert!(heater.heater_equipment.is_none());
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let raw = RawElement::new("Pump")
            .with_child(RawElement::leaf("System-Id", "30"))
            .with_child(RawElement::leaf("Type", "PMP_HYPERDRIVE"))
            .with_child(RawElement::leaf("Max-Speed", "3450"))
            .with_child(
                RawElement::new("Relay")
                    .with_child(RawElement::leaf("System-Id", "31"))
                    .with_child(RawElement::leaf("Type", "RLY_HIGH_VOLTAGE_RELAY")),
            );

        let Entity::Unknown(unknown) = build_entity(&raw, UnknownEntityPolicy::Fallback).unwrap()
        else {
            panic!("Expected the fallback variant");
        };
        assert_eq!(unknown.tag, "Pump");
        assert_eq!(unknown.type_code.as_deref(), Some("PMP_HYPERDRIVE"));
        assert_eq!(unknown.attribute("Max-Speed"), Some("3450"));
        // Children are still resolved through the registry
        assert_eq!(unknown.children.len(), 1);
        assert_eq!(unknown.children[0].kind(), EntityKind::Relay);
    }

    #[test]
    fn test_body_of_water_keeps_unrecognized_code() {
        let raw = RawElement::new("Body-of-water")
            .with_child(RawElement::leaf("System-Id", "3"))
            .with_child(RawElement::leaf("Type", "BOW_SPILLOVER"));

        let Entity::BodyOfWater(bow) = build_entity(&raw, UnknownEntityPolicy::Reject).unwrap()
        else {
            panic!("Expected a body of water");
        };
        assert_eq!(bow.type_code, None);
        assert_eq!(bow.attribute("Type"), Some("BOW_SPILLOVER"));
    }

    #[test]
    fn test_unknown_type_rejected_by_policy() {
        let raw = RawElement::new("Gizmo").with_child(RawElement::leaf("Type", "GZM"));
        let result = build_entity(&raw, UnknownEntityPolicy::Reject);
        assert!(matches!(result, Err(ConfigError::UnknownEntityType { .. })));
    }

    #[test]
    fn test_body_of_water_requires_system_id() {
        let raw = RawElement::new("Body-of-water")
            .with_child(RawElement::leaf("Name", "Pool"))
            .with_child(RawElement::new("Filter").with_child(RawElement::leaf("System-Id", "4")));
        let result = build_entity(&raw, UnknownEntityPolicy::Fallback);
        assert!(matches!(result, Err(ConfigError::MalformedConfig(_))));
    }
}
