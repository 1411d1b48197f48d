// crates/omnilogic-rs-mspconfig/src/registry.rs

//! The entity type registry: maps an element's tag and `Type` code to the
//! variant the resolver should construct.

use crate::error::ConfigError;
use crate::types::{
    ColorLogicLightType, CsadType, EntityKind, FilterType, PumpType, RelayType,
    SensorType, TypeCode,
};
use alloc::string::ToString;

/// One registered element tag.
struct RegistryEntry {
    tag: &'static str,
    kind: EntityKind,
    /// Whether a `Type` code belongs to this kind's family.
    accepts: fn(&str) -> bool,
}

fn typed<T: TypeCode>(code: &str) -> bool {
    T::from_code(code).is_some()
}

fn any_code(_: &str) -> bool {
    true
}

const REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        tag: "Body-of-water",
        kind: EntityKind::BodyOfWater,
        // A pool with a new code is still a pool; its equipment must anchor to it.
        accepts: any_code,
    },
    RegistryEntry {
        tag: "Filter",
        kind: EntityKind::Filter,
        accepts: typed::<FilterType>,
    },
    RegistryEntry {
        tag: "Pump",
        kind: EntityKind::Pump,
        accepts: typed::<PumpType>,
    },
    RegistryEntry {
        tag: "Relay",
        kind: EntityKind::Relay,
        accepts: typed::<RelayType>,
    },
    RegistryEntry {
        tag: "Sensor",
        kind: EntityKind::Sensor,
        accepts: typed::<SensorType>,
    },
    RegistryEntry {
        tag: "ColorLogic-Light",
        kind: EntityKind::ColorLogicLight,
        accepts: typed::<ColorLogicLightType>,
    },
    RegistryEntry {
        tag: "Chlorinator",
        kind: EntityKind::Chlorinator,
        accepts: any_code,
    },
    RegistryEntry {
        tag: "Chlorinator-Equipment",
        kind: EntityKind::ChlorinatorEquipment,
        accepts: |code| code == "PET_CHLORINATOR",
    },
    RegistryEntry {
        tag: "CSAD",
        kind: EntityKind::Csad,
        accepts: typed::<CsadType>,
    },
    RegistryEntry {
        tag: "CSAD-Equipment",
        kind: EntityKind::CsadEquipment,
        accepts: |code| code == "PET_CSAD",
    },
    RegistryEntry {
        tag: "Heater",
        kind: EntityKind::VirtualHeater,
        accepts: any_code,
    },
    RegistryEntry {
        tag: "Heater-Equipment",
        kind: EntityKind::HeaterEquipment,
        accepts: |code| code == "PET_HEATER",
    },
];

/// Resolves the entity kind for an element.
///
/// An element without a `Type` code resolves by tag alone.
///
/// # Errors
/// Returns `ConfigError::UnknownEntityType` if the tag is not registered, or if
/// the code is outside the family registered for that tag.
pub fn resolve_kind(tag: &str, code: Option<&str>) -> Result<EntityKind, ConfigError> {
    REGISTRY
        .iter()
        .find(|entry| entry.tag == tag)
        .filter(|entry| code.is_none_or(entry.accepts))
        .map(|entry| entry.kind)
        .ok_or_else(|| ConfigError::UnknownEntityType {
            tag: tag.to_string(),
            code: code.map(ToString::to_string),
        })
}

/// Whether `tag` names an entity, whatever its `Type` code.
pub(crate) fn is_registered(tag: &str) -> bool {
    REGISTRY.iter().any(|entry| entry.tag == tag)
}
