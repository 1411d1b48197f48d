// crates/omnilogic-rs-mspconfig/src/resolver/backyard.rs

//! The tree assembler: builds the single `Backyard` root.

use super::entity::build_entity;
use super::utils::{entity_children, resolve_header};
use super::BACKYARD_TAG;
use crate::config::UnknownEntityPolicy;
use crate::error::ConfigError;
use crate::model::RawElement;
use crate::types::Backyard;
use alloc::format;

/// Locates the `<Backyard>` element (the document root itself, or a direct
/// child of it) and builds it with all of its entity children.
///
/// Bodies of water land in `Backyard::bow` in document order.
pub(super) fn resolve_backyard(
    root: &RawElement,
    policy: UnknownEntityPolicy,
) -> Result<Backyard, ConfigError> {
    let raw = if root.tag == BACKYARD_TAG {
        root
    } else {
        root.child(BACKYARD_TAG).ok_or_else(|| {
            ConfigError::MalformedConfig(format!(
                "<{}> has no mandatory <{}> element",
                root.tag, BACKYARD_TAG
            ))
        })?
    };

    let mut backyard = Backyard::from_header(resolve_header(raw)?);
    for child in entity_children(raw) {
        backyard.adopt(build_entity(child, policy)?);
    }

    Ok(backyard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of_water(system_id: &str) -> RawElement {
        RawElement::new("Body-of-water")
            .with_child(RawElement::leaf("System-Id", system_id))
            .with_child(RawElement::leaf("Type", "BOW_POOL"))
    }

    #[test]
    fn test_bodies_of_water_keep_document_order() {
        let root = RawElement::new("MSPConfig").with_child(
            RawElement::new("Backyard")
                .with_child(RawElement::leaf("System-Id", "0"))
                .with_child(body_of_water("7"))
                .with_child(
                    RawElement::new("Sensor")
                        .with_child(RawElement::leaf("System-Id", "16"))
                        .with_child(RawElement::leaf("Type", "SENSOR_AIR_TEMP")),
                )
                .with_child(body_of_water("5")),
        );

        let backyard = resolve_backyard(&root, UnknownEntityPolicy::Fallback).unwrap();

        let ids: alloc::vec::Vec<_> = backyard.bow.iter().map(|b| b.system_id).collect();
        assert_eq!(ids, [Some(7), Some(5)]);
        assert_eq!(backyard.sensor.as_ref().map(|s| s.len()), Some(1));
        assert!(backyard.relay.is_none());
    }

    #[test]
    fn test_document_rooted_at_backyard() {
        let root = RawElement::new("Backyard").with_child(body_of_water("1"));
        let backyard = resolve_backyard(&root, UnknownEntityPolicy::Fallback).unwrap();
        assert_eq!(backyard.bow.len(), 1);
    }

    #[test]
    fn test_missing_backyard() {
        let root = RawElement::new("MSPConfig").with_child(RawElement::new("System"));
        let result = resolve_backyard(&root, UnknownEntityPolicy::Fallback);
        assert!(matches!(result, Err(ConfigError::MalformedConfig(_))));
    }
}
