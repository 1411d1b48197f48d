// crates/omnilogic-rs-mspconfig/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::error::ConfigError;
use crate::model::{OPERATION_TAG, RawElement};
use crate::registry::is_registered;
use crate::types::EntityHeader;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

const SYSTEM_ID_TAG: &str = "System-Id";
const NAME_TAG: &str = "Name";
const TYPE_TAG: &str = "Type";

/// Whether a child element holds a scalar value rather than an entity.
///
/// An element with children is structural. A childless element is a scalar
/// unless its tag names an entity (e.g., an empty `<Body-of-water/>`).
fn is_scalar(child: &RawElement) -> bool {
    child.is_leaf() && !is_registered(&child.tag)
}

/// Collects the scalar values of an element: its XML attributes plus the text of
/// every scalar child. Scalar children win over attributes with the same name.
pub(super) fn scalar_attributes(raw: &RawElement) -> BTreeMap<String, String> {
    let mut attributes = raw.attributes.clone();
    for child in raw.children.iter().filter(|c| is_scalar(c)) {
        attributes.insert(child.tag.clone(), child.text.clone().unwrap_or_default());
    }
    attributes
}

/// Lifts the well-known scalars (`System-Id`, `Name`, `Type`) out of an element.
pub(super) fn resolve_header(raw: &RawElement) -> Result<EntityHeader, ConfigError> {
    let mut attributes = scalar_attributes(raw);

    let system_id = attributes
        .remove(SYSTEM_ID_TAG)
        .map(|value| parse_system_id(&value))
        .transpose()?;

    Ok(EntityHeader {
        tag: raw.tag.clone(),
        system_id,
        name: attributes.remove(NAME_TAG),
        type_code: attributes.remove(TYPE_TAG),
        attributes,
    })
}

/// Parses a `System-Id` value. Surrounding whitespace is tolerated.
fn parse_system_id(value: &str) -> Result<i32, ConfigError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::InvalidAttributeFormat {
            attribute: SYSTEM_ID_TAG,
            value: value.to_string(),
        })
}

/// Returns the structural children that are entity candidates, in document order.
///
/// `<Operation>` wrappers are transparent: their children are returned in
/// their place, at any depth.
pub(super) fn entity_children(raw: &RawElement) -> Vec<&RawElement> {
    let mut children = Vec::new();
    collect_entity_children(raw, &mut children);
    children
}

fn collect_entity_children<'a>(raw: &'a RawElement, out: &mut Vec<&'a RawElement>) {
    for child in raw.children.iter().filter(|c| !is_scalar(c)) {
        if child.tag == OPERATION_TAG {
            collect_entity_children(child, out);
        } else {
            out.push(child);
        }
    }
}
