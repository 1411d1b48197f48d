// crates/omnilogic-rs-mspconfig/src/propagate.rs

//! Stamps `bow_id` onto every node of a backyard tree.
//!
//! The walk knows nothing about individual entity types: it follows the slots
//! each type declares, so nesting depth is whatever the tree happens to have.
//! A body of water is the only node that changes the value being propagated.

use crate::error::ConfigError;
use crate::types::{Backyard, EntityKind, NO_BODY_OF_WATER, Node, NodeMut};
use alloc::string::ToString;
use log::debug;

/// Assigns `bow_id` to every node reachable from `backyard`.
///
/// The backyard and everything outside a body of water get `NO_BODY_OF_WATER`;
/// a body of water gets its own `system_id`, and so does everything below it.
/// Each value is recomputed from scratch, so running this twice is harmless.
///
/// # Errors
/// - `ConfigError::UnsupportedEntityShape` if a body of water is found anywhere
///   other than directly under the backyard.
/// - `ConfigError::MalformedConfig` if a body of water has no usable `system_id`.
pub fn propagate_bow_ids(backyard: &mut Backyard) -> Result<(), ConfigError> {
    backyard.set_bow_id(NO_BODY_OF_WATER);
    backyard.for_each_child_mut(&mut |child| {
        stamp(child, EntityKind::Backyard, NO_BODY_OF_WATER).map(|_| ())
    })
}

/// Stamps `node` and its subtree, returning the number of nodes stamped.
fn stamp(node: &mut dyn NodeMut, parent: EntityKind, inherited: i32) -> Result<usize, ConfigError> {
    let kind = node.kind();
    let context = if kind == EntityKind::BodyOfWater {
        anchor(node, parent)?
    } else {
        inherited
    };

    node.set_bow_id(context);

    let mut stamped = 1;
    node.for_each_child_mut(&mut |child| {
        stamped += stamp(child, kind, context)?;
        Ok(())
    })?;

    if kind == EntityKind::BodyOfWater {
        debug!(
            "Body of water {} anchors {} descendant(s)",
            context,
            stamped - 1
        );
    }

    Ok(stamped)
}

/// Returns the value a body of water propagates: its own `system_id`.
fn anchor(node: &dyn NodeMut, parent: EntityKind) -> Result<i32, ConfigError> {
    if parent != EntityKind::Backyard {
        return Err(ConfigError::UnsupportedEntityShape {
            kind: EntityKind::BodyOfWater,
            reason: "a body of water must sit directly under the backyard",
        });
    }

    match node.system_id() {
        Some(id) if id >= 0 => Ok(id),
        Some(_) => Err(ConfigError::MalformedConfig(
            "body of water has a negative System-Id".to_string(),
        )),
        None => Err(ConfigError::MalformedConfig(
            "body of water has no System-Id".to_string(),
        )),
    }
}
