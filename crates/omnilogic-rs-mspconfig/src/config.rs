// crates/omnilogic-rs-mspconfig/src/config.rs

use crate::error::ConfigError;
use crate::model::RawElement;
use crate::parser::parse_document;
use crate::propagate::propagate_bow_ids;
use crate::resolver::resolve_document;
use crate::types::{Backyard, BodyOfWater, Node, SystemSettings};
use alloc::vec::Vec;
use log::info;
use serde::Serialize;

/// What the resolver does with an element the registry does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownEntityPolicy {
    /// Build an `UnknownEntity` that keeps the raw scalars, and log a warning.
    #[default]
    Fallback,
    /// Fail the load with `ConfigError::UnknownEntityType`.
    Reject,
}

/// Options for a single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub unknown_entities: UnknownEntityPolicy,
}

/// A fully resolved and propagated MSPConfig document.
///
/// Each load builds a fresh, independent tree; nothing is shared between
/// instances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MspConfig {
    system: SystemSettings,
    backyard: Backyard,
}

impl MspConfig {
    /// Parses an MSPConfig XML string with the default `LoadOptions`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the XML is invalid, the `<Backyard>` element
    /// is missing, or the tree cannot be propagated.
    pub fn load_xml(xml_content: &str) -> Result<Self, ConfigError> {
        Self::load_xml_with(xml_content, LoadOptions::default())
    }

    /// Parses an MSPConfig XML string with the given `LoadOptions`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the XML is invalid, the `<Backyard>` element
    /// is missing, the tree cannot be propagated, or (with
    /// `UnknownEntityPolicy::Reject`) an element is not recognized.
    pub fn load_xml_with(xml_content: &str, options: LoadOptions) -> Result<Self, ConfigError> {
        let root = parse_document(xml_content)?;
        Self::from_raw_with(&root, options)
    }

    /// Builds the configuration from an already parsed element tree with the
    /// default `LoadOptions`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the `<Backyard>` element is missing or the
    /// tree cannot be propagated.
    pub fn from_raw(root: &RawElement) -> Result<Self, ConfigError> {
        Self::from_raw_with(root, LoadOptions::default())
    }

    /// Builds the configuration from an already parsed element tree with the
    /// given `LoadOptions`.
    ///
    /// Runs the three stages in order: resolve typed entities, assemble the
    /// backyard, propagate `bow_id`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the `<Backyard>` element is missing, the
    /// tree cannot be propagated, or (with `UnknownEntityPolicy::Reject`) an
    /// element is not recognized.
    pub fn from_raw_with(root: &RawElement, options: LoadOptions) -> Result<Self, ConfigError> {
        let document = resolve_document(root, options.unknown_entities)?;
        let mut backyard = document.backyard;
        propagate_bow_ids(&mut backyard)?;

        info!(
            "Loaded MSPConfig with {} body(ies) of water",
            backyard.bow.len()
        );

        Ok(Self {
            system: document.system,
            backyard,
        })
    }

    pub fn backyard(&self) -> &Backyard {
        &self.backyard
    }

    pub fn system(&self) -> &SystemSettings {
        &self.system
    }

    /// Bodies of water in document order.
    pub fn bodies_of_water(&self) -> &[BodyOfWater] {
        &self.backyard.bow
    }

    /// Visits every node depth-first, the backyard first, then each slot in
    /// declaration order.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
        visit(&self.backyard, f);
    }

    /// Returns the first node carrying `system_id`.
    pub fn find_by_system_id(&self, system_id: i32) -> Option<&dyn Node> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() && node.system_id() == Some(system_id) {
                found = Some(node);
            }
        });
        found
    }

    /// Returns every node owned by the body of water `bow_id`, the body of
    /// water itself included.
    pub fn entities_in_body_of_water(&self, bow_id: i32) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        self.walk(&mut |node| {
            if node.bow_id() == bow_id {
                nodes.push(node);
            }
        });
        nodes
    }

    /// Consumes the configuration and returns the backyard tree.
    pub fn into_backyard(self) -> Backyard {
        self.backyard
    }
}

fn visit<'a>(node: &'a dyn Node, f: &mut dyn FnMut(&'a dyn Node)) {
    f(node);
    node.for_each_child(&mut |child| visit(child, &mut *f));
}
