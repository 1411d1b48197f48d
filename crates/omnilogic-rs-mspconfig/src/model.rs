// crates/omnilogic-rs-mspconfig/src/model.rs

//! The generic, untyped element tree handed to the resolver.
//!
//! A `RawElement` is what the XML reader produces and what the resolver consumes.
//! Hosts that already hold an unmarshaled document can build this tree directly
//! and skip the text parser.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// The tag of the transparent wrapper around nested equipment
/// (e.g., `<Heater><Operation><Heater-Equipment>...`).
pub(crate) const OPERATION_TAG: &str = "Operation";

/// A single XML element: tag, attributes, text and ordered child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawElement {
    pub tag: String,
    /// XML attributes declared on the start tag.
    pub attributes: BTreeMap<String, String>,
    /// Trimmed text content. `None` when the element has no text.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<RawElement>,
}

impl RawElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder helper: a leaf element holding only text.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Builder helper: appends a child and returns `self`.
    pub fn with_child(mut self, child: RawElement) -> Self {
        self.children.push(child);
        self
    }

    /// Builder helper: sets an XML attribute and returns `self`.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// A leaf carries a scalar value; anything with element children is structural.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the first direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&RawElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Returns the text of the first direct leaf child with the given tag.
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.tag == tag && c.is_leaf())
            .and_then(|c| c.text.as_deref())
    }
}
