// crates/omnilogic-rs-mspconfig/src/error.rs

use crate::types::EntityKind;
use alloc::fmt;
use alloc::string::String;
use quick_xml::Error as XmlError;
use quick_xml::encoding::EncodingError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;

/// Errors that can occur while loading an MSPConfig document.
#[derive(Debug)]
pub enum ConfigError {
    /// An error from the underlying `quick-xml` reader (syntax, encoding, escapes).
    XmlParsing(XmlError),

    /// The document is structurally invalid (e.g., no `<Backyard>` element).
    MalformedConfig(String),

    /// A well-known scalar (e.g., `System-Id`) had an invalid format.
    InvalidAttributeFormat {
        attribute: &'static str,
        value: String,
    },

    /// No registry entry matches this tag and type code.
    ///
    /// Only surfaced when the load runs with `UnknownEntityPolicy::Reject`;
    /// the default policy builds an `UnknownEntity` instead.
    UnknownEntityType { tag: String, code: Option<String> },

    /// The propagator reached a node it cannot place in the tree.
    /// This points at a defect in how the tree was built, not at bad data.
    UnsupportedEntityShape {
        kind: EntityKind,
        reason: &'static str,
    },
}

impl From<XmlError> for ConfigError {
    fn from(e: XmlError) -> Self {
        ConfigError::XmlParsing(e)
    }
}

impl From<AttrError> for ConfigError {
    fn from(e: AttrError) -> Self {
        ConfigError::XmlParsing(e.into())
    }
}

impl From<EscapeError> for ConfigError {
    fn from(e: EscapeError) -> Self {
        ConfigError::XmlParsing(e.into())
    }
}

impl From<EncodingError> for ConfigError {
    fn from(e: EncodingError) -> Self {
        ConfigError::XmlParsing(e.into())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            ConfigError::MalformedConfig(msg) => write!(f, "Malformed configuration: {}", msg),
            ConfigError::InvalidAttributeFormat { attribute, value } => {
                write!(f, "Invalid format for {}: '{}'", attribute, value)
            }
            ConfigError::UnknownEntityType { tag, code } => match code {
                Some(code) => write!(f, "Unknown entity type: <{}> with type code {}", tag, code),
                None => write!(f, "Unknown entity type: <{}>", tag),
            },
            ConfigError::UnsupportedEntityShape { kind, reason } => {
                write!(f, "Unsupported entity shape for {}: {}", kind, reason)
            }
        }
    }
}
