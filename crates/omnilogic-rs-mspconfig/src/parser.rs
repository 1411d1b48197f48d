// crates/omnilogic-rs-mspconfig/src/parser.rs

use crate::error::ConfigError;
use crate::model::RawElement;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use quick_xml::encoding::Decoder;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

/// Parses raw XML text into a generic `RawElement` tree in a single pass.
///
/// Entity references and CDATA sections are folded into the text of the
/// enclosing element. Text is trimmed once the element closes, so whitespace
/// used for indentation never reaches the resolver.
///
/// # Errors
/// Returns `ConfigError::XmlParsing` for syntax errors reported by `quick-xml`
/// and `ConfigError::MalformedConfig` if the document has no (or more than one)
/// root element or ends inside an open element.
pub fn parse_document(xml_content: &str) -> Result<RawElement, ConfigError> {
    let mut reader = Reader::from_str(xml_content);
    let decoder = reader.decoder();

    // Open elements paired with their accumulated text.
    let mut stack: Vec<(RawElement, String)> = Vec::new();
    let mut root: Option<RawElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push((start_element(&e, decoder)?, String::new()));
            }
            Event::Empty(e) => {
                let element = start_element(&e, decoder)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let (mut element, text) = stack.pop().ok_or_else(|| {
                    ConfigError::MalformedConfig("closing tag without an open element".to_string())
                })?;
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    element.text = Some(trimmed.to_string());
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                if let Some((_, text)) = stack.last_mut() {
                    let decoded = decoder.decode(&e)?;
                    text.push_str(&unescape(&decoded)?);
                }
            }
            Event::CData(e) => {
                if let Some((_, text)) = stack.last_mut() {
                    text.push_str(&decoder.decode(&e)?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some((_, text)) = stack.last_mut() {
                    resolve_reference(&e, decoder, text)?;
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no data.
            _ => {}
        }
    }

    if let Some((open, _)) = stack.last() {
        return Err(ConfigError::MalformedConfig(format!(
            "document ended inside <{}>",
            open.tag
        )));
    }

    root.ok_or_else(|| ConfigError::MalformedConfig("document has no root element".to_string()))
}

/// Creates an element from a start (or empty) tag, decoding its attributes.
fn start_element(start: &BytesStart<'_>, decoder: Decoder) -> Result<RawElement, ConfigError> {
    let mut element = RawElement::new(decoder.decode(start.name().as_ref())?);

    for attr in start.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        let raw_value = decoder.decode(&attr.value)?;
        let value = unescape(&raw_value)?.into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}

/// Appends a finished element to its parent, or makes it the document root.
fn attach(
    stack: &mut [(RawElement, String)],
    root: &mut Option<RawElement>,
    element: RawElement,
) -> Result<(), ConfigError> {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(ConfigError::MalformedConfig(format!(
                "second root element <{}>",
                element.tag
            )));
        }
    }
    Ok(())
}

/// Resolves a character (`&#x41;`) or predefined (`&amp;`) entity reference.
fn resolve_reference(
    reference: &BytesRef<'_>,
    decoder: Decoder,
    text: &mut String,
) -> Result<(), ConfigError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = decoder.decode(reference)?;
    match resolve_predefined_entity(&name) {
        Some(resolved) => {
            text.push_str(resolved);
            Ok(())
        }
        None => Err(ConfigError::MalformedConfig(format!(
            "unknown entity reference &{};",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<MSPConfig version="1">
  <Backyard>
    <System-Id>0</System-Id>
    <Name>My Backyard</Name>
  </Backyard>
</MSPConfig>"#;

        let root = parse_document(xml).expect("Failed to parse document");

        assert_eq!(root.tag, "MSPConfig");
        assert_eq!(root.attributes.get("version").map(String::as_str), Some("1"));
        assert_eq!(root.text, None, "Indentation must not become text");
        assert_eq!(root.children.len(), 1);

        let backyard = &root.children[0];
        assert_eq!(backyard.tag, "Backyard");
        assert_eq!(backyard.child_text("System-Id"), Some("0"));
        assert_eq!(backyard.child_text("Name"), Some("My Backyard"));
    }

    #[test]
    fn test_parse_entities_and_cdata() {
        let xml = "<Name>Pool &amp; Spa <![CDATA[<deep>]]>&#x21;</Name>";
        let root = parse_document(xml).unwrap();
        assert_eq!(root.text.as_deref(), Some("Pool & Spa <deep>!"));
    }

    #[test]
    fn test_parse_empty_element_is_leaf() {
        let root = parse_document(r#"<Relay><Name/><Type kind="x"/></Relay>"#).unwrap();
        assert_eq!(root.children.len(), 2);
        assert!(root.children[0].is_leaf());
        assert_eq!(root.children[0].text, None);
        assert_eq!(
            root.children[1].attributes.get("kind").map(String::as_str),
            Some("x")
        );
    }

    #[test]
    fn test_parse_rejects_missing_root() {
        let result = parse_document("<?xml version=\"1.0\"?>  ");
        assert!(matches!(result, Err(ConfigError::MalformedConfig(_))));
    }

    #[test]
    fn test_parse_rejects_second_root() {
        let result = parse_document("<A/><B/>");
        assert!(matches!(result, Err(ConfigError::MalformedConfig(_))));
    }

    #[test]
    fn test_parse_rejects_unclosed_element() {
        let result = parse_document("<MSPConfig><Backyard></Backyard>");
        assert!(result.is_err(), "Expected an error, got {:?}", result);
    }

    #[test]
    fn test_parse_rejects_mismatched_end_tag() {
        let result = parse_document("<MSPConfig><Backyard></Pool></MSPConfig>");
        assert!(matches!(result, Err(ConfigError::XmlParsing(_))));
    }
}
