//! Owned XML element tree used as the output of metadata formats.
//!
//! Formats append their subtree onto a caller-supplied [`Element`] (normally the
//! `<metadata>` node of an OAI-PMH record). The tree is serialized with
//! `quick-xml`'s event writer, so every attribute value and text node is escaped
//! by the writer and no markup is ever built by string concatenation.
//!
//! Namespace prefixes are part of element names (`dc:title`) and namespace
//! declarations are ordinary attributes (`xmlns:dc`). This keeps declarations
//! exactly where a format put them: once, on its root element.
//!
//! # Examples
//!
//! ```
//! use oaifmt::xml::Element;
//!
//! let mut root = Element::new("oai_dc:dc");
//! root.set_attribute("xmlns:dc", "http://purl.org/dc/elements/1.1/");
//! root.append_child(Element::leaf("dc:title", "Fish & Chips"));
//!
//! let xml = root.to_xml_string()?;
//! assert!(xml.contains("<dc:title>Fish &amp; Chips</dc:title>"));
//! # Ok::<(), oaifmt::FormatError>(())
//! ```

use std::borrow::Cow;
use std::io::Write;

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{FormatError, Result};

/// A child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Unescaped character data
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given (possibly prefixed) name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element holding a single text node.
    #[must_use]
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Element::new(name);
        element.append_text(text);
        element
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Element name including any namespace prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing an existing value of the same name.
    ///
    /// Insertion order of first assignment is the serialization order.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over attributes in serialization order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append a text node.
    ///
    /// The text is escaped on serialization, and characters XML 1.0 forbids
    /// are written as U+FFFD.
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// All child nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children().find(|child| child.name == name)
    }

    /// All child elements with the given name.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children().filter(move |child| child.name == name)
    }

    /// Concatenated direct text content of this element.
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Write this element and its descendants as XML events.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), &*xml_chars(value)));
        }

        if self.children.is_empty() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_to(writer)?,
                Node::Text(text) => {
                    write_event(writer, Event::Text(BytesText::new(&xml_chars(text))))?;
                },
            }
        }
        write_event(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }

    /// Serialize this element as a compact XML fragment (no declaration).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Serialize this element as an indented XML fragment (no declaration).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_xml_string_pretty(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Serialize this element as a standalone document with an XML declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_xml_document(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        self.write_to(&mut writer)?;
        into_string(writer)
    }
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replace characters XML 1.0 forbids with U+FFFD.
fn xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
            .collect(),
    )
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| FormatError::XmlWrite(e.to_string()))
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| FormatError::XmlWrite(format!("Serialized XML is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_serialization() {
        let leaf = Element::leaf("dc:title", "Report 2020");
        assert_eq!(
            leaf.to_xml_string().unwrap(),
            "<dc:title>Report 2020</dc:title>"
        );
    }

    #[test]
    fn test_empty_element_is_self_closing() {
        let element = Element::new("metadata");
        assert_eq!(element.to_xml_string().unwrap(), "<metadata/>");
    }

    #[test]
    fn test_text_and_attribute_escaping() {
        let element = Element::leaf("dc:title", "Title with <brackets> & ampersand")
            .with_attribute("xsi:type", "a\"b");
        let xml = element.to_xml_string().unwrap();

        assert!(xml.contains("&lt;brackets&gt;"));
        assert!(xml.contains("&amp; ampersand"));
        assert!(xml.contains("xsi:type=\"a&quot;b\""));
    }

    #[test]
    fn test_illegal_characters_replaced() {
        let element = Element::leaf("dc:title", "Bad\u{1}char\u{FFFE}\u{B}end\tok\u{10400}")
            .with_attribute("note", "x\u{0}y\u{FFFF}");
        let xml = element.to_xml_string().unwrap();

        assert_eq!(
            xml,
            "<dc:title note=\"x\u{FFFD}y\u{FFFD}\">Bad\u{FFFD}char\u{FFFD}\u{FFFD}end\tok\u{10400}</dc:title>"
        );
        // Stored text is untouched.
        assert_eq!(element.text(), "Bad\u{1}char\u{FFFE}\u{B}end\tok\u{10400}");
    }

    #[test]
    fn test_attribute_order_and_replacement() {
        let mut element = Element::new("root");
        element.set_attribute("b", "1");
        element.set_attribute("a", "2");
        element.set_attribute("b", "3");

        let attributes: Vec<_> = element.attributes().collect();
        assert_eq!(attributes, vec![("b", "3"), ("a", "2")]);
    }

    #[test]
    fn test_find_and_text() {
        let mut root = Element::new("root");
        root.append_child(Element::leaf("a", "one"));
        root.append_child(Element::leaf("b", "two"));
        root.append_child(Element::leaf("a", "three"));

        assert_eq!(root.find("b").map(Element::text), Some("two".to_string()));
        let texts: Vec<String> = root.find_all("a").map(Element::text).collect();
        assert_eq!(texts, vec!["one", "three"]);
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn test_nested_serialization() {
        let mut root = Element::new("metadata");
        let mut dc = Element::new("oai_dc:dc");
        dc.append_child(Element::leaf("dc:subject", "628.1").with_attribute("xsi:type", "dcterms:YKL"));
        root.append_child(dc);

        assert_eq!(
            root.to_xml_string().unwrap(),
            "<metadata><oai_dc:dc><dc:subject xsi:type=\"dcterms:YKL\">628.1</dc:subject></oai_dc:dc></metadata>"
        );
    }

    #[test]
    fn test_document_has_declaration() {
        let xml = Element::leaf("root", "x").to_xml_document().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<root>x</root>"));
    }

    #[test]
    fn test_pretty_output_keeps_text_inline() {
        let mut root = Element::new("root");
        root.append_child(Element::leaf("child", "value"));
        let xml = root.to_xml_string_pretty().unwrap();

        assert!(xml.contains("\n  <child>value</child>"));
    }
}
