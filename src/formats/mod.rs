//! Metadata format registry.
//!
//! This module provides the [`MetadataFormat`] trait every disseminated format
//! implements and the [`FormatRegistry`] the OAI-PMH response layer uses to
//! resolve a requested `metadataPrefix`.
//!
//! # Supported Formats
//!
//! | Prefix | Type | Description |
//! |--------|------|-------------|
//! | `oai_dc` | [`OaiDc`](crate::dublin_core::OaiDc) | Unqualified Dublin Core (required by OAI-PMH) |
//! | `oai_kdk` | [`OaiKdk`](crate::oai_kdk::OaiKdk) | Dublin Core with DC Terms refinements and typed values |
//!
//! # Usage
//!
//! ```
//! use oaifmt::config::RepositoryConfig;
//! use oaifmt::formats::FormatRegistry;
//! use oaifmt::item::Item;
//!
//! let registry = FormatRegistry::with_defaults(&RepositoryConfig::default());
//! let format = registry.require("oai_kdk")?;
//!
//! let item = Item::builder(1).dc("Title", "Report 2020").build();
//! let metadata = FormatRegistry::metadata_element(format, &item);
//! assert_eq!(metadata.name(), "metadata");
//! # Ok::<(), oaifmt::FormatError>(())
//! ```

pub mod namespaces;
mod traits;

pub use traits::MetadataFormat;

use indexmap::IndexMap;

use crate::config::RepositoryConfig;
use crate::dublin_core::OaiDc;
use crate::error::{FormatError, Result};
use crate::item::ItemView;
use crate::oai_kdk::OaiKdk;
use crate::xml::Element;

/// Formats keyed by metadata prefix, in registration order.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    formats: IndexMap<&'static str, Box<dyn MetadataFormat>>,
}

impl FormatRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `oai_dc` and `oai_kdk`, both built from `config`.
    #[must_use]
    pub fn with_defaults(config: &RepositoryConfig) -> Self {
        let mut formats: IndexMap<&'static str, Box<dyn MetadataFormat>> = IndexMap::new();
        for format in [
            Box::new(OaiDc::new(config.clone())) as Box<dyn MetadataFormat>,
            Box::new(OaiKdk::new(config.clone())),
        ] {
            formats.insert(format.metadata_prefix(), format);
        }
        FormatRegistry { formats }
    }

    /// Register a format under its own prefix.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::DuplicatePrefix`] if the prefix is already taken.
    pub fn register(&mut self, format: Box<dyn MetadataFormat>) -> Result<()> {
        let prefix = format.metadata_prefix();
        if self.formats.contains_key(prefix) {
            return Err(FormatError::DuplicatePrefix(prefix.to_string()));
        }
        self.formats.insert(prefix, format);
        Ok(())
    }

    /// Look up a format by prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&dyn MetadataFormat> {
        self.formats.get(prefix).map(AsRef::as_ref)
    }

    /// Look up a format by prefix, failing for unknown prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownPrefix`] if nothing is registered under `prefix`.
    pub fn require(&self, prefix: &str) -> Result<&dyn MetadataFormat> {
        self.get(prefix)
            .ok_or_else(|| FormatError::UnknownPrefix(prefix.to_string()))
    }

    /// Registered formats in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &dyn MetadataFormat> {
        self.formats.values().map(AsRef::as_ref)
    }

    /// Registered prefixes in registration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Number of registered formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether no formats are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Build the `<metadata>` element of one record.
    #[must_use]
    pub fn metadata_element(format: &dyn MetadataFormat, item: &dyn ItemView) -> Element {
        let mut metadata = Element::new("metadata");
        format.append_metadata(item, &mut metadata);
        tracing::trace!(
            item_id = item.id(),
            prefix = format.metadata_prefix(),
            "Rendered metadata"
        );
        metadata
    }
}

// ============================================================================
// Helpers shared by the Dublin Core formats
// ============================================================================

/// Whether a stored value produces no output.
///
/// Covers the single-space "present but blank" placeholder as well as any
/// other whitespace-only text.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Read element texts, logging and swallowing repository failures.
pub(crate) fn read_texts<'a>(
    item: &'a dyn ItemView,
    element_set: &str,
    element: &str,
) -> Vec<&'a str> {
    match item.element_texts(element_set, element) {
        Ok(texts) => texts,
        Err(e) => {
            tracing::warn!(
                item_id = item.id(),
                element_set,
                element,
                error = %e,
                "Skipping unreadable element texts"
            );
            Vec::new()
        },
    }
}

/// Append a leaf element with text and an optional `xsi:type`.
pub(crate) fn append_leaf(parent: &mut Element, name: &str, text: &str, xsi_type: Option<&str>) {
    let mut element = Element::leaf(name, text);
    if let Some(xsi_type) = xsi_type {
        element.set_attribute("xsi:type", xsi_type);
    }
    parent.append_child(element);
}

/// Create the `oai_dc:dc` root with its namespace and schema attributes.
///
/// Declarations are plain attributes set once here, never repeated on leaves.
pub(crate) fn dublin_core_root(namespace: &str, schema: &str, with_dcterms: bool) -> Element {
    let mut root = Element::new(namespaces::OAI_DC_ROOT);
    root.set_attribute("xmlns:oai_dc", namespace);
    root.set_attribute("xmlns:dc", namespaces::DC);
    if with_dcterms {
        root.set_attribute("xmlns:dcterms", namespaces::DCTERMS);
    }
    root.set_attribute("xmlns:xsi", namespaces::XSI);
    root.set_attribute("xsi:schemaLocation", format!("{namespace} {schema}"));
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[derive(Debug)]
    struct Marc21Stub;

    impl MetadataFormat for Marc21Stub {
        fn metadata_prefix(&self) -> &'static str {
            "marc21"
        }

        fn metadata_namespace(&self) -> &'static str {
            "http://www.loc.gov/MARC21/slim"
        }

        fn metadata_schema(&self) -> &'static str {
            "http://www.loc.gov/standards/marcxml/schema/MARC21slim.xsd"
        }

        fn append_metadata(&self, _item: &dyn ItemView, parent: &mut Element) {
            parent.append_child(Element::new("record"));
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = FormatRegistry::with_defaults(&RepositoryConfig::default());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.prefixes().collect::<Vec<_>>(), vec!["oai_dc", "oai_kdk"]);
        assert!(registry.get("oai_kdk").is_some());
        assert!(registry.get("marc21").is_none());
    }

    #[test]
    fn test_register_custom_format() {
        let mut registry = FormatRegistry::with_defaults(&RepositoryConfig::default());
        registry.register(Box::new(Marc21Stub)).unwrap();

        assert_eq!(registry.len(), 3);
        let format = registry.require("marc21").unwrap();
        assert_eq!(
            format.metadata_namespace(),
            "http://www.loc.gov/MARC21/slim"
        );
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let mut registry = FormatRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(Marc21Stub)).unwrap();

        let result = registry.register(Box::new(Marc21Stub));
        assert!(matches!(result, Err(FormatError::DuplicatePrefix(p)) if p == "marc21"));
    }

    #[test]
    fn test_unknown_prefix() {
        let registry = FormatRegistry::new();
        let result = registry.require("oai_ead");
        assert!(matches!(result, Err(FormatError::UnknownPrefix(p)) if p == "oai_ead"));
    }

    #[test]
    fn test_metadata_element_wraps_one_root() {
        let registry = FormatRegistry::with_defaults(&RepositoryConfig::default());
        let item = Item::builder(1).dc("Title", "T").build();

        for format in registry.formats() {
            let metadata = FormatRegistry::metadata_element(format, &item);
            assert_eq!(metadata.name(), "metadata");
            assert_eq!(metadata.children().count(), 1);
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(" "));
        assert!(is_blank(""));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }
}
