//! Unqualified Dublin Core (`oai_dc`) metadata format.
//!
//! Every OAI-PMH repository must disseminate `oai_dc`. This module maps an
//! item's stored Dublin Core element texts onto the 15-element Dublin Core
//! Metadata Element Set (DCMES):
//! - **Title** (dc:title)
//! - **Creator** (dc:creator)
//! - **Subject** (dc:subject)
//! - **Description** (dc:description)
//! - **Publisher** (dc:publisher)
//! - **Contributor** (dc:contributor)
//! - **Date** (dc:date)
//! - **Type** (dc:type)
//! - **Format** (dc:format)
//! - **Identifier** (dc:identifier)
//! - **Source** (dc:source)
//! - **Language** (dc:language)
//! - **Relation** (dc:relation)
//! - **Coverage** (dc:coverage)
//! - **Rights** (dc:rights)
//!
//! Values are copied verbatim; no vocabulary translation is applied. The
//! identifier run always ends with the item's landing-page URL, followed by
//! file URLs when file exposure is enabled.
//!
//! # API Patterns
//!
//! Two conversion approaches are provided:
//! - **Intermediate struct**: [`item_to_dublin_core()`] returns a `DublinCoreRecord` struct
//!   for programmatic access to the 15 elements
//! - **Format trait**: [`OaiDc`] implements [`MetadataFormat`] for use in a
//!   [`FormatRegistry`](crate::formats::FormatRegistry)
//!
//! # Examples
//!
//! ```
//! use oaifmt::config::RepositoryConfig;
//! use oaifmt::dublin_core;
//! use oaifmt::item::Item;
//!
//! let item = Item::builder(3).dc("Title", "Kalevala").build();
//! let dc = dublin_core::item_to_dublin_core(&item, &RepositoryConfig::default());
//! assert_eq!(dc.title, vec!["Kalevala"]);
//! assert_eq!(dc.identifier, vec!["http://localhost/items/show/3"]);
//! ```

use crate::config::RepositoryConfig;
use crate::error::Result;
use crate::formats::namespaces::{OAI_DC, OAI_DC_SCHEMA};
use crate::formats::{append_leaf, dublin_core_root, is_blank, read_texts, MetadataFormat};
use crate::item::{Derivative, ItemView};
use crate::vocabulary::DCMES_ELEMENTS;
use crate::xml::Element;

/// Dublin Core metadata record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DublinCoreRecord {
    /// dc:title - Title of the resource
    pub title: Vec<String>,
    /// dc:creator - Entity responsible for the resource
    pub creator: Vec<String>,
    /// dc:subject - Topic of the resource
    pub subject: Vec<String>,
    /// dc:description - Account of the resource
    pub description: Vec<String>,
    /// dc:publisher - Entity responsible for making the resource available
    pub publisher: Vec<String>,
    /// dc:contributor - Entity responsible for making contributions to the resource
    pub contributor: Vec<String>,
    /// dc:date - Point or period of time associated with the resource
    pub date: Vec<String>,
    /// dc:type - Nature or genre of the resource
    pub dc_type: Vec<String>,
    /// dc:format - File format, physical medium, or dimensions of the resource
    pub format: Vec<String>,
    /// dc:identifier - Unambiguous reference to the resource
    pub identifier: Vec<String>,
    /// dc:source - Related resource from which the resource is derived
    pub source: Vec<String>,
    /// dc:language - Language of the resource
    pub language: Vec<String>,
    /// dc:relation - Related resource
    pub relation: Vec<String>,
    /// dc:coverage - Spatial or temporal topic of the resource
    pub coverage: Vec<String>,
    /// dc:rights - Information about rights held in and over the resource
    pub rights: Vec<String>,
}

impl DublinCoreRecord {
    /// Values of an element by its DCMES name (`title`, `type`, ...).
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&[String]> {
        let values = match name {
            "title" => &self.title,
            "creator" => &self.creator,
            "subject" => &self.subject,
            "description" => &self.description,
            "publisher" => &self.publisher,
            "contributor" => &self.contributor,
            "date" => &self.date,
            "type" => &self.dc_type,
            "format" => &self.format,
            "identifier" => &self.identifier,
            "source" => &self.source,
            "language" => &self.language,
            "relation" => &self.relation,
            "coverage" => &self.coverage,
            "rights" => &self.rights,
            _ => return None,
        };
        Some(values)
    }

    fn values_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        let values = match name {
            "title" => &mut self.title,
            "creator" => &mut self.creator,
            "subject" => &mut self.subject,
            "description" => &mut self.description,
            "publisher" => &mut self.publisher,
            "contributor" => &mut self.contributor,
            "date" => &mut self.date,
            "type" => &mut self.dc_type,
            "format" => &mut self.format,
            "identifier" => &mut self.identifier,
            "source" => &mut self.source,
            "language" => &mut self.language,
            "relation" => &mut self.relation,
            "coverage" => &mut self.coverage,
            "rights" => &mut self.rights,
            _ => return None,
        };
        Some(values)
    }
}

/// Convert an item to Dublin Core metadata.
///
/// Blank values (including the single-space placeholder) are skipped.
#[must_use]
pub fn item_to_dublin_core(item: &dyn ItemView, config: &RepositoryConfig) -> DublinCoreRecord {
    let mut dc = DublinCoreRecord::default();

    for field in &DCMES_ELEMENTS {
        let Some(values) = dc.values_mut(field.key) else {
            continue;
        };
        values.extend(
            read_texts(item, field.element_set, field.element)
                .into_iter()
                .filter(|text| !is_blank(text))
                .map(str::to_string),
        );
    }

    dc.identifier.push(config.record_url(item.id()));
    if config.expose_files {
        extract_file_identifiers(item, config, &mut dc);
    }

    dc
}

fn extract_file_identifiers(item: &dyn ItemView, config: &RepositoryConfig, dc: &mut DublinCoreRecord) {
    let files = match item.files() {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(item_id = item.id(), error = %e, "Skipping unreadable files");
            return;
        },
    };

    for file in files {
        match file.web_path(Derivative::Original) {
            Ok(path) if !is_blank(path) => dc.identifier.push(config.absolute_url(path.trim())),
            Ok(_) => {},
            Err(e) => tracing::warn!(item_id = item.id(), error = %e, "Skipping file without an original"),
        }
    }
}

/// Serialize a Dublin Core record to an `oai_dc:dc` element.
#[must_use]
pub fn dublin_core_to_element(dc: &DublinCoreRecord) -> Element {
    let mut root = dublin_core_root(OAI_DC, OAI_DC_SCHEMA, false);
    for field in &DCMES_ELEMENTS {
        let name = format!("dc:{}", field.key);
        for value in dc.values(field.key).unwrap_or_default() {
            append_leaf(&mut root, &name, value, None);
        }
    }
    root
}

/// Convert an item directly to an `oai_dc` XML fragment.
///
/// # Errors
///
/// Returns an error if the fragment cannot be serialized.
pub fn item_to_dublin_core_xml(item: &dyn ItemView, config: &RepositoryConfig) -> Result<String> {
    let dc = item_to_dublin_core(item, config);
    dublin_core_to_element(&dc).to_xml_string()
}

/// The `oai_dc` metadata format.
#[derive(Debug, Clone, Default)]
pub struct OaiDc {
    config: RepositoryConfig,
}

impl OaiDc {
    /// OAI-PMH metadata prefix.
    pub const METADATA_PREFIX: &'static str = "oai_dc";

    /// Create the format with its repository configuration.
    #[must_use]
    pub fn new(config: RepositoryConfig) -> Self {
        OaiDc { config }
    }
}

impl MetadataFormat for OaiDc {
    fn metadata_prefix(&self) -> &'static str {
        Self::METADATA_PREFIX
    }

    fn metadata_namespace(&self) -> &'static str {
        OAI_DC
    }

    fn metadata_schema(&self) -> &'static str {
        OAI_DC_SCHEMA
    }

    fn append_metadata(&self, item: &dyn ItemView, parent: &mut Element) {
        let dc = item_to_dublin_core(item, &self.config);
        parent.append_child(dublin_core_to_element(&dc));
    }
}
