//! Extended Dublin Core (`oai_kdk`) metadata format.
//!
//! `oai_kdk` disseminates the full Dublin Core field set of an item: the
//! unqualified elements plus DC Terms refinements, with `xsi:type` hints on
//! values that follow a known scheme. It shares the `oai_dc` container
//! namespace and schema, so harvesters that validate `oai_dc` accept it.
//!
//! Output is emitted in a fixed order:
//!
//! 1. plain unqualified elements (title, creator, description, ...)
//! 2. subjects, classification codes typed with the configured scheme
//! 3. languages, normalized to ISO 639-1
//! 4. URN identifiers (`xsi:type="URI"`), then one landing-page URL
//!    (`xsi:type="coolUri"`)
//! 5. types, translated to the DCMI Type Vocabulary
//! 6. DC Terms refinements
//! 7. file URLs (`xsi:type="file"`) when file exposure is enabled
//!
//! # Examples
//!
//! ```
//! use oaifmt::config::RepositoryConfig;
//! use oaifmt::formats::MetadataFormat;
//! use oaifmt::item::Item;
//! use oaifmt::oai_kdk::OaiKdk;
//! use oaifmt::xml::Element;
//!
//! let item = Item::builder(7)
//!     .dc("Subject", "628.1")
//!     .dc("Language", "suomi")
//!     .item_type("Still Image")
//!     .build();
//!
//! let format = OaiKdk::new(RepositoryConfig::default());
//! let mut metadata = Element::new("metadata");
//! format.append_metadata(&item, &mut metadata);
//!
//! let xml = metadata.to_xml_string()?;
//! assert!(xml.contains(r#"<dc:subject xsi:type="dcterms:YKL">628.1</dc:subject>"#));
//! assert!(xml.contains("<dc:language>fi</dc:language>"));
//! assert!(xml.contains("<dc:type>Image</dc:type>"));
//! # Ok::<(), oaifmt::FormatError>(())
//! ```

use crate::config::RepositoryConfig;
use crate::formats::namespaces::{OAI_DC, OAI_DC_SCHEMA};
use crate::formats::{append_leaf, dublin_core_root, is_blank, read_texts, MetadataFormat};
use crate::item::ItemView;
use crate::vocabulary::{
    is_classification_code, is_urn, normalize_language, translate_item_type, DC_TERMS, IDENTIFIER,
    LANGUAGE, PLAIN_ELEMENTS, SUBJECT, TYPE,
};
use crate::xml::Element;

/// `xsi:type` of stored URN identifiers.
pub const URN_TYPE: &str = "URI";

/// `xsi:type` of the item landing-page identifier.
pub const CANONICAL_URI_TYPE: &str = "coolUri";

/// `xsi:type` of file identifiers.
pub const FILE_TYPE: &str = "file";

/// The `oai_kdk` metadata format.
#[derive(Debug, Clone, Default)]
pub struct OaiKdk {
    config: RepositoryConfig,
}

impl OaiKdk {
    /// OAI-PMH metadata prefix.
    pub const METADATA_PREFIX: &'static str = "oai_kdk";

    /// Create the format with its repository configuration.
    #[must_use]
    pub fn new(config: RepositoryConfig) -> Self {
        OaiKdk { config }
    }

    /// The configuration this format was built with.
    #[must_use]
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Build the `oai_dc:dc` subtree for one item.
    #[must_use]
    pub fn item_to_element(&self, item: &dyn ItemView) -> Element {
        let mut root = dublin_core_root(OAI_DC, OAI_DC_SCHEMA, true);

        append_plain_elements(item, &mut root);
        self.append_subjects(item, &mut root);
        self.append_languages(item, &mut root);
        self.append_identifiers(item, &mut root);
        append_types(item, &mut root);
        append_dc_terms(item, &mut root);
        if self.config.expose_files {
            self.append_files(item, &mut root);
        }

        root
    }

    fn append_subjects(&self, item: &dyn ItemView, root: &mut Element) {
        let scheme = self.config.classification_scheme.xsi_type();
        for subject in read_texts(item, SUBJECT.element_set, SUBJECT.element) {
            let subject = subject.trim();
            if subject.is_empty() {
                continue;
            }
            let xsi_type = is_classification_code(subject).then_some(scheme);
            append_leaf(root, "dc:subject", subject, xsi_type);
        }

        if self.config.expose_tags {
            for tag in item.tags().iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                append_leaf(root, "dc:subject", tag, None);
            }
        }
    }

    fn append_languages(&self, item: &dyn ItemView, root: &mut Element) {
        for language in read_texts(item, LANGUAGE.element_set, LANGUAGE.element) {
            let language = language.trim();
            if language.is_empty() {
                continue;
            }
            let code = normalize_language(language, &self.config.fallback_language);
            append_leaf(root, "dc:language", &code, None);
        }
    }

    fn append_identifiers(&self, item: &dyn ItemView, root: &mut Element) {
        for identifier in read_texts(item, IDENTIFIER.element_set, IDENTIFIER.element) {
            let identifier = identifier.trim();
            if is_urn(identifier) {
                append_leaf(root, "dc:identifier", identifier, Some(URN_TYPE));
            }
        }

        // Once per item, whatever is stored.
        let landing_page = self.config.record_url(item.id());
        append_leaf(root, "dc:identifier", &landing_page, Some(CANONICAL_URI_TYPE));
    }

    fn append_files(&self, item: &dyn ItemView, root: &mut Element) {
        let files = match item.files() {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(item_id = item.id(), error = %e, "Skipping unreadable files");
                return;
            },
        };

        for file in files.iter().filter(|f| f.has_thumbnail()) {
            match file.display_path() {
                Ok(path) if !is_blank(path) => {
                    let url = self.config.absolute_url(path.trim());
                    append_leaf(root, "dc:identifier", &url, Some(FILE_TYPE));
                },
                Ok(_) => {},
                Err(e) => {
                    tracing::warn!(item_id = item.id(), error = %e, "Skipping file without a display path");
                },
            }
        }
    }
}

impl MetadataFormat for OaiKdk {
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
        parent.append_child(self.item_to_element(item));
    }
}

fn append_plain_elements(item: &dyn ItemView, root: &mut Element) {
    for field in &PLAIN_ELEMENTS {
        let name = format!("dc:{}", field.key);
        for text in read_texts(item, field.element_set, field.element) {
            if !is_blank(text) {
                append_leaf(root, &name, text, None);
            }
        }
    }
}

fn append_types(item: &dyn ItemView, root: &mut Element) {
    let explicit: Vec<&str> = read_texts(item, TYPE.element_set, TYPE.element)
        .into_iter()
        .filter(|t| !is_blank(t))
        .collect();

    if explicit.is_empty() {
        if let Some(name) = item.item_type_name().filter(|n| !is_blank(n)) {
            append_leaf(root, "dc:type", &translate_item_type(name), None);
        }
        return;
    }

    for dc_type in explicit {
        append_leaf(root, "dc:type", &translate_item_type(dc_type), None);
    }
}

fn append_dc_terms(item: &dyn ItemView, root: &mut Element) {
    for term in &DC_TERMS {
        let name = format!("dcterms:{}", term.key);
        for text in read_texts(item, term.element_set, term.element) {
            if !is_blank(text) {
                append_leaf(root, &name, text, None);
            }
        }
    }
}
