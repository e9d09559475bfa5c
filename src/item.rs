//! Read-only item views supplied by the item repository.
//!
//! Metadata formats never touch storage directly. They read everything through
//! the [`ItemView`] trait: element texts grouped by element set and element
//! name, the structural item type, tags and attached files.
//!
//! [`Item`] is an in-memory implementation used by tests, benchmarks and
//! callers that already hold item data (for example, loaded from JSON).
//!
//! # Examples
//!
//! ```
//! use oaifmt::item::{Item, ItemView, DUBLIN_CORE};
//!
//! let item = Item::builder(42)
//!     .element_text(DUBLIN_CORE, "Title", "Report 2020")
//!     .element_text(DUBLIN_CORE, "Subject", "628.1")
//!     .element_text(DUBLIN_CORE, "Subject", "water quality")
//!     .item_type("Still Image")
//!     .build();
//!
//! assert_eq!(item.element_texts(DUBLIN_CORE, "Subject")?, vec!["628.1", "water quality"]);
//! # Ok::<(), oaifmt::FormatError>(())
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Name of the Dublin Core element set in the item store.
pub const DUBLIN_CORE: &str = "Dublin Core";

/// Read access to one stored item.
///
/// Lookups that hit the repository are fallible. A format that gets an error
/// back skips the affected output and carries on with the rest of the item.
pub trait ItemView {
    /// Stable internal item ID.
    fn id(&self) -> u64;

    /// All texts stored for `element` within `element_set`, in stored order.
    ///
    /// Returns an empty vector when the element has no values.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot read the item's texts.
    fn element_texts(&self, element_set: &str, element: &str) -> Result<Vec<&str>>;

    /// Name of the item's structural item type, if it has one.
    fn item_type_name(&self) -> Option<&str>;

    /// Free-text tags attached to the item.
    fn tags(&self) -> &[String];

    /// Files attached to the item.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot list the item's files.
    fn files(&self) -> Result<&[ItemFile]>;
}

/// A derivative rendition of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Derivative {
    /// The file as uploaded
    Original,
    /// Full-size display image
    Fullsize,
    /// Thumbnail image
    Thumbnail,
    /// Square-cropped thumbnail image
    SquareThumbnail,
}

impl Derivative {
    /// Directory name used for this derivative in repository web paths.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Fullsize => "fullsize",
            Self::Thumbnail => "thumbnails",
            Self::SquareThumbnail => "square_thumbnails",
        }
    }
}

/// A file attached to an item, with the web paths of its renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFile {
    /// Original file name
    pub filename: String,
    /// Web-accessible path per rendition, in insertion order
    #[serde(default)]
    pub derivatives: IndexMap<Derivative, String>,
}

impl ItemFile {
    /// Create a file with no renditions.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        ItemFile {
            filename: filename.into(),
            derivatives: IndexMap::new(),
        }
    }

    /// Builder method recording the web path of a rendition.
    #[must_use]
    pub fn with_derivative(mut self, derivative: Derivative, web_path: impl Into<String>) -> Self {
        self.derivatives.insert(derivative, web_path.into());
        self
    }

    /// Whether a thumbnail rendition was generated for this file.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        self.derivatives.contains_key(&Derivative::Thumbnail)
    }

    /// Web path of a rendition.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingDerivative`] if the rendition is absent.
    pub fn web_path(&self, derivative: Derivative) -> Result<&str> {
        self.derivatives
            .get(&derivative)
            .map(String::as_str)
            .ok_or_else(|| {
                FormatError::MissingDerivative(format!(
                    "{} has no {} rendition",
                    self.filename,
                    derivative.as_str()
                ))
            })
    }

    /// Path handed to harvesters: the fullsize rendition, else the original.
    ///
    /// # Errors
    ///
    /// Returns an error if neither rendition is recorded.
    pub fn display_path(&self) -> Result<&str> {
        self.web_path(Derivative::Fullsize)
            .or_else(|_| self.web_path(Derivative::Original))
    }
}

/// A single stored element text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementText {
    /// Element set name (e.g. "Dublin Core")
    pub element_set: String,
    /// Element name within the set (e.g. "Title")
    pub element: String,
    /// Stored text, unmodified
    pub text: String,
}

/// In-memory item.
///
/// Element texts are kept in insertion order, so repeated elements come back
/// in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Internal item ID
    pub id: u64,
    /// Stored element texts
    #[serde(default)]
    pub element_texts: Vec<ElementText>,
    /// Structural item type name
    #[serde(default)]
    pub item_type: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Attached files
    #[serde(default)]
    pub files: Vec<ItemFile>,
}

impl Item {
    /// Create an empty item.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Item {
            id,
            ..Item::default()
        }
    }

    /// Create a builder for fluently constructing items.
    #[must_use]
    pub fn builder(id: u64) -> ItemBuilder {
        ItemBuilder {
            item: Item::new(id),
        }
    }

    /// Append an element text.
    pub fn add_element_text(&mut self, element_set: &str, element: &str, text: &str) {
        self.element_texts.push(ElementText {
            element_set: element_set.to_string(),
            element: element.to_string(),
            text: text.to_string(),
        });
    }

    /// Parse an item from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an item.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ItemView for Item {
    fn id(&self) -> u64 {
        self.id
    }

    fn element_texts(&self, element_set: &str, element: &str) -> Result<Vec<&str>> {
        Ok(self
            .element_texts
            .iter()
            .filter(|t| t.element_set == element_set && t.element == element)
            .map(|t| t.text.as_str())
            .collect())
    }

    fn item_type_name(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn files(&self) -> Result<&[ItemFile]> {
        Ok(&self.files)
    }
}

/// Builder for [`Item`].
#[derive(Debug)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    /// Add an element text
    #[must_use]
    pub fn element_text(mut self, element_set: &str, element: &str, text: &str) -> Self {
        self.item.add_element_text(element_set, element, text);
        self
    }

    /// Add a Dublin Core element text
    #[must_use]
    pub fn dc(self, element: &str, text: &str) -> Self {
        self.element_text(DUBLIN_CORE, element, text)
    }

    /// Set the structural item type
    #[must_use]
    pub fn item_type(mut self, name: &str) -> Self {
        self.item.item_type = Some(name.to_string());
        self
    }

    /// Add a tag
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.item.tags.push(tag.to_string());
        self
    }

    /// Attach a file
    #[must_use]
    pub fn file(mut self, file: ItemFile) -> Self {
        self.item.files.push(file);
        self
    }

    /// Build the item
    #[must_use]
    pub fn build(self) -> Item {
        self.item
    }
}
