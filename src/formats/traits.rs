//! The metadata format trait.
//!
//! Every metadata format a repository can disseminate implements
//! [`MetadataFormat`], allowing the record builder to treat formats uniformly.
//!
//! # Design Rationale
//!
//! The trait is designed to:
//! - Expose the three identity values needed for protocol negotiation
//!   independently of any item
//! - Append output onto a caller-owned tree instead of returning a string
//! - Be object-safe, so formats can live in a prefix-keyed registry
//! - Never fail: one item's bad data must not abort a multi-record response
//!
//! # Example
//!
//! ```ignore
//! use oaifmt::formats::MetadataFormat;
//! use oaifmt::xml::Element;
//!
//! fn metadata_for(format: &dyn MetadataFormat, item: &dyn ItemView) -> Element {
//!     let mut metadata = Element::new("metadata");
//!     format.append_metadata(item, &mut metadata);
//!     metadata
//! }
//! ```

use std::fmt;

use crate::item::ItemView;
use crate::xml::Element;

/// A metadata format that can be disseminated over OAI-PMH.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Return constants from the identity accessors
/// - Append exactly one root element per call to `append_metadata`
/// - Omit absent fields silently and log (not propagate) item read failures
/// - Hold no mutable state, so one instance can serve concurrent requests
pub trait MetadataFormat: fmt::Debug + Send + Sync {
    /// Metadata prefix used in protocol requests (e.g. `oai_dc`).
    fn metadata_prefix(&self) -> &'static str;

    /// XML namespace of the format's root element.
    fn metadata_namespace(&self) -> &'static str;

    /// XML Schema location of the format.
    fn metadata_schema(&self) -> &'static str;

    /// Append the metadata subtree for `item` as a child of `parent`.
    fn append_metadata(&self, item: &dyn ItemView, parent: &mut Element);

    /// Value for the root's `xsi:schemaLocation` attribute.
    fn schema_location(&self) -> String {
        format!("{} {}", self.metadata_namespace(), self.metadata_schema())
    }
}
