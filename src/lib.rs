#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # oaifmt: OAI-PMH Metadata Formats
//!
//! Metadata format mapping and XML serialization for OAI-PMH repositories.
//! Each format turns a repository item into the `<metadata>` payload of an
//! OAI-PMH record.
//!
//! ## Quick Start
//!
//! ### Rendering a Record
//!
//! ```
//! use oaifmt::{FormatRegistry, Item, RepositoryConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RepositoryConfig::new().with_public_base_url("https://museo.example.fi");
//! let registry = FormatRegistry::with_defaults(&config);
//!
//! let item = Item::builder(42)
//!     .dc("Title", "Kalastajan vaimo")
//!     .dc("Subject", "84.2")
//!     .item_type("Text")
//!     .build();
//!
//! let format = registry.require("oai_kdk")?;
//! let xml = FormatRegistry::metadata_element(format, &item).to_xml_string()?;
//! assert!(xml.contains(
//!     r#"<dc:identifier xsi:type="coolUri">https://museo.example.fi/items/show/42</dc:identifier>"#
//! ));
//! # Ok(())
//! # }
//! ```
//!
//! ### Plugging In a Repository
//!
//! Formats read items through the [`ItemView`] trait, so any storage layer can
//! supply them. [`Item`] is the in-memory implementation.
//!
//! ## Modules
//!
//! - [`formats`]: The [`MetadataFormat`] trait and [`FormatRegistry`]
//! - [`oai_kdk`]: Extended Dublin Core with DC Terms refinements
//! - [`dublin_core`]: Unqualified Dublin Core (`oai_dc`)
//! - [`item`]: Repository item access
//! - [`vocabulary`]: Field tables and value normalization
//! - [`config`]: Repository configuration
//! - [`xml`]: Owned XML element tree and serialization
//! - [`batch`]: Parallel rendering of many records
//! - [`error`]: Error types and result type

pub mod batch;
pub mod config;
pub mod dublin_core;
pub mod error;
/// Metadata format trait and registry.
///
/// See the [`formats`] module documentation for the supported prefixes.
pub mod formats;
pub mod item;
pub mod oai_kdk;
pub mod vocabulary;
pub mod xml;

pub use config::{ClassificationScheme, RepositoryConfig};
pub use dublin_core::OaiDc;
pub use error::{FormatError, Result};
pub use formats::{FormatRegistry, MetadataFormat};
pub use item::{Item, ItemView};
pub use oai_kdk::OaiKdk;
pub use xml::Element;
