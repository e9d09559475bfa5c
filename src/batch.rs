//! Parallel metadata rendering using Rayon.
//!
//! This module provides [`render_batch`], which builds the `<metadata>`
//! element of many items at once on Rayon's work-stealing thread pool. Each
//! item gets its own independent fragment, so no output tree is shared between
//! threads. The fragments come back in input order, ready for a single-writer
//! response serializer to merge.
//!
//! # Examples
//!
//! ```
//! use oaifmt::batch::render_batch;
//! use oaifmt::config::RepositoryConfig;
//! use oaifmt::formats::FormatRegistry;
//! use oaifmt::item::Item;
//!
//! let registry = FormatRegistry::with_defaults(&RepositoryConfig::default());
//! let items: Vec<Item> = (1..=3).map(Item::new).collect();
//!
//! let fragments = render_batch(registry.require("oai_kdk")?, &items);
//! assert_eq!(fragments.len(), 3);
//! # Ok::<(), oaifmt::FormatError>(())
//! ```

use rayon::prelude::*;

use crate::error::Result;
use crate::formats::{FormatRegistry, MetadataFormat};
use crate::item::ItemView;
use crate::xml::Element;

/// Render the `<metadata>` element of every item in parallel.
///
/// Formats never fail, so one item with unreadable data only loses that
/// item's affected fields; the rest of the batch is unaffected.
#[must_use]
pub fn render_batch<I>(format: &dyn MetadataFormat, items: &[I]) -> Vec<Element>
where
    I: ItemView + Sync,
{
    let fragments: Vec<Element> = items
        .par_iter()
        .map(|item| FormatRegistry::metadata_element(format, item))
        .collect();

    tracing::debug!(
        prefix = format.metadata_prefix(),
        count = fragments.len(),
        "Rendered metadata batch"
    );
    fragments
}

/// Render every item in parallel and serialize each fragment.
///
/// # Errors
///
/// Returns the first serialization error encountered.
pub fn render_batch_xml<I>(format: &dyn MetadataFormat, items: &[I]) -> Result<Vec<String>>
where
    I: ItemView + Sync,
{
    items
        .par_iter()
        .map(|item| FormatRegistry::metadata_element(format, item).to_xml_string())
        .collect()
}
