//! Error types for metadata format operations.
//!
//! This module provides the [`FormatError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Metadata formats themselves never fail: [`MetadataFormat::append_metadata`]
//! logs and skips anything it cannot read from an item. Errors surface from
//! the edges instead (registry lookups, item views, configuration loading and
//! XML serialization).
//!
//! [`MetadataFormat::append_metadata`]: crate::formats::MetadataFormat::append_metadata

use thiserror::Error;

/// Error type for all metadata format operations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// No format is registered under the requested metadata prefix.
    #[error("Unknown metadata prefix: {0}")]
    UnknownPrefix(String),

    /// A format with the same metadata prefix is already registered.
    #[error("Duplicate metadata prefix: {0}")]
    DuplicatePrefix(String),

    /// The item repository could not supply data for an item.
    #[error("Item {item_id}: {message}")]
    ItemAccess {
        /// Internal ID of the item being read
        item_id: u64,
        /// Description of the failure
        message: String,
    },

    /// A file does not carry the requested derivative rendition.
    #[error("Missing derivative: {0}")]
    MissingDerivative(String),

    /// The repository configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error while writing XML events.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while reading JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;
