//! Repository configuration injected into metadata formats.
//!
//! This module provides [`RepositoryConfig`], which carries everything a
//! format needs beyond the item itself: where item landing pages live, whether
//! files and tags are exposed, and the vocabulary choices for subjects and
//! languages. Formats receive a copy at construction and never consult global
//! state.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Library classification scheme used to type numeric subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClassificationScheme {
    /// Finnish Public Libraries Classification System
    #[default]
    #[serde(rename = "YKL")]
    Ykl,
    /// Universal Decimal Classification
    #[serde(rename = "UDC")]
    Udc,
}

impl ClassificationScheme {
    /// Value of the `xsi:type` attribute on classified subjects.
    #[must_use]
    pub const fn xsi_type(&self) -> &'static str {
        match self {
            Self::Ykl => "dcterms:YKL",
            Self::Udc => "dcterms:UDC",
        }
    }
}

impl fmt::Display for ClassificationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ykl => write!(f, "YKL"),
            Self::Udc => write!(f, "UDC"),
        }
    }
}

/// Configuration for metadata generation.
///
/// # Examples
///
/// ```
/// use oaifmt::config::{ClassificationScheme, RepositoryConfig};
///
/// let config = RepositoryConfig::new()
///     .with_public_base_url("https://museo.example.fi")
///     .with_expose_files(true)
///     .with_classification_scheme(ClassificationScheme::Udc);
///
/// assert_eq!(config.record_url(5), "https://museo.example.fi/items/show/5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Human-readable repository name.
    pub repository_name: String,

    /// Registered domain name used to build OAI identifiers.
    pub namespace_id: String,

    /// Absolute base URL of the public site. Item landing pages live at
    /// `{public_base_url}/items/show/{id}`.
    pub public_base_url: String,

    /// Emit `dc:identifier` elements for item files.
    pub expose_files: bool,

    /// Emit item tags as additional free-text subjects.
    pub expose_tags: bool,

    /// Scheme named in the `xsi:type` of classification-code subjects.
    pub classification_scheme: ClassificationScheme,

    /// ISO 639-1 code used when a language name is not recognised.
    pub fallback_language: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            repository_name: "OAI-PMH Repository".to_string(),
            namespace_id: "default.must.change".to_string(),
            public_base_url: "http://localhost".to_string(),
            expose_files: false,
            expose_tags: false,
            classification_scheme: ClassificationScheme::default(),
            fallback_language: "fi".to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing keys take default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that the configuration can produce valid output.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(FormatError::InvalidConfig(format!(
                "public_base_url must be an absolute http(s) URL, got {:?}",
                self.public_base_url
            )));
        }
        if self.namespace_id.trim().is_empty() {
            return Err(FormatError::InvalidConfig(
                "namespace_id must not be empty".to_string(),
            ));
        }
        if self.fallback_language.len() != 2
            || !self
                .fallback_language
                .chars()
                .all(|c| c.is_ascii_lowercase())
        {
            return Err(FormatError::InvalidConfig(format!(
                "fallback_language must be a two-letter ISO 639-1 code, got {:?}",
                self.fallback_language
            )));
        }
        Ok(())
    }

    /// Absolute URL of an item's public landing page.
    #[must_use]
    pub fn record_url(&self, item_id: u64) -> String {
        format!(
            "{}/items/show/{item_id}",
            self.public_base_url.trim_end_matches('/')
        )
    }

    /// Resolve a web path against the public base URL.
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// OAI identifier of an item (`oai:{namespace_id}:{item_id}`).
    #[must_use]
    pub fn oai_identifier(&self, item_id: u64) -> String {
        format!("oai:{}:{item_id}", self.namespace_id)
    }

    /// Sets the repository name.
    #[must_use]
    pub fn with_repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = name.into();
        self
    }

    /// Sets the OAI namespace identifier.
    #[must_use]
    pub fn with_namespace_id(mut self, namespace_id: impl Into<String>) -> Self {
        self.namespace_id = namespace_id.into();
        self
    }

    /// Sets the public base URL.
    #[must_use]
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into();
        self
    }

    /// Enables file identifiers.
    #[must_use]
    pub const fn with_expose_files(mut self, enabled: bool) -> Self {
        self.expose_files = enabled;
        self
    }

    /// Enables tag subjects.
    #[must_use]
    pub const fn with_expose_tags(mut self, enabled: bool) -> Self {
        self.expose_tags = enabled;
        self
    }

    /// Sets the classification scheme.
    #[must_use]
    pub const fn with_classification_scheme(mut self, scheme: ClassificationScheme) -> Self {
        self.classification_scheme = scheme;
        self
    }

    /// Sets the fallback language code.
    #[must_use]
    pub fn with_fallback_language(mut self, code: impl Into<String>) -> Self {
        self.fallback_language = code.into();
        self
    }
}
