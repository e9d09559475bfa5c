//! Common test helpers and utilities shared across test suite.

use oaifmt::item::{Derivative, Item, ItemFile};
use oaifmt::{Element, RepositoryConfig};

/// Public base URL used by test configurations.
pub const BASE_URL: &str = "https://kirjasto.example.fi";

/// Creates a configuration pointing at [`BASE_URL`].
pub fn test_config() -> RepositoryConfig {
    RepositoryConfig::new()
        .with_namespace_id("kirjasto.example.fi")
        .with_public_base_url(BASE_URL)
}

/// Creates the report item used by the end-to-end scenario.
#[allow(dead_code)]
pub fn create_report_item() -> Item {
    Item::builder(12)
        .dc("Title", "Report 2020")
        .dc("Subject", "628.1")
        .dc("Subject", "water quality")
        .dc("Language", "suomi")
        .dc("Identifier", "URN:NBN:fi-xyz")
        .item_type("Still Image")
        .build()
}

/// Creates a file with thumbnail and fullsize renditions.
#[allow(dead_code)]
pub fn thumbnailed_file(name: &str) -> ItemFile {
    ItemFile::new(name)
        .with_derivative(Derivative::Original, format!("/files/original/{name}"))
        .with_derivative(Derivative::Fullsize, format!("/files/fullsize/{name}"))
        .with_derivative(Derivative::Thumbnail, format!("/files/thumbnails/{name}"))
}

/// Collects `(attributes, text)` of every child element named `name`.
#[allow(dead_code)]
pub fn leaves<'a>(root: &'a Element, name: &str) -> Vec<(Option<&'a str>, String)> {
    root.children()
        .filter(|e| e.name() == name)
        .map(|e| (e.attribute("xsi:type"), e.text()))
        .collect()
}

/// Returns the single `oai_dc:dc` root under a `<metadata>` element.
#[allow(dead_code)]
pub fn dc_root(metadata: &Element) -> &Element {
    let roots: Vec<&Element> = metadata.children().collect();
    assert_eq!(roots.len(), 1, "expected exactly one metadata root");
    roots[0]
}
