//! Field catalogs and controlled vocabularies for the Dublin Core formats.
//!
//! Everything a mapper needs to translate stored element texts lives here as
//! compile-time tables, so renaming a storage label is a one-line edit and
//! tests can enumerate the tables directly.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::item::DUBLIN_CORE;

/// Binding of an output element name to the stored element it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    /// Output element local name (`title`, `tableOfContents`, ...)
    pub key: &'static str,
    /// Element set holding the stored values
    pub element_set: &'static str,
    /// Stored element name (`Title`, `Table Of Contents`, ...)
    pub element: &'static str,
}

const fn dc(key: &'static str, element: &'static str) -> FieldRef {
    FieldRef {
        key,
        element_set: DUBLIN_CORE,
        element,
    }
}

/// The 15 unqualified Dublin Core elements in `oai_dc` schema order.
pub const DCMES_ELEMENTS: [FieldRef; 15] = [
    dc("title", "Title"),
    dc("creator", "Creator"),
    dc("subject", "Subject"),
    dc("description", "Description"),
    dc("publisher", "Publisher"),
    dc("contributor", "Contributor"),
    dc("date", "Date"),
    dc("type", "Type"),
    dc("format", "Format"),
    dc("identifier", "Identifier"),
    dc("source", "Source"),
    dc("language", "Language"),
    dc("relation", "Relation"),
    dc("coverage", "Coverage"),
    dc("rights", "Rights"),
];

/// Unqualified elements copied verbatim by the extended format.
///
/// Subject, identifier, type and language have their own rules.
pub const PLAIN_ELEMENTS: [FieldRef; 11] = [
    dc("title", "Title"),
    dc("creator", "Creator"),
    dc("description", "Description"),
    dc("publisher", "Publisher"),
    dc("contributor", "Contributor"),
    dc("date", "Date"),
    dc("format", "Format"),
    dc("source", "Source"),
    dc("relation", "Relation"),
    dc("coverage", "Coverage"),
    dc("rights", "Rights"),
];

/// Stored Dublin Core subject element.
pub const SUBJECT: FieldRef = dc("subject", "Subject");
/// Stored Dublin Core language element.
pub const LANGUAGE: FieldRef = dc("language", "Language");
/// Stored Dublin Core identifier element.
pub const IDENTIFIER: FieldRef = dc("identifier", "Identifier");
/// Stored Dublin Core type element.
pub const TYPE: FieldRef = dc("type", "Type");

/// DC Terms refinements (`dcterms:<key>`) and the labels they are stored under,
/// in emission order.
pub const DC_TERMS: [FieldRef; 40] = [
    dc("alternative", "Alternative Title"),
    dc("tableOfContents", "Table Of Contents"),
    dc("abstract", "Abstract"),
    dc("created", "Date Created"),
    dc("valid", "Date Valid"),
    dc("available", "Date Available"),
    dc("issued", "Date Issued"),
    dc("modified", "Date Modified"),
    dc("dateAccepted", "Date Accepted"),
    dc("dateCopyrighted", "Date Copyrighted"),
    dc("dateSubmitted", "Date Submitted"),
    dc("extent", "Extent"),
    dc("medium", "Medium"),
    dc("isVersionOf", "Is Version Of"),
    dc("hasVersion", "Has Version"),
    dc("isReplacedBy", "Is Replaced By"),
    dc("replaces", "Replaces"),
    dc("isRequiredBy", "Is Required By"),
    dc("requires", "Requires"),
    dc("isPartOf", "Is Part Of"),
    dc("hasPart", "Has Part"),
    dc("isReferencedBy", "Is Referenced By"),
    dc("references", "References"),
    dc("isFormatOf", "Is Format Of"),
    dc("hasFormat", "Has Format"),
    dc("conformsTo", "Conforms To"),
    dc("spatial", "Spatial Coverage"),
    dc("temporal", "Temporal Coverage"),
    dc("audience", "Audience"),
    dc("accrualMethod", "Accrual Method"),
    dc("accrualPeriodicity", "Accrual Periodicity"),
    dc("accrualPolicy", "Accrual Policy"),
    dc("instructionalMethod", "Instructional Method"),
    dc("provenance", "Provenance"),
    dc("rightsHolder", "Rights Holder"),
    dc("mediator", "Mediator"),
    dc("educationLevel", "Audience Education Level"),
    dc("accessRights", "Access Rights"),
    dc("license", "License"),
    dc("bibliographicCitation", "Bibliographic Citation"),
];

/// Finnish language names and their ISO 639-1 codes.
pub const LANGUAGE_NAMES: [(&str, &str); 11] = [
    ("suomi", "fi"),
    ("englanti", "en"),
    ("ruotsi", "sv"),
    ("espanja", "es"),
    ("hollanti", "nl"),
    ("italia", "it"),
    ("latina", "la"),
    ("venäjä", "ru"),
    ("ranska", "fr"),
    ("saksa", "de"),
    ("viro", "et"),
];

/// Item type names (lower case) and their DCMI Type Vocabulary terms.
pub const ITEM_TYPES: [(&str, &str); 8] = [
    ("document", "Text"),
    ("still image", "Image"),
    ("artikkeli", "Text"),
    ("artikkeliviite", "Text"),
    ("website", "Text"),
    ("linkki", "Text"),
    ("kirje", "Text"),
    ("käsikirjoitus", "Text"),
];

/// Whether a trimmed subject looks like a library classification code.
///
/// A code starts with an ASCII digit and contains no alphabetic character
/// anywhere (`628.1`, `84.2-1`), which separates codes from headings such as
/// `1800-luku` or `2. maailmansota`.
#[must_use]
pub fn is_classification_code(subject: &str) -> bool {
    subject.starts_with(|c: char| c.is_ascii_digit()) && !subject.chars().any(char::is_alphabetic)
}

/// Whether an identifier is a URN (`URN:NBN:fi-...`).
#[must_use]
pub fn is_urn(identifier: &str) -> bool {
    identifier.starts_with("URN")
}

/// Normalize a language value to an ISO 639-1 code.
///
/// Two-character values are assumed to already be codes and pass through.
/// Known names are matched case-insensitively after NFC normalization.
/// Anything else becomes `fallback`.
#[must_use]
pub fn normalize_language<'a>(language: &'a str, fallback: &'a str) -> Cow<'a, str> {
    if language.chars().count() == 2 {
        return Cow::Borrowed(language);
    }
    let name: String = language.nfc().collect::<String>().to_lowercase();
    match LANGUAGE_NAMES.iter().find(|(known, _)| *known == name) {
        Some((_, code)) => Cow::Borrowed(*code),
        None => {
            tracing::debug!(language, fallback, "Unrecognised language name");
            Cow::Borrowed(fallback)
        },
    }
}

/// Translate an item type name to its DCMI Type Vocabulary term.
///
/// The name is trimmed and lower-cased first; unmapped names are returned in
/// that normalized form.
#[must_use]
pub fn translate_item_type(name: &str) -> String {
    let normalized = name.trim().to_lowercase();
    match ITEM_TYPES.iter().find(|(known, _)| *known == normalized) {
        Some((_, term)) => (*term).to_string(),
        None => normalized,
    }
}
