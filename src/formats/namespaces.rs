//! Namespace and schema URIs used by the Dublin Core formats.

/// OAI-PMH `oai_dc` container namespace.
pub const OAI_DC: &str = "http://www.openarchives.org/OAI/2.0/oai_dc/";

/// XML Schema for the `oai_dc` container.
pub const OAI_DC_SCHEMA: &str = "http://www.openarchives.org/OAI/2.0/oai_dc.xsd";

/// Unqualified Dublin Core element namespace.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";

/// DCMI Metadata Terms namespace (element refinements).
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// XML Schema instance namespace (`xsi:type`, `xsi:schemaLocation`).
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Prefixed name of the `oai_dc` root element.
pub const OAI_DC_ROOT: &str = "oai_dc:dc";
