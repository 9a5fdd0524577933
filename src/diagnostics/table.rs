//! Static diagnostic table
//!
//! One fixed-shape row per [`ErrorCode`], in code order. The table is read-only
//! and consulted whenever a record is logged.

use super::codes::{ErrorCategory, ErrorCode, Severity};
use serde::Serialize;

/// A row of the diagnostic table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorTableEntry {
    /// Diagnostic code
    pub code: ErrorCode,
    /// One-line summary
    pub short_message: &'static str,
    /// Category
    pub category: ErrorCategory,
    /// Default severity
    pub severity: Severity,
    /// Full explanation
    pub message: &'static str,
    /// Section of the format definition the rule comes from
    pub reference: &'static str,
}

macro_rules! entry {
    ($code:ident, $short:expr, $category:ident, $severity:ident, $message:expr, $reference:expr) => {
        ErrorTableEntry {
            code: ErrorCode::$code,
            short_message: $short,
            category: ErrorCategory::$category,
            severity: Severity::$severity,
            message: $message,
            reference: $reference,
        }
    };
}

/// The diagnostic table, indexed by `ErrorCode as usize`
pub static ERROR_TABLE: [ErrorTableEntry; 28] = [
    entry!(
        UnknownError,
        "Unknown internal error",
        Internal,
        Fatal,
        "An unrecognized internal error occurred. This indicates a defect in the reader, \
         not in the document.",
        ""
    ),
    entry!(
        XmlParseError,
        "Malformed XML",
        Xml,
        Fatal,
        "The document is not well-formed XML and could not be read past this point.",
        "XML 1.0 section 2.1"
    ),
    entry!(
        NotUtf8,
        "Content is not UTF-8",
        Xml,
        Fatal,
        "Element names, attribute names and text must be encoded as UTF-8.",
        "L3V2 section 4.1"
    ),
    entry!(
        InvalidNamespaceOnSbml,
        "Invalid core namespace",
        GeneralConsistency,
        Error,
        "The <sbml> element must declare a known core namespace whose level and version \
         match its 'level' and 'version' attributes.",
        "L3V2 section 4.1.1"
    ),
    entry!(
        UnrecognizedElement,
        "Unrecognized element",
        GeneralConsistency,
        Error,
        "The element is not permitted at this position. Its content has been ignored.",
        "L3V2 section 4.2"
    ),
    entry!(
        OnlyOneChildAllowed,
        "Only one child element allowed",
        GeneralConsistency,
        Error,
        "The element may contain at most one instance of this child element.",
        "L3V2 section 4.2"
    ),
    entry!(
        MissingRequiredElement,
        "Missing required element",
        GeneralConsistency,
        Error,
        "The element must contain an instance of this child element.",
        "L3V2 section 4.2"
    ),
    entry!(
        UnknownCoreAttribute,
        "Attribute not permitted",
        GeneralConsistency,
        Error,
        "A core element may only carry the attributes defined for it by the core \
         specification.",
        "L3V2 section 3.2"
    ),
    entry!(
        UnknownPackageAttribute,
        "Package attribute not permitted",
        GeneralConsistency,
        Error,
        "An element may only carry package attributes defined for it by an enabled package.",
        "L3V2 section 3.2"
    ),
    entry!(
        PackageAllowedAttributes,
        "Package element attribute not permitted",
        GeneralConsistency,
        Error,
        "A package element may only carry the attributes defined for it by its package.",
        "Package specification section 3"
    ),
    entry!(
        PackageAllowedCoreAttributes,
        "Core attribute not permitted on package element",
        GeneralConsistency,
        Error,
        "A package element may only carry the core attributes id, name, metaid and sboTerm.",
        "Package specification section 3"
    ),
    entry!(
        DuplicateAttribute,
        "Duplicate attribute",
        Xml,
        Error,
        "An attribute may appear at most once on a start tag. The first occurrence is used.",
        "XML 1.0 section 3.1"
    ),
    entry!(
        MissingRequiredAttribute,
        "Missing required attribute",
        GeneralConsistency,
        Error,
        "The element is missing an attribute that must always be present.",
        "L3V2 section 3.2"
    ),
    entry!(
        EmptyStringAttribute,
        "Empty attribute value",
        AttributeSyntax,
        Error,
        "The attribute is present but its value is the empty string, which is never a \
         valid value.",
        "L3V2 section 3.1"
    ),
    entry!(
        InvalidIdSyntax,
        "Invalid SId syntax",
        IdentifierConsistency,
        Error,
        "The value must conform to the SId grammar: a letter or underscore followed by \
         letters, digits or underscores.",
        "L3V2 section 3.1.7"
    ),
    entry!(
        InvalidUnitIdSyntax,
        "Invalid UnitSId syntax",
        IdentifierConsistency,
        Error,
        "The value must conform to the UnitSId grammar.",
        "L3V2 section 3.1.8"
    ),
    entry!(
        InvalidMetaIdSyntax,
        "Invalid metaid syntax",
        IdentifierConsistency,
        Error,
        "The value must conform to the XML ID grammar.",
        "L3V2 section 3.1.6"
    ),
    entry!(
        InvalidSboTermSyntax,
        "Invalid sboTerm syntax",
        IdentifierConsistency,
        Error,
        "The value must be 'SBO:' followed by exactly seven digits.",
        "L3V2 section 3.1.9"
    ),
    entry!(
        AttributeMustBeInteger,
        "Attribute must be an integer",
        AttributeSyntax,
        Error,
        "The value must be a signed 32-bit integer.",
        "L3V2 section 3.1.3"
    ),
    entry!(
        AttributeMustBeNonNegativeInteger,
        "Attribute must be a non-negative integer",
        AttributeSyntax,
        Error,
        "The value must be an unsigned 32-bit integer.",
        "L3V2 section 3.1.4"
    ),
    entry!(
        AttributeMustBeDouble,
        "Attribute must be a double",
        AttributeSyntax,
        Error,
        "The value must be a double-precision number, INF, -INF or NaN.",
        "L3V2 section 3.1.5"
    ),
    entry!(
        AttributeMustBeBoolean,
        "Attribute must be a boolean",
        AttributeSyntax,
        Error,
        "The value must be one of true, false, 1 or 0.",
        "L3V2 section 3.1.2"
    ),
    entry!(
        AttributeMustBeEnum,
        "Attribute must be an enumerated value",
        AttributeSyntax,
        Error,
        "The value must be one of the values enumerated for this attribute.",
        "Package specification section 3"
    ),
    entry!(
        AttributeTypeMismatch,
        "Attribute type mismatch",
        AttributeSyntax,
        Error,
        "The value does not have the lexical type declared for the attribute.",
        "L3V2 section 3.1"
    ),
    entry!(
        VectorMustBeNumeric,
        "Vector values must be numeric",
        AttributeSyntax,
        Error,
        "The element text must be a whitespace-separated list of numbers of the declared type.",
        "Package specification section 3"
    ),
    entry!(
        ArrayLengthMismatch,
        "Array length mismatch",
        GeneralConsistency,
        Error,
        "The number of values in the array must equal its declared length.",
        "Package specification section 3"
    ),
    entry!(
        DuplicateSId,
        "Duplicate SId",
        IdentifierConsistency,
        Error,
        "The value of an 'id' attribute must be unique across all SId-bearing elements of \
         the document.",
        "L3V2 section 3.3"
    ),
    entry!(
        DuplicateMetaId,
        "Duplicate metaid",
        IdentifierConsistency,
        Error,
        "The value of a 'metaid' attribute must be unique across the whole document.",
        "L3V2 section 3.1.6"
    ),
];

/// Look up the table row for a code
pub fn entry(code: ErrorCode) -> &'static ErrorTableEntry {
    &ERROR_TABLE[code as usize]
}
