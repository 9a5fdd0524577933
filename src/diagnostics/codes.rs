//! Diagnostic codes, categories and severities

use serde::Serialize;
use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only
    Info,
    /// Suspicious but valid
    Warning,
    /// Invalid content, reading continued
    Error,
    /// Unrecoverable, reading stopped
    Fatal,
}

impl Severity {
    /// Get the severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad classification of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    /// Failure inside the library itself
    Internal,
    /// Malformed XML
    Xml,
    /// Structure of elements and attributes
    GeneralConsistency,
    /// Identifier grammars and uniqueness
    IdentifierConsistency,
    /// Lexical form of attribute values
    AttributeSyntax,
}

impl ErrorCategory {
    /// Get the category as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Internal => "internal",
            ErrorCategory::Xml => "xml",
            ErrorCategory::GeneralConsistency => "general-consistency",
            ErrorCategory::IdentifierConsistency => "identifier-consistency",
            ErrorCategory::AttributeSyntax => "attribute-syntax",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dense diagnostic code enumeration.
///
/// `code as usize` is the row of the code in [`ERROR_TABLE`](super::table::ERROR_TABLE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    /// Unrecognised internal failure
    UnknownError = 0,
    /// The XML could not be parsed
    XmlParseError = 1,
    /// Text is not valid UTF-8
    NotUtf8 = 2,
    /// Root namespace and level/version disagree or are unknown
    InvalidNamespaceOnSbml = 3,
    /// Child element not allowed here
    UnrecognizedElement = 4,
    /// A single-valued child occurs more than once
    OnlyOneChildAllowed = 5,
    /// A required child element is missing
    MissingRequiredElement = 6,
    /// Attribute in no namespace not allowed on a core element
    UnknownCoreAttribute = 7,
    /// Attribute from a package namespace not allowed on this element
    UnknownPackageAttribute = 8,
    /// Package element carries an attribute it does not define
    PackageAllowedAttributes = 9,
    /// Package element carries a core-qualified attribute
    PackageAllowedCoreAttributes = 10,
    /// The same attribute appears twice on one start tag
    DuplicateAttribute = 11,
    /// Required attribute absent
    MissingRequiredAttribute = 12,
    /// String attribute present but empty
    EmptyStringAttribute = 13,
    /// Value is not an SId
    InvalidIdSyntax = 14,
    /// Value is not a UnitSId
    InvalidUnitIdSyntax = 15,
    /// Value is not an XML ID
    InvalidMetaIdSyntax = 16,
    /// Value is not an SBO term reference
    InvalidSboTermSyntax = 17,
    /// Value is not an integer
    AttributeMustBeInteger = 18,
    /// Value is not a non-negative integer
    AttributeMustBeNonNegativeInteger = 19,
    /// Value is not a double
    AttributeMustBeDouble = 20,
    /// Value is not a boolean
    AttributeMustBeBoolean = 21,
    /// Value is not one of the enumerated values
    AttributeMustBeEnum = 22,
    /// Value has the wrong lexical type (no more specific rule applies)
    AttributeTypeMismatch = 23,
    /// Vector element text is not a list of numbers
    VectorMustBeNumeric = 24,
    /// Array length disagrees with its declared length
    ArrayLengthMismatch = 25,
    /// Two elements share an SId
    DuplicateSId = 26,
    /// Two elements share a metaid
    DuplicateMetaId = 27,
}

impl ErrorCode {
    /// Every code, in table order
    pub const ALL: [ErrorCode; 28] = [
        ErrorCode::UnknownError,
        ErrorCode::XmlParseError,
        ErrorCode::NotUtf8,
        ErrorCode::InvalidNamespaceOnSbml,
        ErrorCode::UnrecognizedElement,
        ErrorCode::OnlyOneChildAllowed,
        ErrorCode::MissingRequiredElement,
        ErrorCode::UnknownCoreAttribute,
        ErrorCode::UnknownPackageAttribute,
        ErrorCode::PackageAllowedAttributes,
        ErrorCode::PackageAllowedCoreAttributes,
        ErrorCode::DuplicateAttribute,
        ErrorCode::MissingRequiredAttribute,
        ErrorCode::EmptyStringAttribute,
        ErrorCode::InvalidIdSyntax,
        ErrorCode::InvalidUnitIdSyntax,
        ErrorCode::InvalidMetaIdSyntax,
        ErrorCode::InvalidSboTermSyntax,
        ErrorCode::AttributeMustBeInteger,
        ErrorCode::AttributeMustBeNonNegativeInteger,
        ErrorCode::AttributeMustBeDouble,
        ErrorCode::AttributeMustBeBoolean,
        ErrorCode::AttributeMustBeEnum,
        ErrorCode::AttributeTypeMismatch,
        ErrorCode::VectorMustBeNumeric,
        ErrorCode::ArrayLengthMismatch,
        ErrorCode::DuplicateSId,
        ErrorCode::DuplicateMetaId,
    ];

    /// Numeric value of the code
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Look a code up by its numeric value
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_dense() {
        for (index, code) in ErrorCode::ALL.iter().enumerate() {
            assert_eq!(code.value() as usize, index);
            assert_eq!(ErrorCode::from_value(index as u32), Some(*code));
        }
        assert_eq!(ErrorCode::from_value(ErrorCode::ALL.len() as u32), None);
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Error < Severity::Fatal);
        assert_eq!(Severity::Fatal.to_string(), "Fatal");
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::MissingRequiredAttribute.to_string(), "00012");
    }
}
