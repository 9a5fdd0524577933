//! Error types for sbase
//!
//! API-level failures are reported through [`Error`]. Problems found in the
//! *content* of a document are never returned as errors; they are recorded
//! in the document's [`ErrorLog`](crate::diagnostics::ErrorLog) instead.

use thiserror::Error;

/// Result type alias using the sbase Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sbase operations
#[derive(Error, Debug)]
pub enum Error {
    /// A setter was given a value that violates the attribute's kind or grammar
    #[error("invalid value '{value}' for attribute '{attribute}': {reason}")]
    InvalidAttributeValue {
        /// Attribute name
        attribute: String,
        /// Offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The attribute is not declared for this element type
    #[error("element '{element}' has no attribute '{attribute}'")]
    UnknownAttribute {
        /// Element name
        element: String,
        /// Attribute name
        attribute: String,
    },

    /// Operation on a missing or incompatible object
    #[error("invalid object: {0}")]
    InvalidObject(String),

    /// Generic failure
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// XML writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidAttributeValue`]
    pub fn invalid_value(
        attribute: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidAttributeValue {
            attribute: attribute.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`Error::UnknownAttribute`]
    pub fn unknown_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Error::UnknownAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = Error::invalid_value("id", "1abc", "not a valid SId");
        let msg = err.to_string();
        assert!(msg.contains("'1abc'"));
        assert!(msg.contains("'id'"));
        assert!(msg.contains("not a valid SId"));
    }

    #[test]
    fn test_unknown_attribute_display() {
        let err = Error::unknown_attribute("parameter", "colour");
        assert_eq!(err.to_string(), "element 'parameter' has no attribute 'colour'");
    }

    #[test]
    fn test_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
