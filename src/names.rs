//! Identifier grammars
//!
//! This module provides validation for the identifier syntaxes a
//! string-valued attribute may be required to satisfy: SId, UnitSId,
//! XML ID (used for `metaid`) and SBO term references.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static SID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

// NameStartChar / NameChar from XML 1.0 fifth edition, without ':'
static NCNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}",
        r"\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}",
        r"\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}]",
        r"[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}",
        r"\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}",
        r"\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}\-\.0-9\u{B7}\u{300}-\u{36F}\u{203F}-\u{2040}]*$",
    ))
    .unwrap()
});

static SBO_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SBO:[0-9]{7}$").unwrap());

/// Check if a string is a valid SId
pub fn is_valid_sid(id: &str) -> bool {
    SID.is_match(id)
}

/// Check if a string is a valid UnitSId
///
/// The grammar is the same as SId; the two live in separate namespaces.
pub fn is_valid_unit_sid(id: &str) -> bool {
    SID.is_match(id)
}

/// Check if a string is a valid XML ID (an NCName)
pub fn is_valid_xml_id(id: &str) -> bool {
    NCNAME.is_match(id)
}

/// Check if a string is a valid SBO term reference (`SBO:` and seven digits)
pub fn is_valid_sbo_term(term: &str) -> bool {
    SBO_TERM.is_match(term)
}

/// Parse an SBO term reference into its number
pub fn parse_sbo_term(term: &str) -> Option<u32> {
    if !is_valid_sbo_term(term) {
        return None;
    }
    term[4..].parse().ok()
}

/// Render an SBO term number as `SBO:nnnnnnn`
pub fn format_sbo_term(term: u32) -> String {
    format!("SBO:{:07}", term)
}

/// Validate an SId and return an error if invalid
pub fn validate_sid(attribute: &str, id: &str) -> Result<()> {
    if is_valid_sid(id) {
        Ok(())
    } else {
        Err(Error::invalid_value(attribute, id, "not a valid SId"))
    }
}

/// Validate a UnitSId and return an error if invalid
pub fn validate_unit_sid(attribute: &str, id: &str) -> Result<()> {
    if is_valid_unit_sid(id) {
        Ok(())
    } else {
        Err(Error::invalid_value(attribute, id, "not a valid UnitSId"))
    }
}

/// Validate an XML ID and return an error if invalid
pub fn validate_xml_id(attribute: &str, id: &str) -> Result<()> {
    if is_valid_xml_id(id) {
        Ok(())
    } else {
        Err(Error::invalid_value(attribute, id, "not a valid XML ID"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_sid() {
        assert!(is_valid_sid("k1"));
        assert!(is_valid_sid("_k"));
        assert!(is_valid_sid("Km_2"));

        assert!(!is_valid_sid(""));
        assert!(!is_valid_sid("1k"));
        assert!(!is_valid_sid("k-1"));
        assert!(!is_valid_sid("k.1"));
        assert!(!is_valid_sid("k 1"));
    }

    #[test]
    fn test_is_valid_xml_id() {
        assert!(is_valid_xml_id("meta_1"));
        assert!(is_valid_xml_id("meta-1.a"));
        assert!(is_valid_xml_id("\u{e9}l\u{e9}ment"));

        assert!(!is_valid_xml_id(""));
        assert!(!is_valid_xml_id("1meta"));
        assert!(!is_valid_xml_id("-meta"));
        assert!(!is_valid_xml_id("pre:meta"));
    }

    #[test]
    fn test_sbo_terms() {
        assert!(is_valid_sbo_term("SBO:0000001"));
        assert!(!is_valid_sbo_term("SBO:1"));
        assert!(!is_valid_sbo_term("sbo:0000001"));
        assert!(!is_valid_sbo_term("SBO:00000012"));

        assert_eq!(parse_sbo_term("SBO:0000290"), Some(290));
        assert_eq!(parse_sbo_term("SBO:abc"), None);
        assert_eq!(format_sbo_term(290), "SBO:0000290");
    }

    #[test]
    fn test_validate_sid() {
        assert!(validate_sid("id", "p1").is_ok());
        assert!(matches!(
            validate_sid("id", "1p"),
            Err(Error::InvalidAttributeValue { .. })
        ));
    }
}
