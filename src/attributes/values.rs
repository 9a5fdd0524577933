//! Attribute values and their lexical forms
//!
//! Decoding never logs anything itself: it returns the most specific
//! [`ErrorCode`] that applies, and the reader turns that into one record.

use super::spec::{AttributeKind, VectorKind};
use crate::diagnostics::ErrorCode;
use crate::error::{Error, Result};
use crate::names;
use std::collections::HashMap;
use std::fmt;

lazy_static::lazy_static! {
    /// Lexical forms of xs:boolean
    static ref BOOLEAN_MAP: HashMap<&'static str, bool> = {
        let mut m = HashMap::new();
        m.insert("false", false);
        m.insert("0", false);
        m.insert("true", true);
        m.insert("1", true);
        m
    };
}

/// A decoded attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String-valued kinds (including identifiers and enumerations)
    String(String),
    /// Signed integer
    Int(i32),
    /// Unsigned integer (also SBO terms)
    Unsigned(u32),
    /// Double
    Double(f64),
    /// Boolean
    Bool(bool),
}

impl AttributeValue {
    /// Consume as a string, or fail for `attribute`
    pub fn into_string(self, attribute: &str) -> Result<String> {
        match self {
            AttributeValue::String(s) => Ok(s),
            other => Err(mismatch(attribute, &other, "string")),
        }
    }

    /// Read as a signed integer, or fail for `attribute`
    pub fn to_int(&self, attribute: &str) -> Result<i32> {
        match self {
            AttributeValue::Int(v) => Ok(*v),
            other => Err(mismatch(attribute, other, "integer")),
        }
    }

    /// Read as an unsigned integer, or fail for `attribute`
    pub fn to_unsigned(&self, attribute: &str) -> Result<u32> {
        match self {
            AttributeValue::Unsigned(v) => Ok(*v),
            other => Err(mismatch(attribute, other, "non-negative integer")),
        }
    }

    /// Read as a double, or fail for `attribute`
    pub fn to_double(&self, attribute: &str) -> Result<f64> {
        match self {
            AttributeValue::Double(v) => Ok(*v),
            other => Err(mismatch(attribute, other, "double")),
        }
    }

    /// Read as a boolean, or fail for `attribute`
    pub fn to_bool(&self, attribute: &str) -> Result<bool> {
        match self {
            AttributeValue::Bool(v) => Ok(*v),
            other => Err(mismatch(attribute, other, "boolean")),
        }
    }
}

fn mismatch(attribute: &str, value: &AttributeValue, expected: &str) -> Error {
    Error::invalid_value(attribute, value.to_string(), format!("expected a {} value", expected))
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => f.write_str(s),
            AttributeValue::Int(v) => write!(f, "{}", v),
            AttributeValue::Unsigned(v) => write!(f, "{}", v),
            AttributeValue::Double(v) => f.write_str(&format_double(*v)),
            AttributeValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Unsigned(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

/// Parse an xs:boolean
pub fn parse_bool(raw: &str) -> Option<bool> {
    BOOLEAN_MAP.get(raw.trim()).copied()
}

/// Parse an xs:double, accepting `INF`, `-INF` and `NaN`
pub fn parse_double(raw: &str) -> Option<f64> {
    match raw.trim() {
        "INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        // str::parse also takes inf, infinity and nan in any case
        text if text.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => None,
        text => text.parse::<f64>().ok(),
    }
}

/// Render a double in its shortest form that reads back to the same value
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "INF" } else { "-INF" };
        text.to_string()
    } else if value == 0.0 || (1e-5..1e15).contains(&value.abs()) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

/// Decode a raw attribute value against its declared kind.
///
/// On failure the error is the most specific code for the problem.
pub fn decode(kind: AttributeKind, raw: &str) -> std::result::Result<AttributeValue, ErrorCode> {
    if kind.is_string() && raw.is_empty() {
        return Err(ErrorCode::EmptyStringAttribute);
    }
    match kind {
        AttributeKind::String => Ok(AttributeValue::String(raw.to_string())),
        AttributeKind::SId => check_string(raw, names::is_valid_sid, ErrorCode::InvalidIdSyntax),
        AttributeKind::UnitSId => {
            check_string(raw, names::is_valid_unit_sid, ErrorCode::InvalidUnitIdSyntax)
        }
        AttributeKind::Id => check_string(raw, names::is_valid_xml_id, ErrorCode::InvalidMetaIdSyntax),
        AttributeKind::Enum(values) => {
            if values.contains(&raw) {
                Ok(AttributeValue::String(raw.to_string()))
            } else {
                Err(ErrorCode::AttributeMustBeEnum)
            }
        }
        AttributeKind::SboTerm => names::parse_sbo_term(raw.trim())
            .map(AttributeValue::Unsigned)
            .ok_or(ErrorCode::InvalidSboTermSyntax),
        AttributeKind::Int => raw
            .trim()
            .parse::<i32>()
            .map(AttributeValue::Int)
            .map_err(|_| ErrorCode::AttributeMustBeInteger),
        AttributeKind::Unsigned => raw
            .trim()
            .parse::<u32>()
            .map(AttributeValue::Unsigned)
            .map_err(|_| ErrorCode::AttributeMustBeNonNegativeInteger),
        AttributeKind::Double => parse_double(raw)
            .map(AttributeValue::Double)
            .ok_or(ErrorCode::AttributeMustBeDouble),
        AttributeKind::Bool => parse_bool(raw)
            .map(AttributeValue::Bool)
            .ok_or(ErrorCode::AttributeMustBeBoolean),
    }
}

fn check_string(
    raw: &str,
    is_valid: fn(&str) -> bool,
    code: ErrorCode,
) -> std::result::Result<AttributeValue, ErrorCode> {
    if is_valid(raw) {
        Ok(AttributeValue::String(raw.to_string()))
    } else {
        Err(code)
    }
}

/// Render a value in the lexical form of its declared kind
pub fn encode(kind: AttributeKind, value: &AttributeValue) -> String {
    match (kind, value) {
        (AttributeKind::SboTerm, AttributeValue::Unsigned(term)) => names::format_sbo_term(*term),
        (_, value) => value.to_string(),
    }
}

/// Check that a value may be stored in an attribute of `kind`
pub fn validate(attribute: &str, kind: AttributeKind, value: &AttributeValue) -> Result<()> {
    let lexical = encode(kind, value);
    let compatible = matches!(
        (kind, value),
        (AttributeKind::Int, AttributeValue::Int(_))
            | (AttributeKind::Unsigned, AttributeValue::Unsigned(_))
            | (AttributeKind::SboTerm, AttributeValue::Unsigned(_))
            | (AttributeKind::Double, AttributeValue::Double(_))
            | (AttributeKind::Bool, AttributeValue::Bool(_))
    ) || (kind.is_string() && matches!(value, AttributeValue::String(_)));

    if !compatible {
        return Err(Error::invalid_value(
            attribute,
            lexical,
            format!("expected a {} value", kind),
        ));
    }
    decode(kind, &lexical).map(|_| ()).map_err(|code| {
        Error::invalid_value(
            attribute,
            lexical.clone(),
            crate::diagnostics::table::entry(code).short_message,
        )
    })
}

/// Values of a numeric vector attribute
#[derive(Debug, Clone, PartialEq)]
pub enum NumericVector {
    /// Signed integers
    Int(Vec<i32>),
    /// Unsigned integers
    Unsigned(Vec<u32>),
    /// Doubles
    Double(Vec<f64>),
}

impl NumericVector {
    /// Element type of the vector
    pub fn kind(&self) -> VectorKind {
        match self {
            NumericVector::Int(_) => VectorKind::Int,
            NumericVector::Unsigned(_) => VectorKind::Unsigned,
            NumericVector::Double(_) => VectorKind::Double,
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        match self {
            NumericVector::Int(v) => v.len(),
            NumericVector::Unsigned(v) => v.len(),
            NumericVector::Double(v) => v.len(),
        }
    }

    /// Whether the vector has no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse whitespace-separated values. On failure returns the first bad token.
    pub fn parse(kind: VectorKind, text: &str) -> std::result::Result<Self, String> {
        let tokens = text.split_whitespace();
        match kind {
            VectorKind::Int => tokens
                .map(|t| t.parse::<i32>().map_err(|_| t.to_string()))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(NumericVector::Int),
            VectorKind::Unsigned => tokens
                .map(|t| t.parse::<u32>().map_err(|_| t.to_string()))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(NumericVector::Unsigned),
            VectorKind::Double => tokens
                .map(|t| parse_double(t).ok_or_else(|| t.to_string()))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(NumericVector::Double),
        }
    }

    /// Element text: every value preceded by a space, then one trailing space
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let mut push = |value: String| {
            text.push(' ');
            text.push_str(&value);
        };
        match self {
            NumericVector::Int(v) => v.iter().for_each(|x| push(x.to_string())),
            NumericVector::Unsigned(v) => v.iter().for_each(|x| push(x.to_string())),
            NumericVector::Double(v) => v.iter().for_each(|x| push(format_double(*x))),
        }
        text.push(' ');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numbers() {
        assert_eq!(decode(AttributeKind::Int, " -5 "), Ok(AttributeValue::Int(-5)));
        assert_eq!(decode(AttributeKind::Int, "+7"), Ok(AttributeValue::Int(7)));
        assert_eq!(decode(AttributeKind::Int, "1.5"), Err(ErrorCode::AttributeMustBeInteger));
        assert_eq!(decode(AttributeKind::Unsigned, "3"), Ok(AttributeValue::Unsigned(3)));
        assert_eq!(
            decode(AttributeKind::Unsigned, "-3"),
            Err(ErrorCode::AttributeMustBeNonNegativeInteger)
        );
        assert_eq!(
            decode(AttributeKind::Unsigned, "abc"),
            Err(ErrorCode::AttributeMustBeNonNegativeInteger)
        );
        assert_eq!(decode(AttributeKind::Double, "1.5e3"), Ok(AttributeValue::Double(1500.0)));
        assert_eq!(decode(AttributeKind::Double, "x"), Err(ErrorCode::AttributeMustBeDouble));
    }

    #[test]
    fn test_decode_special_doubles() {
        assert_eq!(decode(AttributeKind::Double, "INF"), Ok(AttributeValue::Double(f64::INFINITY)));
        assert_eq!(
            decode(AttributeKind::Double, "-INF"),
            Ok(AttributeValue::Double(f64::NEG_INFINITY))
        );
        match decode(AttributeKind::Double, "NaN") {
            Ok(AttributeValue::Double(v)) => assert!(v.is_nan()),
            other => panic!("unexpected {:?}", other),
        }
        for raw in ["inf", "Infinity", "iNfInItY", "+INF", "nan", "-nan", "INFINITY", "1.5f"] {
            assert_eq!(decode(AttributeKind::Double, raw), Err(ErrorCode::AttributeMustBeDouble), "{}", raw);
        }
        assert_eq!(decode(AttributeKind::Double, " 2.5E-3 "), Ok(AttributeValue::Double(2.5e-3)));
    }

    #[test]
    fn test_decode_bool() {
        assert_eq!(decode(AttributeKind::Bool, "true"), Ok(AttributeValue::Bool(true)));
        assert_eq!(decode(AttributeKind::Bool, "0"), Ok(AttributeValue::Bool(false)));
        assert_eq!(decode(AttributeKind::Bool, "TRUE"), Err(ErrorCode::AttributeMustBeBoolean));
        assert_eq!(decode(AttributeKind::Bool, "yes"), Err(ErrorCode::AttributeMustBeBoolean));
    }

    #[test]
    fn test_decode_strings() {
        assert_eq!(decode(AttributeKind::SId, ""), Err(ErrorCode::EmptyStringAttribute));
        assert_eq!(decode(AttributeKind::String, ""), Err(ErrorCode::EmptyStringAttribute));
        assert_eq!(decode(AttributeKind::SId, "1x"), Err(ErrorCode::InvalidIdSyntax));
        assert_eq!(decode(AttributeKind::UnitSId, "m-s"), Err(ErrorCode::InvalidUnitIdSyntax));
        assert_eq!(decode(AttributeKind::Id, "1x"), Err(ErrorCode::InvalidMetaIdSyntax));
        assert_eq!(decode(AttributeKind::SId, "x1"), Ok(AttributeValue::from("x1")));
        assert_eq!(decode(AttributeKind::String, "any text"), Ok(AttributeValue::from("any text")));

        let kind = AttributeKind::Enum(&["linear", "cubic"]);
        assert_eq!(decode(kind, "cubic"), Ok(AttributeValue::from("cubic")));
        assert_eq!(decode(kind, "Cubic"), Err(ErrorCode::AttributeMustBeEnum));
    }

    #[test]
    fn test_sbo_term_round_trip() {
        let value = decode(AttributeKind::SboTerm, "SBO:0000002").unwrap();
        assert_eq!(value, AttributeValue::Unsigned(2));
        assert_eq!(encode(AttributeKind::SboTerm, &value), "SBO:0000002");
        assert_eq!(decode(AttributeKind::SboTerm, "2"), Err(ErrorCode::InvalidSboTermSyntax));
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(1.5), "1.5");
        assert_eq!(format_double(2.0), "2");
        assert_eq!(format_double(0.0), "0");
        assert_eq!(format_double(1e300), "1e300");
        assert_eq!(format_double(1.5e-7), "1.5e-7");
        assert_eq!(format_double(f64::NEG_INFINITY), "-INF");
        assert_eq!(format_double(f64::NAN), "NaN");
        for value in [0.1, 1.0 / 3.0, 123456.789, 6.02214076e23, -4.2e-12] {
            assert_eq!(parse_double(&format_double(value)), Some(value));
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate("num", AttributeKind::Unsigned, &AttributeValue::Unsigned(1)).is_ok());
        assert!(validate("num", AttributeKind::Unsigned, &AttributeValue::Int(1)).is_err());
        assert!(validate("id", AttributeKind::SId, &AttributeValue::from("ok")).is_ok());
        assert!(validate("id", AttributeKind::SId, &AttributeValue::from("not ok")).is_err());
    }

    #[test]
    fn test_vector_text() {
        let v = NumericVector::Double(vec![1.5]);
        assert_eq!(v.to_text(), " 1.5 ");
        let v = NumericVector::Int(vec![1, -2, 3]);
        assert_eq!(v.to_text(), " 1 -2 3 ");
        assert_eq!(NumericVector::Int(vec![]).to_text(), " ");
    }

    #[test]
    fn test_vector_parse() {
        assert_eq!(
            NumericVector::parse(VectorKind::Double, "\n 1.5  2 \t3e1 "),
            Ok(NumericVector::Double(vec![1.5, 2.0, 30.0]))
        );
        assert_eq!(
            NumericVector::parse(VectorKind::Unsigned, "1 -2"),
            Err("-2".to_string())
        );
        assert_eq!(NumericVector::parse(VectorKind::Int, "   "), Ok(NumericVector::Int(vec![])));
        assert_eq!(
            NumericVector::parse(VectorKind::Double, "1 infinity nan"),
            Err("infinity".to_string())
        );
        assert_eq!(
            NumericVector::parse(VectorKind::Double, "-INF 0 INF"),
            Ok(NumericVector::Double(vec![f64::NEG_INFINITY, 0.0, f64::INFINITY]))
        );
    }
}
