//! Diagnostic records and the per-document error log

use super::codes::{ErrorCategory, ErrorCode, Severity};
use super::table;
use crate::error::Result;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    /// Diagnostic code
    pub code: ErrorCode,
    /// Category, taken from the table
    pub category: ErrorCategory,
    /// Severity, taken from the table unless overridden
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// 1-based line, 0 when unknown
    pub line: u32,
    /// 1-based column, 0 when unknown
    pub column: u32,
    /// Element the diagnostic is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Attribute the diagnostic is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Package that owns the element, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl ErrorRecord {
    /// Create a record with the table defaults for `code`
    pub fn new(code: ErrorCode) -> Self {
        let row = table::entry(code);
        Self {
            code,
            category: row.category,
            severity: row.severity,
            message: row.short_message.to_string(),
            line: 0,
            column: 0,
            element: None,
            attribute: None,
            package: None,
        }
    }

    /// Replace the message with specific details
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the element
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Set the attribute
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set the package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the source location
    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Override the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The one-line summary from the table
    pub fn short_message(&self) -> &'static str {
        table::entry(self.code).short_message
    }

    /// Whether this record is about the given element and attribute
    pub fn concerns(&self, element: &str, attribute: &str) -> bool {
        self.element.as_deref() == Some(element) && self.attribute.as_deref() == Some(attribute)
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{}: ", self.line, self.column)?;
        }
        write!(f, "({} [{}]) {}", self.code, self.severity, self.message)
    }
}

/// Ordered, append-only collection of diagnostics for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorLog {
    records: Vec<ErrorRecord>,
}

impl ErrorLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn add(&mut self, record: ErrorRecord) {
        if record.severity == Severity::Fatal {
            warn!("{}", record);
        } else {
            debug!("{}", record);
        }
        self.records.push(record);
    }

    /// Build and append a record in one call
    pub fn log(
        &mut self,
        code: ErrorCode,
        element: &str,
        attribute: Option<&str>,
        details: impl Into<String>,
        line: u32,
        column: u32,
    ) {
        let mut record = ErrorRecord::new(code)
            .with_element(element)
            .with_message(details)
            .with_location(line, column);
        if let Some(attribute) = attribute {
            record = record.with_attribute(attribute);
        }
        self.add(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position `n`
    pub fn get(&self, n: usize) -> Option<&ErrorRecord> {
        self.records.get(n)
    }

    /// Iterate over records in the order they were logged
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorRecord> {
        self.records.iter()
    }

    /// Whether any record has `code`
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.records.iter().any(|r| r.code == code)
    }

    /// Number of records with `code`
    pub fn count_code(&self, code: ErrorCode) -> usize {
        self.records.iter().filter(|r| r.code == code).count()
    }

    /// Remove the most recent record with `code`, returning it.
    ///
    /// This is the only mutation besides [`add`](Self::add) and
    /// [`clear`](Self::clear); it exists for callers that replace a generic
    /// diagnostic by a more specific one.
    pub fn remove(&mut self, code: ErrorCode) -> Option<ErrorRecord> {
        let index = self.records.iter().rposition(|r| r.code == code)?;
        Some(self.records.remove(index))
    }

    /// Number of records with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.records.iter().filter(|r| r.severity == severity).count()
    }

    /// Whether any record is an error or fatal
    pub fn has_errors(&self) -> bool {
        self.records.iter().any(|r| r.severity >= Severity::Error)
    }

    /// Whether any record is fatal
    pub fn has_fatal(&self) -> bool {
        self.records.iter().any(|r| r.severity == Severity::Fatal)
    }

    /// Records about the given element
    pub fn for_element<'a>(&'a self, element: &'a str) -> impl Iterator<Item = &'a ErrorRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.element.as_deref() == Some(element))
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Render the log as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a ErrorRecord;
    type IntoIter = std::slice::Iter<'a, ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(attribute: &str) -> ErrorRecord {
        ErrorRecord::new(ErrorCode::MissingRequiredAttribute)
            .with_element("parameter")
            .with_attribute(attribute)
    }

    #[test]
    fn test_record_defaults_from_table() {
        let record = ErrorRecord::new(ErrorCode::XmlParseError);
        assert_eq!(record.severity, Severity::Fatal);
        assert_eq!(record.category, ErrorCategory::Xml);
        assert_eq!(record.message, "Malformed XML");
    }

    #[test]
    fn test_record_display() {
        let record = missing("id")
            .with_message("<parameter> is missing required attribute 'id'")
            .with_location(3, 5);
        assert_eq!(
            record.to_string(),
            "3:5: (00012 [Error]) <parameter> is missing required attribute 'id'"
        );
        assert_eq!(
            missing("id").with_message("no location").to_string(),
            "(00012 [Error]) no location"
        );
        assert!(record.concerns("parameter", "id"));
        assert!(!record.concerns("parameter", "constant"));
    }

    #[test]
    fn test_log_order_and_counts() {
        let mut log = ErrorLog::new();
        log.add(missing("id"));
        log.add(ErrorRecord::new(ErrorCode::InvalidIdSyntax).with_severity(Severity::Warning));
        log.add(missing("constant"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0).unwrap().attribute.as_deref(), Some("id"));
        assert_eq!(log.count(Severity::Error), 2);
        assert_eq!(log.count(Severity::Warning), 1);
        assert_eq!(log.count_code(ErrorCode::MissingRequiredAttribute), 2);
        assert!(log.has_errors());
        assert!(!log.has_fatal());
    }

    #[test]
    fn test_remove_takes_most_recent() {
        let mut log = ErrorLog::new();
        log.add(missing("id"));
        log.add(missing("constant"));

        let removed = log.remove(ErrorCode::MissingRequiredAttribute).unwrap();
        assert_eq!(removed.attribute.as_deref(), Some("constant"));
        assert_eq!(log.len(), 1);
        assert!(log.remove(ErrorCode::DuplicateSId).is_none());
    }

    #[test]
    fn test_to_json() {
        let mut log = ErrorLog::new();
        log.add(missing("id"));
        let json = log.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["code"], "MissingRequiredAttribute");
        assert_eq!(value[0]["severity"], "error");
        assert_eq!(value[0]["attribute"], "id");
        assert!(value[0].get("package").is_none());
    }

    #[test]
    fn test_log_builds_record() {
        let mut log = ErrorLog::new();
        log.log(ErrorCode::DuplicateSId, "parameter", Some("id"), "duplicate id 'k'", 7, 2);
        log.log(ErrorCode::UnrecognizedElement, "model", None, "unexpected <foo>", 0, 0);

        let first = log.get(0).unwrap();
        assert!(first.concerns("parameter", "id"));
        assert_eq!((first.line, first.column), (7, 2));
        assert!(log.get(1).unwrap().attribute.is_none());
        assert_eq!(log.for_element("model").count(), 1);
    }
}
