//! Attribute reading and diagnostic classification
//!
//! Reading is two-phase per element: every attribute the start tag carries
//! that the element does not expect is classified once, then every expected
//! attribute is decoded. Each problem yields exactly one record carrying the
//! most specific code that applies, so the log never has to be rewritten.

use super::access::AttributeReadable;
use super::expected::ExpectedAttributes;
use super::spec::{AttributeKind, AttributeSpec, VectorLength, VectorSpec};
use super::values::{decode, NumericVector};
use crate::diagnostics::{ErrorCode, ErrorLog, ErrorRecord};
use crate::error::Result;
use crate::limits::Limits;
use crate::model::schema::ElementSchema;
use crate::namespaces::{NamespaceKind, QName, SbmlNamespaces};
use log::trace;

/// One attribute from a start tag, namespace-resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    /// Resolved name
    pub name: QName,
    /// Unescaped value
    pub value: String,
}

/// Attributes of one start tag, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributeTable {
    attributes: Vec<RawAttribute>,
}

impl RawAttributeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute. Returns `false`, keeping the first value, on a duplicate.
    pub fn insert(&mut self, name: QName, value: impl Into<String>) -> bool {
        if self.attributes.iter().any(|a| a.name == name) {
            return false;
        }
        self.attributes.push(RawAttribute {
            name,
            value: value.into(),
        });
        true
    }

    /// Value of an attribute
    pub fn get(&self, name: &QName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| &a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, name: &QName) -> Option<String> {
        let index = self.attributes.iter().position(|a| &a.name == name)?;
        Some(self.attributes.remove(index).value)
    }

    /// Iterate in document order
    pub fn iter(&self) -> std::slice::Iter<'_, RawAttribute> {
        self.attributes.iter()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RawAttributeTable {
    /// Build a table of attributes in no namespace
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = RawAttributeTable::new();
        for (name, value) in iter {
            table.insert(QName::local(name), value);
        }
        table
    }
}

/// State shared by every element read from one document
#[derive(Debug)]
pub struct ReadContext<'a> {
    log: &'a mut ErrorLog,
    namespaces: &'a SbmlNamespaces,
    line: u32,
    column: u32,
}

impl<'a> ReadContext<'a> {
    /// Create a context logging into `log`
    pub fn new(log: &'a mut ErrorLog, namespaces: &'a SbmlNamespaces) -> Self {
        Self {
            log,
            namespaces,
            line: 0,
            column: 0,
        }
    }

    /// Set the location attached to subsequent records
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Namespaces of the document being read
    pub fn namespaces(&self) -> &SbmlNamespaces {
        self.namespaces
    }

    /// The error log
    pub fn log(&self) -> &ErrorLog {
        self.log
    }

    /// Log a record at the current location
    pub fn report(&mut self, record: ErrorRecord) {
        let record = if record.line == 0 {
            record.with_location(self.line, self.column)
        } else {
            record
        };
        self.log.add(record);
    }
}

/// Drives [`AttributeReadable`] elements from raw attribute tables
pub struct AttributeReader;

impl AttributeReader {
    /// Read `table` into `element`
    pub fn read<E: AttributeReadable + ?Sized>(
        element: &mut E,
        table: &RawAttributeTable,
        ctx: &mut ReadContext<'_>,
    ) {
        let schema = element.schema();
        let expected = element.expected_attributes();
        trace!("reading {} attributes of <{}>", table.len(), schema.qualified_name());

        Self::classify_unexpected(schema, &expected, table, ctx);

        for spec in expected.iter() {
            match Self::lookup(schema, table, spec.name) {
                None if spec.required => {
                    let message = format!(
                        "The <{}> element is missing the required attribute '{}'.",
                        schema.name, spec.name
                    );
                    ctx.report(record(ErrorCode::MissingRequiredAttribute, schema, spec.name, message));
                }
                None => {}
                Some(raw) => match decode(spec.kind, raw) {
                    Ok(value) => {
                        if let Err(err) = element.set_attribute(spec.name, value) {
                            ctx.report(record(ErrorCode::UnknownError, schema, spec.name, err.to_string()));
                        }
                    }
                    Err(code) => {
                        let message = describe(code, schema, spec, raw);
                        ctx.report(record(code, schema, spec.name, message));
                    }
                },
            }
        }
    }

    /// Find the value for an expected attribute. Package elements also accept
    /// the attribute qualified with their own package namespace.
    fn lookup<'t>(schema: &ElementSchema, table: &'t RawAttributeTable, name: &str) -> Option<&'t str> {
        table
            .iter()
            .find(|a| a.name.local_name == name && in_own_namespace(schema, &a.name))
            .map(|a| a.value.as_str())
    }

    fn classify_unexpected(
        schema: &ElementSchema,
        expected: &ExpectedAttributes,
        table: &RawAttributeTable,
        ctx: &mut ReadContext<'_>,
    ) {
        let mut seen: Vec<&str> = Vec::new();
        for attribute in table.iter() {
            let name = &attribute.name;
            if in_own_namespace(schema, name) && expected.contains(&name.local_name) {
                // `num` and `samples:num` name the same attribute; the first wins
                if seen.contains(&name.local_name.as_str()) {
                    let message = format!(
                        "The attribute '{}' appears more than once on the <{}> element.",
                        name.local_name,
                        schema.qualified_name()
                    );
                    ctx.report(record(ErrorCode::DuplicateAttribute, schema, &name.local_name, message));
                } else {
                    seen.push(&name.local_name);
                }
                continue;
            }
            let code = match name.namespace.as_deref() {
                None if schema.package.is_some() => ErrorCode::PackageAllowedAttributes,
                None => ErrorCode::UnknownCoreAttribute,
                Some(uri) => match ctx.namespaces().classify(uri) {
                    NamespaceKind::Core if schema.package.is_some() => {
                        ErrorCode::PackageAllowedCoreAttributes
                    }
                    NamespaceKind::Core => ErrorCode::UnknownCoreAttribute,
                    NamespaceKind::Package(p) if schema.package.map(|own| own.name) == Some(p.name) => {
                        ErrorCode::PackageAllowedAttributes
                    }
                    NamespaceKind::Package(_) => ErrorCode::UnknownPackageAttribute,
                    NamespaceKind::Xml | NamespaceKind::Foreign => {
                        trace!("ignoring foreign attribute {} on <{}>", name, schema.name);
                        continue;
                    }
                },
            };
            let message = format!(
                "Attribute '{}' is not permitted on the <{}> element.",
                name, schema.qualified_name()
            );
            let mut rec = ErrorRecord::new(code)
                .with_element(schema.name)
                .with_attribute(name.local_name.clone())
                .with_message(message);
            if let Some(package) = schema.package {
                rec = rec.with_package(package.name);
            }
            ctx.report(rec);
        }
    }

    /// Decode the text of a vector child element into `element`
    pub fn read_vector<E: AttributeReadable + ?Sized>(
        element: &mut E,
        spec: &VectorSpec,
        text: &str,
        limits: &Limits,
        ctx: &mut ReadContext<'_>,
    ) -> Result<()> {
        let schema = element.schema();
        if element.vector(spec.name).is_some() {
            let message = format!(
                "The <{}> element may contain only one <{}> element.",
                schema.name, spec.name
            );
            ctx.report(record(ErrorCode::OnlyOneChildAllowed, schema, spec.name, message));
            return Ok(());
        }
        match NumericVector::parse(spec.kind, text) {
            Ok(vector) => {
                limits.check_vector_length(vector.len())?;
                if let Err(err) = element.set_vector(spec.name, vector) {
                    ctx.report(record(ErrorCode::UnknownError, schema, spec.name, err.to_string()));
                }
            }
            Err(token) => {
                let message = format!(
                    "The <{}> element of <{}> contains '{}', which is not a {}.",
                    spec.name,
                    schema.name,
                    token,
                    spec.kind.type_name()
                );
                ctx.report(record(ErrorCode::VectorMustBeNumeric, schema, spec.name, message));
            }
        }
        Ok(())
    }

    /// Check presence and length of every declared vector once an element is complete
    pub fn check_vectors<E: AttributeReadable + ?Sized>(element: &mut E, ctx: &mut ReadContext<'_>) {
        let schema = element.schema();
        for spec in schema.vector_specs() {
            let Some(vector) = element.vector(spec.name) else {
                if spec.required {
                    let message = format!(
                        "The <{}> element is missing the required <{}> element.",
                        schema.name, spec.name
                    );
                    ctx.report(record(ErrorCode::MissingRequiredElement, schema, spec.name, message));
                }
                continue;
            };
            let expected_len = match spec.length {
                VectorLength::Any => None,
                VectorLength::Fixed(n) => Some(n),
                VectorLength::Attribute(attribute) => element
                    .attribute(attribute)
                    .and_then(|v| v.to_unsigned(attribute).ok())
                    .map(|n| n as usize),
            };
            if let Some(expected_len) = expected_len.filter(|n| *n != vector.len()) {
                let message = format!(
                    "The <{}> element of <{}> has {} values but must have {}.",
                    spec.name,
                    schema.name,
                    vector.len(),
                    expected_len
                );
                ctx.report(record(ErrorCode::ArrayLengthMismatch, schema, spec.name, message));
                if let Err(err) = element.unset_vector(spec.name) {
                    ctx.report(record(ErrorCode::UnknownError, schema, spec.name, err.to_string()));
                }
            }
        }
    }
}

fn in_own_namespace(schema: &ElementSchema, name: &QName) -> bool {
    match (&name.namespace, schema.package) {
        (None, _) => true,
        (Some(uri), Some(package)) => uri == package.uri,
        (Some(_), None) => false,
    }
}

fn record(code: ErrorCode, schema: &ElementSchema, attribute: &str, message: String) -> ErrorRecord {
    let rec = ErrorRecord::new(code)
        .with_element(schema.name)
        .with_attribute(attribute)
        .with_message(message);
    match schema.package {
        Some(package) => rec.with_package(package.name),
        None => rec,
    }
}

fn describe(code: ErrorCode, schema: &ElementSchema, spec: &AttributeSpec, raw: &str) -> String {
    match code {
        ErrorCode::EmptyStringAttribute => format!(
            "The attribute '{}' on the <{}> element must not be an empty string.",
            spec.name, schema.name
        ),
        ErrorCode::InvalidIdSyntax
        | ErrorCode::InvalidUnitIdSyntax
        | ErrorCode::InvalidMetaIdSyntax
        | ErrorCode::InvalidSboTermSyntax => format!(
            "The value '{}' of attribute '{}' on the <{}> element is not a valid {}.",
            raw, spec.name, schema.name, spec.kind
        ),
        _ => format!(
            "The attribute '{}' on the <{}> element must be {}; found '{}'.",
            spec.name,
            schema.name,
            must_be(spec.kind),
            raw
        ),
    }
}

fn must_be(kind: AttributeKind) -> String {
    match kind {
        AttributeKind::Enum(values) => format!("one of {}", values.join(", ")),
        AttributeKind::Int => "an integer".to_string(),
        other => format!("a {}", other),
    }
}
