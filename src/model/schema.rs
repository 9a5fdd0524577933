//! Static per-type descriptors
//!
//! An [`ElementSchema`] describes one element type: its name, type code,
//! owning package, parent type, attributes, vectors and allowed children.
//! Inheritance is expressed by the `parent` link; collecting expected
//! attributes always walks that chain root-first, so a type never has to
//! remember to call its parent.

use super::sbase::SBaseElement;
use crate::attributes::{AttributeSpec, ExpectedAttributes, VectorSpec};
use crate::namespaces::PackageInfo;
use std::fmt;

/// Integer tag identifying the concrete kind of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode(pub u32);

impl TypeCode {
    /// Abstract base of every element
    pub const SBASE: TypeCode = TypeCode(0);
    /// The `<sbml>` root element
    pub const SBML_DOCUMENT: TypeCode = TypeCode(1);
    /// `<model>`
    pub const MODEL: TypeCode = TypeCode(2);
    /// `<parameter>`
    pub const PARAMETER: TypeCode = TypeCode(3);
    /// Any `ListOf*` container
    pub const LIST_OF: TypeCode = TypeCode(4);
    /// `<samples:sample>`
    pub const SAMPLE: TypeCode = TypeCode(100);
    /// `<samples:calibration>`
    pub const CALIBRATION: TypeCode = TypeCode(101);
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A child element an element type may contain
#[derive(Debug)]
pub struct ChildSpec {
    /// Child element local name
    pub name: &'static str,
    /// Package of the child, `None` for core
    pub package: Option<&'static PackageInfo>,
    /// Whether at least one instance must be present
    pub required: bool,
    /// Whether more than one instance may be present
    pub multiple: bool,
    /// Constructor for an empty child
    pub create: fn() -> Box<dyn SBaseElement>,
}

/// Descriptor of one element type
#[derive(Debug)]
pub struct ElementSchema {
    /// Element local name
    pub name: &'static str,
    /// Type code
    pub type_code: TypeCode,
    /// Owning package, `None` for core
    pub package: Option<&'static PackageInfo>,
    /// Parent type whose attributes are inherited
    pub parent: Option<&'static ElementSchema>,
    /// Attributes declared by this type
    pub attributes: &'static [AttributeSpec],
    /// Numeric vectors declared by this type
    pub vectors: &'static [VectorSpec],
    /// Child elements allowed by this type
    pub children: &'static [ChildSpec],
}

impl ElementSchema {
    /// Add this type's attributes to `expected`, after those of its ancestors
    pub fn collect(&self, expected: &mut ExpectedAttributes) {
        if let Some(parent) = self.parent {
            parent.collect(expected);
        }
        expected.extend(self.attributes);
    }

    /// Complete expected attribute set
    pub fn expected_attributes(&self) -> ExpectedAttributes {
        let mut expected = ExpectedAttributes::new();
        self.collect(&mut expected);
        expected
    }

    /// Vector declarations of this type and its ancestors, root-first
    pub fn vector_specs(&self) -> Vec<&'static VectorSpec> {
        let mut specs = self.parent.map(|p| p.vector_specs()).unwrap_or_default();
        specs.extend(self.vectors.iter());
        specs
    }

    /// Vector declaration by element name
    pub fn vector(&self, name: &str) -> Option<&'static VectorSpec> {
        self.vector_specs().into_iter().find(|v| v.name == name)
    }

    /// Allowed child by name and package
    pub fn child(&self, name: &str, package: Option<&PackageInfo>) -> Option<&ChildSpec> {
        self.children.iter().find(|c| {
            c.name == name && c.package.map(|p| p.name) == package.map(|p| p.name)
        })
    }

    /// Whether this type is `code` or derives from it
    pub fn is_a(&self, code: TypeCode) -> bool {
        self.type_code == code || self.parent.map_or(false, |p| p.is_a(code))
    }

    /// Tag as written: package elements carry their package prefix
    pub fn qualified_name(&self) -> String {
        qualify(self.package, self.name)
    }
}

impl PartialEq for ElementSchema {
    /// Schemas are static singletons, compared by identity
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for ElementSchema {}

/// Prefix `name` with the package's prefix, if any
pub fn qualify(package: Option<&PackageInfo>, name: &str) -> String {
    match package {
        Some(p) => format!("{}:{}", p.name, name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::core::{LIST_OF_PARAMETERS_SCHEMA, MODEL_SCHEMA, PARAMETER_SCHEMA};
    use crate::model::samples::SAMPLE_SCHEMA;
    use crate::namespaces::SAMPLES_PACKAGE;

    #[test]
    fn test_expected_attributes_include_ancestors() {
        let expected = PARAMETER_SCHEMA.expected_attributes();
        let names: Vec<_> = expected.names().collect();
        assert_eq!(
            names,
            vec!["id", "name", "metaid", "sboTerm", "value", "units", "constant"]
        );
        assert!(expected.get("id").unwrap().required);
        assert!(!expected.get("name").unwrap().required);
    }

    #[test]
    fn test_is_a() {
        assert!(PARAMETER_SCHEMA.is_a(TypeCode::PARAMETER));
        assert!(PARAMETER_SCHEMA.is_a(TypeCode::SBASE));
        assert!(!PARAMETER_SCHEMA.is_a(TypeCode::MODEL));
    }

    #[test]
    fn test_child_lookup_respects_package() {
        assert!(MODEL_SCHEMA.child("listOfParameters", None).is_some());
        assert!(MODEL_SCHEMA.child("listOfSamples", None).is_none());
        assert!(MODEL_SCHEMA
            .child("listOfSamples", Some(&SAMPLES_PACKAGE))
            .is_some());
        assert!(LIST_OF_PARAMETERS_SCHEMA.child("parameter", None).unwrap().multiple);
    }

    #[test]
    fn test_vectors_and_qualified_name() {
        assert_eq!(SAMPLE_SCHEMA.qualified_name(), "samples:sample");
        assert_eq!(MODEL_SCHEMA.qualified_name(), "model");
        assert!(SAMPLE_SCHEMA.vector("vectorDouble").is_some());
        assert!(MODEL_SCHEMA.vector("vectorDouble").is_none());
    }
}
