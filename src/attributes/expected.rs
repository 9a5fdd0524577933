//! The set of attributes legal on an element's start tag

use super::spec::AttributeSpec;
use indexmap::IndexMap;

/// Expected attributes of one element type, in declaration order.
///
/// Adding a name that is already present keeps its position and replaces
/// its declaration, so a subtype can tighten an inherited attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedAttributes {
    specs: IndexMap<&'static str, AttributeSpec>,
}

impl ExpectedAttributes {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one declaration
    pub fn add(&mut self, spec: AttributeSpec) {
        self.specs.insert(spec.name, spec);
    }

    /// Add several declarations in order
    pub fn extend(&mut self, specs: &[AttributeSpec]) {
        for spec in specs {
            self.add(*spec);
        }
    }

    /// Whether `name` is expected
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Declaration for `name`
    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.specs.get(name)
    }

    /// Number of expected attributes
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether nothing is expected
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Declarations in order
    pub fn iter(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.specs.values()
    }

    /// Required declarations in order
    pub fn required(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.specs.values().filter(|s| s.required)
    }

    /// Attribute names in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::spec::AttributeKind;

    #[test]
    fn test_union_is_idempotent() {
        let base = [
            AttributeSpec::optional("id", AttributeKind::SId),
            AttributeSpec::optional("name", AttributeKind::String),
        ];
        let mut expected = ExpectedAttributes::new();
        expected.extend(&base);
        expected.extend(&base);
        assert_eq!(expected.len(), 2);
        assert_eq!(expected.names().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn test_redeclaration_keeps_position() {
        let mut expected = ExpectedAttributes::new();
        expected.extend(&[
            AttributeSpec::optional("id", AttributeKind::SId),
            AttributeSpec::optional("name", AttributeKind::String),
        ]);
        expected.extend(&[
            AttributeSpec::required("id", AttributeKind::SId),
            AttributeSpec::required("constant", AttributeKind::Bool),
        ]);

        assert_eq!(
            expected.names().collect::<Vec<_>>(),
            vec!["id", "name", "constant"]
        );
        assert!(expected.get("id").unwrap().required);
        assert_eq!(expected.required().count(), 2);
        assert!(!expected.contains("value"));
    }
}
