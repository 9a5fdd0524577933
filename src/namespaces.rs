//! XML namespace handling
//!
//! This module provides qualified names, scoped prefix resolution, and the
//! registry of SBML core and package namespaces a document may use.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// SBML Level 3 Version 1 core namespace
pub const SBML_L3V1_NAMESPACE: &str = "http://www.sbml.org/sbml/level3/version1/core";

/// SBML Level 3 Version 2 core namespace
pub const SBML_L3V2_NAMESPACE: &str = "http://www.sbml.org/sbml/level3/version2/core";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Qualified name (QName) - combination of namespace and local name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI (None for no namespace)
    pub namespace: Option<String>,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a QName without a namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }

    /// Create a QName with a namespace
    pub fn namespaced(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// Prefix declarations made on a single element
#[derive(Debug, Clone, Default)]
pub struct NamespaceContext {
    /// Mapping from prefix to namespace URI
    prefixes: HashMap<String, String>,
    /// Default namespace (no prefix)
    default_namespace: Option<String>,
}

impl NamespaceContext {
    /// Create a new empty namespace context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a namespace prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Set the default namespace
    pub fn set_default_namespace(&mut self, namespace: impl Into<String>) {
        self.default_namespace = Some(namespace.into());
    }

    /// Get the namespace for a prefix
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Get the default namespace
    pub fn get_default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }
}

/// Stack of in-scope namespace declarations, innermost last
#[derive(Debug, Clone, Default)]
pub struct NamespaceStack {
    scopes: Vec<NamespaceContext>,
}

impl NamespaceStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter an element scope
    pub fn push(&mut self, context: NamespaceContext) {
        self.scopes.push(context);
    }

    /// Leave the innermost element scope
    pub fn pop(&mut self) -> Option<NamespaceContext> {
        self.scopes.pop()
    }

    /// Resolve a prefix; `xml` is always bound
    pub fn resolve_prefix(&self, prefix: &str) -> Option<&str> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE);
        }
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_namespace(prefix))
    }

    /// The innermost default namespace
    pub fn default_namespace(&self) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_default_namespace())
    }

    /// Resolve an element name. Unprefixed names take the default namespace.
    pub fn resolve_element(&self, name: &str) -> Option<QName> {
        match name.split_once(':') {
            Some((prefix, local)) => self
                .resolve_prefix(prefix)
                .map(|ns| QName::namespaced(ns, local)),
            None => Some(match self.default_namespace() {
                Some(ns) => QName::namespaced(ns, name),
                None => QName::local(name),
            }),
        }
    }

    /// Resolve an attribute name. Unprefixed attributes are in no namespace.
    pub fn resolve_attribute(&self, name: &str) -> Option<QName> {
        match name.split_once(':') {
            Some((prefix, local)) => self
                .resolve_prefix(prefix)
                .map(|ns| QName::namespaced(ns, local)),
            None => Some(QName::local(name)),
        }
    }
}

/// A package that extends the core schema with its own elements
#[derive(Debug, PartialEq, Eq)]
pub struct PackageInfo {
    /// Short name, also used as the conventional prefix
    pub name: &'static str,
    /// Namespace URI
    pub uri: &'static str,
    /// Package version
    pub version: u32,
}

/// The `samples` package
pub static SAMPLES_PACKAGE: PackageInfo = PackageInfo {
    name: "samples",
    uri: "http://www.sbml.org/sbml/level3/version1/samples/version1",
    version: 1,
};

/// Packages this crate knows how to read and write
pub static KNOWN_PACKAGES: &[&PackageInfo] = &[&SAMPLES_PACKAGE];

/// Look up a known package by namespace URI
pub fn package_by_uri(uri: &str) -> Option<&'static PackageInfo> {
    KNOWN_PACKAGES.iter().copied().find(|p| p.uri == uri)
}

/// Look up a known package by short name
pub fn package_by_name(name: &str) -> Option<&'static PackageInfo> {
    KNOWN_PACKAGES.iter().copied().find(|p| p.name == name)
}

/// Core namespace URI for an SBML level and version
pub fn core_namespace(level: u32, version: u32) -> Option<&'static str> {
    match (level, version) {
        (3, 1) => Some(SBML_L3V1_NAMESPACE),
        (3, 2) => Some(SBML_L3V2_NAMESPACE),
        _ => None,
    }
}

/// Level and version encoded by a core namespace URI
pub fn level_version_of(uri: &str) -> Option<(u32, u32)> {
    match uri {
        SBML_L3V1_NAMESPACE => Some((3, 1)),
        SBML_L3V2_NAMESPACE => Some((3, 2)),
        _ => None,
    }
}

/// What a namespace URI means to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceKind {
    /// The document's core namespace
    Core,
    /// An enabled package
    Package(&'static PackageInfo),
    /// The `xml:` namespace
    Xml,
    /// Anything else
    Foreign,
}

/// Level, version and enabled packages of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbmlNamespaces {
    level: u32,
    version: u32,
    /// Enabled packages keyed by name, with their `required` flag
    packages: IndexMap<&'static str, (&'static PackageInfo, bool)>,
}

impl SbmlNamespaces {
    /// Create the namespaces for a level and version
    pub fn new(level: u32, version: u32) -> Result<Self> {
        if core_namespace(level, version).is_none() {
            return Err(Error::InvalidObject(format!(
                "unsupported SBML level {} version {}",
                level, version
            )));
        }
        Ok(Self {
            level,
            version,
            packages: IndexMap::new(),
        })
    }

    /// SBML level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// SBML version
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Core namespace URI
    pub fn core_uri(&self) -> &'static str {
        core_namespace(self.level, self.version).unwrap_or(SBML_L3V2_NAMESPACE)
    }

    /// Enable a known package
    pub fn enable_package(&mut self, name: &str, required: bool) -> Result<()> {
        let info = package_by_name(name)
            .ok_or_else(|| Error::InvalidObject(format!("unknown package '{}'", name)))?;
        self.packages.insert(info.name, (info, required));
        Ok(())
    }

    /// Disable a package
    pub fn disable_package(&mut self, name: &str) {
        self.packages.shift_remove(name);
    }

    /// Check whether a package is enabled
    pub fn is_enabled(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// The `required` flag of an enabled package
    pub fn is_required(&self, name: &str) -> Option<bool> {
        self.packages.get(name).map(|(_, required)| *required)
    }

    /// Enabled packages in the order they were enabled
    pub fn packages(&self) -> impl Iterator<Item = (&'static PackageInfo, bool)> + '_ {
        self.packages.values().copied()
    }

    /// Classify a namespace URI relative to this document
    pub fn classify(&self, uri: &str) -> NamespaceKind {
        if uri == self.core_uri() {
            NamespaceKind::Core
        } else if uri == XML_NAMESPACE {
            NamespaceKind::Xml
        } else if let Some((info, _)) = self.packages.values().find(|(p, _)| p.uri == uri) {
            NamespaceKind::Package(info)
        } else {
            NamespaceKind::Foreign
        }
    }
}

impl Default for SbmlNamespaces {
    fn default() -> Self {
        Self {
            level: 3,
            version: 2,
            packages: IndexMap::new(),
        }
    }
}
