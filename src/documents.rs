//! SBML documents
//!
//! A [`Document`] owns every element in an arena. Elements refer to each
//! other through [`NodeId`]s: each node records its parent and its children
//! in insertion order, so a node reachable from the root has exactly one
//! parent and the tree cannot contain cycles.

use crate::diagnostics::{ErrorCode, ErrorLog, ErrorRecord};
use crate::error::{Error, Result};
use crate::model::core::SbmlRoot;
use crate::model::sbase::SBaseElement;
use crate::model::schema::{qualify, TypeCode};
use crate::namespaces::SbmlNamespaces;
use log::debug;
use std::collections::HashMap;

/// Handle to an element of a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) element: Box<dyn SBaseElement>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An SBML document: element tree, namespaces and diagnostics
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: Option<NodeId>,
    pub(crate) namespaces: SbmlNamespaces,
    pub(crate) error_log: ErrorLog,
}

impl Document {
    /// Create a document whose root `<sbml>` element carries `level` and `version`
    pub fn new(level: u32, version: u32) -> Result<Self> {
        let mut doc = Self::with_namespaces(SbmlNamespaces::new(level, version)?);
        let root = doc.push_node(None, Box::new(SbmlRoot::with_level_version(level, version)));
        doc.root = Some(root);
        Ok(doc)
    }

    /// A document with no elements
    pub(crate) fn with_namespaces(namespaces: SbmlNamespaces) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            namespaces,
            error_log: ErrorLog::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.namespaces.level()
    }

    pub fn version(&self) -> u32 {
        self.namespaces.version()
    }

    /// Level, version and enabled packages
    pub fn namespaces(&self) -> &SbmlNamespaces {
        &self.namespaces
    }

    /// Enable a package so its elements may be added
    pub fn enable_package(&mut self, name: &str, required: bool) -> Result<()> {
        self.namespaces.enable_package(name, required)
    }

    /// Diagnostics collected while reading or checking
    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    pub fn error_log_mut(&mut self) -> &mut ErrorLog {
        &mut self.error_log
    }

    /// The `<sbml>` element
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Replace the root. Only an `<sbml>` element can be the root.
    pub fn set_root(&mut self, element: Box<dyn SBaseElement>) -> Result<NodeId> {
        if element.type_code() != TypeCode::SBML_DOCUMENT {
            return Err(Error::InvalidObject(format!(
                "<{}> cannot be the document root",
                element.element_name()
            )));
        }
        let root = self.push_node(None, element);
        self.root = Some(root);
        Ok(root)
    }

    /// The `<model>` under the root
    pub fn model(&self) -> Option<NodeId> {
        self.child_of_type(self.root?, TypeCode::MODEL)
    }

    pub(crate) fn push_node(&mut self, parent: Option<NodeId>, element: Box<dyn SBaseElement>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::InvalidObject(format!("no element with handle {}", id.0)))
    }

    /// Add `element` as the last child of `parent`.
    ///
    /// Fails with [`Error::InvalidObject`] when the parent's type does not
    /// allow such a child, and with [`Error::OperationFailed`] when a single
    /// child is already present or the child's package is not enabled.
    pub fn append_child(&mut self, parent: NodeId, element: Box<dyn SBaseElement>) -> Result<NodeId> {
        let parent_element = self.node(parent)?.element.as_ref();
        let parent_schema = parent_element.schema();
        let schema = element.schema();

        let spec = parent_schema
            .child(schema.name, schema.package)
            .filter(|spec| (spec.create)().schema() == schema)
            .ok_or_else(|| {
                Error::InvalidObject(format!(
                    "<{}> cannot contain <{}>",
                    parent_schema.qualified_name(),
                    schema.qualified_name()
                ))
            })?;

        if let Some(package) = spec.package {
            if !self.namespaces.is_enabled(package.name) {
                return Err(Error::OperationFailed(format!(
                    "package '{}' is not enabled",
                    package.name
                )));
            }
        }
        if !spec.multiple && self.child_named(parent, spec.name, spec.package.map(|p| p.name)).is_some() {
            return Err(Error::OperationFailed(format!(
                "<{}> may contain only one <{}>",
                parent_schema.qualified_name(),
                qualify(spec.package, spec.name)
            )));
        }

        debug!("appending <{}> to <{}>", schema.qualified_name(), parent_schema.name);
        Ok(self.push_node(Some(parent), element))
    }

    /// Typed convenience over [`append_child`](Self::append_child)
    pub fn append<T: SBaseElement>(&mut self, parent: NodeId, element: T) -> Result<NodeId> {
        self.append_child(parent, Box::new(element))
    }

    /// Unlink a node from its parent. The node and its subtree stay
    /// addressable but are no longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        if Some(id) == self.root {
            return Err(Error::OperationFailed("cannot detach the document root".to_string()));
        }
        let parent = self
            .node(id)?
            .parent
            .ok_or_else(|| Error::OperationFailed(format!("element {} is already detached", id.0)))?;
        self.nodes[parent.0].children.retain(|child| *child != id);
        self.nodes[id.0].parent = None;
        Ok(())
    }

    pub fn element(&self, id: NodeId) -> Option<&dyn SBaseElement> {
        let node = self.nodes.get(id.0)?;
        Some(node.element.as_ref() as &dyn SBaseElement)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut dyn SBaseElement> {
        let node = self.nodes.get_mut(id.0)?;
        Some(node.element.as_mut() as &mut dyn SBaseElement)
    }

    /// The element as its concrete type
    pub fn downcast<T: SBaseElement>(&self, id: NodeId) -> Option<&T> {
        self.element(id)?.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: SBaseElement>(&mut self, id: NodeId) -> Option<&mut T> {
        self.element_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Children in insertion order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// First child with the given local name and package
    pub fn child_named(&self, id: NodeId, name: &str, package: Option<&str>) -> Option<NodeId> {
        self.children(id).iter().copied().find(|child| {
            let schema = self.nodes[child.0].element.schema();
            schema.name == name && schema.package.map(|p| p.name) == package
        })
    }

    /// First child of the given type
    pub fn child_of_type(&self, id: NodeId, code: TypeCode) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].element.type_code() == code)
    }

    /// Nearest proper ancestor whose type code is `code`
    pub fn ancestor_of_type(&self, id: NodeId, code: TypeCode) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if self.nodes[node.0].element.type_code() == code {
                return Some(node);
            }
            current = self.nodes[node.0].parent;
        }
        None
    }

    /// Every node below `id`, depth-first in document order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// First descendant of `id` whose `id` attribute is `sid`
    pub fn element_by_sid(&self, id: NodeId, sid: &str) -> Option<NodeId> {
        self.descendants(id)
            .into_iter()
            .find(|node| self.nodes[node.0].element.id() == Some(sid))
    }

    /// First descendant of `id` whose `metaid` is `metaid`
    pub fn element_by_metaid(&self, id: NodeId, metaid: &str) -> Option<NodeId> {
        self.descendants(id)
            .into_iter()
            .find(|node| self.nodes[node.0].element.metaid() == Some(metaid))
    }

    /// Whether every required attribute of the element is set
    pub fn has_required_attributes(&self, id: NodeId) -> bool {
        self.element(id).map_or(false, |e| e.has_required_attributes())
    }

    /// Whether every required child element and vector of the element is present
    pub fn has_required_elements(&self, id: NodeId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let schema = element.schema();
        let children_present = schema
            .children
            .iter()
            .filter(|spec| spec.required)
            .all(|spec| self.child_named(id, spec.name, spec.package.map(|p| p.name)).is_some());
        let vectors_present = schema
            .vector_specs()
            .into_iter()
            .filter(|spec| spec.required)
            .all(|spec| element.vector(spec.name).is_some());
        children_present && vectors_present
    }

    /// Log every `id` and `metaid` that occurs more than once in the tree.
    /// Returns the number of duplicates found.
    pub fn check_identifiers(&mut self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut nodes = vec![root];
        nodes.extend(self.descendants(root));

        let mut sids: HashMap<String, NodeId> = HashMap::new();
        let mut metaids: HashMap<String, NodeId> = HashMap::new();
        let mut records = Vec::new();
        for node in nodes {
            let element = self.nodes[node.0].element.as_ref();
            if let Some(sid) = element.id() {
                if sids.insert(sid.to_string(), node).is_some() {
                    records.push(duplicate(ErrorCode::DuplicateSId, element, "id", sid));
                }
            }
            if let Some(metaid) = element.metaid() {
                if metaids.insert(metaid.to_string(), node).is_some() {
                    records.push(duplicate(ErrorCode::DuplicateMetaId, element, "metaid", metaid));
                }
            }
        }
        let count = records.len();
        for record in records {
            self.error_log.add(record);
        }
        count
    }
}

fn duplicate(code: ErrorCode, element: &dyn SBaseElement, attribute: &str, value: &str) -> ErrorRecord {
    ErrorRecord::new(code)
        .with_element(element.element_name())
        .with_attribute(attribute)
        .with_message(format!(
            "The {} '{}' of <{}> is already used by another element.",
            attribute,
            value,
            element.element_name()
        ))
}
