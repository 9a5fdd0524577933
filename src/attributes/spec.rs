//! Attribute and vector declarations
//!
//! Every element type declares its attributes as a static slice of
//! [`AttributeSpec`] and its numeric vectors as [`VectorSpec`].

use std::fmt;

/// Declared kind of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Any string
    String,
    /// A string in the SId grammar
    SId,
    /// A string in the UnitSId grammar
    UnitSId,
    /// A string in the XML ID grammar
    Id,
    /// An SBO term reference, stored as its number
    SboTerm,
    /// Signed 32-bit integer
    Int,
    /// Unsigned 32-bit integer
    Unsigned,
    /// Double-precision number
    Double,
    /// Boolean
    Bool,
    /// One of a fixed set of strings
    Enum(&'static [&'static str]),
}

impl AttributeKind {
    /// Name of the kind as used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::SId => "SId",
            AttributeKind::UnitSId => "UnitSId",
            AttributeKind::Id => "ID",
            AttributeKind::SboTerm => "SBO term",
            AttributeKind::Int => "integer",
            AttributeKind::Unsigned => "non-negative integer",
            AttributeKind::Double => "double",
            AttributeKind::Bool => "boolean",
            AttributeKind::Enum(_) => "enumeration",
        }
    }

    /// Whether values of this kind are stored as strings
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            AttributeKind::String
                | AttributeKind::SId
                | AttributeKind::UnitSId
                | AttributeKind::Id
                | AttributeKind::Enum(_)
        )
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Declaration of one attribute of an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// XML attribute name, verbatim
    pub name: &'static str,
    /// Declared kind
    pub kind: AttributeKind,
    /// Whether the attribute must be present
    pub required: bool,
}

impl AttributeSpec {
    /// Declare a required attribute
    pub const fn required(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// Declare an optional attribute
    pub const fn optional(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Element type of a numeric vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    /// Signed 32-bit integers
    Int,
    /// Unsigned 32-bit integers
    Unsigned,
    /// Doubles
    Double,
}

impl VectorKind {
    /// Name of the kind as used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            VectorKind::Int => "integer",
            VectorKind::Unsigned => "non-negative integer",
            VectorKind::Double => "double",
        }
    }
}

/// Length constraint on a numeric vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorLength {
    /// Any number of values
    Any,
    /// Exactly this many values
    Fixed(usize),
    /// As many values as the named unsigned attribute of the same element
    Attribute(&'static str),
}

/// Declaration of a numeric vector, serialized as a child element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorSpec {
    /// Child element name
    pub name: &'static str,
    /// Value type
    pub kind: VectorKind,
    /// Whether the child element must be present
    pub required: bool,
    /// Length constraint
    pub length: VectorLength,
}

impl VectorSpec {
    /// Declare an optional variable-length vector
    pub const fn optional(name: &'static str, kind: VectorKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            length: VectorLength::Any,
        }
    }

    /// Declare a variable-length vector that must be present
    pub const fn required(name: &'static str, kind: VectorKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            length: VectorLength::Any,
        }
    }

    /// Declare an optional vector of exactly `len` values
    pub const fn fixed(name: &'static str, kind: VectorKind, len: usize) -> Self {
        Self {
            name,
            kind,
            required: false,
            length: VectorLength::Fixed(len),
        }
    }

    /// Declare an array whose length is given by another attribute
    pub const fn array(name: &'static str, kind: VectorKind, length_attribute: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            length: VectorLength::Attribute(length_attribute),
        }
    }
}
