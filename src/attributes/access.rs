//! Capability traits implemented by every element type
//!
//! [`AttributeAccess`] is the only part an element type writes by hand; the
//! reading, writing and registry behavior comes from provided methods that
//! drive it through the type's [`ElementSchema`].

use super::expected::ExpectedAttributes;
use super::reader::{AttributeReader, RawAttributeTable, ReadContext};
use super::values::{AttributeValue, NumericVector};
use super::writer::AttributeWriter;
use crate::error::{Error, Result};
use crate::model::schema::ElementSchema;
use quick_xml::events::BytesStart;

/// Name-based access to an element's typed fields
pub trait AttributeAccess {
    /// Current value of an attribute, `None` when unset
    fn attribute(&self, name: &str) -> Option<AttributeValue>;

    /// Set an attribute through the element's typed setter
    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()>;

    /// Unset an attribute
    fn unset_attribute(&mut self, name: &str) -> Result<()>;

    /// Current value of a vector, `None` when unset
    fn vector(&self, _name: &str) -> Option<NumericVector> {
        None
    }

    /// Set a vector
    fn set_vector(&mut self, name: &str, _value: NumericVector) -> Result<()> {
        Err(Error::OperationFailed(format!("no vector named '{}'", name)))
    }

    /// Unset a vector
    fn unset_vector(&mut self, name: &str) -> Result<()> {
        Err(Error::OperationFailed(format!("no vector named '{}'", name)))
    }
}

/// Declares which attributes are legal on an element's start tag
pub trait ExpectedAttributeProvider {
    /// Static descriptor of the element type
    fn schema(&self) -> &'static ElementSchema;

    /// Own attributes plus those of every ancestor type, ancestors first
    fn expected_attributes(&self) -> ExpectedAttributes {
        self.schema().expected_attributes()
    }
}

/// Populates typed fields from a start tag
pub trait AttributeReadable: AttributeAccess + ExpectedAttributeProvider {
    /// Decode `table` into this element, logging one record per problem
    fn read_attributes(&mut self, table: &RawAttributeTable, ctx: &mut ReadContext<'_>) {
        AttributeReader::read(self, table, ctx);
    }

    /// Whether every required attribute is set
    fn has_required_attributes(&self) -> bool {
        self.expected_attributes()
            .required()
            .all(|spec| self.attribute(spec.name).is_some())
    }
}

/// Serializes set fields as attributes
pub trait AttributeWritable: AttributeAccess + ExpectedAttributeProvider {
    /// Push every set attribute onto `start`, in declaration order
    fn write_attributes(&self, start: &mut BytesStart<'_>) {
        AttributeWriter::write_attributes(self, start);
    }

    /// Set vectors in declaration order
    fn vectors_to_write(&self) -> Vec<(&'static str, NumericVector)> {
        AttributeWriter::vectors(self)
    }
}
