//! Attributes common to every element, and the element trait object

use super::schema::{ElementSchema, TypeCode};
use crate::attributes::{
    AttributeKind, AttributeReadable, AttributeReader, AttributeSpec, AttributeValue, AttributeWritable,
    ReadContext,
};
use crate::error::{Error, Result};
use crate::names;
use std::any::Any;
use std::fmt;

/// Largest SBO term number, `SBO:9999999`
pub const MAX_SBO_TERM: u32 = 9_999_999;

/// Descriptor of the abstract base every element derives from
pub static SBASE_SCHEMA: ElementSchema = ElementSchema {
    name: "sBase",
    type_code: TypeCode::SBASE,
    package: None,
    parent: None,
    attributes: &[
        AttributeSpec::optional("id", AttributeKind::SId),
        AttributeSpec::optional("name", AttributeKind::String),
        AttributeSpec::optional("metaid", AttributeKind::Id),
        AttributeSpec::optional("sboTerm", AttributeKind::SboTerm),
    ],
    vectors: &[],
    children: &[],
};

/// `id`, `name`, `metaid` and `sboTerm`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SBase {
    id: Option<String>,
    name: Option<String>,
    metaid: Option<String>,
    sbo_term: Option<u32>,
}

impl SBase {
    /// Create with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_set_id(&self) -> bool {
        self.id.is_some()
    }

    /// Set the identifier, which must be a valid SId
    pub fn set_id(&mut self, id: &str) -> Result<()> {
        names::validate_sid("id", id)?;
        self.id = Some(id.to_string());
        Ok(())
    }

    pub fn unset_id(&mut self) {
        self.id = None;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_set_name(&self) -> bool {
        self.name.is_some()
    }

    /// Set the name. An empty name unsets it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
    }

    pub fn unset_name(&mut self) {
        self.name = None;
    }

    pub fn metaid(&self) -> Option<&str> {
        self.metaid.as_deref()
    }

    pub fn is_set_metaid(&self) -> bool {
        self.metaid.is_some()
    }

    /// Set the meta identifier, which must be a valid XML ID
    pub fn set_metaid(&mut self, metaid: &str) -> Result<()> {
        names::validate_xml_id("metaid", metaid)?;
        self.metaid = Some(metaid.to_string());
        Ok(())
    }

    pub fn unset_metaid(&mut self) {
        self.metaid = None;
    }

    /// SBO term number
    pub fn sbo_term(&self) -> Option<u32> {
        self.sbo_term
    }

    /// SBO term in its `SBO:nnnnnnn` form
    pub fn sbo_term_id(&self) -> Option<String> {
        self.sbo_term.map(names::format_sbo_term)
    }

    pub fn is_set_sbo_term(&self) -> bool {
        self.sbo_term.is_some()
    }

    /// Set the SBO term number
    pub fn set_sbo_term(&mut self, term: u32) -> Result<()> {
        if term > MAX_SBO_TERM {
            return Err(Error::invalid_value(
                "sboTerm",
                term.to_string(),
                "SBO terms have at most seven digits",
            ));
        }
        self.sbo_term = Some(term);
        Ok(())
    }

    pub fn unset_sbo_term(&mut self) {
        self.sbo_term = None;
    }

    /// Value of a common attribute by name
    pub fn get(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "id" => self.id.clone().map(AttributeValue::String),
            "name" => self.name.clone().map(AttributeValue::String),
            "metaid" => self.metaid.clone().map(AttributeValue::String),
            "sboTerm" => self.sbo_term.map(AttributeValue::Unsigned),
            _ => None,
        }
    }

    /// Set a common attribute by name; `element` names the owner in errors
    pub fn set(&mut self, element: &str, name: &str, value: AttributeValue) -> Result<()> {
        match name {
            "id" => self.set_id(&value.into_string(name)?),
            "name" => {
                self.set_name(value.into_string(name)?);
                Ok(())
            }
            "metaid" => self.set_metaid(&value.into_string(name)?),
            "sboTerm" => self.set_sbo_term(value.to_unsigned(name)?),
            _ => Err(Error::unknown_attribute(element, name)),
        }
    }

    /// Unset a common attribute by name
    pub fn unset(&mut self, element: &str, name: &str) -> Result<()> {
        match name {
            "id" => self.unset_id(),
            "name" => self.unset_name(),
            "metaid" => self.unset_metaid(),
            "sboTerm" => self.unset_sbo_term(),
            _ => return Err(Error::unknown_attribute(element, name)),
        }
        Ok(())
    }
}

/// An element that can live in a document tree
pub trait SBaseElement: AttributeReadable + AttributeWritable + fmt::Debug + Any {
    fn sbase(&self) -> &SBase;

    fn sbase_mut(&mut self) -> &mut SBase;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Concrete kind of the element
    fn type_code(&self) -> TypeCode {
        self.schema().type_code
    }

    /// Local name of the element
    fn element_name(&self) -> &'static str {
        self.schema().name
    }

    fn id(&self) -> Option<&str> {
        self.sbase().id()
    }

    fn is_set_id(&self) -> bool {
        self.sbase().is_set_id()
    }

    fn set_id(&mut self, id: &str) -> Result<()> {
        self.sbase_mut().set_id(id)
    }

    fn metaid(&self) -> Option<&str> {
        self.sbase().metaid()
    }

    fn name(&self) -> Option<&str> {
        self.sbase().name()
    }

    /// Cross-field checks once the element, its vectors and its children are read
    fn post_read(&mut self, ctx: &mut ReadContext<'_>) {
        AttributeReader::check_vectors(self, ctx);
    }
}

/// Implement the capability traits and [`SBaseElement`] for a struct with
/// a `base: SBase` field and a static schema
macro_rules! impl_sbase_element {
    ($ty:ty, $schema:expr) => {
        impl $crate::attributes::ExpectedAttributeProvider for $ty {
            fn schema(&self) -> &'static $crate::model::schema::ElementSchema {
                &$schema
            }
        }

        impl $crate::attributes::AttributeReadable for $ty {}

        impl $crate::attributes::AttributeWritable for $ty {}

        impl $crate::model::sbase::SBaseElement for $ty {
            fn sbase(&self) -> &$crate::model::sbase::SBase {
                &self.base
            }

            fn sbase_mut(&mut self) -> &mut $crate::model::sbase::SBase {
                &mut self.base
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}

pub(crate) use impl_sbase_element;
