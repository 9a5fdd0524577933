//! Core elements: the `<sbml>` root, `<model>`, `<parameter>` and `ListOf*` containers

use super::samples::{create_list_of_samples, LIST_OF_SAMPLES_SCHEMA};
use super::sbase::{impl_sbase_element, SBase, SBaseElement, SBASE_SCHEMA};
use super::schema::{ChildSpec, ElementSchema, TypeCode};
use crate::attributes::{
    AttributeAccess, AttributeKind, AttributeReadable, AttributeSpec, AttributeValue, AttributeWritable,
    ExpectedAttributeProvider,
};
use crate::error::Result;
use crate::names;
use crate::namespaces::SAMPLES_PACKAGE;

/// The `<sbml>` root element
pub static SBML_SCHEMA: ElementSchema = ElementSchema {
    name: "sbml",
    type_code: TypeCode::SBML_DOCUMENT,
    package: None,
    parent: Some(&SBASE_SCHEMA),
    attributes: &[
        AttributeSpec::required("level", AttributeKind::Unsigned),
        AttributeSpec::required("version", AttributeKind::Unsigned),
    ],
    vectors: &[],
    children: &[ChildSpec {
        name: "model",
        package: None,
        required: true,
        multiple: false,
        create: create_model,
    }],
};

/// `<model>`, holding the parameter and sample lists
pub static MODEL_SCHEMA: ElementSchema = ElementSchema {
    name: "model",
    type_code: TypeCode::MODEL,
    package: None,
    parent: Some(&SBASE_SCHEMA),
    attributes: &[
        AttributeSpec::optional("substanceUnits", AttributeKind::UnitSId),
        AttributeSpec::optional("timeUnits", AttributeKind::UnitSId),
        AttributeSpec::optional("extentUnits", AttributeKind::UnitSId),
    ],
    vectors: &[],
    children: &[
        ChildSpec {
            name: "listOfParameters",
            package: None,
            required: false,
            multiple: false,
            create: create_list_of_parameters,
        },
        ChildSpec {
            name: "listOfSamples",
            package: Some(&SAMPLES_PACKAGE),
            required: false,
            multiple: false,
            create: create_list_of_samples,
        },
    ],
};

/// `<parameter>` redeclares the inherited `id` as required
pub static PARAMETER_SCHEMA: ElementSchema = ElementSchema {
    name: "parameter",
    type_code: TypeCode::PARAMETER,
    package: None,
    parent: Some(&SBASE_SCHEMA),
    attributes: &[
        AttributeSpec::required("id", AttributeKind::SId),
        AttributeSpec::optional("value", AttributeKind::Double),
        AttributeSpec::optional("units", AttributeKind::UnitSId),
        AttributeSpec::required("constant", AttributeKind::Bool),
    ],
    vectors: &[],
    children: &[],
};

/// `<listOfParameters>`
pub static LIST_OF_PARAMETERS_SCHEMA: ElementSchema = ElementSchema {
    name: "listOfParameters",
    type_code: TypeCode::LIST_OF,
    package: None,
    parent: Some(&SBASE_SCHEMA),
    attributes: &[],
    vectors: &[],
    children: &[ChildSpec {
        name: "parameter",
        package: None,
        required: false,
        multiple: true,
        create: create_parameter,
    }],
};

fn create_model() -> Box<dyn SBaseElement> {
    Box::new(Model::new())
}

fn create_parameter() -> Box<dyn SBaseElement> {
    Box::new(Parameter::new())
}

fn create_list_of_parameters() -> Box<dyn SBaseElement> {
    Box::new(ListOf::new(&LIST_OF_PARAMETERS_SCHEMA))
}

/// The `<sbml>` root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SbmlRoot {
    base: SBase,
    level: Option<u32>,
    version: Option<u32>,
}

impl SbmlRoot {
    /// An empty root with neither level nor version
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with level and version set
    pub fn with_level_version(level: u32, version: u32) -> Self {
        Self {
            level: Some(level),
            version: Some(version),
            ..Self::default()
        }
    }

    /// SBML level
    pub fn level(&self) -> Option<u32> {
        self.level
    }

    /// Set the SBML level
    pub fn set_level(&mut self, level: u32) {
        self.level = Some(level);
    }

    /// SBML version within the level
    pub fn version(&self) -> Option<u32> {
        self.version
    }

    /// Set the SBML version
    pub fn set_version(&mut self, version: u32) {
        self.version = Some(version);
    }
}

impl AttributeAccess for SbmlRoot {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "level" => self.level.map(AttributeValue::Unsigned),
            "version" => self.version.map(AttributeValue::Unsigned),
            _ => self.base.get(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()> {
        match name {
            "level" => self.level = Some(value.to_unsigned(name)?),
            "version" => self.version = Some(value.to_unsigned(name)?),
            _ => return self.base.set(SBML_SCHEMA.name, name, value),
        }
        Ok(())
    }

    fn unset_attribute(&mut self, name: &str) -> Result<()> {
        match name {
            "level" => self.level = None,
            "version" => self.version = None,
            _ => return self.base.unset(SBML_SCHEMA.name, name),
        }
        Ok(())
    }
}

impl_sbase_element!(SbmlRoot, SBML_SCHEMA);

/// A `<model>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    base: SBase,
    substance_units: Option<String>,
    time_units: Option<String>,
    extent_units: Option<String>,
}

impl Model {
    /// An empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Units of substance amounts
    pub fn substance_units(&self) -> Option<&str> {
        self.substance_units.as_deref()
    }

    /// Set `substanceUnits`, which must be a valid UnitSId
    pub fn set_substance_units(&mut self, units: &str) -> Result<()> {
        names::validate_unit_sid("substanceUnits", units)?;
        self.substance_units = Some(units.to_string());
        Ok(())
    }

    /// Clear `substanceUnits`
    pub fn unset_substance_units(&mut self) {
        self.substance_units = None;
    }

    /// Units of time
    pub fn time_units(&self) -> Option<&str> {
        self.time_units.as_deref()
    }

    /// Set `timeUnits`, which must be a valid UnitSId
    pub fn set_time_units(&mut self, units: &str) -> Result<()> {
        names::validate_unit_sid("timeUnits", units)?;
        self.time_units = Some(units.to_string());
        Ok(())
    }

    /// Clear `timeUnits`
    pub fn unset_time_units(&mut self) {
        self.time_units = None;
    }

    /// Units of reaction extent
    pub fn extent_units(&self) -> Option<&str> {
        self.extent_units.as_deref()
    }

    /// Set `extentUnits`, which must be a valid UnitSId
    pub fn set_extent_units(&mut self, units: &str) -> Result<()> {
        names::validate_unit_sid("extentUnits", units)?;
        self.extent_units = Some(units.to_string());
        Ok(())
    }

    /// Clear `extentUnits`
    pub fn unset_extent_units(&mut self) {
        self.extent_units = None;
    }
}

impl AttributeAccess for Model {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        let units = match name {
            "substanceUnits" => &self.substance_units,
            "timeUnits" => &self.time_units,
            "extentUnits" => &self.extent_units,
            _ => return self.base.get(name),
        };
        units.clone().map(AttributeValue::String)
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()> {
        match name {
            "substanceUnits" => self.set_substance_units(&value.into_string(name)?),
            "timeUnits" => self.set_time_units(&value.into_string(name)?),
            "extentUnits" => self.set_extent_units(&value.into_string(name)?),
            _ => self.base.set(MODEL_SCHEMA.name, name, value),
        }
    }

    fn unset_attribute(&mut self, name: &str) -> Result<()> {
        match name {
            "substanceUnits" => self.unset_substance_units(),
            "timeUnits" => self.unset_time_units(),
            "extentUnits" => self.unset_extent_units(),
            _ => return self.base.unset(MODEL_SCHEMA.name, name),
        }
        Ok(())
    }
}

impl_sbase_element!(Model, MODEL_SCHEMA);

/// A `<parameter>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    base: SBase,
    value: Option<f64>,
    units: Option<String>,
    constant: Option<bool>,
}

impl Parameter {
    /// An empty parameter
    pub fn new() -> Self {
        Self::default()
    }

    /// Numeric value
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Whether `value` is set
    pub fn is_set_value(&self) -> bool {
        self.value.is_some()
    }

    /// Set `value`
    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
    }

    /// Clear `value`
    pub fn unset_value(&mut self) {
        self.value = None;
    }

    /// Units of the value
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Whether `units` is set
    pub fn is_set_units(&self) -> bool {
        self.units.is_some()
    }

    /// Set the units, which must be a valid UnitSId
    pub fn set_units(&mut self, units: &str) -> Result<()> {
        names::validate_unit_sid("units", units)?;
        self.units = Some(units.to_string());
        Ok(())
    }

    /// Clear `units`
    pub fn unset_units(&mut self) {
        self.units = None;
    }

    /// Whether the value is fixed during simulation
    pub fn constant(&self) -> Option<bool> {
        self.constant
    }

    /// Whether `constant` is set
    pub fn is_set_constant(&self) -> bool {
        self.constant.is_some()
    }

    /// Set `constant`
    pub fn set_constant(&mut self, constant: bool) {
        self.constant = Some(constant);
    }

    /// Clear `constant`
    pub fn unset_constant(&mut self) {
        self.constant = None;
    }
}

impl AttributeAccess for Parameter {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "value" => self.value.map(AttributeValue::Double),
            "units" => self.units.clone().map(AttributeValue::String),
            "constant" => self.constant.map(AttributeValue::Bool),
            _ => self.base.get(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()> {
        match name {
            "value" => self.set_value(value.to_double(name)?),
            "units" => self.set_units(&value.into_string(name)?)?,
            "constant" => self.set_constant(value.to_bool(name)?),
            _ => return self.base.set(PARAMETER_SCHEMA.name, name, value),
        }
        Ok(())
    }

    fn unset_attribute(&mut self, name: &str) -> Result<()> {
        match name {
            "value" => self.unset_value(),
            "units" => self.unset_units(),
            "constant" => self.unset_constant(),
            _ => return self.base.unset(PARAMETER_SCHEMA.name, name),
        }
        Ok(())
    }
}

impl_sbase_element!(Parameter, PARAMETER_SCHEMA);

/// An ordered container of repeated children; the schema names the list
/// and its item type
#[derive(Debug, Clone, PartialEq)]
pub struct ListOf {
    base: SBase,
    schema: &'static ElementSchema,
}

impl ListOf {
    /// An empty list described by `schema`
    pub fn new(schema: &'static ElementSchema) -> Self {
        Self {
            base: SBase::new(),
            schema,
        }
    }

    /// An empty `<listOfParameters>`
    pub fn parameters() -> Self {
        Self::new(&LIST_OF_PARAMETERS_SCHEMA)
    }

    /// An empty `<samples:listOfSamples>`
    pub fn samples() -> Self {
        Self::new(&LIST_OF_SAMPLES_SCHEMA)
    }

    /// Local name of the item elements
    pub fn item_name(&self) -> Option<&'static str> {
        self.schema.children.first().map(|c| c.name)
    }
}

impl AttributeAccess for ListOf {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        self.base.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()> {
        self.base.set(self.schema.name, name, value)
    }

    fn unset_attribute(&mut self, name: &str) -> Result<()> {
        self.base.unset(self.schema.name, name)
    }
}

impl ExpectedAttributeProvider for ListOf {
    fn schema(&self) -> &'static ElementSchema {
        self.schema
    }
}

impl AttributeReadable for ListOf {}

impl AttributeWritable for ListOf {}

impl SBaseElement for ListOf {
    fn sbase(&self) -> &SBase {
        &self.base
    }

    fn sbase_mut(&mut self) -> &mut SBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
