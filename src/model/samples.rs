//! The `samples` package
//!
//! `<samples:sample>` carries one attribute of every scalar kind, two
//! attributes whose names are keywords in most languages (`true` and
//! `false`), two free-length vectors and one array whose length is given by
//! the `num` attribute. A sample may hold one `<samples:calibration>`, which
//! carries a required vector and a vector of exactly three coefficients.

use super::core::ListOf;
use super::sbase::{impl_sbase_element, SBase, SBaseElement, SBASE_SCHEMA};
use super::schema::{ChildSpec, ElementSchema, TypeCode};
use crate::attributes::{
    AttributeAccess, AttributeKind, AttributeSpec, AttributeValue, NumericVector, VectorKind, VectorSpec,
};
use crate::error::{Error, Result};
use crate::namespaces::SAMPLES_PACKAGE;
use std::fmt;
use std::str::FromStr;

/// Lexical values of the `interpolation` attribute
pub const INTERPOLATION_VALUES: &[&str] = &["linear", "nearestNeighbor", "cubic"];

/// `<samples:listOfSamples>`, the container of samples inside `<model>`
pub static LIST_OF_SAMPLES_SCHEMA: ElementSchema = ElementSchema {
    name: "listOfSamples",
    type_code: TypeCode::LIST_OF,
    package: Some(&SAMPLES_PACKAGE),
    parent: Some(&SBASE_SCHEMA),
    attributes: &[],
    vectors: &[],
    children: &[ChildSpec {
        name: "sample",
        package: Some(&SAMPLES_PACKAGE),
        required: false,
        multiple: true,
        create: create_sample,
    }],
};

/// `<samples:sample>`
pub static SAMPLE_SCHEMA: ElementSchema = ElementSchema {
    name: "sample",
    type_code: TypeCode::SAMPLE,
    package: Some(&SAMPLES_PACKAGE),
    parent: Some(&SBASE_SCHEMA),
    attributes: &[
        AttributeSpec::required("id", AttributeKind::SId),
        AttributeSpec::required("num", AttributeKind::Unsigned),
        AttributeSpec::optional("true", AttributeKind::Bool),
        AttributeSpec::optional("false", AttributeKind::Bool),
        AttributeSpec::optional("weight", AttributeKind::Double),
        AttributeSpec::optional("offset", AttributeKind::Int),
        AttributeSpec::optional("interpolation", AttributeKind::Enum(INTERPOLATION_VALUES)),
    ],
    vectors: &[
        VectorSpec::optional("vectorDouble", VectorKind::Double),
        VectorSpec::optional("vectorInt", VectorKind::Int),
        VectorSpec::array("samplePoints", VectorKind::Double, "num"),
    ],
    children: &[ChildSpec {
        name: "calibration",
        package: Some(&SAMPLES_PACKAGE),
        required: false,
        multiple: false,
        create: create_calibration,
    }],
};

/// Number of values in `<samples:coefficients>`
pub const COEFFICIENT_COUNT: usize = 3;

/// `<samples:calibration>`, at most one per sample
pub static CALIBRATION_SCHEMA: ElementSchema = ElementSchema {
    name: "calibration",
    type_code: TypeCode::CALIBRATION,
    package: Some(&SAMPLES_PACKAGE),
    parent: Some(&SBASE_SCHEMA),
    attributes: &[],
    vectors: &[
        VectorSpec::required("reference", VectorKind::Double),
        VectorSpec::fixed("coefficients", VectorKind::Double, COEFFICIENT_COUNT),
    ],
    children: &[],
};

pub(crate) fn create_list_of_samples() -> Box<dyn SBaseElement> {
    Box::new(ListOf::samples())
}

fn create_sample() -> Box<dyn SBaseElement> {
    Box::new(Sample::new())
}

fn create_calibration() -> Box<dyn SBaseElement> {
    Box::new(Calibration::new())
}

/// Interpolation between sample points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interpolation {
    Linear,
    NearestNeighbor,
    Cubic,
}

impl Interpolation {
    /// Lexical form as written in XML
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::NearestNeighbor => "nearestNeighbor",
            Interpolation::Cubic => "cubic",
        }
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Interpolation::Linear),
            "nearestNeighbor" => Ok(Interpolation::NearestNeighbor),
            "cubic" => Ok(Interpolation::Cubic),
            _ => Err(Error::invalid_value(
                "interpolation",
                s,
                format!("expected one of {}", INTERPOLATION_VALUES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `<samples:sample>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    base: SBase,
    num: Option<u32>,
    true_: Option<bool>,
    false_: Option<bool>,
    weight: Option<f64>,
    offset: Option<i32>,
    interpolation: Option<Interpolation>,
    vector_double: Option<Vec<f64>>,
    vector_int: Option<Vec<i32>>,
    sample_points: Option<Vec<f64>>,
}

impl Sample {
    /// An empty sample
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sample points
    pub fn num(&self) -> Option<u32> {
        self.num
    }

    /// Whether `num` is set
    pub fn is_set_num(&self) -> bool {
        self.num.is_some()
    }

    /// Set `num`
    pub fn set_num(&mut self, value: u32) {
        self.num = Some(value);
    }

    /// Clear `num`
    pub fn unset_num(&mut self) {
        self.num = None;
    }

    /// Value of the `true` attribute
    pub fn get_true(&self) -> Option<bool> {
        self.true_
    }

    /// Whether `true` is set
    pub fn is_set_true(&self) -> bool {
        self.true_.is_some()
    }

    /// Set the `true` attribute
    pub fn set_true(&mut self, value: bool) {
        self.true_ = Some(value);
    }

    /// Clear the `true` attribute
    pub fn unset_true(&mut self) {
        self.true_ = None;
    }

    /// Value of the `false` attribute
    pub fn get_false(&self) -> Option<bool> {
        self.false_
    }

    /// Whether `false` is set
    pub fn is_set_false(&self) -> bool {
        self.false_.is_some()
    }

    /// Set the `false` attribute
    pub fn set_false(&mut self, value: bool) {
        self.false_ = Some(value);
    }

    /// Clear the `false` attribute
    pub fn unset_false(&mut self) {
        self.false_ = None;
    }

    /// Relative weight of the sample
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Whether `weight` is set
    pub fn is_set_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Set `weight`
    pub fn set_weight(&mut self, value: f64) {
        self.weight = Some(value);
    }

    /// Clear `weight`
    pub fn unset_weight(&mut self) {
        self.weight = None;
    }

    /// Signed index offset
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// Whether `offset` is set
    pub fn is_set_offset(&self) -> bool {
        self.offset.is_some()
    }

    /// Set `offset`
    pub fn set_offset(&mut self, value: i32) {
        self.offset = Some(value);
    }

    /// Clear `offset`
    pub fn unset_offset(&mut self) {
        self.offset = None;
    }

    /// Interpolation between points
    pub fn interpolation(&self) -> Option<Interpolation> {
        self.interpolation
    }

    /// Whether `interpolation` is set
    pub fn is_set_interpolation(&self) -> bool {
        self.interpolation.is_some()
    }

    /// Set `interpolation`
    pub fn set_interpolation(&mut self, value: Interpolation) {
        self.interpolation = Some(value);
    }

    /// Clear `interpolation`
    pub fn unset_interpolation(&mut self) {
        self.interpolation = None;
    }

    /// Values of `<samples:vectorDouble>`
    pub fn vector_double(&self) -> Option<&[f64]> {
        self.vector_double.as_deref()
    }

    /// Whether `<samples:vectorDouble>` is present
    pub fn is_set_vector_double(&self) -> bool {
        self.vector_double.is_some()
    }

    /// Replace `<samples:vectorDouble>`
    pub fn set_vector_double(&mut self, values: Vec<f64>) {
        self.vector_double = Some(values);
    }

    /// Remove `<samples:vectorDouble>`
    pub fn unset_vector_double(&mut self) {
        self.vector_double = None;
    }

    /// Values of `<samples:vectorInt>`
    pub fn vector_int(&self) -> Option<&[i32]> {
        self.vector_int.as_deref()
    }

    /// Whether `<samples:vectorInt>` is present
    pub fn is_set_vector_int(&self) -> bool {
        self.vector_int.is_some()
    }

    /// Replace `<samples:vectorInt>`
    pub fn set_vector_int(&mut self, values: Vec<i32>) {
        self.vector_int = Some(values);
    }

    /// Remove `<samples:vectorInt>`
    pub fn unset_vector_int(&mut self) {
        self.vector_int = None;
    }

    /// Sample points; when written, their count should equal `num`
    pub fn sample_points(&self) -> Option<&[f64]> {
        self.sample_points.as_deref()
    }

    /// Whether `<samples:samplePoints>` is present
    pub fn is_set_sample_points(&self) -> bool {
        self.sample_points.is_some()
    }

    /// Replace the sample points
    pub fn set_sample_points(&mut self, values: Vec<f64>) {
        self.sample_points = Some(values);
    }

    /// Remove the sample points
    pub fn unset_sample_points(&mut self) {
        self.sample_points = None;
    }
}

impl AttributeAccess for Sample {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "num" => self.num.map(AttributeValue::Unsigned),
            "true" => self.true_.map(AttributeValue::Bool),
            "false" => self.false_.map(AttributeValue::Bool),
            "weight" => self.weight.map(AttributeValue::Double),
            "offset" => self.offset.map(AttributeValue::Int),
            "interpolation" => self.interpolation.map(|i| AttributeValue::from(i.as_str())),
            _ => self.base.get(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()> {
        match name {
            "num" => self.set_num(value.to_unsigned(name)?),
            "true" => self.set_true(value.to_bool(name)?),
            "false" => self.set_false(value.to_bool(name)?),
            "weight" => self.set_weight(value.to_double(name)?),
            "offset" => self.set_offset(value.to_int(name)?),
            "interpolation" => self.set_interpolation(value.into_string(name)?.parse()?),
            _ => return self.base.set(SAMPLE_SCHEMA.name, name, value),
        }
        Ok(())
    }

    fn unset_attribute(&mut self, name: &str) -> Result<()> {
        match name {
            "num" => self.unset_num(),
            "true" => self.unset_true(),
            "false" => self.unset_false(),
            "weight" => self.unset_weight(),
            "offset" => self.unset_offset(),
            "interpolation" => self.unset_interpolation(),
            _ => return self.base.unset(SAMPLE_SCHEMA.name, name),
        }
        Ok(())
    }

    fn vector(&self, name: &str) -> Option<NumericVector> {
        match name {
            "vectorDouble" => self.vector_double.clone().map(NumericVector::Double),
            "vectorInt" => self.vector_int.clone().map(NumericVector::Int),
            "samplePoints" => self.sample_points.clone().map(NumericVector::Double),
            _ => None,
        }
    }

    fn set_vector(&mut self, name: &str, value: NumericVector) -> Result<()> {
        match (name, value) {
            ("vectorDouble", NumericVector::Double(v)) => self.vector_double = Some(v),
            ("vectorInt", NumericVector::Int(v)) => self.vector_int = Some(v),
            ("samplePoints", NumericVector::Double(v)) => self.sample_points = Some(v),
            (name, value) => {
                return Err(match SAMPLE_SCHEMA.vector(name) {
                    Some(spec) => Error::invalid_value(
                        name,
                        value.to_text().trim(),
                        format!("expected {} values", spec.kind.type_name()),
                    ),
                    None => Error::OperationFailed(format!("no vector named '{}'", name)),
                })
            }
        }
        Ok(())
    }

    fn unset_vector(&mut self, name: &str) -> Result<()> {
        match name {
            "vectorDouble" => self.unset_vector_double(),
            "vectorInt" => self.unset_vector_int(),
            "samplePoints" => self.unset_sample_points(),
            _ => return Err(Error::OperationFailed(format!("no vector named '{}'", name))),
        }
        Ok(())
    }
}

impl_sbase_element!(Sample, SAMPLE_SCHEMA);

/// A `<samples:calibration>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calibration {
    base: SBase,
    reference: Option<Vec<f64>>,
    coefficients: Option<Vec<f64>>,
}

impl Calibration {
    /// An empty calibration; `reference` must be set before it is complete
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference values
    pub fn reference(&self) -> Option<&[f64]> {
        self.reference.as_deref()
    }

    /// Replace `<samples:reference>`
    pub fn set_reference(&mut self, values: Vec<f64>) {
        self.reference = Some(values);
    }

    /// Remove `<samples:reference>`
    pub fn unset_reference(&mut self) {
        self.reference = None;
    }

    /// Calibration coefficients; when written there should be [`COEFFICIENT_COUNT`]
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.coefficients.as_deref()
    }

    /// Replace `<samples:coefficients>`
    pub fn set_coefficients(&mut self, values: Vec<f64>) {
        self.coefficients = Some(values);
    }

    /// Remove `<samples:coefficients>`
    pub fn unset_coefficients(&mut self) {
        self.coefficients = None;
    }
}

impl AttributeAccess for Calibration {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        self.base.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<()> {
        self.base.set(CALIBRATION_SCHEMA.name, name, value)
    }

    fn unset_attribute(&mut self, name: &str) -> Result<()> {
        self.base.unset(CALIBRATION_SCHEMA.name, name)
    }

    fn vector(&self, name: &str) -> Option<NumericVector> {
        match name {
            "reference" => self.reference.clone().map(NumericVector::Double),
            "coefficients" => self.coefficients.clone().map(NumericVector::Double),
            _ => None,
        }
    }

    fn set_vector(&mut self, name: &str, value: NumericVector) -> Result<()> {
        match (name, value) {
            ("reference", NumericVector::Double(v)) => self.reference = Some(v),
            ("coefficients", NumericVector::Double(v)) => self.coefficients = Some(v),
            ("reference" | "coefficients", value) => {
                return Err(Error::invalid_value(name, value.to_text().trim(), "expected double values"))
            }
            _ => return Err(Error::OperationFailed(format!("no vector named '{}'", name))),
        }
        Ok(())
    }

    fn unset_vector(&mut self, name: &str) -> Result<()> {
        match name {
            "reference" => self.unset_reference(),
            "coefficients" => self.unset_coefficients(),
            _ => return Err(Error::OperationFailed(format!("no vector named '{}'", name))),
        }
        Ok(())
    }
}

impl_sbase_element!(Calibration, CALIBRATION_SCHEMA);
