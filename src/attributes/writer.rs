//! Attribute writing

use super::access::AttributeWritable;
use super::values::{encode, AttributeValue, NumericVector};
use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Serializes [`AttributeWritable`] elements
pub struct AttributeWriter;

impl AttributeWriter {
    /// Push every set attribute onto `start` in declaration order.
    ///
    /// A string attribute counts as set only when non-empty.
    pub fn write_attributes<E: AttributeWritable + ?Sized>(element: &E, start: &mut BytesStart<'_>) {
        for spec in element.expected_attributes().iter() {
            let Some(value) = element.attribute(spec.name) else {
                continue;
            };
            if matches!(&value, AttributeValue::String(s) if s.is_empty()) {
                continue;
            }
            let text = encode(spec.kind, &value);
            start.push_attribute((spec.name, text.as_str()));
        }
    }

    /// Set vectors in declaration order
    pub fn vectors<E: AttributeWritable + ?Sized>(element: &E) -> Vec<(&'static str, NumericVector)> {
        element
            .schema()
            .vector_specs()
            .into_iter()
            .filter_map(|spec| element.vector(spec.name).map(|v| (spec.name, v)))
            .collect()
    }

    /// Write a vector as `<tag> v1 v2 </tag>`
    pub fn write_vector<W: Write>(writer: &mut Writer<W>, tag: &str, vector: &NumericVector) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new(tag)))?;
        writer.write_event(Event::Text(BytesText::new(&vector.to_text())))?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}
