//! The attribute marshalling pipeline
//!
//! Declarations ([`spec`]), the expected-attribute registry ([`expected`]),
//! lexical values ([`values`]), the capability traits ([`access`]), and the
//! reader and writer that drive them.

pub mod access;
pub mod expected;
pub mod reader;
pub mod spec;
pub mod values;
pub mod writer;

pub use access::{AttributeAccess, AttributeReadable, AttributeWritable, ExpectedAttributeProvider};
pub use expected::ExpectedAttributes;
pub use reader::{AttributeReader, RawAttribute, RawAttributeTable, ReadContext};
pub use spec::{AttributeKind, AttributeSpec, VectorKind, VectorLength, VectorSpec};
pub use values::{AttributeValue, NumericVector};
pub use writer::AttributeWriter;
