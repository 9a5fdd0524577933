//! # sbase
//!
//! Schema-driven attribute marshalling and validation for SBML-family XML
//! documents.
//!
//! Every element type is described by a static
//! [`ElementSchema`](model::ElementSchema): its attributes, numeric vectors
//! and allowed children. Reading drives each start tag through the same
//! pipeline: collect the expected attributes along the schema chain,
//! classify unexpected ones, decode the expected ones into typed `Option`
//! fields, and log exactly one diagnostic per problem. Writing emits set
//! fields back in declaration order.
//!
//! ## Features
//!
//! - Typed attribute access with explicit unset state
//! - Specific diagnostics (missing, empty, bad syntax, wrong type) in an ordered [`ErrorLog`]
//! - Package namespaces with prefixed elements and `required` flags
//! - Numeric vectors and fixed-length arrays as child elements
//! - Tree navigation by type code, SId and metaid
//! - JSON export of diagnostics
//!
//! ## Example
//!
//! ```rust
//! use sbase::{Document, ErrorCode};
//!
//! let xml = r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" level="3" version="2">
//!   <model>
//!     <listOfParameters>
//!       <parameter id="k" constant="maybe"/>
//!     </listOfParameters>
//!   </model>
//! </sbml>"#;
//!
//! let doc = Document::read_from_str(xml)?;
//! let record = doc.error_log().get(0).unwrap();
//! assert_eq!(record.code, ErrorCode::AttributeMustBeBoolean);
//! # Ok::<(), sbase::Error>(())
//! ```

#![warn(clippy::all)]

pub mod attributes;
pub mod diagnostics;
pub mod documents;
pub mod error;
pub mod limits;
pub mod model;
pub mod names;
pub mod namespaces;
pub mod reading;
pub mod writing;

// Re-exports for convenience
pub use attributes::{AttributeAccess, AttributeReadable, AttributeValue, AttributeWritable, NumericVector};
pub use diagnostics::{ErrorCode, ErrorLog, ErrorRecord, Severity};
pub use documents::{Document, NodeId};
pub use error::{Error, Result};
pub use limits::Limits;
pub use model::{SBaseElement, TypeCode};
pub use namespaces::SbmlNamespaces;
pub use writing::WriterConfig;

/// Version of the sbase library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
