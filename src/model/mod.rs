//! Element types
//!
//! Each element type is a plain struct of `Option` fields plus a static
//! [`ElementSchema`](schema::ElementSchema) describing its attributes,
//! vectors and children.

pub mod core;
pub mod samples;
pub mod sbase;
pub mod schema;

pub use self::core::{ListOf, Model, Parameter, SbmlRoot};
pub use self::samples::{Calibration, Interpolation, Sample};
pub use self::sbase::{SBase, SBaseElement};
pub use self::schema::{ChildSpec, ElementSchema, TypeCode};
