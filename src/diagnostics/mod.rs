//! Diagnostics
//!
//! Codes, the static diagnostic table, and the error log that collects
//! everything found while reading a document.

pub mod codes;
pub mod error_log;
pub mod table;

pub use codes::{ErrorCategory, ErrorCode, Severity};
pub use error_log::{ErrorLog, ErrorRecord};
pub use table::{ErrorTableEntry, ERROR_TABLE};
