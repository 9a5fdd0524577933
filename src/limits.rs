//! Resource limits for reading
//!
//! A violated limit aborts the read with [`Error::LimitExceeded`]. Content
//! problems never do; they go to the document's error log.

use crate::error::{Error, Result};

/// Upper bounds enforced by the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Deepest element nesting, the root being depth 1
    pub max_depth: usize,
    /// Largest accepted document, in bytes
    pub max_document_size: usize,
    /// Most attributes on one start tag, namespace declarations excluded
    pub max_attributes: usize,
    /// Most values in one vector element
    pub max_vector_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_document_size: 256 * 1024 * 1024,
            max_attributes: 512,
            max_vector_length: 10_000_000,
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tight bounds for untrusted input
    pub fn strict() -> Self {
        Self {
            max_depth: 32,
            max_document_size: 16 * 1024 * 1024,
            max_attributes: 64,
            max_vector_length: 100_000,
        }
    }

    /// Effectively unbounded
    pub fn permissive() -> Self {
        Self {
            max_depth: usize::MAX,
            max_document_size: usize::MAX,
            max_attributes: usize::MAX,
            max_vector_length: usize::MAX,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_document_size(mut self, bytes: usize) -> Self {
        self.max_document_size = bytes;
        self
    }

    pub fn with_max_attributes(mut self, count: usize) -> Self {
        self.max_attributes = count;
        self
    }

    pub fn with_max_vector_length(mut self, len: usize) -> Self {
        self.max_vector_length = len;
        self
    }

    pub fn check_depth(&self, depth: usize) -> Result<()> {
        within("element depth", depth, self.max_depth)
    }

    pub fn check_document_size(&self, bytes: usize) -> Result<()> {
        within("document size in bytes", bytes, self.max_document_size)
    }

    pub fn check_attributes(&self, count: usize) -> Result<()> {
        within("attributes on one element", count, self.max_attributes)
    }

    pub fn check_vector_length(&self, len: usize) -> Result<()> {
        within("values in one vector", len, self.max_vector_length)
    }
}

fn within(what: &str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::LimitExceeded(format!("{} {} > {}", what, actual, max)));
    }
    Ok(())
}
