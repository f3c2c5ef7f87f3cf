use thiserror::Error;

// Unified error type for dsmul

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("shape mismatch: {what} expected {expected}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("index {index} out of range for bound {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("duplicate sparse index {0}")]
    DuplicateIndex(usize),
    #[error("invalid sparse structure: {0}")]
    InvalidStructure(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl KernelError {
    pub(crate) fn shape(what: &'static str, expected: usize, found: usize) -> Self {
        KernelError::ShapeMismatch { what, expected, found }
    }
}
