//! API options for the parallel kernels.
//!
//! `ParallelOptions` controls how the parallel variants spread work: how many
//! worker threads the dedicated pool gets, and the smallest number of work
//! units (columns or nonzeros) handed to a single task.

use crate::error::KernelError;

/// Worker count & task granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Worker threads; `None` uses every logical CPU.
    pub num_threads: Option<usize>,

    /// Minimum work units per task.
    pub min_len: usize,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self { num_threads: None, min_len: 1 }
    }
}

impl ParallelOptions {
    pub fn with_threads(num_threads: usize) -> Self {
        Self { num_threads: Some(num_threads), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        if self.num_threads == Some(0) {
            return Err(KernelError::InvalidConfig("num_threads must be positive"));
        }
        if self.min_len == 0 {
            return Err(KernelError::InvalidConfig("min_len must be positive"));
        }
        Ok(())
    }
}
