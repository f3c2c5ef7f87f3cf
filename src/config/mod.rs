//! Execution options for the parallel kernels.

pub mod options;
pub use options::ParallelOptions;
