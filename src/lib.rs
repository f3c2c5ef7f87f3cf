//! dsmul: fused dense × sparse multiply-accumulate over Faer
//!
//! This crate computes `C ← β·C + α·A·B` in place, where `A` (or a vector `a`) is
//! dense and `B` (or a vector `b`) is sparse. The kernels walk only the nonzero
//! structure of the sparse operand, and each comes in a sequential and a
//! parallel flavour built on a pluggable parallel-for.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod kernels;
pub mod matrix;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::traits::*;
pub use crate::error::*;
pub use crate::kernels::*;
pub use crate::matrix::*;
pub use crate::parallel::*;
