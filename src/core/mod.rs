//! Core traits and their implementations for faer types.

pub mod traits;
pub mod wrappers;
