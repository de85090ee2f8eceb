//! Core data types and structures
//!
//! This module contains the data types passed between the CLI layers,
//! separated from the search algorithms.

pub mod types;

pub use types::*;
