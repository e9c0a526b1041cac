//! Utility Modules
//!
//! - `assertions`: owner guard, checked arithmetic, supply verification

pub mod assertions;

pub use assertions::*;
