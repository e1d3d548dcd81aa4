//! Core errors, configuration and tracing setup shared by the featscan crates.

pub mod config;
pub mod errors;
pub mod tracing;
