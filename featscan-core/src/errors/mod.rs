//! Error handling for featscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod parse_error;

pub use config_error::ConfigError;
pub use parse_error::{ParseError, SyntaxDiagnostic};
