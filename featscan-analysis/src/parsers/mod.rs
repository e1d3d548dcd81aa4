//! Tree-sitter parser boundary: JavaScript grammar, thread_local instances,
//! syntax diagnostics.

pub mod error_tolerant;
pub mod javascript;
pub mod types;

pub use javascript::{JavaScriptParser, ParseOptions};
pub use types::{Position, SourceLocation, Span};
