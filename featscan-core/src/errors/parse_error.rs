//! Parser errors.
//!
//! These are carried as data inside a failed detection outcome, so they are
//! `Clone` and `Serialize` in addition to being `std::error::Error`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One syntax problem reported by the parser.
///
/// `line` is 1-based, `column` is a 0-based byte column and `index` is the
/// byte offset into the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxDiagnostic {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    pub description: String,
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.description)
    }
}

/// Errors that can occur while turning source text into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// The source contains syntax the grammar could not accept. `first` is the
    /// earliest problem in document order; `errors` holds every collected
    /// diagnostic (just `first` unless tolerant collection is enabled).
    #[error("{first}")]
    Syntax {
        first: SyntaxDiagnostic,
        errors: Vec<SyntaxDiagnostic>,
    },

    #[error("Source too large: {size} bytes exceeds limit of {limit} bytes")]
    SourceTooLarge { size: usize, limit: usize },

    #[error("Grammar unavailable: {message}")]
    GrammarUnavailable { message: String },

    #[error("Parser produced no syntax tree")]
    NoTree,
}

impl ParseError {
    /// Number of syntax diagnostics carried by this error.
    pub fn diagnostic_count(&self) -> usize {
        match self {
            Self::Syntax { errors, .. } => errors.len(),
            _ => 0,
        }
    }
}
