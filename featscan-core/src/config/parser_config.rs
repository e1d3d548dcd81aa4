//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default upper bound on source size accepted by the parser: 10 MiB.
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 10 * 1024 * 1024;

/// Default cap on collected syntax diagnostics in tolerant mode.
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 64;

/// Configuration for the parser boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// Collect every syntax diagnostic instead of stopping at the first. Default: true.
    pub tolerant: Option<bool>,
    /// Largest source accepted, in bytes. Default: 10 MiB.
    pub max_source_bytes: Option<u64>,
    /// Maximum diagnostics kept in tolerant mode. Default: 64.
    pub max_diagnostics: Option<usize>,
}

impl ParserConfig {
    pub fn effective_tolerant(&self) -> bool {
        self.tolerant.unwrap_or(true)
    }

    pub fn effective_max_source_bytes(&self) -> u64 {
        self.max_source_bytes.unwrap_or(DEFAULT_MAX_SOURCE_BYTES)
    }

    pub fn effective_max_diagnostics(&self) -> usize {
        self.max_diagnostics.unwrap_or(DEFAULT_MAX_DIAGNOSTICS)
    }
}
