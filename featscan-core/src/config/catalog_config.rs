//! Feature catalog selection.

use serde::{Deserialize, Serialize};

/// Which features a scanner should look for.
///
/// An empty `enabled` list means every feature of the standard catalog.
/// `disabled` is applied after `enabled`, `editions` after both.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
    /// Restrict to these ECMAScript editions, e.g. `["es2015", "es2020"]`.
    pub editions: Vec<String>,
}

impl CatalogConfig {
    /// True when no selection is configured and the full catalog applies.
    pub fn selects_all(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty() && self.editions.is_empty()
    }
}
