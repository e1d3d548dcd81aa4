//! Collects occurrences into a per-feature, document-ordered result.

use std::collections::BTreeMap;

use super::types::{DetectionResult, Occurrence};

/// Append-only accumulator for one detection pass.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    features: BTreeMap<String, Vec<Occurrence>>,
    total: usize,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `occurrence` to the list for its feature, creating the list on
    /// first sight. Never deduplicates.
    pub fn record(&mut self, occurrence: Occurrence) {
        self.total += 1;
        if let Some(list) = self.features.get_mut(occurrence.feature.as_str()) {
            list.push(occurrence);
        } else {
            self.features.insert(occurrence.feature.clone(), vec![occurrence]);
        }
    }

    /// Occurrences recorded so far across all features.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finish(self) -> DetectionResult {
        DetectionResult::from_map(self.features)
    }
}
