//! ES2021 features.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    /// `a ||= b`, `a &&= b`, `a ??= b`
    LogicalAssignment, "logical-assignment", EsEdition::Es2021, ["augmented_assignment_expression"],
    "Logical assignment operators",
    |ctx| match ctx.operator() {
        Some(op @ ("&&=" | "||=" | "??=")) => Some(Finding::at(&ctx.node).with("operator", op)),
        _ => None,
    }
);

define_feature!(
    /// `1_000_000`
    NumericSeparator, "numeric-separator", EsEdition::Es2021, ["number"],
    "Numeric separators",
    |ctx| {
        let raw = ctx.text();
        raw.contains('_').then(|| Finding::at(&ctx.node).with("raw", raw))
    }
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![Arc::new(LogicalAssignment), Arc::new(NumericSeparator)]
}
