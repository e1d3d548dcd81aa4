//! ES2016 features.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    /// `a ** b` and `a **= b`
    ExponentOperator, "exponent-operator", EsEdition::Es2016,
    ["binary_expression", "augmented_assignment_expression"],
    "Exponentiation operator",
    |ctx| match ctx.operator() {
        Some(op @ ("**" | "**=")) => Some(Finding::at(&ctx.node).with("operator", op)),
        _ => None,
    }
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![Arc::new(ExponentOperator)]
}
