//! ES2019 features.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    /// `try { .. } catch { .. }`
    OptionalCatchBinding, "optional-catch-binding", EsEdition::Es2019, ["catch_clause"],
    "`catch` without a binding",
    |ctx| (!ctx.has_token("(")).then(|| Finding::at(&ctx.node))
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![Arc::new(OptionalCatchBinding)]
}
