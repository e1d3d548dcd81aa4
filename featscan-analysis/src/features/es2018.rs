//! ES2018 features: object rest/spread and async iteration.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    /// `{ ...defaults, a: 1 }`
    ObjectSpread, "object-spread", EsEdition::Es2018, ["spread_element"],
    "Spread properties in object literals",
    |ctx| (ctx.parent_kind() == Some("object")).then(|| Finding::at(&ctx.node))
);

define_feature!(
    /// `const { a, ...rest } = obj`
    ObjectRest, "object-rest", EsEdition::Es2018, ["rest_pattern"],
    "Rest properties in object patterns",
    |ctx| (ctx.parent_kind() == Some("object_pattern")).then(|| Finding::at(&ctx.node))
);

define_feature!(
    /// `for await (const x of stream)`
    AsyncIteration, "async-iteration", EsEdition::Es2018, ["for_in_statement"],
    "`for await..of` loops",
    |ctx| (ctx.has_token("await") && ctx.has_token("of")).then(|| Finding::at(&ctx.node))
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![
        Arc::new(ObjectSpread),
        Arc::new(ObjectRest),
        Arc::new(AsyncIteration),
    ]
}
