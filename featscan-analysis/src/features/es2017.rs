//! ES2017 features: async functions and `await`.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    AsyncFunction, "async-function", EsEdition::Es2017,
    [
        "function_declaration",
        "function_expression",
        "generator_function_declaration",
        "generator_function",
        "arrow_function",
        "method_definition",
    ],
    "Async functions, arrows and methods",
    |ctx| {
        if !ctx.has_token("async") {
            return None;
        }
        let target = match ctx.node.kind() {
            "arrow_function" => "arrow",
            "method_definition" => "method",
            "generator_function_declaration" | "generator_function" => "generator",
            _ => "function",
        };
        Some(Finding::at(&ctx.node).with("target", target))
    }
);

define_feature!(
    AwaitExpression, "await-expression", EsEdition::Es2017, ["await_expression"],
    "`await` expressions",
    |ctx| Some(Finding::at(&ctx.node))
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![Arc::new(AsyncFunction), Arc::new(AwaitExpression)]
}
