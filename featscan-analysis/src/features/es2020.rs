//! ES2020 features.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    /// Reported on the `?.` token; `on` names the expression it belongs to.
    OptionalChaining, "optional-chaining", EsEdition::Es2020, ["optional_chain"],
    "Optional chaining `?.`",
    |ctx| {
        let finding = Finding::at(&ctx.node);
        Some(match ctx.parent_kind() {
            Some(on) => finding.with("on", on),
            None => finding,
        })
    }
);

define_feature!(
    NullishCoalescing, "nullish-coalescing", EsEdition::Es2020, ["binary_expression"],
    "Nullish coalescing `??`",
    |ctx| (ctx.operator() == Some("??")).then(|| Finding::at(&ctx.node))
);

define_feature!(
    /// `10n`
    BigIntLiteral, "bigint-literal", EsEdition::Es2020, ["number"],
    "BigInt literals",
    |ctx| {
        let raw = ctx.text();
        raw.ends_with('n').then(|| Finding::at(&ctx.node).with("raw", raw))
    }
);

define_feature!(
    /// `import("./mod.js")`
    DynamicImport, "dynamic-import", EsEdition::Es2020, ["call_expression"],
    "Dynamic `import()`",
    |ctx| ctx
        .node
        .child_by_field_name("function")
        .is_some_and(|f| f.kind() == "import")
        .then(|| Finding::at(&ctx.node))
);

define_feature!(
    ImportMeta, "import-meta", EsEdition::Es2020, ["meta_property"],
    "`import.meta`",
    |ctx| ctx.text().starts_with("import").then(|| Finding::at(&ctx.node))
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![
        Arc::new(OptionalChaining),
        Arc::new(NullishCoalescing),
        Arc::new(BigIntLiteral),
        Arc::new(DynamicImport),
        Arc::new(ImportMeta),
    ]
}
