//! ES2022 class features.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding};

define_feature!(
    /// `class A { x = 1; static y; }`
    ClassField, "class-field", EsEdition::Es2022, ["field_definition"],
    "Public and private class fields",
    |ctx| {
        let mut finding = Finding::at(&ctx.node).with("static", ctx.has_token("static"));
        if let Some(name) = ctx.field_text("property") {
            finding = finding.with("name", name);
        }
        Some(finding)
    }
);

define_feature!(
    /// Declarations and uses of `#name`.
    PrivateMember, "private-member", EsEdition::Es2022, ["private_property_identifier"],
    "Private class members",
    |ctx| Some(Finding::at(&ctx.node).with("name", ctx.text()))
);

define_feature!(
    ClassStaticBlock, "class-static-block", EsEdition::Es2022, ["class_static_block"],
    "Class static initialization blocks",
    |ctx| Some(Finding::at(&ctx.node))
);

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![
        Arc::new(ClassField),
        Arc::new(PrivateMember),
        Arc::new(ClassStaticBlock),
    ]
}
