//! JavaScript language-feature detection.
//!
//! Source text is parsed with tree-sitter, walked once in document order, and
//! every registered [`FeatureDetector`] is asked about every node. Hits are
//! aggregated per feature id into a [`DetectionResult`], wrapped in an
//! [`Outcome`] that also carries parse failures as data.

pub mod engine;
pub mod features;
pub mod parsers;

pub use engine::facade::{
    detect_with_all_features, detect_with_features, standard_catalog, FeatureScanner,
};
pub use engine::types::{DetectionResult, Occurrence, Outcome};
pub use features::catalog::FeatureCatalog;
pub use features::traits::{EsEdition, FeatureDetector, Finding, NodeContext};
pub use parsers::javascript::{JavaScriptParser, ParseOptions};
