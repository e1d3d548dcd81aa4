//! Detection engine: single-pass tree walk, per-feature aggregation, and the
//! parse → traverse → aggregate facade.

pub mod aggregator;
pub mod facade;
pub mod traversal;
pub mod types;
pub mod visitor;

pub use aggregator::ResultAggregator;
pub use facade::{detect_with_all_features, detect_with_features, standard_catalog, FeatureScanner};
pub use traversal::traverse;
pub use types::{DetectionResult, Occurrence, Outcome};
pub use visitor::{walk, TreeVisitor};
