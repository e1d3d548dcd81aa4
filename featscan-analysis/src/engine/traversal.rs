//! Traversal driver: runs every detector of a catalog at every node.

use tree_sitter::{Node, Tree};

use super::aggregator::ResultAggregator;
use super::types::DetectionResult;
use super::visitor::{walk, TreeVisitor};
use crate::features::catalog::FeatureCatalog;
use crate::features::traits::NodeContext;

struct DetectionVisitor<'a> {
    features: &'a FeatureCatalog,
    source: &'a [u8],
    aggregator: ResultAggregator,
}

impl<'a, 'tree> TreeVisitor<'tree> for DetectionVisitor<'a> {
    fn enter(&mut self, node: Node<'tree>, parent: Option<Node<'tree>>) {
        let ctx = NodeContext::new(node, parent, self.source);
        for detector in self.features.iter() {
            if let Some(finding) = detector.detect(&ctx) {
                self.aggregator.record(finding.into_occurrence(detector.id()));
            }
        }
    }
}

/// Walk `tree` once and collect every detector hit.
///
/// `source` must be the text `tree` was parsed from. A panicking detector
/// aborts the whole call.
pub fn traverse(tree: &Tree, source: &str, features: &FeatureCatalog) -> DetectionResult {
    let mut visitor = DetectionVisitor {
        features,
        source: source.as_bytes(),
        aggregator: ResultAggregator::new(),
    };
    walk(tree, &mut visitor);

    tracing::debug!(
        detectors = features.len(),
        occurrences = visitor.aggregator.total(),
        "traversal complete"
    );
    visitor.aggregator.finish()
}
