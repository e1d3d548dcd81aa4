//! Detection facade: parse → traverse → aggregate, one [`Outcome`] per call.
//!
//! Parse failures become [`Outcome::Error`] carrying the parser's error
//! unchanged. Nothing is retained between calls except each thread's reusable
//! tree-sitter parser.

use std::sync::LazyLock;

use featscan_core::config::FeatscanConfig;
use featscan_core::errors::ConfigError;
use rayon::prelude::*;

use super::traversal::traverse;
use super::types::Outcome;
use crate::features::catalog::FeatureCatalog;
use crate::parsers::javascript::{JavaScriptParser, ParseOptions};

/// A parser configuration paired with the catalog used by
/// [`FeatureScanner::detect_with_all_features`].
#[derive(Debug, Clone)]
pub struct FeatureScanner {
    catalog: FeatureCatalog,
    parser: JavaScriptParser,
}

impl FeatureScanner {
    pub fn new(catalog: FeatureCatalog, options: ParseOptions) -> Self {
        Self {
            catalog,
            parser: JavaScriptParser::new(options),
        }
    }

    /// Standard catalog, default parse options.
    pub fn standard() -> Self {
        Self::new(standard_catalog().clone(), ParseOptions::default())
    }

    pub fn from_config(config: &FeatscanConfig) -> Result<Self, ConfigError> {
        let catalog = FeatureCatalog::from_config(&config.catalog)?;
        Ok(Self::new(catalog, ParseOptions::from(&config.parser)))
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn parser(&self) -> &JavaScriptParser {
        &self.parser
    }

    /// Detect only the features in `features`.
    pub fn detect_with_features(&self, source: &str, features: &FeatureCatalog) -> Outcome {
        let tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(error_msg) => return Outcome::Error { error_msg },
        };
        Outcome::Success {
            features: traverse(&tree, source, features),
        }
    }

    /// Detect every feature of this scanner's catalog.
    pub fn detect_with_all_features(&self, source: &str) -> Outcome {
        self.detect_with_features(source, &self.catalog)
    }

    /// Run independent detections in parallel. Outcomes are in input order.
    pub fn detect_batch<S>(&self, sources: &[S]) -> Vec<Outcome>
    where
        S: AsRef<str> + Sync,
    {
        let outcomes: Vec<Outcome> = sources
            .par_iter()
            .map(|source| self.detect_with_all_features(source.as_ref()))
            .collect();
        tracing::debug!(
            sources = sources.len(),
            failures = outcomes.iter().filter(|o| o.is_error()).count(),
            "batch detection complete"
        );
        outcomes
    }
}

impl Default for FeatureScanner {
    fn default() -> Self {
        Self::standard()
    }
}

/// Detect the features in `features` with default parse options.
pub fn detect_with_features(source: &str, features: &FeatureCatalog) -> Outcome {
    JavaScriptParser::default()
        .parse(source)
        .map(|tree| traverse(&tree, source, features))
        .into()
}

/// Standard catalog shared by [`detect_with_all_features`], built on first use.
static STANDARD_CATALOG: LazyLock<FeatureCatalog> = LazyLock::new(FeatureCatalog::standard);

/// Detect every feature of the standard catalog with default parse options.
///
/// Hosts that configure their catalog should build a [`FeatureScanner`] once
/// and reuse it instead.
pub fn detect_with_all_features(source: &str) -> Outcome {
    detect_with_features(source, standard_catalog())
}

/// The standard catalog, built once per process.
pub fn standard_catalog() -> &'static FeatureCatalog {
    &STANDARD_CATALOG
}
