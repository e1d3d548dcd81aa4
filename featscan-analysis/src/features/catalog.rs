//! Feature catalog: an ordered, id-unique set of detectors.

use std::fmt;
use std::sync::Arc;

use featscan_core::config::CatalogConfig;
use featscan_core::errors::ConfigError;
use rustc_hash::FxHashSet;

use super::traits::{EsEdition, FeatureDetector};

/// An immutable, ordered collection of detectors with unique ids.
///
/// Cloning is cheap; detectors are shared behind `Arc`.
#[derive(Clone, Default)]
pub struct FeatureCatalog {
    detectors: Vec<Arc<dyn FeatureDetector>>,
}

impl FeatureCatalog {
    /// Every detector shipped with featscan, in edition order.
    pub fn standard() -> Self {
        Self {
            detectors: super::standard_detectors(),
        }
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from detectors, rejecting empty and duplicate ids.
    pub fn from_detectors<I>(detectors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Arc<dyn FeatureDetector>>,
    {
        let mut builder = Self::builder();
        for detector in detectors {
            builder.register(detector)?;
        }
        Ok(builder.build())
    }

    /// The standard catalog narrowed by a `[catalog]` config section.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::standard();
        if config.selects_all() {
            return Ok(catalog);
        }
        if !config.enabled.is_empty() {
            catalog = catalog.subset(&config.enabled)?;
        }
        if !config.disabled.is_empty() {
            catalog = catalog.without(&config.disabled)?;
        }
        if !config.editions.is_empty() {
            let mut editions = Vec::with_capacity(config.editions.len());
            for name in &config.editions {
                let edition = EsEdition::parse_str(name).ok_or_else(|| ConfigError::InvalidValue {
                    field: "catalog.editions".to_string(),
                    message: format!("unknown edition '{name}'"),
                })?;
                editions.push(edition);
            }
            catalog = catalog.editions(&editions);
        }
        tracing::debug!(features = catalog.len(), "catalog built from config");
        Ok(catalog)
    }

    /// Only the detectors named in `ids`, kept in catalog order.
    pub fn subset<S: AsRef<str>>(&self, ids: &[S]) -> Result<Self, ConfigError> {
        let wanted = self.resolve_ids(ids)?;
        Ok(self.retain(|d| wanted.contains(d.id())))
    }

    /// Every detector except those named in `ids`.
    pub fn without<S: AsRef<str>>(&self, ids: &[S]) -> Result<Self, ConfigError> {
        let unwanted = self.resolve_ids(ids)?;
        Ok(self.retain(|d| !unwanted.contains(d.id())))
    }

    /// Only the detectors introduced by one of `editions`.
    pub fn editions(&self, editions: &[EsEdition]) -> Self {
        self.retain(|d| editions.contains(&d.edition()))
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn FeatureDetector>> {
        self.detectors.iter().find(|d| d.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.detectors.iter().map(|d| d.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FeatureDetector>> {
        self.detectors.iter()
    }

    fn resolve_ids<'s, S: AsRef<str>>(&self, ids: &'s [S]) -> Result<FxHashSet<&'s str>, ConfigError> {
        let mut resolved = FxHashSet::default();
        for id in ids {
            let id = id.as_ref();
            if !self.contains(id) {
                return Err(ConfigError::UnknownFeature { id: id.to_string() });
            }
            resolved.insert(id);
        }
        Ok(resolved)
    }

    fn retain(&self, keep: impl Fn(&dyn FeatureDetector) -> bool) -> Self {
        Self {
            detectors: self
                .detectors
                .iter()
                .filter(|d| keep(d.as_ref()))
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Debug for FeatureCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

/// Incremental catalog construction with id validation at registration.
#[derive(Default)]
pub struct CatalogBuilder {
    detectors: Vec<Arc<dyn FeatureDetector>>,
    seen: FxHashSet<String>,
}

impl CatalogBuilder {
    pub fn register(&mut self, detector: Arc<dyn FeatureDetector>) -> Result<&mut Self, ConfigError> {
        let id = detector.id();
        if id.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "id".to_string(),
            });
        }
        if !self.seen.insert(id.to_string()) {
            return Err(ConfigError::DuplicateFeature { id: id.to_string() });
        }
        tracing::trace!(id, edition = %detector.edition(), "registered feature detector");
        self.detectors.push(detector);
        Ok(self)
    }

    pub fn build(self) -> FeatureCatalog {
        FeatureCatalog {
            detectors: self.detectors,
        }
    }
}
