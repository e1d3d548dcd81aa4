//! Feature detectors grouped by the ECMAScript edition that introduced them,
//! plus the catalog that hands them to the traversal driver.

pub mod catalog;
pub mod macros;
pub mod traits;

pub mod es2015;
pub mod es2016;
pub mod es2017;
pub mod es2018;
pub mod es2019;
pub mod es2020;
pub mod es2021;
pub mod es2022;

use std::sync::Arc;

pub use catalog::{CatalogBuilder, FeatureCatalog};
pub use traits::{EsEdition, FeatureDetector, Finding, NodeContext};

/// Every built-in detector, in edition order.
pub fn standard_detectors() -> Vec<Arc<dyn FeatureDetector>> {
    let mut detectors = Vec::new();
    detectors.extend(es2015::detectors());
    detectors.extend(es2016::detectors());
    detectors.extend(es2017::detectors());
    detectors.extend(es2018::detectors());
    detectors.extend(es2019::detectors());
    detectors.extend(es2020::detectors());
    detectors.extend(es2021::detectors());
    detectors.extend(es2022::detectors());
    detectors
}
