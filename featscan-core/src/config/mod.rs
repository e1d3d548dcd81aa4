//! Configuration system for featscan.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod catalog_config;
pub mod featscan_config;
pub mod parser_config;

pub use catalog_config::CatalogConfig;
pub use featscan_config::{ConfigOverrides, FeatscanConfig};
pub use parser_config::ParserConfig;
