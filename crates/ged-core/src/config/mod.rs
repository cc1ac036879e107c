//! Configuration system for the GED engine.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod cache_config;
pub mod column_config;
pub mod ged_config;
pub mod input_config;

pub use analysis_config::AnalysisConfig;
pub use cache_config::CacheConfig;
pub use column_config::ColumnConfig;
pub use ged_config::{CliOverrides, GedConfig};
pub use input_config::InputConfig;
