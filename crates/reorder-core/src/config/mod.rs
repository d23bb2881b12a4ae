//! Configuration for the reorder engine.
//! TOML-based, 3-layer resolution: env > file > compiled defaults.

pub mod confidence_config;
pub mod defaults;
pub mod forecast_config;
pub mod growth_config;
pub mod history_config;
pub mod lead_time_config;
pub mod observability_config;
pub mod reorder_config;
pub mod seasonal_config;
pub mod size_change_config;

pub use confidence_config::{ConfidenceConfig, ConfidenceTier};
pub use forecast_config::ForecastConfig;
pub use growth_config::{GrowthBracket, GrowthConfig};
pub use history_config::HistoryConfig;
pub use lead_time_config::LeadTimeConfig;
pub use observability_config::ObservabilityConfig;
pub use reorder_config::ReorderConfig;
pub use seasonal_config::SeasonalConfig;
pub use size_change_config::SizeChangeConfig;
