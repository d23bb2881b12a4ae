pub mod child;
pub mod confidence_level;
pub mod inventory;
pub mod prediction;
pub mod size_bracket;
pub mod usage;

pub use child::{ChildId, ChildProfile};
pub use confidence_level::ConfidenceLevel;
pub use inventory::InventorySnapshot;
pub use prediction::{ConsumptionPrediction, PredictionDraft, PredictionWarning};
pub use size_bracket::SizeBracket;
pub use usage::{DailyUsage, UsageRecord};
