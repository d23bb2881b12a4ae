//! Collaborator contracts. Storage, inventory and profile data live outside
//! the engine; these traits are the only way it reads or writes them.

pub mod child_profiles;
pub mod clock;
pub mod inventory;
pub mod prediction_sink;
pub mod usage_history;

pub use child_profiles::IChildProfiles;
pub use clock::{Clock, SystemClock};
pub use inventory::IInventory;
pub use prediction_sink::{IPredictionSink, NoopSink};
pub use usage_history::IUsageHistory;
