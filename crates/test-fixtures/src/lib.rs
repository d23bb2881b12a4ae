//! Shared fixtures for reorder engine tests.
//!
//! - [`InMemoryStore`]: every collaborator trait over `DashMap`s.
//! - [`FailingHistory`] / [`FailingInventory`]: collaborators that always error.
//! - [`FixedClock`]: a clock frozen at one instant.
//! - builders for usage histories and child profiles.

pub mod builders;
pub mod clock;
pub mod store;

pub use builders::*;
pub use clock::FixedClock;
pub use store::{FailingHistory, FailingInventory, InMemoryStore};
