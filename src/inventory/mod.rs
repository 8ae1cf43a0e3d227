//! Artifacts and items.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{initial_artifacts, initial_items};
pub use logic::Inventory;
pub use types::{Artifact, BonusType, Item, ItemGrant};
