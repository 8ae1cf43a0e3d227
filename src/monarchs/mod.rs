//! Monarchs: the permanent late-game specialization.

pub mod data;
pub mod logic;
pub mod types;

pub use data::monarch_catalog;
pub use logic::{is_unlocked, tier_unlocked, MonarchState};
pub use types::{Monarch, MonarchKind, MonarchNode};
