//! Army roster: unit definitions, leveling, and one-time upgrades.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{initial_units, monarch_unit, veteran_units};
pub use logic::{apply_upgrade, filter_and_sort, grant_experience, level_up, total_attack};
pub use types::{SortBy, SortDirection, Speed, StatBonus, StatKey, Unit, UnitRank, UnitStats, Upgrade};
