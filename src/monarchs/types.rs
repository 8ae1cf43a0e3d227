//! Monarch data structures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonarchKind {
    Shadow,
    Beast,
    Ice,
    Destruction,
    Light,
}

impl MonarchKind {
    pub const ALL: [MonarchKind; 5] = [
        MonarchKind::Shadow,
        MonarchKind::Beast,
        MonarchKind::Ice,
        MonarchKind::Destruction,
        MonarchKind::Light,
    ];
}

/// A node of a monarch tree, bought with sovereign points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonarchNode {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub max_level: u32,
    pub tier: u32,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monarch {
    pub kind: MonarchKind,
    pub name: String,
    pub description: String,
    /// Name of the unit granted on selection
    pub unique_unit: String,
    pub passive_bonuses: Vec<String>,
    /// Id of the ultimate skill granted on selection
    pub ultimate: String,
    pub tree: Vec<MonarchNode>,
}
