//! Warrior and Sovereign skill trees, bought with skill points.

use crate::core::error::ActionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeKind {
    Warrior,
    Sovereign,
}

impl TreeKind {
    pub fn name(&self) -> &'static str {
        match self {
            TreeKind::Warrior => "Warrior",
            TreeKind::Sovereign => "Sovereign",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub max_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTree {
    pub kind: TreeKind,
    pub nodes: Vec<SkillNode>,
}

fn node(id: &str, name: &str, description: &str, max_level: u32) -> SkillNode {
    SkillNode {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level: 0,
        max_level,
    }
}

/// Both trees with every node at level 0.
pub fn initial_skill_trees() -> Vec<SkillTree> {
    vec![
        SkillTree {
            kind: TreeKind::Warrior,
            nodes: vec![
                node("w1", "Army Attack", "+2% Total Attack Power", 10),
                node("w2", "Army Vigor", "+2% Total HP", 10),
                node("w3", "Critical Strike", "+1% Critical Chance", 5),
            ],
        },
        SkillTree {
            kind: TreeKind::Sovereign,
            nodes: vec![
                node("s1", "Mana Affinity", "+5% Mana from monsters", 10),
                node("s2", "Accelerated Growth", "+5% XP from monsters", 10),
                node("s3", "Click Proficiency", "+10% Mana from clicks", 5),
            ],
        },
    ]
}

/// Spends one skill point to raise a node by one level.
/// Returns the node's new level.
pub fn purchase_node(
    trees: &mut [SkillTree],
    node_id: &str,
    skill_points: &mut u32,
) -> Result<u32, ActionError> {
    let node = trees
        .iter_mut()
        .flat_map(|tree| tree.nodes.iter_mut())
        .find(|node| node.id == node_id)
        .ok_or_else(|| ActionError::unknown("skill", node_id))?;
    if node.level >= node.max_level {
        return Err(ActionError::MaxLevel(node.name.clone()));
    }
    if *skill_points == 0 {
        return Err(ActionError::NoSkillPoints);
    }
    *skill_points -= 1;
    node.level += 1;
    Ok(node.level)
}
