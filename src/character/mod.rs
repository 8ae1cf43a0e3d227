//! The player character: leveling, active skills, skill trees and ascension.

pub mod ascension;
pub mod player;
pub mod skill_tree;
pub mod skills;

pub use ascension::{perform_ascension, AscensionReward};
pub use player::{Player, PlayerRank};
pub use skill_tree::{initial_skill_trees, SkillNode, SkillTree, TreeKind};
pub use skills::{skill_definition, starting_skills, ActiveSkill, SkillEffect};
