use super::types::{DungeonReward, DungeonStatus, RewardKind, TimedDungeon};

fn dungeon(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    duration_secs: u64,
    kind: RewardKind,
    amount: u64,
) -> TimedDungeon {
    TimedDungeon {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        duration_secs,
        remaining_secs: duration_secs,
        status: DungeonStatus::Idle,
        reward: DungeonReward { kind, amount },
    }
}

pub fn dungeon_catalog() -> Vec<TimedDungeon> {
    vec![
        dungeon(
            "gold",
            "Gold Dungeon",
            "Yields a massive amount of Mana.",
            "💰",
            3_600,
            RewardKind::Mana,
            5_000_000,
        ),
        dungeon(
            "xp",
            "XP Dungeon",
            "Grants a huge boost of experience.",
            "⭐",
            7_200,
            RewardKind::Xp,
            100_000,
        ),
        dungeon(
            "artifact",
            "Artifact Dungeon",
            "A chance to find precious Gems.",
            "👑",
            14_400,
            RewardKind::Gems,
            500,
        ),
        dungeon(
            "elite",
            "Elite Dungeon",
            "High-tier Mana expedition.",
            "⚔️",
            28_800,
            RewardKind::Mana,
            25_000_000,
        ),
        dungeon(
            "boss",
            "Boss Dungeon",
            "Defeat a boss for a large Gem bounty.",
            "💀",
            43_200,
            RewardKind::Gems,
            2_000,
        ),
        dungeon(
            "dragon",
            "Dragon's Lair",
            "The ultimate challenge for immense XP.",
            "🐲",
            86_400,
            RewardKind::Xp,
            1_000_000,
        ),
    ]
}

/// Quest objectives a claim of this dungeon advances, beyond the generic
/// `complete_dungeon`.
pub fn claim_objectives(dungeon_id: &str) -> &'static [&'static str] {
    match dungeon_id {
        "gold" => &[
            "run_gold_dungeon",
            "collect_shards",
            "complete_gold_dungeon_puzzle",
        ],
        "xp" => &["complete_xp_dungeon", "complete_xp_dungeon_puzzle"],
        "elite" => &["complete_elite_dungeon", "complete_elite_dungeon_puzzle"],
        "dragon" => &["complete_dragons_lair", "complete_dragons_lair_twice"],
        _ => &[],
    }
}
