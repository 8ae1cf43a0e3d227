//! The quest catalog.

use super::types::{Objective, Quest, QuestCategory, QuestReward, QuestStatus};
use crate::inventory::{Artifact, BonusType, ItemGrant};

fn quest(
    id: &str,
    title: &str,
    category: QuestCategory,
    level_requirement: u32,
    synopsis: &str,
    objectives: Vec<Objective>,
    reward: QuestReward,
) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        category,
        level_requirement,
        synopsis: synopsis.to_string(),
        reward,
        objectives,
        status: QuestStatus::Locked,
    }
}

fn artifact_reward(mana: u64, artifact: Artifact) -> QuestReward {
    QuestReward {
        mana,
        artifact: Some(artifact),
        ..Default::default()
    }
}

/// Every quest, all Locked. [`QuestLog::new`](super::QuestLog::new) opens
/// the ones the player's level already allows.
pub fn quest_catalog() -> Vec<Quest> {
    use QuestCategory::*;

    vec![
        quest(
            "q3_crystal_resonance",
            "Crystal Resonance",
            Exploration,
            1,
            "Mana crystals hum inside the Gold Dungeon. Gather their shards and refine them.",
            vec![
                Objective::new("collect_shards", "Collect crystal shards", 3),
                Objective::new("refine_shards", "Refine the shards with mana", 50_000),
            ],
            QuestReward {
                mana: 20_000,
                gems: 50,
                ..Default::default()
            },
        ),
        // Chapter 1
        quest(
            "q4_price_of_bread",
            "The Price of Bread",
            Social,
            5,
            "A baker is being shaken down by low-rank hunters. Teach them some manners.",
            vec![Objective::new("defeat_racketteurs", "Drive off the racketeers", 3)],
            QuestReward {
                mana: 10_000,
                items: vec![ItemGrant { id: 1, quantity: 1 }],
                ..Default::default()
            },
        ),
        quest(
            "q5_dungeon_rat",
            "The Dungeon Rat",
            Exploration,
            5,
            "An unstable mini-gate opened in the sewers and is spitting out creatures. Clear the area and close the rift.",
            vec![
                Objective::new("explore_sewers", "Clear the creatures from the sewers", 50),
                Objective::new("close_rift", "Close the unstable rift", 1),
            ],
            QuestReward {
                mana: 15_000,
                shadow_essence: 100,
                ..Default::default()
            },
        ),
        quest(
            "q6_missing_brother",
            "The Missing Brother",
            Investigation,
            10,
            "A boy is sick with worry. His older brother, a new hunter, vanished inside a D-rank dungeon.",
            vec![
                Objective::new("reach_zone_20", "Push forward to find clues", 20),
                Objective::new("rescue_brother", "Rescue the brother", 1),
            ],
            artifact_reward(
                25_000,
                Artifact::new(5, "Charm of Brotherhood", "🤝", "+2% Army HP", 0.02, BonusType::Hp),
            ),
        ),
        quest(
            "q7_cleaner",
            "The Cleaner",
            Combat,
            15,
            "A hunter team botched its job and left a dungeon 'almost' empty. Finish the sweep and recover what they left behind.",
            vec![
                Objective::new("complete_dungeon", "Finish clearing the dungeon", 1),
                Objective::new("extract_remains", "Extract the shadow essence", 100),
            ],
            QuestReward {
                mana: 50_000,
                shadow_essence: 500,
                ..Default::default()
            },
        ),
        // Chapter 2
        quest(
            "q8_phantom_guild",
            "The Phantom Guild",
            Investigation,
            20,
            "An entire guild disappeared without a trace inside a C-rank dungeon. Find out what happened.",
            vec![
                Objective::new("reach_zone_30", "Explore the dungeon to its end", 30),
                Objective::new("defeat_monarch_shadow", "Face the lesser Monarch", 1),
            ],
            artifact_reward(
                100_000,
                Artifact::new(6, "Monarch's Fragment", "💠", "+5% Army Attack", 0.05, BonusType::Attack),
            ),
        ),
        quest(
            "q9_jinho_contract",
            "Jin-ho's Contract",
            Social,
            25,
            "Your friend Jin-ho needs help with a guild raid to prove his worth. Make sure it goes well.",
            vec![Objective::new("complete_xp_dungeon", "Escort Jin-ho through a dungeon", 1)],
            artifact_reward(
                50_000,
                Artifact::new(7, "Jin-ho's Charm", "🧑‍🤝‍🧑", "+5% XP Gain", 0.05, BonusType::Xp),
            ),
        ),
        quest(
            "q10_tears_of_iron",
            "Tears of Iron",
            Combat,
            25,
            "A legendary smith needs rare ore guarded by stone golems in the middle zones.",
            vec![
                Objective::new("collect_ore", "Collect iron ore", 100),
                Objective::new("defeat_golem", "Face a guardian golem", 5),
            ],
            QuestReward {
                mana: 250_000,
                gems: 100,
                ..Default::default()
            },
        ),
        quest(
            "q11_blind_huntress",
            "The Blind Huntress",
            Investigation,
            30,
            "A renowned huntress lost her sight to a dungeon curse. Find the source of that curse.",
            vec![
                Objective::new("reach_zone_40", "Find the origin of the curse", 40),
                Objective::new("purify_source", "Purify the source of the curse", 1),
            ],
            artifact_reward(
                0,
                Artifact::new(8, "Eye of Insight", "🧿", "+2% Critical Chance", 0.02, BonusType::Crit),
            ),
        ),
        quest(
            "q12_black_market",
            "The Black Market",
            Exploration,
            35,
            "An underground market for illegal dungeon goods operates in the city. Infiltrate it and see what you can find.",
            vec![Objective::new("complete_elite_dungeon", "Infiltrate the Black Market", 1)],
            QuestReward {
                mana: 500_000,
                gems: 500,
                skill: Some("mana_overload".to_string()),
                ..Default::default()
            },
        ),
        // Chapter 3
        quest(
            "q13_dragon_song",
            "Song of the Dragon",
            Combat,
            40,
            "An unstable dragon egg threatens to burst, releasing waves of raw mana. Find it and neutralize the threat.",
            vec![
                Objective::new("reach_zone_50", "Explore the cavern", 50),
                Objective::new("defeat_juvenile_dragon", "Face a juvenile dragon", 1),
            ],
            artifact_reward(
                0,
                Artifact::new(9, "Draconic Shadow Essence", "🐲", "+10% Mana Gain", 0.1, BonusType::Mana),
            ),
        ),
        quest(
            "q14_lost_shadows",
            "The Lost Shadows",
            Investigation,
            45,
            "Some of your oldest shadow soldiers show signs of insubordination, corrupted by an outside influence.",
            vec![
                Objective::new("find_lost_shadows", "Track down the corrupted soldiers", 250),
                Objective::new("reach_zone_60", "Understand the source of the corruption", 60),
            ],
            artifact_reward(
                0,
                Artifact::new(10, "Sovereign's Command", "👑", "+5% Army HP", 0.05, BonusType::Hp),
            ),
        ),
        quest(
            "q15_blade_dance",
            "Dance of the Blade",
            Combat,
            50,
            "The S-rank huntress Cha Hae-in has heard of your power and wants to test you in a friendly duel.",
            vec![Objective::new("complete_dragons_lair", "Duel Cha Hae-in", 1)],
            artifact_reward(
                0,
                Artifact::new(11, "Cha Hae-in's Scarf", "🧣", "+5% Army Defense", 0.05, BonusType::Defense),
            ),
        ),
        quest(
            "q16_dungeon_heart",
            "Heart of the Dungeon",
            Exploration,
            55,
            "A unique dungeon has a core that regulates its mana. It has become unstable and threatens a Dungeon Break.",
            vec![
                Objective::new("complete_gold_dungeon_puzzle", "Solve the mana puzzle", 1),
                Objective::new("complete_xp_dungeon_puzzle", "Solve the experience puzzle", 1),
                Objective::new("complete_elite_dungeon_puzzle", "Solve the combat puzzle", 1),
                Objective::new("reach_zone_70", "Stabilize the core", 70),
                Objective::new("defeat_dungeon_guardian", "Face the core's guardian", 1),
            ],
            artifact_reward(
                0,
                Artifact::new(
                    12,
                    "Dungeon Core Fragment",
                    "💎",
                    "+25% Shadow Essence Gain",
                    0.25,
                    BonusType::Essence,
                ),
            ),
        ),
        // Chapter 4
        quest(
            "q17_shadow_of_the_past",
            "Shadow of the Past",
            Combat,
            60,
            "You face a shadow version of yourself in a mirror dimension to overcome your limits.",
            vec![
                Objective::new("reach_zone_80", "Explore the mirror dimension", 80),
                Objective::new("defeat_dark_self", "Face your dark self", 1),
            ],
            artifact_reward(
                0,
                Artifact::new(13, "Echo of the Self", "🎭", "+10% Army Attack", 0.1, BonusType::Attack),
            ),
        ),
        quest(
            "q18_sovereign_pact",
            "The Sovereign's Pact",
            Social,
            65,
            "An enigmatic Sovereign offers an alliance: immense power in exchange for your loyalty.",
            vec![Objective::new("complete_dragons_lair_twice", "Survive the aftermath", 2)],
            artifact_reward(
                0,
                Artifact::new(14, "Sovereign's Pact", "📜", "+15% Mana Gain", 0.15, BonusType::Mana),
            ),
        ),
        quest(
            "q19_seven_shadows",
            "The Seven Shadows",
            Combat,
            70,
            "Seven shadows of terrifying power, once sealed, have broken free. Hunt them down and bind them to your army.",
            vec![Objective::new("defeat_7_shadows", "Face the seven shadows", 7)],
            artifact_reward(
                0,
                Artifact::new(15, "Seal of the Seven", "🔱", "+10% Army HP", 0.1, BonusType::Hp),
            ),
        ),
    ]
}
