use super::types::{Monarch, MonarchKind, MonarchNode};

fn node(id: &str, name: &str, description: &str, tier: u32, cost: u64) -> MonarchNode {
    MonarchNode {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level: 0,
        max_level: 1,
        tier,
        cost,
    }
}

fn monarch(
    kind: MonarchKind,
    name: &str,
    description: &str,
    unique_unit: &str,
    passive_bonuses: &[&str],
    ultimate: &str,
    tree: Vec<MonarchNode>,
) -> Monarch {
    Monarch {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        unique_unit: unique_unit.to_string(),
        passive_bonuses: passive_bonuses.iter().map(|s| s.to_string()).collect(),
        ultimate: ultimate.to_string(),
        tree,
    }
}

pub fn monarch_catalog() -> Vec<Monarch> {
    vec![
        monarch(
            MonarchKind::Shadow,
            "Monarch of Shadows",
            "Control the battlefield with an ever-growing army and drain your foes.",
            "Shadow General",
            &[
                "+10% Shadow Essence from all sources.",
                "+20% HP for all Infantry units.",
            ],
            "march_of_shadows",
            vec![
                node("ms1_1", "Army Damage", "+10% Army Damage", 1, 1),
                node("ms1_2", "Army HP", "+10% Army HP", 1, 1),
                node("ms2_1", "Attack Speed", "+20% Attack Speed", 2, 2),
                node("ms2_2", "Progression Speed", "+20% Progression Speed", 2, 2),
                node("ms3_1", "Critical Damage", "+15% Critical Damage", 3, 3),
                node("ms3_2", "Critical Chance", "+15% Critical Chance", 3, 3),
                node("ms4_1", "Max Elite Unit", "+1 Max Elite Unit", 4, 5),
                node("ms4_2", "Auto Extraction", "+10% Auto Extraction", 4, 5),
                node("ms5_1", "Permanent Shadow Army", "+50% Global Stats", 5, 10),
            ],
        ),
        monarch(
            MonarchKind::Beast,
            "Monarch of Beasts",
            "Overwhelm your enemies with ferocious power and critical strikes.",
            "Giant Wolf",
            &[
                "+10% Damage for Dragon units.",
                "+5% global critical hit chance.",
            ],
            "primordial_roar",
            vec![
                node("mb1_1", "Savage Power", "+10% Beast & Dragon Damage", 1, 1),
                node("mb1_2", "Tough Hide", "+10% Beast & Dragon HP", 1, 1),
                node("mb2_1", "Frenzy", "+20% Attack Speed for Beasts", 2, 2),
                node("mb2_2", "Swift Wings", "+20% Progression Speed", 2, 2),
                node("mb3_1", "Deep Wounds", "+25% Critical Damage", 3, 3),
                node("mb4_1", "Boss Hunter", "+50% Damage to Bosses", 4, 5),
                node("mb5_1", "Primal Rage", "+50% Beast & Dragon Global Stats", 5, 10),
            ],
        ),
        monarch(
            MonarchKind::Ice,
            "Monarch of Frost",
            "Freeze the battlefield, controlling your enemies and fortifying your army.",
            "Ice Golem",
            &[
                "All attacks have a 5% chance to briefly slow enemies.",
                "+15% global army defense.",
            ],
            "eternal_winter",
            vec![
                node("mi1_1", "Glacial Armor", "+20% Army Defense", 1, 1),
                node("mi1_2", "Frozen Core", "+15% Army HP", 1, 1),
                node("mi2_1", "Chilling Aura", "+10% Slow Chance", 2, 2),
                node("mi3_1", "Permafrost", "Slowed enemies take 20% more damage", 3, 3),
                node("mi4_1", "Unbreakable", "+100% Army Defense", 4, 5),
                node("mi5_1", "Ice Age", "+50% Global Defensive Stats & Slow Effect", 5, 10),
            ],
        ),
        monarch(
            MonarchKind::Destruction,
            "Monarch of Destruction",
            "Annihilate everything with pure, chaotic power and accelerate your progression.",
            "Chaos Knight",
            &["+10% global attack power.", "+20% idle speed."],
            "void_assault",
            vec![
                node("md1_1", "Boss Slayer", "+10% Damage vs Bosses", 1, 1),
                node("md1_2", "Elite Hunter", "+10% Damage vs Elites", 1, 1),
                node("md2_1", "Idle Speed", "+20% Idle Speed", 2, 2),
                node("md2_2", "Idle Loot", "+20% Idle Loot", 2, 2),
                node("md3_1", "Zone Multiplier", "+15% Zone Multiplier", 3, 3),
                node("md3_2", "AoE Damage", "+15% AoE Damage", 3, 3),
                node("md4_1", "Active Skill Slot", "+1 Active Skill Slot", 4, 5),
                node("md4_2", "Cooldown Reduction", "-20% Skill Cooldowns", 4, 5),
                node("md5_1", "Void Assault", "+200% damage for 10s every 60s", 5, 10),
            ],
        ),
        monarch(
            MonarchKind::Light,
            "Monarch of Light",
            "Lead your forces with unmatched strategy, enhancing their power and accelerating your path to supremacy.",
            "Light Sentinel",
            &[
                "+10% Global Army Stats.",
                "+10% Shadow Essence gain from Ascension.",
            ],
            "monarchs_crown",
            vec![
                node("ml1_1", "Soldier HP", "+10% Soldier HP", 1, 1),
                node("ml1_2", "Soldier Speed", "+10% Soldier Speed", 1, 1),
                node("ml2_1", "Army Damage", "+20% Army Damage", 2, 2),
                node("ml2_2", "Army Defense", "+20% Army Defense", 2, 2),
                node("ml3_1", "Legendary Capacity", "+1 Max Legendary Soldier", 3, 3),
                node("ml3_2", "Soul Harvest", "+10% Rare Soul Drop Chance", 3, 3),
                node("ml4_1", "Ascension Pact", "+20% Ascension Bonus", 4, 5),
                node("ml4_2", "Essence Collector", "+20% Shadow Essence", 4, 5),
                node(
                    "ml5_1",
                    "Monarch's Crown",
                    "+100% global stats for 30s after each boss",
                    5,
                    10,
                ),
            ],
        ),
    ]
}
