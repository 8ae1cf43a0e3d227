//! Starting roster and monarch-granted units.

use super::types::{Speed, StatBonus, StatKey, Unit, UnitRank, UnitStats, Upgrade};

fn bonus(stat: StatKey, percent: u32) -> StatBonus {
    StatBonus { stat, percent }
}

fn unit(
    name: &str,
    icon: &str,
    rank: UnitRank,
    experience_to_next_level: u64,
    stats: UnitStats,
    upgrades: Vec<Upgrade>,
) -> Unit {
    Unit {
        name: name.to_string(),
        icon: icon.to_string(),
        rank,
        level: 1,
        experience: 0,
        experience_to_next_level,
        stats,
        upgrades,
    }
}

/// The roster a new game (or a fresh ascension) starts with.
pub fn initial_units() -> Vec<Unit> {
    vec![
        unit(
            "Infantry",
            "🛡️",
            UnitRank::SSS,
            100,
            UnitStats::new(1_200, 50, 150, Speed::Low),
            vec![
                Upgrade::new("Rank D Evolution", 100_000, &[bonus(StatKey::Hp, 10)], 10),
                Upgrade::new(
                    "Rank C Evolution",
                    500_000,
                    &[bonus(StatKey::Defense, 20)],
                    25,
                ),
                Upgrade::new(
                    "Rank B: Provocation",
                    1_000_000,
                    &[bonus(StatKey::Defense, 30)],
                    50,
                ),
                Upgrade::new("Rank A Evolution", 2_500_000, &[bonus(StatKey::Hp, 30)], 75),
                Upgrade::new(
                    "Rank S: AoE Shadow Shield",
                    5_000_000,
                    &[bonus(StatKey::Hp, 25), bonus(StatKey::Defense, 25)],
                    100,
                ),
            ],
        ),
        unit(
            "Assassin",
            "🗡️",
            UnitRank::SSS,
            120,
            UnitStats::new(450, 210, 30, Speed::VeryHigh),
            vec![Upgrade::new(
                "Phantom Strike",
                2_000_000,
                &[bonus(StatKey::Attack, 5)],
                95,
            )],
        ),
        unit(
            "Mage",
            "🔮",
            UnitRank::SS,
            110,
            UnitStats::new(600, 180, 45, Speed::Medium),
            vec![Upgrade::new(
                "Void Explosion",
                1_800_000,
                &[bonus(StatKey::Attack, 5)],
                90,
            )],
        ),
        unit(
            "Archer",
            "🏹",
            UnitRank::S,
            90,
            UnitStats::new(550, 190, 40, Speed::High),
            vec![Upgrade::new(
                "Shadow Arrow",
                1_600_000,
                &[bonus(StatKey::Attack, 5)],
                85,
            )],
        ),
        unit(
            "Knight",
            "🐴",
            UnitRank::S,
            95,
            UnitStats::new(900, 110, 120, Speed::Medium),
            vec![Upgrade::new(
                "Dark Charge",
                1_700_000,
                &[bonus(StatKey::Hp, 5)],
                85,
            )],
        ),
        unit(
            "Dragon",
            "🐉",
            UnitRank::A,
            200,
            UnitStats::new(2_500, 350, 200, Speed::Medium),
            vec![Upgrade::new(
                "Void Breath",
                5_000_000,
                &[bonus(StatKey::Attack, 10)],
                75,
            )],
        ),
    ]
}

/// The mid-game roster of a veteran profile: every unit at level 50.
pub fn veteran_units() -> Vec<Unit> {
    initial_units()
        .into_iter()
        .map(|mut u| {
            u.level = 50;
            u.experience = 15_000;
            u.experience_to_next_level = 25_000;
            u.stats = UnitStats::new(1_200_000, 50_000, 150_000, u.stats.speed);
            u
        })
        .collect()
}

/// The unique unit a monarch grants, by unit name.
pub fn monarch_unit(name: &str) -> Option<Unit> {
    let (icon, stats) = match name {
        "Shadow General" => ("👑", UnitStats::new(5_000_000, 150_000, 500_000, Speed::Medium)),
        "Giant Wolf" => ("🐺", UnitStats::new(3_000_000, 450_000, 150_000, Speed::High)),
        "Ice Golem" => ("🧊", UnitStats::new(8_000_000, 100_000, 400_000, Speed::Low)),
        "Chaos Knight" => ("💥", UnitStats::new(4_000_000, 400_000, 200_000, Speed::Medium)),
        "Light Sentinel" => ("🌟", UnitStats::new(10_000_000, 80_000, 350_000, Speed::Low)),
        _ => return None,
    };
    Some(unit(name, icon, UnitRank::SSS, 500, stats, Vec::new()))
}
