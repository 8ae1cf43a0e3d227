// Tick and timing
pub const COMBAT_TICK_MS: u64 = 2_000;
pub const COUNTDOWN_TICK_MS: u64 = 1_000;
pub const NOTIFICATION_WINDOW_MS: u64 = 3_000;
pub const EVENT_LOG_CAPACITY: usize = 100;

// Zone / wave
pub const WAVES_PER_ZONE: u32 = 10;
pub const ZONE_BOSS_INTERVAL: u32 = 10;

// Wave rewards, per zone: (mana, xp)
pub const NORMAL_WAVE_REWARD: (u64, u64) = (100, 50);
pub const BOSS_WAVE_REWARD: (u64, u64) = (500, 250);
pub const ZONE_BOSS_WAVE_REWARD: (u64, u64) = (2_000, 1_000);

// Manual clicking
pub const CLICK_MANA_PER_ZONE: u64 = 10;

// Leveling
pub const UNIT_XP_GROWTH: f64 = 1.2;
pub const UNIT_STAT_GROWTH: f64 = 1.10;
pub const PLAYER_XP_GROWTH: f64 = 1.5;
pub const SKILL_POINTS_PER_LEVEL: u32 = 1;

// Player derived stats, per level
pub const PLAYER_HP_PER_LEVEL: u64 = 150;
pub const PLAYER_ATTACK_PER_LEVEL: u64 = 10;
pub const PLAYER_DEFENSE_PER_LEVEL: u64 = 5;

// Player rank breakpoints (level at which the rank is reached)
pub const PLAYER_RANK_BREAKPOINTS: [u32; 7] = [10, 20, 30, 40, 50, 75, 100];

// Artifacts
pub const MAX_EQUIPPED_ARTIFACTS: usize = 3;

// Ascension
pub const MIN_ZONE_FOR_ASCENSION: u32 = 100;
pub const ASCENSION_ESSENCE_OFFSET: u32 = 10;
pub const ASCENSION_ESSENCE_EXPONENT: f64 = 1.5;
pub const ASCENSION_POINTS_ZONE_STEP: u32 = 25;
pub const PERMANENT_MANA_BONUS_PER_ASCENSION: f64 = 0.1;
pub const ASCENSION_RESET_MANA: u64 = 1_000;
pub const ASCENSION_RESET_XP_THRESHOLD: u64 = 250;

// Monarchs
pub const MONARCH_UNLOCK_ASCENSIONS: u32 = 10;
pub const SHADOW_MONARCH_ESSENCE_BONUS: f64 = 0.1;

// Raid
pub const RAID_BOSS_HP: u64 = 1_000_000_000_000;
pub const RAID_DURATION_SECS: u64 = 7 * 24 * 60 * 60;
pub const RAID_PHASE_COUNT: u32 = 3;
pub const RAID_PHASE_TWO_THRESHOLD: f64 = 0.66;
pub const RAID_PHASE_THREE_THRESHOLD: f64 = 0.33;

// Raid reward brackets: (max rank, essence, gems)
pub const RAID_REWARD_BRACKETS: [(u32, u64, u64); 3] = [
    (1, 50_000, 5_000),
    (3, 25_000, 2_500),
    (5, 10_000, 1_000),
];
pub const RAID_REWARD_FALLBACK: (u64, u64) = (5_000, 500);

// Rival leaderboard damage, as multiples of starting army attack
pub const RAID_RIVALS: [(&str, u64); 4] = [
    ("Zephyr", 15_000),
    ("SovereignX", 12_000),
    ("Luna", 8_000),
    ("Goliath", 5_000),
];

// Gates (procedural dungeons)
pub const GATE_TREASURE_CHANCE: f64 = 0.10;
pub const GATE_EVENT_CHANCE: f64 = 0.30;
pub const GATE_STAMINA_PER_DEPTH: i32 = 2;
/// Deepest gate that can be generated.
pub const MAX_GATE_DEPTH: u32 = 100;
pub const GATE_DIFFICULTY_DIVISOR: f64 = 10.0;
pub const GATE_COMBAT_MANA_PER_ZONE: f64 = 50.0;
pub const GATE_TREASURE_MANA_PER_ZONE: f64 = 250.0;
pub const GATE_TREASURE_GEMS: f64 = 25.0;
pub const GATE_BOSS_MANA_PER_ZONE: f64 = 1_000.0;
pub const GATE_BOSS_GEMS: f64 = 100.0;
pub const GATE_STAMINA_PER_FLOOR: i32 = 1;
