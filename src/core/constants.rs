// Tick and timing
pub const TICK_INTERVAL_MS: i64 = 100;
pub const TICKS_PER_SECOND: u32 = 10;

// Offline progression
pub const MAX_OFFLINE_MS: i64 = 7 * 24 * 60 * 60 * 1000;
// Offline efficiency ladder, indexed by purchased tier
pub const OFFLINE_RATES: [f64; 4] = [0.33, 0.40, 0.50, 0.60];

// XP and leveling
pub const LEVEL_CAP: u32 = 100;
pub const XP_COST_QUADRATIC: u64 = 100;
pub const XP_COST_LINEAR: u64 = 50;
pub const XP_BONUS_PER_LEVEL: f64 = 0.01;
pub const XP_BONUS_PER_PRESTIGE: f64 = 0.05;

// Sigil perks (meta-currency upgrades, survive ascension)
pub const PERK_LEVEL_CAP: u32 = 5;
pub const XP_PERK_BONUS_PER_LEVEL: f64 = 0.02;
pub const SPEED_PERK_REDUCTION_PER_LEVEL: f64 = 0.06;
pub const SPEED_FACTOR_FLOOR: f64 = 0.7;
pub const LOOT_PERK_BONUS_PER_LEVEL: f64 = 0.05;

// Activity completion rewards
pub const BONUS_GOLD_CHANCE: f64 = 0.05;
pub const BONUS_GOLD_PER_LEVEL: u64 = 2;

// Combat resolution
pub const DEFAULT_ATTACK_SPEED_MS: i64 = 4000;
pub const DEFAULT_WEAPON_ACCURACY: f64 = 0.8;
pub const ACCURACY_MIN: f64 = 0.10;
pub const ACCURACY_MAX: f64 = 0.95;
pub const ACCURACY_RATIO_WEIGHT: f64 = 0.1;
pub const DAMAGE_VARIANCE: f64 = 0.15;
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_CHANCE_PER_STRENGTH: f64 = 0.002;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const COMBAT_LEVEL_CAP: u32 = 600;

// Combat rewards
pub const GOLD_PER_ENEMY_LEVEL: u64 = 5;
pub const VICTORY_GOLD_JITTER: u64 = 10;

// Auto-eat
pub const DEFAULT_AUTO_EAT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_FOOD_HEAL: u32 = 20;
// "Best available" food selection order, strongest first
pub const FOOD_PRIORITY: [&str; 4] = [
    "cooked_salmon",
    "cooked_trout",
    "cooked_shrimp",
    "bread",
];

// Bank capacity before upgrades
pub const BASE_BANK_TABS: u32 = 1;
pub const BASE_BANK_SLOTS_PER_TAB: u32 = 12;
pub const BANK_SLOTS_PER_UPGRADE: u32 = 4;
pub const BASE_QUEUE_LENGTH: u32 = 1;

// Save format
pub const SAVE_FILE_VERSION: u32 = 1;
