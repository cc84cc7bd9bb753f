//! Built-in content tables.
//!
//! Tuning lives here, not in the engines: durations, XP awards, drop
//! chances, enemy stats, upgrade costs. Ids are stable and referenced by
//! saved profiles, so renaming an id is a save-breaking change.

use super::{
    ActivityDefinition, ArmorStats, EnemyDefinition, ItemCost, ItemDefinition, ItemReward,
    LootTable, LootTableEntry, Skill, UpgradeDefinition, UpgradeKind, WeaponStats,
};

/// Returns all gathering and crafting activities.
pub fn activities() -> Vec<ActivityDefinition> {
    vec![
        // ── Mining ──────────────────────────────────────────────
        ActivityDefinition {
            id: "mine_copper",
            name: "Mine Copper Ore",
            skill: Skill::Mining,
            base_duration_ms: 3000,
            xp_reward: 10,
            rewards: vec![ItemReward {
                item_id: "copper_ore",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![],
        },
        ActivityDefinition {
            id: "mine_tin",
            name: "Mine Tin Ore",
            skill: Skill::Mining,
            base_duration_ms: 3000,
            xp_reward: 10,
            rewards: vec![ItemReward {
                item_id: "tin_ore",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![],
        },
        ActivityDefinition {
            id: "mine_iron",
            name: "Mine Iron Ore",
            skill: Skill::Mining,
            base_duration_ms: 4000,
            xp_reward: 18,
            rewards: vec![
                ItemReward {
                    item_id: "iron_ore",
                    quantity: 1,
                    chance: 1.0,
                },
                ItemReward {
                    item_id: "gemstone",
                    quantity: 1,
                    chance: 0.02,
                },
            ],
            costs: vec![],
            level_requirements: vec![(Skill::Mining, 10)],
        },
        // ── Woodcutting ─────────────────────────────────────────
        ActivityDefinition {
            id: "chop_pine",
            name: "Fell Pine",
            skill: Skill::Woodcutting,
            base_duration_ms: 2500,
            xp_reward: 8,
            rewards: vec![ItemReward {
                item_id: "pine_log",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![],
        },
        ActivityDefinition {
            id: "chop_oak",
            name: "Fell Oak",
            skill: Skill::Woodcutting,
            base_duration_ms: 3500,
            xp_reward: 15,
            rewards: vec![ItemReward {
                item_id: "oak_log",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![(Skill::Woodcutting, 8)],
        },
        // ── Fishing ─────────────────────────────────────────────
        ActivityDefinition {
            id: "fish_shrimp",
            name: "Net Shrimp",
            skill: Skill::Fishing,
            base_duration_ms: 2800,
            xp_reward: 9,
            rewards: vec![ItemReward {
                item_id: "raw_shrimp",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![],
        },
        ActivityDefinition {
            id: "fish_trout",
            name: "Fish Trout",
            skill: Skill::Fishing,
            base_duration_ms: 3600,
            xp_reward: 16,
            rewards: vec![ItemReward {
                item_id: "raw_trout",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![(Skill::Fishing, 12)],
        },
        ActivityDefinition {
            id: "fish_salmon",
            name: "Fish Salmon",
            skill: Skill::Fishing,
            base_duration_ms: 4200,
            xp_reward: 24,
            rewards: vec![ItemReward {
                item_id: "raw_salmon",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![],
            level_requirements: vec![(Skill::Fishing, 25)],
        },
        // ── Smithing ────────────────────────────────────────────
        ActivityDefinition {
            id: "smelt_bronze",
            name: "Smelt Bronze Bar",
            skill: Skill::Smithing,
            base_duration_ms: 4000,
            xp_reward: 14,
            rewards: vec![ItemReward {
                item_id: "bronze_bar",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![
                ItemCost {
                    item_id: "copper_ore",
                    quantity: 1,
                },
                ItemCost {
                    item_id: "tin_ore",
                    quantity: 1,
                },
            ],
            level_requirements: vec![],
        },
        ActivityDefinition {
            id: "smelt_iron",
            name: "Smelt Iron Bar",
            skill: Skill::Smithing,
            base_duration_ms: 5000,
            xp_reward: 25,
            rewards: vec![ItemReward {
                item_id: "iron_bar",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![ItemCost {
                item_id: "iron_ore",
                quantity: 2,
            }],
            level_requirements: vec![(Skill::Smithing, 15)],
        },
        ActivityDefinition {
            id: "forge_bronze_sword",
            name: "Forge Bronze Sword",
            skill: Skill::Smithing,
            base_duration_ms: 6000,
            xp_reward: 30,
            rewards: vec![ItemReward {
                item_id: "bronze_sword",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![ItemCost {
                item_id: "bronze_bar",
                quantity: 2,
            }],
            level_requirements: vec![(Skill::Smithing, 5)],
        },
        ActivityDefinition {
            id: "forge_iron_platebody",
            name: "Forge Iron Platebody",
            skill: Skill::Smithing,
            base_duration_ms: 8000,
            xp_reward: 50,
            rewards: vec![ItemReward {
                item_id: "iron_platebody",
                quantity: 1,
                chance: 1.0,
            }],
            costs: vec![ItemCost {
                item_id: "iron_bar",
                quantity: 3,
            }],
            level_requirements: vec![(Skill::Smithing, 25)],
        },
        // ── Cooking ─────────────────────────────────────────────
        ActivityDefinition {
            id: "cook_shrimp",
            name: "Cook Shrimp",
            skill: Skill::Cooking,
            base_duration_ms: 2400,
            xp_reward: 7,
            // Slightly under 1.0: a burn chance, matching kitchen tradition
            rewards: vec![ItemReward {
                item_id: "cooked_shrimp",
                quantity: 1,
                chance: 0.95,
            }],
            costs: vec![ItemCost {
                item_id: "raw_shrimp",
                quantity: 1,
            }],
            level_requirements: vec![],
        },
        ActivityDefinition {
            id: "cook_trout",
            name: "Cook Trout",
            skill: Skill::Cooking,
            base_duration_ms: 3000,
            xp_reward: 14,
            rewards: vec![ItemReward {
                item_id: "cooked_trout",
                quantity: 1,
                chance: 0.95,
            }],
            costs: vec![ItemCost {
                item_id: "raw_trout",
                quantity: 1,
            }],
            level_requirements: vec![(Skill::Cooking, 10)],
        },
        ActivityDefinition {
            id: "cook_salmon",
            name: "Cook Salmon",
            skill: Skill::Cooking,
            base_duration_ms: 3400,
            xp_reward: 20,
            rewards: vec![ItemReward {
                item_id: "cooked_salmon",
                quantity: 1,
                chance: 0.95,
            }],
            costs: vec![ItemCost {
                item_id: "raw_salmon",
                quantity: 1,
            }],
            level_requirements: vec![(Skill::Cooking, 20)],
        },
    ]
}

/// Returns all item definitions.
pub fn items() -> Vec<ItemDefinition> {
    fn material(id: &'static str, name: &'static str, sell_value: u64) -> ItemDefinition {
        ItemDefinition {
            id,
            name,
            sell_value,
            healing: None,
            weapon: None,
            armor: None,
        }
    }

    fn food(id: &'static str, name: &'static str, sell_value: u64, heal: u32) -> ItemDefinition {
        ItemDefinition {
            id,
            name,
            sell_value,
            healing: Some(heal),
            weapon: None,
            armor: None,
        }
    }

    vec![
        // Materials
        material("copper_ore", "Copper Ore", 2),
        material("tin_ore", "Tin Ore", 2),
        material("iron_ore", "Iron Ore", 5),
        material("gemstone", "Gemstone", 50),
        material("pine_log", "Pine Log", 2),
        material("oak_log", "Oak Log", 6),
        material("raw_shrimp", "Raw Shrimp", 2),
        material("raw_trout", "Raw Trout", 8),
        material("raw_salmon", "Raw Salmon", 15),
        material("bronze_bar", "Bronze Bar", 8),
        material("iron_bar", "Iron Bar", 20),
        material("bone", "Bone", 1),
        material("goblin_ear", "Goblin Ear", 4),
        material("wolf_pelt", "Wolf Pelt", 12),
        material("ember_crystal", "Ember Crystal", 150),
        // Food
        food("bread", "Bread", 3, 10),
        food("cooked_shrimp", "Cooked Shrimp", 5, 15),
        food("cooked_trout", "Cooked Trout", 12, 30),
        food("cooked_salmon", "Cooked Salmon", 22, 45),
        // Weapons
        ItemDefinition {
            id: "rusty_dagger",
            name: "Rusty Dagger",
            sell_value: 10,
            healing: None,
            weapon: Some(WeaponStats {
                attack_bonus: 2,
                strength_bonus: 1,
                accuracy: 0.78,
                speed_ms: 3000,
            }),
            armor: None,
        },
        ItemDefinition {
            id: "bronze_sword",
            name: "Bronze Sword",
            sell_value: 40,
            healing: None,
            weapon: Some(WeaponStats {
                attack_bonus: 4,
                strength_bonus: 3,
                accuracy: 0.82,
                speed_ms: 3600,
            }),
            armor: None,
        },
        ItemDefinition {
            id: "iron_scimitar",
            name: "Iron Scimitar",
            sell_value: 120,
            healing: None,
            weapon: Some(WeaponStats {
                attack_bonus: 10,
                strength_bonus: 8,
                accuracy: 0.85,
                speed_ms: 3200,
            }),
            armor: None,
        },
        // Armor
        ItemDefinition {
            id: "leather_armor",
            name: "Leather Armor",
            sell_value: 25,
            healing: None,
            weapon: None,
            armor: Some(ArmorStats { defense_bonus: 3 }),
        },
        ItemDefinition {
            id: "bronze_platebody",
            name: "Bronze Platebody",
            sell_value: 60,
            healing: None,
            weapon: None,
            armor: Some(ArmorStats { defense_bonus: 6 }),
        },
        ItemDefinition {
            id: "iron_platebody",
            name: "Iron Platebody",
            sell_value: 180,
            healing: None,
            weapon: None,
            armor: Some(ArmorStats { defense_bonus: 14 }),
        },
    ]
}

/// Returns the bestiary.
pub fn enemies() -> Vec<EnemyDefinition> {
    vec![
        EnemyDefinition {
            id: "giant_rat",
            name: "Giant Rat",
            level: 2,
            max_hp: 15,
            attack: 3,
            strength: 2,
            defense: 1,
            attack_speed_ms: 3200,
            accuracy: 0.70,
            xp_reward: 12,
            required_combat_level: 1,
            loot_table: "giant_rat_drops",
        },
        EnemyDefinition {
            id: "goblin",
            name: "Goblin",
            level: 5,
            max_hp: 30,
            attack: 6,
            strength: 5,
            defense: 4,
            attack_speed_ms: 3000,
            accuracy: 0.72,
            xp_reward: 25,
            required_combat_level: 3,
            loot_table: "goblin_drops",
        },
        EnemyDefinition {
            id: "forest_wolf",
            name: "Forest Wolf",
            level: 12,
            max_hp: 55,
            attack: 12,
            strength: 10,
            defense: 7,
            attack_speed_ms: 2800,
            accuracy: 0.75,
            xp_reward: 48,
            required_combat_level: 8,
            loot_table: "forest_wolf_drops",
        },
        EnemyDefinition {
            id: "skeleton_warrior",
            name: "Skeleton Warrior",
            level: 20,
            max_hp: 90,
            attack: 18,
            strength: 15,
            defense: 14,
            attack_speed_ms: 3400,
            accuracy: 0.78,
            xp_reward: 85,
            required_combat_level: 15,
            loot_table: "skeleton_warrior_drops",
        },
        EnemyDefinition {
            id: "cave_troll",
            name: "Cave Troll",
            level: 35,
            max_hp: 180,
            attack: 30,
            strength: 28,
            defense: 22,
            attack_speed_ms: 4200,
            accuracy: 0.80,
            xp_reward: 180,
            required_combat_level: 28,
            loot_table: "cave_troll_drops",
        },
        EnemyDefinition {
            id: "ember_drake",
            name: "Ember Drake",
            level: 50,
            max_hp: 320,
            attack: 45,
            strength: 40,
            defense: 35,
            attack_speed_ms: 3800,
            accuracy: 0.85,
            xp_reward: 340,
            required_combat_level: 45,
            loot_table: "ember_drake_drops",
        },
    ]
}

/// Returns all enemy loot tables.
pub fn loot_tables() -> Vec<LootTable> {
    fn entry(item_id: &'static str, quantity: u32, chance: f64, rare: bool) -> LootTableEntry {
        LootTableEntry {
            item_id,
            quantity,
            chance,
            rare,
        }
    }

    vec![
        LootTable {
            id: "giant_rat_drops",
            entries: vec![
                entry("bone", 1, 0.80, false),
                entry("bread", 1, 0.15, false),
            ],
        },
        LootTable {
            id: "goblin_drops",
            entries: vec![
                entry("bone", 1, 0.70, false),
                entry("goblin_ear", 1, 0.50, false),
                entry("bread", 1, 0.20, false),
                entry("rusty_dagger", 1, 0.05, true),
            ],
        },
        LootTable {
            id: "forest_wolf_drops",
            entries: vec![
                entry("bone", 1, 0.80, false),
                entry("wolf_pelt", 1, 0.60, false),
                entry("leather_armor", 1, 0.08, true),
            ],
        },
        LootTable {
            id: "skeleton_warrior_drops",
            entries: vec![
                entry("bone", 2, 1.0, false),
                entry("bronze_sword", 1, 0.08, true),
                entry("bronze_platebody", 1, 0.05, true),
            ],
        },
        LootTable {
            id: "cave_troll_drops",
            entries: vec![
                entry("bone", 3, 1.0, false),
                entry("gemstone", 1, 0.12, true),
                entry("iron_scimitar", 1, 0.04, true),
            ],
        },
        LootTable {
            id: "ember_drake_drops",
            entries: vec![
                entry("gemstone", 1, 0.30, false),
                entry("ember_crystal", 1, 0.25, true),
                entry("iron_platebody", 1, 0.06, true),
            ],
        },
    ]
}

/// Returns the purchasable upgrade table.
pub fn upgrades() -> Vec<UpgradeDefinition> {
    vec![
        UpgradeDefinition {
            kind: UpgradeKind::BankTabs,
            name: "Bank Tab",
            base_cost: 200,
            cost_multiplier: 2.5,
            max_level: 7,
            requires: None,
        },
        UpgradeDefinition {
            kind: UpgradeKind::BankSlots,
            name: "Bank Slots",
            base_cost: 150,
            cost_multiplier: 2.0,
            max_level: 8,
            // Expanding slots only makes sense once a second tab exists
            requires: Some((UpgradeKind::BankTabs, 1)),
        },
        UpgradeDefinition {
            kind: UpgradeKind::QueueLength,
            name: "Activity Queue",
            base_cost: 500,
            cost_multiplier: 3.0,
            max_level: 4,
            requires: None,
        },
        UpgradeDefinition {
            kind: UpgradeKind::OfflineEfficiency,
            name: "Offline Efficiency",
            base_cost: 1000,
            cost_multiplier: 4.0,
            max_level: 3,
            requires: None,
        },
        UpgradeDefinition {
            kind: UpgradeKind::AutoSell,
            name: "Auto-Sell Overflow",
            base_cost: 2500,
            cost_multiplier: 1.0,
            max_level: 1,
            requires: None,
        },
        UpgradeDefinition {
            kind: UpgradeKind::Theme,
            name: "Interface Theme",
            base_cost: 100,
            cost_multiplier: 1.5,
            max_level: 5,
            requires: None,
        },
    ]
}
