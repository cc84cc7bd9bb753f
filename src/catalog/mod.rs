//! Static content catalogs: skills, activities, items, enemies, loot
//! tables, upgrades.
//!
//! Definitions are immutable for the process lifetime. The engines never
//! reach for a global catalog; they receive a [`Catalog`] implementation
//! at construction so tests can swap in fixtures.

pub mod data;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A trainable skill. Gathering and crafting activities each belong to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Mining,
    Woodcutting,
    Fishing,
    Smithing,
    Cooking,
}

impl Skill {
    pub fn all() -> [Skill; 5] {
        [
            Skill::Mining,
            Skill::Woodcutting,
            Skill::Fishing,
            Skill::Smithing,
            Skill::Cooking,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Mining => "Mining",
            Skill::Woodcutting => "Woodcutting",
            Skill::Fishing => "Fishing",
            Skill::Smithing => "Smithing",
            Skill::Cooking => "Cooking",
        }
    }
}

/// A probabilistic item reward on an activity.
#[derive(Debug, Clone)]
pub struct ItemReward {
    pub item_id: &'static str,
    pub quantity: u32,
    /// Chance in [0, 1] rolled independently per completion.
    pub chance: f64,
}

/// An item cost consumed atomically when an activity starts.
#[derive(Debug, Clone)]
pub struct ItemCost {
    pub item_id: &'static str,
    pub quantity: u32,
}

/// A timed gathering or crafting action tied to one skill.
#[derive(Debug, Clone)]
pub struct ActivityDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub skill: Skill,
    pub base_duration_ms: i64,
    pub xp_reward: u64,
    pub rewards: Vec<ItemReward>,
    pub costs: Vec<ItemCost>,
    /// Minimum skill levels required to start, e.g. `(Mining, 10)`.
    pub level_requirements: Vec<(Skill, u32)>,
}

/// A bestiary entry. Stats are snapshots; the live encounter state lives
/// in `EnemyInstance`.
#[derive(Debug, Clone)]
pub struct EnemyDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub level: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub strength: u32,
    pub defense: u32,
    pub attack_speed_ms: i64,
    pub accuracy: f64,
    pub xp_reward: u64,
    pub required_combat_level: u32,
    pub loot_table: &'static str,
}

/// One independently-rolled entry of a loot table.
#[derive(Debug, Clone)]
pub struct LootTableEntry {
    pub item_id: &'static str,
    pub quantity: u32,
    pub chance: f64,
    pub rare: bool,
}

#[derive(Debug, Clone)]
pub struct LootTable {
    pub id: &'static str,
    pub entries: Vec<LootTableEntry>,
}

/// Offensive bonuses carried by an equippable weapon.
#[derive(Debug, Clone, Copy)]
pub struct WeaponStats {
    pub attack_bonus: u32,
    pub strength_bonus: u32,
    pub accuracy: f64,
    pub speed_ms: i64,
}

/// Defensive bonus carried by an equippable armor piece.
#[derive(Debug, Clone, Copy)]
pub struct ArmorStats {
    pub defense_bonus: u32,
}

#[derive(Debug, Clone)]
pub struct ItemDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub sell_value: u64,
    /// HP restored when eaten during combat; None for inedible items.
    pub healing: Option<u32>,
    pub weapon: Option<WeaponStats>,
    pub armor: Option<ArmorStats>,
}

/// A permanent-rate-affecting purchase gated by gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    BankTabs,
    BankSlots,
    QueueLength,
    OfflineEfficiency,
    AutoSell,
    Theme,
}

#[derive(Debug, Clone)]
pub struct UpgradeDefinition {
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub base_cost: u64,
    pub cost_multiplier: f64,
    pub max_level: u32,
    /// Another upgrade that must reach the given level first.
    pub requires: Option<(UpgradeKind, u32)>,
}

/// Read-only catalog lookups, dependency-injected into the engines.
pub trait Catalog {
    fn activity(&self, id: &str) -> Option<&ActivityDefinition>;
    fn enemy(&self, id: &str) -> Option<&EnemyDefinition>;
    fn item(&self, id: &str) -> Option<&ItemDefinition>;
    fn loot_table(&self, id: &str) -> Option<&LootTable>;
    fn upgrade(&self, kind: UpgradeKind) -> Option<&UpgradeDefinition>;
}

/// The built-in content set, indexed once at construction.
pub struct StaticCatalog {
    activities: HashMap<&'static str, ActivityDefinition>,
    enemies: HashMap<&'static str, EnemyDefinition>,
    items: HashMap<&'static str, ItemDefinition>,
    loot_tables: HashMap<&'static str, LootTable>,
    upgrades: HashMap<UpgradeKind, UpgradeDefinition>,
}

impl StaticCatalog {
    /// Builds the catalog from the built-in content tables in [`data`].
    pub fn builtin() -> Self {
        Self {
            activities: data::activities()
                .into_iter()
                .map(|a| (a.id, a))
                .collect(),
            enemies: data::enemies().into_iter().map(|e| (e.id, e)).collect(),
            items: data::items().into_iter().map(|i| (i.id, i)).collect(),
            loot_tables: data::loot_tables().into_iter().map(|t| (t.id, t)).collect(),
            upgrades: data::upgrades().into_iter().map(|u| (u.kind, u)).collect(),
        }
    }
}

impl Catalog for StaticCatalog {
    fn activity(&self, id: &str) -> Option<&ActivityDefinition> {
        self.activities.get(id)
    }

    fn enemy(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(id)
    }

    fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    fn loot_table(&self, id: &str) -> Option<&LootTable> {
        self.loot_tables.get(id)
    }

    fn upgrade(&self, kind: UpgradeKind) -> Option<&UpgradeDefinition> {
        self.upgrades.get(&kind)
    }
}
