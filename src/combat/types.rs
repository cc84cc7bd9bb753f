//! Combat state snapshots persisted with the profile.

use crate::core::constants::{COMBAT_LEVEL_CAP, DEFAULT_AUTO_EAT_THRESHOLD};
use crate::core::experience;
use serde::{Deserialize, Serialize};

/// Which food auto-eat reaches for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodChoice {
    /// Always eat this item id.
    Fixed(String),
    /// Walk the food priority list and eat the first item in the bank.
    BestAvailable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoEatConfig {
    pub enabled: bool,
    pub food: FoodChoice,
    /// Eat when `hp / max_hp` falls to or below this fraction.
    pub threshold: f64,
}

impl Default for AutoEatConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            food: FoodChoice::BestAvailable,
            threshold: DEFAULT_AUTO_EAT_THRESHOLD,
        }
    }
}

/// The player's combat attributes and equipment.
///
/// `magic`, `ranged` and `luck` are carried for save compatibility and the
/// combat-level blend but take no part in attack resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub strength: u32,
    pub defense: u32,
    pub magic: u32,
    pub ranged: u32,
    pub luck: u32,
    pub combat_xp: u64,
    pub equipped_weapon: Option<String>,
    pub equipped_armor: Option<String>,
    pub auto_eat: AutoEatConfig,
    /// Set while an encounter is active.
    pub combat_started_ms: Option<i64>,
    pub last_player_attack_ms: i64,
}

impl CombatStats {
    pub fn new() -> Self {
        Self {
            hp: 40,
            max_hp: 40,
            attack: 1,
            strength: 1,
            defense: 1,
            magic: 1,
            ranged: 1,
            luck: 1,
            combat_xp: 0,
            equipped_weapon: None,
            equipped_armor: None,
            auto_eat: AutoEatConfig::default(),
            combat_started_ms: None,
            last_player_attack_ms: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heals up to `max_hp`, returning the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::new()
    }
}

/// The live, mutable counterpart of an `EnemyDefinition` for the single
/// active encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyInstance {
    pub enemy_id: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub next_attack_ms: i64,
    pub started_ms: i64,
}

impl EnemyInstance {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

/// Derives the single progression-gating combat level, capped at 600.
///
/// A blend of the attack/strength/defense attributes and the XP-curve
/// level of cumulative combat experience: their average, plus weighted
/// per-attribute bonuses (attack and strength weigh double defense).
pub fn combat_level(stats: &CombatStats) -> u32 {
    let xp_level = experience::level_for(stats.combat_xp);
    let base = (stats.attack + stats.strength + stats.defense + xp_level) / 4;
    let weighted = stats.attack / 4 + stats.strength / 4 + stats.defense / 8;
    (base + weighted).clamp(1, COMBAT_LEVEL_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_stats_are_combat_level_one() {
        assert_eq!(combat_level(&CombatStats::new()), 1);
    }

    #[test]
    fn test_combat_level_grows_with_attributes() {
        let mut stats = CombatStats::new();
        stats.attack = 40;
        stats.strength = 40;
        stats.defense = 40;
        let low = combat_level(&stats);
        stats.attack = 80;
        assert!(combat_level(&stats) > low);
    }

    #[test]
    fn test_combat_level_grows_with_xp() {
        let mut stats = CombatStats::new();
        stats.attack = 20;
        stats.strength = 20;
        stats.defense = 20;
        let before = combat_level(&stats);
        stats.combat_xp = 1_000_000;
        assert!(combat_level(&stats) > before);
    }

    #[test]
    fn test_combat_level_caps_at_600() {
        let mut stats = CombatStats::new();
        stats.attack = 10_000;
        stats.strength = 10_000;
        stats.defense = 10_000;
        stats.combat_xp = u64::MAX;
        assert_eq!(combat_level(&stats), 600);
    }

    #[test]
    fn test_heal_clamps_to_max_and_reports_restored() {
        let mut stats = CombatStats::new();
        stats.hp = 30;
        assert_eq!(stats.heal(45), 10);
        assert_eq!(stats.hp, stats.max_hp);
    }

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut stats = CombatStats::new();
        stats.take_damage(9999);
        assert_eq!(stats.hp, 0);
        assert!(!stats.is_alive());
    }
}
