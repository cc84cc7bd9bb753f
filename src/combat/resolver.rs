//! Pure attack and loot math.
//!
//! These functions compute one attack's hit/miss/damage/critical outcome
//! and a loot table's drops from stat snapshots, without touching any
//! state. The combat engine and any balance simulator share them so both
//! see identical math.

use crate::catalog::LootTable;
use crate::core::constants::{
    ACCURACY_MAX, ACCURACY_MIN, ACCURACY_RATIO_WEIGHT, BASE_CRIT_CHANCE, CRIT_CHANCE_PER_STRENGTH,
    CRIT_MULTIPLIER, DAMAGE_VARIANCE,
};
use rand::Rng;

/// Outcome of a single attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub hit: bool,
    pub damage: u32,
    pub critical: bool,
}

impl AttackOutcome {
    fn miss() -> Self {
        Self {
            hit: false,
            damage: 0,
            critical: false,
        }
    }
}

/// One rolled drop from a loot table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootDrop {
    pub item_id: String,
    pub quantity: u32,
    pub rare: bool,
}

/// Chance to land a hit, before the dice: the base accuracy shifted by how
/// far the attack/defense ratio sits from parity, clamped to [0.10, 0.95].
pub fn hit_chance(total_attack: u32, total_defense: u32, base_accuracy: f64) -> f64 {
    let ratio = total_attack as f64 / total_defense.max(1) as f64;
    (base_accuracy + (ratio - 1.0) * ACCURACY_RATIO_WEIGHT).clamp(ACCURACY_MIN, ACCURACY_MAX)
}

/// Resolves one attack.
///
/// # Arguments
/// * `attacker_attack` / `attacker_strength` - attacker's raw attributes
/// * `weapon_attack_bonus` / `weapon_strength_bonus` - zero when unarmed
/// * `defender_defense` - defender's raw defense
/// * `armor_defense_bonus` - zero when unarmored
/// * `base_accuracy` - the weapon's accuracy, or the unarmed default
///
/// A miss deals no damage and can never crit. A hit deals at least 1
/// damage regardless of how lopsided the stats are.
#[allow(clippy::too_many_arguments)]
pub fn resolve_attack(
    attacker_attack: u32,
    attacker_strength: u32,
    weapon_attack_bonus: u32,
    weapon_strength_bonus: u32,
    defender_defense: u32,
    armor_defense_bonus: u32,
    base_accuracy: f64,
    rng: &mut impl Rng,
) -> AttackOutcome {
    let total_attack =
        attacker_attack + weapon_attack_bonus + attacker_strength + weapon_strength_bonus;
    let total_defense = defender_defense + armor_defense_bonus;

    let accuracy = hit_chance(total_attack, total_defense, base_accuracy);
    if rng.gen::<f64>() > accuracy {
        return AttackOutcome::miss();
    }

    let base_damage = (total_attack as i64 - total_defense as i64 / 2).max(1) as f64;
    let variance = rng.gen_range(-DAMAGE_VARIANCE..=DAMAGE_VARIANCE);
    let mut damage = (base_damage * (1.0 + variance)).round();

    let crit_chance = BASE_CRIT_CHANCE + attacker_strength as f64 * CRIT_CHANCE_PER_STRENGTH;
    let critical = rng.gen::<f64>() < crit_chance;
    if critical {
        damage = (damage * CRIT_MULTIPLIER).round();
    }

    AttackOutcome {
        hit: true,
        damage: damage.max(1.0) as u32,
        critical,
    }
}

/// Rolls a loot table. Every entry is rolled independently; the table is
/// not normalized, so several drops can land at once. `chance_multiplier`
/// comes from the loot sigil perk; scaled chances cap at 1.0.
pub fn roll_loot(
    table: &LootTable,
    chance_multiplier: f64,
    rng: &mut impl Rng,
) -> Vec<LootDrop> {
    table
        .entries
        .iter()
        .filter(|entry| {
            let chance = (entry.chance * chance_multiplier).min(1.0);
            rng.gen::<f64>() < chance
        })
        .map(|entry| LootDrop {
            item_id: entry.item_id.to_string(),
            quantity: entry.quantity,
            rare: entry.rare,
        })
        .collect()
}
