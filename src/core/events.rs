//! Events produced by the engines for the presentation layer.
//!
//! The core never consumes its own events: it returns them from each
//! tick and the host maps them to log lines, effects, or notifications.

use crate::catalog::Skill;
use crate::combat::resolver::LootDrop;

/// Which side of an encounter landed (or attempted) an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attacker {
    Player,
    Enemy,
}

/// A single event produced by a tick or resume.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The running activity advanced but did not complete.
    ActivityProgress { fraction: f64 },

    /// The running activity completed one cycle and returned to idle.
    ActivityCompleted {
        activity_id: String,
        skill: Skill,
        xp_gained: u64,
        /// Items that rolled successfully, before bank placement.
        items: Vec<(String, u32)>,
        bonus_gold: u64,
        leveled_up: bool,
    },

    /// One attack was resolved in the active encounter.
    CombatAttack {
        attacker: Attacker,
        damage: u32,
        hit: bool,
        critical: bool,
        /// Defender's HP after the attack.
        remaining_hp: u32,
    },

    /// Auto-eat consumed one unit of food.
    CombatAutoEat { food_id: String, hp_restored: u32 },

    /// The enemy fell; the encounter is over.
    CombatVictory {
        drops: Vec<LootDrop>,
        xp_gained: u64,
        gold_earned: u64,
        leveled_up: bool,
    },

    /// The player fell; safe respawn, no permanent penalty.
    CombatDefeat,
}
