//! The persisted player aggregate.
//!
//! One `Profile` is the complete single-writer state the engines operate
//! on: identity, skills, the activity slot, combat stats, bank, gold,
//! upgrades and perks. The host loads it once, borrows it mutably for
//! each tick, and saves it on its own schedule.

use crate::catalog::Skill;
use crate::combat::types::{CombatStats, EnemyInstance};
use crate::core::constants::{
    BANK_SLOTS_PER_UPGRADE, BASE_BANK_SLOTS_PER_TAB, BASE_BANK_TABS, BASE_QUEUE_LENGTH,
};
use crate::core::experience;
use crate::economy::perks::SigilPerks;
use crate::store::bank::Bank;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The single running activity. Its existence is the Running state of the
/// progression slot; `None` on the player means Idle. Keeping skill, id
/// and start time in one struct makes the "all set or none set" invariant
/// structural.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveActivity {
    pub skill: Skill,
    pub activity_id: String,
    pub started_ms: i64,
    /// Cached progress fraction in [0, 1], refreshed by the live tick.
    pub progress: f64,
}

/// Per-skill progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillState {
    pub level: u32,
    pub xp: u64,
    pub prestige_count: u32,
    pub unlocked: bool,
}

impl SkillState {
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            prestige_count: 0,
            unlocked: true,
        }
    }

    /// Adds experience and recomputes the level, preserving the invariant
    /// `level == level_for(xp)`. Returns true when the level rose.
    pub fn award_xp(&mut self, gain: u64) -> bool {
        self.xp = self.xp.saturating_add(gain);
        let new_level = experience::level_for(self.xp);
        let leveled = new_level > self.level;
        self.level = new_level;
        leveled
    }
}

impl Default for SkillState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: String,
    pub name: String,
    pub play_time_ms: u64,
    pub ascension_count: u32,
    /// Ethereal sigils, the meta-currency earned through ascension.
    pub sigils: u64,
    pub last_active_ms: i64,
    pub current_activity: Option<ActiveActivity>,
}

/// Purchased upgrade levels and flags, read by the engines as
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeState {
    pub bank_tab_level: u32,
    pub bank_slot_level: u32,
    pub queue_level: u32,
    pub offline_tier: u32,
    pub auto_sell: bool,
    pub theme_id: u32,
}

impl UpgradeState {
    pub fn bank_tabs(&self) -> u32 {
        BASE_BANK_TABS + self.bank_tab_level
    }

    pub fn slots_per_tab(&self) -> u32 {
        BASE_BANK_SLOTS_PER_TAB + BANK_SLOTS_PER_UPGRADE * self.bank_slot_level
    }

    pub fn queue_length(&self) -> u32 {
        BASE_QUEUE_LENGTH + self.queue_level
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub player: PlayerState,
    pub skills: BTreeMap<Skill, SkillState>,
    pub combat: CombatStats,
    /// The single active encounter; `None` means not in combat.
    pub current_enemy: Option<EnemyInstance>,
    pub bank: Bank,
    pub gold: u64,
    pub upgrades: UpgradeState,
    pub perks: SigilPerks,
}

impl Profile {
    /// Creates a fresh profile. `now_ms` seeds the last-active timestamp
    /// so the first resume sees no offline gap.
    pub fn new(name: &str, now_ms: i64) -> Self {
        let skills = Skill::all()
            .into_iter()
            .map(|skill| (skill, SkillState::new()))
            .collect();

        Self {
            player: PlayerState {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                play_time_ms: 0,
                ascension_count: 0,
                sigils: 0,
                last_active_ms: now_ms,
                current_activity: None,
            },
            skills,
            combat: CombatStats::new(),
            current_enemy: None,
            bank: Bank::new(),
            gold: 0,
            upgrades: UpgradeState::default(),
            perks: SigilPerks::default(),
        }
    }

    /// Read access to a skill; missing entries read as a fresh skill.
    pub fn skill(&self, skill: Skill) -> SkillState {
        self.skills.get(&skill).cloned().unwrap_or_default()
    }

    pub fn skill_mut(&mut self, skill: Skill) -> &mut SkillState {
        self.skills.entry(skill).or_default()
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Debits gold only when the full amount is available.
    pub fn spend_gold(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn is_in_combat(&self) -> bool {
        self.current_enemy.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_has_all_skills_at_level_one() {
        let profile = Profile::new("Fresh", 0);
        for skill in Skill::all() {
            let state = profile.skill(skill);
            assert_eq!(state.level, 1);
            assert_eq!(state.xp, 0);
            assert!(state.unlocked);
        }
        assert!(profile.player.current_activity.is_none());
        assert!(!profile.is_in_combat());
    }

    #[test]
    fn test_award_xp_maintains_level_invariant() {
        let mut state = SkillState::new();
        assert!(!state.award_xp(149));
        assert_eq!(state.level, 1);
        assert!(state.award_xp(1));
        assert_eq!(state.level, 2);
        assert_eq!(state.level, experience::level_for(state.xp));
    }

    #[test]
    fn test_spend_gold_blocks_overdraft() {
        let mut profile = Profile::new("Gold", 0);
        profile.add_gold(100);
        assert!(!profile.spend_gold(150));
        assert_eq!(profile.gold, 100);
        assert!(profile.spend_gold(100));
        assert_eq!(profile.gold, 0);
    }

    #[test]
    fn test_upgrade_state_capacity_math() {
        let mut upgrades = UpgradeState::default();
        assert_eq!(upgrades.bank_tabs(), 1);
        assert_eq!(upgrades.slots_per_tab(), 12);
        assert_eq!(upgrades.queue_length(), 1);
        upgrades.bank_tab_level = 2;
        upgrades.bank_slot_level = 1;
        assert_eq!(upgrades.bank_tabs(), 3);
        assert_eq!(upgrades.slots_per_tab(), 16);
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let mut profile = Profile::new("Roundtrip", 42);
        profile.skill_mut(Skill::Mining).award_xp(500);
        profile.add_gold(77);
        let json = serde_json::to_string(&profile).expect("serialize");
        let back: Profile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.player.name, "Roundtrip");
        assert_eq!(back.skill(Skill::Mining).xp, 500);
        assert_eq!(back.gold, 77);
    }
}
