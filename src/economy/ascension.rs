//! Ascension: the full progression reset that converts maxed skills into
//! ethereal sigils.
//!
//! Sigils and perks survive; everything else returns to a fresh start.
//! Each skill at the level cap contributes one sigil and gains a prestige
//! rank, which permanently raises its future XP gains.

use crate::catalog::Skill;
use crate::combat::types::CombatStats;
use crate::core::constants::LEVEL_CAP;
use crate::store::bank::Bank;
use crate::store::profile::{Profile, UpgradeState};
use tracing::info;

/// What an ascension produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AscensionReport {
    pub sigils_earned: u64,
    pub skills_reset: u32,
}

/// True when every skill sits at the level cap.
pub fn can_ascend(profile: &Profile) -> bool {
    Skill::all()
        .into_iter()
        .all(|skill| profile.skill(skill).level >= LEVEL_CAP)
}

/// Performs the ascension reset. Returns `None` (and changes nothing)
/// unless every skill is at the cap.
pub fn ascend(profile: &mut Profile) -> Option<AscensionReport> {
    if !can_ascend(profile) {
        return None;
    }

    let mut sigils_earned = 0u64;
    let mut skills_reset = 0u32;
    for skill in Skill::all() {
        let state = profile.skill_mut(skill);
        if state.level >= LEVEL_CAP {
            sigils_earned += 1;
            state.prestige_count += 1;
        }
        state.level = 1;
        state.xp = 0;
        skills_reset += 1;
    }

    // Full-system wipe: activity, combat, inventory, gold and upgrades all
    // return to defaults. Sigils and perks are the point of the exercise.
    profile.player.current_activity = None;
    profile.current_enemy = None;
    profile.combat = CombatStats::new();
    profile.bank = Bank::new();
    profile.gold = 0;
    profile.upgrades = UpgradeState::default();

    profile.player.sigils += sigils_earned;
    profile.player.ascension_count += 1;

    info!(
        sigils = sigils_earned,
        ascensions = profile.player.ascension_count,
        "ascension complete"
    );
    Some(AscensionReport {
        sigils_earned,
        skills_reset,
    })
}
