//! Sigil perks: permanent percentage modifiers bought with ethereal
//! sigils earned through ascension. They survive every reset.

use crate::core::constants::{
    LOOT_PERK_BONUS_PER_LEVEL, PERK_LEVEL_CAP, SPEED_FACTOR_FLOOR,
    SPEED_PERK_REDUCTION_PER_LEVEL, XP_PERK_BONUS_PER_LEVEL,
};
use crate::store::profile::Profile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerkKind {
    Xp,
    Speed,
    Loot,
}

/// Three independent 0..=5 level counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SigilPerks {
    pub xp: u32,
    pub speed: u32,
    pub loot: u32,
}

impl SigilPerks {
    pub fn level(&self, kind: PerkKind) -> u32 {
        match kind {
            PerkKind::Xp => self.xp,
            PerkKind::Speed => self.speed,
            PerkKind::Loot => self.loot,
        }
    }

    /// Multiplier applied to every experience award.
    pub fn xp_multiplier(&self) -> f64 {
        1.0 + XP_PERK_BONUS_PER_LEVEL * self.xp as f64
    }

    /// Factor applied to activity durations. Never drops below 0.7× base.
    pub fn speed_factor(&self) -> f64 {
        (1.0 - SPEED_PERK_REDUCTION_PER_LEVEL * self.speed as f64).max(SPEED_FACTOR_FLOOR)
    }

    /// Multiplier applied to item-reward and loot-table chances. Callers
    /// cap the scaled chance at 1.0.
    pub fn loot_chance_multiplier(&self) -> f64 {
        1.0 + LOOT_PERK_BONUS_PER_LEVEL * self.loot as f64
    }
}

/// Result of a perk purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerkPurchaseOutcome {
    Purchased { cost: u64, new_level: u32 },
    AlreadyMaxed,
    InsufficientSigils { cost: u64, available: u64 },
}

/// Buys one level of a perk. The cost in sigils is the new level itself
/// (level 1 costs 1 sigil, level 5 costs 5).
pub fn purchase_perk(profile: &mut Profile, kind: PerkKind) -> PerkPurchaseOutcome {
    let current = profile.perks.level(kind);
    if current >= PERK_LEVEL_CAP {
        return PerkPurchaseOutcome::AlreadyMaxed;
    }
    let cost = (current + 1) as u64;
    if profile.player.sigils < cost {
        return PerkPurchaseOutcome::InsufficientSigils {
            cost,
            available: profile.player.sigils,
        };
    }
    profile.player.sigils -= cost;
    let slot = match kind {
        PerkKind::Xp => &mut profile.perks.xp,
        PerkKind::Speed => &mut profile.perks.speed,
        PerkKind::Loot => &mut profile.perks.loot,
    };
    *slot += 1;
    PerkPurchaseOutcome::Purchased {
        cost,
        new_level: *slot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_at_zero_are_identity() {
        let perks = SigilPerks::default();
        assert_eq!(perks.xp_multiplier(), 1.0);
        assert_eq!(perks.speed_factor(), 1.0);
        assert_eq!(perks.loot_chance_multiplier(), 1.0);
    }

    #[test]
    fn test_speed_factor_floors_at_seventy_percent() {
        let perks = SigilPerks {
            speed: 5,
            ..Default::default()
        };
        assert_eq!(perks.speed_factor(), 0.7);
        // Even an out-of-band level cannot push below the floor
        let perks = SigilPerks {
            speed: 50,
            ..Default::default()
        };
        assert_eq!(perks.speed_factor(), 0.7);
    }

    #[test]
    fn test_perk_purchase_costs_scale_with_level() {
        let mut profile = Profile::new("Perks", 0);
        profile.player.sigils = 3;

        assert_eq!(
            purchase_perk(&mut profile, PerkKind::Xp),
            PerkPurchaseOutcome::Purchased { cost: 1, new_level: 1 }
        );
        assert_eq!(
            purchase_perk(&mut profile, PerkKind::Xp),
            PerkPurchaseOutcome::Purchased { cost: 2, new_level: 2 }
        );
        // 3 sigils spent; the next level costs 3
        assert_eq!(
            purchase_perk(&mut profile, PerkKind::Xp),
            PerkPurchaseOutcome::InsufficientSigils { cost: 3, available: 0 }
        );
    }

    #[test]
    fn test_perk_purchase_respects_cap() {
        let mut profile = Profile::new("Perks", 0);
        profile.player.sigils = 100;
        for _ in 0..5 {
            assert!(matches!(
                purchase_perk(&mut profile, PerkKind::Loot),
                PerkPurchaseOutcome::Purchased { .. }
            ));
        }
        assert_eq!(
            purchase_perk(&mut profile, PerkKind::Loot),
            PerkPurchaseOutcome::AlreadyMaxed
        );
        assert_eq!(profile.perks.loot, 5);
    }
}
