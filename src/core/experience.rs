//! Experience curve shared by every progression system.
//!
//! The curve is quadratic-incremental: advancing past level `L` costs
//! `L² × 100 + L × 50` experience, and a level's threshold is the sum of
//! all cheaper levels' costs. Level 1 is the floor (threshold 0) and the
//! cap is 100; experience past the cap still accumulates but never levels.

use super::constants::{
    LEVEL_CAP, XP_BONUS_PER_LEVEL, XP_BONUS_PER_PRESTIGE, XP_COST_LINEAR, XP_COST_QUADRATIC,
    XP_PERK_BONUS_PER_LEVEL,
};

/// Incremental cost of advancing past `level` (i.e. from `level` to `level + 1`).
fn incremental_cost(level: u32) -> u64 {
    let l = level as u64;
    l * l * XP_COST_QUADRATIC + l * XP_COST_LINEAR
}

/// Cumulative experience required to reach `level`.
///
/// `xp_threshold_for(1) == 0`, `xp_threshold_for(2) == 150`. Strictly
/// increasing over levels 2..=100.
pub fn xp_threshold_for(level: u32) -> u64 {
    (1..level.min(LEVEL_CAP)).map(incremental_cost).sum()
}

/// The level reached with `xp` cumulative experience, clamped to [1, 100].
pub fn level_for(xp: u64) -> u32 {
    let mut level = 1;
    let mut threshold = 0u64;
    for l in 1..LEVEL_CAP {
        threshold += incremental_cost(l);
        if xp >= threshold {
            level = l + 1;
        } else {
            break;
        }
    }
    level
}

/// Fraction of the current level band covered by `xp`, in [0, 1].
///
/// Returns 1.0 at the level cap, where no further band exists.
pub fn progress_fraction(xp: u64) -> f64 {
    let level = level_for(xp);
    if level >= LEVEL_CAP {
        return 1.0;
    }
    let floor = xp_threshold_for(level);
    let ceiling = xp_threshold_for(level + 1);
    ((xp - floor) as f64 / (ceiling - floor) as f64).clamp(0.0, 1.0)
}

/// Applies the experience-gain modifier stack to a base award.
///
/// `gain = base × (1 + 0.01×(level−1)) × (1 + 0.05×prestige) × (1 + 0.02×perk)`,
/// truncated to an integer once at the end, never per factor.
pub fn modified_xp_gain(base_xp: u64, level: u32, prestige_count: u32, xp_perk_level: u32) -> u64 {
    let level_mult = 1.0 + XP_BONUS_PER_LEVEL * (level.saturating_sub(1)) as f64;
    let prestige_mult = 1.0 + XP_BONUS_PER_PRESTIGE * prestige_count as f64;
    let perk_mult = 1.0 + XP_PERK_BONUS_PER_LEVEL * xp_perk_level as f64;
    (base_xp as f64 * level_mult * prestige_mult * perk_mult) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_at_the_bottom() {
        assert_eq!(xp_threshold_for(1), 0);
        assert_eq!(xp_threshold_for(2), 150);
        // 150 + (4*100 + 2*50)
        assert_eq!(xp_threshold_for(3), 650);
    }

    #[test]
    fn test_thresholds_strictly_increase() {
        for level in 2..=LEVEL_CAP {
            assert!(
                xp_threshold_for(level) > xp_threshold_for(level - 1),
                "threshold must strictly increase at level {}",
                level
            );
        }
    }

    #[test]
    fn test_level_for_band_edges() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(149), 1);
        assert_eq!(level_for(150), 2);
        assert_eq!(level_for(649), 2);
        assert_eq!(level_for(650), 3);
    }

    #[test]
    fn test_level_never_exceeds_cap() {
        assert_eq!(level_for(u64::MAX), LEVEL_CAP);
        assert_eq!(level_for(xp_threshold_for(LEVEL_CAP)), LEVEL_CAP);
        assert_eq!(level_for(xp_threshold_for(LEVEL_CAP) * 10), LEVEL_CAP);
    }

    #[test]
    fn test_level_for_inverts_threshold() {
        for level in 1..=LEVEL_CAP {
            assert!(
                level_for(xp_threshold_for(level)) >= level,
                "level_for(threshold({})) fell below {}",
                level,
                level
            );
        }
    }

    #[test]
    fn test_progress_fraction_bounds() {
        assert_eq!(progress_fraction(0), 0.0);
        assert_eq!(progress_fraction(xp_threshold_for(2)), 0.0);
        assert!((progress_fraction(75) - 0.5).abs() < 1e-9);
        assert_eq!(progress_fraction(xp_threshold_for(LEVEL_CAP)), 1.0);
    }

    #[test]
    fn test_modified_xp_gain_base_case() {
        // Level 1, no prestige, no perk: all multipliers are 1.0
        assert_eq!(modified_xp_gain(10, 1, 0, 0), 10);
    }

    #[test]
    fn test_modified_xp_gain_stacks_multiplicatively() {
        // 100 × 1.10 × 1.10 × 1.04 = 125.84 → truncated to 125
        assert_eq!(modified_xp_gain(100, 11, 2, 2), 125);
    }

    #[test]
    fn test_modified_xp_gain_truncates_once() {
        // 10 × 1.09 = 10.9 → 10, not a per-factor round-up to 11
        assert_eq!(modified_xp_gain(10, 10, 0, 0), 10);
    }
}
