//! Property tests for the experience curve invariants.

use everforge::core::experience::{level_for, progress_fraction, xp_threshold_for};
use proptest::prelude::*;

proptest! {
    #[test]
    fn level_for_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(level_for(lo) <= level_for(hi));
    }

    #[test]
    fn level_stays_in_range(xp in 0u64..u64::MAX) {
        let level = level_for(xp);
        prop_assert!((1..=100).contains(&level));
    }

    #[test]
    fn threshold_round_trips_through_level_for(level in 1u32..=100) {
        prop_assert!(level_for(xp_threshold_for(level)) >= level);
        // One XP short of a threshold never reaches the level
        if level > 1 {
            prop_assert!(level_for(xp_threshold_for(level) - 1) < level);
        }
    }

    #[test]
    fn progress_fraction_stays_in_unit_interval(xp in 0u64..10_000_000) {
        let fraction = progress_fraction(xp);
        prop_assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn xp_within_a_band_does_not_change_level(level in 1u32..100) {
        let floor = xp_threshold_for(level);
        let ceiling = xp_threshold_for(level + 1);
        let midpoint = floor + (ceiling - floor) / 2;
        prop_assert_eq!(level_for(midpoint), level);
    }
}

#[test]
fn thresholds_match_the_specified_curve() {
    // Per-level incremental cost is level² × 100 + level × 50
    assert_eq!(xp_threshold_for(1), 0);
    assert_eq!(xp_threshold_for(2), 150);
    let mut expected = 0u64;
    for level in 1..100u64 {
        expected += level * level * 100 + level * 50;
        assert_eq!(xp_threshold_for(level as u32 + 1), expected);
    }
}
