//! Offline window calculator.
//!
//! Converts a "last active" timestamp and the current time into a capped,
//! rate-scaled effective-progress duration. Invoked once per app-resume,
//! not per tick, and idempotent given the same two timestamps and rate.

use super::constants::{MAX_OFFLINE_MS, OFFLINE_RATES};

/// Result of the offline window calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OfflineProgress {
    /// Raw elapsed time since last activity, never negative.
    pub total_offline_ms: i64,
    /// Elapsed time after the 7-day ceiling.
    pub capped_offline_ms: i64,
    /// Capped time scaled by the offline efficiency rate.
    pub effective_progress_ms: i64,
    /// True when the raw elapsed time exceeded the ceiling.
    pub was_capped: bool,
}

/// Computes the effective offline progress for an elapsed interval.
///
/// A clock that moved backwards (negative elapsed) produces a zeroed
/// result rather than an error; the host treats it as "no offline time".
pub fn calculate_offline_progress(
    last_active_ms: i64,
    now_ms: i64,
    offline_rate: f64,
) -> OfflineProgress {
    let total_offline_ms = (now_ms - last_active_ms).max(0);
    let capped_offline_ms = total_offline_ms.min(MAX_OFFLINE_MS);
    let effective_progress_ms = (capped_offline_ms as f64 * offline_rate).round() as i64;

    OfflineProgress {
        total_offline_ms,
        capped_offline_ms,
        effective_progress_ms,
        was_capped: total_offline_ms > MAX_OFFLINE_MS,
    }
}

/// Offline efficiency rate for a purchased tier, clamped to the ladder.
pub fn offline_rate_for_tier(tier: u32) -> f64 {
    let index = (tier as usize).min(OFFLINE_RATES.len() - 1);
    OFFLINE_RATES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_minutes_at_base_rate() {
        let progress = calculate_offline_progress(0, 600_000, 0.33);
        assert_eq!(progress.total_offline_ms, 600_000);
        assert_eq!(progress.effective_progress_ms, 198_000);
        assert!(!progress.was_capped);
    }

    #[test]
    fn test_eight_days_caps_at_seven() {
        let eight_days = 8 * 24 * 3600 * 1000;
        let progress = calculate_offline_progress(0, eight_days, 0.5);
        assert_eq!(progress.total_offline_ms, eight_days);
        assert_eq!(progress.capped_offline_ms, MAX_OFFLINE_MS);
        assert!(progress.was_capped);
        assert_eq!(
            progress.effective_progress_ms,
            (MAX_OFFLINE_MS as f64 * 0.5) as i64
        );
    }

    #[test]
    fn test_negative_elapsed_clamps_to_zero() {
        let progress = calculate_offline_progress(1_000, 500, 0.6);
        assert_eq!(progress, OfflineProgress::default());
    }

    #[test]
    fn test_idempotent_for_equal_inputs() {
        let a = calculate_offline_progress(1_000, 3_601_000, 0.4);
        let b = calculate_offline_progress(1_000, 3_601_000, 0.4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rate_ladder() {
        assert_eq!(offline_rate_for_tier(0), 0.33);
        assert_eq!(offline_rate_for_tier(1), 0.40);
        assert_eq!(offline_rate_for_tier(2), 0.50);
        assert_eq!(offline_rate_for_tier(3), 0.60);
        // Out-of-range tiers clamp to the top of the ladder
        assert_eq!(offline_rate_for_tier(99), 0.60);
    }
}
