//! The host-facing facade: one live tick, one resume.
//!
//! A fixed-period scheduler calls [`Engine::tick`] every ~100ms while the
//! application is foregrounded. On resume, [`Engine::resume`] fast-forwards
//! the progression engine through the offline window before live ticking
//! restarts. The host must not accept new user actions until it returns,
//! or the same wall-clock interval could be credited twice.

use crate::catalog::Catalog;
use crate::combat::engine::CombatEngine;
use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::events::GameEvent;
use crate::core::offline::{calculate_offline_progress, offline_rate_for_tier};
use crate::progression::{OfflineReport, ProgressionEngine};
use crate::store::profile::Profile;
use rand::Rng;

pub struct Engine<'c, C: Catalog> {
    progression: ProgressionEngine<'c, C>,
    combat: CombatEngine<'c, C>,
}

impl<'c, C: Catalog> Engine<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self {
            progression: ProgressionEngine::new(catalog),
            combat: CombatEngine::new(catalog),
        }
    }

    /// The progression engine, for `start_activity` and friends.
    pub fn progression(&self) -> &ProgressionEngine<'c, C> {
        &self.progression
    }

    /// The combat engine, for `start_combat`, equip and flee.
    pub fn combat(&self) -> &CombatEngine<'c, C> {
        &self.combat
    }

    /// Runs one scheduler period: progression first, then combat, both
    /// against the same consistent snapshot. Returns the tick's events in
    /// chronological order.
    pub fn tick(&self, profile: &mut Profile, now_ms: i64, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = self.progression.tick(profile, now_ms, rng);
        events.extend(self.combat.tick(profile, now_ms, rng));

        profile.player.play_time_ms = profile
            .player
            .play_time_ms
            .saturating_add(TICK_INTERVAL_MS as u64);
        profile.player.last_active_ms = now_ms;
        events
    }

    /// Fast-forwards through the offline window, once per app-resume.
    ///
    /// Idempotent against double invocation: the first call moves
    /// `last_active_ms` up to `now_ms`, so a second call sees no elapsed
    /// time and applies nothing.
    pub fn resume(&self, profile: &mut Profile, now_ms: i64, rng: &mut impl Rng) -> OfflineReport {
        let rate = offline_rate_for_tier(profile.upgrades.offline_tier);
        let offline = calculate_offline_progress(profile.player.last_active_ms, now_ms, rate);
        let report = self
            .progression
            .apply_offline_progress(profile, &offline, now_ms, rng);
        profile.player.last_active_ms = now_ms;
        report
    }
}
