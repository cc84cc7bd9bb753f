//! The activity slot state machine.
//!
//! One player-global slot moves between Idle and Running. The live tick
//! converts elapsed time into at most one completion and re-arms nothing
//! (a finished activity returns to Idle); offline catch-up replays whole
//! completions sequentially through the same reward path, then re-arms the
//! remainder so live ticking resumes seamlessly.

use crate::catalog::{ActivityDefinition, Catalog};
use crate::core::constants::{BONUS_GOLD_CHANCE, BONUS_GOLD_PER_LEVEL};
use crate::core::events::GameEvent;
use crate::core::experience;
use crate::core::offline::OfflineProgress;
use crate::store::profile::{ActiveActivity, Profile};
use rand::Rng;
use tracing::{debug, warn};

/// Result of a `start_activity` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    UnknownActivity,
    SkillLocked,
    LevelTooLow { skill: crate::catalog::Skill, required: u32 },
    MissingMaterials,
}

/// Aggregated result of one offline catch-up run.
#[derive(Debug, Clone, Default)]
pub struct OfflineReport {
    pub completions: u64,
    pub xp_gained: u64,
    /// Item totals across all completions, in first-rolled order.
    pub items: Vec<(String, u32)>,
    pub bonus_gold: u64,
    pub was_capped: bool,
    pub total_offline_ms: i64,
    pub effective_progress_ms: i64,
}

/// What one completion produced. Internal: the live tick maps it to an
/// event, offline catch-up folds it into the report.
struct CompletionSummary {
    xp_gained: u64,
    items: Vec<(String, u32)>,
    bonus_gold: u64,
    leveled_up: bool,
}

pub struct ProgressionEngine<'c, C: Catalog> {
    catalog: &'c C,
}

impl<'c, C: Catalog> ProgressionEngine<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self { catalog }
    }

    /// Starts an activity, implicitly stopping any prior one.
    ///
    /// Rejections leave the profile untouched: unknown id, locked skill,
    /// unmet level prerequisites, or item costs that cannot be deducted in
    /// full. Costs are all-or-nothing at start time.
    pub fn start_activity(
        &self,
        profile: &mut Profile,
        activity_id: &str,
        now_ms: i64,
    ) -> StartOutcome {
        let Some(activity) = self.catalog.activity(activity_id) else {
            return StartOutcome::UnknownActivity;
        };

        if !profile.skill(activity.skill).unlocked {
            return StartOutcome::SkillLocked;
        }

        for (skill, required) in &activity.level_requirements {
            if profile.skill(*skill).level < *required {
                return StartOutcome::LevelTooLow {
                    skill: *skill,
                    required: *required,
                };
            }
        }

        let costs: Vec<(String, u32)> = activity
            .costs
            .iter()
            .map(|cost| (cost.item_id.to_string(), cost.quantity))
            .collect();
        if !profile.bank.remove_all(&costs) {
            return StartOutcome::MissingMaterials;
        }

        profile.player.current_activity = Some(ActiveActivity {
            skill: activity.skill,
            activity_id: activity.id.to_string(),
            started_ms: now_ms,
            progress: 0.0,
        });
        debug!(activity = activity.id, "activity started");
        StartOutcome::Started
    }

    /// Stops the running activity without credit beyond already-banked
    /// completions.
    pub fn stop_activity(&self, profile: &mut Profile) {
        profile.player.current_activity = None;
    }

    /// Advances the running activity by wall-clock time.
    ///
    /// Emits `ActivityProgress` until the cycle completes, then awards the
    /// completion and returns the slot to Idle; a fresh `start_activity`
    /// is required to go again.
    pub fn tick(&self, profile: &mut Profile, now_ms: i64, rng: &mut impl Rng) -> Vec<GameEvent> {
        let Some(active) = profile.player.current_activity.clone() else {
            return Vec::new();
        };
        let Some(activity) = self.catalog.activity(&active.activity_id).cloned() else {
            // Stale save data: the activity vanished from the catalog
            warn!(activity = %active.activity_id, "active activity missing from catalog, going idle");
            profile.player.current_activity = None;
            return Vec::new();
        };

        let duration = self.effective_duration_ms(&activity, profile);
        let elapsed = now_ms - active.started_ms;
        let progress = (elapsed as f64 / duration as f64).clamp(0.0, 1.0);

        if progress < 1.0 {
            if let Some(active) = profile.player.current_activity.as_mut() {
                active.progress = progress;
            }
            return vec![GameEvent::ActivityProgress { fraction: progress }];
        }

        let summary = self.complete_activity(profile, &activity, rng);
        profile.player.current_activity = None;
        vec![GameEvent::ActivityCompleted {
            activity_id: activity.id.to_string(),
            skill: activity.skill,
            xp_gained: summary.xp_gained,
            items: summary.items,
            bonus_gold: summary.bonus_gold,
            leveled_up: summary.leveled_up,
        }]
    }

    /// Replays the offline window through the running activity.
    ///
    /// Applies `floor(effective / duration)` whole completions in
    /// sequence, each with independent XP and loot rolls exactly like
    /// live ticks, then rewrites the start timestamp to `now - remainder`
    /// so the partial cycle continues live. A no-op when idle.
    pub fn apply_offline_progress(
        &self,
        profile: &mut Profile,
        offline: &OfflineProgress,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> OfflineReport {
        let mut report = OfflineReport {
            was_capped: offline.was_capped,
            total_offline_ms: offline.total_offline_ms,
            effective_progress_ms: offline.effective_progress_ms,
            ..OfflineReport::default()
        };

        let Some(active) = profile.player.current_activity.clone() else {
            return report;
        };
        let Some(activity) = self.catalog.activity(&active.activity_id).cloned() else {
            warn!(activity = %active.activity_id, "active activity missing from catalog, going idle");
            profile.player.current_activity = None;
            return report;
        };

        let duration = self.effective_duration_ms(&activity, profile);
        let completions = (offline.effective_progress_ms / duration).max(0) as u64;
        let remainder = offline.effective_progress_ms % duration;

        for _ in 0..completions {
            let summary = self.complete_activity(profile, &activity, rng);
            report.completions += 1;
            report.xp_gained += summary.xp_gained;
            report.bonus_gold += summary.bonus_gold;
            for (item_id, quantity) in summary.items {
                match report.items.iter_mut().find(|(id, _)| *id == item_id) {
                    Some((_, total)) => *total += quantity,
                    None => report.items.push((item_id, quantity)),
                }
            }
        }

        profile.player.current_activity = Some(ActiveActivity {
            skill: activity.skill,
            activity_id: activity.id.to_string(),
            started_ms: now_ms - remainder,
            progress: remainder as f64 / duration as f64,
        });

        debug!(
            activity = activity.id,
            completions = report.completions,
            remainder_ms = remainder,
            capped = report.was_capped,
            "offline catch-up applied"
        );
        report
    }

    /// Base duration scaled by the speed sigil perk, never below 70% of
    /// base and never below one millisecond.
    fn effective_duration_ms(&self, activity: &ActivityDefinition, profile: &Profile) -> i64 {
        let scaled = activity.base_duration_ms as f64 * profile.perks.speed_factor();
        (scaled.round() as i64).max(1)
    }

    /// Applies one completion: XP through the modifier stack, independent
    /// item-reward rolls with bank placement, and the flat bonus-gold roll.
    fn complete_activity(
        &self,
        profile: &mut Profile,
        activity: &ActivityDefinition,
        rng: &mut impl Rng,
    ) -> CompletionSummary {
        let skill_state = profile.skill(activity.skill);
        let xp_gained = experience::modified_xp_gain(
            activity.xp_reward,
            skill_state.level,
            skill_state.prestige_count,
            profile.perks.xp,
        );
        let leveled_up = profile.skill_mut(activity.skill).award_xp(xp_gained);

        let loot_multiplier = profile.perks.loot_chance_multiplier();
        let mut items = Vec::new();
        for reward in &activity.rewards {
            let chance = (reward.chance * loot_multiplier).min(1.0);
            if rng.gen::<f64>() < chance {
                self.deposit_or_sell(profile, reward.item_id, reward.quantity);
                items.push((reward.item_id.to_string(), reward.quantity));
            }
        }

        let mut bonus_gold = 0;
        if rng.gen::<f64>() < BONUS_GOLD_CHANCE {
            bonus_gold = profile.skill(activity.skill).level as u64 * BONUS_GOLD_PER_LEVEL;
            profile.add_gold(bonus_gold);
        }

        debug!(
            activity = activity.id,
            xp = xp_gained,
            items = items.len(),
            "activity completed"
        );

        CompletionSummary {
            xp_gained,
            items,
            bonus_gold,
            leveled_up,
        }
    }

    /// Same placement policy as combat loot: stack or first empty slot,
    /// auto-sell overflow when purchased, otherwise the item is lost.
    fn deposit_or_sell(&self, profile: &mut Profile, item_id: &str, quantity: u32) {
        let tabs = profile.upgrades.bank_tabs();
        let slots = profile.upgrades.slots_per_tab();
        if profile
            .bank
            .try_deposit(item_id, quantity, tabs, slots)
            .is_some()
        {
            return;
        }
        if profile.upgrades.auto_sell {
            let value = self
                .catalog
                .item(item_id)
                .map_or(0, |item| item.sell_value)
                * quantity as u64;
            profile.add_gold(value);
        } else {
            warn!(item = item_id, "bank full, reward lost");
        }
    }
}
