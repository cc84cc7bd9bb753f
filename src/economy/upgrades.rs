//! Gold-gated permanent upgrades.
//!
//! Validation and application only: a purchase debits gold and bumps one
//! counter or flag on the upgrade state. The engines read the resulting
//! capacities and rates; nothing here touches activity or combat state.

use crate::catalog::{Catalog, UpgradeKind};
use crate::store::profile::Profile;
use tracing::debug;

/// Result of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { cost: u64, new_level: u32 },
    UnknownUpgrade,
    AlreadyMaxed,
    PrerequisiteNotMet { required: (UpgradeKind, u32) },
    InsufficientGold { cost: u64, available: u64 },
}

/// Cost of the next level: `base × multiplier^current_level`, rounded.
pub fn upgrade_cost(base_cost: u64, cost_multiplier: f64, current_level: u32) -> u64 {
    (base_cost as f64 * cost_multiplier.powi(current_level as i32)).round() as u64
}

/// Current purchased level of an upgrade on the profile.
pub fn upgrade_level(profile: &Profile, kind: UpgradeKind) -> u32 {
    match kind {
        UpgradeKind::BankTabs => profile.upgrades.bank_tab_level,
        UpgradeKind::BankSlots => profile.upgrades.bank_slot_level,
        UpgradeKind::QueueLength => profile.upgrades.queue_level,
        UpgradeKind::OfflineEfficiency => profile.upgrades.offline_tier,
        UpgradeKind::AutoSell => profile.upgrades.auto_sell as u32,
        UpgradeKind::Theme => profile.upgrades.theme_id,
    }
}

fn apply_level(profile: &mut Profile, kind: UpgradeKind, new_level: u32) {
    match kind {
        UpgradeKind::BankTabs => profile.upgrades.bank_tab_level = new_level,
        UpgradeKind::BankSlots => profile.upgrades.bank_slot_level = new_level,
        UpgradeKind::QueueLength => profile.upgrades.queue_level = new_level,
        UpgradeKind::OfflineEfficiency => profile.upgrades.offline_tier = new_level,
        UpgradeKind::AutoSell => profile.upgrades.auto_sell = new_level > 0,
        UpgradeKind::Theme => profile.upgrades.theme_id = new_level,
    }
}

/// Buys the next level of an upgrade, atomically: the gold debit and the
/// counter mutation happen together or not at all.
pub fn purchase(
    profile: &mut Profile,
    catalog: &impl Catalog,
    kind: UpgradeKind,
) -> PurchaseOutcome {
    let Some(def) = catalog.upgrade(kind) else {
        return PurchaseOutcome::UnknownUpgrade;
    };

    let current = upgrade_level(profile, kind);
    if current >= def.max_level {
        return PurchaseOutcome::AlreadyMaxed;
    }

    if let Some((required_kind, required_level)) = def.requires {
        if upgrade_level(profile, required_kind) < required_level {
            return PurchaseOutcome::PrerequisiteNotMet {
                required: (required_kind, required_level),
            };
        }
    }

    let cost = upgrade_cost(def.base_cost, def.cost_multiplier, current);
    if !profile.spend_gold(cost) {
        return PurchaseOutcome::InsufficientGold {
            cost,
            available: profile.gold,
        };
    }

    let new_level = current + 1;
    apply_level(profile, kind, new_level);
    debug!(upgrade = def.name, level = new_level, cost, "upgrade purchased");
    PurchaseOutcome::Purchased { cost, new_level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn test_upgrade_cost_scales_geometrically() {
        assert_eq!(upgrade_cost(200, 2.5, 0), 200);
        assert_eq!(upgrade_cost(200, 2.5, 1), 500);
        assert_eq!(upgrade_cost(200, 2.5, 2), 1250);
    }

    #[test]
    fn test_purchase_rejects_when_broke() {
        let catalog = StaticCatalog::builtin();
        let mut profile = Profile::new("Broke", 0);
        let outcome = purchase(&mut profile, &catalog, UpgradeKind::BankTabs);
        assert_eq!(
            outcome,
            PurchaseOutcome::InsufficientGold { cost: 200, available: 0 }
        );
        assert_eq!(profile.upgrades.bank_tab_level, 0);
    }

    #[test]
    fn test_purchase_debits_and_bumps() {
        let catalog = StaticCatalog::builtin();
        let mut profile = Profile::new("Buyer", 0);
        profile.add_gold(1_000);

        let outcome = purchase(&mut profile, &catalog, UpgradeKind::BankTabs);
        assert_eq!(outcome, PurchaseOutcome::Purchased { cost: 200, new_level: 1 });
        assert_eq!(profile.gold, 800);
        assert_eq!(profile.upgrades.bank_tabs(), 2);

        // Second tab costs 200 × 2.5
        let outcome = purchase(&mut profile, &catalog, UpgradeKind::BankTabs);
        assert_eq!(outcome, PurchaseOutcome::Purchased { cost: 500, new_level: 2 });
        assert_eq!(profile.gold, 300);
    }

    #[test]
    fn test_bank_slots_require_a_second_tab() {
        let catalog = StaticCatalog::builtin();
        let mut profile = Profile::new("Slots", 0);
        profile.add_gold(10_000);

        let outcome = purchase(&mut profile, &catalog, UpgradeKind::BankSlots);
        assert_eq!(
            outcome,
            PurchaseOutcome::PrerequisiteNotMet {
                required: (UpgradeKind::BankTabs, 1)
            }
        );

        purchase(&mut profile, &catalog, UpgradeKind::BankTabs);
        assert!(matches!(
            purchase(&mut profile, &catalog, UpgradeKind::BankSlots),
            PurchaseOutcome::Purchased { .. }
        ));
        assert_eq!(profile.upgrades.slots_per_tab(), 16);
    }

    #[test]
    fn test_auto_sell_is_a_one_shot_flag() {
        let catalog = StaticCatalog::builtin();
        let mut profile = Profile::new("Seller", 0);
        profile.add_gold(10_000);

        assert!(matches!(
            purchase(&mut profile, &catalog, UpgradeKind::AutoSell),
            PurchaseOutcome::Purchased { .. }
        ));
        assert!(profile.upgrades.auto_sell);
        assert_eq!(
            purchase(&mut profile, &catalog, UpgradeKind::AutoSell),
            PurchaseOutcome::AlreadyMaxed
        );
    }

    #[test]
    fn test_offline_efficiency_feeds_the_rate_ladder() {
        use crate::core::offline::offline_rate_for_tier;

        let catalog = StaticCatalog::builtin();
        let mut profile = Profile::new("Tiers", 0);
        profile.add_gold(1_000_000);

        assert_eq!(offline_rate_for_tier(profile.upgrades.offline_tier), 0.33);
        purchase(&mut profile, &catalog, UpgradeKind::OfflineEfficiency);
        assert_eq!(offline_rate_for_tier(profile.upgrades.offline_tier), 0.40);
        purchase(&mut profile, &catalog, UpgradeKind::OfflineEfficiency);
        purchase(&mut profile, &catalog, UpgradeKind::OfflineEfficiency);
        assert_eq!(offline_rate_for_tier(profile.upgrades.offline_tier), 0.60);
        assert_eq!(
            purchase(&mut profile, &catalog, UpgradeKind::OfflineEfficiency),
            PurchaseOutcome::AlreadyMaxed
        );
    }
}
