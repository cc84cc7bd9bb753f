//! The encounter state machine.
//!
//! Owns the turn loop for the single active encounter: independent
//! attack-speed cooldowns for player and enemy, the auto-eat trigger,
//! victory/defeat resolution, and loot/gold distribution. All combat math
//! is delegated to [`crate::combat::resolver`].

use crate::catalog::{Catalog, EnemyDefinition};
use crate::combat::resolver::{resolve_attack, roll_loot};
use crate::combat::types::{combat_level, EnemyInstance, FoodChoice};
use crate::core::constants::{
    DEFAULT_ATTACK_SPEED_MS, DEFAULT_FOOD_HEAL, DEFAULT_WEAPON_ACCURACY, FOOD_PRIORITY,
    GOLD_PER_ENEMY_LEVEL, VICTORY_GOLD_JITTER,
};
use crate::core::events::{Attacker, GameEvent};
use crate::core::experience;
use crate::store::profile::Profile;
use rand::Rng;
use tracing::{debug, warn};

/// Result of a `start_combat` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCombatOutcome {
    Started,
    UnknownEnemy,
    CombatLevelTooLow { required: u32, current: u32 },
}

/// Result of an equip attempt. Unequipping (passing `None`) always
/// succeeds and reports `Equipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome {
    Equipped,
    UnknownItem,
    NotOwned,
    WrongSlot,
}

/// Offensive numbers the player brings to an attack.
struct PlayerOffense {
    attack_bonus: u32,
    strength_bonus: u32,
    accuracy: f64,
    speed_ms: i64,
}

pub struct CombatEngine<'c, C: Catalog> {
    catalog: &'c C,
}

impl<'c, C: Catalog> CombatEngine<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self { catalog }
    }

    /// Starts an encounter against the given enemy.
    ///
    /// Rejected when the enemy is unknown or the player's derived combat
    /// level is below the enemy's requirement. Starting while already in
    /// combat replaces the prior encounter (flee-and-engage).
    pub fn start_combat(
        &self,
        profile: &mut Profile,
        enemy_id: &str,
        now_ms: i64,
    ) -> StartCombatOutcome {
        let Some(enemy) = self.catalog.enemy(enemy_id) else {
            return StartCombatOutcome::UnknownEnemy;
        };

        let current = combat_level(&profile.combat);
        if current < enemy.required_combat_level {
            return StartCombatOutcome::CombatLevelTooLow {
                required: enemy.required_combat_level,
                current,
            };
        }

        profile.current_enemy = Some(EnemyInstance {
            enemy_id: enemy.id.to_string(),
            current_hp: enemy.max_hp,
            max_hp: enemy.max_hp,
            next_attack_ms: now_ms + enemy.attack_speed_ms,
            started_ms: now_ms,
        });
        profile.combat.combat_started_ms = Some(now_ms);
        profile.combat.last_player_attack_ms = now_ms;
        debug!(enemy = enemy.id, "combat started");
        StartCombatOutcome::Started
    }

    /// Flees the encounter: unconditional, no rewards, no penalties.
    pub fn end_combat(&self, profile: &mut Profile) {
        profile.current_enemy = None;
        profile.combat.combat_started_ms = None;
    }

    /// Resolves one scheduler period of the active encounter.
    ///
    /// Order within the tick is fixed: auto-eat, then the player's attack,
    /// then the enemy's. When both cooldowns have elapsed the player
    /// resolves first, so a lethal player hit ends the encounter before
    /// the enemy swings. The tie-break deliberately favors the player.
    pub fn tick(&self, profile: &mut Profile, now_ms: i64, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let Some(mut enemy_inst) = profile.current_enemy.take() else {
            return events;
        };
        let Some(enemy) = self.catalog.enemy(&enemy_inst.enemy_id).cloned() else {
            // Stale save data: the enemy no longer exists in the catalog.
            // Treat the player as not in combat rather than failing the tick.
            warn!(enemy = %enemy_inst.enemy_id, "active enemy missing from catalog, leaving combat");
            profile.combat.combat_started_ms = None;
            return events;
        };

        // ── a. Auto-eat ─────────────────────────────────────────
        self.try_auto_eat(profile, &mut events);

        // ── b. Player attack ────────────────────────────────────
        let offense = self.player_offense(profile);
        if now_ms - profile.combat.last_player_attack_ms >= offense.speed_ms {
            profile.combat.last_player_attack_ms = now_ms;
            let outcome = resolve_attack(
                profile.combat.attack,
                profile.combat.strength,
                offense.attack_bonus,
                offense.strength_bonus,
                enemy.defense,
                0,
                offense.accuracy,
                rng,
            );
            if outcome.hit {
                enemy_inst.take_damage(outcome.damage);
            }
            events.push(GameEvent::CombatAttack {
                attacker: Attacker::Player,
                damage: outcome.damage,
                hit: outcome.hit,
                critical: outcome.critical,
                remaining_hp: enemy_inst.current_hp,
            });

            if !enemy_inst.is_alive() {
                self.resolve_victory(profile, &enemy, rng, &mut events);
                return events;
            }
        }

        // ── c. Enemy attack ─────────────────────────────────────
        if now_ms >= enemy_inst.next_attack_ms {
            enemy_inst.next_attack_ms = now_ms + enemy.attack_speed_ms;
            let armor_bonus = self.armor_defense(profile);
            let outcome = resolve_attack(
                enemy.attack,
                enemy.strength,
                0,
                0,
                profile.combat.defense,
                armor_bonus,
                enemy.accuracy,
                rng,
            );
            if outcome.hit {
                profile.combat.take_damage(outcome.damage);
            }
            events.push(GameEvent::CombatAttack {
                attacker: Attacker::Enemy,
                damage: outcome.damage,
                hit: outcome.hit,
                critical: outcome.critical,
                remaining_hp: profile.combat.hp,
            });

            if !profile.combat.is_alive() {
                self.resolve_defeat(profile, &mut events);
                return events;
            }
        }

        profile.current_enemy = Some(enemy_inst);
        events
    }

    /// Equips a weapon, or unequips with `None`.
    pub fn equip_weapon(&self, profile: &mut Profile, item_id: Option<&str>) -> EquipOutcome {
        match self.validate_equip(profile, item_id, |item| item.weapon.is_some()) {
            Ok(slot_value) => {
                profile.combat.equipped_weapon = slot_value;
                EquipOutcome::Equipped
            }
            Err(outcome) => outcome,
        }
    }

    /// Equips an armor piece, or unequips with `None`.
    pub fn equip_armor(&self, profile: &mut Profile, item_id: Option<&str>) -> EquipOutcome {
        match self.validate_equip(profile, item_id, |item| item.armor.is_some()) {
            Ok(slot_value) => {
                profile.combat.equipped_armor = slot_value;
                EquipOutcome::Equipped
            }
            Err(outcome) => outcome,
        }
    }

    fn validate_equip(
        &self,
        profile: &Profile,
        item_id: Option<&str>,
        fits_slot: impl Fn(&crate::catalog::ItemDefinition) -> bool,
    ) -> Result<Option<String>, EquipOutcome> {
        let Some(id) = item_id else {
            return Ok(None);
        };
        let Some(item) = self.catalog.item(id) else {
            return Err(EquipOutcome::UnknownItem);
        };
        if !fits_slot(item) {
            return Err(EquipOutcome::WrongSlot);
        }
        if !profile.bank.has(id, 1) {
            return Err(EquipOutcome::NotOwned);
        }
        Ok(Some(id.to_string()))
    }

    /// The player's weapon numbers, tolerating stale equipment ids: an
    /// equipped item missing from the catalog behaves as bare hands.
    fn player_offense(&self, profile: &Profile) -> PlayerOffense {
        let weapon = profile
            .combat
            .equipped_weapon
            .as_deref()
            .and_then(|id| self.catalog.item(id))
            .and_then(|item| item.weapon);

        match weapon {
            Some(stats) => PlayerOffense {
                attack_bonus: stats.attack_bonus,
                strength_bonus: stats.strength_bonus,
                accuracy: stats.accuracy,
                speed_ms: stats.speed_ms,
            },
            None => PlayerOffense {
                attack_bonus: 0,
                strength_bonus: 0,
                accuracy: DEFAULT_WEAPON_ACCURACY,
                speed_ms: DEFAULT_ATTACK_SPEED_MS,
            },
        }
    }

    fn armor_defense(&self, profile: &Profile) -> u32 {
        profile
            .combat
            .equipped_armor
            .as_deref()
            .and_then(|id| self.catalog.item(id))
            .and_then(|item| item.armor)
            .map_or(0, |armor| armor.defense_bonus)
    }

    fn try_auto_eat(&self, profile: &mut Profile, events: &mut Vec<GameEvent>) {
        let config = profile.combat.auto_eat.clone();
        if !config.enabled || profile.combat.max_hp == 0 {
            return;
        }
        let fraction = profile.combat.hp as f64 / profile.combat.max_hp as f64;
        if fraction > config.threshold {
            return;
        }

        let food_id = match &config.food {
            FoodChoice::Fixed(id) => profile.bank.has(id, 1).then(|| id.clone()),
            FoodChoice::BestAvailable => FOOD_PRIORITY
                .iter()
                .find(|id| profile.bank.has(id, 1))
                .map(|id| id.to_string()),
        };
        let Some(food_id) = food_id else {
            return;
        };

        let heal_amount = self
            .catalog
            .item(&food_id)
            .and_then(|item| item.healing)
            .unwrap_or(DEFAULT_FOOD_HEAL);

        profile.bank.remove(&food_id, 1);
        let hp_restored = profile.combat.heal(heal_amount);
        events.push(GameEvent::CombatAutoEat {
            food_id,
            hp_restored,
        });
    }

    fn resolve_victory(
        &self,
        profile: &mut Profile,
        enemy: &EnemyDefinition,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) {
        // Loot first, so drops land before the host sees the victory event
        let drops = match self.catalog.loot_table(enemy.loot_table) {
            Some(table) => roll_loot(table, profile.perks.loot_chance_multiplier(), rng),
            None => {
                warn!(table = enemy.loot_table, "enemy loot table missing from catalog");
                Vec::new()
            }
        };
        for drop in &drops {
            self.deposit_or_sell(profile, &drop.item_id, drop.quantity);
        }

        let level_before = combat_level(&profile.combat);
        let xp_gained = experience::modified_xp_gain(
            enemy.xp_reward,
            experience::level_for(profile.combat.combat_xp),
            0,
            profile.perks.xp,
        );
        profile.combat.combat_xp = profile.combat.combat_xp.saturating_add(xp_gained);
        let leveled_up = combat_level(&profile.combat) > level_before;

        let gold_earned = enemy.required_combat_level.max(1) as u64 * GOLD_PER_ENEMY_LEVEL
            + rng.gen_range(0..=VICTORY_GOLD_JITTER);
        profile.add_gold(gold_earned);

        profile.current_enemy = None;
        profile.combat.combat_started_ms = None;
        debug!(
            enemy = enemy.id,
            xp = xp_gained,
            gold = gold_earned,
            drops = drops.len(),
            "combat victory"
        );

        events.push(GameEvent::CombatVictory {
            drops,
            xp_gained,
            gold_earned,
            leveled_up,
        });
    }

    fn resolve_defeat(&self, profile: &mut Profile, events: &mut Vec<GameEvent>) {
        // Safe respawn: losing costs the time spent, nothing else
        profile.current_enemy = None;
        profile.combat.combat_started_ms = None;
        profile.combat.restore_full();
        debug!("combat defeat, safe respawn");
        events.push(GameEvent::CombatDefeat);
    }

    /// Bank placement shared with the progression engine's policy: stack
    /// or first empty slot; on a full bank auto-sell when purchased,
    /// otherwise the item is lost.
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
            warn!(item = item_id, "bank full, drop lost");
        }
    }
}
