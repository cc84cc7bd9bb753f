//! Integration tests for the Engine facade: one tick drives progression
//! and combat in order against the same snapshot, and play time accrues.

use everforge::catalog::{Skill, StaticCatalog};
use everforge::core::events::{Attacker, GameEvent};
use everforge::{Engine, Profile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn test_tick_runs_progression_before_combat() {
    let catalog = StaticCatalog::builtin();
    let engine = Engine::new(&catalog);
    let mut profile = Profile::new("Multitasker", 0);
    let mut rng = test_rng();

    profile.combat.attack = 200;
    profile.combat.strength = 200;
    profile.combat.max_hp = 500;
    profile.combat.hp = 500;

    engine
        .progression()
        .start_activity(&mut profile, "mine_copper", 0);
    engine.combat().start_combat(&mut profile, "giant_rat", 0);

    // At t=5000 the activity has completed and both attack cooldowns have
    // elapsed. The completion event must precede every combat event.
    let events = engine.tick(&mut profile, 5_000, &mut rng);

    let completion_index = events
        .iter()
        .position(|e| matches!(e, GameEvent::ActivityCompleted { .. }))
        .expect("activity completes in this tick");
    let first_combat_index = events
        .iter()
        .position(|e| matches!(e, GameEvent::CombatAttack { .. }))
        .expect("combat resolves in this tick");
    assert!(completion_index < first_combat_index);

    // Both subsystems touched the same profile in one pass
    assert_eq!(profile.skill(Skill::Mining).xp, 10);
    assert!(matches!(
        events[first_combat_index],
        GameEvent::CombatAttack {
            attacker: Attacker::Player,
            ..
        }
    ));
}

#[test]
fn test_tick_accrues_play_time_and_last_active() {
    let catalog = StaticCatalog::builtin();
    let engine = Engine::new(&catalog);
    let mut profile = Profile::new("Clock", 0);
    let mut rng = test_rng();

    for i in 1..=10 {
        engine.tick(&mut profile, i * 100, &mut rng);
    }

    // Ten 100ms periods = one second of play time
    assert_eq!(profile.player.play_time_ms, 1_000);
    assert_eq!(profile.player.last_active_ms, 1_000);
}

#[test]
fn test_idle_profile_ticks_are_empty_and_safe() {
    let catalog = StaticCatalog::builtin();
    let engine = Engine::new(&catalog);
    let mut profile = Profile::new("Idle", 0);
    let mut rng = test_rng();

    let events = engine.tick(&mut profile, 100, &mut rng);
    assert!(events.is_empty());
    assert!(profile.player.current_activity.is_none());
    assert!(!profile.is_in_combat());
}
