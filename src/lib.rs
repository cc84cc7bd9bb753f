//! Everforge: progression and combat simulation core for an idle RPG.
//!
//! This crate turns elapsed wall-clock time into skill experience,
//! inventory changes, and turn-based combat outcomes, both while the host
//! is ticking (every ~100ms) and across offline gaps of up to seven days.
//! It is a library: the host owns the scheduler, the presentation layer,
//! and the decision of when to call [`Engine::tick`] and
//! [`Engine::resume`]; the core owns the math and the state transitions.
//!
//! Only the progress/XP curve math is required to be deterministic.
//! Everything probabilistic (accuracy, damage variance, crits, loot) goes
//! through a caller-supplied `impl Rng`, so production passes
//! `rand::thread_rng()` and tests pass a seeded `rand_chacha::ChaCha8Rng`.

pub mod catalog;
pub mod combat;
pub mod core;
pub mod economy;
pub mod progression;
pub mod store;

pub use crate::core::engine::Engine;
pub use crate::core::events::GameEvent;
pub use crate::store::profile::Profile;
