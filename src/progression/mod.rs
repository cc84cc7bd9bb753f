//! Activity progression: the live tick and offline catch-up.

pub mod engine;

pub use engine::{OfflineReport, ProgressionEngine, StartOutcome};
