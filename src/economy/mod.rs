//! The economy layer: gold-gated upgrades, sigil perks, and ascension.
//!
//! Everything here is pure validation + application against the profile.
//! The progression and combat engines read this layer's output (capacity,
//! rates, multipliers) as configuration but are never mutated by it.

pub mod ascension;
pub mod perks;
pub mod upgrades;

pub use perks::{PerkKind, SigilPerks};
pub use upgrades::{purchase, PurchaseOutcome};
