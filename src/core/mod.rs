//! Core simulation math and orchestration.

pub mod constants;
pub mod engine;
pub mod events;
pub mod experience;
pub mod offline;

/// Current wall-clock time in epoch milliseconds.
///
/// Host-boundary helper. Engine entry points never call this themselves;
/// the host samples the clock once per tick and passes it down, which keeps
/// every code path testable with synthetic timestamps.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
