//! Player statistics: streaks, per-type records, damage, timing.

pub mod aggregator;
pub mod counters;

pub use aggregator::PlayerStats;
pub use counters::{ReasonCounts, TierCounts, TypeCounts};
