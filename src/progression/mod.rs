//! Progression: which dungeons a player may attempt.

pub mod gate;

pub use gate::{DungeonAccess, LockStatus, ProgressionGate};
