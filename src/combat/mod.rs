//! Combat: clash resolution, battle sequencing, classification, playback.
//!
//! ## Flow
//!
//! 1. `run_battle` pairs deck and dungeon by position and calls
//!    `resolve_clash` once per pair, in order.
//! 2. `Battle::conclude` attaches the log and classifies the tally.
//! 3. `BattlePlayback` replays the immutable log for presentation.

pub mod battle;
pub mod clash;
pub mod outcome;
pub mod playback;

pub use battle::{run_battle, Battle, BattleId, BattleLog, RewardClaim};
pub use clash::{resolve_clash, Clash, ClashOutcome, CombatCard, Side, WinReason};
pub use outcome::{classify, BattleStatus, Tally};
pub use playback::{BattlePlayback, PlaybackStep};
