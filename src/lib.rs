//! # dungeon-ccg
//!
//! Deterministic battle resolution and progression for a dungeon-crawling
//! card game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Combat**: A clash depends only on the two cards'
//!    snapshotted stats and types. No randomness anywhere.
//!
//! 2. **Immutable Records**: A finished battle is a complete clash log.
//!    Playback reads it; nothing rewrites it.
//!
//! 3. **Explicit Collaborators**: Storage and time are injected into
//!    `GameEngine`. There is no global client.
//!
//! ## Architecture
//!
//! - **Clash rules**: damage kill first, then the elemental cycle
//!   (FIRE > EARTH > WATER > AIR > FIRE), then the dungeon by default.
//!
//! - **Progression**: The first dungeon of each environment is always open;
//!   later ones unlock on cumulative won battles.
//!
//! - **Rewards**: Each tier grants one fixed stat boost, claimed at most
//!   once per won battle.
//!
//! ## Modules
//!
//! - `core`: Player/game scoping, configuration, errors
//! - `cards`: Card types, base cards, player cards, decks
//! - `dungeons`: Dungeon content and tiers
//! - `combat`: Clash resolver, battle sequencer, outcome classifier, playback
//! - `progression`: Unlock gate
//! - `rewards`: Reward table and applier
//! - `stats`: Statistics aggregator
//! - `store`: Persistence traits and the in-memory store
//! - `engine`: `GameEngine` service and clocks

pub mod core;
pub mod cards;
pub mod dungeons;
pub mod combat;
pub mod progression;
pub mod rewards;
pub mod stats;
pub mod store;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, EngineResult, ConfigError, StoreError,
    GameId, PlayerId, PlayerScope,
};

pub use crate::cards::{
    BaseCard, CardId, CardRegistry, CardType, Deck, PlayerCard, PlayerCardId, Stat,
};

pub use crate::dungeons::{
    Dungeon, DungeonCardSlot, DungeonId, DungeonRegistry, DungeonTier, EnvironmentId,
};

pub use crate::combat::{
    resolve_clash, run_battle, classify,
    Battle, BattleId, BattlePlayback, BattleStatus, Clash, CombatCard, Side, Tally, WinReason,
};

pub use crate::progression::{DungeonAccess, LockStatus, ProgressionGate};

pub use crate::rewards::{apply_reward, RewardGrant, RewardTable};

pub use crate::stats::PlayerStats;

pub use crate::store::{
    BattleStore, CollectionStore, ContentStore, MemoryStore, StatsStore, Storage,
};

pub use crate::engine::{Clock, GameEngine, ManualClock, SystemClock};
