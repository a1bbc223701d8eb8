//! Error types for engine operations.
//!
//! Every failure is detected locally and reported synchronously. An
//! operation that returns an error has changed no state: battles are
//! persisted whole or not at all, rewards are granted at most once.

use thiserror::Error;

use super::player::PlayerScope;
use crate::cards::{CardId, PlayerCardId, Stat};
use crate::combat::BattleId;
use crate::dungeons::{DungeonId, DungeonTier};

/// Errors raised by the battle, progression, and reward entry points.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Empty or malformed deck/dungeon sequence at battle start.
    #[error("invalid battle input: {reason}")]
    InvalidBattleInput { reason: &'static str },

    /// Reward claimed against a card outside the player's scope.
    #[error("card {card} is not owned by {scope}")]
    InvalidCardSelection { card: PlayerCardId, scope: PlayerScope },

    /// Second claim against a battle whose reward was already granted.
    #[error("reward for {battle} has already been claimed")]
    RewardAlreadyClaimed { battle: BattleId },

    /// The progression gate refused the dungeon.
    #[error("{dungeon} is locked: requires {required} won battles, have {current}")]
    DungeonLocked {
        dungeon: DungeonId,
        required: u32,
        current: u32,
    },

    /// The dungeon is not present in the content store.
    #[error("unknown dungeon {0}")]
    UnknownDungeon(DungeonId),

    /// A dungeon slot or player card references a missing base card.
    #[error("unknown base card {0}")]
    UnknownCard(CardId),

    /// Authored content violates a data-model invariant.
    #[error("invalid content: {reason}")]
    InvalidContent { reason: String },

    /// The scope has no active deck to fight with.
    #[error("{0} has no active deck")]
    NoActiveDeck(PlayerScope),

    /// A deck failed validation.
    #[error("invalid deck: {reason}")]
    InvalidDeck { reason: String },

    /// No battle with this id exists for the scope.
    #[error("{0} not found")]
    BattleNotFound(BattleId),

    /// Rewards are only granted for won battles.
    #[error("{0} was not won")]
    BattleNotWon(BattleId),

    /// The chosen stat does not match the tier's fixed reward.
    #[error("{tier:?} grants {expected:?}, not {chosen:?}")]
    RewardStatMismatch {
        tier: DungeonTier,
        expected: Stat,
        chosen: Stat,
    },

    /// Persistence boundary failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Failures at the persistence boundary.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// The backing store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A record could not be serialized.
    #[error("failed to encode record: {0}")]
    Encode(String),

    /// A stored record could not be read back.
    #[error("failed to decode record: {0}")]
    Decode(String),

    /// A write collided with an existing record.
    #[error("conflicting write: {0}")]
    Conflict(String),
}

/// Errors raised while loading or validating engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{tier:?} reward amount must be at least 1")]
    ZeroReward { tier: DungeonTier },
    #[error("max deck size must be between 1 and {limit} (got {value})")]
    DeckSize { value: usize, limit: usize },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
