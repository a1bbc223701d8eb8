//! Core engine types: scoping identifiers, configuration, errors.
//!
//! This module holds what every other module leans on. Nothing here
//! knows about clash rules or progression.

pub mod config;
pub mod error;
pub mod player;

pub use config::{EngineConfig, MAX_DECK_SIZE};
pub use error::{ConfigError, EngineError, EngineResult, StoreError};
pub use player::{GameId, PlayerId, PlayerScope};
