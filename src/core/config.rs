//! Engine configuration.
//!
//! Hosts configure the engine at startup with an `EngineConfig`:
//! - `max_deck_size`: how many cards an active deck may hold (at most 6)
//! - `rewards`: the tier → (stat, amount) reward table
//!
//! Configuration is validated when it is loaded, never at use sites.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::rewards::RewardTable;

/// Hard upper bound on deck size.
pub const MAX_DECK_SIZE: usize = 6;

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use dungeon_ccg::core::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "max_deck_size": 4 }"#).unwrap();
/// assert_eq!(config.max_deck_size, 4);
/// assert_eq!(config.rewards, EngineConfig::default().rewards);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum cards in an active deck.
    #[serde(default = "EngineConfig::default_max_deck_size")]
    pub max_deck_size: usize,

    /// Reward granted per dungeon tier.
    #[serde(default)]
    pub rewards: RewardTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_deck_size: Self::default_max_deck_size(),
            rewards: RewardTable::default(),
        }
    }
}

impl EngineConfig {
    const fn default_max_deck_size() -> usize {
        MAX_DECK_SIZE
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Check every configuration invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_deck_size == 0 || self.max_deck_size > MAX_DECK_SIZE {
            return Err(ConfigError::DeckSize {
                value: self.max_deck_size,
                limit: MAX_DECK_SIZE,
            });
        }
        self.rewards.validate()
    }

    /// Set the maximum deck size.
    #[must_use]
    pub fn with_max_deck_size(mut self, size: usize) -> Self {
        self.max_deck_size = size;
        self
    }

    /// Replace the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }
}
