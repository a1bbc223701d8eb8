//! Reward table - the fixed (stat, amount) each dungeon tier grants.
//!
//! The table is a closed, tier-keyed record rather than a map so that
//! every tier always has exactly one grant. Amounts are validated when
//! configuration is loaded.

use serde::{Deserialize, Serialize};

use crate::cards::Stat;
use crate::core::ConfigError;
use crate::dungeons::DungeonTier;

/// A fixed boost to one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewardGrant {
    pub stat: Stat,
    pub amount: u32,
}

impl RewardGrant {
    /// Create a grant.
    #[must_use]
    pub const fn new(stat: Stat, amount: u32) -> Self {
        Self { stat, amount }
    }
}

/// One grant per dungeon tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewardTable {
    pub simple_encounter: RewardGrant,
    pub small_dungeon: RewardGrant,
    pub large_dungeon: RewardGrant,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            simple_encounter: RewardGrant::new(Stat::Damage, 1),
            small_dungeon: RewardGrant::new(Stat::Health, 2),
            large_dungeon: RewardGrant::new(Stat::Damage, 3),
        }
    }
}

impl RewardTable {
    /// Grant for `tier`.
    #[must_use]
    pub const fn grant(&self, tier: DungeonTier) -> RewardGrant {
        match tier {
            DungeonTier::SimpleEncounter => self.simple_encounter,
            DungeonTier::SmallDungeon => self.small_dungeon,
            DungeonTier::LargeDungeon => self.large_dungeon,
        }
    }

    /// Replace the grant for `tier`.
    #[must_use]
    pub fn with_grant(mut self, tier: DungeonTier, grant: RewardGrant) -> Self {
        match tier {
            DungeonTier::SimpleEncounter => self.simple_encounter = grant,
            DungeonTier::SmallDungeon => self.small_dungeon = grant,
            DungeonTier::LargeDungeon => self.large_dungeon = grant,
        }
        self
    }

    /// Every grant must give at least one point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in DungeonTier::ALL {
            if self.grant(tier).amount == 0 {
                return Err(ConfigError::ZeroReward { tier });
            }
        }
        Ok(())
    }
}
