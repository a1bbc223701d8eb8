//! Player cards - a player's owned copy of a base card.
//!
//! `PlayerCard` references a `BaseCard` and carries the permanent boosts
//! the player has earned for it. Effective stats are base + boost.
//!
//! ## Mutation
//!
//! Boosts only ever grow, and only through the reward path
//! (`rewards::apply_reward`). There is no public setter.

use serde::{Deserialize, Serialize};

use super::definition::{BaseCard, CardId};
use crate::core::PlayerScope;

/// Unique identifier for a player-owned card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerCardId(pub u32);

impl PlayerCardId {
    /// Create a new player card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlayerCard({})", self.0)
    }
}

/// A boostable card stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Damage,
    Health,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Damage => f.write_str("damage"),
            Stat::Health => f.write_str("health"),
        }
    }
}

/// A card owned by a player within one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerCard {
    /// Unique ID of this copy.
    pub id: PlayerCardId,

    /// The template this copy was made from.
    pub card_id: CardId,

    /// Owning player and game.
    pub owner: PlayerScope,

    damage_boost: u32,
    health_boost: u32,
}

impl PlayerCard {
    /// Create an unboosted player card.
    #[must_use]
    pub fn new(id: PlayerCardId, card_id: CardId, owner: PlayerScope) -> Self {
        Self {
            id,
            card_id,
            owner,
            damage_boost: 0,
            health_boost: 0,
        }
    }

    /// Permanent damage bonus.
    #[must_use]
    pub fn damage_boost(&self) -> u32 {
        self.damage_boost
    }

    /// Permanent health bonus.
    #[must_use]
    pub fn health_boost(&self) -> u32 {
        self.health_boost
    }

    /// Boost applied to `stat`.
    #[must_use]
    pub fn boost(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Damage => self.damage_boost,
            Stat::Health => self.health_boost,
        }
    }

    /// Base damage plus boost.
    #[must_use]
    pub fn effective_damage(&self, base: &BaseCard) -> u32 {
        base.damage.saturating_add(self.damage_boost)
    }

    /// Base health plus boost.
    #[must_use]
    pub fn effective_health(&self, base: &BaseCard) -> u32 {
        base.health.saturating_add(self.health_boost)
    }

    /// Is this card owned within `scope`?
    #[must_use]
    pub fn is_owned_by(&self, scope: PlayerScope) -> bool {
        self.owner == scope
    }

    /// Grow a boost. Only the reward path calls this.
    pub(crate) fn add_boost(&mut self, stat: Stat, amount: u32) {
        match stat {
            Stat::Damage => self.damage_boost = self.damage_boost.saturating_add(amount),
            Stat::Health => self.health_boost = self.health_boost.saturating_add(amount),
        }
    }
}
