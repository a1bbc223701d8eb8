//! Dungeon card slots.
//!
//! A slot is one position in a dungeon's fixed card sequence. It holds
//! either a plain world card or a leader: a world card with exactly one
//! base stat doubled.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRegistry, Stat};
use crate::combat::CombatCard;
use crate::core::EngineResult;

/// One position in a dungeon's card sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DungeonCardSlot {
    /// A world card fought at its base stats.
    Card { card: CardId },
    /// A world card with one stat doubled.
    Leader { card: CardId, doubled: Stat },
}

impl DungeonCardSlot {
    /// Plain world card slot.
    #[must_use]
    pub const fn card(card: CardId) -> Self {
        Self::Card { card }
    }

    /// Leader slot with `doubled` doubled.
    #[must_use]
    pub const fn leader(card: CardId, doubled: Stat) -> Self {
        Self::Leader { card, doubled }
    }

    /// The referenced world card.
    #[must_use]
    pub const fn card_id(&self) -> CardId {
        match self {
            Self::Card { card } | Self::Leader { card, .. } => *card,
        }
    }

    /// Is this a leader slot?
    #[must_use]
    pub const fn is_leader(&self) -> bool {
        matches!(self, Self::Leader { .. })
    }

    /// Effective combat stats for this slot.
    pub fn resolve(&self, registry: &CardRegistry) -> EngineResult<CombatCard> {
        let base = registry.require(self.card_id())?;
        let (damage, health) = match self {
            Self::Card { .. } => (base.damage, base.health),
            Self::Leader { doubled: Stat::Damage, .. } => {
                (base.damage.saturating_mul(2), base.health)
            }
            Self::Leader { doubled: Stat::Health, .. } => {
                (base.damage, base.health.saturating_mul(2))
            }
        };
        Ok(CombatCard::new(base.id, damage, health, base.card_type))
    }
}
