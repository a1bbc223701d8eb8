//! Base cards - immutable card templates.
//!
//! `BaseCard` holds the authored properties of a card: name, base damage,
//! base health, and elemental type. Content authoring creates these; the
//! engine only reads them.
//!
//! Player-specific data (boosts) lives separately in `PlayerCard`.

use serde::{Deserialize, Serialize};

use super::element::CardType;
use crate::core::{EngineError, EngineResult};

/// Smallest legal base damage.
pub const MIN_BASE_DAMAGE: u32 = 2;

/// Smallest legal base health.
pub const MIN_BASE_HEALTH: u32 = 1;

/// Unique identifier for a base card.
///
/// This identifies the template (e.g., "Ember Fox"), not a copy owned
/// by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Immutable card template.
///
/// ## Example
///
/// ```
/// use dungeon_ccg::cards::{BaseCard, CardId, CardType};
///
/// let fox = BaseCard::new(CardId::new(1), "Ember Fox", 4, 3, CardType::Fire);
/// assert!(fox.validate().is_ok());
/// assert_eq!(fox.damage, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCard {
    /// Unique identifier for this template.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Base damage (at least 2).
    pub damage: u32,

    /// Base health (at least 1).
    pub health: u32,

    /// Elemental type.
    pub card_type: CardType,
}

impl BaseCard {
    /// Create a new base card.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        damage: u32,
        health: u32,
        card_type: CardType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
            health,
            card_type,
        }
    }

    /// Check the authored stat floors.
    pub fn validate(&self) -> EngineResult<()> {
        if self.damage < MIN_BASE_DAMAGE {
            return Err(EngineError::InvalidContent {
                reason: format!(
                    "{} '{}' has base damage {} (minimum {})",
                    self.id, self.name, self.damage, MIN_BASE_DAMAGE
                ),
            });
        }
        if self.health < MIN_BASE_HEALTH {
            return Err(EngineError::InvalidContent {
                reason: format!(
                    "{} '{}' has base health {} (minimum {})",
                    self.id, self.name, self.health, MIN_BASE_HEALTH
                ),
            });
        }
        Ok(())
    }
}
