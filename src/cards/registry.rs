//! Card registry for base card lookup.
//!
//! The `CardRegistry` stores the authored base cards. It provides lookup
//! by `CardId` and builds combat snapshots of player cards.

use rustc_hash::FxHashMap;

use super::definition::{BaseCard, CardId};
use super::element::CardType;
use super::instance::PlayerCard;
use crate::combat::CombatCard;
use crate::core::{EngineError, EngineResult};

/// Registry of base cards.
///
/// ## Example
///
/// ```
/// use dungeon_ccg::cards::{BaseCard, CardId, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(BaseCard::new(CardId::new(1), "Ember Fox", 4, 3, CardType::Fire))
///     .unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Ember Fox");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, BaseCard>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base card.
    ///
    /// Fails if the card breaks a stat floor or its ID is taken.
    pub fn register(&mut self, card: BaseCard) -> EngineResult<()> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::InvalidContent {
                reason: format!("{} already registered", card.id),
            });
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a base card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&BaseCard> {
        self.cards.get(&id)
    }

    /// Get a base card by ID or report it missing.
    pub fn require(&self, id: CardId) -> EngineResult<&BaseCard> {
        self.get(id).ok_or(EngineError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all base cards.
    pub fn iter(&self) -> impl Iterator<Item = &BaseCard> {
        self.cards.values()
    }

    /// Find cards by elemental type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &BaseCard> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }

    /// Snapshot a player card's effective stats for combat.
    pub fn combat_card(&self, card: &PlayerCard) -> EngineResult<CombatCard> {
        let base = self.require(card.card_id)?;
        Ok(CombatCard::new(
            base.id,
            card.effective_damage(base),
            card.effective_health(base),
            base.card_type,
        ))
    }
}
