//! Decks - the ordered attack sequence a player brings to a battle.
//!
//! A deck is a short, non-empty, duplicate-free list of player card IDs.
//! Order matters: index 0 fights the dungeon's first card, and so on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::instance::PlayerCardId;
use crate::core::{EngineError, EngineResult, PlayerScope, MAX_DECK_SIZE};

/// An ordered deck of up to six player cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// The player and game the deck belongs to.
    pub owner: PlayerScope,

    cards: SmallVec<[PlayerCardId; MAX_DECK_SIZE]>,
}

impl Deck {
    /// Build a deck, checking size and uniqueness.
    ///
    /// Ownership of the individual cards is checked by the engine, which
    /// has access to the collection.
    ///
    /// ```
    /// use dungeon_ccg::cards::{Deck, PlayerCardId};
    /// use dungeon_ccg::core::{GameId, PlayerId, PlayerScope};
    ///
    /// let owner = PlayerScope::new(PlayerId::new(1), GameId::new(1));
    /// let deck = Deck::new(owner, [PlayerCardId::new(3), PlayerCardId::new(1)], 6).unwrap();
    /// assert_eq!(deck.cards(), &[PlayerCardId::new(3), PlayerCardId::new(1)]);
    /// ```
    pub fn new(
        owner: PlayerScope,
        cards: impl IntoIterator<Item = PlayerCardId>,
        max_size: usize,
    ) -> EngineResult<Self> {
        let cards: SmallVec<[PlayerCardId; MAX_DECK_SIZE]> = cards.into_iter().collect();

        if cards.is_empty() {
            return Err(EngineError::InvalidDeck {
                reason: "deck is empty".into(),
            });
        }
        let limit = max_size.min(MAX_DECK_SIZE);
        if cards.len() > limit {
            return Err(EngineError::InvalidDeck {
                reason: format!("deck holds {} cards (limit {})", cards.len(), limit),
            });
        }
        for (i, id) in cards.iter().enumerate() {
            if cards[..i].contains(id) {
                return Err(EngineError::InvalidDeck {
                    reason: format!("{} appears twice", id),
                });
            }
        }

        Ok(Self { owner, cards })
    }

    /// Card IDs in attack order.
    #[must_use]
    pub fn cards(&self) -> &[PlayerCardId] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed deck; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does the deck contain `card`?
    #[must_use]
    pub fn contains(&self, card: PlayerCardId) -> bool {
        self.cards.contains(&card)
    }
}
