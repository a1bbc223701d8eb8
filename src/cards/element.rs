//! Elemental card types and the advantage cycle.
//!
//! The four types form a fixed 4-cycle:
//!
//! ```text
//! FIRE -> EARTH -> WATER -> AIR -> FIRE
//! ```
//!
//! where `a -> b` reads "a beats b". Each type beats exactly one type and
//! is beaten by exactly one type; opposite types (and a type against
//! itself) are unrelated.

use serde::{Deserialize, Serialize};

/// Elemental type of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Fire,
    Water,
    Earth,
    Air,
}

impl CardType {
    /// All types, in declaration order.
    pub const ALL: [CardType; 4] =
        [CardType::Fire, CardType::Water, CardType::Earth, CardType::Air];

    /// The single type this type beats.
    #[must_use]
    pub const fn dominates(self) -> CardType {
        match self {
            CardType::Fire => CardType::Earth,
            CardType::Earth => CardType::Water,
            CardType::Water => CardType::Air,
            CardType::Air => CardType::Fire,
        }
    }

    /// The single type that beats this type.
    #[must_use]
    pub const fn dominated_by(self) -> CardType {
        match self {
            CardType::Fire => CardType::Air,
            CardType::Earth => CardType::Fire,
            CardType::Water => CardType::Earth,
            CardType::Air => CardType::Water,
        }
    }

    /// Does `self` have type advantage over `other`?
    ///
    /// ```
    /// use dungeon_ccg::cards::CardType;
    ///
    /// assert!(CardType::Water.beats(CardType::Air));
    /// assert!(!CardType::Air.beats(CardType::Water));
    /// assert!(!CardType::Fire.beats(CardType::Fire));
    /// ```
    #[must_use]
    pub fn beats(self, other: CardType) -> bool {
        self.dominates() == other
    }

    /// Dense index for per-type counters.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CardType::Fire => 0,
            CardType::Water => 1,
            CardType::Earth => 2,
            CardType::Air => 3,
        }
    }

    /// Upper-case label used by the presentation layer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardType::Fire => "FIRE",
            CardType::Water => "WATER",
            CardType::Earth => "EARTH",
            CardType::Air => "AIR",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
