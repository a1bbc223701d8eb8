//! Dungeon definitions - authored opponent sequences.

use serde::{Deserialize, Serialize};

use super::slot::DungeonCardSlot;
use crate::cards::CardRegistry;
use crate::combat::CombatCard;
use crate::core::{EngineError, EngineResult};

/// Unique identifier for a dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DungeonId(pub u32);

impl DungeonId {
    /// Create a new dungeon ID.
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

impl std::fmt::Display for DungeonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dungeon({})", self.0)
    }
}

/// Environment (world region) a dungeon belongs to.
///
/// Progression order is evaluated per environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnvironmentId(pub u32);

impl EnvironmentId {
    /// Create a new environment ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment({})", self.0)
    }
}

/// Dungeon size class. Determines the reward granted on a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DungeonTier {
    SimpleEncounter,
    SmallDungeon,
    LargeDungeon,
}

impl DungeonTier {
    /// All tiers, smallest first.
    pub const ALL: [DungeonTier; 3] = [
        DungeonTier::SimpleEncounter,
        DungeonTier::SmallDungeon,
        DungeonTier::LargeDungeon,
    ];

    /// Dense index for per-tier counters.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DungeonTier::SimpleEncounter => 0,
            DungeonTier::SmallDungeon => 1,
            DungeonTier::LargeDungeon => 2,
        }
    }
}

/// An authored dungeon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Unique identifier.
    pub id: DungeonId,

    /// Display name.
    pub name: String,

    /// Environment this dungeon belongs to.
    pub environment: EnvironmentId,

    /// Size class.
    pub tier: DungeonTier,

    /// Progression rank within the environment (lowest is always open).
    pub order: u32,

    /// Won battles required before this dungeon may be attempted.
    pub required_wins: u32,

    /// Opponent sequence, fought in order.
    pub slots: Vec<DungeonCardSlot>,
}

impl Dungeon {
    /// Create a dungeon with no slots, open from the start.
    #[must_use]
    pub fn new(
        id: DungeonId,
        name: impl Into<String>,
        environment: EnvironmentId,
        tier: DungeonTier,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            environment,
            tier,
            order: 0,
            required_wins: 0,
            slots: Vec::new(),
        }
    }

    /// Set the progression rank.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Set the unlock threshold.
    #[must_use]
    pub fn with_required_wins(mut self, wins: u32) -> Self {
        self.required_wins = wins;
        self
    }

    /// Append a slot to the sequence.
    #[must_use]
    pub fn with_slot(mut self, slot: DungeonCardSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Check the dungeon against the card registry.
    pub fn validate(&self, cards: &CardRegistry) -> EngineResult<()> {
        if self.slots.is_empty() {
            return Err(EngineError::InvalidContent {
                reason: format!("{} '{}' has no card slots", self.id, self.name),
            });
        }
        for slot in &self.slots {
            cards.require(slot.card_id())?;
        }
        Ok(())
    }

    /// Resolve the full opponent sequence to combat snapshots.
    pub fn combat_cards(&self, cards: &CardRegistry) -> EngineResult<Vec<CombatCard>> {
        self.slots.iter().map(|slot| slot.resolve(cards)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BaseCard, CardId, CardType, Stat};

    fn cards() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register(BaseCard::new(CardId::new(1), "Bat", 2, 2, CardType::Air)).unwrap();
        registry.register(BaseCard::new(CardId::new(2), "Ogre", 6, 6, CardType::Earth)).unwrap();
        registry
    }

    fn cave() -> Dungeon {
        Dungeon::new(
            DungeonId::new(1),
            "Bat Cave",
            EnvironmentId::new(1),
            DungeonTier::SmallDungeon,
        )
    }

    #[test]
    fn test_builder() {
        let dungeon = cave()
            .with_order(2)
            .with_required_wins(3)
            .with_slot(DungeonCardSlot::card(CardId::new(1)))
            .with_slot(DungeonCardSlot::leader(CardId::new(2), Stat::Damage));

        assert_eq!(dungeon.order, 2);
        assert_eq!(dungeon.required_wins, 3);
        assert_eq!(dungeon.slots.len(), 2);
        assert!(dungeon.validate(&cards()).is_ok());
    }

    #[test]
    fn test_combat_cards_in_order() {
        let dungeon = cave()
            .with_slot(DungeonCardSlot::leader(CardId::new(2), Stat::Damage))
            .with_slot(DungeonCardSlot::card(CardId::new(1)));

        let sequence = dungeon.combat_cards(&cards()).unwrap();
        assert_eq!(sequence[0].damage, 12);
        assert_eq!(sequence[1].card_type, CardType::Air);
    }

    #[test]
    fn test_empty_dungeon_invalid() {
        assert!(matches!(
            cave().validate(&cards()),
            Err(EngineError::InvalidContent { .. })
        ));
    }

    #[test]
    fn test_unknown_slot_card_invalid() {
        let dungeon = cave().with_slot(DungeonCardSlot::card(CardId::new(77)));
        assert_eq!(dungeon.validate(&cards()), Err(EngineError::UnknownCard(CardId::new(77))));
    }

    #[test]
    fn test_tier_serde() {
        assert_eq!(serde_json::to_string(&DungeonTier::LargeDungeon).unwrap(), "\"large_dungeon\"");
        assert_eq!(DungeonTier::ALL.len(), 3);
    }
}
