//! Small keyed counters used by `PlayerStats`.

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::combat::WinReason;
use crate::dungeons::DungeonTier;

/// One counter per card type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts([u32; 4]);

impl TypeCounts {
    #[must_use]
    pub fn get(&self, card_type: CardType) -> u32 {
        self.0[card_type.index()]
    }

    pub fn increment(&mut self, card_type: CardType) {
        self.0[card_type.index()] += 1;
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// One counter per dungeon tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts([u32; 3]);

impl TierCounts {
    #[must_use]
    pub fn get(&self, tier: DungeonTier) -> u32 {
        self.0[tier.index()]
    }

    pub fn increment(&mut self, tier: DungeonTier) {
        self.0[tier.index()] += 1;
    }
}

/// One counter per win reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCounts {
    pub damage: u32,
    pub type_advantage: u32,
    pub default: u32,
}

impl ReasonCounts {
    #[must_use]
    pub fn get(&self, reason: WinReason) -> u32 {
        match reason {
            WinReason::Damage => self.damage,
            WinReason::TypeAdvantage => self.type_advantage,
            WinReason::Default => self.default,
        }
    }

    pub fn increment(&mut self, reason: WinReason) {
        match reason {
            WinReason::Damage => self.damage += 1,
            WinReason::TypeAdvantage => self.type_advantage += 1,
            WinReason::Default => self.default += 1,
        }
    }
}
