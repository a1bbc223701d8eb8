//! Battle outcome classification.
//!
//! The player must strictly out-win the dungeon. A tied tally is a loss,
//! mirroring the default clash rule: the dungeon takes every contest the
//! player does not clearly win.

use serde::{Deserialize, Serialize};

use super::clash::Side;

/// Lifecycle status of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleStatus {
    /// Transient while the clash log is being built.
    InProgress,
    Won,
    Lost,
}

impl BattleStatus {
    /// Is the battle finalized?
    #[must_use]
    pub fn is_final(self) -> bool {
        !matches!(self, BattleStatus::InProgress)
    }
}

impl std::fmt::Display for BattleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BattleStatus::InProgress => "in progress",
            BattleStatus::Won => "won",
            BattleStatus::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Clashes won by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: u32,
    pub dungeon_wins: u32,
}

impl Tally {
    /// Count one clash for `winner`.
    pub fn record(&mut self, winner: Side) {
        match winner {
            Side::Player => self.player_wins += 1,
            Side::Dungeon => self.dungeon_wins += 1,
        }
    }

    /// Clashes counted so far.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player_wins + self.dungeon_wins
    }
}

/// Classify a final tally: WON iff the player won strictly more clashes.
///
/// ```
/// use dungeon_ccg::combat::{classify, BattleStatus, Tally};
///
/// assert_eq!(classify(Tally { player_wins: 3, dungeon_wins: 2 }), BattleStatus::Won);
/// assert_eq!(classify(Tally { player_wins: 2, dungeon_wins: 2 }), BattleStatus::Lost);
/// ```
#[must_use]
pub fn classify(tally: Tally) -> BattleStatus {
    if tally.player_wins > tally.dungeon_wins {
        BattleStatus::Won
    } else {
        BattleStatus::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(player_wins: u32, dungeon_wins: u32) -> Tally {
        Tally {
            player_wins,
            dungeon_wins,
        }
    }

    #[test]
    fn test_majority_wins() {
        assert_eq!(classify(tally(4, 2)), BattleStatus::Won);
        assert_eq!(classify(tally(1, 0)), BattleStatus::Won);
    }

    #[test]
    fn test_tie_is_lost() {
        assert_eq!(classify(tally(3, 3)), BattleStatus::Lost);
        assert_eq!(classify(tally(0, 0)), BattleStatus::Lost);
    }

    #[test]
    fn test_minority_is_lost() {
        assert_eq!(classify(tally(2, 4)), BattleStatus::Lost);
    }

    #[test]
    fn test_tally_record() {
        let mut t = Tally::default();
        t.record(Side::Player);
        t.record(Side::Dungeon);
        t.record(Side::Player);

        assert_eq!(t, tally(2, 1));
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn test_status_is_final() {
        assert!(!BattleStatus::InProgress.is_final());
        assert!(BattleStatus::Won.is_final());
        assert!(BattleStatus::Lost.is_final());
    }
}
