//! Clash resolution - one player card against one dungeon card.
//!
//! Rules are checked in a fixed order and the first one that decides
//! wins:
//!
//! 1. **Damage**: a side whose damage strictly exceeds the opposing health,
//!    while its own health absorbs the opposing damage, wins. A mutual
//!    knockout decides nothing.
//! 2. **Type advantage**: the side whose type beats the other's wins.
//! 3. **Default**: the dungeon wins.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardType};

/// Effective stats of a card at the moment it enters a clash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatCard {
    /// Template the stats came from.
    pub card_id: CardId,
    /// Effective damage (base, boosts, leader doubling applied).
    pub damage: u32,
    /// Effective health.
    pub health: u32,
    /// Elemental type.
    pub card_type: CardType,
}

impl CombatCard {
    /// Create a combat snapshot.
    #[must_use]
    pub const fn new(card_id: CardId, damage: u32, health: u32, card_type: CardType) -> Self {
        Self {
            card_id,
            damage,
            health,
            card_type,
        }
    }

    /// Would this card knock `other` out?
    #[must_use]
    pub const fn kills(&self, other: &CombatCard) -> bool {
        self.damage > other.health
    }
}

/// A side of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Player,
    Dungeon,
}

/// Why a clash was won. The label is shown verbatim to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinReason {
    Damage,
    TypeAdvantage,
    Default,
}

impl WinReason {
    /// Presentation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WinReason::Damage => "DAMAGE",
            WinReason::TypeAdvantage => "TYPE_ADVANTAGE",
            WinReason::Default => "DEFAULT",
        }
    }
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Winner and reason of a single clash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClashOutcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// Decide a clash. Pure: the same snapshots always give the same outcome.
///
/// ```
/// use dungeon_ccg::cards::{CardId, CardType};
/// use dungeon_ccg::combat::{resolve_clash, CombatCard, Side, WinReason};
///
/// let player = CombatCard::new(CardId::new(1), 10, 12, CardType::Fire);
/// let dungeon = CombatCard::new(CardId::new(2), 8, 9, CardType::Earth);
///
/// let outcome = resolve_clash(&player, &dungeon);
/// assert_eq!(outcome.winner, Side::Player);
/// assert_eq!(outcome.reason, WinReason::Damage);
/// ```
#[must_use]
pub fn resolve_clash(player: &CombatCard, dungeon: &CombatCard) -> ClashOutcome {
    let player_kills = player.kills(dungeon);
    let dungeon_kills = dungeon.kills(player);

    if player_kills && !dungeon_kills {
        return ClashOutcome {
            winner: Side::Player,
            reason: WinReason::Damage,
        };
    }
    if dungeon_kills && !player_kills {
        return ClashOutcome {
            winner: Side::Dungeon,
            reason: WinReason::Damage,
        };
    }

    if player.card_type.beats(dungeon.card_type) {
        ClashOutcome {
            winner: Side::Player,
            reason: WinReason::TypeAdvantage,
        }
    } else if dungeon.card_type.beats(player.card_type) {
        ClashOutcome {
            winner: Side::Dungeon,
            reason: WinReason::TypeAdvantage,
        }
    } else {
        ClashOutcome {
            winner: Side::Dungeon,
            reason: WinReason::Default,
        }
    }
}

/// Immutable record of one resolved pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clash {
    /// Position in the battle (0-based), equal to combat order.
    pub index: u32,
    /// Player-side snapshot.
    pub player: CombatCard,
    /// Dungeon-side snapshot.
    pub dungeon: CombatCard,
    /// Winning side.
    pub winner: Side,
    /// Deciding rule.
    pub reason: WinReason,
}

impl Clash {
    /// Resolve a pairing into a clash record.
    #[must_use]
    pub fn resolve(index: u32, player: CombatCard, dungeon: CombatCard) -> Self {
        let ClashOutcome { winner, reason } = resolve_clash(&player, &dungeon);
        Self {
            index,
            player,
            dungeon,
            winner,
            reason,
        }
    }

    /// Did the player win this clash?
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.winner == Side::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card(damage: u32, health: u32, card_type: CardType) -> CombatCard {
        CombatCard::new(CardId::new(0), damage, health, card_type)
    }

    fn any_card() -> impl Strategy<Value = CombatCard> {
        (0u32..30, 1u32..30, prop::sample::select(CardType::ALL.to_vec()))
            .prop_map(|(d, h, t)| card(d, h, t))
    }

    #[test]
    fn test_player_damage_win() {
        let outcome = resolve_clash(&card(10, 12, CardType::Fire), &card(8, 9, CardType::Earth));
        assert_eq!(outcome.winner, Side::Player);
        assert_eq!(outcome.reason, WinReason::Damage);
    }

    #[test]
    fn test_dungeon_damage_win() {
        // Player has type advantage but is knocked out cleanly.
        let outcome = resolve_clash(&card(3, 4, CardType::Fire), &card(5, 9, CardType::Earth));
        assert_eq!(outcome.winner, Side::Dungeon);
        assert_eq!(outcome.reason, WinReason::Damage);
    }

    #[test]
    fn test_type_advantage_when_no_kill() {
        let outcome = resolve_clash(&card(6, 10, CardType::Water), &card(7, 12, CardType::Air));
        assert_eq!(outcome.winner, Side::Player);
        assert_eq!(outcome.reason, WinReason::TypeAdvantage);
    }

    #[test]
    fn test_dungeon_type_advantage() {
        let outcome = resolve_clash(&card(2, 10, CardType::Fire), &card(2, 10, CardType::Air));
        assert_eq!(outcome.winner, Side::Dungeon);
        assert_eq!(outcome.reason, WinReason::TypeAdvantage);
    }

    #[test]
    fn test_same_type_defaults_to_dungeon() {
        let outcome = resolve_clash(&card(3, 10, CardType::Fire), &card(3, 10, CardType::Fire));
        assert_eq!(outcome.winner, Side::Dungeon);
        assert_eq!(outcome.reason, WinReason::Default);
    }

    #[test]
    fn test_opposite_types_default_to_dungeon() {
        let outcome = resolve_clash(&card(3, 10, CardType::Earth), &card(3, 10, CardType::Air));
        assert_eq!(outcome.reason, WinReason::Default);
    }

    #[test]
    fn test_mutual_knockout_falls_through() {
        // Both kill each other; type decides.
        let outcome = resolve_clash(&card(20, 5, CardType::Air), &card(20, 5, CardType::Fire));
        assert_eq!(outcome.winner, Side::Player);
        assert_eq!(outcome.reason, WinReason::TypeAdvantage);

        // Both kill each other, same type: default.
        let outcome = resolve_clash(&card(20, 5, CardType::Air), &card(20, 5, CardType::Air));
        assert_eq!(outcome.reason, WinReason::Default);
    }

    #[test]
    fn test_equal_damage_and_health_is_not_a_kill() {
        let outcome = resolve_clash(&card(9, 10, CardType::Earth), &card(1, 9, CardType::Earth));
        assert_eq!(outcome.reason, WinReason::Default);
    }

    #[test]
    fn test_zero_damage_can_win_on_type() {
        let outcome = resolve_clash(&card(0, 10, CardType::Fire), &card(1, 10, CardType::Earth));
        assert_eq!(outcome.winner, Side::Player);
        assert_eq!(outcome.reason, WinReason::TypeAdvantage);
    }

    #[test]
    fn test_clash_record() {
        let clash = Clash::resolve(3, card(10, 12, CardType::Fire), card(8, 9, CardType::Earth));
        assert_eq!(clash.index, 3);
        assert!(clash.player_won());
        assert_eq!(clash.reason.to_string(), "DAMAGE");
    }

    #[test]
    fn test_reason_labels_serialize_verbatim() {
        assert_eq!(serde_json::to_string(&WinReason::TypeAdvantage).unwrap(), "\"TYPE_ADVANTAGE\"");
        assert_eq!(serde_json::to_string(&Side::Dungeon).unwrap(), "\"DUNGEON\"");
    }

    proptest! {
        #[test]
        fn prop_resolution_is_deterministic(p in any_card(), d in any_card()) {
            prop_assert_eq!(resolve_clash(&p, &d), resolve_clash(&p, &d));
        }

        #[test]
        fn prop_mutual_lethal_never_damage(p in any_card(), d in any_card()) {
            prop_assume!(p.kills(&d) && d.kills(&p));
            prop_assert_ne!(resolve_clash(&p, &d).reason, WinReason::Damage);
        }

        #[test]
        fn prop_zero_damage_never_wins_by_damage(p in any_card(), d in any_card()) {
            let p = CombatCard { damage: 0, ..p };
            let outcome = resolve_clash(&p, &d);
            prop_assert!(!(outcome.winner == Side::Player && outcome.reason == WinReason::Damage));
        }

        #[test]
        fn prop_default_always_goes_to_dungeon(p in any_card(), d in any_card()) {
            let outcome = resolve_clash(&p, &d);
            if outcome.reason == WinReason::Default {
                prop_assert_eq!(outcome.winner, Side::Dungeon);
            }
        }
    }
}
