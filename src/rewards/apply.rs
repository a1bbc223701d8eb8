//! Reward application - the only path that grows a card's boosts.

use super::table::{RewardGrant, RewardTable};
use crate::cards::{PlayerCard, Stat};
use crate::core::{EngineError, EngineResult};
use crate::dungeons::DungeonTier;

/// Look up the tier's grant and check the player's chosen stat against it.
pub fn grant_for(
    table: &RewardTable,
    tier: DungeonTier,
    chosen: Stat,
) -> EngineResult<RewardGrant> {
    let grant = table.grant(tier);
    if grant.stat != chosen {
        return Err(EngineError::RewardStatMismatch {
            tier,
            expected: grant.stat,
            chosen,
        });
    }
    Ok(grant)
}

/// Copy of `card` with `grant` added to its boost.
#[must_use]
pub fn boosted(card: &PlayerCard, grant: RewardGrant) -> PlayerCard {
    let mut next = card.clone();
    next.add_boost(grant.stat, grant.amount);
    next
}

/// Produce the boosted card. The input card is left unchanged.
///
/// ```
/// use dungeon_ccg::cards::{CardId, PlayerCard, PlayerCardId, Stat};
/// use dungeon_ccg::core::{GameId, PlayerId, PlayerScope};
/// use dungeon_ccg::dungeons::DungeonTier;
/// use dungeon_ccg::rewards::{apply_reward, RewardTable};
///
/// let scope = PlayerScope::new(PlayerId::new(1), GameId::new(1));
/// let card = PlayerCard::new(PlayerCardId::new(1), CardId::new(1), scope);
///
/// let table = RewardTable::default();
/// let boosted = apply_reward(&card, DungeonTier::SmallDungeon, Stat::Health, &table).unwrap();
/// assert_eq!(boosted.health_boost(), 2);
/// assert_eq!(card.health_boost(), 0);
/// ```
pub fn apply_reward(
    card: &PlayerCard,
    tier: DungeonTier,
    chosen: Stat,
    table: &RewardTable,
) -> EngineResult<PlayerCard> {
    let grant = grant_for(table, tier, chosen)?;
    Ok(boosted(card, grant))
}
