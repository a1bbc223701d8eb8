//! Persistence boundary: contracts the engine needs from its collaborators.
//!
//! The engine receives a storage handle at construction and never reaches
//! for a global client. A handle implements four traits:
//!
//! - `ContentStore`: authored cards and dungeons (read-only)
//! - `CollectionStore`: player cards and active decks
//! - `BattleStore`: battle history and the at-most-once reward claim
//! - `StatsStore`: per-player statistics
//!
//! `MemoryStore` implements all four for tests and embedding.

pub mod memory;

pub use memory::MemoryStore;

use crate::cards::{CardRegistry, Deck, PlayerCard, PlayerCardId};
use crate::combat::{Battle, BattleId, RewardClaim};
use crate::core::{PlayerId, PlayerScope, StoreError};
use crate::dungeons::DungeonRegistry;
use crate::rewards::RewardGrant;
use crate::stats::PlayerStats;

/// Authored content. Never written by the engine.
pub trait ContentStore {
    fn cards(&self) -> &CardRegistry;

    fn dungeons(&self) -> &DungeonRegistry;
}

/// Player collections and decks.
pub trait CollectionStore {
    /// Look up one player card.
    fn player_card(&self, id: PlayerCardId) -> Result<Option<PlayerCard>, StoreError>;

    /// All cards owned within `scope`, sorted by ID.
    fn player_cards(&self, scope: PlayerScope) -> Result<Vec<PlayerCard>, StoreError>;

    /// Add a card to a collection. Fails on a duplicate ID.
    fn add_player_card(&self, card: PlayerCard) -> Result<(), StoreError>;

    /// The deck currently marked active for `scope`.
    fn active_deck(&self, scope: PlayerScope) -> Result<Option<Deck>, StoreError>;

    /// Make `deck` the active deck of its owner, replacing any other.
    fn set_active_deck(&self, deck: Deck) -> Result<(), StoreError>;
}

/// Result of an atomic reward claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The reward was granted; carries the boosted card as stored.
    Granted(PlayerCard),
    /// The battle already had a reward; carries the original claim.
    AlreadyClaimed(RewardClaim),
}

/// Battle history.
pub trait BattleStore {
    /// Allocate a fresh battle ID.
    fn next_battle_id(&self) -> Result<BattleId, StoreError>;

    /// Durably record a finalized battle and apply `fold` to its player's
    /// statistics, as one atomic step: both land or neither does.
    /// Fails if the ID is taken.
    fn record_battle(
        &self,
        battle: &Battle,
        fold: impl FnOnce(&mut PlayerStats),
    ) -> Result<(), StoreError>;

    /// Look up a recorded battle.
    fn battle(&self, id: BattleId) -> Result<Option<Battle>, StoreError>;

    /// Battles fought within `scope`, oldest first.
    fn battles(&self, scope: PlayerScope) -> Result<Vec<Battle>, StoreError>;

    /// Won battles within `scope`.
    fn count_won(&self, scope: PlayerScope) -> Result<u32, StoreError> {
        Ok(self.battles(scope)?.iter().filter(|b| b.is_won()).count() as u32)
    }

    /// Grant `grant` to `card` for `battle`, at most once per battle.
    ///
    /// Implementations must mark the battle and boost the card in one
    /// atomic step (compare-and-set on the battle's reward slot).
    fn claim_reward(
        &self,
        battle: BattleId,
        card: PlayerCardId,
        grant: RewardGrant,
    ) -> Result<ClaimOutcome, StoreError>;
}

/// Per-player statistics.
pub trait StatsStore {
    /// Stored stats for `player`, or fresh counters on first use.
    fn load_stats(&self, player: PlayerId) -> Result<PlayerStats, StoreError>;

    /// Apply `update` to `player`'s stats without releasing the store
    /// between read and write. Returns the stats as stored.
    fn update_stats(
        &self,
        player: PlayerId,
        update: impl FnOnce(&mut PlayerStats),
    ) -> Result<PlayerStats, StoreError>;
}

/// Everything the engine needs from storage.
pub trait Storage: ContentStore + CollectionStore + BattleStore + StatsStore {}

impl<T> Storage for T where T: ContentStore + CollectionStore + BattleStore + StatsStore {}
