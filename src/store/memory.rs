//! In-memory storage handle.
//!
//! Content registries are immutable and held directly. Mutable state sits
//! behind one `Mutex`, which makes the reward claim's compare-and-set
//! atomic. Battles are kept as `bincode` snapshots: a battle only counts
//! as recorded once its encoded form is stored. Each snapshot carries its
//! scope and result unencoded so history queries decode only what they
//! return.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use super::{BattleStore, ClaimOutcome, CollectionStore, ContentStore, StatsStore};
use crate::cards::{CardRegistry, Deck, PlayerCard, PlayerCardId};
use crate::combat::{Battle, BattleId, RewardClaim};
use crate::core::{PlayerId, PlayerScope, StoreError};
use crate::dungeons::DungeonRegistry;
use crate::rewards::{boosted, RewardGrant};
use crate::stats::PlayerStats;

#[derive(Debug)]
struct StoredBattle {
    scope: PlayerScope,
    won: bool,
    bytes: Vec<u8>,
}

impl StoredBattle {
    fn encode(battle: &Battle) -> Result<Self, StoreError> {
        let bytes = bincode::serialize(battle).map_err(|e| StoreError::Encode(e.to_string()))?;
        Ok(Self {
            scope: battle.scope(),
            won: battle.is_won(),
            bytes,
        })
    }

    fn decode(&self) -> Result<Battle, StoreError> {
        bincode::deserialize(&self.bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    next_battle: u64,
    player_cards: FxHashMap<PlayerCardId, PlayerCard>,
    decks: FxHashMap<PlayerScope, Deck>,
    battles: FxHashMap<BattleId, StoredBattle>,
    stats: FxHashMap<PlayerId, PlayerStats>,
}

impl MemoryState {
    fn stats_entry(&mut self, player: PlayerId) -> &mut PlayerStats {
        self.stats
            .entry(player)
            .or_insert_with(|| PlayerStats::new(player))
    }
}

/// Storage handle backed by process memory.
#[derive(Debug)]
pub struct MemoryStore {
    cards: CardRegistry,
    dungeons: DungeonRegistry,
    state: Mutex<MemoryState>,
    unavailable: AtomicBool,
    stats_unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create a store over fixed content.
    #[must_use]
    pub fn new(cards: CardRegistry, dungeons: DungeonRegistry) -> Self {
        Self {
            cards,
            dungeons,
            state: Mutex::new(MemoryState::default()),
            unavailable: AtomicBool::new(false),
            stats_unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate an outage: while set, every write fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Simulate a statistics outage: while set, any write that touches
    /// stats fails, including recording a battle.
    pub fn set_stats_unavailable(&self, unavailable: bool) {
        self.stats_unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn state(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("state lock poisoned".into()))
    }

    fn writable(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".into()));
        }
        self.state()
    }

    fn stats_writable(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        if self.stats_unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("stats writes disabled".into()));
        }
        self.writable()
    }
}

impl ContentStore for MemoryStore {
    fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    fn dungeons(&self) -> &DungeonRegistry {
        &self.dungeons
    }
}

impl CollectionStore for MemoryStore {
    fn player_card(&self, id: PlayerCardId) -> Result<Option<PlayerCard>, StoreError> {
        Ok(self.state()?.player_cards.get(&id).cloned())
    }

    fn player_cards(&self, scope: PlayerScope) -> Result<Vec<PlayerCard>, StoreError> {
        let state = self.state()?;
        let mut owned: Vec<PlayerCard> = state
            .player_cards
            .values()
            .filter(|c| c.is_owned_by(scope))
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.id);
        Ok(owned)
    }

    fn add_player_card(&self, card: PlayerCard) -> Result<(), StoreError> {
        let mut state = self.writable()?;
        if state.player_cards.contains_key(&card.id) {
            return Err(StoreError::Conflict(format!("{} already exists", card.id)));
        }
        state.player_cards.insert(card.id, card);
        Ok(())
    }

    fn active_deck(&self, scope: PlayerScope) -> Result<Option<Deck>, StoreError> {
        Ok(self.state()?.decks.get(&scope).cloned())
    }

    fn set_active_deck(&self, deck: Deck) -> Result<(), StoreError> {
        self.writable()?.decks.insert(deck.owner, deck);
        Ok(())
    }
}

impl BattleStore for MemoryStore {
    fn next_battle_id(&self) -> Result<BattleId, StoreError> {
        let mut state = self.writable()?;
        state.next_battle += 1;
        Ok(BattleId::new(state.next_battle))
    }

    fn record_battle(
        &self,
        battle: &Battle,
        fold: impl FnOnce(&mut PlayerStats),
    ) -> Result<(), StoreError> {
        let stored = StoredBattle::encode(battle)?;
        let mut state = self.stats_writable()?;
        if state.battles.contains_key(&battle.id()) {
            return Err(StoreError::Conflict(format!("{} already recorded", battle.id())));
        }
        state.battles.insert(battle.id(), stored);
        fold(state.stats_entry(battle.scope().player));
        Ok(())
    }

    fn battle(&self, id: BattleId) -> Result<Option<Battle>, StoreError> {
        let state = self.state()?;
        state.battles.get(&id).map(StoredBattle::decode).transpose()
    }

    fn battles(&self, scope: PlayerScope) -> Result<Vec<Battle>, StoreError> {
        let state = self.state()?;
        let mut found = state
            .battles
            .values()
            .filter(|stored| stored.scope == scope)
            .map(StoredBattle::decode)
            .collect::<Result<Vec<_>, _>>()?;
        found.sort_by_key(|b| b.id());
        Ok(found)
    }

    fn count_won(&self, scope: PlayerScope) -> Result<u32, StoreError> {
        let state = self.state()?;
        let won = state
            .battles
            .values()
            .filter(|stored| stored.scope == scope && stored.won)
            .count();
        Ok(won as u32)
    }

    fn claim_reward(
        &self,
        battle: BattleId,
        card: PlayerCardId,
        grant: RewardGrant,
    ) -> Result<ClaimOutcome, StoreError> {
        let mut state = self.writable()?;

        let mut record = match state.battles.get(&battle) {
            Some(stored) => stored.decode()?,
            None => return Err(StoreError::Conflict(format!("{} is not recorded", battle))),
        };
        if let Some(existing) = record.reward() {
            return Ok(ClaimOutcome::AlreadyClaimed(existing));
        }
        let current = state
            .player_cards
            .get(&card)
            .ok_or_else(|| StoreError::Conflict(format!("{} is not in any collection", card)))?;

        let next = boosted(current, grant);
        record.set_reward(RewardClaim {
            card,
            stat: grant.stat,
            amount: grant.amount,
        });
        let stored = StoredBattle::encode(&record)?;

        state.battles.insert(battle, stored);
        state.player_cards.insert(card, next.clone());
        Ok(ClaimOutcome::Granted(next))
    }
}

impl StatsStore for MemoryStore {
    fn load_stats(&self, player: PlayerId) -> Result<PlayerStats, StoreError> {
        Ok(self
            .state()?
            .stats
            .get(&player)
            .cloned()
            .unwrap_or_else(|| PlayerStats::new(player)))
    }

    fn update_stats(
        &self,
        player: PlayerId,
        update: impl FnOnce(&mut PlayerStats),
    ) -> Result<PlayerStats, StoreError> {
        let mut state = self.stats_writable()?;
        let stats = state.stats_entry(player);
        update(&mut *stats);
        Ok(stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType, Stat};
    use crate::combat::{run_battle, CombatCard};
    use crate::core::GameId;
    use crate::dungeons::{Dungeon, DungeonId, DungeonTier, EnvironmentId};

    fn scope() -> PlayerScope {
        PlayerScope::new(PlayerId::new(1), GameId::new(1))
    }

    fn store() -> MemoryStore {
        MemoryStore::new(CardRegistry::new(), DungeonRegistry::new())
    }

    fn won_battle(id: BattleId) -> Battle {
        let dungeon = Dungeon::new(
            DungeonId::new(1),
            "Den",
            EnvironmentId::new(1),
            DungeonTier::SimpleEncounter,
        );
        let mut battle = Battle::begin(id, scope(), &dungeon, 0);
        let log = run_battle(
            &[CombatCard::new(CardId::new(1), 10, 12, CardType::Fire)],
            &[CombatCard::new(CardId::new(2), 8, 9, CardType::Earth)],
        )
        .unwrap();
        battle.conclude(log, 5);
        battle
    }

    #[test]
    fn test_battle_ids_increase() {
        let store = store();
        let a = store.next_battle_id().unwrap();
        let b = store.next_battle_id().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_record_and_read_back() {
        let store = store();
        let battle = won_battle(BattleId::new(1));
        store.record_battle(&battle, |_| {}).unwrap();

        assert_eq!(store.battle(BattleId::new(1)).unwrap(), Some(battle.clone()));
        assert_eq!(store.battles(scope()).unwrap(), vec![battle]);
        assert_eq!(store.count_won(scope()).unwrap(), 1);
    }

    #[test]
    fn test_scope_reads_skip_other_snapshots() {
        let store = store();
        store.record_battle(&won_battle(BattleId::new(1)), |_| {}).unwrap();
        let rival = PlayerScope::new(PlayerId::new(2), GameId::new(1));
        let garbage = StoredBattle { scope: rival, won: true, bytes: vec![0xff] };
        store.state().unwrap().battles.insert(BattleId::new(2), garbage);

        assert_eq!(store.battles(scope()).unwrap().len(), 1);
        assert_eq!(store.count_won(scope()).unwrap(), 1);
        assert_eq!(store.count_won(rival).unwrap(), 1);
        assert!(matches!(store.battles(rival), Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_record_twice_conflicts() {
        let store = store();
        let battle = won_battle(BattleId::new(1));
        store.record_battle(&battle, |_| {}).unwrap();
        assert!(matches!(
            store.record_battle(&battle, |_| {}),
            Err(StoreError::Conflict(_))
        ));
    }

    #[test]
    fn test_claim_is_compare_and_set() {
        let store = store();
        store
            .add_player_card(PlayerCard::new(PlayerCardId::new(1), CardId::new(1), scope()))
            .unwrap();
        store.record_battle(&won_battle(BattleId::new(1)), |_| {}).unwrap();

        let grant = RewardGrant::new(Stat::Damage, 1);
        let first = store.claim_reward(BattleId::new(1), PlayerCardId::new(1), grant).unwrap();
        let second = store.claim_reward(BattleId::new(1), PlayerCardId::new(1), grant).unwrap();

        assert!(matches!(first, ClaimOutcome::Granted(ref c) if c.damage_boost() == 1));
        assert!(matches!(second, ClaimOutcome::AlreadyClaimed(_)));
        let stored = store.player_card(PlayerCardId::new(1)).unwrap().unwrap();
        assert_eq!(stored.damage_boost(), 1);
    }

    #[test]
    fn test_outage_blocks_writes() {
        let store = store();
        store.set_unavailable(true);
        assert!(matches!(
            store.record_battle(&won_battle(BattleId::new(1)), |_| {}),
            Err(StoreError::Unavailable(_))
        ));

        store.set_unavailable(false);
        assert_eq!(store.battle(BattleId::new(1)).unwrap(), None);
    }

    #[test]
    fn test_stats_created_lazily() {
        let store = store();
        let stats = store.load_stats(PlayerId::new(4)).unwrap();
        assert_eq!(stats, PlayerStats::new(PlayerId::new(4)));

        let updated = store
            .update_stats(PlayerId::new(4), |stats| stats.total_battles = 2)
            .unwrap();
        assert_eq!(updated.total_battles, 2);
        assert_eq!(store.load_stats(PlayerId::new(4)).unwrap().total_battles, 2);
    }

    #[test]
    fn test_record_folds_stats() {
        let store = store();
        let battle = won_battle(BattleId::new(1));
        store
            .record_battle(&battle, |stats| stats.on_battle_ended(&battle))
            .unwrap();

        let stats = store.load_stats(PlayerId::new(1)).unwrap();
        assert_eq!(stats.battles_won, 1);
    }

    #[test]
    fn test_stats_outage_records_nothing() {
        let store = store();
        let battle = won_battle(BattleId::new(1));
        store.set_stats_unavailable(true);

        assert!(matches!(
            store.record_battle(&battle, |stats| stats.on_battle_ended(&battle)),
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.update_stats(PlayerId::new(1), |stats| stats.total_battles += 1),
            Err(StoreError::Unavailable(_))
        ));

        store.set_stats_unavailable(false);
        assert_eq!(store.battle(BattleId::new(1)).unwrap(), None);
        assert_eq!(store.load_stats(PlayerId::new(1)).unwrap().total_battles, 0);
        // Other writes are unaffected by a stats outage.
        store.set_stats_unavailable(true);
        assert!(store.next_battle_id().is_ok());
    }

    #[test]
    fn test_concurrent_stats_updates() {
        let store = store();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..25 {
                        store
                            .update_stats(PlayerId::new(1), |stats| stats.total_battles += 1)
                            .unwrap();
                    }
                });
            }
        });
        assert_eq!(store.load_stats(PlayerId::new(1)).unwrap().total_battles, 200);
    }

    #[test]
    fn test_active_deck_replaced() {
        let store = store();
        let first = Deck::new(scope(), [PlayerCardId::new(1)], 6).unwrap();
        let second = Deck::new(scope(), [PlayerCardId::new(2)], 6).unwrap();

        store.set_active_deck(first).unwrap();
        store.set_active_deck(second.clone()).unwrap();
        assert_eq!(store.active_deck(scope()).unwrap(), Some(second));
    }
}
