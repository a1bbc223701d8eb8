//! `GameEngine`: the entry points that tie combat, progression, rewards
//! and statistics to a storage handle.

use crate::cards::{Deck, PlayerCard, PlayerCardId, Stat};
use crate::combat::{run_battle, Battle, BattleId, BattlePlayback, CombatCard};
use crate::core::{ConfigError, EngineConfig, EngineError, EngineResult, PlayerId, PlayerScope};
use crate::dungeons::{DungeonId, EnvironmentId};
use crate::progression::{DungeonAccess, ProgressionGate};
use crate::rewards::grant_for;
use crate::stats::PlayerStats;
use crate::store::{ClaimOutcome, Storage};

use super::clock::{Clock, SystemClock};

/// Battle, progression and reward service over a storage handle.
///
/// The engine holds no mutable state of its own; every durable effect goes
/// through `S` as a single atomic store call (battle record with its stats,
/// reward claim with its boost), so concurrent callers cannot lose updates.
#[derive(Debug)]
pub struct GameEngine<S: Storage, C: Clock = SystemClock> {
    config: EngineConfig,
    store: S,
    clock: C,
}

impl<S: Storage> GameEngine<S, SystemClock> {
    /// Create an engine using the wall clock.
    pub fn new(config: EngineConfig, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            clock: SystemClock,
        })
    }
}

impl<S: Storage, C: Clock> GameEngine<S, C> {
    /// Swap the time source.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> GameEngine<S, C2> {
        GameEngine {
            config: self.config,
            store: self.store,
            clock,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === Collection ===

    /// Cards owned within `scope`.
    pub fn collection(&self, scope: PlayerScope) -> EngineResult<Vec<PlayerCard>> {
        Ok(self.store.player_cards(scope)?)
    }

    /// Validate and activate a deck for `scope`.
    pub fn set_active_deck(
        &self,
        scope: PlayerScope,
        cards: impl IntoIterator<Item = PlayerCardId>,
    ) -> EngineResult<Deck> {
        let deck = Deck::new(scope, cards, self.config.max_deck_size)?;
        for &id in deck.cards() {
            self.owned_card(scope, id)?;
        }
        self.store.set_active_deck(deck.clone())?;
        log::debug!("{} activated a {}-card deck", scope, deck.len());
        Ok(deck)
    }

    fn owned_card(&self, scope: PlayerScope, id: PlayerCardId) -> EngineResult<PlayerCard> {
        match self.store.player_card(id)? {
            Some(card) if card.is_owned_by(scope) => Ok(card),
            _ => Err(EngineError::InvalidCardSelection { card: id, scope }),
        }
    }

    // === Progression ===

    /// Won battles within `scope`, the gate's progress measure.
    pub fn won_battles(&self, scope: PlayerScope) -> EngineResult<u32> {
        Ok(self.store.count_won(scope)?)
    }

    /// Lock state of every dungeon in `environment`, by progression order.
    pub fn dungeon_access(
        &self,
        scope: PlayerScope,
        environment: EnvironmentId,
    ) -> EngineResult<Vec<DungeonAccess>> {
        let dungeons = self.store.dungeons().in_environment(environment);
        let gate = ProgressionGate::new(dungeons.iter().copied());
        let wins = self.won_battles(scope)?;
        Ok(gate.access(dungeons, wins))
    }

    // === Battles ===

    /// Fight `dungeon` with the scope's active deck.
    ///
    /// The battle is resolved in full, then recorded together with its
    /// statistics. Nothing is persisted if any step fails.
    pub fn start_battle(&self, scope: PlayerScope, dungeon: DungeonId) -> EngineResult<Battle> {
        let dungeon = self.store.dungeons().require(dungeon)?;

        let gate = ProgressionGate::new(self.store.dungeons().in_environment(dungeon.environment));
        let wins = self.won_battles(scope)?;
        if let Err(err) = gate.check(dungeon, wins) {
            log::warn!("{} refused: {}", scope, err);
            return Err(err);
        }

        let deck = self
            .store
            .active_deck(scope)?
            .ok_or(EngineError::NoActiveDeck(scope))?;
        let player = self.deck_snapshot(scope, &deck)?;
        let foes = dungeon.combat_cards(self.store.cards())?;

        let id = self.store.next_battle_id()?;
        let mut battle = Battle::begin(id, scope, dungeon, self.clock.now_ms());
        let resolved = run_battle(&player, &foes)?;
        let status = battle.conclude(resolved, self.clock.now_ms());

        self.store
            .record_battle(&battle, |stats| stats.on_battle_recorded(&battle))?;

        log::info!(
            "{}: {} {} {} ({}-{}) in {}ms",
            id,
            scope,
            status,
            dungeon.name,
            battle.tally().player_wins,
            battle.tally().dungeon_wins,
            battle.duration_ms().unwrap_or(0)
        );
        Ok(battle)
    }

    fn deck_snapshot(&self, scope: PlayerScope, deck: &Deck) -> EngineResult<Vec<CombatCard>> {
        deck.cards()
            .iter()
            .map(|&id| {
                let card = self.store.player_card(id)?.ok_or(EngineError::InvalidBattleInput {
                    reason: "active deck references a card missing from the collection",
                })?;
                if !card.is_owned_by(scope) {
                    return Err(EngineError::InvalidCardSelection { card: id, scope });
                }
                self.store.cards().combat_card(&card)
            })
            .collect()
    }

    /// A recorded battle fought within `scope`.
    pub fn battle(&self, scope: PlayerScope, id: BattleId) -> EngineResult<Battle> {
        self.store
            .battle(id)?
            .filter(|b| b.scope() == scope)
            .ok_or(EngineError::BattleNotFound(id))
    }

    /// Battle history for `scope`, oldest first.
    pub fn battles(&self, scope: PlayerScope) -> EngineResult<Vec<Battle>> {
        Ok(self.store.battles(scope)?)
    }

    /// Step-by-step replay of a recorded battle.
    pub fn playback(&self, scope: PlayerScope, id: BattleId) -> EngineResult<BattlePlayback> {
        Ok(BattlePlayback::new(&self.battle(scope, id)?))
    }

    // === Rewards ===

    /// Grant the tier reward for a won battle to one of the scope's cards.
    ///
    /// At most one claim succeeds per battle, including under concurrent
    /// calls; the loser sees `RewardAlreadyClaimed`.
    pub fn claim_reward(
        &self,
        scope: PlayerScope,
        battle: BattleId,
        card: PlayerCardId,
        stat: Stat,
    ) -> EngineResult<PlayerCard> {
        let record = self.battle(scope, battle)?;
        if !record.is_won() {
            return Err(EngineError::BattleNotWon(battle));
        }
        if record.reward().is_some() {
            log::warn!("{} tried to claim {} twice", scope, battle);
            return Err(EngineError::RewardAlreadyClaimed { battle });
        }
        if let Err(err) = self.owned_card(scope, card) {
            log::warn!("{} rejected: {}", battle, err);
            return Err(err);
        }
        let grant = grant_for(&self.config.rewards, record.tier(), stat)?;

        match self.store.claim_reward(battle, card, grant)? {
            ClaimOutcome::Granted(boosted) => {
                log::info!("{} granted +{} {} to {}", battle, grant.amount, grant.stat, card);
                Ok(boosted)
            }
            ClaimOutcome::AlreadyClaimed(_) => {
                log::warn!("{} lost a concurrent claim on {}", scope, battle);
                Err(EngineError::RewardAlreadyClaimed { battle })
            }
        }
    }

    // === Statistics ===

    /// Aggregated statistics for `player`.
    pub fn player_stats(&self, player: PlayerId) -> EngineResult<PlayerStats> {
        Ok(self.store.load_stats(player)?)
    }
}
