//! Battle sequencing.
//!
//! A battle pairs the player's deck against the dungeon's sequence by
//! position (0 vs 0, 1 vs 1, ...). The shorter side sets the number of
//! clashes. Clashes are resolved strictly in index order and the log is
//! built eagerly, so a finished `Battle` is a complete, immutable record
//! that playback can step through.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::clash::{Clash, CombatCard};
use super::outcome::{classify, BattleStatus, Tally};
use crate::cards::{PlayerCardId, Stat};
use crate::core::{EngineError, EngineResult, PlayerScope};
use crate::dungeons::{Dungeon, DungeonId, DungeonTier};

/// Unique identifier for a battle. Also the reward idempotency key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BattleId(pub u64);

impl BattleId {
    /// Create a new battle ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BattleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Battle({})", self.0)
    }
}

/// Ordered clashes and their tally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    pub clashes: Vector<Clash>,
    pub tally: Tally,
}

/// Resolve every positional pairing in order.
///
/// Both sequences must be non-empty; nothing is resolved otherwise.
pub fn run_battle(player: &[CombatCard], dungeon: &[CombatCard]) -> EngineResult<BattleLog> {
    if player.is_empty() {
        return Err(EngineError::InvalidBattleInput {
            reason: "player deck is empty",
        });
    }
    if dungeon.is_empty() {
        return Err(EngineError::InvalidBattleInput {
            reason: "dungeon sequence is empty",
        });
    }

    let mut resolved = BattleLog::default();
    for (index, (p, d)) in player.iter().zip(dungeon.iter()).enumerate() {
        let clash = Clash::resolve(index as u32, *p, *d);
        log::debug!(
            "clash {}: {} wins by {}",
            clash.index,
            if clash.player_won() { "player" } else { "dungeon" },
            clash.reason
        );
        resolved.tally.record(clash.winner);
        resolved.clashes.push_back(clash);
    }

    debug_assert_eq!(resolved.tally.total() as usize, resolved.clashes.len());
    Ok(resolved)
}

/// A reward granted for a won battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardClaim {
    pub card: PlayerCardId,
    pub stat: Stat,
    pub amount: u32,
}

/// One attempt at one dungeon by one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    id: BattleId,
    scope: PlayerScope,
    dungeon: DungeonId,
    tier: DungeonTier,
    status: BattleStatus,
    clashes: Vector<Clash>,
    tally: Tally,
    started_at_ms: u64,
    finished_at_ms: Option<u64>,
    reward: Option<RewardClaim>,
}

impl Battle {
    /// Open an in-progress battle against `dungeon`.
    #[must_use]
    pub fn begin(id: BattleId, scope: PlayerScope, dungeon: &Dungeon, started_at_ms: u64) -> Self {
        Self {
            id,
            scope,
            dungeon: dungeon.id,
            tier: dungeon.tier,
            status: BattleStatus::InProgress,
            clashes: Vector::new(),
            tally: Tally::default(),
            started_at_ms,
            finished_at_ms: None,
            reward: None,
        }
    }

    /// Attach the resolved log and classify. Finalizes exactly once;
    /// later calls leave the battle untouched and return its status.
    pub fn conclude(&mut self, log: BattleLog, finished_at_ms: u64) -> BattleStatus {
        if self.status.is_final() {
            return self.status;
        }
        self.status = classify(log.tally);
        self.clashes = log.clashes;
        self.tally = log.tally;
        self.finished_at_ms = Some(finished_at_ms.max(self.started_at_ms));
        self.status
    }

    #[must_use]
    pub fn id(&self) -> BattleId {
        self.id
    }

    #[must_use]
    pub fn scope(&self) -> PlayerScope {
        self.scope
    }

    #[must_use]
    pub fn dungeon(&self) -> DungeonId {
        self.dungeon
    }

    #[must_use]
    pub fn tier(&self) -> DungeonTier {
        self.tier
    }

    #[must_use]
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    /// Clash log in combat order.
    #[must_use]
    pub fn clashes(&self) -> &Vector<Clash> {
        &self.clashes
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    #[must_use]
    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    #[must_use]
    pub fn finished_at_ms(&self) -> Option<u64> {
        self.finished_at_ms
    }

    /// Wall time from start to finalization, once finalized.
    #[must_use]
    pub fn duration_ms(&self) -> Option<u64> {
        self.finished_at_ms.map(|end| end.saturating_sub(self.started_at_ms))
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == BattleStatus::Won
    }

    /// Reward granted for this battle, if claimed.
    #[must_use]
    pub fn reward(&self) -> Option<RewardClaim> {
        self.reward
    }

    /// Record the granted reward. Only the store's claim path calls this.
    pub(crate) fn set_reward(&mut self, claim: RewardClaim) {
        self.reward = Some(claim);
    }
}
