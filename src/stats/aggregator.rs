//! Per-player statistics, updated incrementally.
//!
//! Two entry points touch the counters:
//! - `on_clash_resolved` once per clash
//! - `on_battle_ended` once per finalized battle
//!
//! Updates are additive and never recomputed from history. A replayed
//! event is counted twice; callers deliver each event exactly once.

use serde::{Deserialize, Serialize};

use super::counters::{ReasonCounts, TierCounts, TypeCounts};
use crate::combat::{Battle, BattleStatus, Clash, Side};
use crate::core::PlayerId;

/// Aggregate counters for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: PlayerId,

    // === Clashes ===
    pub total_clashes: u32,
    pub clashes_won: u32,
    pub clashes_lost: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    /// Clash wins keyed by the player's card type.
    pub wins_by_type: TypeCounts,
    /// Clash losses keyed by the player's card type.
    pub losses_by_type: TypeCounts,
    pub wins_by_reason: ReasonCounts,
    pub losses_by_reason: ReasonCounts,
    /// Largest damage a player card brought into a single clash.
    pub highest_clash_damage: u32,

    // === Battles ===
    pub total_battles: u32,
    pub battles_won: u32,
    pub battles_lost: u32,
    /// Won battles keyed by dungeon tier.
    pub completions_by_tier: TierCounts,
    pub current_win_streak: u32,
    pub current_lose_streak: u32,
    pub longest_win_streak: u32,
    pub longest_lose_streak: u32,

    // === Timing ===
    pub total_battle_time_ms: u64,
    pub average_battle_time_ms: u64,
    pub fastest_win_ms: Option<u64>,
}

impl PlayerStats {
    /// Fresh counters for `player`.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            total_clashes: 0,
            clashes_won: 0,
            clashes_lost: 0,
            damage_dealt: 0,
            damage_taken: 0,
            wins_by_type: TypeCounts::default(),
            losses_by_type: TypeCounts::default(),
            wins_by_reason: ReasonCounts::default(),
            losses_by_reason: ReasonCounts::default(),
            highest_clash_damage: 0,
            total_battles: 0,
            battles_won: 0,
            battles_lost: 0,
            completions_by_tier: TierCounts::default(),
            current_win_streak: 0,
            current_lose_streak: 0,
            longest_win_streak: 0,
            longest_lose_streak: 0,
            total_battle_time_ms: 0,
            average_battle_time_ms: 0,
            fastest_win_ms: None,
        }
    }

    /// Fold one resolved clash into the counters.
    pub fn on_clash_resolved(&mut self, clash: &Clash) {
        self.total_clashes += 1;
        self.damage_dealt += u64::from(clash.player.damage);
        self.damage_taken += u64::from(clash.dungeon.damage);

        match clash.winner {
            Side::Player => {
                self.clashes_won += 1;
                self.wins_by_type.increment(clash.player.card_type);
                self.wins_by_reason.increment(clash.reason);
            }
            Side::Dungeon => {
                self.clashes_lost += 1;
                self.losses_by_type.increment(clash.player.card_type);
                self.losses_by_reason.increment(clash.reason);
            }
        }

        if clash.player.damage > self.highest_clash_damage {
            self.highest_clash_damage = clash.player.damage;
        }
    }

    /// Fold one finalized battle into the counters.
    ///
    /// In-progress battles are ignored.
    pub fn on_battle_ended(&mut self, battle: &Battle) {
        let won = match battle.status() {
            BattleStatus::Won => true,
            BattleStatus::Lost => false,
            BattleStatus::InProgress => {
                log::warn!("{} ended while still in progress; stats skipped", battle.id());
                return;
            }
        };

        self.total_battles += 1;
        if won {
            self.battles_won += 1;
            self.completions_by_tier.increment(battle.tier());
            self.current_win_streak += 1;
            self.current_lose_streak = 0;
            if self.current_win_streak > self.longest_win_streak {
                self.longest_win_streak = self.current_win_streak;
            }
        } else {
            self.battles_lost += 1;
            self.current_lose_streak += 1;
            self.current_win_streak = 0;
            if self.current_lose_streak > self.longest_lose_streak {
                self.longest_lose_streak = self.current_lose_streak;
            }
        }

        let duration = battle.duration_ms().unwrap_or(0);
        self.total_battle_time_ms += duration;
        self.average_battle_time_ms = self.total_battle_time_ms / u64::from(self.total_battles);

        if won && self.fastest_win_ms.map_or(true, |fastest| duration < fastest) {
            self.fastest_win_ms = Some(duration);
        }
    }

    /// Fold a recorded battle: every clash in order, then the battle end.
    pub fn on_battle_recorded(&mut self, battle: &Battle) {
        for clash in battle.clashes() {
            self.on_clash_resolved(clash);
        }
        self.on_battle_ended(battle);
    }

    /// Fraction of battles won (0.0 with no battles).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_battles == 0 {
            0.0
        } else {
            f64::from(self.battles_won) / f64::from(self.total_battles)
        }
    }

    /// Fraction of clashes won (0.0 with no clashes).
    #[must_use]
    pub fn clash_win_rate(&self) -> f64 {
        if self.total_clashes == 0 {
            0.0
        } else {
            f64::from(self.clashes_won) / f64::from(self.total_clashes)
        }
    }
}
