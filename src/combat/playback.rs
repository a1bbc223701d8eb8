//! Sequential playback of a finished battle.
//!
//! The presentation layer reveals a battle one clash at a time. The cursor
//! walks the immutable clash log in index order and carries the running
//! tally, so the UI never re-derives a winner on its own.

use im::Vector;

use super::battle::Battle;
use super::clash::Clash;
use super::outcome::{BattleStatus, Tally};

/// One revealed clash and the tally after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackStep {
    pub clash: Clash,
    pub tally: Tally,
}

/// Cursor over a battle's clash log.
#[derive(Clone, Debug)]
pub struct BattlePlayback {
    clashes: Vector<Clash>,
    status: BattleStatus,
    cursor: usize,
    tally: Tally,
}

impl BattlePlayback {
    /// Start playback at the first clash. Cloning the log is O(1).
    #[must_use]
    pub fn new(battle: &Battle) -> Self {
        Self {
            clashes: battle.clashes().clone(),
            status: battle.status(),
            cursor: 0,
            tally: Tally::default(),
        }
    }

    /// Reveal the next clash.
    pub fn next_clash(&mut self) -> Option<PlaybackStep> {
        let clash = *self.clashes.get(self.cursor)?;
        self.cursor += 1;
        self.tally.record(clash.winner);
        Some(PlaybackStep {
            clash,
            tally: self.tally,
        })
    }

    /// Tally over the clashes revealed so far.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Clashes not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.clashes.len() - self.cursor
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Final status, available once every clash has been revealed.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleStatus> {
        self.is_finished().then_some(self.status)
    }
}

impl Iterator for BattlePlayback {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_clash()
    }
}
