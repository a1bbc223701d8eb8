//! Progression gate - may a player attempt a dungeon?
//!
//! The lowest-`order` dungeon of each environment is always open. Any
//! other dungeon opens once the player's won-battle count reaches its
//! `required_wins`. Dungeons are checked independently, so crossing
//! several thresholds at once opens several dungeons at once.
//!
//! The win count is a read-side aggregate over battle history; the gate
//! keeps no state of its own beyond the per-environment lowest order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};
use crate::dungeons::{Dungeon, DungeonId, EnvironmentId};

/// Why a dungeon is or is not available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LockStatus {
    /// First dungeon of its environment.
    AlwaysOpen,
    /// Threshold reached.
    Unlocked,
    /// Threshold not reached.
    Locked { required: u32, current: u32 },
}

impl LockStatus {
    /// Can the dungeon be attempted?
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, LockStatus::Locked { .. })
    }
}

/// A dungeon and its availability, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonAccess {
    pub dungeon: DungeonId,
    pub name: String,
    pub order: u32,
    pub status: LockStatus,
}

/// Unlock rule over a set of dungeons.
#[derive(Clone, Debug, Default)]
pub struct ProgressionGate {
    first_order: FxHashMap<EnvironmentId, u32>,
}

impl ProgressionGate {
    /// Build a gate that knows the lowest order of each environment.
    pub fn new<'a>(dungeons: impl IntoIterator<Item = &'a Dungeon>) -> Self {
        let mut first_order: FxHashMap<EnvironmentId, u32> = FxHashMap::default();
        for dungeon in dungeons {
            first_order
                .entry(dungeon.environment)
                .and_modify(|lowest| *lowest = (*lowest).min(dungeon.order))
                .or_insert(dungeon.order);
        }
        Self { first_order }
    }

    /// Is `dungeon` its environment's first dungeon?
    ///
    /// A dungeon from an environment the gate was not built over is never
    /// first; it falls back to its own threshold.
    #[must_use]
    pub fn is_first(&self, dungeon: &Dungeon) -> bool {
        self.first_order
            .get(&dungeon.environment)
            .map_or(false, |lowest| dungeon.order <= *lowest)
    }

    /// Availability of `dungeon` at `cumulative_wins`.
    #[must_use]
    pub fn status(&self, dungeon: &Dungeon, cumulative_wins: u32) -> LockStatus {
        if self.is_first(dungeon) {
            LockStatus::AlwaysOpen
        } else if cumulative_wins >= dungeon.required_wins {
            LockStatus::Unlocked
        } else {
            LockStatus::Locked {
                required: dungeon.required_wins,
                current: cumulative_wins,
            }
        }
    }

    /// May `dungeon` be attempted at `cumulative_wins`?
    #[must_use]
    pub fn is_unlocked(&self, dungeon: &Dungeon, cumulative_wins: u32) -> bool {
        self.status(dungeon, cumulative_wins).is_open()
    }

    /// Refuse a locked dungeon.
    pub fn check(&self, dungeon: &Dungeon, cumulative_wins: u32) -> EngineResult<()> {
        match self.status(dungeon, cumulative_wins) {
            LockStatus::Locked { required, current } => Err(EngineError::DungeonLocked {
                dungeon: dungeon.id,
                required,
                current,
            }),
            _ => Ok(()),
        }
    }

    /// Availability of every dungeon in `dungeons`, in the given order.
    pub fn access<'a>(
        &self,
        dungeons: impl IntoIterator<Item = &'a Dungeon>,
        cumulative_wins: u32,
    ) -> Vec<DungeonAccess> {
        dungeons
            .into_iter()
            .map(|d| DungeonAccess {
                dungeon: d.id,
                name: d.name.clone(),
                order: d.order,
                status: self.status(d, cumulative_wins),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeons::DungeonTier;
    use proptest::prelude::*;

    fn dungeon(id: u32, env: u32, order: u32, required: u32) -> Dungeon {
        Dungeon::new(
            DungeonId::new(id),
            format!("D{}", id),
            EnvironmentId::new(env),
            DungeonTier::SimpleEncounter,
        )
        .with_order(order)
        .with_required_wins(required)
    }

    #[test]
    fn test_threshold() {
        let first = dungeon(1, 1, 0, 0);
        let third = dungeon(2, 1, 2, 3);
        let gate = ProgressionGate::new([&first, &third]);

        assert!(!gate.is_unlocked(&third, 2));
        assert!(gate.is_unlocked(&third, 3));
        assert_eq!(gate.status(&third, 2), LockStatus::Locked { required: 3, current: 2 });
        assert_eq!(gate.status(&third, 3), LockStatus::Unlocked);
    }

    #[test]
    fn test_first_dungeon_ignores_threshold() {
        let first = dungeon(1, 1, 1, 10);
        let later = dungeon(2, 1, 5, 0);
        let gate = ProgressionGate::new([&first, &later]);

        assert_eq!(gate.status(&first, 0), LockStatus::AlwaysOpen);
        assert_eq!(gate.status(&later, 0), LockStatus::Unlocked);
    }

    #[test]
    fn test_environments_are_separate() {
        let a = dungeon(1, 1, 0, 0);
        let b = dungeon(2, 2, 4, 9);
        let gate = ProgressionGate::new([&a, &b]);

        // Lowest order in environment 2 is 4.
        assert_eq!(gate.status(&b, 0), LockStatus::AlwaysOpen);
    }

    #[test]
    fn test_unknown_environment_uses_threshold() {
        let stray = dungeon(7, 3, 0, 3);
        let gate = ProgressionGate::new(std::iter::empty());

        assert!(!gate.is_first(&stray));
        assert!(!gate.is_unlocked(&stray, 0));
        assert_eq!(gate.status(&stray, 3), LockStatus::Unlocked);
    }

    #[test]
    fn test_multiple_unlock_at_once() {
        let dungeons = [dungeon(1, 1, 0, 0), dungeon(2, 1, 1, 2), dungeon(3, 1, 2, 2)];
        let gate = ProgressionGate::new(&dungeons);

        let open: Vec<_> = gate
            .access(&dungeons, 2)
            .into_iter()
            .filter(|a| a.status.is_open())
            .map(|a| a.dungeon.raw())
            .collect();
        assert_eq!(open, vec![1, 2, 3]);
    }

    #[test]
    fn test_check_error() {
        let dungeons = [dungeon(1, 1, 0, 0), dungeon(2, 1, 1, 4)];
        let gate = ProgressionGate::new(&dungeons);

        assert!(gate.check(&dungeons[0], 0).is_ok());
        assert_eq!(
            gate.check(&dungeons[1], 1),
            Err(EngineError::DungeonLocked {
                dungeon: DungeonId::new(2),
                required: 4,
                current: 1,
            })
        );
    }

    proptest! {
        #[test]
        fn prop_unlock_is_monotone(required in 0u32..50, n in 0u32..50, extra in 0u32..50) {
            let dungeons = [dungeon(1, 1, 0, 0), dungeon(2, 1, 1, required)];
            let gate = ProgressionGate::new(&dungeons);

            if gate.is_unlocked(&dungeons[1], n) {
                prop_assert!(gate.is_unlocked(&dungeons[1], n + extra));
            }
        }
    }
}
