//! Dungeon registry: authored dungeons grouped by environment.

use rustc_hash::FxHashMap;

use super::dungeon::{Dungeon, DungeonId, EnvironmentId};
use crate::cards::CardRegistry;
use crate::core::{EngineError, EngineResult};

/// Registry of dungeon definitions.
#[derive(Clone, Debug, Default)]
pub struct DungeonRegistry {
    dungeons: FxHashMap<DungeonId, Dungeon>,
}

impl DungeonRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dungeon after validating it against `cards`.
    pub fn register(&mut self, dungeon: Dungeon, cards: &CardRegistry) -> EngineResult<()> {
        dungeon.validate(cards)?;
        if self.dungeons.contains_key(&dungeon.id) {
            return Err(EngineError::InvalidContent {
                reason: format!("{} already registered", dungeon.id),
            });
        }
        self.dungeons.insert(dungeon.id, dungeon);
        Ok(())
    }

    /// Get a dungeon by ID.
    #[must_use]
    pub fn get(&self, id: DungeonId) -> Option<&Dungeon> {
        self.dungeons.get(&id)
    }

    /// Get a dungeon by ID or report it missing.
    pub fn require(&self, id: DungeonId) -> EngineResult<&Dungeon> {
        self.get(id).ok_or(EngineError::UnknownDungeon(id))
    }

    /// Get the number of registered dungeons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dungeons.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dungeons.is_empty()
    }

    /// Dungeons of one environment, sorted by `order` then ID.
    #[must_use]
    pub fn in_environment(&self, environment: EnvironmentId) -> Vec<&Dungeon> {
        let mut found: Vec<&Dungeon> = self
            .dungeons
            .values()
            .filter(|d| d.environment == environment)
            .collect();
        found.sort_by_key(|d| (d.order, d.id));
        found
    }
}
