//! Dungeons: authored opponent sequences, tiers, and environments.
//!
//! ## Key Types
//!
//! - `Dungeon`: Ordered slots plus tier, progression rank, unlock threshold
//! - `DungeonCardSlot`: A world card, or a leader with one stat doubled
//! - `DungeonTier`: Size class that selects the reward
//! - `DungeonRegistry`: Lookup and per-environment listing

pub mod dungeon;
pub mod registry;
pub mod slot;

pub use dungeon::{Dungeon, DungeonId, DungeonTier, EnvironmentId};
pub use registry::DungeonRegistry;
pub use slot::DungeonCardSlot;
