//! Player identification and request scoping.
//!
//! ## PlayerId / GameId
//!
//! Opaque identifiers handed to the engine by the identity/session layer.
//! The engine never authenticates; it only accepts an already-resolved scope.
//!
//! ## PlayerScope
//!
//! A (player, game) pair. Every read and write the engine performs is
//! scoped by one of these: decks, battles, and progression all live inside
//! a single game session.

use serde::{Deserialize, Serialize};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Game session identifier.
///
/// A player may run several games; each has its own collection scope,
/// active deck, and battle history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// The authenticated (player, game) pair that scopes an engine call.
///
/// ```
/// use dungeon_ccg::core::{GameId, PlayerId, PlayerScope};
///
/// let scope = PlayerScope::new(PlayerId::new(7), GameId::new(1));
/// assert_eq!(scope.player, PlayerId::new(7));
/// assert_eq!(format!("{}", scope), "Player(7)/Game(1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerScope {
    /// The acting player.
    pub player: PlayerId,

    /// The game session the player is acting in.
    pub game: GameId,
}

impl PlayerScope {
    /// Create a new scope.
    #[must_use]
    pub const fn new(player: PlayerId, game: GameId) -> Self {
        Self { player, game }
    }
}

impl std::fmt::Display for PlayerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.player, self.game)
    }
}
