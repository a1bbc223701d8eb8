//! Card system: types, templates, owned copies, decks, and registry.
//!
//! ## Key Types
//!
//! - `CardType`: The four elements and their advantage cycle
//! - `BaseCard`: Immutable authored template
//! - `PlayerCard`: A player's copy of a template, with permanent boosts
//! - `Deck`: Ordered attack sequence of up to six player cards
//! - `CardRegistry`: Base card lookup

pub mod deck;
pub mod definition;
pub mod element;
pub mod instance;
pub mod registry;

pub use deck::Deck;
pub use definition::{BaseCard, CardId, MIN_BASE_DAMAGE, MIN_BASE_HEALTH};
pub use element::CardType;
pub use instance::{PlayerCard, PlayerCardId, Stat};
pub use registry::CardRegistry;
