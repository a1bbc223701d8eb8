//! Rewards: tier-fixed permanent boosts for won battles.
//!
//! `apply_reward` is pure. The at-most-once guarantee per battle lives at
//! the persistence boundary (`store::BattleStore::claim_reward`) and is
//! reached through `GameEngine::claim_reward`.

pub mod apply;
pub mod table;

pub use apply::{apply_reward, boosted, grant_for};
pub use table::{RewardGrant, RewardTable};
