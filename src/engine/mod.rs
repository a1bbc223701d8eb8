//! Engine service: the public entry points.
//!
//! ## Key Types
//!
//! - `GameEngine`: Battles, progression queries, reward claims, stats
//! - `Clock`: Time source for battle timing (`SystemClock`, `ManualClock`)

pub mod clock;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use service::GameEngine;
