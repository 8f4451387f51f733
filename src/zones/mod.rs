//! Zone system for card locations.
//!
//! The table has four zones: the deck, the discard pile, and one hand per
//! side. Every card is in exactly one of them.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Zone identifier (from `core::config`)
//! - `ZoneManager`: Card location tracking and movement
//! - `DrawOutcome`: Result of drawing one card into a hand
//!
//! The draw and play mechanics themselves live on `GameState`
//! (see `mechanics`), because they touch both locations and cards.

pub mod manager;
pub mod mechanics;

pub use manager::ZoneManager;
pub use mechanics::DrawOutcome;

pub use crate::core::config::ZoneKind;
