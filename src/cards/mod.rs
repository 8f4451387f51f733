//! Cards and their animations.
//!
//! ## Key Types
//!
//! - `Card`: Identity (color, rank) plus animated visual state
//! - `Color`, `Rank`: The two properties the matching rule compares
//! - `Face`: Which side of the card is showing
//! - `Flip`, `Settle`, `Zoom`: Independent per-frame animation axes

pub mod animation;
pub mod card;

pub use animation::{ease_axis, Face, Flip, FlipState, Settle, Zoom, SCALE_UNIT};
pub use card::{Card, Color, Rank};
