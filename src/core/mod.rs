//! Core engine types: ids, sides, state, actions, RNG, configuration.
//!
//! Everything else in the crate builds on these. `GameState` is the one
//! value that holds a whole table; the other types are small and `Copy`
//! where they can be.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod geometry;
pub mod action;
pub mod state;

pub use entity::CardId;
pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{AnimationConfig, EngineConfig, ZoneKind};
pub use geometry::Point;
pub use action::{Action, ActionRecord};
pub use state::GameState;
