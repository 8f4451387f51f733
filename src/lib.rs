//! # uno-duel
//!
//! Turn and animation engine for a two-player color/number matching card
//! game: one human, one scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Frame-Driven**: Nothing happens between calls. One `frame_update`
//!    runs due tasks, recomputes legality and steps every card once.
//!
//! 2. **Logical Time**: Delays (opponent thinking, deal pacing, the zoom
//!    pulse) are tasks on a clock advanced by a fixed tick, so a seed
//!    reproduces a whole game.
//!
//! 3. **Collaborators Behind Traits**: Rendering, layout, matching and the
//!    opponent are traits; the engine only writes target positions and
//!    issues draw calls.
//!
//! ## Architecture
//!
//! - **Card Arena**: Cards live in one map inside `GameState`, keyed by
//!   `CardId`. Zones hold ids only.
//!
//! - **Persistent History**: Completed actions go into an `im::Vector`, so
//!   snapshots of the state clone cheaply.
//!
//! ## Modules
//!
//! - `core`: Card ids, sides, state, actions, RNG, configuration
//! - `cards`: Cards and their animation state machines
//! - `zones`: Deck, pile and hands; drawing and playing
//! - `rules`: Matching rule and turn controller
//! - `opponent`: Opponent policies
//! - `schedule`: Deferred tasks on the logical clock
//! - `layout`: Target positions for every card
//! - `render`: Draw calls for a renderer
//! - `game`: The orchestrator tying it all together

pub mod core;
pub mod error;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod opponent;
pub mod schedule;
pub mod layout;
pub mod render;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, Side, SideMap,
    GameRng,
    ZoneKind, AnimationConfig, EngineConfig,
    Point,
    Action, ActionRecord,
    GameState,
};

pub use crate::error::{EngineError, Result};

pub use crate::cards::{Card, Color, Rank, Face, FlipState};

pub use crate::zones::{ZoneManager, DrawOutcome};

pub use crate::rules::{MatchingRule, ColorOrRank, TurnController, TurnPhase};

pub use crate::opponent::{OpponentPolicy, ColorBalanceOpponent, UniformOpponent};

pub use crate::schedule::{Scheduler, Task, TaskId};

pub use crate::layout::{LayoutEngine, TableLayout, NullLayout};

pub use crate::render::{DrawCall, Renderer};

pub use crate::game::{Game, GameBuilder, Activation};
