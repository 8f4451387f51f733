//! Engine configuration.
//!
//! - `ZoneKind`: The four card containers on the table
//! - `AnimationConfig`: Per-frame step sizes of the card animations
//! - `EngineConfig`: Deck, hand, and timing parameters
//!
//! The defaults reproduce the classic table: a 108-card deck of seven
//! ranks, seven-card opening hands, a twenty-card hand limit, and the
//! animation speeds tuned for a ~60 Hz frame loop.

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::cards::Rank;
use crate::error::{EngineError, Result};

/// Zone identifier. The table always has exactly these four zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// The face-down draw stack. Top = last card.
    Deck,
    /// The discard pile. Top = last played card.
    Pile,
    /// A player's hand, in arrival order.
    Hand(Side),
}

impl ZoneKind {
    /// Every zone, in frame update order.
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Hand(Side::Human),
        ZoneKind::Hand(Side::Opponent),
        ZoneKind::Deck,
        ZoneKind::Pile,
    ];

    /// The owning side, for hands.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            ZoneKind::Hand(side) => Some(side),
            ZoneKind::Deck | ZoneKind::Pile => None,
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneKind::Deck => write!(f, "Deck"),
            ZoneKind::Pile => write!(f, "Pile"),
            ZoneKind::Hand(side) => write!(f, "{} Hand", side),
        }
    }
}

/// Step sizes applied once per frame by `Card::update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Horizontal scale change per frame, in hundredths (10 = 0.1).
    pub flip_step: i16,

    /// Degrees of rotation closed per frame while the gap is large.
    /// Within this distance the card turns one degree per frame.
    pub settle_step: i32,

    /// Units moved per axis per frame while far from the target.
    /// Within this distance the card moves one unit per frame.
    pub ease_speed: i32,

    /// Zoom offset increase per frame.
    pub zoom_step: i32,

    /// Peak zoom offset of the pulse.
    pub zoom_max: i32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            flip_step: 10,
            settle_step: 15,
            ease_speed: 25,
            zoom_step: 2,
            zoom_max: 30,
        }
    }
}

/// Complete engine configuration.
///
/// ```
/// use uno_duel::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_hand_limit(12)
///     .with_thinking_delay(100, 200);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.deck_size, 108);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cards in a freshly built deck.
    pub deck_size: usize,

    /// Number of distinct ranks; ranks run `0..rank_count`.
    pub rank_count: u8,

    /// Cards dealt to each side at the start of a game.
    pub starting_hand: usize,

    /// Draws into a hand holding this many cards are dropped.
    pub hand_limit: usize,

    /// Logical milliseconds per `frame_update`.
    pub tick_ms: u64,

    /// Pause between consecutive cards of one draw request.
    pub draw_interval_ms: u64,

    /// Delay between a human draw and its zoom pulse, so the pulse shows
    /// once the card has arrived in the hand.
    pub zoom_delay_ms: u64,

    /// Shortest opponent thinking delay.
    pub thinking_min_ms: u64,

    /// Longest opponent thinking delay.
    pub thinking_max_ms: u64,

    /// Played cards land rotated by up to this many degrees either way.
    pub settle_spread: i32,

    /// Per-frame animation steps.
    pub animation: AnimationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deck_size: 108,
            rank_count: 7,
            starting_hand: 7,
            hand_limit: 20,
            tick_ms: 16,
            draw_interval_ms: 350,
            zoom_delay_ms: 400,
            thinking_min_ms: 750,
            thinking_max_ms: 1500,
            settle_spread: 180,
            animation: AnimationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand(mut self, size: usize) -> Self {
        self.starting_hand = size;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the frame tick.
    #[must_use]
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Set the opponent thinking delay bounds.
    #[must_use]
    pub fn with_thinking_delay(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.thinking_min_ms = min_ms;
        self.thinking_max_ms = max_ms;
        self
    }

    /// Set the animation steps.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(EngineError::InvalidConfig(msg.to_string()));

        if self.deck_size == 0 {
            return fail("deck_size must be positive");
        }
        if self.rank_count == 0 || self.rank_count > Rank::COUNT {
            return fail("rank_count must be between 1 and 7");
        }
        if self.hand_limit == 0 {
            return fail("hand_limit must be positive");
        }
        if self.tick_ms == 0 {
            return fail("tick_ms must be positive");
        }
        if self.thinking_min_ms > self.thinking_max_ms {
            return fail("thinking_min_ms exceeds thinking_max_ms");
        }
        if self.settle_spread < 0 {
            return fail("settle_spread must not be negative");
        }

        let anim = &self.animation;
        if anim.flip_step <= 0 || anim.settle_step <= 0 || anim.ease_speed <= 0 || anim.zoom_step <= 0 {
            return fail("animation steps must be positive");
        }
        if anim.zoom_max <= 0 {
            return fail("zoom_max must be positive");
        }

        Ok(())
    }
}
