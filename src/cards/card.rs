//! Cards: identity plus animated visual state.
//!
//! A `Card` never changes its color or rank. Everything else on it is
//! presentation state that the card advances itself, one step per frame,
//! in `update`.

use serde::{Deserialize, Serialize};

use super::animation::{ease_axis, Face, Flip, Settle, Zoom, SCALE_UNIT};
use crate::core::config::AnimationConfig;
use crate::core::entity::CardId;
use crate::core::geometry::Point;

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        write!(f, "{}", name)
    }
}

/// Card rank (the printed number), always below `Rank::COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Number of distinct ranks.
    pub const COUNT: u8 = 7;

    /// Create a rank. `value` must be below `Rank::COUNT`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < Self::COUNT, "rank out of range");
        Self(value)
    }

    /// Create a rank, or `None` if `value` is out of range.
    #[must_use]
    pub const fn try_new(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| format!("rank {} out of range", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: Color,
    pub rank: Rank,

    /// Where the card is drawn this frame.
    pub position: Point,

    /// Where the layout wants the card to be.
    pub target_position: Point,

    /// Draw order within its zone; higher is closer to the viewer.
    pub stack_index: usize,

    flip: Flip,
    settle: Settle,
    zoom: Zoom,
}

impl Card {
    /// Create a face-up card at the origin.
    #[must_use]
    pub fn new(id: CardId, color: Color, rank: Rank) -> Self {
        Self {
            id,
            color,
            rank,
            position: Point::ORIGIN,
            target_position: Point::ORIGIN,
            stack_index: 0,
            flip: Flip::default(),
            settle: Settle::default(),
            zoom: Zoom::default(),
        }
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.flip.face()
    }

    /// True once a flip to the back has completed.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flip.is_flipped()
    }

    /// Horizontal scale in `[-1.0, 1.0]`; negative shows the back.
    #[must_use]
    pub fn horizontal_scale(&self) -> f32 {
        f32::from(self.flip.scale_units()) / f32::from(SCALE_UNIT)
    }

    /// Rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> i32 {
        self.settle.rotation()
    }

    /// Angle the settle animation is heading for.
    #[must_use]
    pub fn settle_target(&self) -> i32 {
        self.settle.target()
    }

    /// Extra label size from the zoom pulse, 0 at rest.
    #[must_use]
    pub fn zoom_level(&self, animation: &AnimationConfig) -> i32 {
        self.zoom.level(animation.zoom_max)
    }

    /// True while any triggered animation or the position easing is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flip.state() != super::animation::FlipState::Idle
            || self.settle.is_active()
            || self.zoom.is_active()
            || self.position != self.target_position
    }

    // === Triggers ===

    /// Turn the card over, animated.
    pub fn flip(&mut self) {
        self.flip.start();
    }

    /// Turn the card over instantly. Used while building a deck so the
    /// whole stack does not visibly flip at startup.
    pub fn flip_instant(&mut self) {
        self.flip.complete_now();
    }

    /// Ease the rotation toward `degrees`.
    pub fn settle(&mut self, degrees: i32) {
        self.settle.start(degrees);
    }

    /// Set the rotation without animating.
    pub fn set_rotation(&mut self, degrees: i32) {
        self.settle.set_rotation(degrees);
    }

    /// Start the rank label pulse.
    pub fn zoom(&mut self) {
        self.zoom.start();
    }

    /// Place the card at `point` immediately, with nothing left to ease.
    pub fn snap_to(&mut self, point: Point) {
        self.position = point;
        self.target_position = point;
    }

    /// Advance every animation axis by one frame.
    pub fn update(&mut self, animation: &AnimationConfig) {
        self.flip.step(animation.flip_step);

        self.position = Point::new(
            ease_axis(self.position.x, self.target_position.x, animation.ease_speed),
            ease_axis(self.position.y, self.target_position.y, animation.ease_speed),
        );

        self.settle.step(animation.settle_step);
        self.zoom.step(animation.zoom_step, animation.zoom_max);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color, self.rank)
    }
}
