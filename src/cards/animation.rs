//! Per-card animation state machines.
//!
//! Each axis advances by one step per frame and runs independently of the
//! others:
//!
//! - `Flip`: horizontal scale sweeps through zero to turn the card over
//! - `Settle`: rotation eases toward a target angle
//! - `Zoom`: the rank label pulses up and back once
//! - `ease_axis`: position coordinates close in on their target
//!
//! The horizontal scale is held in exact hundredths so that a finished
//! flip always lands on exactly -1 or +1.

use serde::{Deserialize, Serialize};

/// Horizontal scale units per 1.0.
pub const SCALE_UNIT: i16 = 100;

/// Which side of the card faces the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
}

/// Progress of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipState {
    Idle,
    FlippingToBack,
    FlippingToFront,
}

/// Flip animation: face, horizontal scale, and the committed flipped flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip {
    state: FlipState,
    face: Face,
    scale: i16,
    flipped: bool,
}

impl Default for Flip {
    fn default() -> Self {
        Self {
            state: FlipState::Idle,
            face: Face::Up,
            scale: SCALE_UNIT,
            flipped: false,
        }
    }
}

impl Flip {
    #[must_use]
    pub fn state(&self) -> FlipState {
        self.state
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Committed orientation: true once a flip to the back has finished.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Horizontal scale in hundredths, `-SCALE_UNIT..=SCALE_UNIT`.
    #[must_use]
    pub fn scale_units(&self) -> i16 {
        self.scale
    }

    /// Start turning the card over. Ignored while a flip is in progress.
    pub fn start(&mut self) {
        if self.state != FlipState::Idle {
            return;
        }
        self.state = if self.flipped {
            FlipState::FlippingToFront
        } else {
            FlipState::FlippingToBack
        };
    }

    /// Turn the card over with no intermediate frames.
    pub fn complete_now(&mut self) {
        let to_back = match self.state {
            FlipState::FlippingToBack => true,
            FlipState::FlippingToFront => false,
            FlipState::Idle => !self.flipped,
        };
        self.state = FlipState::Idle;
        self.flipped = to_back;
        if to_back {
            self.face = Face::Down;
            self.scale = -SCALE_UNIT;
        } else {
            self.face = Face::Up;
            self.scale = SCALE_UNIT;
        }
    }

    pub fn step(&mut self, step: i16) {
        match self.state {
            FlipState::Idle => {}
            FlipState::FlippingToBack => {
                if self.scale > -SCALE_UNIT {
                    self.scale = (self.scale - step).max(-SCALE_UNIT);
                    if self.scale < 0 {
                        self.face = Face::Down;
                    }
                } else {
                    self.state = FlipState::Idle;
                    self.flipped = true;
                }
            }
            FlipState::FlippingToFront => {
                if self.scale < SCALE_UNIT {
                    self.scale = (self.scale + step).min(SCALE_UNIT);
                    if self.scale > 0 {
                        self.face = Face::Up;
                    }
                } else {
                    self.state = FlipState::Idle;
                    self.flipped = false;
                }
            }
        }
    }
}

/// Rotation settle animation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settle {
    rotation: i32,
    target: i32,
    active: bool,
}

impl Settle {
    /// Current rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    #[must_use]
    pub fn target(&self) -> i32 {
        self.target
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Jump to an angle without animating.
    pub fn set_rotation(&mut self, degrees: i32) {
        self.rotation = degrees;
        self.target = degrees;
        self.active = false;
    }

    /// Ease toward `degrees`. Retargets an animation already in progress.
    pub fn start(&mut self, degrees: i32) {
        self.target = degrees;
        self.active = true;
    }

    pub fn step(&mut self, stride: i32) {
        if !self.active {
            return;
        }
        let gap = (self.rotation - self.target).abs();
        let delta = if gap > stride { stride } else { 1 };

        if self.rotation > self.target {
            self.rotation -= delta;
        } else if self.rotation < self.target {
            self.rotation += delta;
        } else {
            self.active = false;
        }
    }
}

/// Zoom pulse of the rank label.
///
/// `progress` runs from 0 to `2 * max`; the visible offset is
/// `progress - max`, so the label grows until the midpoint and shrinks
/// back by the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zoom {
    progress: i32,
    active: bool,
}

impl Zoom {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Signed pulse offset, `-max` at rest.
    #[must_use]
    pub fn offset(&self, max: i32) -> i32 {
        self.progress - max
    }

    /// Extra label size: 0 at rest, `max` at the peak of the pulse.
    #[must_use]
    pub fn level(&self, max: i32) -> i32 {
        max - self.offset(max).abs()
    }

    /// Start a pulse. Ignored while one is running.
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn step(&mut self, step: i32, max: i32) {
        if !self.active {
            return;
        }
        if self.progress < 2 * max {
            self.progress = (self.progress + step).min(2 * max);
        } else {
            self.active = false;
            self.progress = 0;
        }
    }
}

/// Move one coordinate toward its target.
///
/// Moves by `speed` while the gap exceeds it, then one unit at a time.
/// Never overshoots and never moves away from the target.
#[must_use]
pub fn ease_axis(current: i32, target: i32, speed: i32) -> i32 {
    let gap = target - current;
    if gap == 0 {
        return current;
    }
    let stride = if gap.abs() > speed { speed } else { 1 };
    current + stride * gap.signum()
}
