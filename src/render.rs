//! Draw calls for the renderer.
//!
//! The engine paints nothing itself. Each frame it hands a `Renderer` one
//! `DrawCall` per visible card, back to front: the human hand, the
//! opponent hand, the deck, then the pile. Only the top few cards of the
//! deck and pile are emitted once those stacks grow, since everything
//! below is hidden anyway.

use serde::{Deserialize, Serialize};

use crate::cards::{Color, Face, Rank};
use crate::core::{AnimationConfig, CardId, GameState, Point, Side, ZoneKind};

/// Deck cards emitted once the deck is large.
pub const DECK_VISIBLE: usize = 5;

/// Pile cards emitted once the pile is large.
pub const PILE_VISIBLE: usize = 4;

/// Paint order, back to front.
pub const PAINT_ORDER: [ZoneKind; 4] = [
    ZoneKind::Hand(Side::Human),
    ZoneKind::Hand(Side::Opponent),
    ZoneKind::Deck,
    ZoneKind::Pile,
];

/// Everything a renderer needs to paint one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub card: CardId,
    pub zone: ZoneKind,
    pub color: Color,
    pub rank: Rank,
    pub position: Point,

    /// Degrees.
    pub rotation: i32,

    /// In `[-1.0, 1.0]`; the renderer squashes the card horizontally by
    /// its absolute value.
    pub horizontal_scale: f32,

    pub face: Face,

    /// Draw the playable highlight.
    pub playable: bool,

    /// Extra rank label size from the zoom pulse.
    pub zoom_level: i32,
}

/// Paints cards.
pub trait Renderer {
    fn draw_card(&mut self, call: &DrawCall);
}

impl<F: FnMut(&DrawCall)> Renderer for F {
    fn draw_card(&mut self, call: &DrawCall) {
        self(call)
    }
}

/// First index of a stack worth drawing.
///
/// A stack holding more than twice `keep` cards only shows its top `keep`.
#[must_use]
pub fn visible_from(len: usize, keep: usize) -> usize {
    if len > keep * 2 {
        len - keep
    } else {
        0
    }
}

fn visible_ids(state: &GameState, zone: ZoneKind) -> &[CardId] {
    let ids = state.cards_in(zone);
    let start = match zone {
        ZoneKind::Deck => visible_from(ids.len(), DECK_VISIBLE),
        ZoneKind::Pile => visible_from(ids.len(), PILE_VISIBLE),
        ZoneKind::Hand(_) => 0,
    };
    &ids[start..]
}

fn draw_call(state: &GameState, zone: ZoneKind, id: CardId, animation: &AnimationConfig) -> Option<DrawCall> {
    let card = state.card(id)?;
    Some(DrawCall {
        card: id,
        zone,
        color: card.color,
        rank: card.rank,
        position: card.position,
        rotation: card.rotation(),
        horizontal_scale: card.horizontal_scale(),
        face: card.face(),
        playable: state.turn.is_playable(id),
        zoom_level: card.zoom_level(animation),
    })
}

/// Issue this frame's draw calls, back to front.
pub fn render(state: &GameState, renderer: &mut dyn Renderer) {
    let animation = &state.config().animation;
    for zone in PAINT_ORDER {
        for &id in visible_ids(state, zone) {
            if let Some(call) = draw_call(state, zone, id, animation) {
                renderer.draw_card(&call);
            }
        }
    }
}

/// This frame's draw calls, back to front.
#[must_use]
pub fn draw_calls(state: &GameState) -> Vec<DrawCall> {
    let mut calls = Vec::new();
    render(state, &mut |call: &DrawCall| calls.push(call.clone()));
    calls
}
