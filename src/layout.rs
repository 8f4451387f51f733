//! Table layout: where each card should be on screen.
//!
//! The engine never computes screen positions itself. After every change
//! to a zone it asks its `LayoutEngine` to write fresh target positions,
//! and each card eases towards its target on later frames.
//!
//! ## Key Types
//!
//! - `LayoutEngine`: The layout seam
//! - `TableLayout`: Hands along the top and bottom edges, deck and pile
//!   side by side in the middle
//! - `NullLayout`: Leaves every target where it is

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameState, Point, Side, ZoneKind};

/// Computes target positions for the cards on the table.
pub trait LayoutEngine: Send {
    /// Write target positions for every card in every zone.
    fn refresh(&mut self, state: &mut GameState);

    /// The viewport changed size.
    fn resize(&mut self, _width: i32, _height: i32) {}
}

/// Layout that never moves anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLayout;

impl LayoutEngine for NullLayout {
    fn refresh(&mut self, _state: &mut GameState) {}
}

/// The classic table arrangement.
///
/// Hands fan out horizontally, centered, overlapping more as they grow:
/// the human's along the bottom edge, the opponent's along the top. The
/// deck sits left of center and the pile right of center.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub width: i32,
    pub height: i32,
    pub card_width: i32,
    pub card_height: i32,

    /// Horizontal distance of deck and pile from the center line.
    pub center_gap: i32,

    /// Distance of each hand from its screen edge.
    pub edge_margin: i32,

    /// Extra overlap between neighbouring hand cards, per card in hand.
    pub overlap_per_card: i32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            card_width: 200,
            card_height: 250,
            center_gap: 170,
            edge_margin: 20,
            overlap_per_card: 7,
        }
    }
}

impl TableLayout {
    /// Layout for a viewport of the given size.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the card size.
    #[must_use]
    pub fn with_card_size(mut self, width: i32, height: i32) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Target point of the `index`-th of `count` cards in a hand.
    #[must_use]
    pub fn hand_slot(&self, side: Side, index: usize, count: usize) -> Point {
        let count = count as i32;
        let x_offset = -(count * self.overlap_per_card);
        let stride = self.card_width + x_offset;
        let hand_width = stride * count;
        let start = self.width / 2 - hand_width / 2 + x_offset / 2;

        let y = match side {
            Side::Human => self.height - self.card_height - self.edge_margin,
            Side::Opponent => self.edge_margin,
        };
        Point::new(start + stride * index as i32, y)
    }

    /// Resting point of every deck card.
    #[must_use]
    pub fn deck_slot(&self) -> Point {
        Point::new(
            self.width / 2 - self.card_width / 2 - self.center_gap,
            self.height / 2 - self.card_height / 2,
        )
    }

    /// Resting point of every pile card.
    #[must_use]
    pub fn pile_slot(&self) -> Point {
        Point::new(
            self.width / 2 - self.card_width / 2 + self.center_gap,
            self.height / 2 - self.card_height / 2,
        )
    }

    /// Topmost card a pointer at `point` would activate.
    ///
    /// Only the human hand and the deck react to the pointer; the hand is
    /// checked first. Within a zone the card drawn last wins.
    #[must_use]
    pub fn hit_test(&self, state: &GameState, point: Point) -> Option<CardId> {
        [ZoneKind::Hand(Side::Human), ZoneKind::Deck]
            .into_iter()
            .find_map(|zone| {
                state
                    .cards_in(zone)
                    .iter()
                    .rev()
                    .copied()
                    .find(|&id| state.card(id).is_some_and(|card| self.contains(card.position, point)))
            })
    }

    fn contains(&self, origin: Point, point: Point) -> bool {
        point.x >= origin.x
            && point.x < origin.x + self.card_width
            && point.y >= origin.y
            && point.y < origin.y + self.card_height
    }
}

impl LayoutEngine for TableLayout {
    fn refresh(&mut self, state: &mut GameState) {
        for side in Side::ALL {
            let hand: Vec<CardId> = state.hand(side).to_vec();
            let count = hand.len();
            for (index, id) in hand.into_iter().enumerate() {
                state.set_target_position(id, self.hand_slot(side, index, count));
            }
        }

        // The deck never animates into place.
        let deck_slot = self.deck_slot();
        for id in state.cards_in(ZoneKind::Deck).to_vec() {
            state.place(id, deck_slot);
        }

        let pile_slot = self.pile_slot();
        for id in state.cards_in(ZoneKind::Pile).to_vec() {
            state.set_target_position(id, pile_slot);
        }
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}
