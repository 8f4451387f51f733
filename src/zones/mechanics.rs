//! Drawing and playing cards.
//!
//! Both operations are a single zone move plus the animation triggers that
//! go with it. Pacing of multi-card draws and the zoom pulse that follows a
//! human draw are scheduled by the orchestrator; everything here happens
//! within one call.

use tracing::{debug, trace};

use crate::core::{CardId, GameState, Side, ZoneKind};

/// Result of drawing one card into a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The card moved from the deck top into the hand.
    Drawn(CardId),
    /// The hand is at its limit; nothing moved.
    HandFull,
    /// The deck was empty and rebuilding it produced no cards.
    DeckExhausted,
}

impl DrawOutcome {
    /// The drawn card, if any.
    #[must_use]
    pub fn card(self) -> Option<CardId> {
        match self {
            DrawOutcome::Drawn(card) => Some(card),
            DrawOutcome::HandFull | DrawOutcome::DeckExhausted => None,
        }
    }
}

impl GameState {
    /// Move the deck's top card into `side`'s hand.
    ///
    /// An empty deck is rebuilt first. The card's tilt settles back to
    /// zero; a card drawn by the human also turns face-up.
    pub fn draw_one(&mut self, side: Side) -> DrawOutcome {
        if self.zones.zone_size(ZoneKind::Deck) == 0 {
            self.build_deck();
        }

        let hand = ZoneKind::Hand(side);
        if self.zones.zone_size(hand) >= self.config().hand_limit {
            debug!(side = %side, limit = self.config().hand_limit, "hand full, draw dropped");
            return DrawOutcome::HandFull;
        }

        let Some(id) = self.top_of(ZoneKind::Deck) else {
            return DrawOutcome::DeckExhausted;
        };
        self.move_card(id, hand);

        if let Some(card) = self.card_mut(id) {
            card.settle(0);
            if side.is_human() {
                card.flip();
            }
        }

        trace!(side = %side, card = %id, "drew card");
        DrawOutcome::Drawn(id)
    }

    /// Move a card from `side`'s hand onto the pile, landing at
    /// `settle_angle` degrees.
    ///
    /// The opponent's cards are face-down in hand and turn face-up as they
    /// land. Returns false, changing nothing, if the card is not in that
    /// hand.
    pub fn play_card(&mut self, side: Side, id: CardId, settle_angle: i32) -> bool {
        if !self.zones.is_in_zone(id, ZoneKind::Hand(side)) {
            return false;
        }
        self.move_card(id, ZoneKind::Pile);

        if let Some(card) = self.card_mut(id) {
            if !side.is_human() {
                card.flip();
            }
            card.settle(settle_angle);
        }

        trace!(side = %side, card = %id, angle = settle_angle, "played card");
        true
    }
}
