//! Game state: the card arena, zones, turn state and history.
//!
//! ## GameState
//!
//! Complete state of one table:
//! - Card arena (every card ever built, by id)
//! - Zone manager (which zone each card is in, and in what order)
//! - Turn controller (whose turn it is, which cards are playable)
//! - Action history
//! - RNG
//!
//! Cards are created only by `build_deck` and never destroyed. Every move
//! goes through `move_card`, which keeps each card's `stack_index` equal
//! to its position inside its zone.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, error};

use super::action::{Action, ActionRecord};
use super::config::{EngineConfig, ZoneKind};
use super::entity::CardId;
use super::geometry::Point;
use super::player::{Side, SideMap};
use super::rng::GameRng;
use crate::cards::{Card, Color, Rank};
use crate::rules::turn::TurnController;
use crate::zones::ZoneManager;

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: EngineConfig,

    /// Card values by id.
    cards: FxHashMap<CardId, Card>,

    /// Zone manager for card locations.
    pub zones: ZoneManager,

    /// Turn phase and legality flags.
    pub turn: TurnController,

    /// Deterministic RNG for deck contents and cosmetic angles.
    pub rng: GameRng,

    /// Completed actions, oldest first.
    history: Vector<ActionRecord>,

    action_sequence: u32,
    next_card_id: CardId,
    decks_built: u32,
}

impl GameState {
    /// Create an empty table (no cards yet).
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an empty table drawing from an existing RNG stream.
    #[must_use]
    pub fn with_rng(config: EngineConfig, rng: GameRng) -> Self {
        Self {
            config,
            cards: FxHashMap::default(),
            zones: ZoneManager::new(),
            turn: TurnController::new(),
            rng,
            history: Vector::new(),
            action_sequence: 0,
            next_card_id: CardId::new(0),
            decks_built: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Cards ===

    /// Create a card on top of `zone`.
    pub fn spawn_card(&mut self, color: Color, rank: Rank, zone: ZoneKind) -> CardId {
        let id = self.next_card_id;
        self.next_card_id = id.next();

        let mut card = Card::new(id, color, rank);
        card.stack_index = self.zones.zone_size(zone);
        self.cards.insert(id, card);
        self.zones.add_to_zone(id, zone);
        id
    }

    /// Build a fresh deck of random cards on top of the deck zone.
    ///
    /// Every card starts face-down with a random tilt, stacked in creation
    /// order.
    pub fn build_deck(&mut self) {
        let ranks = i32::from(self.config.rank_count);
        let colors = Color::ALL.len() as i32;

        for _ in 0..self.config.deck_size {
            let color = Color::ALL[self.rng.gen_range(0..colors) as usize];
            let rank = Rank::new(self.rng.gen_range(0..ranks) as u8);
            let angle = self.rng.gen_range(-180..180);

            let id = self.spawn_card(color, rank, ZoneKind::Deck);
            let card = self.card_entry(id);
            card.flip_instant();
            card.set_rotation(angle);
        }

        self.decks_built += 1;
        debug!(
            deck_size = self.config.deck_size,
            decks_built = self.decks_built,
            "built new deck"
        );
    }

    /// Get a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a mutable card.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Total cards ever created.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Iterate over every card, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Arena lookup for a card that a zone lists. A miss means the arena
    /// and the zones disagree, which is unrecoverable.
    fn card_entry(&mut self, id: CardId) -> &mut Card {
        match self.cards.get_mut(&id) {
            Some(card) => card,
            None => {
                error!(card = %id, "card listed in a zone is missing from the arena");
                panic!("{} missing from card arena", id);
            }
        }
    }

    // === Zones ===

    /// Cards in a zone, bottom to top.
    #[must_use]
    pub fn cards_in(&self, zone: ZoneKind) -> &[CardId] {
        self.zones.cards_in_zone(zone)
    }

    /// Top card of a zone.
    #[must_use]
    pub fn top_of(&self, zone: ZoneKind) -> Option<CardId> {
        self.zones.top_card(zone)
    }

    /// Cards in a side's hand, in arrival order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardId] {
        self.cards_in(ZoneKind::Hand(side))
    }

    /// Number of cards in each hand.
    #[must_use]
    pub fn hand_sizes(&self) -> SideMap<usize> {
        SideMap::new(|side| self.hand(side).len())
    }

    /// The last card played, if any.
    #[must_use]
    pub fn pile_top(&self) -> Option<&Card> {
        self.top_of(ZoneKind::Pile).and_then(|id| self.card(id))
    }

    /// Move a card to the top of `zone`.
    ///
    /// Returns the zone it left, or `None` if the card is unknown.
    pub fn move_card(&mut self, id: CardId, zone: ZoneKind) -> Option<ZoneKind> {
        let from = self.zones.move_to_zone(id, zone)?;
        self.reindex(from);
        self.reindex(zone);
        Some(from)
    }

    fn reindex(&mut self, zone: ZoneKind) {
        for (index, id) in self.zones.cards_in_zone(zone).iter().enumerate() {
            if let Some(card) = self.cards.get_mut(id) {
                card.stack_index = index;
            }
        }
    }

    // === Layout hooks ===

    /// Set where a card should ease towards.
    pub fn set_target_position(&mut self, id: CardId, point: Point) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.target_position = point;
        }
    }

    /// Put a card at a point with no easing.
    pub fn place(&mut self, id: CardId, point: Point) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.snap_to(point);
        }
    }

    // === Frame ===

    /// Advance every card by one frame, zone by zone.
    pub fn update_cards(&mut self) {
        let animation = &self.config.animation;
        for zone in ZoneKind::ALL {
            for id in self.zones.cards_in_zone(zone) {
                match self.cards.get_mut(id) {
                    Some(card) => card.update(animation),
                    None => {
                        error!(card = %id, zone = %zone, "card listed in a zone is missing from the arena");
                        panic!("{} missing from card arena", id);
                    }
                }
            }
        }
    }

    // === History ===

    /// Record a completed action for `side` in the current turn.
    pub fn record_action(&mut self, side: Side, action: Action) {
        let record = ActionRecord::new(side, action, self.turn.turn_number(), self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Completed actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Number of decks built so far, including the first.
    #[must_use]
    pub fn decks_built(&self) -> u32 {
        self.decks_built
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Face;

    fn state() -> GameState {
        GameState::new(EngineConfig::default().with_deck_size(12), 42)
    }

    #[test]
    fn test_build_deck() {
        let mut state = state();
        state.build_deck();

        assert_eq!(state.cards_in(ZoneKind::Deck).len(), 12);
        assert_eq!(state.card_count(), 12);
        assert_eq!(state.decks_built(), 1);

        for (index, &id) in state.cards_in(ZoneKind::Deck).iter().enumerate() {
            let card = state.card(id).unwrap();
            assert_eq!(card.face(), Face::Down);
            assert!(card.is_flipped());
            assert_eq!(card.stack_index, index);
            assert!(card.rank.value() < 7);
            assert!((-180..180).contains(&card.rotation()));
        }
    }

    #[test]
    fn test_build_deck_deterministic() {
        let mut a = state();
        let mut b = state();
        a.build_deck();
        b.build_deck();

        let describe = |s: &GameState| -> Vec<(Color, Rank)> {
            s.cards_in(ZoneKind::Deck)
                .iter()
                .map(|&id| {
                    let card = s.card(id).unwrap();
                    (card.color, card.rank)
                })
                .collect()
        };
        assert_eq!(describe(&a), describe(&b));
    }

    #[test]
    fn test_ids_never_reused() {
        let mut state = state();
        state.build_deck();
        state.build_deck();

        assert_eq!(state.card_count(), 24);
        assert_eq!(state.zones.total_cards(), 24);
        assert_eq!(state.decks_built(), 2);
    }

    #[test]
    fn test_move_card_reindexes_both_zones() {
        let mut state = state();
        let a = state.spawn_card(Color::Red, Rank::new(1), ZoneKind::Hand(Side::Human));
        let b = state.spawn_card(Color::Blue, Rank::new(2), ZoneKind::Hand(Side::Human));
        let c = state.spawn_card(Color::Green, Rank::new(3), ZoneKind::Hand(Side::Human));
        let p = state.spawn_card(Color::Yellow, Rank::new(4), ZoneKind::Pile);

        let from = state.move_card(a, ZoneKind::Pile);

        assert_eq!(from, Some(ZoneKind::Hand(Side::Human)));
        assert_eq!(state.hand(Side::Human), &[b, c]);
        assert_eq!(state.card(b).unwrap().stack_index, 0);
        assert_eq!(state.card(c).unwrap().stack_index, 1);
        assert_eq!(state.card(p).unwrap().stack_index, 0);
        assert_eq!(state.card(a).unwrap().stack_index, 1);
        assert_eq!(state.hand_sizes()[Side::Human], 2);
        assert_eq!(state.hand_sizes()[Side::Opponent], 0);
        assert_eq!(state.pile_top().map(|card| card.id), Some(a));
    }

    #[test]
    fn test_move_unknown_card() {
        let mut state = state();
        assert_eq!(state.move_card(CardId(77), ZoneKind::Pile), None);
    }

    #[test]
    fn test_update_cards_eases_positions() {
        let mut state = state();
        let id = state.spawn_card(Color::Red, Rank::new(0), ZoneKind::Pile);
        state.set_target_position(id, Point::new(50, 0));

        state.update_cards();
        assert_eq!(state.card(id).unwrap().position, Point::new(25, 0));

        state.place(id, Point::new(-10, -10));
        assert_eq!(state.card(id).unwrap().position, Point::new(-10, -10));
        assert!(!state.card(id).unwrap().is_animating());
    }

    #[test]
    fn test_record_action() {
        let mut state = state();
        state.record_action(Side::Human, Action::Draw);
        state.record_action(Side::Opponent, Action::Play(CardId(3)));

        let history = state.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].side, Side::Opponent);
        assert_eq!(history[0].turn, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = state();
        state.build_deck();
        let snapshot = state.clone();

        let top = state.top_of(ZoneKind::Deck).unwrap();
        state.move_card(top, ZoneKind::Pile);

        assert_eq!(snapshot.cards_in(ZoneKind::Deck).len(), 12);
        assert_eq!(state.cards_in(ZoneKind::Deck).len(), 11);
    }
}
