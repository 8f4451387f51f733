//! The game orchestrator.
//!
//! `Game` owns one table and everything that acts on it: the matching
//! rule, the opponent policy, the layout, and the scheduler of deferred
//! work. Callers drive it with three entry points:
//!
//! - `frame_update`: advance one frame (run due tasks, recompute what is
//!   playable, step every card's animations)
//! - `activate`: the human clicked a card
//! - `build_new_game`: throw the table away and deal a fresh one
//!
//! ## Example
//!
//! ```
//! use uno_duel::{Activation, GameBuilder, Side};
//!
//! let mut game = GameBuilder::new().seed(42).build().unwrap();
//!
//! // Let the opening deal finish.
//! for _ in 0..300 {
//!     game.frame_update();
//! }
//! assert_eq!(game.state().hand(Side::Human).len(), 7);
//!
//! // Click something playable: a matching hand card, or the deck.
//! let card = game.playable_cards()[0];
//! let outcome = game.activate(card).unwrap();
//! assert_ne!(outcome, Activation::Ignored);
//! assert_eq!(game.active_side(), Side::Opponent);
//! ```

use tracing::{debug, info, trace, warn};

use crate::core::{Action, CardId, EngineConfig, GameRng, GameState, Side, ZoneKind};
use crate::error::{EngineError, Result};
use crate::layout::{LayoutEngine, TableLayout};
use crate::opponent::{legal_candidates, ColorBalanceOpponent, OpponentPolicy};
use crate::render::{self, Renderer};
use crate::rules::{refresh_legality, ColorOrRank, MatchingRule, TurnPhase};
use crate::schedule::{Scheduler, Task};
use crate::zones::DrawOutcome;

/// What a human activation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The card went from the human hand onto the pile.
    Played(CardId),
    /// The deck top went into the human hand.
    Drew(CardId),
    /// The human drew against a full hand. Nothing moved, but the turn
    /// still passed.
    Passed,
    /// Not the human's turn, or not a card the human may activate.
    Ignored,
}

impl Activation {
    /// True if the activation ended the human's turn.
    #[must_use]
    pub fn ended_turn(self) -> bool {
        !matches!(self, Activation::Ignored)
    }
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    config: EngineConfig,
    seed: u64,
    rule: Box<dyn MatchingRule>,
    opponent: Box<dyn OpponentPolicy>,
    layout: Box<dyn LayoutEngine>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            seed: 0,
            rule: Box::new(ColorOrRank),
            opponent: Box::new(ColorBalanceOpponent),
            layout: Box::new(TableLayout::default()),
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: impl MatchingRule + 'static) -> Self {
        self.rule = Box::new(rule);
        self
    }

    #[must_use]
    pub fn opponent(mut self, opponent: impl OpponentPolicy + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: impl LayoutEngine + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    /// Build the game and start dealing the opening hands.
    pub fn build(self) -> Result<Game> {
        self.config.validate()?;
        let state = GameState::new(self.config.clone(), self.seed);
        let mut game = self.assemble(state);
        game.deal();
        Ok(game)
    }

    /// Build a game around an existing table, dealing nothing.
    ///
    /// The builder's config is ignored; the state carries its own.
    pub fn build_from(self, state: GameState) -> Result<Game> {
        state.config().validate()?;
        let mut game = self.assemble(state);
        game.layout.refresh(&mut game.state);
        Ok(game)
    }

    fn assemble(self, state: GameState) -> Game {
        let ai_rng = state.rng.for_context("opponent");
        Game {
            state,
            scheduler: Scheduler::new(),
            rule: self.rule,
            opponent: self.opponent,
            layout: self.layout,
            ai_rng,
            frames: 0,
        }
    }
}

/// One running game.
pub struct Game {
    state: GameState,
    scheduler: Scheduler,
    rule: Box<dyn MatchingRule>,
    opponent: Box<dyn OpponentPolicy>,
    layout: Box<dyn LayoutEngine>,

    /// Opponent decisions and thinking delays, kept apart from the table
    /// RNG so cosmetic randomness never changes a decision.
    ai_rng: GameRng,

    frames: u64,
}

impl Game {
    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.state.config()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.state.turn.phase()
    }

    #[must_use]
    pub fn active_side(&self) -> Side {
        self.state.turn.active_side()
    }

    /// Logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Frames run since the game was built.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Whether the human may activate `card` right now.
    #[must_use]
    pub fn is_playable(&self, card: CardId) -> bool {
        self.state.turn.is_playable(card)
    }

    /// Cards the human may activate right now, sorted by id.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardId> {
        let mut cards: Vec<CardId> = self.state.turn.playable_cards().collect();
        cards.sort_unstable();
        cards
    }

    /// True while tasks are queued or any card is still moving.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.scheduler.is_idle() || self.state.all_cards().any(|card| card.is_animating())
    }

    // === Entry points ===

    /// Replace the table with a fresh one: a new deck, seven cards dealt
    /// to each side, the human to move.
    ///
    /// Work still queued for the old table is dropped.
    pub fn build_new_game(&mut self) {
        let rng = self.state.rng.fork();
        let config = self.state.config().clone();

        self.state = GameState::with_rng(config, rng);
        self.ai_rng = self.state.rng.for_context("opponent");
        self.scheduler.reset();
        self.frames = 0;
        self.deal();
    }

    /// Advance the game by one frame.
    pub fn frame_update(&mut self) {
        self.scheduler.advance(self.state.config().tick_ms);
        while let Some(due) = self.scheduler.pop_due() {
            self.run_task(due.task);
        }

        if self.state.zones.zone_size(ZoneKind::Deck) == 0 {
            self.state.build_deck();
            self.layout.refresh(&mut self.state);
        }

        refresh_legality(&mut self.state, self.rule.as_ref());
        self.state.update_cards();
        self.frames += 1;
    }

    /// The human activated `card`.
    ///
    /// Playing a playable hand card or drawing from a playable deck ends
    /// the human's turn and sets the opponent thinking. Anything else is
    /// ignored. Fails only for an id that names no card.
    pub fn activate(&mut self, card: CardId) -> Result<Activation> {
        let zone = self.state.zones.get_zone(card).ok_or(EngineError::UnknownCard(card))?;

        if !self.state.turn.human_can_act() || !self.state.turn.is_playable(card) {
            trace!(card = %card, zone = %zone, "activation ignored");
            return Ok(Activation::Ignored);
        }

        let activation = match zone {
            ZoneKind::Hand(Side::Human) => {
                let angle = self.settle_angle();
                self.state.play_card(Side::Human, card, angle);
                self.state.record_action(Side::Human, Action::Play(card));
                self.layout.refresh(&mut self.state);
                Activation::Played(card)
            }
            ZoneKind::Deck => {
                let outcome = self.draw_step(Side::Human, 1);
                self.state.record_action(Side::Human, Action::Draw);
                match outcome {
                    DrawOutcome::Drawn(drawn) => Activation::Drew(drawn),
                    DrawOutcome::HandFull | DrawOutcome::DeckExhausted => Activation::Passed,
                }
            }
            ZoneKind::Pile | ZoneKind::Hand(Side::Opponent) => return Ok(Activation::Ignored),
        };

        debug!(card = %card, outcome = ?activation, "human acted");
        self.end_human_turn();
        Ok(activation)
    }

    /// Issue this frame's draw calls.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        render::render(&self.state, renderer);
    }

    /// The viewport changed size.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.layout.resize(width, height);
        self.layout.refresh(&mut self.state);
    }

    // === Internals ===

    fn deal(&mut self) {
        self.state.build_deck();
        self.layout.refresh(&mut self.state);

        let hand = self.state.config().starting_hand;
        self.draw_step(Side::Human, hand);
        self.draw_step(Side::Opponent, hand);

        info!(
            seed = self.state.rng.seed(),
            starting_hand = hand,
            opponent = self.opponent.name(),
            rule = self.rule.name(),
            "new game"
        );
    }

    fn run_task(&mut self, task: Task) {
        trace!(task = ?task, now_ms = self.scheduler.now_ms(), "running task");
        match task {
            Task::OpponentTurn => self.run_opponent_turn(),
            Task::Draw { side, remaining } => {
                self.draw_step(side, remaining);
            }
            Task::Zoom(card) => {
                if let Some(card) = self.state.card_mut(card) {
                    card.zoom();
                }
            }
        }
    }

    /// Draw one card now and queue the rest of the request.
    ///
    /// A full hand drops the rest of the request.
    fn draw_step(&mut self, side: Side, count: usize) -> DrawOutcome {
        if count == 0 {
            return DrawOutcome::HandFull;
        }

        let outcome = self.state.draw_one(side);
        if let DrawOutcome::Drawn(card) = outcome {
            let config = self.state.config();
            let (zoom_delay, interval) = (config.zoom_delay_ms, config.draw_interval_ms);

            if side.is_human() {
                self.scheduler.schedule_in(zoom_delay, Task::Zoom(card));
            }
            self.layout.refresh(&mut self.state);

            if count > 1 {
                self.scheduler.schedule_in(
                    interval,
                    Task::Draw {
                        side,
                        remaining: count - 1,
                    },
                );
            }
        }
        outcome
    }

    fn end_human_turn(&mut self) {
        if !self.state.turn.end_human_turn() {
            return;
        }
        let config = self.state.config();
        let delay = self.ai_rng.gen_millis(config.thinking_min_ms..=config.thinking_max_ms);
        self.scheduler.schedule_in(delay, Task::OpponentTurn);
        debug!(delay_ms = delay, "opponent thinking");
    }

    fn run_opponent_turn(&mut self) {
        if self.state.turn.phase() != TurnPhase::OpponentTurn {
            warn!("opponent turn fired outside the opponent's turn");
            return;
        }

        let mut action = self.opponent.choose_action(&self.state, self.rule.as_ref(), &mut self.ai_rng);
        if let Action::Play(card) = action {
            if !legal_candidates(&self.state, self.rule.as_ref()).contains(&card) {
                warn!(card = %card, policy = self.opponent.name(), "policy chose an illegal card, drawing instead");
                action = Action::Draw;
            }
        }

        match action {
            Action::Play(card) => {
                let angle = self.settle_angle();
                self.state.play_card(Side::Opponent, card, angle);
                self.layout.refresh(&mut self.state);
            }
            Action::Draw => {
                self.draw_step(Side::Opponent, 1);
            }
        }

        self.state.record_action(Side::Opponent, action);
        debug!(action = %action, policy = self.opponent.name(), "opponent acted");
        self.state.turn.end_opponent_turn();
    }

    fn settle_angle(&mut self) -> i32 {
        let spread = self.state.config().settle_spread;
        self.state.rng.gen_range_inclusive(-spread..=spread)
    }
}
