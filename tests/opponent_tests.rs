//! Opponent policy tests.
//!
//! The color-balance opponent:
//! - Plays its only legal card without deliberating
//! - Draws when nothing matches
//! - Otherwise plays toward the color it holds most of

use proptest::prelude::*;
use uno_duel::opponent::{best_card, legal_candidates};
use uno_duel::{
    Action, ColorBalanceOpponent, ColorOrRank, Color, EngineConfig, GameRng, GameState, OpponentPolicy, Rank, Side,
    UniformOpponent, ZoneKind,
};

const HAND: ZoneKind = ZoneKind::Hand(Side::Opponent);

fn table(hand: &[(Color, u8)], pile_top: Option<(Color, u8)>) -> GameState {
    let mut state = GameState::new(EngineConfig::default(), 0);
    for &(color, rank) in hand {
        state.spawn_card(color, Rank::new(rank), HAND);
    }
    if let Some((color, rank)) = pile_top {
        state.spawn_card(color, Rank::new(rank), ZoneKind::Pile);
    }
    state
}

fn decide(state: &GameState) -> Action {
    ColorBalanceOpponent.choose_action(state, &ColorOrRank, &mut GameRng::new(0))
}

/// Two rank matches of equal color count: the first candidate is played.
#[test]
fn test_tie_plays_first_candidate() {
    let state = table(&[(Color::Red, 3), (Color::Blue, 3)], Some((Color::Green, 3)));
    let red = state.hand(Side::Opponent)[0];

    assert_eq!(decide(&state), Action::Play(red));
}

/// Tie order follows the hand, not the color: Blue before Red still plays Blue.
#[test]
fn test_tie_ignores_color_order() {
    let state = table(&[(Color::Blue, 3), (Color::Red, 3)], Some((Color::Green, 3)));
    let blue = state.hand(Side::Opponent)[0];

    assert_eq!(decide(&state), Action::Play(blue));
}

/// Opening on an empty pile with a tied hand plays the first card.
#[test]
fn test_tie_on_empty_pile_plays_first_card() {
    let state = table(&[(Color::Yellow, 4), (Color::Green, 1), (Color::Red, 6)], None);
    let first = state.hand(Side::Opponent)[0];

    assert_eq!(decide(&state), Action::Play(first));
}

/// The color with the most cards in hand wins over hand order.
#[test]
fn test_majority_color_wins() {
    let state = table(
        &[(Color::Red, 3), (Color::Blue, 3), (Color::Blue, 1), (Color::Blue, 6)],
        Some((Color::Green, 3)),
    );
    let blue = state.hand(Side::Opponent)[1];

    assert_eq!(decide(&state), Action::Play(blue));
}

/// Counting includes cards that can't be played right now.
#[test]
fn test_count_uses_whole_hand() {
    let state = table(
        &[(Color::Yellow, 2), (Color::Green, 2), (Color::Green, 5), (Color::Green, 6)],
        Some((Color::Red, 2)),
    );
    let hand = state.hand(Side::Opponent).to_vec();

    assert_eq!(legal_candidates(&state, &ColorOrRank).as_slice(), &[hand[0], hand[1]]);
    assert_eq!(decide(&state), Action::Play(hand[1]));
}

/// An empty pile makes the whole hand a candidate.
#[test]
fn test_empty_pile() {
    let state = table(&[(Color::Red, 0), (Color::Yellow, 1), (Color::Yellow, 2)], None);
    let hand = state.hand(Side::Opponent).to_vec();

    assert_eq!(legal_candidates(&state, &ColorOrRank).len(), 3);
    assert_eq!(decide(&state), Action::Play(hand[1]));
}

/// Nothing matches: draw.
#[test]
fn test_no_match_draws() {
    let state = table(&[(Color::Red, 0), (Color::Yellow, 1)], Some((Color::Blue, 4)));
    assert_eq!(decide(&state), Action::Draw);
    assert_eq!(best_card(&state, &[]), None);
}

fn any_color() -> impl Strategy<Value = Color> {
    (0usize..4).prop_map(|index| Color::ALL[index])
}

fn any_hand() -> impl Strategy<Value = Vec<(Color, u8)>> {
    prop::collection::vec((any_color(), 0u8..7), 0..15)
}

proptest! {
    /// Both policies only ever play legal cards, and draw exactly when
    /// there is nothing legal.
    #[test]
    fn prop_policies_choose_legal_actions(
        hand in any_hand(),
        pile in prop::option::of((any_color(), 0u8..7)),
        seed in any::<u64>(),
    ) {
        let state = table(&hand, pile);
        let candidates = legal_candidates(&state, &ColorOrRank);
        let mut rng = GameRng::new(seed);

        let policies: [&dyn OpponentPolicy; 2] = [&ColorBalanceOpponent, &UniformOpponent];
        for policy in policies {
            match policy.choose_action(&state, &ColorOrRank, &mut rng) {
                Action::Play(card) => prop_assert!(candidates.contains(&card)),
                Action::Draw => prop_assert!(candidates.is_empty()),
            }
        }
    }

    /// The chosen card's color is held at least as often as any other
    /// candidate's color, and ties go to the earliest candidate.
    #[test]
    fn prop_best_card_maximises_color_count(hand in any_hand(), pile in prop::option::of((any_color(), 0u8..7))) {
        let state = table(&hand, pile);
        let candidates = legal_candidates(&state, &ColorOrRank);
        prop_assume!(!candidates.is_empty());

        let count = |color: Color| hand.iter().filter(|(c, _)| *c == color).count();
        let color_of = |id| state.card(id).map(|card| card.color);

        let chosen = best_card(&state, &candidates);
        let best = chosen.and_then(color_of);
        prop_assert!(best.is_some());
        let best_count = best.map(count).unwrap_or(0);
        for &candidate in candidates.iter() {
            let other = color_of(candidate).map(count).unwrap_or(0);
            prop_assert!(best_count >= other);
        }

        // Among equally good candidates the earliest one is chosen.
        let first_best = candidates
            .iter()
            .copied()
            .find(|&id| color_of(id).map(count) == Some(best_count));
        prop_assert_eq!(chosen, first_best);
    }
}
