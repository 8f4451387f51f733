//! Card matching.
//!
//! A card may be played onto the pile when it matches the pile's top card.
//! The rule is a trait so that the turn controller and the opponent
//! always agree on what "matches" means.

use crate::cards::Card;

/// Decides whether one card may be played onto another.
///
/// Implementations must be pure and total: the same two cards always give
/// the same answer, and every pair of cards gives one.
pub trait MatchingRule: Send + Sync {
    /// True if `card` may be played on top of `top`.
    fn matches(&self, card: &Card, top: &Card) -> bool;

    /// Human-readable name, for logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// The basic rule: same color or same rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorOrRank;

impl MatchingRule for ColorOrRank {
    fn matches(&self, card: &Card, top: &Card) -> bool {
        matches(card, top)
    }

    fn name(&self) -> &'static str {
        "color-or-rank"
    }
}

/// Same color or same rank.
#[must_use]
pub fn matches(a: &Card, b: &Card) -> bool {
    a.color == b.color || a.rank == b.rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};
    use crate::core::CardId;
    use proptest::prelude::*;

    fn card(color: Color, rank: u8) -> Card {
        Card::new(CardId(0), color, Rank::new(rank))
    }

    #[test]
    fn test_same_color() {
        assert!(matches(&card(Color::Red, 2), &card(Color::Red, 5)));
    }

    #[test]
    fn test_same_rank() {
        assert!(matches(&card(Color::Green, 3), &card(Color::Yellow, 3)));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches(&card(Color::Blue, 1), &card(Color::Red, 4)));
        assert!(!ColorOrRank.matches(&card(Color::Blue, 1), &card(Color::Red, 4)));
    }

    fn any_card() -> impl Strategy<Value = Card> {
        (0usize..4, 0u8..7).prop_map(|(color, rank)| card(Color::ALL[color], rank))
    }

    proptest! {
        #[test]
        fn prop_matching_is_symmetric(a in any_card(), b in any_card()) {
            prop_assert_eq!(ColorOrRank.matches(&a, &b), ColorOrRank.matches(&b, &a));
        }

        #[test]
        fn prop_matching_is_reflexive(a in any_card()) {
            prop_assert!(ColorOrRank.matches(&a, &a));
        }
    }
}
