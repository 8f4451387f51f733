//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone every card is in and the order of
//! cards within each zone. All four zones are ordered: index 0 is the
//! bottom, the last index is the top.
//!
//! A card is in exactly one zone at a time. Moves remove the card from its
//! old zone and append it to the new one in a single call.

use rustc_hash::FxHashMap;

use crate::core::config::ZoneKind;
use crate::core::entity::CardId;

/// Tracks card locations across the four zones.
///
/// ## Usage
///
/// ```
/// use uno_duel::core::{CardId, Side, ZoneKind};
/// use uno_duel::zones::ZoneManager;
///
/// let mut manager = ZoneManager::new();
/// manager.add_to_zone(CardId(10), ZoneKind::Deck);
/// manager.add_to_zone(CardId(11), ZoneKind::Deck);
///
/// // Draw the top card into the human hand
/// let drawn = manager.move_top(ZoneKind::Deck, ZoneKind::Hand(Side::Human));
/// assert_eq!(drawn, Some(CardId(11)));
/// assert_eq!(manager.cards_in_zone(ZoneKind::Deck), &[CardId(10)]);
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    /// Card locations: card_id -> zone
    locations: FxHashMap<CardId, ZoneKind>,

    /// Ordered card lists, one per zone.
    zone_order: FxHashMap<ZoneKind, Vec<CardId>>,
}

impl Default for ZoneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneManager {
    /// Create a manager with all four zones empty.
    #[must_use]
    pub fn new() -> Self {
        let zone_order = ZoneKind::ALL.iter().map(|&zone| (zone, Vec::new())).collect();
        Self {
            locations: FxHashMap::default(),
            zone_order,
        }
    }

    /// Add a new card to the top of a zone.
    ///
    /// Panics if the card is already tracked.
    pub fn add_to_zone(&mut self, card: CardId, zone: ZoneKind) {
        if self.locations.contains_key(&card) {
            panic!("{} already exists in zone manager", card);
        }
        self.locations.insert(card, zone);
        self.order_mut(zone).push(card);
    }

    /// Move a card to the top of another zone.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, card: CardId, new_zone: ZoneKind) -> Option<ZoneKind> {
        let old_zone = self.locations.get(&card).copied()?;

        if old_zone == new_zone {
            return Some(old_zone);
        }

        self.order_mut(old_zone).retain(|&c| c != card);
        self.locations.insert(card, new_zone);
        self.order_mut(new_zone).push(card);

        Some(old_zone)
    }

    /// Move the top card of `from` onto the top of `to`.
    ///
    /// Returns the moved card, or `None` if `from` is empty.
    pub fn move_top(&mut self, from: ZoneKind, to: ZoneKind) -> Option<CardId> {
        let card = self.top_card(from)?;
        self.move_to_zone(card, to);
        Some(card)
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<ZoneKind> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: ZoneKind) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Cards in a zone, bottom to top.
    #[must_use]
    pub fn cards_in_zone(&self, zone: ZoneKind) -> &[CardId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: ZoneKind) -> usize {
        self.cards_in_zone(zone).len()
    }

    /// Get the top card of a zone (last in the vec).
    #[must_use]
    pub fn top_card(&self, zone: ZoneKind) -> Option<CardId> {
        self.cards_in_zone(zone).last().copied()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager tracks a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    fn order_mut(&mut self, zone: ZoneKind) -> &mut Vec<CardId> {
        self.zone_order.entry(zone).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    const HUMAN: ZoneKind = ZoneKind::Hand(Side::Human);
    const OPPONENT: ZoneKind = ZoneKind::Hand(Side::Opponent);

    #[test]
    fn test_add_and_get() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(CardId(10), ZoneKind::Deck);
        manager.add_to_zone(CardId(11), HUMAN);

        assert_eq!(manager.get_zone(CardId(10)), Some(ZoneKind::Deck));
        assert_eq!(manager.get_zone(CardId(11)), Some(HUMAN));
        assert_eq!(manager.get_zone(CardId(99)), None);
        assert!(manager.is_in_zone(CardId(10), ZoneKind::Deck));
        assert!(!manager.is_in_zone(CardId(10), HUMAN));
    }

    #[test]
    fn test_arrival_order() {
        let mut manager = ZoneManager::new();

        manager.add_to_zone(CardId(10), ZoneKind::Pile);
        manager.add_to_zone(CardId(11), ZoneKind::Pile);
        manager.add_to_zone(CardId(12), ZoneKind::Pile);

        assert_eq!(manager.cards_in_zone(ZoneKind::Pile), &[CardId(10), CardId(11), CardId(12)]);
        assert_eq!(manager.top_card(ZoneKind::Pile), Some(CardId(12)));
    }

    #[test]
    fn test_move_between_zones() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(CardId(1), HUMAN);
        manager.add_to_zone(CardId(2), HUMAN);
        manager.add_to_zone(CardId(3), HUMAN);

        let old = manager.move_to_zone(CardId(2), ZoneKind::Pile);

        assert_eq!(old, Some(HUMAN));
        assert_eq!(manager.cards_in_zone(HUMAN), &[CardId(1), CardId(3)]);
        assert_eq!(manager.cards_in_zone(ZoneKind::Pile), &[CardId(2)]);
        assert_eq!(manager.total_cards(), 3);
    }

    #[test]
    fn test_move_unknown_card() {
        let mut manager = ZoneManager::new();
        assert_eq!(manager.move_to_zone(CardId(5), ZoneKind::Pile), None);
        assert!(!manager.contains(CardId(5)));
    }

    #[test]
    fn test_move_top() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(CardId(10), ZoneKind::Deck);
        manager.add_to_zone(CardId(11), ZoneKind::Deck);

        assert_eq!(manager.move_top(ZoneKind::Deck, OPPONENT), Some(CardId(11)));
        assert_eq!(manager.move_top(ZoneKind::Deck, OPPONENT), Some(CardId(10)));
        assert_eq!(manager.move_top(ZoneKind::Deck, OPPONENT), None);

        assert_eq!(manager.cards_in_zone(OPPONENT), &[CardId(11), CardId(10)]);
        assert_eq!(manager.zone_size(ZoneKind::Deck), 0);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_card_panics() {
        let mut manager = ZoneManager::new();
        manager.add_to_zone(CardId(10), ZoneKind::Deck);
        manager.add_to_zone(CardId(10), ZoneKind::Pile);
    }
}
