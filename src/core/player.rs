//! Sides of the table and per-side data storage.
//!
//! ## Side
//!
//! The game is always a duel: the human at the bottom of the table and the
//! scripted opponent at the top.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for the two hands.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// The person clicking cards.
    Human,
    /// The scripted opponent.
    Opponent,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Opponent];

    /// Storage index (0 for human, 1 for opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }

    /// The side across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Side::Human)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use uno_duel::core::{Side, SideMap};
///
/// let mut hand_sizes: SideMap<usize> = SideMap::with_value(7);
/// hand_sizes[Side::Opponent] += 1;
///
/// assert_eq!(hand_sizes[Side::Human], 7);
/// assert_eq!(hand_sizes[Side::Opponent], 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, human first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Human.index(), 0);
        assert_eq!(Side::Opponent.index(), 1);
        assert_eq!(Side::Human.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Human);
        assert!(Side::Human.is_human());
        assert!(!Side::Opponent.is_human());
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|side| side.index() * 10);
        assert_eq!(map[Side::Human], 0);
        assert_eq!(map[Side::Opponent], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<Vec<u32>> = SideMap::default();
        map[Side::Opponent].push(3);

        assert!(map[Side::Human].is_empty());
        assert_eq!(map[Side::Opponent], vec![3]);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|side| side.is_human());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Human, &true), (Side::Opponent, &false)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(|side| side.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
