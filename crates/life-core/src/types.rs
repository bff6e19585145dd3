//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D position on the grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Apply toroidal wrapping for given grid dimensions
    pub fn wrap(&self, columns: i32, rows: i32) -> Self {
        Self {
            x: self.x.rem_euclid(columns),
            y: self.y.rem_euclid(rows),
        }
    }

    pub fn in_bounds(&self, columns: i32, rows: i32) -> bool {
        (0..columns).contains(&self.x) && (0..rows).contains(&self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Offsets of the eight Moore neighbours, row by row.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_position_wrap() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.wrap(10, 10), Position::new(5, 5));

        let pos = Position::new(-1, -1);
        assert_eq!(pos.wrap(10, 10), Position::new(9, 9));

        let pos = Position::new(10, 10);
        assert_eq!(pos.wrap(10, 10), Position::new(0, 0));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(3, 2));
        assert!(Position::new(2, 1).in_bounds(3, 2));
        assert!(!Position::new(3, 1).in_bounds(3, 2));
        assert!(!Position::new(0, 2).in_bounds(3, 2));
        assert!(!Position::new(-1, 0).in_bounds(3, 2));
    }

    #[test]
    fn test_neighbor_offsets_exclude_center() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        let mut sorted = NEIGHBOR_OFFSETS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    proptest! {
        #[test]
        fn wrap_always_lands_in_bounds(
            x in -1000i32..1000,
            y in -1000i32..1000,
            columns in 1i32..200,
            rows in 1i32..200,
        ) {
            let wrapped = Position::new(x, y).wrap(columns, rows);
            prop_assert!(wrapped.in_bounds(columns, rows));
        }

        #[test]
        fn wrap_is_identity_inside_bounds(columns in 1i32..200, rows in 1i32..200, seed in 0u32..10_000) {
            let pos = Position::new(seed as i32 % columns, (seed / 7) as i32 % rows);
            prop_assert_eq!(pos.wrap(columns, rows), pos);
        }
    }
}
