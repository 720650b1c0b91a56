//! Board coordinates.

use crate::error::CommandParseError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A 0-based `(row, col)` position on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
#[derive(derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Converts to a row-major index for a board of the given size.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Converts a row-major index back into a coordinate.
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Returns true if the coordinate lies on a board of the given size.
    pub fn fits(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns true if the coordinate lies on the main (top-left to bottom-right) diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Returns true if the coordinate lies on the anti-diagonal of a board of the given size.
    pub fn on_anti_diagonal(self, size: usize) -> bool {
        self.row.checked_add(self.col).and_then(|sum| sum.checked_add(1)) == Some(size)
    }
}

/// Parses `"row,col"`, tolerating surrounding whitespace.
impl FromStr for Coord {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| CommandParseError::Malformed(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| CommandParseError::Malformed(s.to_string()))
        };
        Ok(Self {
            row: parse(row)?,
            col: parse(col)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_on_4x4() {
        let coord = Coord::new(2, 3);
        assert_eq!(coord.to_index(4), 11);
        assert_eq!(Coord::from_index(11, 4), coord);
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Coord::new(1, 1).on_main_diagonal());
        assert!(Coord::new(1, 1).on_anti_diagonal(3));
        assert!(Coord::new(0, 2).on_anti_diagonal(3));
        assert!(!Coord::new(0, 1).on_main_diagonal());
        assert!(!Coord::new(0, 1).on_anti_diagonal(3));
    }

    #[test]
    fn test_anti_diagonal_with_huge_coord() {
        let far = Coord::new(usize::MAX, usize::MAX);
        assert!(!far.on_anti_diagonal(3));
        assert!(!Coord::new(usize::MAX, 0).on_anti_diagonal(usize::MAX));
        assert!(Coord::new(usize::MAX - 1, 0).on_anti_diagonal(usize::MAX));
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 1, 2 ".parse::<Coord>(), Ok(Coord::new(1, 2)));
        assert!("1;2".parse::<Coord>().is_err());
        assert!("a,2".parse::<Coord>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(0, 2).to_string(), "(0, 2)");
    }
}
