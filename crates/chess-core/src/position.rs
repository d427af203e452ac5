//! Board coordinates.

use std::fmt;
use thiserror::Error;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Errors produced when building a checked [`Position`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("square ({file},{rank}) is off the board")]
    OffBoard { file: i8, rank: i8 },
}

/// A square on the board as a `(file, rank)` pair.
///
/// Files run 0-7 from left to right and ranks run 0-7 from Black's back rank
/// to White's. The coordinates are signed so that offsets can step off the
/// board; [`Position::is_on_board`] tells the two apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    /// The top-left corner, `(0,0)`.
    pub const ORIGIN: Position = Position::new(0, 0);

    /// Rook directions.
    pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    /// Bishop directions.
    pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

    /// Knight offsets.
    pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
        (1, 2),
        (2, 1),
        (2, -1),
        (1, -2),
        (-1, -2),
        (-2, -1),
        (-2, 1),
        (-1, 2),
    ];

    /// The eight squares around a king.
    pub const KING_STEPS: [(i8, i8); 8] = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];

    /// Creates a position without bounds checking.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Position { file, rank }
    }

    /// Creates a position, rejecting squares outside the board.
    pub const fn try_new(file: i8, rank: i8) -> Result<Self, PositionError> {
        let pos = Position::new(file, rank);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(PositionError::OffBoard { file, rank })
        }
    }

    /// Returns true if both coordinates are within `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Returns the position shifted by `(df, dr)`.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Position::new(self.file + df, self.rank + dr)
    }

    /// Returns the position shifted by `(df, dr)` if it stays on the board.
    #[inline]
    pub fn checked_offset(self, df: i8, dr: i8) -> Option<Self> {
        Some(self.offset(df, dr)).filter(|p| p.is_on_board())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.file, self.rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

impl From<(i8, i8)> for Position {
    fn from((file, rank): (i8, i8)) -> Self {
        Position::new(file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn checked_construction() {
        assert_eq!(Position::try_new(3, 4), Ok(Position::new(3, 4)));
        assert_eq!(
            Position::try_new(8, 0),
            Err(PositionError::OffBoard { file: 8, rank: 0 })
        );
        assert!(Position::try_new(0, -1).is_err());
    }

    #[test]
    fn offsets() {
        let pos = Position::new(4, 4);
        assert_eq!(pos.offset(1, -2), Position::new(5, 2));
        assert_eq!(Position::ORIGIN.checked_offset(-1, 0), None);
        assert_eq!(
            Position::ORIGIN.checked_offset(1, 1),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4,7)");
    }

    proptest! {
        #[test]
        fn offset_round_trips(file in -2i8..10, rank in -2i8..10, df in -3i8..=3, dr in -3i8..=3) {
            let pos = Position::new(file, rank);
            prop_assert_eq!(pos.offset(df, dr).offset(-df, -dr), pos);
        }

        #[test]
        fn try_new_agrees_with_is_on_board(file in -4i8..12, rank in -4i8..12) {
            let pos = Position::new(file, rank);
            prop_assert_eq!(Position::try_new(file, rank).is_ok(), pos.is_on_board());
        }
    }
}
