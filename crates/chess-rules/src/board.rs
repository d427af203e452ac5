//! Board state: live and captured pieces for both sides.

use chess_core::{Color, Piece, PieceKind, Position, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors raised when building a board from an arbitrary piece set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} has no king")]
    MissingKing(Color),

    #[error("{0} has more than one king")]
    MultipleKings(Color),

    #[error("piece placed off the board at {0}")]
    OffBoard(Position),

    #[error("two pieces placed on {0}")]
    Occupied(Position),
}

/// Back rank layout from file 0 to file 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game state: which pieces are on the board and which were taken.
///
/// Collections keep insertion order. Every live collection holds exactly one
/// king; [`Board::from_pieces`] enforces this on entry and the rules never
/// capture a king in a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    live: [Vec<Piece>; 2],
    captured: [Vec<Piece>; 2],
}

impl Board {
    /// Creates a board with no pieces.
    pub(crate) fn empty() -> Self {
        Board {
            live: [Vec::new(), Vec::new()],
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Creates the standard starting position.
    ///
    /// Black occupies ranks 0 and 1, White ranks 6 and 7. Pawns are inserted
    /// first, then the back rank from file 0 to file 7.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let side = &mut board.live[color.index()];
            for file in 0..BOARD_SIZE {
                side.push(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Position::new(file, color.pawn_rank()),
                ));
            }
            for (file, kind) in (0..BOARD_SIZE).zip(BACK_RANK) {
                side.push(Piece::new(kind, color, Position::new(file, color.home_rank())));
            }
        }
        board
    }

    /// Creates a board from live pieces, validating placement and kings.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Board::empty();
        for piece in pieces {
            if !piece.position.is_on_board() {
                return Err(BoardError::OffBoard(piece.position));
            }
            if board.piece_at(piece.position).is_some() {
                return Err(BoardError::Occupied(piece.position));
            }
            board.live[piece.color.index()].push(Piece {
                captured_at: None,
                ..piece
            });
        }

        for color in Color::ALL {
            match board.count(PieceKind::King, color) {
                0 => return Err(BoardError::MissingKing(color)),
                1 => {}
                _ => return Err(BoardError::MultipleKings(color)),
            }
        }
        Ok(board)
    }

    /// Returns the live pieces of a color in insertion order.
    #[inline]
    pub fn live(&self, color: Color) -> &[Piece] {
        &self.live[color.index()]
    }

    /// Returns the captured pieces of a color in capture order.
    #[inline]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Iterates over every live piece, White first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.live.iter().flatten()
    }

    /// Returns the live piece on `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.pieces().find(|p| p.position == pos)
    }

    /// Returns the index of `color`'s live piece on `pos`.
    pub fn index_at(&self, color: Color, pos: Position) -> Option<usize> {
        self.live(color).iter().position(|p| p.position == pos)
    }

    /// Returns the color occupying `pos`, if any.
    #[inline]
    pub fn occupant(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|p| p.color)
    }

    /// Returns true if a live piece of `color` and `kind` stands on `pos`.
    pub fn has_piece(&self, color: Color, kind: PieceKind, pos: Position) -> bool {
        self.live(color)
            .iter()
            .any(|p| p.kind == kind && p.position == pos)
    }

    /// Returns the king of `color`.
    ///
    /// # Panics
    ///
    /// Panics if the side has no live king. That can only happen through a
    /// bug in the rules, never through player input.
    pub fn king(&self, color: Color) -> &Piece {
        match self.live(color).iter().find(|p| p.kind == PieceKind::King) {
            Some(king) => king,
            None => panic!("{color} has no king on the board"),
        }
    }

    /// Counts live pieces of one kind and color.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.live(color).iter().filter(|p| p.kind == kind).count()
    }

    #[inline]
    pub(crate) fn live_mut(&mut self, color: Color) -> &mut Vec<Piece> {
        &mut self.live[color.index()]
    }

    #[inline]
    pub(crate) fn captured_mut(&mut self, color: Color) -> &mut Vec<Piece> {
        &mut self.captured[color.index()]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                let c = self
                    .piece_at(Position::new(file, rank))
                    .map_or('.', Piece::symbol);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: PieceKind, color: Color, file: i8, rank: i8) -> Piece {
        Piece::new(kind, color, Position::new(file, rank))
    }

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(board.live(Color::White).len(), 16);
        assert_eq!(board.live(Color::Black).len(), 16);
        assert!(board.captured(Color::White).is_empty());
        assert!(board.captured(Color::Black).is_empty());

        assert_eq!(board.king(Color::White).position, Position::new(4, 7));
        assert_eq!(board.king(Color::Black).position, Position::new(4, 0));
        assert!(board.has_piece(Color::White, PieceKind::Queen, Position::new(3, 7)));
        assert!(board.has_piece(Color::Black, PieceKind::Rook, Position::new(7, 0)));
        assert_eq!(board.count(PieceKind::Pawn, Color::White), 8);
    }

    #[test]
    fn standard_display() {
        let expected = "rnbqkbnr\npppppppp\n........\n........\n\
                        ........\n........\nPPPPPPPP\nRNBQKBNR\n";
        assert_eq!(Board::standard().to_string(), expected);
    }

    #[test]
    fn occupancy_queries() {
        let board = Board::standard();
        assert_eq!(board.occupant(Position::new(0, 6)), Some(Color::White));
        assert_eq!(board.occupant(Position::new(0, 1)), Some(Color::Black));
        assert_eq!(board.occupant(Position::new(3, 3)), None);
        assert_eq!(board.index_at(Color::White, Position::new(0, 6)), Some(0));
        assert_eq!(board.index_at(Color::Black, Position::new(0, 6)), None);
    }

    #[test]
    fn from_pieces_requires_one_king_each() {
        let result = Board::from_pieces([piece(PieceKind::King, Color::White, 4, 7)]);
        assert_eq!(result, Err(BoardError::MissingKing(Color::Black)));

        let result = Board::from_pieces([
            piece(PieceKind::King, Color::White, 4, 7),
            piece(PieceKind::King, Color::White, 3, 7),
            piece(PieceKind::King, Color::Black, 4, 0),
        ]);
        assert_eq!(result, Err(BoardError::MultipleKings(Color::White)));
    }

    #[test]
    fn from_pieces_rejects_bad_placement() {
        let result = Board::from_pieces([
            piece(PieceKind::King, Color::White, 4, 8),
            piece(PieceKind::King, Color::Black, 4, 0),
        ]);
        assert_eq!(result, Err(BoardError::OffBoard(Position::new(4, 8))));

        let result = Board::from_pieces([
            piece(PieceKind::King, Color::White, 4, 7),
            piece(PieceKind::Rook, Color::Black, 4, 7),
            piece(PieceKind::King, Color::Black, 4, 0),
        ]);
        assert_eq!(result, Err(BoardError::Occupied(Position::new(4, 7))));
    }

    #[test]
    fn from_pieces_keeps_order_and_clears_stamps() {
        let board = Board::from_pieces([
            piece(PieceKind::Rook, Color::White, 0, 7),
            piece(PieceKind::King, Color::White, 4, 7),
            piece(PieceKind::King, Color::Black, 4, 0).with_captured_at(3),
        ])
        .unwrap();
        assert_eq!(board.live(Color::White)[0].kind, PieceKind::Rook);
        assert_eq!(board.live(Color::White)[1].kind, PieceKind::King);
        assert_eq!(board.king(Color::Black).captured_at, None);
    }

    #[test]
    #[should_panic(expected = "has no king")]
    fn missing_king_panics() {
        Board::empty().king(Color::White);
    }
}
