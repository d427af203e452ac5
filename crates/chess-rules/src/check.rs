//! Check detection.

use crate::movegen::candidate_moves;
use crate::Board;
use chess_core::{Color, PieceKind, Position};

/// Returns every square `attacker` reaches.
///
/// An attacking king contributes its eight neighbours directly instead of
/// its generated moves. Generating king moves here would need this very
/// function to decide whether those squares are safe, and the two calls
/// would recurse into each other.
pub fn attacked_squares(board: &Board, attacker: Color) -> Vec<Position> {
    let mut squares = Vec::new();
    for piece in board.live(attacker) {
        if piece.kind == PieceKind::King {
            squares.extend(
                Position::KING_STEPS
                    .iter()
                    .filter_map(|&(df, dr)| piece.position.checked_offset(df, dr)),
            );
        } else {
            squares.extend(candidate_moves(board, piece));
        }
    }
    squares
}

/// Returns true if `defender`'s king stands on a square the other side attacks.
pub fn is_in_check(board: &Board, defender: Color) -> bool {
    let king = board.king(defender).position;
    attacked_squares(board, defender.opposite()).contains(&king)
}
