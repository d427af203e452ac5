//! Candidate move generation.
//!
//! Candidates follow each piece's movement pattern against the current
//! board but ignore king safety; [`crate::legality`] filters them.
//! Destinations off the board are never produced.

use crate::Board;
use chess_core::{Color, Piece, PieceKind, Position};

/// Files a castling king lands on, with the file of the rook it pairs with.
pub(crate) const CASTLING_TARGETS: [(i8, i8); 2] = [(2, 0), (6, 7)];

/// File the king stands on at setup.
pub(crate) const KING_FILE: i8 = 4;

/// Generates candidate destinations for `piece`.
///
/// Pieces of `piece.color` are friendly and pieces of the other color are
/// opposing. The board is not modified.
pub fn candidate_moves(board: &Board, piece: &Piece) -> Vec<Position> {
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece, &mut moves),
        PieceKind::Rook => slide_moves(board, piece, &Position::ORTHOGONAL, &mut moves),
        PieceKind::Bishop => slide_moves(board, piece, &Position::DIAGONAL, &mut moves),
        PieceKind::Queen => {
            slide_moves(board, piece, &Position::ORTHOGONAL, &mut moves);
            slide_moves(board, piece, &Position::DIAGONAL, &mut moves);
        }
        PieceKind::Knight => step_moves(board, piece, &Position::KNIGHT_JUMPS, &mut moves),
        PieceKind::King => {
            step_moves(board, piece, &Position::KING_STEPS, &mut moves);
            castling_moves(board, piece, &mut moves);
        }
    }
    moves
}

/// Pushes, the double push from the pawn rank, and diagonal captures.
fn pawn_moves(board: &Board, pawn: &Piece, moves: &mut Vec<Position>) {
    let dir = pawn.color.pawn_direction();
    let from = pawn.position;

    if let Some(one) = from.checked_offset(0, dir) {
        if board.occupant(one).is_none() {
            moves.push(one);

            if from.rank == pawn.color.pawn_rank() {
                if let Some(two) = one.checked_offset(0, dir) {
                    if board.occupant(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    let them = pawn.color.opposite();
    for df in [-1, 1] {
        if let Some(to) = from.checked_offset(df, dir) {
            if board.occupant(to) == Some(them) {
                moves.push(to);
            }
        }
    }
}

/// Walks each direction until the edge or the first occupied square.
fn slide_moves(board: &Board, piece: &Piece, dirs: &[(i8, i8)], moves: &mut Vec<Position>) {
    for &(df, dr) in dirs {
        let mut to = piece.position;
        while let Some(next) = to.checked_offset(df, dr) {
            to = next;
            match board.occupant(to) {
                None => moves.push(to),
                Some(color) => {
                    if color != piece.color {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
}

/// Single jumps to fixed offsets (knight and king).
fn step_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)], moves: &mut Vec<Position>) {
    for &(df, dr) in offsets {
        if let Some(to) = piece.position.checked_offset(df, dr) {
            if board.occupant(to) != Some(piece.color) {
                moves.push(to);
            }
        }
    }
}

/// Two-file king moves toward a rook still on its corner.
///
/// Only the king's and the rook's squares are checked. The squares between
/// them and the squares the king crosses are not examined.
fn castling_moves(board: &Board, king: &Piece, moves: &mut Vec<Position>) {
    let rank = king.color.home_rank();
    if king.position != Position::new(KING_FILE, rank) {
        return;
    }
    for (king_file, rook_file) in CASTLING_TARGETS {
        let rook_home = Position::new(rook_file, rank);
        let to = Position::new(king_file, rank);
        if board.has_piece(king.color, PieceKind::Rook, rook_home)
            && board.occupant(to) != Some(king.color)
        {
            moves.push(to);
        }
    }
}

/// Returns the square a castling rook starts from and the one it lands on,
/// given the king's destination. `None` if `to` is not a castling target.
pub(crate) fn castling_rook_route(color: Color, to: Position) -> Option<(Position, Position)> {
    let rank = color.home_rank();
    if to.rank != rank {
        return None;
    }
    CASTLING_TARGETS
        .iter()
        .find(|&&(king_file, _)| king_file == to.file)
        .map(|&(king_file, rook_file)| {
            // The rook ends next to the king, on the side the king came from.
            let step = (KING_FILE - king_file).signum();
            (
                Position::new(rook_file, rank),
                Position::new(king_file + step, rank),
            )
        })
}
