//! Legal move filtering and checkmate detection.
//!
//! A candidate is legal when playing it does not leave the mover's own king
//! attacked. Each candidate is tried on the real board inside a
//! [`Simulation`], which puts the board back exactly as it was when dropped.

use crate::check::is_in_check;
use crate::movegen::candidate_moves;
use crate::Board;
use chess_core::{Color, Piece, Position};

/// A hypothetical move applied to the board in place.
///
/// Only the mover's position and the removed opponent (if any) change, and
/// both are restored on drop. The opponent goes back to its original index
/// so collection order is untouched.
struct Simulation<'a> {
    board: &'a mut Board,
    color: Color,
    index: usize,
    origin: Position,
    taken: Option<(usize, Piece)>,
}

impl<'a> Simulation<'a> {
    fn begin(board: &'a mut Board, color: Color, index: usize, to: Position) -> Self {
        let them = color.opposite();
        let taken = board
            .index_at(them, to)
            .map(|i| (i, board.live_mut(them).remove(i)));

        let mover = &mut board.live_mut(color)[index];
        let origin = mover.position;
        mover.position = to;

        Simulation {
            board,
            color,
            index,
            origin,
            taken,
        }
    }

    fn king_attacked(&self) -> bool {
        is_in_check(self.board, self.color)
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.live_mut(self.color)[self.index].position = self.origin;
        if let Some((i, piece)) = self.taken.take() {
            self.board.live_mut(self.color.opposite()).insert(i, piece);
        }
    }
}

/// Returns the legal destinations of `color`'s live piece at `index`.
///
/// The board is borrowed mutably for the duration of the call but is left
/// unchanged. An out-of-range index yields no moves.
pub fn legal_moves(board: &mut Board, color: Color, index: usize) -> Vec<Position> {
    let (from, candidates) = match board.live(color).get(index) {
        Some(piece) => (piece.position, candidate_moves(board, piece)),
        None => return Vec::new(),
    };

    candidates
        .into_iter()
        .filter(|&to| {
            let sim = Simulation::begin(board, color, index, to);
            let attacked = sim.king_attacked();
            if attacked {
                tracing::trace!("{} {} -> {} leaves the king attacked", color, from, to);
            }
            !attacked
        })
        .collect()
}

/// Returns the legal destinations of `color`'s piece on `pos`.
pub fn legal_moves_from(board: &mut Board, color: Color, pos: Position) -> Vec<Position> {
    match board.index_at(color, pos) {
        Some(index) => legal_moves(board, color, index),
        None => Vec::new(),
    }
}

/// Returns the legal destinations of whichever piece stands on `pos`.
pub fn legal_moves_at(board: &mut Board, pos: Position) -> Vec<Position> {
    match board.occupant(pos) {
        Some(color) => legal_moves_from(board, color, pos),
        None => Vec::new(),
    }
}

/// Returns every legal `(from, to)` pair for `color`, piece by piece.
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<(Position, Position)> {
    let mut moves = Vec::new();
    for index in 0..board.live(color).len() {
        let from = board.live(color)[index].position;
        moves.extend(
            legal_moves(board, color, index)
                .into_iter()
                .map(|to| (from, to)),
        );
    }
    moves
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    (0..board.live(color).len()).any(|index| !legal_moves(board, color, index).is_empty())
}

/// Returns true if `color` has no legal move at all.
///
/// This does not ask whether the king is in check, so a side with no moves
/// and no check counts as checkmated too. [`crate::Game`] can tell the two
/// apart when configured to.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    !has_legal_move(board, color)
}
