//! Committing moves to the board.

use crate::movegen::castling_rook_route;
use crate::Board;
use chess_core::{Color, Piece, PieceKind, Position};

/// Which rook a castling move brought along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward file 7.
    Kingside,
    /// Toward file 0.
    Queenside,
}

/// What happened when a move was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub color: Color,
    pub from: Position,
    pub to: Position,
    /// Kind of the opposing piece taken on `to`.
    pub captured: Option<PieceKind>,
    pub castled: Option<CastleSide>,
    /// True if the castling rook landed on a square that was already
    /// occupied. The two pieces then share that square.
    pub rook_blocked: bool,
    /// True if a pawn reached the last rank and became a queen.
    pub promoted: bool,
}

/// Commits `color`'s live piece at `index` to `to`.
///
/// The move must already be legal (see [`crate::legality::legal_moves`]);
/// there is no rollback. `clock` is the mover's elapsed seconds and is
/// stamped on any captured piece. Turn order is the caller's concern.
///
/// # Panics
///
/// Panics if `index` is out of range for `color`'s live pieces.
pub fn apply_move(
    board: &mut Board,
    color: Color,
    index: usize,
    to: Position,
    clock: u32,
) -> MoveOutcome {
    let them = color.opposite();
    let (kind, from) = {
        let piece = &board.live(color)[index];
        (piece.kind, piece.position)
    };

    let captured = board.index_at(them, to).map(|i| {
        let taken = board.live_mut(them).remove(i).with_captured_at(clock);
        debug_assert!(taken.kind != PieceKind::King, "a king was captured");
        tracing::debug!("{} {} captured on {} at {}s", them, taken.kind, to, clock);
        let kind = taken.kind;
        board.captured_mut(them).push(taken);
        kind
    });

    let (castled, rook_blocked) = if kind == PieceKind::King && (to.file - from.file).abs() == 2 {
        match castle_rook(board, color, to) {
            Some((side, blocked)) => (Some(side), blocked),
            None => (None, false),
        }
    } else {
        (None, false)
    };

    board.live_mut(color)[index].position = to;

    let promoted = kind == PieceKind::Pawn && (to.rank == 0 || to.rank == 7);
    if promoted {
        board.live_mut(color)[index] = Piece::new(PieceKind::Queen, color, to);
        tracing::debug!("{} pawn promoted to queen on {}", color, to);
    }

    tracing::debug!("{} {} {} -> {}", color, kind, from, to);
    MoveOutcome {
        color,
        from,
        to,
        captured,
        castled,
        rook_blocked,
        promoted,
    }
}

/// Moves the rook paired with a castling king landing on `to`.
///
/// The rook is moved even if its landing square is occupied; nothing on the
/// way is checked. The flag reports whether the landing square was taken.
fn castle_rook(board: &mut Board, color: Color, to: Position) -> Option<(CastleSide, bool)> {
    let (rook_from, rook_to) = castling_rook_route(color, to)?;
    let Some(rook) = board
        .live(color)
        .iter()
        .position(|p| p.kind == PieceKind::Rook && p.position == rook_from)
    else {
        tracing::warn!("{} king castled to {} without a rook on {}", color, to, rook_from);
        return None;
    };

    let blocker = board.piece_at(rook_to);
    let blocked = blocker.is_some();
    if let Some(blocker) = blocker {
        tracing::warn!(
            "{} rook lands on {} which already holds a {} {}",
            color,
            rook_to,
            blocker.color,
            blocker.kind
        );
    }
    board.live_mut(color)[rook].position = rook_to;
    tracing::debug!("{} rook {} -> {} (castling)", color, rook_from, rook_to);

    let side = if rook_from.file > rook_to.file {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    };
    Some((side, blocked))
}
