//! Data handed to the dodge minigame once a side is checkmated.

use crate::Board;
use chess_core::{Color, Piece};

/// Obstacles for the minigame.
///
/// The checkmated side has to dodge the pieces it lost during the game, so
/// its own captured collection seeds the obstacle set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub loser: Color,
    /// The loser's captured pieces in capture order, with kind, color and
    /// capture time kept and position and motion reset.
    pub obstacles: Vec<Piece>,
}

impl Handoff {
    /// Builds the handoff for `loser` from the board's captured pieces.
    pub fn from_board(board: &Board, loser: Color) -> Self {
        let obstacles: Vec<Piece> = board
            .captured(loser)
            .iter()
            .map(Piece::reset_for_minigame)
            .collect();
        tracing::info!(
            "{} is checkmated, handing {} captured pieces to the minigame",
            loser,
            obstacles.len()
        );
        Handoff { loser, obstacles }
    }
}
