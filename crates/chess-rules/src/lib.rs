//! Rule engine for a two-player chess game.
//!
//! This crate provides:
//! - [`Board`] - live and captured pieces for both sides
//! - [`candidate_moves`] - per-piece move patterns
//! - [`is_in_check`] and [`legal_moves`] - king safety
//! - [`is_checkmate`] - end-of-game detection
//! - [`apply_move`] - captures, castling and promotion
//! - [`Game`] - a session with turn order, clocks and click handling
//!
//! # Architecture
//!
//! Pieces are kept in plain per-side collections rather than a square
//! grid. Legality is decided by trying each candidate on the real board and
//! asking whether the mover's king is attacked afterwards; the board is put
//! back exactly as it was before the next candidate is tried.
//!
//! The engine is synchronous and keeps no global state. The caller owns the
//! [`Game`] and serializes every call into it.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Position};
//! use chess_rules::{ClickOutcome, Game};
//!
//! let mut game = Game::new();
//!
//! // Pick up the king's pawn and push it two squares.
//! let moves = game.legal_destinations(Position::new(4, 6));
//! assert_eq!(moves.len(), 2);
//! game.make_move(Position::new(4, 6), Position::new(4, 4)).unwrap();
//!
//! // The same through clicks.
//! assert!(matches!(game.click(Position::new(4, 1)), ClickOutcome::Selected { .. }));
//! assert!(matches!(game.click(Position::new(4, 3)), ClickOutcome::Moved(_)));
//! assert_eq!(game.to_move(), Color::White);
//! ```

pub mod apply;
mod board;
pub mod check;
pub mod config;
mod game;
pub mod handoff;
pub mod legality;
pub mod movegen;

pub use apply::{apply_move, CastleSide, MoveOutcome};
pub use board::{Board, BoardError};
pub use check::{attacked_squares, is_in_check};
pub use config::{ConfigError, GameConfig};
pub use game::{ClickOutcome, Game, GameError, Outcome, SideStatus};
pub use handoff::Handoff;
pub use legality::{
    all_legal_moves, has_legal_move, is_checkmate, legal_moves, legal_moves_at, legal_moves_from,
};
pub use movegen::candidate_moves;
