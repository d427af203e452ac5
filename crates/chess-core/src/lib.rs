//! Core types for the chess rule engine.
//!
//! This crate provides the value types shared by the rules crate and the
//! presentation layer that drives it:
//! - [`Color`] for the two sides
//! - [`PieceKind`], [`Piece`] and [`Motion`] for piece representation
//! - [`Position`] for board coordinates

mod color;
mod piece;
mod position;

pub use color::Color;
pub use piece::{Motion, Piece, PieceKind};
pub use position::{Position, PositionError, BOARD_SIZE};
