//! Chess piece representation.

use crate::{Color, Position};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the board symbol for this kind, uppercase for White.
    pub const fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// Free-movement direction used by the dodge minigame after checkmate.
///
/// Each component is -1, 0 or 1. Chess legality never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Motion {
    pub dx: i8,
    pub dy: i8,
}

impl Motion {
    /// No movement.
    pub const STILL: Motion = Motion { dx: 0, dy: 0 };

    /// Creates a motion, clamping each component to its sign.
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Motion {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }
}

/// A piece on (or taken off) the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    /// Seconds on the capturing side's clock when this piece was taken.
    pub captured_at: Option<u32>,
    pub motion: Motion,
}

impl Piece {
    /// Creates a live piece at `position`.
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            position,
            captured_at: None,
            motion: Motion::STILL,
        }
    }

    /// Returns the piece stamped with a capture time.
    pub fn with_captured_at(mut self, seconds: u32) -> Self {
        self.captured_at = Some(seconds);
        self
    }

    /// Returns true once the piece has been captured.
    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.captured_at.is_some()
    }

    /// Returns the board symbol of this piece.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    pub fn set_motion(&mut self, dx: i8, dy: i8) {
        self.motion = Motion::new(dx, dy);
    }

    /// Prepares a captured piece for the minigame: kind, color and capture
    /// time are kept, the position goes back to the origin and the piece
    /// stands still.
    pub fn reset_for_minigame(&self) -> Self {
        Piece {
            position: Position::ORIGIN,
            motion: Motion::STILL,
            ..self.clone()
        }
    }
}
