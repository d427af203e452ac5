//! Game session: turn order, clocks, selection and end-of-game detection.
//!
//! The [`Game`] struct owns everything the presentation layer needs between
//! two clicks:
//! - the [`Board`] and the side to move
//! - one elapsed-time clock per side
//! - the currently selected piece and its legal destinations
//! - the check/checkmate status of both sides

use crate::apply::{apply_move, MoveOutcome};
use crate::check::is_in_check;
use crate::config::GameConfig;
use crate::handoff::Handoff;
use crate::legality::{is_checkmate, legal_moves, legal_moves_from};
use crate::Board;
use chess_core::{Color, Position};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A side has been checkmated (or stalemated) and no more moves are taken.
    #[error("game has already ended")]
    GameOver,
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    NoPiece(Position),
    /// The piece on the source square belongs to the side not to move.
    #[error("the piece on {0} is not the side to move's")]
    NotYourTurn(Position),
    /// The destination is not among the piece's legal moves.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Position, to: Position },
    /// The side that just moved is still in check, so its king could be taken.
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

/// Where a side stands after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SideStatus {
    #[default]
    Normal,
    InCheck,
    Checkmated,
    /// No legal move without being in check. Only reported when
    /// `rules.stalemate_is_checkmate` is off.
    Stalemated,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { loser: Color },
    Stalemate { side: Color },
}

/// Result of feeding one click to [`Game::click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected { from: Position, moves: Vec<Position> },
    /// The selected piece moved to the clicked square.
    Moved(MoveOutcome),
    /// The click missed every legal destination and the selection was dropped.
    Deselected,
    /// Nothing to select there, or the game is over.
    Ignored,
}

#[derive(Debug, Clone)]
struct Selection {
    index: usize,
    from: Position,
    moves: Vec<Position>,
}

/// A two-player game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Color,
    clocks: [u32; 2],
    selection: Option<Selection>,
    status: [SideStatus; 2],
    outcome: Option<Outcome>,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting position with default settings.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a game from the standard starting position.
    pub fn with_config(config: GameConfig) -> Self {
        Game {
            board: Board::standard(),
            to_move: Color::White,
            clocks: [0, 0],
            selection: None,
            status: [SideStatus::Normal; 2],
            outcome: None,
            config,
        }
    }

    /// Creates a game from a custom position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OpponentInCheck`] if the side not to move is in
    /// check, since the mover could then take a king.
    pub fn from_board(board: Board, to_move: Color, config: GameConfig) -> Result<Self, GameError> {
        let waiting = to_move.opposite();
        if is_in_check(&board, waiting) {
            return Err(GameError::OpponentInCheck(waiting));
        }
        let mut game = Game {
            board,
            to_move,
            clocks: [0, 0],
            selection: None,
            status: [SideStatus::Normal; 2],
            outcome: None,
            config,
        };
        game.evaluate();
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns `color`'s elapsed thinking time in seconds.
    pub fn clock(&self, color: Color) -> u32 {
        self.clocks[color.index()]
    }

    /// Advances the side to move's clock by one configured tick.
    pub fn tick(&mut self) {
        self.advance_clock(self.config.clock.tick_seconds);
    }

    /// Adds `seconds` to the side to move's clock. Clocks stop once the game
    /// is over.
    pub fn advance_clock(&mut self, seconds: u32) {
        if self.outcome.is_none() {
            let clock = &mut self.clocks[self.to_move.index()];
            *clock = clock.saturating_add(seconds);
        }
    }

    /// Returns the selected square and its legal destinations.
    pub fn selection(&self) -> Option<(Position, &[Position])> {
        self.selection
            .as_ref()
            .map(|s| (s.from, s.moves.as_slice()))
    }

    /// Returns the status of `color` as of the last move.
    pub fn status(&self, color: Color) -> SideStatus {
        self.status[color.index()]
    }

    /// Returns true if `color`'s king is attacked right now.
    pub fn is_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Returns how the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the minigame seed once a side has been checkmated.
    pub fn handoff(&self) -> Option<Handoff> {
        match self.outcome? {
            Outcome::Checkmate { loser } => Some(Handoff::from_board(&self.board, loser)),
            Outcome::Stalemate { .. } => None,
        }
    }

    /// Returns the legal destinations of the side to move's piece on `pos`.
    ///
    /// Empty if there is no such piece or the game is over.
    pub fn legal_destinations(&mut self, pos: Position) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves_from(&mut self.board, self.to_move, pos)
    }

    /// Plays `from -> to` for the side to move.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let color = self.board.occupant(from).ok_or(GameError::NoPiece(from))?;
        if color != self.to_move {
            return Err(GameError::NotYourTurn(from));
        }
        let index = self
            .board
            .index_at(color, from)
            .ok_or(GameError::NoPiece(from))?;

        if !legal_moves(&mut self.board, color, index).contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }
        Ok(self.commit(index, to))
    }

    /// Handles a click on `pos`.
    ///
    /// With nothing selected, a piece of the side to move on `pos` becomes
    /// the selection. With a selection, clicking one of its legal
    /// destinations plays the move and any other square drops the
    /// selection. Bad clicks are never errors.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.is_over() {
            self.selection = None;
            return ClickOutcome::Ignored;
        }

        match self.selection.take() {
            None => match self.board.index_at(self.to_move, pos) {
                Some(index) => {
                    let moves = legal_moves(&mut self.board, self.to_move, index);
                    tracing::debug!("selected {} with {} legal moves", pos, moves.len());
                    self.selection = Some(Selection {
                        index,
                        from: pos,
                        moves: moves.clone(),
                    });
                    ClickOutcome::Selected { from: pos, moves }
                }
                None => ClickOutcome::Ignored,
            },
            Some(selection) if selection.moves.contains(&pos) => {
                ClickOutcome::Moved(self.commit(selection.index, pos))
            }
            Some(_) => ClickOutcome::Deselected,
        }
    }

    /// Handles a click given in window pixels.
    pub fn click_at(&mut self, x: i32, y: i32) -> ClickOutcome {
        match self.square_at(x, y) {
            Some(pos) => self.click(pos),
            None if self.selection.take().is_some() => ClickOutcome::Deselected,
            None => ClickOutcome::Ignored,
        }
    }

    /// Converts window pixels to a board square using the configured geometry.
    ///
    /// `None` for pixels outside the board and for a zero square size.
    pub fn square_at(&self, x: i32, y: i32) -> Option<Position> {
        let geometry = &self.config.geometry;
        let size = i32::try_from(geometry.square_px).ok()?;
        let top = i32::try_from(geometry.top_offset_px).ok()?;
        let file = x.checked_div_euclid(size)?;
        let rank = y.checked_sub(top)?.checked_div_euclid(size)?;
        Position::try_new(i8::try_from(file).ok()?, i8::try_from(rank).ok()?).ok()
    }

    fn commit(&mut self, index: usize, to: Position) -> MoveOutcome {
        let color = self.to_move;
        let clock = self.clock(color);
        let outcome = apply_move(&mut self.board, color, index, to, clock);
        self.to_move = color.opposite();
        self.selection = None;
        self.evaluate();
        outcome
    }

    /// Recomputes both sides' status, White first. The first side found
    /// without legal moves ends the game.
    fn evaluate(&mut self) {
        for color in Color::ALL {
            let status = self.side_status(color);
            self.status[color.index()] = status;
            if self.outcome.is_some() {
                continue;
            }
            match status {
                SideStatus::Checkmated => {
                    tracing::info!("{} is checkmated", color);
                    self.outcome = Some(Outcome::Checkmate { loser: color });
                }
                SideStatus::Stalemated => {
                    tracing::info!("{} is stalemated", color);
                    self.outcome = Some(Outcome::Stalemate { side: color });
                }
                SideStatus::Normal | SideStatus::InCheck => {}
            }
        }
    }

    fn side_status(&mut self, color: Color) -> SideStatus {
        let in_check = is_in_check(&self.board, color);
        let stuck = is_checkmate(&mut self.board, color);
        match (stuck, in_check) {
            (true, true) => SideStatus::Checkmated,
            (true, false) if self.config.rules.stalemate_is_checkmate => SideStatus::Checkmated,
            (true, false) => SideStatus::Stalemated,
            (false, true) => SideStatus::InCheck,
            (false, false) => SideStatus::Normal,
        }
    }
}
