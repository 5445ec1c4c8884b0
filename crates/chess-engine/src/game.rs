//! Full game management with history tracking.
//!
//! [`GameState`] owns the authoritative [`Board`] and the move history.
//! Moves enter through one of two doors:
//! - [`GameState::apply_legal_move`] validates the move against the rules
//! - [`GameState::apply_raw_move`] relocates without checks, for search
//!   look-ahead that only ever plays moves it generated itself
//!
//! Either kind of move can be taken back with [`GameState::undo_move`].

use crate::movegen::{self, generate_moves, is_king_attacked, legal_destinations, SquareList};
use crate::rules::{game_status, GameStatus};
use crate::{Board, BoardError, MoveList, Piece};
use chess_core::{CoordError, Move, Player, Square};
use thiserror::Error;

/// A recorded move in game history.
///
/// Holds everything needed to retract the move exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move, flagged as take and/or promotion.
    pub mov: Move,
    /// The moving piece as it stood before the move.
    pub moved: Piece,
    /// The piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// The player to move before this move.
    pub side_to_move: Player,
}

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the source square belongs to the player not on move.
    #[error("piece on {square} belongs to {owner}, but {to_move} is to move")]
    NotYourPiece {
        square: Square,
        owner: Player,
        to_move: Player,
    },
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The game has already ended.
    #[error("game is over ({0})")]
    GameOver(GameStatus),
}

/// A complete game: the board, whose turn it is, and what has been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current position.
    board: Board,
    /// Applied moves, oldest first.
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        GameState {
            board: Board::startpos(),
            history: Vec::new(),
        }
    }

    /// Creates a game from a custom position.
    ///
    /// Fails unless each player has exactly one king.
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        board.validate()?;
        Ok(GameState {
            board,
            history: Vec::new(),
        })
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn side_to_move(&self) -> Player {
        self.board.side_to_move()
    }

    /// Returns the occupant of `(row, col)`.
    pub fn get_piece(&self, row: u8, col: u8) -> Result<Option<Piece>, CoordError> {
        self.board.get_piece(row, col)
    }

    /// Non-capturing destinations of the piece on `sq` (empty if no piece).
    pub fn valid_peaceful_moves(&self, sq: Square) -> SquareList {
        self.board
            .piece_at(sq)
            .map(|p| p.peaceful_moves(&self.board))
            .unwrap_or_default()
    }

    /// Capturing destinations of the piece on `sq` (empty if no piece).
    pub fn valid_piece_takes(&self, sq: Square) -> SquareList {
        self.board
            .piece_at(sq)
            .map(|p| p.piece_takes(&self.board))
            .unwrap_or_default()
    }

    /// Pseudo-legal destinations of the piece on `sq`: peaceful moves plus
    /// takes, without checking whether the own king is left attacked.
    pub fn valid_moves(&self, sq: Square) -> SquareList {
        self.board
            .piece_at(sq)
            .map(|p| p.valid_moves(&self.board))
            .unwrap_or_default()
    }

    /// Fully legal destinations of the piece on `sq`.
    ///
    /// Empty unless the square holds a piece of the player to move.
    pub fn legal_moves_from(&self, sq: Square) -> SquareList {
        legal_destinations(&self.board, sq)
    }

    /// Returns all legal moves of the player to move.
    pub fn legal_moves(&self) -> MoveList {
        generate_moves(&self.board)
    }

    /// Returns true if the given player's king is attacked.
    pub fn is_in_check(&self, player: Player) -> bool {
        is_king_attacked(&self.board, player)
    }

    /// Returns true if a piece of `by` could capture on `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Player) -> bool {
        movegen::is_square_attacked(&self.board, sq, by)
    }

    /// Classifies the current position: checkmate, stalemate, or ongoing.
    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Makes a move after checking it against the rules.
    ///
    /// Returns the applied move, flagged as take and/or promotion.
    pub fn apply_legal_move(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::GameOver(status));
        }

        let to_move = self.side_to_move();
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;

        if piece.is_opponent_of(to_move) {
            return Err(GameError::NotYourPiece {
                square: from,
                owner: piece.player(),
                to_move,
            });
        }

        if !self.legal_moves_from(from).contains(to) {
            let attempted = movegen::classify(&self.board, from, to);
            tracing::debug!(%attempted, player = %to_move, "rejected illegal move");
            return Err(GameError::IllegalMove(attempted));
        }

        self.apply_raw_move(from, to)
    }

    /// Makes a move without any legality check.
    ///
    /// Only fails when `from` is empty. Callers are responsible for passing
    /// moves they know to be legal, typically taken from
    /// [`legal_moves`](Self::legal_moves).
    pub fn apply_raw_move(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        let record = self
            .board
            .apply(from, to)
            .ok_or(GameError::EmptySquare(from))?;
        self.history.push(record);
        Ok(record.mov)
    }

    /// Takes back the most recent move, returning its record.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.board.retract(&record);
        Some(record)
    }
}
