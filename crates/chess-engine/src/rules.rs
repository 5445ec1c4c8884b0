//! Terminal-state detection.

use crate::movegen::{has_legal_move, is_king_attacked};
use crate::Board;
use chess_core::Player;
use std::fmt;

/// State of a game as seen by the player to move.
///
/// Exactly one variant holds for any position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The player to move has at least one legal move.
    Ongoing,
    /// The player to move is in check and has no legal move.
    Checkmate { winner: Player },
    /// The player to move is not in check and has no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true if no further moves can be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner, if the game ended in checkmate.
    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Integer encoding used by existing front ends:
    /// 0 when Player 1 is mated, 1 when Player 2 is mated, 2 for stalemate,
    /// 3 while the game goes on.
    pub const fn code(self) -> u8 {
        match self {
            GameStatus::Checkmate {
                winner: Player::Player2,
            } => 0,
            GameStatus::Checkmate {
                winner: Player::Player1,
            } => 1,
            GameStatus::Stalemate => 2,
            GameStatus::Ongoing => 3,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Classifies the position for the player to move.
pub fn game_status(board: &Board) -> GameStatus {
    if has_legal_move(board) {
        return GameStatus::Ongoing;
    }
    let us = board.side_to_move();
    if is_king_attacked(board, us) {
        GameStatus::Checkmate {
            winner: us.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
