//! Chess rules engine for two players on an 8x8 grid.
//!
//! This crate provides:
//! - [`Piece`] - a piece with its kind, owner, and square, and its per-piece
//!   move queries
//! - [`Board`] - the grid of cells plus the player to move
//! - [`GameState`] - complete game management with history and undo
//! - [`GameStatus`] - checkmate, stalemate, or ongoing
//! - Move generation, check detection, and perft
//!
//! # Architecture
//!
//! Each piece kind is described by a movement [`Pattern`](movegen::Pattern):
//! fixed leaps, sliding rays, or the pawn's forward push and diagonal
//! capture. A single generator walks those patterns, so adding a piece kind
//! means adding a table entry. Board-wide legality is layered on top by
//! trying each move on a copy of the board and rejecting it if the mover's
//! king ends up attacked.
//!
//! # Example
//!
//! ```
//! use chess_engine::{GameState, GameStatus};
//! use chess_core::Square;
//!
//! let mut game = GameState::new();
//! println!("Legal moves from starting position: {}", game.legal_moves().len());
//!
//! let from = Square::new(1, 3).unwrap();
//! let to = Square::new(3, 3).unwrap();
//! game.apply_legal_move(from, to).unwrap();
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

mod board;
mod game;
pub mod movegen;
mod piece;
pub mod rules;

pub use board::{Board, BoardError, BoardView};
pub use game::{GameError, GameState, MoveRecord};
pub use movegen::{
    classify, generate_moves, is_king_attacked, is_piece_attacked, is_square_attacked, make_move,
    pseudo_legal_moves, MoveList, SquareList,
};
pub use piece::Piece;
pub use rules::{game_status, GameStatus};
