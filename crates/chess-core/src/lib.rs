//! Core types for chess.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`PieceKind`] and [`Player`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation

mod mov;
mod piece;
mod player;
mod square;

pub use mov::{Move, MoveKind};
pub use piece::PieceKind;
pub use player::Player;
pub use square::{CoordError, Square};
