//! Pieces on the board.

use crate::board::BoardView;
use crate::movegen::{self, SquareList};
use chess_core::{PieceKind, Player, Square};

/// A piece standing on a square.
///
/// The stored square always matches the cell holding the piece; only the
/// board relocates pieces, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    player: Player,
    square: Square,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, player: Player, square: Square) -> Self {
        Piece {
            kind,
            player,
            square,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn row(&self) -> u8 {
        self.square.row()
    }

    #[inline]
    pub const fn col(&self) -> u8 {
        self.square.col()
    }

    /// Returns true if the piece is owned by the other player.
    #[inline]
    pub fn is_opponent_of(&self, player: Player) -> bool {
        self.player != player
    }

    /// Destinations reachable without capturing.
    pub fn peaceful_moves<B: BoardView + ?Sized>(&self, board: &B) -> SquareList {
        movegen::peaceful_moves(self, board)
    }

    /// Destinations holding an opposing piece this piece can capture.
    pub fn piece_takes<B: BoardView + ?Sized>(&self, board: &B) -> SquareList {
        movegen::piece_takes(self, board)
    }

    /// Union of [`peaceful_moves`](Self::peaceful_moves) and
    /// [`piece_takes`](Self::piece_takes). The two sets never overlap.
    pub fn valid_moves<B: BoardView + ?Sized>(&self, board: &B) -> SquareList {
        let mut moves = self.peaceful_moves(board);
        for &to in &self.piece_takes(board) {
            moves.push(to);
        }
        moves
    }

    pub(crate) fn relocate(&mut self, to: Square) {
        self.square = to;
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        debug_assert_eq!(self.kind, PieceKind::Pawn);
        self.kind = kind;
    }
}
