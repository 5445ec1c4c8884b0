//! Board representation.

use crate::movegen::is_king_attacked;
use crate::{MoveRecord, Piece};
use chess_core::{CoordError, Move, PieceKind, Player, Square};
use thiserror::Error;

/// Errors raised when a hand-built board breaks a board invariant.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{player} has {count} kings, expected exactly one")]
    KingCount { player: Player, count: usize },
    /// The player who just moved would still have their king attacked,
    /// leaving it capturable on the next move.
    #[error("{player} is in check but not on move")]
    WaitingKingAttacked { player: Player },
}

/// Read access to square ownership.
///
/// Piece move generation only needs to know who (if anyone) owns a square,
/// so it is written against this trait rather than a concrete [`Board`].
pub trait BoardView {
    /// Returns the owner of the piece on `sq`, or `None` if the square is empty.
    fn occupant(&self, sq: Square) -> Option<Player>;
}

/// Back-row layout from column 0 to column 7.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of cells plus the player to move.
///
/// `Board` is `Copy`: search and legality checks work on cheap copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells indexed `[row][col]`; `None` is an empty square.
    cells: [[Option<Piece>; 8]; 8],

    /// The side to move.
    side_to_move: Player,
}

impl Board {
    /// Creates an empty board with Player 1 to move.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            side_to_move: Player::Player1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for player in Player::ALL {
            for (col, &kind) in BACK_ROW.iter().enumerate() {
                if let Some(sq) = Square::new(player.back_row(), col as u8) {
                    board.place(kind, player, sq);
                }
                if let Some(sq) = Square::new(player.pawn_row(), col as u8) {
                    board.place(PieceKind::Pawn, player, sq);
                }
            }
        }
        board
    }

    /// Returns the occupant of `(row, col)`, or an error if the coordinate
    /// is outside the grid.
    pub fn get_piece(&self, row: u8, col: u8) -> Result<Option<Piece>, CoordError> {
        let sq = Square::try_new(row, col)?;
        Ok(self.piece_at(sq))
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Puts a new piece on `sq`, returning whatever stood there before.
    pub fn place(&mut self, kind: PieceKind, player: Player, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).replace(Piece::new(kind, player, sq))
    }

    /// Clears `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).take()
    }

    /// Returns the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Sets the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    /// Iterates over every piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// Iterates over the pieces of one player.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.player() == player)
    }

    /// Counts the pieces of the given kind and player.
    pub fn count(&self, kind: PieceKind, player: Player) -> usize {
        self.pieces_of(player).filter(|p| p.kind() == kind).count()
    }

    /// Returns the square of the given player's king.
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces_of(player)
            .find(|p| p.kind() == PieceKind::King)
            .map(|p| p.square())
    }

    /// Checks that each player has exactly one king and that the player
    /// not on move is not in check.
    pub fn validate(&self) -> Result<(), BoardError> {
        for player in Player::ALL {
            let count = self.count(PieceKind::King, player);
            if count != 1 {
                return Err(BoardError::KingCount { player, count });
            }
        }
        let waiting = self.side_to_move.opposite();
        if is_king_attacked(self, waiting) {
            return Err(BoardError::WaitingKingAttacked { player: waiting });
        }
        Ok(())
    }

    /// Relocates the piece on `from` to `to` and passes the turn.
    ///
    /// Any occupant of `to` is captured. A pawn reaching its promotion row
    /// becomes a queen. Returns `None`, leaving the board untouched, when
    /// `from` is empty or equals `to`.
    pub(crate) fn apply(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        if from == to {
            return None;
        }
        let moved = self.remove(from)?;
        let captured = self.remove(to);

        let mut mov = if captured.is_some() {
            Move::take(from, to)
        } else {
            Move::peaceful(from, to)
        };

        let mut piece = moved;
        piece.relocate(to);
        if piece.kind() == PieceKind::Pawn && to.row() == piece.player().promotion_row() {
            piece.promote(PieceKind::Queen);
            mov = mov.with_promotion();
            tracing::trace!(square = %to, player = %piece.player(), "pawn promoted");
        }
        *self.cell_mut(to) = Some(piece);

        let record = MoveRecord {
            mov,
            moved,
            captured,
            side_to_move: self.side_to_move,
        };
        self.side_to_move = self.side_to_move.opposite();
        Some(record)
    }

    /// Reverts a move previously returned by [`apply`](Self::apply).
    pub(crate) fn retract(&mut self, record: &MoveRecord) {
        *self.cell_mut(record.mov.to()) = record.captured;
        *self.cell_mut(record.mov.from()) = Some(record.moved);
        self.side_to_move = record.side_to_move;
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }
}

impl BoardView for Board {
    #[inline]
    fn occupant(&self, sq: Square) -> Option<Player> {
        self.piece_at(sq).map(|p| p.player())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn startpos_layout() {
        let board = Board::startpos();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.side_to_move(), Player::Player1);

        let king = board.piece_at(sq(0, 3)).unwrap();
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(king.player(), Player::Player1);
        let queen = board.piece_at(sq(7, 4)).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.player(), Player::Player2);

        for col in 0..8 {
            assert_eq!(board.get_piece(1, col).unwrap().unwrap().kind(), PieceKind::Pawn);
            assert_eq!(board.get_piece(6, col).unwrap().unwrap().kind(), PieceKind::Pawn);
            for row in 2..6 {
                assert_eq!(board.get_piece(row, col), Ok(None));
            }
        }
    }

    #[test]
    fn stored_coordinates_match_cells() {
        let board = Board::startpos();
        for sq in Square::all() {
            if let Some(piece) = board.piece_at(sq) {
                assert_eq!(piece.square(), sq);
            }
        }
    }

    #[test]
    fn get_piece_out_of_bounds() {
        let board = Board::startpos();
        assert_eq!(
            board.get_piece(8, 0),
            Err(CoordError::OutOfBounds { row: 8, col: 0 })
        );
        assert!(board.get_piece(0, 200).is_err());
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::empty();
        assert_eq!(board.place(PieceKind::Rook, Player::Player2, sq(4, 4)), None);
        let displaced = board.place(PieceKind::Bishop, Player::Player1, sq(4, 4));
        assert_eq!(displaced.map(|p| p.kind()), Some(PieceKind::Rook));
        assert_eq!(board.occupant(sq(4, 4)), Some(Player::Player1));
        assert_eq!(board.remove(sq(4, 4)).map(|p| p.kind()), Some(PieceKind::Bishop));
        assert_eq!(board.occupant(sq(4, 4)), None);
    }

    #[test]
    fn king_square_and_validate() {
        let board = Board::startpos();
        assert_eq!(board.king_square(Player::Player1), Some(sq(0, 3)));
        assert_eq!(board.king_square(Player::Player2), Some(sq(7, 3)));
        assert!(board.validate().is_ok());

        let mut missing = Board::empty();
        missing.place(PieceKind::King, Player::Player1, sq(0, 0));
        assert_eq!(
            missing.validate(),
            Err(BoardError::KingCount {
                player: Player::Player2,
                count: 0
            })
        );
    }

    #[test]
    fn validate_rejects_capturable_king() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Player::Player1, sq(0, 7));
        board.place(PieceKind::Rook, Player::Player1, sq(3, 0));
        board.place(PieceKind::King, Player::Player2, sq(7, 0));
        assert_eq!(
            board.validate(),
            Err(BoardError::WaitingKingAttacked {
                player: Player::Player2
            })
        );

        // With Player 2 on move the same check is an ordinary position
        board.set_side_to_move(Player::Player2);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn apply_updates_cells_and_coordinates() {
        let mut board = Board::startpos();
        let record = board.apply(sq(0, 1), sq(2, 2)).unwrap();
        assert_eq!(record.mov, Move::peaceful(sq(0, 1), sq(2, 2)));
        assert_eq!(record.captured, None);
        assert_eq!(record.side_to_move, Player::Player1);
        assert_eq!(board.side_to_move(), Player::Player2);
        assert!(board.piece_at(sq(0, 1)).is_none());
        assert_eq!(board.piece_at(sq(2, 2)).unwrap().square(), sq(2, 2));
    }

    #[test]
    fn apply_from_empty_square_is_noop() {
        let mut board = Board::startpos();
        let before = board;
        assert!(board.apply(sq(4, 4), sq(5, 5)).is_none());
        assert!(board.apply(sq(0, 0), sq(0, 0)).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn capture_and_retract() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Player::Player1, sq(0, 0));
        board.place(PieceKind::Knight, Player::Player2, sq(5, 0));
        let before = board;

        let record = board.apply(sq(0, 0), sq(5, 0)).unwrap();
        assert!(record.mov.is_take());
        assert_eq!(record.captured.map(|p| p.kind()), Some(PieceKind::Knight));
        assert_eq!(board.pieces().count(), 1);

        board.retract(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_and_retract() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Player::Player2, sq(1, 5));
        board.set_side_to_move(Player::Player2);
        let before = board;

        let record = board.apply(sq(1, 5), sq(0, 5)).unwrap();
        assert!(record.mov.is_promotion());
        let queen = board.piece_at(sq(0, 5)).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.player(), Player::Player2);

        board.retract(&record);
        assert_eq!(board, before);
        assert_eq!(board.piece_at(sq(1, 5)).unwrap().kind(), PieceKind::Pawn);
    }
}
