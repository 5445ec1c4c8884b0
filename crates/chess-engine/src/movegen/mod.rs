//! Move generation.
//!
//! Per-piece destinations come from the pattern table in [`patterns`].
//! Board-wide generation comes in two flavours: pseudo-legal (piece geometry
//! only) and legal (additionally never leaving the mover's king attacked).

mod patterns;
pub mod perft;

use crate::board::{Board, BoardView};
use crate::Piece;
use chess_core::{Move, Player, Square};

pub use patterns::{
    pattern, Offset, Pattern, BISHOP_RAYS, KING_OFFSETS, KNIGHT_OFFSETS, PAWN_CAPTURE_COLS,
    QUEEN_RAYS, ROOK_RAYS,
};

/// A list of destination squares with a fixed maximum capacity.
///
/// A single piece reaches at most 27 squares (a queen in the centre), so a
/// small inline array is enough and no allocation happens per query.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; Self::MAX_SQUARES],
    len: usize,
}

impl SquareList {
    /// Maximum number of destinations of any single piece, rounded up.
    pub const MAX_SQUARES: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square::ORIGIN; Self::MAX_SQUARES],
            len: 0,
        }
    }

    /// Adds a square to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_SQUARES);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Retains only squares for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.squares[read]) {
                self.squares[write] = self.squares[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves in any chess position.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns a mutable slice of the moves, e.g. for ordering.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Destinations the piece reaches without capturing.
pub fn peaceful_moves<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> SquareList {
    let mut out = SquareList::new();
    let from = piece.square();

    match pattern(piece.kind()) {
        Pattern::Leap(offsets) => {
            for &(dr, dc) in offsets {
                if let Some(to) = from.offset(dr, dc) {
                    if board.occupant(to).is_none() {
                        out.push(to);
                    }
                }
            }
        }
        Pattern::Slide(rays) => {
            for &(dr, dc) in rays {
                let mut cur = from;
                while let Some(to) = cur.offset(dr, dc) {
                    if board.occupant(to).is_some() {
                        break;
                    }
                    out.push(to);
                    cur = to;
                }
            }
        }
        Pattern::Pawn => {
            let player = piece.player();
            let dir = player.pawn_direction();
            if let Some(one) = from.offset(dir, 0) {
                if board.occupant(one).is_none() {
                    out.push(one);
                    if from.row() == player.pawn_row() {
                        if let Some(two) = one.offset(dir, 0) {
                            if board.occupant(two).is_none() {
                                out.push(two);
                            }
                        }
                    }
                }
            }
        }
    }

    out
}

/// Destinations holding an opposing piece that this piece can capture.
///
/// Squares held by the piece's own side are never included.
pub fn piece_takes<B: BoardView + ?Sized>(piece: &Piece, board: &B) -> SquareList {
    let mut out = SquareList::new();
    let from = piece.square();
    let us = piece.player();
    let is_enemy = |sq: Square| matches!(board.occupant(sq), Some(owner) if owner != us);

    match pattern(piece.kind()) {
        Pattern::Leap(offsets) => {
            for &(dr, dc) in offsets {
                if let Some(to) = from.offset(dr, dc) {
                    if is_enemy(to) {
                        out.push(to);
                    }
                }
            }
        }
        Pattern::Slide(rays) => {
            for &(dr, dc) in rays {
                let mut cur = from;
                while let Some(to) = cur.offset(dr, dc) {
                    match board.occupant(to) {
                        None => cur = to,
                        Some(owner) => {
                            if owner != us {
                                out.push(to);
                            }
                            break;
                        }
                    }
                }
            }
        }
        Pattern::Pawn => {
            let dir = us.pawn_direction();
            for dc in PAWN_CAPTURE_COLS {
                if let Some(to) = from.offset(dir, dc) {
                    if is_enemy(to) {
                        out.push(to);
                    }
                }
            }
        }
    }

    out
}

/// Returns true if the piece on `sq` sits in the capture set of any
/// opposing piece. An empty square is never attacked in this sense.
pub fn is_piece_attacked(board: &Board, sq: Square) -> bool {
    let Some(target) = board.piece_at(sq) else {
        return false;
    };
    board
        .pieces_of(target.player().opposite())
        .any(|attacker| piece_takes(&attacker, board).contains(sq))
}

/// Returns true if a piece of player `by` could capture on `sq`.
///
/// Whatever stands on `sq` is treated as an opposing piece of `by`, so empty
/// squares and squares held by `by` itself can be asked about too.
pub fn is_square_attacked(board: &Board, sq: Square, by: Player) -> bool {
    let mut probe = *board;
    if probe.occupant(sq) != Some(by.opposite()) {
        probe.place(chess_core::PieceKind::Pawn, by.opposite(), sq);
    }
    let attacked = probe
        .pieces_of(by)
        .any(|attacker| piece_takes(&attacker, &probe).contains(sq));
    attacked
}

/// Returns true if the king of the given player is in check.
pub fn is_king_attacked(board: &Board, player: Player) -> bool {
    match board.king_square(player) {
        Some(king_sq) => is_piece_attacked(board, king_sq),
        None => false, // No king (only in hand-built boards)
    }
}

/// Generates every pseudo-legal move of `player`, ignoring self-check.
pub fn pseudo_legal_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    for piece in board.pieces_of(player) {
        push_piece_moves(board, &piece, &mut moves);
    }
    moves
}

/// Generates all legal moves for the side to move.
pub fn generate_moves(board: &Board) -> MoveList {
    let us = board.side_to_move();
    let mut moves = pseudo_legal_moves(board, us);

    // Filter out moves that leave king in check
    moves.retain(|m| !is_king_attacked(&make_move(board, *m), us));

    moves
}

/// Returns the legal destinations of the piece on `from`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn legal_destinations(board: &Board, from: Square) -> SquareList {
    let Some(piece) = board.piece_at(from) else {
        return SquareList::new();
    };
    if piece.player() != board.side_to_move() {
        return SquareList::new();
    }
    let mut dests = piece.valid_moves(board);
    dests.retain(|&to| !leaves_king_attacked(board, from, to));
    dests
}

/// Returns true if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board) -> bool {
    let us = board.side_to_move();
    board.pieces_of(us).any(|piece| {
        piece
            .valid_moves(board)
            .iter()
            .any(|&to| !leaves_king_attacked(board, piece.square(), to))
    })
}

/// Builds the [`Move`] for a relocation, flagging takes and promotions.
pub fn classify(board: &Board, from: Square, to: Square) -> Move {
    let mut m = if board.occupant(to).is_some() {
        Move::take(from, to)
    } else {
        Move::peaceful(from, to)
    };
    if let Some(piece) = board.piece_at(from) {
        if piece.kind() == chess_core::PieceKind::Pawn
            && to.row() == piece.player().promotion_row()
        {
            m = m.with_promotion();
        }
    }
    m
}

/// Makes a move and returns the new board.
///
/// The move is applied without validation. Moving from an empty square
/// yields an unchanged copy.
pub fn make_move(board: &Board, m: Move) -> Board {
    let mut next = *board;
    next.apply(m.from(), m.to());
    next
}

fn leaves_king_attacked(board: &Board, from: Square, to: Square) -> bool {
    let mover = board.side_to_move();
    let mut next = *board;
    next.apply(from, to);
    is_king_attacked(&next, mover)
}

fn push_piece_moves(board: &Board, piece: &Piece, moves: &mut MoveList) {
    let from = piece.square();
    for &to in &piece.valid_moves(board) {
        moves.push(classify(board, from, to));
    }
}
