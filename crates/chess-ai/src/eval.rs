//! Static position evaluation.
//!
//! Scores are in centipawns and read from a perspective player: positive
//! favours that player. The function is antisymmetric, so
//! `evaluate_board(b, p) == -evaluate_board(b, p.opposite())`.

use chess_core::{PieceKind, Player, Square};
use chess_engine::{is_king_attacked, Board};
use serde::{Deserialize, Serialize};

/// Tunable evaluation weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    /// Counted like any other piece. Both kings are always present in real
    /// games, so it only matters for hand-built boards.
    pub king: i32,
    /// Charged against a side whose king is currently attacked.
    pub king_attacked_penalty: i32,
    /// Add the positional bonuses of the piece-square tables.
    pub piece_square_tables: bool,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 900,
            king_attacked_penalty: 900,
            piece_square_tables: false,
        }
    }
}

impl EvalWeights {
    /// Material value of one piece of the given kind.
    pub const fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Piece-square tables, laid out with the owner's far row first.
const PAWN_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, 50, 50, 50, 50, 50, 50, 50, 50, 10, 10, 20, 30, 30, 20, 10, 10, 5, 5,
    10, 25, 25, 10, 5, 5, 0, 0, 0, 20, 20, 0, 0, 0, 5, -5, -10, 0, 0, -10, -5, 5, 5, 10, 10, -20,
    -20, 10, 10, 5, 0, 0, 0, 0, 0, 0, 0, 0,
];

const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, -40, -20, 0, 0, 0, 0, -20, -40, -30, 0, 10, 15, 15, 10,
    0, -30, -30, 5, 15, 20, 20, 15, 5, -30, -30, 0, 15, 20, 20, 15, 0, -30, -30, 5, 10, 15, 15, 10,
    5, -30, -40, -20, 0, 5, 5, 0, -20, -40, -50, -40, -30, -30, -30, -30, -40, -50,
];

const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, -10, 0, 0, 0, 0, 0, 0, -10, -10, 0, 5, 10, 10, 5, 0,
    -10, -10, 5, 5, 10, 10, 5, 5, -10, -10, 0, 10, 10, 10, 10, 0, -10, -10, 10, 10, 10, 10, 10, 10,
    -10, -10, 5, 0, 0, 0, 0, 5, -10, -20, -10, -10, -10, -10, -10, -10, -20,
];

const ROOK_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, 5, 10, 10, 10, 10, 10, 10, 5, -5, 0, 0, 0, 0, 0, 0, -5, -5, 0, 0, 0, 0,
    0, 0, -5, -5, 0, 0, 0, 0, 0, 0, -5, -5, 0, 0, 0, 0, 0, 0, -5, -5, 0, 0, 0, 0, 0, 0, -5, 0, 0,
    0, 5, 5, 0, 0, 0,
];

const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20, -10, 0, 0, 0, 0, 0, 0, -10, -10, 0, 5, 5, 5, 5, 0, -10,
    -5, 0, 5, 5, 5, 5, 0, -5, 0, 0, 5, 5, 5, 5, 0, -5, -10, 5, 5, 5, 5, 5, 0, -10, -10, 0, 5, 0, 0,
    0, 0, -10, -20, -10, -10, -5, -5, -10, -10, -20,
];

const KING_PST: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30, -30, -40, -40, -50, -50, -40, -40, -30, -30, -40, -40,
    -50, -50, -40, -40, -30, -30, -40, -40, -50, -50, -40, -40, -30, -20, -30, -30, -40, -40, -30,
    -30, -20, -10, -20, -20, -20, -20, -20, -20, -10, 20, 20, 0, 0, 0, 0, 20, 20, 20, 30, 10, 0, 0,
    10, 30, 20,
];

const PSTS: [&[i32; 64]; 6] = [
    &PAWN_PST,
    &KNIGHT_PST,
    &BISHOP_PST,
    &ROOK_PST,
    &QUEEN_PST,
    &KING_PST,
];

/// Positional bonus for a piece of `player` standing on `sq`.
pub fn square_bonus(kind: PieceKind, player: Player, sq: Square) -> i32 {
    // Row 0 of each table is the owner's far row
    let table_row = match player {
        Player::Player1 => 7 - sq.row(),
        Player::Player2 => sq.row(),
    };
    PSTS[kind.index()][table_row as usize * 8 + sq.col() as usize]
}

/// Evaluates `board` for `perspective` using the default weights.
pub fn evaluate_board(board: &Board, perspective: Player) -> i32 {
    evaluate_with(board, perspective, &EvalWeights::default())
}

/// Evaluates `board` for `perspective` using the given weights.
pub fn evaluate_with(board: &Board, perspective: Player, weights: &EvalWeights) -> i32 {
    let mut score = 0i32;

    for piece in board.pieces() {
        let sign = if piece.player() == perspective { 1 } else { -1 };
        let mut value = weights.value(piece.kind());
        if weights.piece_square_tables {
            value += square_bonus(piece.kind(), piece.player(), piece.square());
        }
        score += sign * value;
    }

    for player in Player::ALL {
        if is_king_attacked(board, player) {
            let sign = if player == perspective { 1 } else { -1 };
            score -= sign * weights.king_attacked_penalty;
        }
    }

    score
}
