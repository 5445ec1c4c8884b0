//! Movement pattern table for all piece kinds.
//!
//! Every kind maps to exactly one [`Pattern`]. Leapers (knight, king) jump
//! to fixed offsets, sliders (bishop, rook, queen) walk rays until the
//! first occupant, and pawns have their own asymmetric rules.

use chess_core::PieceKind;

/// A `(row, col)` displacement.
pub type Offset = (i8, i8);

/// Knight jumps.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps.
pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Diagonal ray directions.
pub const BISHOP_RAYS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal ray directions.
pub const ROOK_RAYS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Union of diagonal and orthogonal rays.
pub const QUEEN_RAYS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Column deltas of a pawn capture; the row delta comes from the owner.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

/// How a piece kind moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Single jumps to fixed offsets, path ignored.
    Leap(&'static [Offset]),
    /// Rays walked until the first occupied square.
    Slide(&'static [Offset]),
    /// Forward pushes, diagonal-forward captures.
    Pawn,
}

/// Pattern table indexed by [`PieceKind::index`].
const PATTERNS: [Pattern; 6] = [
    Pattern::Pawn,
    Pattern::Leap(&KNIGHT_OFFSETS),
    Pattern::Slide(&BISHOP_RAYS),
    Pattern::Slide(&ROOK_RAYS),
    Pattern::Slide(&QUEEN_RAYS),
    Pattern::Leap(&KING_OFFSETS),
];

/// Returns the movement pattern of a piece kind.
#[inline]
pub fn pattern(kind: PieceKind) -> Pattern {
    PATTERNS[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliders_use_rays() {
        for kind in PieceKind::ALL {
            let is_slide = matches!(pattern(kind), Pattern::Slide(_));
            assert_eq!(is_slide, kind.is_slider(), "{kind}");
        }
    }

    #[test]
    fn queen_rays_are_bishop_plus_rook() {
        for ray in BISHOP_RAYS.iter().chain(ROOK_RAYS.iter()) {
            assert!(QUEEN_RAYS.contains(ray));
        }
        assert_eq!(QUEEN_RAYS.len(), BISHOP_RAYS.len() + ROOK_RAYS.len());
    }

    #[test]
    fn knight_offsets_are_l_shaped() {
        for (dr, dc) in KNIGHT_OFFSETS {
            let (a, b) = (dr.abs(), dc.abs());
            assert!((a, b) == (1, 2) || (a, b) == (2, 1));
        }
    }
}
