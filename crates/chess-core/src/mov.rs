//! Move representation.

use crate::Square;
use std::fmt;

/// Whether a move lands on an empty square or captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Relocation to an empty square.
    Peaceful = 0,
    /// Relocation onto an opposing piece, removing it.
    Take = 1,
}

/// A chess move.
///
/// Encoded compactly: 6 bits from, 6 bits to, 1 bit take, 1 bit promotion.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

const TAKE_BIT: u16 = 1 << 12;
const PROMOTION_BIT: u16 = 1 << 13;

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        let mut encoded = (from.index() as u16) | ((to.index() as u16) << 6);
        if let MoveKind::Take = kind {
            encoded |= TAKE_BIT;
        }
        Move(encoded)
    }

    /// Creates a move onto an empty square.
    #[inline]
    pub const fn peaceful(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Peaceful)
    }

    /// Creates a capturing move.
    #[inline]
    pub const fn take(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Take)
    }

    /// Returns this move marked as a pawn promotion.
    #[inline]
    pub const fn with_promotion(self) -> Self {
        Move(self.0 | PROMOTION_BIT)
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index_masked((self.0 & 0x3F) as u8)
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index_masked(((self.0 >> 6) & 0x3F) as u8)
    }

    /// Returns whether this move is peaceful or a take.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        if self.is_take() {
            MoveKind::Take
        } else {
            MoveKind::Peaceful
        }
    }

    /// Returns true if the move captures.
    #[inline]
    pub const fn is_take(self) -> bool {
        self.0 & TAKE_BIT != 0
    }

    /// Returns true if the move promotes a pawn.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.0 & PROMOTION_BIT != 0
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move(0);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_take() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from(), sep, self.to())?;
        if self.is_promotion() {
            write!(f, "=q")?;
        }
        Ok(())
    }
}
