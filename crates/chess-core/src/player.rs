//! Player representation.

/// The two sides of a game.
///
/// An unoccupied square has no owner; cells express that as `None`
/// rather than as a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Player1 = 0,
    Player2 = 1,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// Returns the other player.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Returns the index (0 for Player1, 1 for Player2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a pawn advance (+1 for Player1, -1 for Player2).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => -1,
        }
    }

    /// Returns the row holding this player's pieces at setup.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 7,
        }
    }

    /// Returns the row this player's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 6,
        }
    }

    /// Returns the row on which this player's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}
