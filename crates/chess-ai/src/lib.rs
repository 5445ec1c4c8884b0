//! Computer opponent for the chess engine.
//!
//! - [`evaluate_board`] - static, antisymmetric position score
//! - [`Searcher`] - iterative-deepening alpha-beta search
//! - [`AiConfig`] - search depth, time budget, and evaluation weights,
//!   loadable from TOML
//!
//! # Example
//!
//! ```
//! use chess_ai::{AiConfig, ChessAi};
//! use chess_engine::GameState;
//!
//! let ai = ChessAi::new(AiConfig { depth: 2, ..AiConfig::default() });
//! let game = GameState::new();
//! let mv = ai.best_move(&game).unwrap();
//! assert!(game.legal_moves().as_slice().contains(&mv));
//! ```

mod config;
mod eval;
mod search;

pub use config::{AiConfig, ConfigError};
pub use eval::{evaluate_board, evaluate_with, square_bonus, EvalWeights};
pub use search::{SearchResult, Searcher, MATE_SCORE};

use chess_core::Move;
use chess_engine::GameState;

/// A configured AI player.
#[derive(Debug, Clone, Default)]
pub struct ChessAi {
    config: AiConfig,
}

impl ChessAi {
    pub fn new(config: AiConfig) -> Self {
        ChessAi { config }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Runs a full search of `game` with this player's settings.
    pub fn search(&self, game: &GameState) -> SearchResult {
        let mut searcher = Searcher::new(&self.config.eval, self.config.time_limit());
        searcher.search(game, self.config.depth)
    }

    /// Picks a move for the side to move, or `None` if it has no legal move.
    pub fn best_move(&self, game: &GameState) -> Option<Move> {
        self.search(game).best_move
    }
}
