//! Iterative-deepening negamax with alpha-beta pruning.

use crate::eval::{evaluate_with, EvalWeights};
use chess_core::Move;
use chess_engine::{GameState, MoveList};
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Score of being checkmated at the root. Mates found `n` plies deep score
/// `MATE_SCORE - n`, so shorter mates are preferred.
pub const MATE_SCORE: i32 = 100_000;

/// Scores beyond this magnitude denote a forced mate.
const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

const INFINITY: i32 = MATE_SCORE + 1;

/// How often (in nodes) the clock is consulted.
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score of the best move from the side to move's point of view.
    pub score: i32,
    /// Deepest fully completed iteration.
    pub depth: u8,
    /// Nodes visited across all iterations.
    pub nodes: u64,
}

/// Search state
pub struct Searcher<'a> {
    weights: &'a EvalWeights,
    nodes: u64,
    start_time: Instant,
    max_time: Option<Duration>,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    /// Creates a searcher. The clock starts now.
    pub fn new(weights: &'a EvalWeights, max_time: Option<Duration>) -> Self {
        Searcher {
            weights,
            nodes: 0,
            start_time: Instant::now(),
            max_time,
            stopped: false,
        }
    }

    fn check_time(&mut self) {
        if let Some(max_time) = self.max_time {
            if self.nodes % TIME_CHECK_INTERVAL == 1 && self.start_time.elapsed() >= max_time {
                self.stopped = true;
            }
        }
    }

    /// Searches `game` up to `max_depth` plies.
    ///
    /// Works on a private copy, so `game` is left untouched. When the time
    /// budget runs out, the result of the last completed depth is returned.
    pub fn search(&mut self, game: &GameState, max_depth: u8) -> SearchResult {
        let mut game = game.clone();
        let mut root_moves = game.legal_moves();

        if root_moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.terminal_score(&game, 0),
                depth: 0,
                nodes: 0,
            };
        }

        self.order_moves(&game, &mut root_moves);
        let mut result = SearchResult {
            best_move: None,
            score: -INFINITY,
            depth: 0,
            nodes: 0,
        };

        // Iterative deepening
        for depth in 1..=max_depth.max(1) {
            let mut current: Option<(Move, i32)> = None;
            let mut alpha = -INFINITY;
            let beta = INFINITY;

            for &mv in root_moves.as_slice() {
                if game.apply_raw_move(mv.from(), mv.to()).is_err() {
                    continue;
                }
                let score = -self.alpha_beta(&mut game, depth - 1, 1, -beta, -alpha);
                game.undo_move();

                if self.stopped {
                    break;
                }
                if current.map_or(true, |(_, best)| score > best) {
                    current = Some((mv, score));
                }
                alpha = alpha.max(score);
            }

            if self.stopped {
                tracing::debug!(depth, nodes = self.nodes, "search deadline reached");
                if result.best_move.is_none() {
                    // Not even depth 1 finished: keep whatever it had found
                    if let Some((mv, score)) = current {
                        result.best_move = Some(mv);
                        result.score = score;
                    }
                }
                break;
            }

            let Some((mv, score)) = current else {
                break;
            };
            result.best_move = Some(mv);
            result.score = score;
            result.depth = depth;
            tracing::debug!(
                depth,
                score,
                nodes = self.nodes,
                best = %mv,
                elapsed_ms = self.start_time.elapsed().as_millis() as u64,
                "search iteration complete"
            );

            // Search the previous best move first next time
            if let Some(pos) = root_moves.as_slice().iter().position(|m| *m == mv) {
                root_moves.as_mut_slice()[..=pos].rotate_right(1);
            }

            if score.abs() > MATE_THRESHOLD {
                break;
            }
        }

        if result.best_move.is_none() {
            // Out of time before any root move was searched
            let mv = root_moves[0];
            result.best_move = Some(mv);
            result.score = self.static_score(&mut game, mv);
        }
        result.nodes = self.nodes;
        result
    }

    /// Alpha-beta search
    fn alpha_beta(
        &mut self,
        game: &mut GameState,
        depth: u8,
        ply: i32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        self.check_time();

        if self.stopped {
            return 0;
        }

        let mut moves = game.legal_moves();

        // Check for checkmate or stalemate
        if moves.is_empty() {
            return self.terminal_score(game, ply);
        }

        if depth == 0 {
            return evaluate_with(game.board(), game.side_to_move(), self.weights);
        }

        self.order_moves(game, &mut moves);

        for &mv in moves.as_slice() {
            if game.apply_raw_move(mv.from(), mv.to()).is_err() {
                continue;
            }
            let score = -self.alpha_beta(game, depth - 1, ply + 1, -beta, -alpha);
            game.undo_move();

            if self.stopped {
                return 0;
            }

            if score >= beta {
                return beta; // Beta cutoff
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }

    /// Evaluation right after `mv`, from the mover's point of view.
    fn static_score(&self, game: &mut GameState, mv: Move) -> i32 {
        let mover = game.side_to_move();
        if game.apply_raw_move(mv.from(), mv.to()).is_err() {
            return evaluate_with(game.board(), mover, self.weights);
        }
        let score = evaluate_with(game.board(), mover, self.weights);
        game.undo_move();
        score
    }

    /// Score for a side with no legal move: mated or stalemated.
    fn terminal_score(&self, game: &GameState, ply: i32) -> i32 {
        if game.is_in_check(game.side_to_move()) {
            -MATE_SCORE + ply
        } else {
            0
        }
    }

    /// Orders captures first, most valuable victim and least valuable
    /// attacker first, then promotions.
    fn order_moves(&self, game: &GameState, moves: &mut MoveList) {
        let board = game.board();
        let weights = self.weights;
        moves.as_mut_slice().sort_by_cached_key(|mv| {
            let mut key = 0;
            if let Some(victim) = board.piece_at(mv.to()) {
                key += weights.value(victim.kind()) * 10;
                if let Some(attacker) = board.piece_at(mv.from()) {
                    key -= weights.value(attacker.kind());
                }
            }
            if mv.is_promotion() {
                key += weights.queen;
            }
            Reverse(key)
        });
    }
}
