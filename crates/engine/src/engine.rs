//! The main search engine.

use crate::board::Board;
use crate::config::Config;
use crate::constants::Color;
use crate::evaluate;
use crate::move_gen;
use crate::r#move::Move;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;

/// Window bounds for alpha-beta. Every real score lies strictly inside.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// How sibling moves are ordered before they are searched.
pub enum MoveOrdering {
    /// Generator order. Makes searches reproducible.
    AsGenerated,
    /// Shuffled, so equally good moves vary between games.
    Shuffled(StdRng),
}

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Each branch is searched on its own copy of the board, so the caller's
/// board is never touched.
pub struct Engine {
    pub config: Config,
    pub nodes_searched: u64,
    ordering: MoveOrdering,
}

impl Engine {
    /// An engine whose tie-breaks are seeded from entropy.
    pub fn new(config: Config) -> Self {
        Self::with_ordering(config, MoveOrdering::Shuffled(StdRng::from_entropy()))
    }

    /// An engine whose tie-breaks replay identically for the same seed.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_ordering(config, MoveOrdering::Shuffled(StdRng::seed_from_u64(seed)))
    }

    /// An engine that never shuffles.
    pub fn deterministic(config: Config) -> Self {
        Self::with_ordering(config, MoveOrdering::AsGenerated)
    }

    pub fn with_ordering(config: Config, ordering: MoveOrdering) -> Self {
        Self {
            config,
            nodes_searched: 0,
            ordering,
        }
    }

    /// Picks a move for `ai_color`, or `None` when it has nothing to play
    /// (or the game is already decided).
    pub fn get_ai_move(&mut self, board: &Board, ai_color: Color) -> Option<Move> {
        self.search(board, ai_color).0
    }

    /// Searches `config.search_depth` plies and returns the best move with
    /// its score from `ai_color`'s point of view.
    pub fn search(&mut self, board: &Board, ai_color: Color) -> (Option<Move>, i32) {
        self.nodes_searched = 0;
        let start_time = Instant::now();
        let depth = self.config.search_depth;

        let (score, best_move) =
            self.minimax(board, depth, -SCORE_INFINITY, SCORE_INFINITY, true, ai_color);

        match best_move {
            Some(mv) => log::debug!(
                "{:?} depth {} score {} nodes {} time {}ms best {}",
                ai_color,
                depth,
                score,
                self.nodes_searched,
                start_time.elapsed().as_millis(),
                mv
            ),
            None => log::info!("{:?} has no move to search (score {})", ai_color, score),
        }

        (best_move, score)
    }

    /// Scores `board` by looking `depth` plies ahead.
    ///
    /// `maximizing` is true when `ai_color` is the side to move. Leaves
    /// (depth exhausted, game over, or no legal moves) return the static
    /// evaluation and no move.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_color: Color,
    ) -> (i32, Option<Move>) {
        self.nodes_searched += 1;

        if depth <= 0 || board.is_game_over() {
            return (evaluate::evaluate(board, ai_color, &self.config), None);
        }

        let side = if maximizing { ai_color } else { ai_color.opponent() };
        let mut moves = move_gen::generate_moves(board, side);
        if moves.is_empty() {
            return (evaluate::evaluate(board, ai_color, &self.config), None);
        }
        self.order_moves(&mut moves);

        let mut best_move = None;
        let mut best_score = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

        for mv in moves {
            let mut child = *board;
            child.make_move(mv);
            let (score, _) = self.minimax(&child, depth - 1, alpha, beta, !maximizing, ai_color);

            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }

    fn order_moves(&mut self, moves: &mut [Move]) {
        if let MoveOrdering::Shuffled(rng) = &mut self.ordering {
            moves.shuffle(rng);
        }
    }
}
