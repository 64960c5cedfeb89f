//! Search module for Gomoku AI
//!
//! Two interchangeable strategies explore the game tree to a fixed depth:
//! plain minimax and minimax with alpha-beta pruning. Both share the root
//! expansion in [`Searcher::search`]; they differ only in the recursion.
//!
//! The board is borrowed mutably for the whole search. Every move made while
//! searching is undone before its parent tries the next sibling, so the
//! caller gets back the exact board it passed in.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{Algorithm, SearchConfig, Searcher};
//!
//! let mut board = Board::new(7).unwrap();
//! for col in 0..4 {
//!     board.make_move(Pos::new(3, col), Stone::White);
//! }
//! for col in 0..3 {
//!     board.make_move(Pos::new(5, col), Stone::Black);
//! }
//!
//! let config = SearchConfig::new(Stone::White, 1).unwrap();
//! let mut searcher = Searcher::with_seed(Algorithm::AlphaBeta, config, 42);
//! assert_eq!(searcher.get_move(&mut board), Some(Pos::new(3, 4)));
//! ```

mod alphabeta;
mod minimax;

#[cfg(test)]
mod tests;

use std::fmt;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::{GameError, Result};
use crate::opening::opening_move;

/// Terminal score for a won position, before the remaining-depth bonus.
///
/// Larger than any value `evaluate` can produce on a board the core accepts
/// (see `eval::max_evaluation`).
pub const WIN_SCORE: i64 = 1_000_000_000_000_000;

/// Infinity score for alpha-beta bounds
const INF: i64 = i64::MAX;

/// Which recursion a [`Searcher`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Full-width minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "Minimax AI"),
            Algorithm::AlphaBeta => write!(f, "Alpha-Beta AI"),
        }
    }
}

/// How the returned move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Picked from the opening candidates without searching
    Opening,
    /// Result of the full root expansion
    Search(Algorithm),
}

/// Immutable per-strategy settings.
///
/// Only [`SearchConfig::new`] builds one, so every value holds a real stone
/// and a depth of at least 1.
///
/// ```compile_fail
/// use gomoku::{SearchConfig, Stone};
///
/// let config = SearchConfig { player: Stone::White, max_depth: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    player: Stone,
    max_depth: u8,
}

impl SearchConfig {
    /// Validate and build a configuration.
    pub fn new(player: Stone, max_depth: u8) -> Result<Self> {
        if max_depth == 0 {
            return Err(GameError::InvalidDepth {
                depth: u32::from(max_depth),
            });
        }
        if player == Stone::Empty {
            return Err(GameError::InvalidConfiguration {
                message: "search player must be White or Black".to_string(),
            });
        }
        Ok(Self { player, max_depth })
    }

    /// Identity the strategy plays for
    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    /// Plies looked ahead, counting the root move
    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Score of the chosen move from the searcher's perspective
    pub score: i64,
    /// Every root move that achieved `score`, in board order
    pub best_moves: Vec<Pos>,
    /// Nodes visited below the root
    pub nodes: u64,
    pub search_type: SearchType,
}

/// A depth-limited game-tree searcher with a seedable tie-break source.
#[derive(Debug, Clone)]
pub struct Searcher {
    algorithm: Algorithm,
    config: SearchConfig,
    rng: ChaCha20Rng,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher seeded from system entropy.
    #[must_use]
    pub fn new(algorithm: Algorithm, config: SearchConfig) -> Self {
        Self::from_rng(algorithm, config, ChaCha20Rng::from_entropy())
    }

    /// Create a searcher with a fixed tie-break seed.
    #[must_use]
    pub fn with_seed(algorithm: Algorithm, config: SearchConfig, seed: u64) -> Self {
        Self::from_rng(algorithm, config, ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(algorithm: Algorithm, config: SearchConfig, rng: ChaCha20Rng) -> Self {
        Self {
            algorithm,
            config,
            rng,
            nodes: 0,
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for the configured player.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.search(board).best_move
    }

    /// Choose a move and report how it was found.
    ///
    /// While fewer stones are down than there are opening candidates, a free
    /// candidate is picked at random. Otherwise every legal move is tried for
    /// the configured player and scored by the recursion at
    /// `max_depth - 1`; ties for the best score are broken with the
    /// searcher's RNG.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        if let Some(pos) = opening_move(board, &mut self.rng) {
            debug!(player = ?self.config.player, %pos, "opening move");
            return SearchResult {
                best_move: Some(pos),
                score: 0,
                best_moves: vec![pos],
                nodes: 0,
                search_type: SearchType::Opening,
            };
        }

        let start = Instant::now();
        self.nodes = 0;
        let player = self.config.player;
        let depth = self.config.max_depth.saturating_sub(1);

        let mut best_score = -INF;
        let mut best_moves = Vec::new();
        for pos in board.legal_moves() {
            let placed = board.make_move(pos, player);
            debug_assert!(placed, "root move {pos} was not placed");
            let score = match self.algorithm {
                Algorithm::Minimax => self.minimax(board, depth, false),
                // Full window for every root child keeps each score exact
                Algorithm::AlphaBeta => self.alpha_beta(board, depth, -INF, INF, false),
            };
            board.undo_move(pos);

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(pos);
            } else if score == best_score {
                best_moves.push(pos);
            }
        }

        let best_move = best_moves.choose(&mut self.rng).copied();
        debug!(
            algorithm = %self.algorithm,
            player = ?player,
            depth = self.config.max_depth,
            nodes = self.nodes,
            score = best_score,
            ties = best_moves.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search complete"
        );

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            best_moves,
            nodes: self.nodes,
            search_type: SearchType::Search(self.algorithm),
        }
    }

    /// Shared terminal test. Returns the node value when the node is a leaf.
    #[inline]
    fn terminal_score(&self, board: &Board, depth: u8) -> Option<i64> {
        let me = self.config.player;
        if board.check_win(me) {
            return Some(WIN_SCORE + i64::from(depth));
        }
        if board.check_win(me.opponent()) {
            return Some(-WIN_SCORE - i64::from(depth));
        }
        if board.is_draw() || depth == 0 {
            return Some(crate::eval::evaluate(board, me));
        }
        None
    }

    /// Stone placed by the side to move at this node
    #[inline]
    fn actor(&self, maximizing: bool) -> Stone {
        if maximizing {
            self.config.player
        } else {
            self.config.player.opponent()
        }
    }
}
