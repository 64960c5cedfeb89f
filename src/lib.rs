//! Gomoku with minimax and alpha-beta AI players
//!
//! Freestyle Gomoku on a square board of configurable size:
//! - Five or more in a row wins (overlines allowed)
//! - White (player 1, `X`) moves first
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board state, move validity and win/draw detection
//! - [`eval`]: Line extraction and the pattern-based position heuristic
//! - [`opening`]: Random central opening moves
//! - [`search`]: Minimax and alpha-beta searchers
//! - [`rules`]: Game outcome and winning-line locator
//! - [`player`]: Human and AI players
//! - [`config`]: TOML configuration with environment overrides
//! - [`game`]: Turn loop shared by the console and window drivers
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Algorithm, Board, Pos, SearchConfig, Searcher, Stone};
//!
//! let mut board = Board::new(9).unwrap();
//! for (row, col) in [(4, 4), (4, 5), (3, 4)] {
//!     board.make_move(Pos::new(row, col), Stone::White);
//! }
//! for (row, col) in [(5, 5), (2, 2)] {
//!     board.make_move(Pos::new(row, col), Stone::Black);
//! }
//!
//! // Black answers with a two-ply alpha-beta search
//! let config = SearchConfig::new(Stone::Black, 2).unwrap();
//! let mut searcher = Searcher::with_seed(Algorithm::AlphaBeta, config, 1);
//! if let Some(pos) = searcher.get_move(&mut board) {
//!     assert!(board.make_move(pos, Stone::Black));
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod opening;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

pub use board::{Board, Pos, Stone};
pub use config::{GameConfig, PlayerConfig};
pub use error::{GameError, Result};
pub use eval::evaluate;
pub use game::GameSession;
pub use player::{MoveInput, Player, PlayerKind};
pub use rules::Outcome;
pub use search::{Algorithm, SearchConfig, SearchResult, Searcher};
