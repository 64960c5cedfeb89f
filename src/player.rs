//! Players: a human fed by an external input source, or one of the two
//! search strategies.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::error::{GameError, Result};
use crate::search::{Algorithm, SearchConfig, SearchResult, Searcher};

/// Source of human moves.
///
/// Coordinates are signed so that out-of-range input reaches the board's
/// validity check instead of failing to parse.
pub trait MoveInput {
    /// Next `(row, col)` for `player`, or `None` when input is exhausted.
    fn next_move(&mut self, board: &Board, player: &Player) -> Option<(i32, i32)>;

    /// Called when the previous coordinates were rejected.
    fn reject(&mut self, _row: i32, _col: i32) {}
}

/// Input source for games without human players. Always exhausted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl MoveInput for NoInput {
    fn next_move(&mut self, _board: &Board, _player: &Player) -> Option<(i32, i32)> {
        None
    }
}

/// Player type as chosen on the setup screen or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Human,
    Minimax,
    AlphaBeta,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 3] = [PlayerKind::Human, PlayerKind::Minimax, PlayerKind::AlphaBeta];

    #[inline]
    pub fn is_ai(self) -> bool {
        self != PlayerKind::Human
    }

    fn algorithm(self) -> Option<Algorithm> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Minimax => Some(Algorithm::Minimax),
            PlayerKind::AlphaBeta => Some(Algorithm::AlphaBeta),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.algorithm() {
            Some(algorithm) => write!(f, "{algorithm}"),
            None => write!(f, "Human"),
        }
    }
}

/// A human seat.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    pub name: String,
    pub stone: Stone,
}

/// A search-driven seat.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    pub name: String,
    searcher: Searcher,
}

impl AiPlayer {
    #[inline]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone)]
pub enum Player {
    Human(HumanPlayer),
    Minimax(AiPlayer),
    AlphaBeta(AiPlayer),
}

impl Player {
    /// Build a player of `kind` for `stone`.
    ///
    /// `depth` is ignored for humans. AI players draw tie-breaks from
    /// `seed`, or from system entropy when it is `None`.
    pub fn new(
        name: impl Into<String>,
        stone: Stone,
        kind: PlayerKind,
        depth: u8,
        seed: Option<u64>,
    ) -> Result<Self> {
        let name = name.into();
        let Some(algorithm) = kind.algorithm() else {
            if stone == Stone::Empty {
                return Err(GameError::InvalidConfiguration {
                    message: "player stone must be White or Black".to_string(),
                });
            }
            return Ok(Player::Human(HumanPlayer { name, stone }));
        };

        let config = SearchConfig::new(stone, depth)?;
        let searcher = match seed {
            Some(seed) => Searcher::with_seed(algorithm, config, seed),
            None => Searcher::new(algorithm, config),
        };
        let ai = AiPlayer { name, searcher };
        Ok(match algorithm {
            Algorithm::Minimax => Player::Minimax(ai),
            Algorithm::AlphaBeta => Player::AlphaBeta(ai),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Player::Human(human) => &human.name,
            Player::Minimax(ai) | Player::AlphaBeta(ai) => &ai.name,
        }
    }

    pub fn stone(&self) -> Stone {
        match self {
            Player::Human(human) => human.stone,
            Player::Minimax(ai) | Player::AlphaBeta(ai) => ai.searcher.config().player(),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human(_) => PlayerKind::Human,
            Player::Minimax(_) => PlayerKind::Minimax,
            Player::AlphaBeta(_) => PlayerKind::AlphaBeta,
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human(_))
    }

    /// Search depth, `None` for humans
    pub fn depth(&self) -> Option<u8> {
        self.ai().map(|ai| ai.searcher.config().max_depth())
    }

    pub fn ai(&self) -> Option<&AiPlayer> {
        match self {
            Player::Human(_) => None,
            Player::Minimax(ai) | Player::AlphaBeta(ai) => Some(ai),
        }
    }

    /// Replace the searcher of an AI player, e.g. after it ran on another
    /// thread. Ignored for humans.
    pub fn set_searcher(&mut self, searcher: Searcher) {
        if let Player::Minimax(ai) | Player::AlphaBeta(ai) = self {
            ai.searcher = searcher;
        }
    }

    /// Choose a move on `board`.
    ///
    /// Humans are asked through `input` until it yields a valid cell; each
    /// rejected pair is reported back with [`MoveInput::reject`]. AI players
    /// search the board and return it unchanged. The move is not committed.
    pub fn get_move(&mut self, board: &mut Board, input: &mut dyn MoveInput) -> Result<Pos> {
        if self.is_human() {
            loop {
                let (row, col) = input.next_move(board, self).ok_or(GameError::InputClosed)?;
                match board.pos_at(row, col) {
                    Some(pos) if board.is_valid_move(pos) => return Ok(pos),
                    _ => {
                        debug!(player = self.name(), row, col, "rejected move");
                        input.reject(row, col);
                    }
                }
            }
        }

        let result = self.search(board)?;
        result.best_move.ok_or(GameError::NoLegalMoves)
    }

    /// Run the AI search and report statistics alongside the move.
    pub fn search(&mut self, board: &mut Board) -> Result<SearchResult> {
        let name = self.name().to_string();
        let ai = match self {
            Player::Human(_) => return Err(GameError::NotAiTurn),
            Player::Minimax(ai) | Player::AlphaBeta(ai) => ai,
        };
        let result = ai.searcher.search(board);
        if let Some(pos) = result.best_move {
            info!(
                player = %name,
                row = pos.row,
                col = pos.col,
                score = result.score,
                nodes = result.nodes,
                "AI chose move"
            );
        }
        Ok(result)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Player {})", self.name(), self.stone().player_number())
    }
}
