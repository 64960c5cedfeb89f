//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::{GameConfig, PlayerConfig};
use crate::game::GameSession;
use crate::rules::Outcome;
use crate::search::{SearchResult, Searcher};
use crate::{GameError, Pos, Result};

/// Editable setup page fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    pub board_size: usize,
    pub seats: [PlayerConfig; 2],
    seed: Option<u64>,
}

impl SetupForm {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size,
            seats: [config.player1.clone(), config.player2.clone()],
            seed: config.seed,
        }
    }

    pub fn to_config(&self) -> GameConfig {
        let [player1, player2] = self.seats.clone();
        GameConfig {
            board_size: self.board_size,
            seed: self.seed,
            player1,
            player2,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(Searcher, SearchResult)>,
        start_time: Instant,
    },
}

/// Main game state: a session plus the bookkeeping of an async AI turn
pub struct GameState {
    pub session: GameSession,
    pub last_ai_result: Option<SearchResult>,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            session: GameSession::new(config)?,
            last_ai_result: None,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
        })
    }

    /// "Play Again": same players, empty board.
    ///
    /// A search still running for the old game is abandoned.
    pub fn reset(&mut self) {
        self.session.reset();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.ai_thinking_time = None;
        self.message = None;
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Status line: whose turn it is, or the result
    pub fn status_text(&self) -> String {
        match self.session.outcome() {
            Outcome::InProgress => format!("Current Turn: {}", self.session.current_player().name()),
            Outcome::Won { .. } => match self.session.winner() {
                Some(player) => format!("{} wins!", player.name()),
                None => "Game over".to_string(),
            },
            Outcome::Draw => "The game is a draw!".to_string(),
        }
    }

    /// Place a stone for the human to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Outcome> {
        if self.is_ai_thinking() || !self.session.is_human_turn() {
            return Err(GameError::NotHumanTurn);
        }
        let outcome = self.session.play(pos)?;
        self.message = None;
        Ok(outcome)
    }

    /// Start the AI search on a background thread
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        let (mut searcher, mut board) = match self.session.begin_ai_turn() {
            Ok(snapshot) => snapshot,
            Err(_) => return,
        };

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = searcher.search(&mut board);
            let _ = tx.send((searcher, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Commit the AI move once the search has finished
    pub fn check_ai_result(&mut self) {
        let (searcher, result, elapsed) = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok((searcher, result)) => (searcher, result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.ai_thinking_time = Some(elapsed);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        if let Err(e) = self.session.finish_ai_turn(searcher, best_move) {
            warn!("AI move rejected: {e}");
            self.message = Some(format!("AI could not move: {e}"));
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
