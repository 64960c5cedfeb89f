//! Game session: the turn loop shared by the console and window drivers.

use tracing::info;

use crate::board::{Board, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::player::{MoveInput, NoInput, Player};
use crate::rules::{outcome_after, Outcome};
use crate::search::Searcher;

/// A game in progress between two players.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: usize,
    last_move: Option<Pos>,
    history: Vec<Pos>,
    outcome: Outcome,
}

impl GameSession {
    /// Start a game from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let players = config.build_players()?;
        Self::with_players(config.board_size, players)
    }

    /// Start a game between two already built players.
    ///
    /// `players[0]` must play White, since White moves first.
    pub fn with_players(size: usize, players: [Player; 2]) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if players[0].stone() != Stone::White {
            return Err(GameError::InvalidConfiguration {
                message: "player 1 must play White".to_string(),
            });
        }
        if players[1].stone() != Stone::Black {
            return Err(GameError::InvalidConfiguration {
                message: "players must use different stones".to_string(),
            });
        }
        Ok(Self {
            board: Board::new(size)?,
            players,
            current: 0,
            last_move: None,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_player().is_human()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && !self.current_player().is_human()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Committed moves in order. Colors alternate starting with White.
    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// The player who won, if any.
    pub fn winner(&self) -> Option<&Player> {
        let stone = self.outcome.winner()?;
        self.players.iter().find(|p| p.stone() == stone)
    }

    /// Commit `pos` for the player to move.
    ///
    /// Checks for a win, then for a draw, then passes the turn.
    pub fn play(&mut self, pos: Pos) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = &self.players[self.current];
        let stone = player.stone();
        if !self.board.make_move(pos, stone) {
            return Err(GameError::InvalidMove {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
            });
        }
        info!(
            player = player.name(),
            number = stone.player_number(),
            row = pos.row,
            col = pos.col,
            "played"
        );

        self.last_move = Some(pos);
        self.history.push(pos);
        self.outcome = outcome_after(&self.board, stone);
        match self.outcome {
            Outcome::Won { .. } => info!(winner = %player, "game won"),
            Outcome::Draw => info!("game drawn"),
            Outcome::InProgress => self.current = 1 - self.current,
        }
        Ok(self.outcome)
    }

    /// Ask the player to move for a move and commit it.
    ///
    /// Human players read from `input`; AI players search.
    pub fn play_turn(&mut self, input: &mut dyn MoveInput) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = self.players[self.current].get_move(&mut self.board, input)?;
        self.play(pos)
    }

    /// Let the AI player to move choose and commit its move.
    pub fn play_ai_turn(&mut self) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player().is_human() {
            return Err(GameError::NotAiTurn);
        }
        self.play_turn(&mut NoInput)
    }

    /// Snapshot for searching off-thread: the current AI's searcher and a
    /// copy of the board. Hand the searcher back with [`Self::finish_ai_turn`].
    pub fn begin_ai_turn(&self) -> Result<(Searcher, Board)> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let ai = self.current_player().ai().ok_or(GameError::NotAiTurn)?;
        Ok((ai.searcher().clone(), self.board.clone()))
    }

    /// Restore the searcher used off-thread and commit its move.
    ///
    /// The searcher must play the current player's stone.
    pub fn finish_ai_turn(&mut self, searcher: Searcher, pos: Option<Pos>) -> Result<Outcome> {
        if self.current_player().is_human() {
            return Err(GameError::NotAiTurn);
        }
        if searcher.config().player() != self.current_player().stone() {
            return Err(GameError::InvalidConfiguration {
                message: format!(
                    "searcher plays {} but it is {}'s turn",
                    searcher.config().player().name(),
                    self.current_player().stone().name()
                ),
            });
        }
        self.players[self.current].set_searcher(searcher);
        self.play(pos.ok_or(GameError::NoLegalMoves)?)
    }

    /// Clear the board for a rematch with the same players. Player 1 opens.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = 0;
        self.last_move = None;
        self.history.clear();
        self.outcome = Outcome::InProgress;
        info!(size = self.board.size(), "new game");
    }
}
