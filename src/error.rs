//! Error types for the Gomoku crate

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GameError>;

/// Main error type
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("board size {size} out of range ({min}-{max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("search depth must be at least 1, got {depth}")]
    InvalidDepth { depth: u32 },

    #[error("invalid move at row {row}, col {col}: cell is occupied or out of bounds")]
    InvalidMove { row: i32, col: i32 },

    #[error("game already over")]
    GameOver,

    #[error("it is not an AI player's turn")]
    NotAiTurn,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
