//! Game rules for freestyle Gomoku
//!
//! Five or more stones in a row wins, overlines included. A full board with
//! no five is a draw. There are no captures and no forbidden moves.

pub mod win;

use crate::board::{Board, Pos, Stone};

pub use win::find_winning_line;

/// State of a game after a move has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won {
        winner: Stone,
        /// First five found by [`find_winning_line`]
        line: Option<[Pos; 5]>,
    },
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// Classify the board after `last_player` moved.
///
/// The win test runs before the draw test, so a move that fills the last
/// cell and completes five is a win.
pub fn outcome_after(board: &Board, last_player: Stone) -> Outcome {
    if board.check_win(last_player) {
        return Outcome::Won {
            winner: last_player,
            line: find_winning_line(board, last_player),
        };
    }
    if board.is_draw() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_on_empty_board() {
        let board = Board::new(9).unwrap();
        assert_eq!(outcome_after(&board, Stone::White), Outcome::InProgress);
        assert!(!Outcome::InProgress.is_over());
    }

    #[test]
    fn test_win_reports_line() {
        let mut board = Board::new(9).unwrap();
        for col in 2..7 {
            board.make_move(Pos::new(4, col), Stone::Black);
        }
        let outcome = outcome_after(&board, Stone::Black);
        assert!(outcome.is_over());
        assert_eq!(outcome.winner(), Some(Stone::Black));
        match outcome {
            Outcome::Won { line, .. } => {
                assert_eq!(line.unwrap()[0], Pos::new(4, 2));
                assert_eq!(line.unwrap()[4], Pos::new(4, 6));
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        let mut board = Board::new(5).unwrap();
        for pos in board.legal_moves() {
            let stone = if (pos.col + 2 * pos.row) % 4 < 2 {
                Stone::White
            } else {
                Stone::Black
            };
            board.make_move(pos, stone);
        }
        assert_eq!(outcome_after(&board, Stone::White), Outcome::Draw);
        assert_eq!(outcome_after(&board, Stone::Black), Outcome::Draw);
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // Stripes everywhere except the top row, which White fills last
        let mut board = Board::new(5).unwrap();
        for pos in board.legal_moves() {
            if pos.row == 0 {
                continue;
            }
            let stone = if (pos.col + 2 * pos.row) % 4 < 2 {
                Stone::Black
            } else {
                Stone::White
            };
            board.make_move(pos, stone);
        }
        for col in 0..5 {
            board.make_move(Pos::new(0, col), Stone::White);
        }
        assert!(board.is_draw());
        assert_eq!(outcome_after(&board, Stone::White).winner(), Some(Stone::White));
    }
}
