//! Heuristic evaluation function for Gomoku board positions
//!
//! Every line of the board is rendered from each player's point of view and
//! scored against the pattern table. The board score is the difference
//! between the two players' totals, so it is antisymmetric:
//! `evaluate(board, A) == -evaluate(board, B)`.

use crate::board::{Board, Stone};

use super::lines::{for_each_line, line_count};
use super::patterns::{count_occurrences, EMPTY, OPPONENT, PATTERNS, SELF};

/// Score a single line for `color`.
#[must_use]
pub fn evaluate_line(line: &[Stone], color: Stone) -> i64 {
    let mut rendered = Vec::with_capacity(line.len());
    render(line, color, &mut rendered);
    score_rendered(&rendered)
}

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`, negative values favor the opponent.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i64 {
    let opponent = color.opponent();
    let mut scratch = Vec::with_capacity(board.size());
    let mut buf = Vec::with_capacity(board.size());

    let mut total = 0;
    for_each_line(board, &mut scratch, |line| {
        render(line, color, &mut buf);
        total += score_rendered(&buf);
        render(line, opponent, &mut buf);
        total -= score_rendered(&buf);
    });
    total
}

/// Upper bound on the magnitude `evaluate` can return for a board size.
///
/// Each pattern matches at most `size` times per line and the weights top
/// out at five-in-a-row, so this is a loose but safe ceiling.
#[must_use]
pub fn max_evaluation(size: usize) -> i64 {
    let top = PATTERNS.iter().map(|&(_, w)| w).max().unwrap_or(0);
    line_count(size) as i64 * PATTERNS.len() as i64 * size as i64 * top
}

fn render(line: &[Stone], color: Stone, out: &mut Vec<u8>) {
    out.clear();
    out.extend(line.iter().map(|&s| match s {
        Stone::Empty => EMPTY,
        s if s == color => SELF,
        _ => OPPONENT,
    }));
}

fn score_rendered(rendered: &[u8]) -> i64 {
    PATTERNS
        .iter()
        .map(|&(pattern, weight)| count_occurrences(rendered, pattern) as i64 * weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::PatternScore;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const W: Stone = Stone::White;
    const B: Stone = Stone::Black;
    const E: Stone = Stone::Empty;

    #[test]
    fn test_empty_line_scores_zero() {
        assert_eq!(evaluate_line(&[E; 9], W), 0);
        assert_eq!(evaluate_line(&[E; 9], B), 0);
    }

    #[test]
    fn test_single_open_stone() {
        assert_eq!(evaluate_line(&[E, W, E, E, E], W), PatternScore::OPEN_ONE);
        // Edge stone has no empty cell on its left
        assert_eq!(evaluate_line(&[W, E, E, E, E], W), 0);
    }

    #[test]
    fn test_five_in_row_line() {
        // PPPPP only; nothing else fits in five cells
        assert_eq!(evaluate_line(&[W; 5], W), PatternScore::FIVE);
        assert_eq!(evaluate_line(&[W; 5], B), 0);
    }

    #[test]
    fn test_open_four_line() {
        // _PPPP_ matches open four, the _PP_ and _P_ shapes do not fit
        let line = [E, W, W, W, W, E];
        assert_eq!(evaluate_line(&line, W), PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_closed_four_line() {
        // OPPPP_ and the trailing _ give no extra shape
        let line = [B, W, W, W, W, E];
        assert_eq!(evaluate_line(&line, W), PatternScore::CLOSED_FOUR);
    }

    #[test]
    fn test_open_two_counts_every_shape() {
        // _PP__ , __PP_ is absent, _PP_ also matches, _P_ does not
        let line = [E, W, W, E, E];
        assert_eq!(evaluate_line(&line, W), 2 * PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_opponent_view_of_line() {
        let line = [E, B, E, E, E];
        assert_eq!(evaluate_line(&line, W), 0);
        assert_eq!(evaluate_line(&line, B), PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(9).unwrap();
        assert_eq!(evaluate(&board, W), 0);
    }

    #[test]
    fn test_evaluate_single_center_stone() {
        let mut board = Board::new(9).unwrap();
        board.make_move(Pos::new(4, 4), W);
        // _P_ on the row, the column and both main diagonals
        assert_eq!(evaluate(&board, W), 4 * PatternScore::OPEN_ONE);
        assert_eq!(evaluate(&board, B), -4 * PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_evaluate_symmetry_random_boards() {
        for seed in 0..40u64 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let size = rng.gen_range(5..=12);
            let mut board = Board::new(size).unwrap();
            let mut cells = board.legal_moves();
            cells.shuffle(&mut rng);
            let placed = rng.gen_range(0..=cells.len());
            for (i, &pos) in cells.iter().take(placed).enumerate() {
                let stone = if i % 2 == 0 { W } else { B };
                board.make_move(pos, stone);
            }
            assert_eq!(
                evaluate(&board, W),
                -evaluate(&board, B),
                "seed {seed}, size {size}"
            );
        }
    }

    #[test]
    fn test_evaluate_agrees_with_collected_lines() {
        for seed in 0..20u64 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let size = rng.gen_range(5..=19);
            let mut board = Board::new(size).unwrap();
            let mut cells = board.legal_moves();
            cells.shuffle(&mut rng);
            let placed = rng.gen_range(0..=cells.len());
            for (i, &pos) in cells.iter().take(placed).enumerate() {
                board.make_move(pos, if i % 2 == 0 { W } else { B });
            }

            let expected: i64 = crate::eval::lines::lines(&board)
                .iter()
                .map(|line| evaluate_line(line, W) - evaluate_line(line, B))
                .sum();
            assert_eq!(evaluate(&board, W), expected, "seed {seed}, size {size}");
        }
    }

    #[test]
    fn test_evaluate_favours_stronger_side() {
        let mut board = Board::new(9).unwrap();
        for col in 2..5 {
            board.make_move(Pos::new(4, col), W);
        }
        board.make_move(Pos::new(0, 0), B);
        assert!(evaluate(&board, W) > 0);
        assert!(evaluate(&board, B) < 0);
    }

    #[test]
    fn test_max_evaluation_bounds_full_boards() {
        for size in [5usize, 9, 15, 19] {
            let mut board = Board::new(size).unwrap();
            for pos in board.legal_moves() {
                board.make_move(pos, W);
            }
            assert!(evaluate(&board, W) <= max_evaluation(size));
        }
    }
}
