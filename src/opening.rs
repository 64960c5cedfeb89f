//! Opening heuristic
//!
//! On a nearly empty board the search tree is large and almost symmetric, so
//! the first few moves are picked from a handful of central cells instead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos};

/// The center cell and its four direct neighbours, in-bounds only.
///
/// Order: center, left, right, up, down.
pub fn opening_candidates(size: usize) -> Vec<Pos> {
    let center = (size / 2) as i32;
    let size = size as i32;
    [
        (center, center),
        (center, center - 1),
        (center, center + 1),
        (center - 1, center),
        (center + 1, center),
    ]
    .into_iter()
    .filter(|&(r, c)| r >= 0 && r < size && c >= 0 && c < size)
    .map(|(r, c)| Pos::new(r as u8, c as u8))
    .collect()
}

/// Pick a random free opening cell while fewer stones are down than there
/// are candidates. Returns `None` once the opening is over or every
/// candidate is taken.
pub fn opening_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    let candidates = opening_candidates(board.size());
    if board.stone_count() >= candidates.len() {
        return None;
    }
    let free: Vec<Pos> = candidates
        .into_iter()
        .filter(|&pos| board.is_valid_move(pos))
        .collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_candidates_nine_by_nine() {
        let candidates = opening_candidates(9);
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0], Pos::new(4, 4));
        assert_eq!(
            candidates,
            vec![
                Pos::new(4, 4),
                Pos::new(4, 3),
                Pos::new(4, 5),
                Pos::new(3, 4),
                Pos::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_candidates_even_board() {
        assert_eq!(opening_candidates(6)[0], Pos::new(3, 3));
        assert_eq!(opening_candidates(6).len(), 5);
    }

    #[test]
    fn test_candidates_tiny_boards_filtered() {
        assert_eq!(opening_candidates(1), vec![Pos::new(0, 0)]);
        // 2x2: center (1,1), left (1,0), up (0,1); right and down fall off
        assert_eq!(
            opening_candidates(2),
            vec![Pos::new(1, 1), Pos::new(1, 0), Pos::new(0, 1)]
        );
    }

    #[test]
    fn test_opening_move_empty_board() {
        let board = Board::new(9).unwrap();
        let candidates = opening_candidates(9);
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let pos = opening_move(&board, &mut rng).unwrap();
            assert!(candidates.contains(&pos));
        }
    }

    #[test]
    fn test_opening_move_skips_taken_cells() {
        let mut board = Board::new(9).unwrap();
        board.make_move(Pos::new(4, 4), Stone::White);
        board.make_move(Pos::new(4, 3), Stone::Black);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..20 {
            let pos = opening_move(&board, &mut rng).unwrap();
            assert!(board.is_valid_move(pos));
        }
    }

    #[test]
    fn test_opening_over_after_enough_stones() {
        let mut board = Board::new(9).unwrap();
        for col in 0..5 {
            board.make_move(Pos::new(0, col), Stone::White);
        }
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(opening_move(&board, &mut rng), None);
    }

    #[test]
    fn test_opening_falls_through_when_candidates_taken() {
        // 2x2 has three candidates; with two stones on them only one is free
        let mut board = Board::new(2).unwrap();
        board.make_move(Pos::new(1, 1), Stone::White);
        board.make_move(Pos::new(1, 0), Stone::Black);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(opening_move(&board, &mut rng), Some(Pos::new(0, 1)));

        let mut board = Board::new(1).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(opening_move(&board, &mut rng), Some(Pos::new(0, 0)));
        board.make_move(Pos::new(0, 0), Stone::White);
        assert_eq!(opening_move(&board, &mut rng), None);
    }
}
