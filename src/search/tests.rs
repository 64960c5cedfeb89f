use super::*;
use crate::eval::max_evaluation;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const W: Stone = Stone::White;
const B: Stone = Stone::Black;

fn searcher(algorithm: Algorithm, player: Stone, depth: u8, seed: u64) -> Searcher {
    Searcher::with_seed(algorithm, SearchConfig::new(player, depth).unwrap(), seed)
}

fn place(board: &mut Board, stones: &[(u8, u8)], stone: Stone) {
    for &(row, col) in stones {
        assert!(board.make_move(Pos::new(row, col), stone));
    }
}

/// Random alternating position with `stones` stones, White first.
fn random_position(seed: u64, size: usize, stones: usize) -> Board {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    let mut cells = board.legal_moves();
    cells.shuffle(&mut rng);
    for (i, &pos) in cells.iter().take(stones).enumerate() {
        board.make_move(pos, if i % 2 == 0 { W } else { B });
    }
    board
}

/// First `stones` cells in row-major order, colored in two-wide stripes
/// shifted by two each row. No run longer than two in any direction.
fn striped_position(size: usize, stones: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    for pos in board.legal_moves().into_iter().take(stones) {
        let stone = if (pos.col + 2 * pos.row) % 4 < 2 { W } else { B };
        board.make_move(pos, stone);
    }
    board
}

#[test]
fn test_config_validation() {
    assert!(matches!(
        SearchConfig::new(W, 0),
        Err(GameError::InvalidDepth { depth: 0 })
    ));
    assert!(SearchConfig::new(Stone::Empty, 2).is_err());
    let config = SearchConfig::new(B, 3).unwrap();
    assert_eq!(config.player(), B);
    assert_eq!(config.max_depth(), 3);
}

#[test]
fn test_shallowest_config_searches_for_both_stones() {
    for stone in [W, B] {
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let mut board = striped_position(6, 12);
            let before = board.clone();
            let mut searcher = searcher(algorithm, stone, 1, 3);
            assert_eq!(searcher.config().max_depth(), 1);
            assert_eq!(searcher.config().player(), stone);

            let result = searcher.search(&mut board);
            assert_eq!(result.search_type, SearchType::Search(algorithm));
            assert!(before.is_valid_move(result.best_move.unwrap()));
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_win_score_dominates_evaluation() {
    assert!(WIN_SCORE > max_evaluation(crate::board::MAX_DIMENSION));
    assert!(WIN_SCORE > max_evaluation(crate::board::MAX_BOARD_SIZE));
}

#[test]
fn test_depth_one_takes_immediate_win() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut board = Board::new(9).unwrap();
        place(&mut board, &[(2, 1), (2, 2), (2, 3), (2, 4)], W);
        place(&mut board, &[(6, 0), (6, 1), (7, 5)], B);
        // (2, 0) and (2, 5) both complete five
        let result = searcher(algorithm, W, 1, 9).search(&mut board);
        assert_eq!(result.best_moves, vec![Pos::new(2, 0), Pos::new(2, 5)]);
        assert!(result.best_moves.contains(&result.best_move.unwrap()));
        assert_eq!(result.score, WIN_SCORE);
    }
}

#[test]
fn test_immediate_win_scores_remaining_depth() {
    let mut board = Board::new(7).unwrap();
    place(&mut board, &[(3, 1), (3, 2), (3, 3), (3, 4)], W);
    place(&mut board, &[(0, 0), (0, 6), (6, 0), (6, 6)], B);

    let result = searcher(Algorithm::Minimax, W, 2, 1).search(&mut board);
    // Winning at the root leaves one ply of budget unused
    assert_eq!(result.score, WIN_SCORE + 1);
    assert_eq!(result.best_moves, vec![Pos::new(3, 0), Pos::new(3, 5)]);
}

#[test]
fn test_depth_two_blocks_opponent_four() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut board = Board::new(7).unwrap();
        place(&mut board, &[(1, 0), (1, 1), (1, 2), (1, 3)], B);
        place(&mut board, &[(5, 0), (5, 2), (6, 6)], W);

        let result = searcher(algorithm, W, 2, 5).search(&mut board);
        assert_eq!(result.best_move, Some(Pos::new(1, 4)), "{algorithm}");
        assert!(result.score > -WIN_SCORE);
    }
}

#[test]
fn test_forced_loss_scores_terminal() {
    // Black has two separate open fours: every White move loses next ply
    let mut board = Board::new(7).unwrap();
    place(&mut board, &[(0, 1), (0, 2), (0, 3), (0, 4)], B);
    place(&mut board, &[(6, 1), (6, 2), (6, 3), (6, 4)], B);
    place(&mut board, &[(3, 0), (3, 3), (3, 6), (2, 6)], W);

    let result = searcher(Algorithm::AlphaBeta, W, 2, 0).search(&mut board);
    assert_eq!(result.score, -WIN_SCORE);
}

#[test]
fn test_search_restores_board() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut board = random_position(3, 7, 12);
        let before = board.clone();
        let _ = searcher(algorithm, B, 2, 3).search(&mut board);
        assert_eq!(board, before);
    }
}

#[test]
fn test_alpha_beta_matches_minimax_depth_two() {
    for seed in 0..6 {
        let board = random_position(seed, 7, 9);
        let player = if seed % 2 == 0 { W } else { B };

        let mut mm_board = board.clone();
        let mm = searcher(Algorithm::Minimax, player, 2, seed).search(&mut mm_board);
        let mut ab_board = board.clone();
        let ab = searcher(Algorithm::AlphaBeta, player, 2, seed).search(&mut ab_board);

        assert_eq!(mm.best_move, ab.best_move, "seed {seed}");
        assert_eq!(mm.score, ab.score, "seed {seed}");
        assert_eq!(mm.best_moves, ab.best_moves, "seed {seed}");
        assert!(ab.nodes <= mm.nodes, "seed {seed}");
    }
}

#[test]
fn test_alpha_beta_matches_minimax_depth_three() {
    for seed in 10..14 {
        let board = random_position(seed, 6, 24);
        let player = if seed % 2 == 0 { W } else { B };

        let mut mm_board = board.clone();
        let mm = searcher(Algorithm::Minimax, player, 3, seed).search(&mut mm_board);
        let mut ab_board = board.clone();
        let ab = searcher(Algorithm::AlphaBeta, player, 3, seed).search(&mut ab_board);

        assert_eq!(mm.best_move, ab.best_move, "seed {seed}");
        assert_eq!(mm.score, ab.score, "seed {seed}");
        assert_eq!(mm.best_moves, ab.best_moves, "seed {seed}");
        assert!(ab.nodes <= mm.nodes, "seed {seed}");
    }
}

#[test]
fn test_alpha_beta_prunes_at_depth_three() {
    let board = striped_position(6, 20);
    assert!(!board.check_win(W) && !board.check_win(B));

    let mut mm_board = board.clone();
    let mm = searcher(Algorithm::Minimax, W, 3, 0).search(&mut mm_board);
    let mut ab_board = board.clone();
    let ab = searcher(Algorithm::AlphaBeta, W, 3, 0).search(&mut ab_board);

    assert_eq!(mm.score, ab.score);
    assert!(ab.nodes < mm.nodes, "ab {} vs mm {}", ab.nodes, mm.nodes);
}

#[test]
fn test_same_seed_same_choice() {
    let board = random_position(8, 7, 10);
    let first = searcher(Algorithm::AlphaBeta, W, 2, 77).search(&mut board.clone());
    let second = searcher(Algorithm::AlphaBeta, W, 2, 77).search(&mut board.clone());
    assert_eq!(first, second);
}

#[test]
fn test_ties_broken_randomly() {
    // Symmetric under a half turn, so tied moves come in pairs
    let mut board = Board::new(7).unwrap();
    place(&mut board, &[(0, 0), (6, 6), (3, 3)], W);
    place(&mut board, &[(0, 6), (6, 0)], B);

    let mut chosen = std::collections::HashSet::new();
    for seed in 0..32 {
        let result = searcher(Algorithm::Minimax, W, 1, seed).search(&mut board.clone());
        assert!(result.best_moves.len() >= 2);
        let pos = result.best_move.unwrap();
        assert!(result.best_moves.contains(&pos));
        chosen.insert(pos);
    }
    assert!(chosen.len() >= 2);
}

#[test]
fn test_opening_on_empty_board() {
    let mut board = Board::new(9).unwrap();
    let result = searcher(Algorithm::Minimax, W, 3, 4).search(&mut board);
    assert_eq!(result.search_type, SearchType::Opening);
    assert_eq!(result.nodes, 0);
    assert!(crate::opening::opening_candidates(9).contains(&result.best_move.unwrap()));
}

#[test]
fn test_full_board_has_no_move() {
    let mut board = striped_position(5, 25);
    let result = searcher(Algorithm::AlphaBeta, W, 2, 0).search(&mut board);
    assert_eq!(result.best_move, None);
    assert!(result.best_moves.is_empty());
    assert_eq!(result.search_type, SearchType::Search(Algorithm::AlphaBeta));
}

#[test]
fn test_ai_self_play_only_legal_moves() {
    let mut board = Board::new(6).unwrap();
    let mut players = [
        searcher(Algorithm::Minimax, W, 1, 100),
        searcher(Algorithm::AlphaBeta, B, 2, 200),
    ];
    let mut turn = 0;
    loop {
        let stone = players[turn].config().player();
        let before = board.clone();
        let pos = players[turn]
            .get_move(&mut board)
            .expect("board not full");
        assert_eq!(board, before, "search must not leave stones behind");
        assert!(board.make_move(pos, stone), "illegal move {pos}");

        if board.check_win(stone) || board.is_draw() {
            break;
        }
        turn = 1 - turn;
    }
}
