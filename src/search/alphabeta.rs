//! Minimax with alpha-beta pruning
//!
//! Returns the same value as the full-width minimax whenever the true value
//! lies inside `(alpha, beta)`, and a bound on the correct side otherwise.
//! The root always calls it with the full window, so root scores are exact.

use crate::board::Board;

use super::Searcher;

impl Searcher {
    pub(super) fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> i64 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let actor = self.actor(maximizing);
        if maximizing {
            let mut value = i64::MIN;
            for pos in board.legal_moves() {
                let placed = board.make_move(pos, actor);
                debug_assert!(placed, "search move {pos} was not placed");
                value = value.max(self.alpha_beta(board, depth - 1, alpha, beta, false));
                board.undo_move(pos);

                alpha = alpha.max(value);
                if alpha >= beta {
                    break; // Beta cutoff
                }
            }
            value
        } else {
            let mut value = i64::MAX;
            for pos in board.legal_moves() {
                let placed = board.make_move(pos, actor);
                debug_assert!(placed, "search move {pos} was not placed");
                value = value.min(self.alpha_beta(board, depth - 1, alpha, beta, true));
                board.undo_move(pos);

                beta = beta.min(value);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            value
        }
    }
}
