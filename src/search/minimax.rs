//! Full-width minimax

use crate::board::Board;

use super::Searcher;

impl Searcher {
    /// Minimax value of `board` from the searcher's perspective.
    ///
    /// `maximizing` is true when the searcher's own player is to move.
    pub(super) fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> i64 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let actor = self.actor(maximizing);
        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        for pos in board.legal_moves() {
            let placed = board.make_move(pos, actor);
            debug_assert!(placed, "search move {pos} was not placed");
            let score = self.minimax(board, depth - 1, !maximizing);
            board.undo_move(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}
