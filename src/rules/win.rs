//! Winning-line locator
//!
//! `Board::check_win` answers whether a five exists; this finds which
//! cells form it so drivers can highlight them.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors, in the order lines are reported
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Find the first five-in-a-row for `stone`.
///
/// Cells are scanned in row-major order and each is tried as the start of a
/// run in every direction. For an overline the first five cells from the
/// scan start are returned.
pub fn find_winning_line(board: &Board, stone: Stone) -> Option<[Pos; 5]> {
    if stone == Stone::Empty {
        return None;
    }
    let size = board.size() as i32;
    for row in 0..size {
        for col in 0..size {
            for &(dr, dc) in &DIRECTIONS {
                if let Some(line) = five_from(board, row, col, dr, dc, stone) {
                    return Some(line);
                }
            }
        }
    }
    None
}

fn five_from(board: &Board, row: i32, col: i32, dr: i32, dc: i32, stone: Stone) -> Option<[Pos; 5]> {
    let mut line = [Pos::new(0, 0); WIN_LENGTH];
    for (i, slot) in line.iter_mut().enumerate() {
        let i = i as i32;
        let pos = board.pos_at(row + dr * i, col + dc * i)?;
        if board.get(pos) != stone {
            return None;
        }
        *slot = pos;
    }
    Some(line)
}
