//! Line extraction for the evaluator
//!
//! Every row, every column and every diagonal long enough to hold a five.

use crate::board::{Board, Stone, WIN_LENGTH};

/// Collect all lines of a board snapshot.
///
/// Order: rows, columns, down-right diagonals (starting in column 0 by row,
/// then in row 0 by column), down-left diagonals (starting in the last
/// column by row, then in row 0 by column, right to left). Diagonals shorter
/// than five cells are skipped.
pub fn lines(board: &Board) -> Vec<Vec<Stone>> {
    let mut out = Vec::with_capacity(line_count(board.size()));
    let mut scratch = Vec::with_capacity(board.size());
    for_each_line(board, &mut scratch, |line| out.push(line.to_vec()));
    out
}

/// Visit every line in [`lines`] order without allocating per line.
///
/// Rows are borrowed straight from the board; columns and diagonals are
/// gathered into `scratch`, which is overwritten for each one.
pub(crate) fn for_each_line<F>(board: &Board, scratch: &mut Vec<Stone>, mut f: F)
where
    F: FnMut(&[Stone]),
{
    let size = board.size();

    // Rows
    for row in 0..size {
        f(board.row(row));
    }

    // Columns
    for col in 0..size {
        scratch.clear();
        scratch.extend((0..size).map(|row| cell(board, row, col)));
        f(scratch.as_slice());
    }

    // Down-right diagonals
    for row in 0..size {
        visit_diagonal(board, scratch, row, 0, 1, &mut f);
    }
    for col in 1..size {
        visit_diagonal(board, scratch, 0, col, 1, &mut f);
    }

    // Down-left diagonals
    for row in 0..size {
        visit_diagonal(board, scratch, row, size - 1, -1, &mut f);
    }
    for col in (0..size.saturating_sub(1)).rev() {
        visit_diagonal(board, scratch, 0, col, -1, &mut f);
    }
}

/// Number of lines `lines` yields for a board size
pub fn line_count(size: usize) -> usize {
    let diagonals = if size >= WIN_LENGTH {
        2 * (2 * (size - WIN_LENGTH) + 1)
    } else {
        0
    };
    2 * size + diagonals
}

#[inline]
fn cell(board: &Board, row: usize, col: usize) -> Stone {
    board.cells()[row * board.size() + col]
}

fn visit_diagonal<F>(
    board: &Board,
    scratch: &mut Vec<Stone>,
    row: usize,
    col: usize,
    dc: i32,
    f: &mut F,
) where
    F: FnMut(&[Stone]),
{
    let size = board.size() as i32;
    scratch.clear();
    let (mut r, mut c) = (row as i32, col as i32);
    while r < size && c >= 0 && c < size {
        scratch.push(cell(board, r as usize, c as usize));
        r += 1;
        c += dc;
    }
    if scratch.len() >= WIN_LENGTH {
        f(scratch.as_slice());
    }
}
