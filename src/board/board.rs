//! Board structure with make/undo support for search

use std::fmt;

use super::{Pos, Stone, MAX_DIMENSION, WIN_LENGTH};
use crate::error::{GameError, Result};

/// Forward directions scanned by the win check (4 directions)
const FORWARD_DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Square game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Stone>,
    /// Number of occupied cells
    stones: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// The core only requires a positive size that fits `u8` coordinates;
    /// game sessions narrow this to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_DIMENSION {
            return Err(GameError::InvalidBoardSize {
                size,
                min: 1,
                max: MAX_DIMENSION,
            });
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Convert signed coordinates to a position if in-bounds
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        self.contains(row, col)
            .then(|| Pos::new(row as u8, col as u8))
    }

    #[inline]
    fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position. Out-of-bounds positions read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.in_bounds(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    fn at(&self, row: i32, col: i32) -> Option<Stone> {
        self.contains(row, col)
            .then(|| self.cells[row as usize * self.size + col as usize])
    }

    /// True iff the position is on the board and empty
    #[inline]
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[pos.to_index(self.size)] == Stone::Empty
    }

    /// Place a stone if the move is valid. Returns whether the board changed.
    #[inline]
    pub fn make_move(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty || !self.is_valid_move(pos) {
            return false;
        }
        self.cells[pos.to_index(self.size)] = stone;
        self.stones += 1;
        true
    }

    /// Clear a cell occupied by the matching `make_move`.
    ///
    /// Must be paired with a prior `make_move` in LIFO order. Only checked
    /// in debug builds.
    #[inline]
    pub fn undo_move(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = pos.to_index(self.size);
        debug_assert!(
            self.cells[idx] != Stone::Empty,
            "undo_move on empty cell {pos}"
        );
        if self.cells[idx] != Stone::Empty {
            self.cells[idx] = Stone::Empty;
            self.stones -= 1;
        }
    }

    /// All empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    /// Check if `stone` has five or more in a row anywhere on the board
    pub fn check_win(&self, stone: Stone) -> bool {
        if stone == Stone::Empty {
            return false;
        }
        (0..self.cells.len())
            .filter(|&idx| self.cells[idx] == stone)
            .any(|idx| {
                let row = (idx / self.size) as i32;
                let col = (idx % self.size) as i32;
                FORWARD_DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_length(row, col, dr, dc, stone) >= WIN_LENGTH)
            })
    }

    /// Consecutive `stone` cells starting at (row, col) in one direction
    pub(crate) fn run_length(&self, row: i32, col: i32, dr: i32, dc: i32, stone: Stone) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        while self.at(r, c) == Some(stone) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// True when no empty cell remains. Check wins first.
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Remove every stone
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stones = 0;
    }

    /// Row-major view of the cells
    #[inline]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Iterate over one row
    pub fn row(&self, row: usize) -> &[Stone] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}

/// Console rendering: column header, then one line per row
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:2} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:2}  ")?;
            for &stone in self.row(row) {
                write!(f, "{:2} ", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
