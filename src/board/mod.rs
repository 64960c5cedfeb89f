//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Smallest board a game session accepts
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board a game session accepts
pub const MAX_BOARD_SIZE: usize = 19;
/// Largest board the core itself can address (coordinates are `u8`)
pub const MAX_DIMENSION: usize = u8::MAX as usize;

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors
///
/// `White` is player 1 and moves first, `Black` is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Player number shown to users (1 for White, 2 for Black, 0 for Empty)
    #[inline]
    pub fn player_number(self) -> u8 {
        match self {
            Stone::White => 1,
            Stone::Black => 2,
            Stone::Empty => 0,
        }
    }

    /// Console symbol
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::White => 'X',
            Stone::Black => 'O',
            Stone::Empty => '.',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::White => "White",
            Stone::Black => "Black",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
