//! Pattern table for line evaluation
//!
//! Lines are rendered relative to the player being scored: `P` for the
//! player's stones, `O` for the opponent's, `_` for empty cells. Each pattern
//! is counted as non-overlapping literal occurrences.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row
    pub const FIVE: i64 = 1_000_000;
    /// Open four: _PPPP_
    pub const OPEN_FOUR: i64 = 100_000;
    /// Four blocked on one side
    pub const CLOSED_FOUR: i64 = 10_000;
    /// Open three, with or without extra room
    pub const OPEN_THREE: i64 = 10_000;
    /// Three with one gap: _PP_P_ / _P_PP_
    pub const BROKEN_THREE: i64 = 8_000;
    /// Three blocked on one side
    pub const CLOSED_THREE: i64 = 5_000;
    /// Open two, with or without extra room
    pub const OPEN_TWO: i64 = 2_000;
    /// Two with one or two gaps
    pub const BROKEN_TWO: i64 = 2_000;
    /// Single stone between empty cells
    pub const OPEN_ONE: i64 = 1_000;
}

/// Symbol for an empty cell
pub const EMPTY: u8 = b'_';
/// Symbol for the scored player's stone
pub const SELF: u8 = b'P';
/// Symbol for the opponent's stone
pub const OPPONENT: u8 = b'O';

/// Weighted shapes, scanned in this order
pub const PATTERNS: &[(&[u8], i64)] = &[
    (b"PPPPP", PatternScore::FIVE),
    (b"_PPPP_", PatternScore::OPEN_FOUR),
    (b"OPPPP_", PatternScore::CLOSED_FOUR),
    (b"_PPPPO", PatternScore::CLOSED_FOUR),
    (b"_PPP__", PatternScore::OPEN_THREE),
    (b"__PPP_", PatternScore::OPEN_THREE),
    (b"_PPP_", PatternScore::OPEN_THREE),
    (b"_PP_P_", PatternScore::BROKEN_THREE),
    (b"_P_PP_", PatternScore::BROKEN_THREE),
    (b"OPPP_", PatternScore::CLOSED_THREE),
    (b"_PPPO", PatternScore::CLOSED_THREE),
    (b"_PP__", PatternScore::OPEN_TWO),
    (b"__PP_", PatternScore::OPEN_TWO),
    (b"_PP_", PatternScore::OPEN_TWO),
    (b"_P_P__", PatternScore::BROKEN_TWO),
    (b"__P_P_", PatternScore::BROKEN_TWO),
    (b"_P__P_", PatternScore::BROKEN_TWO),
    (b"_P_", PatternScore::OPEN_ONE),
];

/// Count non-overlapping occurrences of `needle`, scanning left to right
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if &haystack[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}
