//! Evaluation module for Gomoku positions
//!
//! This module provides line extraction, the pattern table and the
//! board-level heuristic used at search leaves.

pub mod heuristic;
pub mod lines;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_line, max_evaluation};
pub use lines::lines;
pub use patterns::{PatternScore, PATTERNS};
