//! Game rules for Slideways
//!
//! This module implements the rule set:
//! - Move legality (sentinels, no immediate reversal, positional superko)
//! - Line scanning for wins and draws

pub mod lines;
pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use lines::{anti_diagonals, columns, diagonals, rows};
pub use validate::{
    is_legal, is_legal_placement, is_legal_shift, legal_moves, legal_placements, legal_shifts,
};
pub use win::{evaluate, line_verdict, Verdict};
