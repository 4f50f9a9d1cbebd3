//! Evaluation module for Slideways positions
//!
//! Exact outcome scores for terminal leaves and the occupancy heuristic used
//! by the heuristic search at non-terminal leaves.

pub mod heuristic;
pub mod score;

pub use heuristic::{evaluate, Reduction};
pub use score::OutcomeScore;
