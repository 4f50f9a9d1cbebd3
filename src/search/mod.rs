//! Search module for the Slideways AI
//!
//! Contains:
//! - Depth-limited minimax with exact terminal scoring
//! - The same search with heuristic leaf scoring (max or mean occupancy)

pub mod minimax;

use serde::{Deserialize, Serialize};

use crate::eval::Reduction;

pub use minimax::{SearchResult, Searcher};

/// Leaf scoring used by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Leaves score WIN / LOSS / DRAW from the win detector
    Exact,
    /// Leaves score by the best line of each family
    HeuristicMax,
    /// Leaves score by the average line of each family
    HeuristicMean,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Exact,
        Strategy::HeuristicMax,
        Strategy::HeuristicMean,
    ];

    /// Heuristic reduction, or `None` for exact scoring
    #[inline]
    pub fn reduction(self) -> Option<Reduction> {
        match self {
            Strategy::Exact => None,
            Strategy::HeuristicMax => Some(Reduction::Max),
            Strategy::HeuristicMean => Some(Reduction::Mean),
        }
    }

    /// Short label for display
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Exact => "Easy",
            Strategy::HeuristicMax => "Medium",
            Strategy::HeuristicMean => "Hard",
        }
    }
}
