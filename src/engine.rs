//! Main AI engine for Slideways
//!
//! The engine wraps the minimax [`Searcher`] with the game configuration
//! (win threshold, search depth and the tie-break seed) and reports search
//! statistics for display.
//!
//! # Example
//!
//! ```
//! use slideways::{AIEngine, Board, Player, Strategy};
//!
//! let mut engine = AIEngine::with_seed(4, 2, 7);
//! let board = Board::new(4);
//! let history = vec![board.clone()];
//!
//! let result = engine.choose_move_with_stats(&board, Player::One, Strategy::HeuristicMax, None, &history);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Move, Player};
use crate::config::GameConfig;
use crate::search::{SearchResult, Searcher, Strategy};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score of the chosen move from the mover's point of view
    pub score: f64,
    /// Leaf scoring used by the search
    pub strategy: Strategy,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, strategy: Strategy, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            strategy,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine for Slideways.
///
/// # Configuration
///
/// The engine can be configured with:
/// - Win threshold (run length scored by the search)
/// - Maximum search depth
/// - Seed of the tie-break random source
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine with the default configuration and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create an engine from a game configuration.
    ///
    /// Uses `config.seed` when set, otherwise seeds from the OS.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(config.win_threshold, rng),
            max_depth: config.search_depth,
        }
    }

    /// Create an engine with a fixed seed, for reproducible play.
    ///
    /// ```
    /// use slideways::AIEngine;
    ///
    /// let engine = AIEngine::with_seed(4, 3, 42);
    /// assert_eq!(engine.max_depth(), 3);
    /// ```
    #[must_use]
    pub fn with_seed(win_threshold: usize, max_depth: u8, seed: u64) -> Self {
        Self {
            searcher: Searcher::new(win_threshold, StdRng::seed_from_u64(seed)),
            max_depth,
        }
    }

    /// Best move for `player`, or `None` if it has no legal move.
    ///
    /// Use `choose_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        strategy: Strategy,
        last_move: Option<Move>,
        history: &[Board],
    ) -> Option<Move> {
        self.choose_move_with_stats(board, player, strategy, last_move, history)
            .best_move
    }

    /// Best move with search statistics.
    ///
    /// `history` must contain every board reached so far in the game (the
    /// current one included); the engine only reads it.
    #[must_use]
    pub fn choose_move_with_stats(
        &mut self,
        board: &Board,
        player: Player,
        strategy: Strategy,
        last_move: Option<Move>,
        history: &[Board],
    ) -> MoveResult {
        let start = Instant::now();
        debug!(
            "player {} searching with {:?} at depth {}",
            player.number(),
            strategy,
            self.max_depth
        );

        let result = self
            .searcher
            .search(board, player, strategy, self.max_depth, last_move, history);
        let result = MoveResult::from_search(result, strategy, start.elapsed().as_millis() as u64);

        match result.best_move {
            Some(mv) => info!(
                "player {} chose {} (score {:.1}, {} nodes, {}ms)",
                player.number(),
                mv,
                result.score,
                result.nodes,
                result.time_ms
            ),
            None => info!("player {} has no legal move", player.number()),
        }
        result
    }

    /// Set maximum search depth (plies).
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn win_threshold(&self) -> usize {
        self.searcher.win_threshold()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
