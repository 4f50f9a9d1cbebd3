//! Turn pacing for automated players
//!
//! The controller times a search and enforces two limits on it: a search
//! slower than the AI time budget forfeits the round, and a search faster
//! than the player's minimum thinking time is held back until that minimum
//! has passed. The search is never interrupted; the budget is checked once
//! it returns.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::board::{Board, Move, Player};
use crate::engine::AIEngine;
use crate::error::TurnError;
use crate::search::Strategy;

/// Move chosen by an automated player, with search statistics
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub player: Player,
    pub mv: Move,
    pub score: f64,
    /// Time spent searching (excluding any pacing delay)
    pub elapsed: Duration,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct TurnController {
    ai_time_limit: Duration,
    min_think: [Duration; 2],
}

impl TurnController {
    pub fn new(ai_time_limit: Duration) -> Self {
        Self {
            ai_time_limit,
            min_think: [Duration::ZERO; 2],
        }
    }

    #[inline]
    pub fn ai_time_limit(&self) -> Duration {
        self.ai_time_limit
    }

    pub fn set_ai_time_limit(&mut self, limit: Duration) {
        self.ai_time_limit = limit;
    }

    /// Set the pacing floor for `player`
    pub fn set_min_think(&mut self, player: Player, min: Duration) {
        self.min_think[player.index()] = min;
    }

    #[inline]
    pub fn min_think(&self, player: Player) -> Duration {
        self.min_think[player.index()]
    }

    /// Run one AI turn for `player`.
    ///
    /// Blocks for the whole search, then for whatever remains of the
    /// player's minimum thinking time. The move is returned, not applied.
    pub fn play(
        &self,
        engine: &mut AIEngine,
        board: &Board,
        player: Player,
        strategy: Strategy,
        last_move: Option<Move>,
        history: &[Board],
    ) -> Result<TurnOutcome, TurnError> {
        let start = Instant::now();
        let result = engine.choose_move_with_stats(board, player, strategy, last_move, history);
        let elapsed = start.elapsed();

        let mv = result.best_move.ok_or(TurnError::NoLegalMoves(player))?;

        if elapsed > self.ai_time_limit {
            warn!(
                "player {} took {:?} (limit {:?}), forfeiting the round",
                player.number(),
                elapsed,
                self.ai_time_limit
            );
            return Err(TurnError::TimingForfeit { player, elapsed });
        }

        let min = self.min_think(player);
        if elapsed < min {
            debug!("player {} pacing for {:?}", player.number(), min - elapsed);
            thread::sleep(min - elapsed);
        }

        Ok(TurnOutcome {
            player,
            mv,
            score: result.score,
            elapsed,
            nodes: result.nodes,
        })
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}
