//! Slideways game engine
//!
//! Slideways is a two-player connection game on a board whose rows slide:
//! - `size` rows, each holding `size` playable cells inside a strip of
//!   `3 * size - 2` cells (the rest are sentinels)
//! - A move either marks a cell (taking it over from the opponent if needed)
//!   or rotates one row by one position
//! - A row may only slide while a sentinel sits at the edge it leaves
//! - No move may undo the previous one, and no board may ever repeat
//! - A run of `win_threshold` marks in a row, column or diagonal wins; a
//!   line completed by both players at once is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with row rotation
//! - [`rules`]: Move legality and win detection
//! - [`eval`]: Outcome scores and the occupancy heuristic
//! - [`search`]: Depth-limited minimax
//! - [`engine`]: AI engine wrapping the search with configuration
//! - [`turn`]: Time budget and pacing for AI turns
//! - [`game`]: Session with scores, player modes and recording
//! - [`record`], [`replay`]: Saved sessions and their playback
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use slideways::{AIEngine, Board, Move, Player, Strategy};
//!
//! let mut board = Board::new(4);
//! let mut history = vec![board.clone()];
//! let mut engine = AIEngine::with_seed(4, 2, 1);
//!
//! // Human marks a cell, AI answers
//! board.apply(Move::place(1, 4), Player::One);
//! history.push(board.clone());
//!
//! let last = Some(Move::place(1, 4));
//! if let Some(mv) = engine.choose_move(&board, Player::Two, Strategy::HeuristicMax, last, &history) {
//!     board.apply(mv, Player::Two);
//!     println!("AI plays {mv}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod record;
pub mod replay;
pub mod rules;
pub mod search;
pub mod turn;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Direction, Move, Player, Pos, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, GameError, RecordError, TurnError};
pub use game::{Game, PlayerMode};
pub use rules::Verdict;
pub use search::Strategy;
pub use turn::{TurnController, TurnOutcome};
