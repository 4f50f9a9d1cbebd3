//! GUI module for the Slideways game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod replay_view;
mod theme;

pub use app::SlidewaysApp;
pub use game_state::{AiReport, AiState, GameState};
