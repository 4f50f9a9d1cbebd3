//! Game state management for the Slideways GUI

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::error::TurnError;
use crate::search::Strategy;
use crate::turn::TurnOutcome;
use crate::{Game, GameConfig, Move, Player, PlayerMode, Verdict};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<TurnOutcome, TurnError>>,
        start_time: Instant,
        strategy: Strategy,
    },
}

/// Last AI move with the strategy that produced it
#[derive(Debug, Clone)]
pub struct AiReport {
    pub outcome: TurnOutcome,
    pub strategy: Strategy,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main GUI state: the session plus everything needed to drive it from frames
pub struct GameState {
    pub game: Game,
    pub ai_state: AiState,
    pub last_ai: Option<AiReport>,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// Verdict of the last finished round, kept after a forfeit restart
    pub round_result: Option<Verdict>,
    /// Paused sessions do not start AI turns
    pub paused: bool,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            ai_state: AiState::Idle,
            last_ai: None,
            move_timer: MoveTimer::default(),
            message: None,
            round_result: None,
            paused: false,
        }
    }

    /// Start the next round; scores are kept
    pub fn new_round(&mut self) {
        self.ai_state = AiState::Idle;
        self.game.restart();
        self.round_result = None;
        self.message = None;
        self.move_timer = MoveTimer::default();
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves a human may click right now
    pub fn human_moves(&self) -> Vec<Move> {
        if self.is_ai_thinking() || !self.game.is_human_turn() {
            return Vec::new();
        }
        self.game.legal_moves()
    }

    /// Attempt a human move
    pub fn try_play(&mut self, mv: Move) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        let verdict = self.game.play_human(mv).map_err(|e| e.to_string())?;
        self.after_move(verdict);
        Ok(())
    }

    fn after_move(&mut self, verdict: Verdict) {
        self.move_timer.stop();
        self.message = None;
        if verdict.is_over() {
            self.round_result = Some(verdict);
        } else {
            self.move_timer.start();
        }
    }

    pub fn set_mode(&mut self, player: Player, mode: PlayerMode) {
        if self.game.mode(player) == mode {
            return;
        }
        // A search in flight for this player no longer applies
        if self.game.current_player() == player {
            self.ai_state = AiState::Idle;
        }
        self.game.set_mode(player, mode);
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if self.paused || !self.game.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let turn = match self.game.ai_turn() {
            Ok(turn) => turn,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };
        let strategy = turn.strategy();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(turn.run());
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            strategy,
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let (outcome, strategy) = match &self.ai_state {
            AiState::Thinking {
                receiver, strategy, ..
            } => match receiver.try_recv() {
                Ok(outcome) => (outcome, *strategy),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        if let Ok(outcome) = &outcome {
            self.last_ai = Some(AiReport {
                outcome: outcome.clone(),
                strategy,
            });
        }

        let forfeit = match &outcome {
            Err(TurnError::TimingForfeit { player, .. }) => Some(*player),
            _ => None,
        };

        match self.game.finish_ai_turn(outcome) {
            Ok(verdict) => {
                if let Some(player) = forfeit {
                    self.round_result = Some(verdict);
                    self.move_timer = MoveTimer::default();
                    self.message = Some(format!(
                        "{} ran out of time and forfeits",
                        self.game.name(player)
                    ));
                } else {
                    self.after_move(verdict);
                }
            }
            Err(e) => {
                warn!("discarding AI result: {e}");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Toggle recording to `path`
    pub fn set_recording(&mut self, on: bool, path: &str) {
        if on == self.game.is_recording() {
            return;
        }
        if on {
            if let Err(e) = self.game.start_recording(PathBuf::from(path)) {
                self.message = Some(format!("Cannot record: {e}"));
            }
        } else if let Some(path) = self.game.stop_recording() {
            self.message = Some(format!("Saved {}", path.display()));
        }
    }
}
