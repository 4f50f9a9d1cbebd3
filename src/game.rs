//! Game session: board, turn order, scoring and player modes
//!
//! A [`Game`] runs consecutive rounds between two players. Each round starts
//! from a fresh board with Player One to move. A win scores one point for
//! the winner, a draw one point for each player, and an AI forfeit one point
//! for its opponent (the round then restarts immediately).
//!
//! AI turns can be played synchronously with [`Game::play_ai`], or split in
//! two so the search runs on another thread: [`Game::ai_turn`] captures what
//! the search needs, [`AiTurn::run`] performs it, and
//! [`Game::finish_ai_turn`] applies the outcome.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::error::{GameError, RecordError, TurnError};
use crate::record::Recorder;
use crate::rules::{self, Verdict};
use crate::search::Strategy;
use crate::turn::{TurnController, TurnOutcome};

/// Who controls a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerMode {
    #[default]
    Human,
    Ai(Strategy),
}

impl PlayerMode {
    #[inline]
    pub fn is_ai(self) -> bool {
        matches!(self, PlayerMode::Ai(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerMode::Human => "Human",
            PlayerMode::Ai(strategy) => strategy.label(),
        }
    }
}

/// Everything an AI turn needs, detached from the session
pub struct AiTurn {
    engine: Arc<Mutex<AIEngine>>,
    controller: TurnController,
    board: Board,
    player: Player,
    strategy: Strategy,
    last_move: Option<Move>,
    history: Vec<Board>,
}

impl AiTurn {
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Run the search under the turn controller. Blocks.
    pub fn run(self) -> Result<TurnOutcome, TurnError> {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        self.controller.play(
            &mut engine,
            &self.board,
            self.player,
            self.strategy,
            self.last_move,
            &self.history,
        )
    }
}

pub struct Game {
    config: GameConfig,
    board: Board,
    current: Player,
    last_move: Option<Move>,
    history: Vec<Board>,
    scores: [u32; 2],
    modes: [PlayerMode; 2],
    names: [String; 2],
    verdict: Verdict,
    engine: Arc<Mutex<AIEngine>>,
    turn: TurnController,
    recorder: Option<Recorder>,
}

impl Game {
    /// New session from a validated configuration, both players human
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size);
        Self {
            engine: Arc::new(Mutex::new(AIEngine::from_config(&config))),
            turn: TurnController::new(config.ai_time_limit()),
            history: vec![board.clone()],
            board,
            current: Player::One,
            last_move: None,
            scores: [0; 2],
            modes: [PlayerMode::Human; 2],
            names: ["Player 1".to_string(), "Player 2".to_string()],
            verdict: Verdict::Ongoing,
            recorder: None,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Every board of the current round, initial board first
    #[inline]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    #[inline]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[inline]
    pub fn mode(&self, player: Player) -> PlayerMode {
        self.modes[player.index()]
    }

    pub fn set_mode(&mut self, player: Player, mode: PlayerMode) {
        self.modes[player.index()] = mode;
        self.sync_recorder_players();
    }

    #[inline]
    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }

    pub fn set_name(&mut self, player: Player, name: impl Into<String>) {
        self.names[player.index()] = name.into();
        self.sync_recorder_players();
    }

    pub fn min_think(&self, player: Player) -> Duration {
        self.turn.min_think(player)
    }

    pub fn set_min_think(&mut self, player: Player, min: Duration) {
        self.turn.set_min_think(player, min);
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.verdict.is_over() && self.mode(self.current).is_ai()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.verdict.is_over() && !self.mode(self.current).is_ai()
    }

    /// Legal moves of the player to move (none once the round is decided)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.verdict.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.current, self.last_move, &self.history)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        !self.verdict.is_over()
            && rules::is_legal(&self.board, self.current, mv, self.last_move, &self.history)
    }

    // ------------------------------------------------------------------
    // Moves
    // ------------------------------------------------------------------

    /// Apply `mv` for the player to move, whoever controls it
    pub fn play(&mut self, mv: Move) -> Result<Verdict, GameError> {
        if self.verdict.is_over() {
            return Err(GameError::RoundOver);
        }
        if !rules::is_legal(&self.board, self.current, mv, self.last_move, &self.history) {
            return Err(GameError::IllegalMove(mv));
        }
        Ok(self.commit(mv))
    }

    /// Apply `mv` for a human player
    pub fn play_human(&mut self, mv: Move) -> Result<Verdict, GameError> {
        if self.mode(self.current).is_ai() {
            return Err(GameError::NotHumanTurn(self.current));
        }
        self.play(mv)
    }

    /// Capture the current position for an AI search
    pub fn ai_turn(&self) -> Result<AiTurn, GameError> {
        if self.verdict.is_over() {
            return Err(GameError::RoundOver);
        }
        let PlayerMode::Ai(strategy) = self.mode(self.current) else {
            return Err(GameError::NotAiTurn(self.current));
        };

        Ok(AiTurn {
            engine: Arc::clone(&self.engine),
            controller: self.turn.clone(),
            board: self.board.clone(),
            player: self.current,
            strategy,
            last_move: self.last_move,
            history: self.history.clone(),
        })
    }

    /// Apply the outcome of an AI turn started with [`Game::ai_turn`].
    ///
    /// A forfeit awards the opponent a point and restarts the round; the
    /// forfeited round is reported as a win for the opponent.
    pub fn finish_ai_turn(
        &mut self,
        outcome: Result<TurnOutcome, TurnError>,
    ) -> Result<Verdict, GameError> {
        match outcome {
            Ok(outcome) => {
                self.check_ai_to_move(outcome.player)?;
                self.play(outcome.mv)
            }
            Err(TurnError::TimingForfeit { player, elapsed }) => {
                self.check_ai_to_move(player)?;
                if self.verdict.is_over() {
                    return Err(GameError::RoundOver);
                }
                let winner = player.opponent();
                self.scores[winner.index()] += 1;
                info!(
                    "player {} forfeits after {:?}; point to player {}",
                    player.number(),
                    elapsed,
                    winner.number()
                );
                self.restart();
                Ok(Verdict::Win(winner))
            }
            Err(TurnError::NoLegalMoves(player)) => {
                self.check_ai_to_move(player)?;
                if self.verdict.is_over() {
                    return Err(GameError::RoundOver);
                }
                info!("player {} cannot move, round drawn", player.number());
                Ok(self.conclude(Verdict::Draw))
            }
        }
    }

    /// An outcome only applies while its player is to move and AI-controlled
    fn check_ai_to_move(&self, player: Player) -> Result<(), GameError> {
        if player != self.current || !self.mode(player).is_ai() {
            return Err(GameError::NotAiTurn(player));
        }
        Ok(())
    }

    /// Play the turn of the AI player to move. Blocks for the search.
    pub fn play_ai(&mut self) -> Result<Verdict, GameError> {
        let turn = self.ai_turn()?;
        let outcome = turn.run();
        self.finish_ai_turn(outcome)
    }

    /// Start a new round. Scores, modes and names are kept.
    pub fn restart(&mut self) {
        self.board = Board::new(self.config.board_size);
        self.history = vec![self.board.clone()];
        self.last_move = None;
        self.current = Player::One;
        self.verdict = Verdict::Ongoing;

        if let Some(recorder) = &mut self.recorder {
            if let Err(e) = recorder.new_game(self.board.clone()) {
                warn!("failed to update record: {e}");
            }
        }
        debug!("new round");
    }

    fn commit(&mut self, mv: Move) -> Verdict {
        let player = self.current;
        self.board.apply(mv, player);
        self.history.push(self.board.clone());
        self.last_move = Some(mv);
        debug!("player {} plays {}", player.number(), mv);

        if let Some(recorder) = &mut self.recorder {
            if let Err(e) = recorder.push(self.board.clone()) {
                warn!("failed to update record: {e}");
            }
        }

        let verdict = rules::evaluate(&self.board, self.config.win_threshold);
        if verdict.is_over() {
            return self.conclude(verdict);
        }

        self.current = player.opponent();
        if self.legal_moves().is_empty() {
            info!("player {} cannot move, round drawn", self.current.number());
            return self.conclude(Verdict::Draw);
        }
        Verdict::Ongoing
    }

    fn conclude(&mut self, verdict: Verdict) -> Verdict {
        match verdict {
            Verdict::Win(winner) => {
                self.scores[winner.index()] += 1;
                info!("player {} wins the round", winner.number());
            }
            Verdict::Draw => {
                self.scores[0] += 1;
                self.scores[1] += 1;
                info!("round drawn");
            }
            Verdict::Ongoing => return verdict,
        }
        self.verdict = verdict;
        verdict
    }

    // ------------------------------------------------------------------
    // Recording
    // ------------------------------------------------------------------

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recorder.as_ref().is_some_and(Recorder::is_recording)
    }

    /// Record the session to `path`, starting with the round in progress.
    /// The file is rewritten after every move.
    pub fn start_recording(&mut self, path: PathBuf) -> Result<(), RecordError> {
        let mut recorder = Recorder::new(
            self.history[0].clone(),
            self.config.win_threshold,
            self.modes,
            self.names.clone(),
        );
        for board in &self.history[1..] {
            recorder.push(board.clone())?;
        }
        recorder.start(path)?;
        self.recorder = Some(recorder);
        Ok(())
    }

    /// Stop recording, returning the path that was written
    pub fn stop_recording(&mut self) -> Option<PathBuf> {
        self.recorder.take().and_then(|mut recorder| recorder.stop())
    }

    pub fn recorder(&self) -> Option<&Recorder> {
        self.recorder.as_ref()
    }

    fn sync_recorder_players(&mut self) {
        if let Some(recorder) = &mut self.recorder {
            if let Err(e) = recorder.set_players(self.modes, self.names.clone()) {
                warn!("failed to update record: {e}");
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
