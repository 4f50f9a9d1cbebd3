//! Game recording
//!
//! A [`GameRecord`] stores every board of every game played in a session,
//! together with the player modes and names, as pretty-printed JSON.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::RecordError;
use crate::game::PlayerMode;

fn default_win_threshold() -> usize {
    4
}

/// Persisted session: one board sequence per game, initial board first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default = "default_win_threshold")]
    pub win_threshold: usize,
    pub modes: [PlayerMode; 2],
    pub names: [String; 2],
    pub games: Vec<Vec<Board>>,
}

impl GameRecord {
    /// Write the record as JSON, replacing `path` atomically.
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        debug!("saved {} game(s) to {}", self.games.len(), path.display());
        Ok(())
    }

    /// Read a record, dropping games in which no move was played.
    /// Fails if no game remains.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path)?;
        let mut record: GameRecord = serde_json::from_str(&json)?;
        record.games.retain(|game| game.len() > 1);
        if record.games.is_empty() {
            return Err(RecordError::Empty);
        }
        Ok(record)
    }

    /// Total number of boards over all games
    pub fn len(&self) -> usize {
        self.games.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates the boards of a session
#[derive(Debug, Clone)]
pub struct Recorder {
    record: GameRecord,
    current: Vec<Board>,
    autosave: Option<PathBuf>,
}

impl Recorder {
    /// Start recording a session whose first game begins at `initial`
    pub fn new(
        initial: Board,
        win_threshold: usize,
        modes: [PlayerMode; 2],
        names: [String; 2],
    ) -> Self {
        Self {
            record: GameRecord {
                win_threshold,
                modes,
                names,
                games: Vec::new(),
            },
            current: vec![initial],
            autosave: None,
        }
    }

    /// Rewrite `path` after every recorded board from now on
    pub fn start(&mut self, path: PathBuf) -> Result<(), RecordError> {
        info!("recording to {}", path.display());
        self.autosave = Some(path);
        self.flush()
    }

    /// Stop rewriting the autosave file, returning its path
    pub fn stop(&mut self) -> Option<PathBuf> {
        self.autosave.take()
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.autosave.is_some()
    }

    pub fn set_players(
        &mut self,
        modes: [PlayerMode; 2],
        names: [String; 2],
    ) -> Result<(), RecordError> {
        self.record.modes = modes;
        self.record.names = names;
        self.flush()
    }

    /// Append a board to the current game
    pub fn push(&mut self, board: Board) -> Result<(), RecordError> {
        self.current.push(board);
        self.flush()
    }

    /// Close the current game and open a new one at `initial`.
    ///
    /// A game in which no move was played is discarded.
    pub fn new_game(&mut self, initial: Board) -> Result<(), RecordError> {
        let finished = std::mem::replace(&mut self.current, vec![initial]);
        if finished.len() > 1 {
            self.record.games.push(finished);
        }
        self.flush()
    }

    /// Boards of the game in progress
    pub fn current_game(&self) -> &[Board] {
        &self.current
    }

    /// Finished games plus the game in progress (if a move was played)
    pub fn snapshot(&self) -> GameRecord {
        let mut record = self.record.clone();
        if self.current.len() > 1 {
            record.games.push(self.current.clone());
        }
        record
    }

    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let record = self.snapshot();
        record.save(path)?;
        info!("saved record to {}", path.display());
        Ok(())
    }

    fn flush(&self) -> Result<(), RecordError> {
        match &self.autosave {
            Some(path) => self.snapshot().save(path),
            None => Ok(()),
        }
    }
}
