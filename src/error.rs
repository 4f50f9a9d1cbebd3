use std::path::PathBuf;
use std::time::Duration;

use crate::board::{Move, Player};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised while an automated player takes its turn.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TurnError {
    #[error("player {} exceeded the time budget ({elapsed:?})", .player.number())]
    TimingForfeit { player: Player, elapsed: Duration },

    #[error("player {} has no legal move", .0.number())]
    NoLegalMoves(Player),
}

/// Errors raised by the game session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("the round is over")]
    RoundOver,

    #[error("player {} is not controlled by a human", .0.number())]
    NotHumanTurn(Player),

    #[error("player {} is not controlled by the AI", .0.number())]
    NotAiTurn(Player),
}

/// Errors that can occur while saving or loading game records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record contains no positions")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("win_threshold must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: win_threshold must be >= 2"
        );
    }

    #[test]
    fn test_turn_error_display() {
        let err = TurnError::NoLegalMoves(Player::Two);
        assert_eq!(err.to_string(), "player 2 has no legal move");

        let err = TurnError::TimingForfeit {
            player: Player::One,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(err.to_string(), "player 1 exceeded the time budget (1.5s)");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::IllegalMove(Move::shift(2, Direction::Left));
        assert_eq!(err.to_string(), "illegal move: shift row 2 Left");
        assert_eq!(
            GameError::NotAiTurn(Player::One).to_string(),
            "player 1 is not controlled by the AI"
        );
    }

    #[test]
    fn test_record_error_display() {
        assert_eq!(RecordError::Empty.to_string(), "record contains no positions");
    }
}
