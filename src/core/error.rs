//! Error types for every engine boundary.
//!
//! All engine operations return these as values. A returned error always
//! means the session state is unchanged.

use thiserror::Error;

use super::config::{PLAYERS_MAX, PLAYERS_MIN, SIZE_MAX, SIZE_MIN, WALLS_MAX};
use super::player::SessionId;

/// Construction-time configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Minimum players: {}", PLAYERS_MIN)]
    TooFewPlayers,

    #[error("Maximum players: {}", PLAYERS_MAX)]
    TooManyPlayers,

    #[error("Minimum size: {}", SIZE_MIN)]
    BoardTooSmall,

    #[error("Maximum size: {}", SIZE_MAX)]
    BoardTooLarge,

    #[error("Maximum walls: {}", WALLS_MAX)]
    TooManyWalls,

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Seat management errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinError {
    #[error("Game already in progress")]
    AlreadyInProgress,

    #[error("Player already exists")]
    AlreadySeated,

    #[error("Game is full")]
    Full,

    #[error("Game is over")]
    GameOver,
}

/// Errors from executing a player command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("It's not your turn")]
    NotYourTurn,

    #[error("Incorrect move")]
    IllegalMove,

    #[error("Incorrect build")]
    IllegalBuild,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Errors from the session lobby.
#[derive(Error, Debug)]
pub enum LobbyError {
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Join(#[from] JoinError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Binary snapshot codec errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(ConfigError::TooFewPlayers.to_string(), "Minimum players: 2");
        assert_eq!(ConfigError::BoardTooLarge.to_string(), "Maximum size: 15");
    }

    #[test]
    fn test_command_error_messages() {
        assert_eq!(CommandError::NotYourTurn.to_string(), "It's not your turn");
        assert_eq!(
            CommandError::InvalidCommand("jump".into()).to_string(),
            "Invalid command: jump"
        );
    }

    #[test]
    fn test_lobby_error_is_transparent() {
        let err: LobbyError = JoinError::Full.into();
        assert_eq!(err.to_string(), "Game is full");
        assert_eq!(
            LobbyError::UnknownSession(SessionId(3)).to_string(),
            "Unknown session: Game 3"
        );
    }
}
