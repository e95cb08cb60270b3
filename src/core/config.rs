//! Game and lobby configuration.
//!
//! `GameConfig` is immutable once a session is created. It determines the
//! seat layout: where each seat starts and which goal line it races to.
//!
//! Both config types can be read from TOML; missing keys take defaults and
//! the result is validated before it is returned.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;
use super::position::{Finish, Position};

pub const PLAYERS_MIN: usize = 2;
pub const PLAYERS_MAX: usize = 4;
pub const PLAYERS_DEFAULT: usize = 2;

pub const SIZE_MIN: usize = 3;
pub const SIZE_MAX: usize = 15;
pub const SIZE_DEFAULT: usize = 9;

pub const WALLS_MIN: u32 = 0;
pub const WALLS_MAX: u32 = 50;
pub const WALLS_DEFAULT: u32 = 10;

/// Delay before a finished session is reset, in seconds.
pub const RESET_DELAY_DEFAULT_SECS: u64 = 300;

/// Per-session rules configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Board side length (3-15). Odd sizes give every seat a true middle.
    pub board_size: usize,

    /// Walls each player may build.
    pub walls_per_player: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: PLAYERS_DEFAULT,
            board_size: SIZE_DEFAULT,
            walls_per_player: WALLS_DEFAULT,
        }
    }
}

impl GameConfig {
    /// Create a config. Call `validate` before handing it to a session.
    #[must_use]
    pub const fn new(player_count: usize, board_size: usize, walls_per_player: u32) -> Self {
        Self {
            player_count,
            board_size,
            walls_per_player,
        }
    }

    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_walls(mut self, walls: u32) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count > PLAYERS_MAX {
            return Err(ConfigError::TooManyPlayers);
        }
        if self.player_count < PLAYERS_MIN {
            return Err(ConfigError::TooFewPlayers);
        }
        if self.board_size > SIZE_MAX {
            return Err(ConfigError::BoardTooLarge);
        }
        if self.board_size < SIZE_MIN {
            return Err(ConfigError::BoardTooSmall);
        }
        if self.walls_per_player > WALLS_MAX {
            return Err(ConfigError::TooManyWalls);
        }
        Ok(())
    }

    /// Parse and validate a config from TOML.
    ///
    /// ```
    /// use rust_quoridor::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("player_count = 4\nboard_size = 11").unwrap();
    /// assert_eq!(config.player_count, 4);
    /// assert_eq!(config.walls_per_player, 10);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Board side length as a signed coordinate bound.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.board_size as i32
    }

    /// Starting cell for a seat.
    ///
    /// Seat 0 starts left-middle, seat 1 right-middle, seat 2 top-middle
    /// and seat 3 bottom-middle.
    #[must_use]
    pub fn start_position(&self, seat: PlayerId) -> Position {
        let middle = self.size() / 2;
        let max = self.size() - 1;
        match seat.index() % 4 {
            0 => Position::new(middle, 0),
            1 => Position::new(middle, max),
            2 => Position::new(0, middle),
            _ => Position::new(max, middle),
        }
    }

    /// Goal line for a seat: the edge opposite its start.
    #[must_use]
    pub fn finish(&self, seat: PlayerId) -> Finish {
        let max = self.size() - 1;
        match seat.index() % 4 {
            0 => Finish::col(max),
            1 => Finish::col(0),
            2 => Finish::row(max),
            _ => Finish::row(0),
        }
    }
}

/// Configuration for the multi-session manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// Config used by `SessionManager::create_default`.
    pub default_game: GameConfig,

    /// Seconds a finished session stays visible before it is reset.
    pub reset_delay_secs: u64,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            default_game: GameConfig::default(),
            reset_delay_secs: RESET_DELAY_DEFAULT_SECS,
        }
    }
}

impl LobbyConfig {
    #[must_use]
    pub fn with_default_game(mut self, game: GameConfig) -> Self {
        self.default_game = game;
        self
    }

    #[must_use]
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay_secs = delay.as_secs();
        self
    }

    #[must_use]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs)
    }

    /// Parse a lobby config from TOML, validating the default game.
    ///
    /// ```toml
    /// reset_delay_secs = 5
    ///
    /// [default_game]
    /// player_count = 2
    /// board_size = 9
    /// walls_per_player = 10
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.default_game.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::new(2, 9, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ranges() {
        let base = GameConfig::default();
        assert!(matches!(base.with_players(1).validate(), Err(ConfigError::TooFewPlayers)));
        assert!(matches!(base.with_players(5).validate(), Err(ConfigError::TooManyPlayers)));
        assert!(matches!(base.with_board_size(2).validate(), Err(ConfigError::BoardTooSmall)));
        assert!(matches!(base.with_board_size(16).validate(), Err(ConfigError::BoardTooLarge)));
        assert!(matches!(base.with_walls(51).validate(), Err(ConfigError::TooManyWalls)));

        assert!(base.with_players(4).with_board_size(3).with_walls(0).validate().is_ok());
        assert!(base.with_board_size(10).validate().is_ok());
    }

    #[test]
    fn test_seat_layout_size_9() {
        let config = GameConfig::default().with_players(4);
        let seats: Vec<_> = PlayerId::all(4).collect();

        assert_eq!(config.start_position(seats[0]), Position::new(4, 0));
        assert_eq!(config.start_position(seats[1]), Position::new(4, 8));
        assert_eq!(config.start_position(seats[2]), Position::new(0, 4));
        assert_eq!(config.start_position(seats[3]), Position::new(8, 4));

        assert_eq!(config.finish(seats[0]), Finish::col(8));
        assert_eq!(config.finish(seats[1]), Finish::col(0));
        assert_eq!(config.finish(seats[2]), Finish::row(8));
        assert_eq!(config.finish(seats[3]), Finish::row(0));
    }

    #[test]
    fn test_start_is_never_on_own_finish() {
        for size in SIZE_MIN..=SIZE_MAX {
            let config = GameConfig::default().with_players(4).with_board_size(size);
            for seat in PlayerId::all(4) {
                let start = config.start_position(seat);
                assert!(!config.finish(seat).is_satisfied_by(start), "size {} {}", size, seat);
            }
        }
    }

    #[test]
    fn test_toml_defaults_and_validation() {
        let config = GameConfig::from_toml_str("board_size = 7").unwrap();
        assert_eq!(config, GameConfig::default().with_board_size(7));

        assert!(matches!(
            GameConfig::from_toml_str("player_count = 9"),
            Err(ConfigError::TooManyPlayers)
        ));
        assert!(matches!(
            GameConfig::from_toml_str("board_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_lobby_toml() {
        let lobby = LobbyConfig::from_toml_str(
            "reset_delay_secs = 5\n[default_game]\nplayer_count = 3\n",
        )
        .unwrap();
        assert_eq!(lobby.reset_delay(), Duration::from_secs(5));
        assert_eq!(lobby.default_game.player_count, 3);
        assert_eq!(lobby.default_game.board_size, SIZE_DEFAULT);

        let empty = LobbyConfig::from_toml_str("").unwrap();
        assert_eq!(empty, LobbyConfig::default());
    }
}
