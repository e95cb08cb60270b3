//! Core engine types: seats, positions, walls, configuration, errors, RNG
//! and the board state the rules read.

pub mod position;
pub mod wall;
pub mod player;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use position::{Finish, Position};
pub use wall::{Wall, WallDirection, WallTriple};
pub use player::{Player, PlayerId, PlayerMap, SessionId, Uid};
pub use config::{GameConfig, LobbyConfig};
pub use error::{CommandError, ConfigError, JoinError, LobbyError, SnapshotError};
pub use rng::GameRng;
pub use state::{GameState, WallSet};
