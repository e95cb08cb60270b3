//! # rust-quoridor
//!
//! Authoritative rules engine for a wall-placement race game on a square
//! grid, for 2 to 4 players.
//!
//! Each player races a token from the middle of one edge to the opposite
//! edge. On their turn a player steps (or jumps an adjacent opponent), or
//! spends one of a limited supply of walls to obstruct others. A wall may
//! never cut any seated player off from their goal line.
//!
//! ## Design Principles
//!
//! 1. **Validate, then write**: every command is checked against a
//!    read-only view of the board first. A rejected command returns an
//!    error and leaves the session exactly as it was.
//!
//! 2. **N-Player First**: seats, start cells and goal lines are derived
//!    from `player_count`; nothing assumes two players.
//!
//! 3. **Transport-agnostic**: the engine takes typed commands and returns
//!    snapshots. Sockets, rooms and timers belong to the host.
//!
//! ## Architecture
//!
//! - **Persistent wall set**: placed segments live in an `im` set, so
//!   cloning a board for a snapshot is O(1).
//!
//! - **Seeded RNG**: the first player is drawn from a ChaCha8 generator,
//!   seedable for reproducible tests.
//!
//! ## Modules
//!
//! - `core`: Positions, walls, seats, configuration, errors, RNG, board state
//! - `board`: Grid bounds, wall-edge blocking, reachability search
//! - `rules`: Commands, move legality, wall legality
//! - `session`: Game state machine, snapshots, multi-session lobby

pub mod core;
pub mod board;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Finish, Position,
    Wall, WallDirection, WallTriple,
    Player, PlayerId, PlayerMap, SessionId, Uid,
    GameConfig, LobbyConfig,
    CommandError, ConfigError, JoinError, LobbyError, SnapshotError,
    GameRng, GameState, WallSet,
};

pub use crate::board::{all_players_have_path, has_path};

pub use crate::rules::{Command, RawCommand, MoveKind, BuildRejection};

pub use crate::session::{GameSession, GameStatus, OpenSession, SessionManager, Snapshot};
