//! Sessions: the per-game state machine, its client-facing snapshot and
//! the lobby that hosts many sessions at once.

pub mod game;
pub mod snapshot;
pub mod manager;

pub use game::{GameSession, GameStatus};
pub use snapshot::Snapshot;
pub use manager::{OpenSession, SessionManager};
