//! Read-only session views.
//!
//! A `Snapshot` is what a client sees after every state change. It
//! serializes to JSON with camelCase keys for wire use and to a compact
//! bincode form for storage or comparison.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::SnapshotError;
use crate::core::player::{Player, PlayerId};
use crate::core::wall::Wall;

/// Full observable state of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub config: GameConfig,
    pub active_player: Option<PlayerId>,
    pub in_progress: bool,
    pub winner: Option<PlayerId>,
    /// One entry per seat, empty seats included.
    pub players: Vec<Player>,
    /// Placed segments in sorted order.
    pub walls: Vec<Wall>,
}

impl Snapshot {
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Number of seats with someone in them.
    #[must_use]
    pub fn seated_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_seated()).count()
    }
}
