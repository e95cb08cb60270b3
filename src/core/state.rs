//! Board state shared by every rules check.
//!
//! `GameState` holds what the legality predicates read: the config, the
//! seats and the placed walls. Turn bookkeeping lives one level up in
//! `session::GameSession`.
//!
//! The wall set is an `im` persistent set, so cloning a state (for a
//! snapshot or a what-if check) is O(1).

use im::HashSet as ImHashSet;

use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap};
use super::position::Position;
use super::wall::Wall;

/// Placed wall segments. Only ever grows during a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallSet {
    segments: ImHashSet<Wall>,
}

impl WallSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, wall: &Wall) -> bool {
        self.segments.contains(wall)
    }

    pub fn insert(&mut self, wall: Wall) {
        self.segments.insert(wall);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in a stable order, for snapshots.
    #[must_use]
    pub fn sorted(&self) -> Vec<Wall> {
        let mut walls: Vec<Wall> = self.segments.iter().copied().collect();
        walls.sort_unstable();
        walls
    }
}

/// Config, seats and walls of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub players: PlayerMap<Player>,
    pub walls: WallSet,
}

impl GameState {
    /// Fresh state: every seat empty with a full wall budget, no walls.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let players = PlayerMap::new(config.player_count, |seat| {
            Player::new(seat, config.finish(seat), config.walls_per_player)
        });
        Self {
            config,
            players,
            walls: WallSet::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Seats currently occupied.
    pub fn seated(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| p.is_seated())
    }

    #[must_use]
    pub fn seated_count(&self) -> usize {
        self.seated().count()
    }

    /// Seat whose token stands on `cell`, if any.
    #[must_use]
    pub fn occupant(&self, cell: Position) -> Option<PlayerId> {
        self.players
            .values()
            .find(|p| p.position == Some(cell))
            .map(|p| p.index)
    }

    #[must_use]
    pub fn is_empty_cell(&self, cell: Position) -> bool {
        self.occupant(cell).is_none()
    }
}
