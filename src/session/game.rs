//! The game session state machine.
//!
//! ```text
//! WaitingForPlayers --(last seat filled)--> InProgress { active }
//! InProgress --(token reaches goal | one seat left)--> Finished { winner }
//! Finished --(reset / reset_to)--> WaitingForPlayers
//! ```
//!
//! Every operation is synchronous and either applies fully or returns an
//! error with the session unchanged. A session is not internally
//! synchronized: callers serialize access per session (one `&mut` at a
//! time), while distinct sessions are independent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::snapshot::Snapshot;
use crate::core::config::GameConfig;
use crate::core::error::{CommandError, ConfigError, JoinError};
use crate::core::player::{PlayerId, Uid};
use crate::core::position::Position;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::core::wall::WallDirection;
use crate::rules::{self, Command};

/// Lifecycle state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Seats are still open.
    WaitingForPlayers,
    /// All seats were filled; `active` is to move.
    InProgress { active: PlayerId },
    /// The game is over and awaits a reset.
    Finished { winner: PlayerId },
}

/// One game: config, seats, walls and turn order.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    status: GameStatus,
    rng: GameRng,
}

impl GameSession {
    /// Create a session with an entropy-seeded RNG.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a session whose first-player draw is reproducible.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
            status: GameStatus::WaitingForPlayers,
            rng,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::InProgress { active } => Some(active),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, GameStatus::InProgress { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Seat held by `uid`, if any.
    #[must_use]
    pub fn seat_of(&self, uid: &Uid) -> Option<PlayerId> {
        self.state
            .players
            .values()
            .find(|p| p.uid.as_ref() == Some(uid))
            .map(|p| p.index)
    }

    /// Lowest seated index whose token stands on its goal line.
    #[must_use]
    pub fn get_winner(&self) -> Option<PlayerId> {
        self.state.seated().find(|p| p.is_winner()).map(|p| p.index)
    }

    /// Next occupied seat after `seat`, cyclically. `seat` itself comes
    /// last, so a lone seated player gets their own seat back.
    #[must_use]
    pub fn next_seated_after(&self, seat: PlayerId) -> Option<PlayerId> {
        let count = self.state.player_count();
        (1..=count)
            .map(|step| PlayerId(((seat.index() + step) % count) as u8))
            .find(|&next| self.state.players[next].is_seated())
    }

    /// Cells `seat` may move to right now.
    #[must_use]
    pub fn legal_moves(&self, seat: PlayerId) -> SmallVec<[Position; 8]> {
        rules::legal_moves(&self.state, seat)
    }

    /// Walls `seat` may build right now.
    #[must_use]
    pub fn legal_builds(&self, seat: PlayerId) -> Vec<(Position, WallDirection)> {
        rules::legal_builds(&self.state, seat)
    }

    /// Read-only view for clients.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.state.config,
            active_player: self.active_player(),
            in_progress: self.is_in_progress(),
            winner: self.winner(),
            players: self.state.players.values().cloned().collect(),
            walls: self.state.walls.sorted(),
        }
    }

    // === Seats ===

    /// Seat `uid` at the first empty seat. Filling the last seat starts
    /// the game with a uniformly drawn first player.
    pub fn join(&mut self, uid: impl Into<Uid>) -> Result<PlayerId, JoinError> {
        let uid = uid.into();

        match self.status {
            GameStatus::InProgress { .. } => return Err(JoinError::AlreadyInProgress),
            GameStatus::Finished { .. } => return Err(JoinError::GameOver),
            GameStatus::WaitingForPlayers => {}
        }
        if self.seat_of(&uid).is_some() {
            return Err(JoinError::AlreadySeated);
        }

        let seat = self
            .state
            .players
            .values()
            .find(|p| !p.is_seated())
            .map(|p| p.index)
            .ok_or(JoinError::Full)?;

        let start = self.state.config.start_position(seat);
        info!(%uid, %seat, %start, "player joined");
        self.state.players[seat].seat(uid, start);

        if self.state.seated_count() == self.state.player_count() {
            self.start();
        }
        Ok(seat)
    }

    fn start(&mut self) {
        let first = self.rng.gen_range_usize(0..self.state.player_count());
        let active = PlayerId(first as u8);
        info!(%active, "game started");
        self.status = GameStatus::InProgress { active };
    }

    /// Vacate the seat held by `uid`. Returns `None` if `uid` is not seated.
    ///
    /// Mid-game, the last remaining player wins by default; if the leaver
    /// was to move, the turn passes on.
    pub fn exit(&mut self, uid: &Uid) -> Option<PlayerId> {
        let seat = self.seat_of(uid)?;
        self.state.players[seat].vacate();
        info!(%uid, %seat, "player left");

        if let GameStatus::InProgress { active } = self.status {
            let remaining: SmallVec<[PlayerId; 4]> =
                self.state.seated().map(|p| p.index).collect();
            match remaining.as_slice() {
                [last] => self.finish(*last),
                _ if active == seat => self.advance_turn(active),
                _ => {}
            }
        }
        Some(seat)
    }

    // === Turns ===

    /// Execute `command` for `seat`, then either declare a winner or pass
    /// the turn to the next seated player.
    pub fn command(&mut self, seat: PlayerId, command: Command) -> Result<(), CommandError> {
        if self.active_player() != Some(seat) {
            debug!(%seat, kind = command.kind(), "command out of turn");
            return Err(CommandError::NotYourTurn);
        }

        match command {
            Command::Move { position } => {
                rules::apply_move(&mut self.state, seat, position)?;
            }
            Command::Build { position, direction } => {
                rules::apply_build(&mut self.state, seat, position, direction)?;
            }
            Command::Skip => {}
        }

        match self.get_winner() {
            Some(winner) => self.finish(winner),
            None => self.advance_turn(seat),
        }
        Ok(())
    }

    fn advance_turn(&mut self, from: PlayerId) {
        if let Some(active) = self.next_seated_after(from) {
            self.status = GameStatus::InProgress { active };
        }
    }

    fn finish(&mut self, winner: PlayerId) {
        info!(%winner, "game finished");
        self.status = GameStatus::Finished { winner };
    }

    // === Reset ===

    /// Reseed to an empty board with the current config.
    pub fn reset(&mut self) {
        info!("session reset");
        self.state = GameState::new(self.state.config);
        self.status = GameStatus::WaitingForPlayers;
    }

    /// Reseed to an empty board with a new config.
    pub fn reset_to(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.state.config = config;
        self.reset();
        Ok(())
    }
}
