//! Multi-session lobby.
//!
//! `SessionManager` owns every live session, hands out `SessionId`s and
//! routes seat and turn operations to the right one. Finished sessions stay
//! visible for `LobbyConfig::reset_delay` so clients can see the result,
//! then `reset_expired` returns them to an empty, joinable board.
//!
//! The manager has no clock of its own. Every operation that can end a
//! game takes the caller's `now`, and `reset_expired` measures against the
//! same clock.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::info;

use super::game::GameSession;
use super::snapshot::Snapshot;
use crate::core::config::{GameConfig, LobbyConfig};
use crate::core::error::{CommandError, LobbyError};
use crate::core::player::{PlayerId, SessionId, Uid};
use crate::rules::Command;

/// A session still accepting players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSession {
    pub id: SessionId,
    pub config: GameConfig,
    pub seated: usize,
}

#[derive(Clone, Debug)]
struct Entry {
    session: GameSession,
    finished_at: Option<Instant>,
}

impl Entry {
    fn track_finish(&mut self, now: Instant) {
        if self.finished_at.is_none() && self.session.winner().is_some() {
            self.finished_at = Some(now);
        }
    }
}

/// Registry of sessions keyed by `SessionId`.
#[derive(Clone, Debug, Default)]
pub struct SessionManager {
    config: LobbyConfig,
    sessions: FxHashMap<SessionId, Entry>,
    next_id: u64,
    seed: Option<u64>,
}

impl SessionManager {
    #[must_use]
    pub fn new(config: LobbyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A manager whose sessions draw reproducible first players.
    #[must_use]
    pub fn with_seed(config: LobbyConfig, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    #[must_use]
    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    // === Sessions ===

    /// Create a session with `config`.
    pub fn create(&mut self, config: GameConfig) -> Result<SessionId, LobbyError> {
        let id = SessionId(self.next_id);
        let session = match self.seed {
            Some(seed) => {
                let session_seed = seed.wrapping_add(id.0.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                GameSession::with_seed(config, session_seed)?
            }
            None => GameSession::new(config)?,
        };

        self.next_id += 1;
        self.sessions.insert(
            id,
            Entry {
                session,
                finished_at: None,
            },
        );
        info!(%id, players = config.player_count, size = config.board_size, "session created");
        Ok(id)
    }

    /// Create a session with the lobby's default game config.
    pub fn create_default(&mut self) -> Result<SessionId, LobbyError> {
        self.create(self.config.default_game)
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&GameSession> {
        self.sessions.get(&id).map(|entry| &entry.session)
    }

    pub fn snapshot(&self, id: SessionId) -> Result<Snapshot, LobbyError> {
        self.get(id)
            .map(GameSession::snapshot)
            .ok_or(LobbyError::UnknownSession(id))
    }

    /// Sessions waiting for players, by id.
    #[must_use]
    pub fn open_sessions(&self) -> Vec<OpenSession> {
        let mut open: Vec<OpenSession> = self
            .sessions
            .iter()
            .filter(|(_, entry)| {
                !entry.session.is_in_progress() && entry.session.winner().is_none()
            })
            .map(|(&id, entry)| OpenSession {
                id,
                config: *entry.session.config(),
                seated: entry.session.state().seated_count(),
            })
            .collect();
        open.sort_unstable_by_key(|s| s.id);
        open
    }

    pub fn remove(&mut self, id: SessionId) -> Option<GameSession> {
        let removed = self.sessions.remove(&id).map(|entry| entry.session);
        if removed.is_some() {
            info!(%id, "session removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn entry_mut(&mut self, id: SessionId) -> Result<&mut Entry, LobbyError> {
        self.sessions
            .get_mut(&id)
            .ok_or(LobbyError::UnknownSession(id))
    }

    // === Routing ===

    pub fn join(&mut self, id: SessionId, uid: impl Into<Uid>) -> Result<PlayerId, LobbyError> {
        let entry = self.entry_mut(id)?;
        Ok(entry.session.join(uid)?)
    }

    /// Vacate `uid`'s seat. A game this ends is stamped as finished at `now`.
    pub fn exit(
        &mut self,
        id: SessionId,
        uid: &Uid,
        now: Instant,
    ) -> Result<Option<PlayerId>, LobbyError> {
        let entry = self.entry_mut(id)?;
        let seat = entry.session.exit(uid);
        entry.track_finish(now);
        Ok(seat)
    }

    /// Execute a command for `seat` in session `id`. A winning command
    /// stamps the session as finished at `now`.
    pub fn command(
        &mut self,
        id: SessionId,
        seat: PlayerId,
        command: Command,
        now: Instant,
    ) -> Result<(), LobbyError> {
        let entry = self.entry_mut(id)?;
        entry.session.command(seat, command)?;
        entry.track_finish(now);
        Ok(())
    }

    /// Execute a command on behalf of whoever is authenticated as `uid`.
    ///
    /// A `uid` without a seat in the session is never on turn.
    pub fn command_as(
        &mut self,
        id: SessionId,
        uid: &Uid,
        command: Command,
        now: Instant,
    ) -> Result<(), LobbyError> {
        let seat = self
            .get(id)
            .ok_or(LobbyError::UnknownSession(id))?
            .seat_of(uid)
            .ok_or(CommandError::NotYourTurn)?;
        self.command(id, seat, command, now)
    }

    /// Vacate every seat `uid` holds across all sessions.
    pub fn disconnect(&mut self, uid: &Uid, now: Instant) -> Vec<(SessionId, PlayerId)> {
        let mut vacated: Vec<(SessionId, PlayerId)> = self
            .sessions
            .iter_mut()
            .filter_map(|(&id, entry)| {
                let seat = entry.session.exit(uid)?;
                entry.track_finish(now);
                Some((id, seat))
            })
            .collect();
        vacated.sort_unstable();
        if !vacated.is_empty() {
            info!(%uid, sessions = vacated.len(), "player disconnected");
        }
        vacated
    }

    // === Reset ===

    /// Reset every session finished at least `reset_delay` before `now`.
    /// Returns the ids that were reset.
    pub fn reset_expired(&mut self, now: Instant) -> Vec<SessionId> {
        let delay = self.config.reset_delay();
        let mut reset: Vec<SessionId> = self
            .sessions
            .iter_mut()
            .filter(|(_, entry)| {
                entry
                    .finished_at
                    .is_some_and(|at| now.saturating_duration_since(at) >= delay)
            })
            .map(|(&id, entry)| {
                entry.session.reset();
                entry.finished_at = None;
                id
            })
            .collect();
        reset.sort_unstable();
        reset
    }
}
