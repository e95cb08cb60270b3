//! Seats, identities and per-seat data storage.
//!
//! ## PlayerId
//!
//! Seat index, fixed when the session is created. A seat exists whether or
//! not anyone sits in it.
//!
//! ## SessionId
//!
//! Handle the lobby hands out for each session it creates.
//!
//! ## PlayerMap
//!
//! `Vec`-backed per-seat storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! The occupant data of one seat: identity, token position, goal line and
//! remaining wall budget.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::{Finish, Position};

/// Seat index. The first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every seat of a game with `player_count` seats.
    ///
    /// ```
    /// use rust_quoridor::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Authenticated identity of whoever occupies a seat.
///
/// Opaque to the engine; the transport supplies it (a connection id, a
/// session cookie, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(pub String);

impl Uid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Uid {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lobby-assigned identifier of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat from a factory.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for `player`, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One seat's occupant state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub index: PlayerId,

    /// Occupant identity. `None` while the seat is empty.
    pub uid: Option<Uid>,

    /// Token cell. `None` while the seat is empty.
    pub position: Option<Position>,

    /// Goal line, fixed when the session is created.
    pub finish: Finish,

    pub walls_remaining: u32,
}

impl Player {
    /// An empty seat.
    #[must_use]
    pub fn new(index: PlayerId, finish: Finish, walls: u32) -> Self {
        Self {
            index,
            uid: None,
            position: None,
            finish,
            walls_remaining: walls,
        }
    }

    #[must_use]
    pub fn is_seated(&self) -> bool {
        self.uid.is_some()
    }

    /// True if `cell` lies on this player's goal line.
    #[must_use]
    pub fn is_finish_cell(&self, cell: Position) -> bool {
        self.finish.is_satisfied_by(cell)
    }

    /// True if the seated token stands on its goal line.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.is_seated() && self.position.map_or(false, |p| self.is_finish_cell(p))
    }

    /// Seat a user at `start`.
    pub fn seat(&mut self, uid: Uid, start: Position) {
        self.uid = Some(uid);
        self.position = Some(start);
    }

    /// Vacate the seat. The wall budget is left as is.
    pub fn vacate(&mut self) {
        self.uid = None;
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::new(2).index(), 2);
        assert_eq!(format!("{}", PlayerId::new(0)), "Player 0");
    }

    #[test]
    fn test_player_map_access() {
        let mut map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.get(PlayerId::new(3)), None);

        map[PlayerId::new(1)] = 7;
        let pairs: Vec<_> = map.iter().map(|(p, v)| (p.index(), *v)).collect();
        assert_eq!(pairs, vec![(0, 0), (1, 7), (2, 20)]);
    }

    #[test]
    fn test_seat_and_vacate() {
        let mut player = Player::new(PlayerId::new(0), Finish::col(8), 10);
        assert!(!player.is_seated());
        assert!(!player.is_winner());

        player.seat(Uid::from("alice"), Position::new(4, 0));
        assert!(player.is_seated());
        assert_eq!(player.position, Some(Position::new(4, 0)));

        player.position = Some(Position::new(2, 8));
        assert!(player.is_winner());

        player.vacate();
        assert_eq!(player.uid, None);
        assert_eq!(player.position, None);
        assert_eq!(player.walls_remaining, 10);
        assert!(!player.is_winner());
    }

    #[test]
    fn test_uid_serializes_as_string() {
        let json = serde_json::to_string(&Uid::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
