//! Wall placement legality.
//!
//! A build lays down a wall triple (see `core::wall`). It is legal when:
//! 1. the direction is horizontal or vertical and the builder has walls left,
//! 2. all three segments are in bounds,
//! 3. none of the three segments is already placed (the shared center
//!    marker stops two walls crossing at one intersection),
//! 4. every seated player still has a path to their goal line.
//!
//! Checks run in that order and read only; the triple is written only once
//! all of them pass.

use thiserror::Error;
use tracing::debug;

use crate::board::{all_players_have_path, is_valid_wall_anchor};
use crate::core::error::CommandError;
use crate::core::player::PlayerId;
use crate::core::position::Position;
use crate::core::state::GameState;
use crate::core::wall::{Wall, WallDirection, WallTriple};

/// Why a build was refused. Reported in logs; callers see `IllegalBuild`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildRejection {
    #[error("no such seat or seat is empty")]
    NoBuilder,

    #[error("walls cannot be built in direction {0}")]
    Direction(WallDirection),

    #[error("no walls remaining")]
    NoWallsLeft,

    #[error("{0} is out of bounds")]
    OutOfBounds(Wall),

    #[error("{0} is already placed")]
    Overlap(Wall),

    #[error("wall would cut a player off from their goal")]
    BlocksPath,
}

/// Validate a build and return the segments it would place.
pub fn check_build(
    state: &GameState,
    seat: PlayerId,
    anchor: Position,
    direction: WallDirection,
) -> Result<WallTriple, BuildRejection> {
    let player = state
        .player(seat)
        .filter(|p| p.is_seated())
        .ok_or(BuildRejection::NoBuilder)?;

    if direction == WallDirection::Center {
        return Err(BuildRejection::Direction(direction));
    }

    if player.walls_remaining == 0 {
        return Err(BuildRejection::NoWallsLeft);
    }

    // The anchor is client input; bound it before deriving the paired segment.
    let size = state.config.size();
    if !is_valid_wall_anchor(size, anchor, direction) {
        return Err(BuildRejection::OutOfBounds(Wall::new(direction, anchor)));
    }

    let triple = Wall::triple(anchor, direction).ok_or(BuildRejection::Direction(direction))?;
    if let Some(wall) = triple
        .iter()
        .find(|w| !is_valid_wall_anchor(size, w.position, w.direction))
    {
        return Err(BuildRejection::OutOfBounds(*wall));
    }

    if let Some(wall) = triple.iter().find(|w| state.walls.contains(w)) {
        return Err(BuildRejection::Overlap(*wall));
    }

    if !all_players_have_path(state, &triple) {
        return Err(BuildRejection::BlocksPath);
    }

    Ok(triple)
}

/// True if `seat` may build a wall at `anchor` in `direction`.
#[must_use]
pub fn legal_build(
    state: &GameState,
    seat: PlayerId,
    anchor: Position,
    direction: WallDirection,
) -> bool {
    check_build(state, seat, anchor, direction).is_ok()
}

/// Build a wall for `seat`: three segments placed, one wall spent.
///
/// State is untouched on error.
pub fn apply_build(
    state: &mut GameState,
    seat: PlayerId,
    anchor: Position,
    direction: WallDirection,
) -> Result<(), CommandError> {
    let triple = check_build(state, seat, anchor, direction).map_err(|reason| {
        debug!(%seat, %anchor, %direction, %reason, "build rejected");
        CommandError::IllegalBuild
    })?;

    for wall in triple {
        state.walls.insert(wall);
    }
    state.players[seat].walls_remaining -= 1;
    Ok(())
}

/// Every `(anchor, direction)` that `seat` may currently build.
#[must_use]
pub fn legal_builds(state: &GameState, seat: PlayerId) -> Vec<(Position, WallDirection)> {
    let size = state.config.size();
    let mut builds = Vec::new();

    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let anchor = Position::new(row, col);
            for direction in [WallDirection::Horizontal, WallDirection::Vertical] {
                if legal_build(state, seat, anchor, direction) {
                    builds.push((anchor, direction));
                }
            }
        }
    }

    builds
}
