//! Path-existence checks.
//!
//! Breadth-first search over the 4-neighbor grid, where an edge is open
//! unless a placed or hypothetical wall segment blocks it. Tokens are
//! ignored: occupancy restricts movement, never the path check.
//!
//! A single visited set spans the whole traversal and is checked before a
//! cell is enqueued, so each cell is expanded at most once.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::edges::is_edge_open;
use super::geometry::is_valid_cell;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::core::wall::Wall;

/// True if `player` can reach its goal line with `extra` walls added.
///
/// Empty seats trivially have a path.
#[must_use]
pub fn has_path(state: &GameState, player: &Player, extra: &[Wall]) -> bool {
    let Some(start) = player.position else {
        return true;
    };

    let size = state.config.size();
    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if player.is_finish_cell(cell) {
            return true;
        }

        for next in cell.neighbors() {
            if !is_valid_cell(size, next) || visited.contains(&next) {
                continue;
            }
            if !is_edge_open(&state.walls, extra, cell, next) {
                continue;
            }
            visited.insert(next);
            frontier.push_back(next);
        }
    }

    false
}

/// True if every seated player keeps a path with `extra` walls added.
#[must_use]
pub fn all_players_have_path(state: &GameState, extra: &[Wall]) -> bool {
    state.seated().all(|player| has_path(state, player, extra))
}
