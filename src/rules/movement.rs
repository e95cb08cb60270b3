//! Token movement legality.
//!
//! Three kinds of move are legal:
//! - **Step**: to an orthogonal neighbor across an open edge.
//! - **Jump**: two cells in a straight line over an opponent, with both
//!   edges open.
//! - **Diagonal jump**: to a diagonal neighbor around an opponent (the
//!   pivot), with both edges through the pivot open, and only when the
//!   straight jump over that pivot is not itself legal.
//!
//! Whatever the kind, the landing cell must be on the board and empty,
//! unless it lies on the mover's own goal line. Targets come from clients
//! as arbitrary `i32`s, so the board check runs first.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::{is_edge_open, is_valid_cell};
use crate::core::error::CommandError;
use crate::core::player::{Player, PlayerId};
use crate::core::position::Position;
use crate::core::state::GameState;

/// How a legal move travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Step,
    Jump,
    DiagonalJump,
}

/// Row/column offsets of every cell a move can possibly reach.
const CANDIDATE_OFFSETS: [(i32, i32); 12] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

fn is_open(state: &GameState, from: Position, to: Position) -> bool {
    is_edge_open(&state.walls, &[], from, to)
}

fn may_land(state: &GameState, player: &Player, target: Position) -> bool {
    is_valid_cell(state.config.size(), target)
        && (state.is_empty_cell(target) || player.is_finish_cell(target))
}

fn is_opponent_at(state: &GameState, player: &Player, cell: Position) -> bool {
    matches!(state.occupant(cell), Some(seat) if seat != player.index)
}

fn is_step(state: &GameState, player: &Player, from: Position, target: Position) -> bool {
    from.is_adjacent(target) && is_open(state, from, target) && may_land(state, player, target)
}

fn is_straight_jump(state: &GameState, player: &Player, from: Position, target: Position) -> bool {
    let (d_row, d_col) = (target.row - from.row, target.col - from.col);
    let straight = (d_row.abs() == 2 && d_col == 0) || (d_row == 0 && d_col.abs() == 2);
    if !straight {
        return false;
    }

    let pivot = from.offset(d_row / 2, d_col / 2);
    is_opponent_at(state, player, pivot)
        && is_open(state, from, pivot)
        && is_open(state, pivot, target)
        && may_land(state, player, target)
}

fn is_diagonal_jump(state: &GameState, player: &Player, from: Position, target: Position) -> bool {
    if (target.row - from.row).abs() != 1 || (target.col - from.col).abs() != 1 {
        return false;
    }
    if !may_land(state, player, target) {
        return false;
    }

    let pivots = [
        Position::new(from.row, target.col),
        Position::new(target.row, from.col),
    ];
    pivots.into_iter().any(|pivot| {
        let behind = pivot.offset(pivot.row - from.row, pivot.col - from.col);
        is_opponent_at(state, player, pivot)
            && is_open(state, from, pivot)
            && is_open(state, pivot, target)
            && !is_straight_jump(state, player, from, behind)
    })
}

/// Classify a move, or `None` if it is illegal.
///
/// Empty seats and unknown seats have no legal moves.
#[must_use]
pub fn classify_move(state: &GameState, seat: PlayerId, target: Position) -> Option<MoveKind> {
    let player = state.player(seat)?;
    let from = player.position?;

    // Off-board targets are rejected before any coordinate arithmetic.
    if !is_valid_cell(state.config.size(), target) {
        return None;
    }

    if is_step(state, player, from, target) {
        Some(MoveKind::Step)
    } else if is_straight_jump(state, player, from, target) {
        Some(MoveKind::Jump)
    } else if is_diagonal_jump(state, player, from, target) {
        Some(MoveKind::DiagonalJump)
    } else {
        None
    }
}

/// True if `seat` may move its token to `target`.
#[must_use]
pub fn legal_move(state: &GameState, seat: PlayerId, target: Position) -> bool {
    classify_move(state, seat, target).is_some()
}

/// Every cell `seat` may move to.
#[must_use]
pub fn legal_moves(state: &GameState, seat: PlayerId) -> SmallVec<[Position; 8]> {
    let Some(from) = state.player(seat).and_then(|p| p.position) else {
        return SmallVec::new();
    };

    CANDIDATE_OFFSETS
        .iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| legal_move(state, seat, target))
        .collect()
}

/// Move `seat` to `target` if legal. State is untouched on error.
pub fn apply_move(
    state: &mut GameState,
    seat: PlayerId,
    target: Position,
) -> Result<MoveKind, CommandError> {
    let Some(kind) = classify_move(state, seat, target) else {
        debug!(%seat, %target, "move rejected");
        return Err(CommandError::IllegalMove);
    };

    state.players[seat].position = Some(target);
    Ok(kind)
}
