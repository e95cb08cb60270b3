//! Game rules: commands, movement and wall placement.
//!
//! Every predicate here reads a `GameState` and never mutates it. The
//! `apply_*` functions validate first and write only on success, so a
//! rejected command always leaves the state as it was.

pub mod command;
pub mod movement;
pub mod building;

pub use command::{Command, RawCommand};
pub use movement::{apply_move, classify_move, legal_move, legal_moves, MoveKind};
pub use building::{apply_build, check_build, legal_build, legal_builds, BuildRejection};
