//! Board geometry, wall edges and reachability.
//!
//! Pure functions over `GameState`. Nothing here mutates state.

pub mod geometry;
pub mod edges;
pub mod reachability;

pub use geometry::{is_valid_cell, is_valid_wall_anchor};
pub use edges::{blocking_segment, is_edge_open};
pub use reachability::{all_players_have_path, has_path};
