//! Wall segments.
//!
//! A wall on the board is always placed as a triple of segments:
//! - the boundary segment at the anchor,
//! - the paired boundary segment at the adjacent cell
//!   (`col + 1` for horizontal, `row + 1` for vertical),
//! - a `Center` marker at the anchor.
//!
//! Horizontal segments at `(r, c)` block the edge between `(r, c)` and
//! `(r + 1, c)`. Vertical segments at `(r, c)` block the edge between
//! `(r, c)` and `(r, c + 1)`. Center markers block no movement; they only
//! stop a second wall from crossing through the same intersection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Position;

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallDirection {
    /// Lies below a cell.
    Horizontal,
    /// Lies to the right of a cell.
    Vertical,
    /// Intersection blocker, never built directly.
    Center,
}

impl WallDirection {
    /// Parse the wire name (`"horizontal"`, `"vertical"`, `"center"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// Wire name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Center => "center",
        }
    }
}

impl std::fmt::Display for WallDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single wall segment anchored at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    pub direction: WallDirection,
    pub position: Position,
}

/// The three segments laid down by one build.
pub type WallTriple = SmallVec<[Wall; 3]>;

impl Wall {
    #[must_use]
    pub const fn new(direction: WallDirection, position: Position) -> Self {
        Self { direction, position }
    }

    #[must_use]
    pub const fn horizontal(position: Position) -> Self {
        Self::new(WallDirection::Horizontal, position)
    }

    #[must_use]
    pub const fn vertical(position: Position) -> Self {
        Self::new(WallDirection::Vertical, position)
    }

    #[must_use]
    pub const fn center(position: Position) -> Self {
        Self::new(WallDirection::Center, position)
    }

    /// Segments for a wall anchored at `anchor`, in placement order
    /// `[boundary, center, paired]`.
    ///
    /// Returns `None` for `Center`, which cannot be built directly.
    /// Bounds are not checked here.
    #[must_use]
    pub fn triple(anchor: Position, direction: WallDirection) -> Option<WallTriple> {
        let paired = match direction {
            WallDirection::Horizontal => anchor.right(1),
            WallDirection::Vertical => anchor.down(1),
            WallDirection::Center => return None,
        };

        let mut segments = WallTriple::new();
        segments.push(Wall::new(direction, anchor));
        segments.push(Wall::center(anchor));
        segments.push(Wall::new(direction, paired));
        Some(segments)
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wall at {}", self.direction, self.position)
    }
}
