//! Grid coordinates and goal-line descriptors.
//!
//! ## Position
//!
//! A concrete `(row, col)` cell. Coordinates are signed so that neighbor
//! helpers can step off the board; bounds are checked separately by
//! `board::geometry`.
//!
//! ## Finish
//!
//! A goal line: one axis fixed, the other a wildcard. Any cell sharing the
//! fixed axis value satisfies it.

use serde::{Deserialize, Serialize};

/// A cell on the board, row-major with `(0, 0)` in the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing to the right.
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell `shift` rows above.
    #[must_use]
    pub const fn up(self, shift: i32) -> Self {
        Self::new(self.row - shift, self.col)
    }

    /// Cell `shift` rows below.
    #[must_use]
    pub const fn down(self, shift: i32) -> Self {
        Self::new(self.row + shift, self.col)
    }

    /// Cell `shift` columns to the left.
    #[must_use]
    pub const fn left(self, shift: i32) -> Self {
        Self::new(self.row, self.col - shift)
    }

    /// Cell `shift` columns to the right.
    #[must_use]
    pub const fn right(self, shift: i32) -> Self {
        Self::new(self.row, self.col + shift)
    }

    /// Translate by a row/column delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The four orthogonal neighbors: up, down, left, right.
    #[must_use]
    pub const fn neighbors(self) -> [Position; 4] {
        [self.up(1), self.down(1), self.left(1), self.right(1)]
    }

    /// True if `other` shares an edge with this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Goal-line descriptor with exactly one fixed axis.
///
/// Serializes as `{ "row": null, "col": 8 }` so clients see the same shape
/// as a position with a wildcard axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finish {
    /// Goal row, or `None` when any row matches.
    pub row: Option<i32>,
    /// Goal column, or `None` when any column matches.
    pub col: Option<i32>,
}

impl Finish {
    /// Goal line covering a whole row.
    #[must_use]
    pub const fn row(row: i32) -> Self {
        Self { row: Some(row), col: None }
    }

    /// Goal line covering a whole column.
    #[must_use]
    pub const fn col(col: i32) -> Self {
        Self { row: None, col: Some(col) }
    }

    /// True if `cell` lies on this goal line.
    #[must_use]
    pub fn is_satisfied_by(&self, cell: Position) -> bool {
        self.row.map_or(true, |r| r == cell.row) && self.col.map_or(true, |c| c == cell.col)
    }
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.row, self.col) {
            (Some(r), None) => write!(f, "row {}", r),
            (None, Some(c)) => write!(f, "col {}", c),
            (Some(r), Some(c)) => write!(f, "({}, {})", r, c),
            (None, None) => write!(f, "anywhere"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_helpers() {
        let p = Position::new(4, 4);
        assert_eq!(p.up(1), Position::new(3, 4));
        assert_eq!(p.down(2), Position::new(6, 4));
        assert_eq!(p.left(1), Position::new(4, 3));
        assert_eq!(p.right(2), Position::new(4, 6));
        assert_eq!(Position::new(0, 0).up(1), Position::new(-1, 0));
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(2, 2);
        for n in p.neighbors() {
            assert!(p.is_adjacent(n));
        }
        assert!(!p.is_adjacent(Position::new(3, 3)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn test_finish_wildcards() {
        let right_edge = Finish::col(8);
        assert!(right_edge.is_satisfied_by(Position::new(0, 8)));
        assert!(right_edge.is_satisfied_by(Position::new(8, 8)));
        assert!(!right_edge.is_satisfied_by(Position::new(8, 7)));

        let top = Finish::row(0);
        assert!(top.is_satisfied_by(Position::new(0, 3)));
        assert!(!top.is_satisfied_by(Position::new(1, 3)));
    }

    #[test]
    fn test_finish_serialization_shape() {
        let json = serde_json::to_string(&Finish::col(8)).unwrap();
        assert_eq!(json, r#"{"row":null,"col":8}"#);
    }
}
