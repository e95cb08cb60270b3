//! Which wall segment sits on the edge between two adjacent cells.

use crate::core::position::Position;
use crate::core::state::WallSet;
use crate::core::wall::Wall;

/// The segment that would block the step `from -> to`.
///
/// Returns `None` if the cells are not orthogonally adjacent.
#[must_use]
pub fn blocking_segment(from: Position, to: Position) -> Option<Wall> {
    match (to.row - from.row, to.col - from.col) {
        (1, 0) => Some(Wall::horizontal(from)),
        (-1, 0) => Some(Wall::horizontal(to)),
        (0, 1) => Some(Wall::vertical(from)),
        (0, -1) => Some(Wall::vertical(to)),
        _ => None,
    }
}

/// True if no placed segment, nor any of `extra`, blocks `from -> to`.
///
/// Non-adjacent cells never have an open edge.
#[must_use]
pub fn is_edge_open(walls: &WallSet, extra: &[Wall], from: Position, to: Position) -> bool {
    match blocking_segment(from, to) {
        Some(segment) => !walls.contains(&segment) && !extra.contains(&segment),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_segment_is_symmetric() {
        let a = Position::new(3, 3);
        for b in a.neighbors() {
            assert_eq!(blocking_segment(a, b), blocking_segment(b, a));
        }
        assert_eq!(blocking_segment(a, a.down(1)), Some(Wall::horizontal(a)));
        assert_eq!(blocking_segment(a, a.left(1)), Some(Wall::vertical(a.left(1))));
        assert_eq!(blocking_segment(a, Position::new(4, 4)), None);
    }

    #[test]
    fn test_edge_open_with_extra_walls() {
        let mut walls = WallSet::new();
        let a = Position::new(2, 2);

        assert!(is_edge_open(&walls, &[], a, a.right(1)));
        assert!(!is_edge_open(&walls, &[Wall::vertical(a)], a, a.right(1)));

        walls.insert(Wall::horizontal(a.up(1)));
        assert!(!is_edge_open(&walls, &[], a, a.up(1)));
        assert!(is_edge_open(&walls, &[], a, a.down(1)));
    }

    #[test]
    fn test_center_marker_blocks_nothing() {
        let mut walls = WallSet::new();
        let a = Position::new(2, 2);
        walls.insert(Wall::center(a));
        for n in a.neighbors() {
            assert!(is_edge_open(&walls, &[], a, n));
        }
    }
}
