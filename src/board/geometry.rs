//! Bounds checks for cells and wall anchors.

use crate::core::position::Position;
use crate::core::wall::WallDirection;

/// True if `pos` is a cell of a `size` x `size` board.
#[must_use]
pub fn is_valid_cell(size: i32, pos: Position) -> bool {
    (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
}

/// True if a segment of `direction` may be anchored at `pos`.
///
/// Horizontal and center segments cannot sit on the last row, vertical and
/// center segments cannot sit on the last column.
#[must_use]
pub fn is_valid_wall_anchor(size: i32, pos: Position, direction: WallDirection) -> bool {
    let mut max_row = size - 1;
    let mut max_col = size - 1;

    if matches!(direction, WallDirection::Horizontal | WallDirection::Center) {
        max_row -= 1;
    }
    if matches!(direction, WallDirection::Vertical | WallDirection::Center) {
        max_col -= 1;
    }

    (0..=max_row).contains(&pos.row) && (0..=max_col).contains(&pos.col)
}
