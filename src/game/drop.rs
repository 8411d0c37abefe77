//! Gravity drop resolution.
//!
//! A move names a column; the cell that actually fills is decided here. The
//! game itself only needs [`resolve_drop`]. [`resolve_click`] exists for
//! click-driven frontends that let the user pick any cell of a column: it
//! searches upward from an occupied click and downward from an empty one,
//! which lands on the same cell as [`resolve_drop`] for every board a legal
//! game can reach (columns are packed from the bottom). The tests pin that
//! equivalence down.

use super::board::Board;

/// The lowest unoccupied cell of `column`, or `None` if the column is full
/// or outside the board.
pub fn resolve_drop(board: &Board, column: usize) -> Option<usize> {
    board
        .column_cells(column)
        .find(|cell| !cell.is_filled())
        .map(|cell| cell.id())
}

/// Resolve a click on the cell at `(row, column)` to the cell gravity would
/// fill in that column.
///
/// An occupied click targets the lowest empty cell strictly above it; an
/// empty click targets the cell just above the highest occupied cell at or
/// below the clicked row, or row 0 if that part of the column is empty.
/// `None` if the column is full or the coordinates are outside the board.
pub fn resolve_click(board: &Board, row: usize, column: usize) -> Option<usize> {
    let clicked = board.cell_at(row, column).ok()?;

    if clicked.is_filled() {
        board
            .column_cells(column)
            .filter(|cell| cell.row() > row)
            .find(|cell| !cell.is_filled())
            .map(|cell| cell.id())
    } else {
        let stack_top = board
            .column_cells(column)
            .filter(|cell| cell.row() <= row && cell.is_filled())
            .map(|cell| cell.row())
            .max();
        let target_row = match stack_top {
            Some(top) => top + 1,
            None => 0,
        };
        board.cell_at(target_row, column).ok().map(|cell| cell.id())
    }
}
