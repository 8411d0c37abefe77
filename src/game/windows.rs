//! Precomputed four-in-a-row windows.
//!
//! Every possible winning line on a `width x height` board is enumerated
//! once, at board creation, directly from the dimensions. A reverse index
//! from cell id to the windows through that cell lets the win check after a
//! move inspect only the handful of lines the placed piece can complete
//! instead of rescanning the board.

/// Cells per window; the win length of the game.
pub const WIN_LENGTH: usize = 4;

/// Orientation of a window. Documentation only: win evaluation treats all
/// orientations alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, `/`
    DiagonalUp,
    /// Top-left to bottom-right, `\`
    DiagonalDown,
}

/// One candidate four-in-a-row line, as cell ids into the board's flat
/// storage. Windows hold ids rather than cell copies, so they always
/// reflect current occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    orientation: Orientation,
    cells: [usize; WIN_LENGTH],
}

impl Window {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cells(&self) -> &[usize; WIN_LENGTH] {
        &self.cells
    }
}

/// All windows of a board of given dimensions, immutable once built, plus
/// the per-cell reverse index.
#[derive(Debug, Clone)]
pub struct WindowIndex {
    windows: Vec<Window>,
    by_cell: Vec<Vec<usize>>,
}

impl WindowIndex {
    /// Enumerate every window for a `width x height` board. For valid
    /// dimensions (both at least 4) the count is
    /// `h*(w-3) + w*(h-3) + 2*(w-3)*(h-3)`: 69 on the default 7x6 board.
    pub fn new(width: usize, height: usize) -> Self {
        let id = |row: usize, col: usize| row * width + col;
        let mut windows = Vec::new();

        for row in 0..height {
            for col in 0..width.saturating_sub(3) {
                windows.push(Window {
                    orientation: Orientation::Horizontal,
                    cells: [id(row, col), id(row, col + 1), id(row, col + 2), id(row, col + 3)],
                });
            }
        }

        for col in 0..width {
            for row in 0..height.saturating_sub(3) {
                windows.push(Window {
                    orientation: Orientation::Vertical,
                    cells: [id(row, col), id(row + 1, col), id(row + 2, col), id(row + 3, col)],
                });
            }
        }

        for row in 0..height.saturating_sub(3) {
            for col in 0..width.saturating_sub(3) {
                windows.push(Window {
                    orientation: Orientation::DiagonalUp,
                    cells: [
                        id(row, col),
                        id(row + 1, col + 1),
                        id(row + 2, col + 2),
                        id(row + 3, col + 3),
                    ],
                });
            }
        }

        for row in 3..height {
            for col in 0..width.saturating_sub(3) {
                windows.push(Window {
                    orientation: Orientation::DiagonalDown,
                    cells: [
                        id(row, col),
                        id(row - 1, col + 1),
                        id(row - 2, col + 2),
                        id(row - 3, col + 3),
                    ],
                });
            }
        }

        let mut by_cell = vec![Vec::new(); width * height];
        for (index, window) in windows.iter().enumerate() {
            for &cell_id in &window.cells {
                by_cell[cell_id].push(index);
            }
        }

        WindowIndex { windows, by_cell }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// The windows containing a given cell.
    pub fn through(&self, cell_id: usize) -> impl Iterator<Item = &Window> {
        self.by_cell
            .get(cell_id)
            .into_iter()
            .flatten()
            .map(|&index| &self.windows[index])
    }
}
