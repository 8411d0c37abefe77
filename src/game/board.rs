use crate::error::BoardError;

use super::player::PlayerId;

pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

/// Smallest board on which a four-in-a-row window fits.
pub const MIN_DIMENSION: usize = 4;

/// One hole of the board. Row 0 is the bottom-most playable row; gravity
/// fills columns from row 0 upward. The id equals the cell's index in the
/// board's flat storage (`row * width + column`) and is stable for the
/// cell's lifetime, so callers can use it to address visual elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    id: usize,
    row: usize,
    column: usize,
    occupant: Option<PlayerId>,
}

impl Cell {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn occupant(&self) -> Option<PlayerId> {
        self.occupant
    }

    pub fn is_filled(&self) -> bool {
        self.occupant.is_some()
    }
}

/// A `height x width` grid of cells in flat row-major storage, bottom row
/// first. A cell's occupant is written at most once; clearing the board
/// means recreating it (see [`Board::recreate`]), never emptying cells in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must be at least
    /// [`MIN_DIMENSION`], otherwise no window fits.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self::build(width, height))
    }

    fn build(width: usize, height: usize) -> Self {
        let cells = (0..width * height)
            .map(|id| Cell {
                id,
                row: id / width,
                column: id % width,
                occupant: None,
            })
            .collect();
        Board {
            width,
            height,
            cells,
        }
    }

    /// A fresh empty board of the same dimensions, with new cells.
    pub(crate) fn recreate(&self) -> Self {
        Self::build(self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a position; row 0 is the bottom.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<&Cell, BoardError> {
        if row >= self.height || column >= self.width {
            return Err(BoardError::OutOfBounds { row, column });
        }
        Ok(&self.cells[row * self.width + column])
    }

    /// Look up a cell by id.
    pub fn get(&self, cell_id: usize) -> Option<&Cell> {
        self.cells.get(cell_id)
    }

    /// All cells, bottom row first, left to right within a row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The cells of one column from row 0 (bottom) to row `height - 1`
    /// (top). Empty for a column outside the board.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |cell| cell.column == column)
    }

    /// Set a cell's occupant. Callers are expected to route through the
    /// drop resolver first, so a filled target is a contract violation.
    pub fn fill(&mut self, cell_id: usize, player: PlayerId) -> Result<(), BoardError> {
        let width = self.width;
        let cell = self
            .cells
            .get_mut(cell_id)
            .ok_or(BoardError::OutOfBounds {
                row: cell_id / width,
                column: cell_id % width,
            })?;
        if cell.occupant.is_some() {
            return Err(BoardError::AlreadyFilled { cell_id });
        }
        cell.occupant = Some(player);
        Ok(())
    }

    /// Check if a column has no empty cell left.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.width {
            return true;
        }
        // Gravity keeps columns packed, so the top cell decides.
        self.cells[(self.height - 1) * self.width + column].is_filled()
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_filled)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
