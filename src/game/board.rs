use super::Player;
use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of contiguous pieces needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A rows × cols grid of cells. Row 0 is the top, row `rows - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

// right, down, down-right, down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a board from parsed rows. Short rows are padded with `Empty`,
    /// long rows are cut to `cols`, missing rows are left empty.
    pub fn from_rows(rows: usize, cols: usize, data: Vec<Vec<Cell>>) -> Self {
        let mut board = Board::new(rows, cols);
        for (row, cells) in data.into_iter().take(rows).enumerate() {
            for (col, cell) in cells.into_iter().take(cols).enumerate() {
                board.cells[row * cols + col] = cell;
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Iterate over one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of cells holding the given piece.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        (0..self.rows).all(|row| self.get(row, col) != Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        // Scan bottom-up: the first empty cell is the landing row.
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull { column: col })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Whether `player` owns four contiguous cells anywhere on the board.
    ///
    /// Each line is found from its top-left-most cell, so scanning the four
    /// forward directions from every owned cell covers every line.
    pub fn has_four(&self, player: Player) -> bool {
        let cell = player.to_cell();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != cell {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    if self.run_from(row, col, dr, dc, cell) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn run_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (1..WIN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            r >= 0
                && c >= 0
                && (r as usize) < self.rows
                && (c as usize) < self.cols
                && self.get(r as usize, c as usize) == cell
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
