use tracing::{debug, warn};

use super::CellSymbols;
use crate::game::{Board, Cell};

/// Result of rebuilding a board from region text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruction {
    /// Exactly `rows` candidate rows were found.
    Recovered(Board),
    /// The row count did not match; the board was replaced with an empty one.
    Reset { board: Board, candidate_rows: usize },
}

impl Reconstruction {
    pub fn board(&self) -> &Board {
        match self {
            Reconstruction::Recovered(board) => board,
            Reconstruction::Reset { board, .. } => board,
        }
    }

    pub fn into_board(self) -> Board {
        match self {
            Reconstruction::Recovered(board) => board,
            Reconstruction::Reset { board, .. } => board,
        }
    }

    pub fn was_reset(&self) -> bool {
        matches!(self, Reconstruction::Reset { .. })
    }
}

/// Parse a line into cells if it looks like a board row: exactly `cols`
/// tokens, each one a known cell symbol.
pub fn candidate_row(line: &str, cols: usize, symbols: &CellSymbols) -> Option<Vec<Cell>> {
    let line = line.trim().replace('|', " ");
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != cols {
        return None;
    }
    tokens.into_iter().map(|token| symbols.parse(token)).collect()
}

/// Rebuild a `rows × cols` board from the text between the markers.
///
/// Headers, separators, status lines and link rows are skipped because they
/// never consist solely of cell symbols. Any row-count mismatch yields an
/// empty board instead of an error so a damaged document heals on the next
/// move.
pub fn reconstruct(text: &str, rows: usize, cols: usize, symbols: &CellSymbols) -> Reconstruction {
    let parsed: Vec<Vec<Cell>> = text
        .lines()
        .filter_map(|line| candidate_row(line, cols, symbols))
        .collect();
    debug!(candidate_rows = parsed.len(), rows, "scanned region");

    if parsed.len() == rows {
        Reconstruction::Recovered(Board::from_rows(rows, cols, parsed))
    } else {
        warn!(
            candidate_rows = parsed.len(),
            expected = rows,
            "board rows did not parse, starting from an empty board"
        );
        Reconstruction::Reset {
            board: Board::new(rows, cols),
            candidate_rows: parsed.len(),
        }
    }
}
