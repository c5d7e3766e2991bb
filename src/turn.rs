//! One invocation, one ply: locate the region, rebuild the board, apply the
//! move, detect a win and splice the rendered table back in.

use std::path::Path;

use tracing::{info, warn};

use crate::command::Command;
use crate::config::AppConfig;
use crate::document::{reconstruct, Reconstruction, Region};
use crate::error::{MoveError, PlayError, RegionError, RunError};
use crate::game::{GameState, GameStatus, Ply};
use crate::store::{read_document, write_document};

/// Result of applying a move to a document held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The move was applied; `document` is the full replacement text.
    Updated { document: String, ply: Ply },
    /// The column had no room. Nothing changes.
    ColumnFull { column: usize },
}

/// Result of a run against the document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The trigger was not a game command; the file was not touched.
    Ignored,
    /// The move was applied and the file rewritten.
    Written(Ply),
    /// The column was full; the file was not touched.
    ColumnFull { column: usize },
}

/// The board as currently stored, with its derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub reconstruction: Reconstruction,
    pub status: GameStatus,
}

fn rebuild(document: &str, config: &AppConfig) -> Result<(Region, Reconstruction), RegionError> {
    let region = Region::locate(document, &config.markers)?;
    let reconstruction = reconstruct(
        region.inner(document),
        config.board.rows,
        config.board.cols,
        &config.symbols,
    );
    Ok((region, reconstruction))
}

fn warn_on_stale_regions(document: &str, config: &AppConfig) {
    let regions = Region::count(document, &config.markers);
    if regions > 1 {
        warn!(
            regions,
            "document holds more than one board region, only the last one is live"
        );
    }
}

/// Apply one move in `column` to the board inside `document`.
pub fn advance(document: &str, column: usize, config: &AppConfig) -> Result<Advance, PlayError> {
    let (region, reconstruction) = rebuild(document, config)?;
    let mut state = GameState::from_board(reconstruction.into_board());

    let ply = match state.play(column) {
        Ok(ply) => ply,
        Err(MoveError::ColumnFull { column }) => {
            info!(column, "column full, no move made");
            return Ok(Advance::ColumnFull { column });
        }
        Err(e) => return Err(e.into()),
    };

    match ply.status {
        GameStatus::Won(winner) => info!(winner = winner.name(), column, "game won, resetting board"),
        GameStatus::InProgress(next) => {
            info!(player = ply.player.name(), column, next = next.name(), "move applied")
        }
    }

    let rendered = config.renderer().render(state.board(), &ply);
    let updated = region.splice(document, &rendered);
    warn_on_stale_regions(&updated, config);

    Ok(Advance::Updated {
        document: updated,
        ply,
    })
}

/// Replace the board inside `document` with a fresh, empty one.
pub fn reset(document: &str, config: &AppConfig) -> Result<String, RegionError> {
    let region = Region::locate(document, &config.markers)?;
    let rendered = config
        .renderer()
        .render_new_game(config.board.rows, config.board.cols);
    let updated = region.splice(document, &rendered);
    warn_on_stale_regions(&updated, config);
    Ok(updated)
}

/// Read the board without changing anything.
pub fn inspect(document: &str, config: &AppConfig) -> Result<Snapshot, RegionError> {
    let (_, reconstruction) = rebuild(document, config)?;
    let status = GameState::from_board(reconstruction.board().clone()).status();
    Ok(Snapshot {
        reconstruction,
        status,
    })
}

/// Handle one trigger against the document file at `path`.
///
/// The file is read once and written at most once, after the new text is
/// fully built. Every error path leaves it untouched.
pub fn play_file(path: &Path, trigger: &str, config: &AppConfig) -> Result<Outcome, RunError> {
    let column = match config.command.parse(trigger, config.board.cols)? {
        Command::Move(column) => column,
        Command::Ignore => {
            info!("not a game command, nothing to do");
            return Ok(Outcome::Ignored);
        }
    };

    let document = read_document(path)?;
    match advance(&document, column, config)? {
        Advance::Updated { document, ply } => {
            write_document(path, &document)?;
            info!(path = %path.display(), "board updated");
            Ok(Outcome::Written(ply))
        }
        Advance::ColumnFull { column } => Ok(Outcome::ColumnFull { column }),
    }
}

/// Reset the board in the document file at `path`.
pub fn reset_file(path: &Path, config: &AppConfig) -> Result<(), RunError> {
    let document = read_document(path)?;
    let updated = reset(&document, config)?;
    write_document(path, &updated)?;
    info!(path = %path.display(), "board reset");
    Ok(())
}
