use std::fmt::Write;

use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

use super::{CellSymbols, Markers};
use crate::game::{Board, GameStatus, Player, Ply};

/// Settings for the trailing row of per-column "play here" links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    pub enabled: bool,
    pub owner: String,
    pub repo: String,
    pub label: String,
    pub issue_body: String,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        ActionsConfig {
            enabled: true,
            owner: "blackdragoon26".to_string(),
            repo: "blackdragoon26".to_string(),
            label: "\u{2b07}\u{fe0f}".to_string(),
            issue_body: "\u{1f44b} **Click 'Submit new issue' below to play your move!**\n\n\
                         I am a bot powered by GitHub Actions. I will automatically update \
                         the board and close this issue in about 30 seconds."
                .to_string(),
        }
    }
}

/// Serializes a board into the canonical table, markers included.
#[derive(Debug, Clone)]
pub struct Renderer {
    symbols: CellSymbols,
    markers: Markers,
    actions: Option<ActionLinks>,
}

/// Action row settings plus the trigger prefix each link's title carries.
#[derive(Debug, Clone)]
struct ActionLinks {
    config: ActionsConfig,
    title_prefix: String,
}

impl Renderer {
    pub fn new(symbols: CellSymbols, markers: Markers) -> Self {
        Renderer {
            symbols,
            markers,
            actions: None,
        }
    }

    /// Append an action row whose links open an issue titled
    /// `<title_prefix><column>`. Disabled configs are ignored.
    pub fn with_actions(mut self, config: ActionsConfig, title_prefix: &str) -> Self {
        let enabled = config.enabled;
        self.actions = enabled.then(|| ActionLinks {
            config,
            title_prefix: title_prefix.to_string(),
        });
        self
    }

    /// Render the region after `ply`. A winning ply is announced over an
    /// emptied board.
    pub fn render(&self, board: &Board, ply: &Ply) -> String {
        match ply.status {
            GameStatus::Won(winner) => {
                let status = format!(
                    "**GAME OVER! {} WINS! Resetting board...**",
                    self.symbols.player(winner)
                );
                self.render_with_status(&Board::new(board.rows(), board.cols()), &status)
            }
            GameStatus::InProgress(next) => {
                let status = format!(
                    "Last move: {} in col {}. Next turn: {}",
                    self.symbols.player(ply.player),
                    ply.column + 1,
                    self.symbols.player(next)
                );
                self.render_with_status(board, &status)
            }
        }
    }

    /// Render an empty board for a fresh game.
    pub fn render_new_game(&self, rows: usize, cols: usize) -> String {
        let status = format!(
            "New game! Next turn: {}",
            self.symbols.player(Player::Red)
        );
        self.render_with_status(&Board::new(rows, cols), &status)
    }

    fn render_with_status(&self, board: &Board, status: &str) -> String {
        let cols = board.cols();
        let mut out = String::new();
        out.push_str(&self.markers.start);
        out.push('\n');
        out.push_str(status);
        out.push('\n');

        out.push('|');
        for col in 1..=cols {
            let _ = write!(out, " {col} |");
        }
        out.push('\n');
        out.push('|');
        out.push_str(&":---:|".repeat(cols));
        out.push('\n');

        for row in 0..board.rows() {
            let cells: Vec<&str> = board
                .row(row)
                .iter()
                .map(|&cell| self.symbols.cell(cell))
                .collect();
            out.push_str("| ");
            out.push_str(&cells.join(" | "));
            out.push_str(" |\n");
        }

        if let Some(actions) = &self.actions {
            out.push('|');
            for col in 0..cols {
                let _ = write!(out, " [{}]({}) |", actions.config.label, actions.link(col));
            }
            out.push('\n');
        }

        out.push_str(&self.markers.end);
        out
    }
}

impl ActionLinks {
    fn link(&self, col: usize) -> String {
        let title: String =
            byte_serialize(format!("{}{}", self.title_prefix, col).as_bytes()).collect();
        let body: String = byte_serialize(self.config.issue_body.as_bytes()).collect();
        format!(
            "https://github.com/{}/{}/issues/new?title={}&body={}",
            self.config.owner, self.config.repo, title, body
        )
    }
}
