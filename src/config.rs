use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::command::CommandConfig;
use crate::document::{ActionsConfig, CellSymbols, Markers, Renderer};
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::store::DocumentConfig;

/// Board dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub symbols: CellSymbols,
    pub markers: Markers,
    pub document: DocumentConfig,
    pub command: CommandConfig,
    pub actions: ActionsConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Read only the `[command]` section of a config file. Anything that keeps
    /// the full config from loading is skipped, and a missing or unparsable
    /// file gives the default prefix.
    pub fn command_or_default(path: &Path) -> CommandConfig {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct CommandSection {
            command: CommandConfig,
        }

        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str::<CommandSection>(&content).ok())
            .map(|section| section.command)
            .unwrap_or_default()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }

        let symbols = [
            ("symbols.empty", &self.symbols.empty),
            ("symbols.red", &self.symbols.red),
            ("symbols.yellow", &self.symbols.yellow),
        ];
        for (name, symbol) in symbols {
            if symbol.is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
            // Rows are tokenized on whitespace with `|` treated as whitespace.
            if symbol.chars().any(|c| c.is_whitespace() || c == '|') {
                return Err(ConfigError::Validation(format!(
                    "{name} must not contain whitespace or '|'"
                )));
            }
            // Header cells are column numbers and separator cells are `:---:`.
            if symbol.chars().all(|c| c.is_ascii_digit())
                || symbol.chars().all(|c| c == ':' || c == '-')
            {
                return Err(ConfigError::Validation(format!(
                    "{name} must not look like a header or separator cell"
                )));
            }
        }
        if self.symbols.empty == self.symbols.red
            || self.symbols.empty == self.symbols.yellow
            || self.symbols.red == self.symbols.yellow
        {
            return Err(ConfigError::Validation(
                "symbols.empty, symbols.red and symbols.yellow must differ".into(),
            ));
        }

        // An empty end marker always matches right after the start marker.
        if self.markers.start.is_empty() != self.markers.end.is_empty() {
            return Err(ConfigError::Validation(
                "markers.start and markers.end must both be set or both be empty".into(),
            ));
        }
        if !self.markers.start.is_empty() && self.markers.start == self.markers.end {
            return Err(ConfigError::Validation(
                "markers.start and markers.end must differ".into(),
            ));
        }

        if self.command.prefix.is_empty() {
            return Err(ConfigError::Validation(
                "command.prefix must not be empty".into(),
            ));
        }

        if self.actions.enabled {
            if self.actions.owner.is_empty() {
                return Err(ConfigError::Validation(
                    "actions.owner must not be empty when actions are enabled".into(),
                ));
            }
            if self.actions.repo.is_empty() {
                return Err(ConfigError::Validation(
                    "actions.repo must not be empty when actions are enabled".into(),
                ));
            }
        }

        Ok(())
    }

    /// Build the table renderer these settings describe.
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.symbols.clone(), self.markers.clone())
            .with_actions(self.actions.clone(), &self.command.prefix)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
