//! Interpreting the external trigger (an issue title such as `connect4|3`).

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Trigger text that marks a game move; the column index follows it.
    pub prefix: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        CommandConfig {
            prefix: "connect4|".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a piece into this zero-based column.
    Move(usize),
    /// The trigger is not meant for this game.
    Ignore,
}

impl CommandConfig {
    /// Whether `trigger` is addressed to the game at all.
    pub fn is_trigger(&self, trigger: &str) -> bool {
        trigger.trim().starts_with(self.prefix.as_str())
    }

    /// Parse a trigger against a board with `cols` columns.
    pub fn parse(&self, trigger: &str, cols: usize) -> Result<Command, CommandError> {
        let Some(rest) = trigger.trim().strip_prefix(self.prefix.as_str()) else {
            return Ok(Command::Ignore);
        };

        let invalid = || CommandError::InvalidColumn {
            input: rest.to_string(),
            cols,
        };
        let column: usize = rest.trim().parse().map_err(|_| invalid())?;
        if column >= cols {
            return Err(invalid());
        }
        Ok(Command::Move(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(trigger: &str) -> Result<Command, CommandError> {
        CommandConfig::default().parse(trigger, 7)
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse("connect4|0"), Ok(Command::Move(0)));
        assert_eq!(parse("connect4|6"), Ok(Command::Move(6)));
        assert_eq!(parse("  connect4| 3 \n"), Ok(Command::Move(3)));
    }

    #[test]
    fn test_unrelated_trigger_is_ignored() {
        assert_eq!(parse("Fix typo in README"), Ok(Command::Ignore));
        assert_eq!(parse(""), Ok(Command::Ignore));
        assert_eq!(parse("connect4 3"), Ok(Command::Ignore));
    }

    #[test]
    fn test_non_numeric_column() {
        assert_eq!(
            parse("connect4|abc"),
            Err(CommandError::InvalidColumn {
                input: "abc".to_string(),
                cols: 7
            })
        );
        assert!(parse("connect4|").is_err());
        assert!(parse("connect4|-1").is_err());
    }

    #[test]
    fn test_out_of_range_column() {
        assert!(parse("connect4|7").is_err());
        assert!(parse("connect4|99999999999999999999999").is_err());
    }

    #[test]
    fn test_is_trigger() {
        let config = CommandConfig::default();
        assert!(config.is_trigger(" connect4|abc"));
        assert!(!config.is_trigger("Update README.md"));
    }

    #[test]
    fn test_custom_prefix() {
        let config = CommandConfig {
            prefix: "c4:".to_string(),
        };
        assert_eq!(config.parse("c4:2", 4), Ok(Command::Move(2)));
        assert!(config.parse("c4:4", 4).is_err());
        assert_eq!(config.parse("connect4|2", 4), Ok(Command::Ignore));
    }
}
