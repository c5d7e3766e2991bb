use serde::{Deserialize, Serialize};

use crate::game::{Cell, Player};

/// Text tokens used for each cell state in the serialized table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSymbols {
    pub empty: String,
    pub red: String,
    pub yellow: String,
}

impl Default for CellSymbols {
    fn default() -> Self {
        CellSymbols {
            empty: "\u{26aa}".to_string(),
            red: "\u{1f534}".to_string(),
            yellow: "\u{1f7e1}".to_string(),
        }
    }
}

impl CellSymbols {
    /// Map a token back to a cell. Anything else is not board data.
    pub fn parse(&self, token: &str) -> Option<Cell> {
        if token == self.empty {
            Some(Cell::Empty)
        } else if token == self.red {
            Some(Cell::Red)
        } else if token == self.yellow {
            Some(Cell::Yellow)
        } else {
            None
        }
    }

    pub fn cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Red => &self.red,
            Cell::Yellow => &self.yellow,
        }
    }

    pub fn player(&self, player: Player) -> &str {
        self.cell(player.to_cell())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        let symbols = CellSymbols::default();
        assert_eq!(symbols.parse("⚪"), Some(Cell::Empty));
        assert_eq!(symbols.parse("🔴"), Some(Cell::Red));
        assert_eq!(symbols.parse("🟡"), Some(Cell::Yellow));
    }

    #[test]
    fn test_parse_rejects_other_tokens() {
        let symbols = CellSymbols::default();
        assert_eq!(symbols.parse("1"), None);
        assert_eq!(symbols.parse(":---:"), None);
        assert_eq!(symbols.parse("🟢"), None);
        assert_eq!(symbols.parse(""), None);
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = CellSymbols {
            empty: ".".to_string(),
            red: "R".to_string(),
            yellow: "Y".to_string(),
        };
        assert_eq!(symbols.parse("R"), Some(Cell::Red));
        assert_eq!(symbols.player(Player::Yellow), "Y");
        assert_eq!(symbols.cell(Cell::Empty), ".");
    }
}
