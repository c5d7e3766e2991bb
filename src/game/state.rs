use tracing::debug;

use super::{Board, Cell, Player};
use crate::error::MoveError;

/// Game status, always derived from the board and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Won(Player),
}

/// Record of a single applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub status: GameStatus,
}

impl Ply {
    pub fn is_win(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }
}

/// Whose turn it is, from the piece counts alone.
///
/// Red opens and every move adds exactly one piece, so Red is due whenever
/// the counts are level.
pub fn resolve_turn(board: &Board) -> Player {
    let red = board.count(Cell::Red);
    let yellow = board.count(Cell::Yellow);
    if red > yellow {
        Player::Yellow
    } else {
        Player::Red
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Wrap a reconstructed board, deriving the player to move.
    pub fn from_board(board: Board) -> Self {
        let current_player = resolve_turn(&board);
        GameState {
            board,
            current_player,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status before any move is applied.
    pub fn status(&self) -> GameStatus {
        let previous = self.current_player.other();
        if self.board.has_four(previous) {
            GameStatus::Won(previous)
        } else {
            GameStatus::InProgress(self.current_player)
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error the board is unchanged.
    pub fn play(&mut self, column: usize) -> Result<Ply, MoveError> {
        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        debug!(player = player.name(), column, row, "piece dropped");

        let status = if self.board.has_four(player) {
            GameStatus::Won(player)
        } else {
            GameStatus::InProgress(player.other())
        };
        self.current_player = player.other();

        Ok(Ply {
            player,
            column,
            row,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::PlayedBoard;
    use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};
    use quickcheck::quickcheck;

    quickcheck! {
        fn turn_follows_piece_counts(played: PlayedBoard) -> bool {
            let red = played.board.count(Cell::Red);
            let yellow = played.board.count(Cell::Yellow);
            let expected = if red == yellow { Player::Red } else { Player::Yellow };
            red + yellow == played.plies && resolve_turn(&played.board) == expected
        }
    }

    #[test]
    fn test_empty_board_is_red_to_move() {
        let state = GameState::from_board(Board::default());
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.status(), GameStatus::InProgress(Player::Red));
    }

    #[test]
    fn test_play_on_empty_board() {
        let mut state = GameState::from_board(Board::default());
        let ply = state.play(3).unwrap();

        assert_eq!(ply.player, Player::Red);
        assert_eq!(ply.row, DEFAULT_ROWS - 1);
        assert_eq!(ply.status, GameStatus::InProgress(Player::Yellow));
        assert_eq!(state.board().get(DEFAULT_ROWS - 1, 3), Cell::Red);
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = GameState::from_board(Board::default());
        state.play(0).unwrap();
        let ply = state.play(0).unwrap();
        assert_eq!(ply.player, Player::Yellow);
        assert_eq!(resolve_turn(state.board()), Player::Red);
    }

    #[test]
    fn test_full_column_leaves_state_alone() {
        let mut board = Board::default();
        for i in 0..DEFAULT_ROWS {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(3, cell).unwrap();
        }
        let mut state = GameState::from_board(board);
        let before = state.clone();

        assert_eq!(state.play(3), Err(MoveError::ColumnFull { column: 3 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_invalid_column_rejected() {
        let mut state = GameState::from_board(Board::default());
        assert_eq!(
            state.play(DEFAULT_COLS),
            Err(MoveError::InvalidColumn {
                column: DEFAULT_COLS,
                cols: DEFAULT_COLS
            })
        );
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_vertical_win_detected() {
        let mut board = Board::default();
        for _ in 0..3 {
            board.drop_piece(0, Cell::Red).unwrap();
            board.drop_piece(2, Cell::Yellow).unwrap();
        }
        let mut state = GameState::from_board(board);
        assert_eq!(state.current_player(), Player::Red);

        let ply = state.play(0).unwrap();
        assert!(ply.is_win());
        assert_eq!(ply.status, GameStatus::Won(Player::Red));
        assert_eq!(state.status(), GameStatus::Won(Player::Red));
    }
}
