//! Core Connect Four game logic: board representation, player types, turn
//! resolution and win detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{resolve_turn, GameState, GameStatus, Ply};
