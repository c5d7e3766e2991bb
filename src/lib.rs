//! # README Connect Four
//!
//! A two-player Connect Four game whose whole state is a markdown table inside
//! a document. Each run reads the board back out of the document, applies one
//! move, checks for a win and writes the table back.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, turn resolution, win detection
//! - [`document`]: Locating, reconstructing and rendering the board region
//! - [`command`]: Parsing the external move trigger
//! - [`turn`]: The one-move pipeline over a document
//! - [`store`]: Whole-file document reads and atomic writes
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod game;
pub mod store;
pub mod turn;

#[cfg(test)]
mod arbitrary;
