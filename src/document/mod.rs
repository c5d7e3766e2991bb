//! The board as it lives in a document: locating the marked region,
//! rebuilding a board from its table, and rendering the table back.

mod reconstruct;
mod region;
mod render;
mod symbols;

pub use reconstruct::{candidate_row, reconstruct, Reconstruction};
pub use region::{Markers, Region};
pub use render::{ActionsConfig, Renderer};
pub use symbols::CellSymbols;
