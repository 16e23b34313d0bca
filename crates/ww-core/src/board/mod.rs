//! The game board
//!
//! Contains the tile model, the rectangular grid with its placement
//! primitives and halo propagation, and the two world-generation paths.

mod generation;
mod grid;
mod tile;

pub use grid::Board;
pub use tile::{Tile, TileFlags};
