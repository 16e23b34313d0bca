//! ww-core: Core simulation engine for the Wumpus World environment
//!
//! This crate contains the authoritative game state and rules with no I/O
//! dependencies: the tile grid, the two world-generation paths (procedural
//! and description-driven), percept derivation, action resolution, and
//! scoring. The decision-making policy lives behind the [`Agent`] trait;
//! reference policies are in the `ww-agent` crate.

pub mod action;
pub mod agent;
pub mod board;
pub mod engine;
pub mod errors;
pub mod percept;

mod consts;
mod rng;

pub use action::{Action, Direction};
pub use agent::Agent;
pub use board::{Board, Tile, TileFlags};
pub use consts::*;
pub use engine::{TurnResult, World};
pub use errors::WorldError;
pub use percept::Percepts;
pub use rng::WorldRng;
