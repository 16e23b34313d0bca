//! Rectangular tile grid with placement primitives.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileFlags};

/// The game board: a `cols x rows` grid of tiles
///
/// Coordinates are `(col, row)` with the origin `(0,0)` at the bottom
/// left. The origin is the agent's start tile and the only exit, so
/// generation never places a hazard or gold there.
///
/// All placement goes through [`Board::in_bounds`]; out-of-bounds
/// requests are silently dropped. This keeps parsing of external world
/// descriptions permissive, matching the engine's "invalid input is
/// ignored, not fatal" stance for anything that is structurally sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cols: i32,
    rows: i32,
    // column-major: tiles[c][r]
    tiles: Vec<Vec<Tile>>,
}

impl Board {
    /// Create an empty board
    pub fn empty(cols: i32, rows: i32) -> Self {
        assert!(cols >= 1 && rows >= 1, "board dimensions must be positive");
        Self {
            cols,
            rows,
            tiles: vec![vec![Tile::default(); rows as usize]; cols as usize],
        }
    }

    pub const fn cols(&self) -> i32 {
        self.cols
    }

    pub const fn rows(&self) -> i32 {
        self.rows
    }

    pub const fn in_bounds(&self, c: i32, r: i32) -> bool {
        c >= 0 && r >= 0 && c < self.cols && r < self.rows
    }

    /// Tile at `(c, r)`; panics if out of bounds
    pub fn tile(&self, c: i32, r: i32) -> &Tile {
        &self.tiles[c as usize][r as usize]
    }

    pub(crate) fn tile_mut(&mut self, c: i32, r: i32) -> &mut Tile {
        &mut self.tiles[c as usize][r as usize]
    }

    /// Place a pit and set breeze on its orthogonal neighbors
    pub fn add_pit(&mut self, c: i32, r: i32) {
        if self.in_bounds(c, r) {
            self.tile_mut(c, r).set(TileFlags::PIT);
            self.add_breeze(c + 1, r);
            self.add_breeze(c - 1, r);
            self.add_breeze(c, r + 1);
            self.add_breeze(c, r - 1);
        }
    }

    /// Place the wumpus and set stench on its orthogonal neighbors
    pub fn add_wumpus(&mut self, c: i32, r: i32) {
        if self.in_bounds(c, r) {
            self.tile_mut(c, r).set(TileFlags::WUMPUS);
            self.add_stench(c + 1, r);
            self.add_stench(c - 1, r);
            self.add_stench(c, r + 1);
            self.add_stench(c, r - 1);
        }
    }

    /// Place the gold; no halo
    pub fn add_gold(&mut self, c: i32, r: i32) {
        if self.in_bounds(c, r) {
            self.tile_mut(c, r).set(TileFlags::GOLD);
        }
    }

    fn add_breeze(&mut self, c: i32, r: i32) {
        if self.in_bounds(c, r) {
            self.tile_mut(c, r).set(TileFlags::BREEZE);
        }
    }

    fn add_stench(&mut self, c: i32, r: i32) {
        if self.in_bounds(c, r) {
            self.tile_mut(c, r).set(TileFlags::STENCH);
        }
    }

    /// Render the board, top row first, with the agent marked `@`
    ///
    /// Each tile shows its feature letters followed by `.`, padded to
    /// eight columns.
    pub fn render(&self, agent_pos: Option<(i32, i32)>) -> String {
        let mut out = String::new();
        for r in (0..self.rows).rev() {
            for c in 0..self.cols {
                let mut cell = self.tile(c, r).glyphs();
                if agent_pos == Some((c, r)) {
                    cell.push('@');
                }
                cell.push('.');
                out.push_str(&format!("{cell:>8}"));
            }
            out.push_str("\n\n");
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
