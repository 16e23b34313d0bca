//! Tile model

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-tile features
    ///
    /// A tile holds at most one of PIT/WUMPUS as a hazard, but may carry
    /// any combination of the sensory flags. BREEZE and STENCH are
    /// monotone: once propagated from a neighboring hazard they are never
    /// retracted, even if the hazard is later removed.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TileFlags: u8 {
        const PIT    = 0b00001;
        const WUMPUS = 0b00010;
        const GOLD   = 0b00100;
        const BREEZE = 0b01000;
        const STENCH = 0b10000;
    }
}

/// A single board tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    flags: TileFlags,
}

impl Tile {
    pub const fn pit(&self) -> bool {
        self.flags.contains(TileFlags::PIT)
    }

    pub const fn wumpus(&self) -> bool {
        self.flags.contains(TileFlags::WUMPUS)
    }

    pub const fn gold(&self) -> bool {
        self.flags.contains(TileFlags::GOLD)
    }

    pub const fn breeze(&self) -> bool {
        self.flags.contains(TileFlags::BREEZE)
    }

    pub const fn stench(&self) -> bool {
        self.flags.contains(TileFlags::STENCH)
    }

    /// Check if entering this tile kills the agent
    pub const fn is_deadly(&self) -> bool {
        self.flags.intersects(TileFlags::PIT.union(TileFlags::WUMPUS))
    }

    pub fn set(&mut self, flag: TileFlags) {
        self.flags.insert(flag);
    }

    pub fn clear(&mut self, flag: TileFlags) {
        self.flags.remove(flag);
    }

    pub const fn flags(&self) -> TileFlags {
        self.flags
    }

    /// Feature letters for the board renderer, in P/W/G/B/S order
    pub fn glyphs(&self) -> String {
        let mut s = String::new();
        if self.pit() {
            s.push('P');
        }
        if self.wumpus() {
            s.push('W');
        }
        if self.gold() {
            s.push('G');
        }
        if self.breeze() {
            s.push('B');
        }
        if self.stench() {
            s.push('S');
        }
        s
    }
}
