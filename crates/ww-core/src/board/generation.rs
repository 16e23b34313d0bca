//! World generation
//!
//! Two paths build a [`Board`]: procedural placement from a seeded RNG,
//! and parsing of a structured world description. Both route every
//! placement through the same `add_*` primitives, so halo propagation and
//! out-of-bounds tolerance are identical.

use crate::consts::{PIT_DIE, PIT_HITS};
use crate::errors::WorldError;
use crate::rng::WorldRng;

use super::grid::Board;

impl Board {
    /// Procedurally generate a board.
    ///
    /// Every tile except the origin gets a pit with probability 0.2.
    /// Then one non-origin tile is drawn for the wumpus and, independently,
    /// one for the gold; the gold draw may land on a pit or the wumpus.
    /// Tiles are visited row by row, bottom row first, so a fixed seed
    /// yields a fixed board.
    pub fn generate(cols: i32, rows: i32, rng: &mut WorldRng) -> Self {
        let mut board = Board::empty(cols, rows);

        for r in 0..rows {
            for c in 0..cols {
                if (c != 0 || r != 0) && rng.rn2(PIT_DIE) < PIT_HITS {
                    board.add_pit(c, r);
                }
            }
        }

        let (wc, wr) = draw_non_origin(cols, rows, rng);
        board.add_wumpus(wc, wr);

        let (gc, gr) = draw_non_origin(cols, rows, rng);
        board.add_gold(gc, gr);

        board
    }

    /// Build a board from a world description.
    ///
    /// The description is a whitespace-delimited integer stream:
    /// `cols rows`, `wumpusCol wumpusRow`, `goldCol goldRow`, `pitCount`,
    /// then `pitCount` pairs of `col row`. Out-of-bounds coordinates are
    /// dropped silently; a missing or non-integer token aborts with a
    /// [`WorldError`]. The pit list may end early between complete pairs
    /// without error.
    pub fn parse(input: &str) -> Result<Self, WorldError> {
        let mut tokens = input.split_ascii_whitespace();

        let cols = next_int(&mut tokens, "column dimension")?;
        let rows = next_int(&mut tokens, "row dimension")?;
        if cols < 1 || rows < 1 {
            return Err(WorldError::BadDimensions { cols, rows });
        }
        let mut board = Board::empty(cols, rows);

        let wc = next_int(&mut tokens, "wumpus column")?;
        let wr = next_int(&mut tokens, "wumpus row")?;
        board.add_wumpus(wc, wr);

        let gc = next_int(&mut tokens, "gold column")?;
        let gr = next_int(&mut tokens, "gold row")?;
        board.add_gold(gc, gr);

        let pit_count = next_int(&mut tokens, "pit count")?;
        for _ in 0..pit_count.max(0) {
            let c = match tokens.next() {
                Some(token) => parse_int(token, "pit column")?,
                None => break, // truncated pit list is tolerated
            };
            let r = next_int(&mut tokens, "pit row")?;
            board.add_pit(c, r);
        }

        Ok(board)
    }
}

/// Draw a uniformly random tile, retrying until it is not the origin
fn draw_non_origin(cols: i32, rows: i32, rng: &mut WorldRng) -> (i32, i32) {
    loop {
        let c = rng.rn2(cols as u32) as i32;
        let r = rng.rn2(rows as u32) as i32;
        if c != 0 || r != 0 {
            return (c, r);
        }
    }
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<i32, WorldError> {
    let token = tokens.next().ok_or(WorldError::MissingToken { field })?;
    parse_int(token, field)
}

fn parse_int(token: &str, field: &'static str) -> Result<i32, WorldError> {
    token.parse().map_err(|_| WorldError::InvalidToken {
        field,
        token: token.to_string(),
    })
}
