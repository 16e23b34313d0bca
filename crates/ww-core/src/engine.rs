//! Simulation engine
//!
//! [`World`] owns the board, the agent's pose and status, and the running
//! score, and drives the per-turn loop: derive percepts, ask the policy
//! for an action, charge the turn cost, resolve the action, check the
//! terminal conditions.

use serde::{Deserialize, Serialize};

use crate::action::{Action, Direction};
use crate::agent::Agent;
use crate::board::{Board, TileFlags};
use crate::consts::{
    DEATH_PENALTY, DEFAULT_COLS, DEFAULT_ROWS, GOLD_BONUS, SCORE_FLOOR, SHOOT_COST, TURN_COST,
};
use crate::errors::WorldError;
use crate::percept::Percepts;
use crate::rng::WorldRng;

/// Result of resolving one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The run continues
    Continue,
    /// The agent walked into a pit or a live wumpus
    Died,
    /// The agent climbed out at the origin
    Escaped,
}

/// A single Wumpus World run
///
/// Created once from a seed or a description, mutated in place every
/// turn, and discarded when [`World::run`] returns the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    board: Board,

    // agent pose and status
    x: i32,
    y: i32,
    facing: Direction,
    has_arrow: bool,
    gold_looted: bool,

    // transient percept flags, valid only for the turn after the action
    // that set them
    bump: bool,
    scream: bool,

    score: i32,
    last_action: Option<Action>,

    /// Record full world info into the trace every turn
    pub debug: bool,

    /// Per-turn diagnostic trace; not part of the game state
    #[serde(skip)]
    trace: Vec<String>,
}

impl World {
    /// Build a world around an already-constructed board
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            x: 0,
            y: 0,
            facing: Direction::Right,
            has_arrow: true,
            gold_looted: false,
            bump: false,
            scream: false,
            score: 0,
            last_action: None,
            debug: false,
            trace: Vec::new(),
        }
    }

    /// Procedurally generate a world of the given dimensions
    pub fn generate(cols: i32, rows: i32, seed: u64) -> Self {
        let mut rng = WorldRng::new(seed);
        Self::with_board(Board::generate(cols, rows, &mut rng))
    }

    /// Procedurally generate the default 4x4 world
    pub fn new_random(seed: u64) -> Self {
        Self::generate(DEFAULT_COLS, DEFAULT_ROWS, seed)
    }

    /// Build a world from a structured description
    pub fn from_description(input: &str) -> Result<Self, WorldError> {
        Ok(Self::with_board(Board::parse(input)?))
    }

    pub const fn score(&self) -> i32 {
        self.score
    }

    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub const fn facing(&self) -> Direction {
        self.facing
    }

    pub const fn has_arrow(&self) -> bool {
        self.has_arrow
    }

    pub const fn gold_looted(&self) -> bool {
        self.gold_looted
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Sensor signals at the current pose
    ///
    /// Stench, breeze, and glitter come off the current tile; bump and
    /// scream carry over from the previous action only.
    pub fn percepts(&self) -> Percepts {
        let tile = self.board.tile(self.x, self.y);
        Percepts {
            stench: tile.stench(),
            breeze: tile.breeze(),
            glitter: tile.gold(),
            bump: self.bump,
            scream: self.scream,
        }
    }

    /// Drive the turn loop to completion and return the final score.
    ///
    /// The loop re-enters while the score is at or above the floor; the
    /// floor bounds pathological runs (e.g. endless off-origin climbing)
    /// without treating them as errors.
    pub fn run(&mut self, agent: &mut dyn Agent) -> i32 {
        while self.score >= SCORE_FLOOR {
            if self.debug {
                let info = self.render_world_info();
                self.trace.push(info);
            }

            let action = agent.choose_action(self.percepts());
            match self.step(action) {
                TurnResult::Continue => {}
                TurnResult::Died | TurnResult::Escaped => break,
            }
        }
        if self.debug {
            let info = self.render_world_info();
            self.trace.push(info);
        }
        self.score
    }

    /// Resolve a single action.
    ///
    /// Charges the flat turn cost unconditionally, then applies the
    /// action. Ineffective actions (arrowless shot, grab on an empty
    /// tile, climb away from the origin, walk into a wall) are wasted
    /// turns, never errors.
    pub fn step(&mut self, action: Action) -> TurnResult {
        self.last_action = Some(action);
        self.score -= TURN_COST;
        self.bump = false;
        self.scream = false;

        match action {
            Action::TurnLeft => self.facing = self.facing.turn_left(),
            Action::TurnRight => self.facing = self.facing.turn_right(),

            Action::Forward => {
                let (dc, dr) = self.facing.delta();
                let (nc, nr) = (self.x + dc, self.y + dr);
                if self.board.in_bounds(nc, nr) {
                    self.x = nc;
                    self.y = nr;
                    if self.board.tile(nc, nr).is_deadly() {
                        self.score -= DEATH_PENALTY;
                        return TurnResult::Died;
                    }
                } else {
                    self.bump = true;
                }
            }

            Action::Shoot => {
                if self.has_arrow {
                    self.has_arrow = false;
                    self.score -= SHOOT_COST;
                    self.fire_arrow();
                }
                // with no arrow this is a pure cost-1 no-op
            }

            Action::Grab => {
                if self.board.tile(self.x, self.y).gold() {
                    self.board.tile_mut(self.x, self.y).clear(TileFlags::GOLD);
                    self.gold_looted = true;
                }
            }

            Action::Climb => {
                if self.x == 0 && self.y == 0 {
                    if self.gold_looted {
                        self.score += GOLD_BONUS;
                    }
                    return TurnResult::Escaped;
                }
            }
        }

        TurnResult::Continue
    }

    /// Sweep the arrow from the current tile to the grid edge.
    ///
    /// The first wumpus tile on the ray loses its wumpus flag, gains
    /// stench on its own tile, and raises the scream percept. Stench
    /// already propagated to the neighbors stays put.
    fn fire_arrow(&mut self) {
        let (dc, dr) = self.facing.delta();
        let (mut c, mut r) = (self.x, self.y);
        while self.board.in_bounds(c, r) {
            if self.board.tile(c, r).wumpus() {
                let tile = self.board.tile_mut(c, r);
                tile.clear(TileFlags::WUMPUS);
                tile.set(TileFlags::STENCH);
                self.scream = true;
                break;
            }
            c += dc;
            r += dr;
        }
    }

    /// Render the board plus the agent's status lines
    pub fn render_world_info(&self) -> String {
        let mut out = self.board.render(Some((self.x, self.y)));
        out.push_str(&format!("Score: {}\n", self.score));
        out.push_str(&format!("AgentX: {}\n", self.x));
        out.push_str(&format!("AgentY: {}\n", self.y));
        out.push_str(&format!("AgentDir: {}\n", self.facing));
        match self.last_action {
            Some(action) => out.push_str(&format!("Last Action: {action}\n")),
            None => out.push_str("Last Action: None\n"),
        }
        out.push_str(&format!("{}\n", self.percepts()));
        out
    }
}
