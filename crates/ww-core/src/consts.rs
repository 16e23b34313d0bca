//! Game constants for the Wumpus World rules.

/// Default board dimensions for procedurally generated worlds
pub const DEFAULT_COLS: i32 = 4;
pub const DEFAULT_ROWS: i32 = 4;

/// Pit placement draw: a tile gets a pit when `rn2(PIT_DIE) < PIT_HITS`
/// (probability 0.2)
pub const PIT_DIE: u32 = 10;
pub const PIT_HITS: u32 = 2;

/// Flat cost charged for every action
pub const TURN_COST: i32 = 1;

/// Extra cost for firing the arrow
pub const SHOOT_COST: i32 = 10;

/// Penalty for walking into a pit or a live wumpus
pub const DEATH_PENALTY: i32 = 1000;

/// Bonus for climbing out of the cave with the gold
pub const GOLD_BONUS: i32 = 1000;

/// The run terminates once the score drops below this floor
pub const SCORE_FLOOR: i32 = -1000;
