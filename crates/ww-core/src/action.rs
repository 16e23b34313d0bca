//! Actuators and facing directions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The agent's actuators
///
/// Every turn the agent picks exactly one of these. There is no "pass":
/// even a wasted action costs a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Action {
    TurnLeft,
    TurnRight,
    Forward,
    Shoot,
    Grab,
    Climb,
}

/// Facing direction, cyclic over the four cardinals
///
/// Rows grow upward: `Up` increases the row coordinate, `Down` decreases
/// it. Columns grow rightward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    /// Get the delta (dc, dr) for one step in this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
        }
    }

    /// Rotate one step counterclockwise in facing order
    pub const fn turn_left(&self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
            Direction::Up => Direction::Left,
        }
    }

    /// Rotate one step clockwise in facing order
    pub const fn turn_right(&self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_turns_are_cyclic() {
        for dir in Direction::iter() {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(
                dir.turn_right().turn_right().turn_right().turn_right(),
                dir
            );
        }
    }

    #[test]
    fn test_turn_order_matches_facing_codes() {
        // 0 right, 1 down, 2 left, 3 up; turning right increments mod 4
        assert_eq!(Direction::Right.turn_right(), Direction::Down);
        assert_eq!(Direction::Down.turn_right(), Direction::Left);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::iter() {
            let (dc, dr) = dir.delta();
            assert_eq!(dc.abs() + dr.abs(), 1);
        }
    }
}
