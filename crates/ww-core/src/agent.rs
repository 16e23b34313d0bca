//! The policy boundary.

use crate::action::Action;
use crate::percept::Percepts;

/// A Wumpus World policy.
///
/// The engine calls this exactly once per turn, synchronously, and shows
/// the policy nothing but the current percepts. Anything that can map
/// percepts to an action qualifies: a scripted replay, a random walker,
/// or a full inference agent.
pub trait Agent {
    fn choose_action(&mut self, percepts: Percepts) -> Action;
}
