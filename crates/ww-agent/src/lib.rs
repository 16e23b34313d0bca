//! Reference policies for the Wumpus World engine
//!
//! - [`RandomAgent`]: grabs when it sees glitter, otherwise acts at
//!   random. A stochastic baseline and fuzzing driver.
//! - [`ScriptedAgent`]: replays a fixed action list. The deterministic
//!   driver for reproducibility and scenario tests.

mod random;
mod scripted;

pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
