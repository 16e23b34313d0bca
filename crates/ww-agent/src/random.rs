//! Random baseline policy.

use strum::IntoEnumIterator;

use ww_core::{Action, Agent, Percepts, WorldRng};

/// Picks a uniformly random action every turn, with one exception: on
/// glitter it always grabs.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: WorldRng,
    actions: Vec<Action>,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: WorldRng::new(seed),
            actions: Action::iter().collect(),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: WorldRng::from_entropy(),
            actions: Action::iter().collect(),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, percepts: Percepts) -> Action {
        if percepts.glitter {
            return Action::Grab;
        }
        *self
            .rng
            .choose(&self.actions)
            .unwrap_or(&Action::Climb)
    }
}
