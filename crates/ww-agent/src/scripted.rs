//! Scripted replay policy.

use std::collections::VecDeque;

use ww_core::{Action, Agent, Percepts};

/// Replays a fixed action list, ignoring percepts.
///
/// Once the script runs out it climbs; at the origin that ends the run,
/// elsewhere the score floor eventually does.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new<I: IntoIterator<Item = Action>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Agent for ScriptedAgent {
    fn choose_action(&mut self, _percepts: Percepts) -> Action {
        self.script.pop_front().unwrap_or(Action::Climb)
    }
}
