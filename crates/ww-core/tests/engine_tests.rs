//! End-to-end runs through the public engine API.

use ww_core::{Action, Agent, Percepts, TurnResult, World};

/// Minimal scripted driver; replays the list, then climbs.
struct Script(Vec<Action>);

impl Script {
    fn new(actions: &[Action]) -> Self {
        Script(actions.to_vec())
    }
}

impl Agent for Script {
    fn choose_action(&mut self, _percepts: Percepts) -> Action {
        if self.0.is_empty() {
            Action::Climb
        } else {
            self.0.remove(0)
        }
    }
}

/// 4x4, wumpus at (2,2), gold at (1,1), no pits.
const QUIET_WORLD: &str = "4 4  2 2  1 1  0";

#[test]
fn grab_climb_at_empty_origin_scores_minus_two() {
    let mut world = World::from_description(QUIET_WORLD).unwrap();
    let score = world.run(&mut Script::new(&[Action::Grab, Action::Climb]));
    assert_eq!(score, -2);
    assert!(!world.gold_looted());
}

#[test]
fn fetch_gold_and_escape() {
    // (0,0) -> (1,0) -> (1,1): forward, turn left (face up), forward,
    // grab, then walk back and climb out.
    let mut world = World::from_description(QUIET_WORLD).unwrap();
    let script = [
        Action::Forward,
        Action::TurnLeft,
        Action::Forward,
        Action::Grab,
        Action::TurnLeft,
        Action::Forward,
        Action::TurnLeft,
        Action::Forward,
        Action::Climb,
    ];
    let score = world.run(&mut Script::new(&script));
    assert!(world.gold_looted());
    assert_eq!(score, -(script.len() as i32) + 1000);
}

#[test]
fn walking_into_the_wumpus_ends_the_run() {
    // wumpus straight ahead at (2,0)
    let mut world = World::from_description("4 4  2 0  3 3  0").unwrap();
    let score = world.run(&mut Script::new(&[Action::Forward, Action::Forward]));
    // two turn costs plus the death penalty
    assert_eq!(score, -1002);
    assert_eq!(world.position(), (2, 0));
}

#[test]
fn shooting_the_wumpus_clears_the_path() {
    let mut world = World::from_description("4 4  2 0  3 3  0").unwrap();
    world.step(Action::Shoot);
    assert!(world.percepts().scream);
    // the lane is now safe
    assert_eq!(world.step(Action::Forward), TurnResult::Continue);
    assert_eq!(world.step(Action::Forward), TurnResult::Continue);
    assert_eq!(world.position(), (2, 0));
}

#[test]
fn shoot_kill_preserves_neighbor_stench() {
    let mut world = World::from_description("4 4  2 0  3 3  0").unwrap();
    assert!(world.board().tile(1, 0).stench());
    world.step(Action::Shoot);
    // neighbors keep their stale stench, the dead wumpus's tile gains one
    assert!(world.board().tile(1, 0).stench());
    assert!(world.board().tile(3, 0).stench());
    assert!(world.board().tile(2, 0).stench());
    assert!(!world.board().tile(2, 0).wumpus());
}

#[test]
fn endless_off_origin_climbing_hits_the_score_floor() {
    let mut world = World::from_description(QUIET_WORLD).unwrap();
    // move off the origin, then climb forever
    let score = world.run(&mut Script::new(&[Action::Forward]));
    assert!(score <= -1000);
    assert_eq!(world.position(), (1, 0));
}

#[test]
fn identical_scripts_produce_identical_trajectories() {
    let script = [
        Action::Forward,
        Action::Shoot,
        Action::TurnLeft,
        Action::Forward,
        Action::Grab,
    ];
    let mut first = Vec::new();
    let mut second = Vec::new();
    for trajectory in [&mut first, &mut second] {
        let mut world = World::from_description(QUIET_WORLD).unwrap();
        for action in script {
            world.step(action);
            trajectory.push((world.score(), world.position(), world.percepts()));
        }
    }
    assert_eq!(first, second);
}

#[test]
fn same_seed_same_random_world_run() {
    let script = [
        Action::Forward,
        Action::Forward,
        Action::TurnLeft,
        Action::Forward,
    ];
    let mut a = World::new_random(1234);
    let mut b = World::new_random(1234);
    let score_a = a.run(&mut Script::new(&script));
    let score_b = b.run(&mut Script::new(&script));
    assert_eq!(score_a, score_b);
    assert_eq!(a.position(), b.position());
}

#[test]
fn debug_trace_records_every_turn() {
    let mut world = World::from_description(QUIET_WORLD).unwrap();
    world.debug = true;
    world.run(&mut Script::new(&[Action::TurnLeft, Action::Climb]));
    // one entry per turn plus the final state
    assert_eq!(world.trace().len(), 3);
    assert!(world.trace()[0].contains("Last Action: None"));
    assert!(world.trace().last().unwrap().contains("Last Action: Climb"));
}

#[test]
fn malformed_description_fails_construction() {
    assert!(World::from_description("4 4 2").is_err());
    assert!(World::from_description("").is_err());
    assert!(World::from_description("4 four 2 2 1 1 0").is_err());
}

#[test]
fn world_state_survives_serde() {
    let mut world = World::from_description(QUIET_WORLD).unwrap();
    world.step(Action::Forward);
    world.step(Action::Shoot);

    let json = serde_json::to_string(&world).unwrap();
    let restored: World = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.score(), world.score());
    assert_eq!(restored.position(), world.position());
    assert_eq!(restored.has_arrow(), world.has_arrow());
    assert_eq!(restored.percepts(), world.percepts());
    assert_eq!(restored.board(), world.board());
}
