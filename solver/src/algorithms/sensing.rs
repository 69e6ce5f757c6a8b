use crate::maze::{Pose, WallMap};

/// wall readings relative to the current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    pub left: bool,
    pub front: bool,
    pub right: bool,
}

impl Observation {
    pub const fn new(left: bool, front: bool, right: bool) -> Self {
        Self { left, front, right }
    }
}

/// records observed walls around the current cell, returns how many were new.
/// walls are never removed.
pub fn apply_observation(walls: &mut WallMap, pose: &Pose, observation: Observation) -> usize {
    let readings = [
        (observation.left, pose.left()),
        (observation.front, pose.heading),
        (observation.right, pose.right()),
    ];

    let mut learned = 0;
    for (blocked, side) in readings {
        if blocked && walls.set_blocked(pose.position, side) {
            learned += 1;
        }
    }
    learned
}
