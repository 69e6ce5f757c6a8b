use std::fmt;

use crate::maze::{Direction, DistanceField, Pose, WallMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// advance one cell, heading unchanged
    Forward,
    /// quarter turn counterclockwise in place
    Left,
    /// quarter turn clockwise in place
    Right,
}

/// how a neighbouring cell looks from the current one; variants order best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Candidate {
    Reachable(u16),
    /// open edge, but the neighbour has no known route to the goal
    Unknown,
    /// wall or maze rim
    Blocked,
}

impl Candidate {
    pub fn toward(pose: &Pose, side: Direction, field: &DistanceField, walls: &WallMap) -> Self {
        if walls.is_blocked(pose.position, side) {
            return Self::Blocked;
        }

        match pose.position.move_in_direction(side) {
            None => Self::Blocked,
            Some(neighbor) => field.get(neighbor).map_or(Self::Unknown, Self::Reachable),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable(distance) => write!(f, "{distance}"),
            Self::Unknown => f.write_str("?"),
            Self::Blocked => f.write_str("inf"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    pub left: Candidate,
    pub front: Candidate,
    pub right: Candidate,
}

impl Candidates {
    pub fn survey(pose: &Pose, field: &DistanceField, walls: &WallMap) -> Self {
        Self {
            left: Candidate::toward(pose, pose.left(), field, walls),
            front: Candidate::toward(pose, pose.heading, field, walls),
            right: Candidate::toward(pose, pose.right(), field, walls),
        }
    }

    /// forward wins any tie, left wins a tie against right
    pub fn choose(&self) -> Action {
        let Self { left, front, right } = *self;

        if [left, front, right] == [Candidate::Blocked; 3] {
            Action::Right
        } else if front <= left && front <= right {
            Action::Forward
        } else if left <= right && left < front {
            Action::Left
        } else {
            Action::Right
        }
    }
}

/// picks the next action and applies it to the pose
pub fn decide(pose: &mut Pose, field: &DistanceField, walls: &WallMap) -> Action {
    let candidates = Candidates::survey(pose, field, walls);
    let action = candidates.choose();

    log::debug!(
        "({}, {}) {:?}: left {} front {} right {} -> {:?}",
        pose.position.x,
        pose.position.y,
        pose.heading,
        candidates.left,
        candidates.front,
        candidates.right,
        action
    );

    match action {
        Action::Forward => pose.advance(),
        Action::Left => pose.turn_left(),
        Action::Right => pose.turn_right(),
    }

    action
}
