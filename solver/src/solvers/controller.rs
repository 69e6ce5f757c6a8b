use crate::{
    algorithms::{Action, Observation, apply_observation, decide, publish, recompute},
    maze::{DistanceField, Pose, WallMap},
    robot::RenderSink,
};

/// all grid state of one run: known walls, pose and the latest distance field
#[derive(Debug, Clone)]
pub struct Controller {
    walls: WallMap,
    pose: Pose,
    field: DistanceField,
}

impl Controller {
    /// no distances until the first step floods the map
    pub fn new() -> Self {
        Self {
            walls: WallMap::new(),
            pose: Pose::start(),
            field: DistanceField::unknown(),
        }
    }

    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    /// one full cycle: record walls, flood, render, pick the next action
    pub fn step<S: RenderSink + ?Sized>(&mut self, observation: Observation, sink: &S) -> Action {
        let learned = apply_observation(&mut self.walls, &self.pose, observation);
        if learned > 0 {
            log::trace!(
                "{} new walls at ({}, {}), {} known",
                learned,
                self.pose.position.x,
                self.pose.position.y,
                self.walls.blocked_count()
            );
        }

        self.field = recompute(&self.walls);
        publish(&self.field, &self.walls, sink);

        decide(&mut self.pose, &self.field, &self.walls)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
