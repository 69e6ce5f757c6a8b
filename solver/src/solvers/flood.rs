use std::time::{Duration, Instant};

use super::controller::Controller;
use crate::{
    algorithms::{Action, Observation},
    robot::{RenderSink, Robot},
};

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub steps: usize,
    pub forward_moves: usize,
    pub turns: usize,
    /// step count at which the mouse first stood in the goal block
    pub reached_goal_at: Option<usize>,
    pub total_time: Duration,
}

/// drives a [`Controller`] against a robot, one sense-flood-decide cycle per step
pub struct FloodSolver {
    delay: Duration,
    max_steps: Option<usize>,
    stop_at_goal: bool,
}

impl FloodSolver {
    pub fn new(delay_ms: u64, max_steps: Option<usize>, stop_at_goal: bool) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            max_steps,
            stop_at_goal,
        }
    }

    pub async fn solve<R: Robot + RenderSink>(&self, robot: &R) -> eyre::Result<RunResult> {
        let start = Instant::now();
        let mut controller = Controller::new();
        let mut result = RunResult::default();

        log::info!("starting at (0, 0) facing north");

        loop {
            if robot.was_reset().await? {
                log::info!(
                    "simulator reset after {} steps, forgetting the maze",
                    result.steps
                );
                controller = Controller::new();
                result = RunResult::default();
                robot.ack_reset().await?;
            }

            if let Some(limit) = self.max_steps
                && result.steps >= limit
            {
                if result.reached_goal_at.is_some() {
                    log::info!("step limit of {} reached", limit);
                    break;
                }
                eyre::bail!("goal not reached within {} steps", limit);
            }

            let observation = Observation::new(
                robot.wall_left().await?,
                robot.wall_front().await?,
                robot.wall_right().await?,
            );

            let action = controller.step(observation, robot);
            let pose = controller.pose();

            match action {
                Action::Forward => {
                    if !robot.move_forward().await? {
                        eyre::bail!(
                            "crashed at step {} moving {:?} into ({}, {})",
                            result.steps + 1,
                            pose.heading,
                            pose.position.x,
                            pose.position.y
                        );
                    }
                    result.forward_moves += 1;
                }
                Action::Left => {
                    robot.turn_left().await?;
                    result.turns += 1;
                }
                Action::Right => {
                    robot.turn_right().await?;
                    result.turns += 1;
                }
            }

            result.steps += 1;

            if result.reached_goal_at.is_none() && pose.position.is_goal() {
                log::info!(
                    "reached goal ({}, {}) after {} steps",
                    pose.position.x,
                    pose.position.y,
                    result.steps
                );
                result.reached_goal_at = Some(result.steps);

                if self.stop_at_goal {
                    break;
                }
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        result.total_time = start.elapsed();
        Ok(result)
    }
}
