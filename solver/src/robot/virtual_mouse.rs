use std::cell::Cell;

use super::traits::{RenderSink, Robot};
use crate::maze::{Direction, Pose, Position, WallMap, parse_map};

/// in-memory mouse that answers sensor queries from a fully known maze
pub struct VirtualMouse {
    walls: WallMap,
    pose: Cell<Pose>,
}

impl VirtualMouse {
    pub fn new(walls: WallMap) -> Self {
        Self {
            walls,
            pose: Cell::new(Pose::start()),
        }
    }

    pub fn from_map(text: &str) -> eyre::Result<Self> {
        Ok(Self::new(parse_map(text)?))
    }

    pub fn pose(&self) -> Pose {
        self.pose.get()
    }

    /// back to the start cell, as after a simulator reset
    pub fn reset(&self) {
        self.pose.set(Pose::start());
    }

    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    fn sense(&self, side: impl Fn(&Pose) -> Direction) -> eyre::Result<bool> {
        let pose = self.pose.get();
        Ok(self.walls.is_blocked(pose.position, side(&pose)))
    }
}

impl Robot for VirtualMouse {
    async fn wall_front(&self) -> eyre::Result<bool> {
        self.sense(|pose| pose.heading)
    }

    async fn wall_left(&self) -> eyre::Result<bool> {
        self.sense(Pose::left)
    }

    async fn wall_right(&self) -> eyre::Result<bool> {
        self.sense(Pose::right)
    }

    async fn move_forward(&self) -> eyre::Result<bool> {
        let mut pose = self.pose.get();
        if self.walls.is_blocked(pose.position, pose.heading) {
            log::trace!(
                "virtual mouse hit the {:?} wall of ({}, {})",
                pose.heading,
                pose.position.x,
                pose.position.y
            );
            return Ok(false);
        }
        pose.advance();
        self.pose.set(pose);
        Ok(true)
    }

    async fn turn_left(&self) -> eyre::Result<()> {
        let mut pose = self.pose.get();
        pose.turn_left();
        self.pose.set(pose);
        Ok(())
    }

    async fn turn_right(&self) -> eyre::Result<()> {
        let mut pose = self.pose.get();
        pose.turn_right();
        self.pose.set(pose);
        Ok(())
    }
}

impl RenderSink for VirtualMouse {
    fn set_wall(&self, _cell: Position, _side: Direction) {}

    fn set_text(&self, _cell: Position, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn senses_relative_to_heading() {
        let mouse = VirtualMouse::new(WallMap::new());

        // start corner: west and south rim
        assert!(mouse.wall_left().await.unwrap());
        assert!(!mouse.wall_front().await.unwrap());
        assert!(!mouse.wall_right().await.unwrap());

        mouse.turn_left().await.unwrap();
        assert!(mouse.wall_front().await.unwrap());
        assert!(mouse.wall_left().await.unwrap());
        assert!(!mouse.wall_right().await.unwrap());
    }

    #[tokio::test]
    async fn crashing_keeps_the_pose() {
        let mouse = VirtualMouse::new(WallMap::new());
        mouse.turn_right().await.unwrap();
        mouse.turn_right().await.unwrap();

        assert!(!mouse.move_forward().await.unwrap());
        assert_eq!(mouse.pose().position, Position::new(0, 0));
        assert_eq!(mouse.pose().heading, Direction::South);
    }

    #[tokio::test]
    async fn moves_through_open_edges() {
        let mut walls = WallMap::new();
        walls.set_blocked(Position::new(0, 1), Direction::North);
        let mouse = VirtualMouse::new(walls);

        assert!(mouse.move_forward().await.unwrap());
        assert!(mouse.wall_front().await.unwrap());
        assert!(!mouse.move_forward().await.unwrap());
        assert_eq!(
            mouse.pose(),
            Pose::new(Position::new(0, 1), Direction::North)
        );
        assert!(!mouse.was_reset().await.unwrap());
    }
}
