use super::{direction::Direction, position::Position};

/// where the mouse is and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub position: Position,
    pub heading: Direction,
}

impl Pose {
    pub const fn new(position: Position, heading: Direction) -> Self {
        Self { position, heading }
    }

    /// the mms starting cell: south-west corner, facing north
    pub const fn start() -> Self {
        Self::new(Position::new(0, 0), Direction::North)
    }

    pub fn left(&self) -> Direction {
        self.heading.rotate_left()
    }

    pub fn right(&self) -> Direction {
        self.heading.rotate_right()
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.rotate_left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.rotate_right();
    }

    /// panics when the step would leave the maze
    pub fn advance(&mut self) {
        let Some(next) = self.position.move_in_direction(self.heading) else {
            panic!("cannot advance {:?} from {:?}", self.heading, self.position);
        };
        self.position = next;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::start()
    }
}
