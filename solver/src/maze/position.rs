use std::ops::Add;

use super::direction::Direction;

/// side length of the maze in cells
pub const MAZE_SIZE: usize = 16;

/// total number of cells, also the flood-fill queue bound
pub const CELL_COUNT: usize = MAZE_SIZE * MAZE_SIZE;

/// the 2x2 block at the center of the maze
pub const GOAL_CELLS: [Position; 4] = [
    Position::new(7, 7),
    Position::new(7, 8),
    Position::new(8, 7),
    Position::new(8, 8),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_goal(self) -> bool {
        GOAL_CELLS.contains(&self)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// neighbouring cell, or None when the step would leave the maze
    pub fn move_in_direction(self, direction: Direction) -> Option<Self> {
        self + direction.offset()
    }

    pub fn neighbors(self) -> impl Iterator<Item = (Self, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.move_in_direction(dir).map(|pos| (pos, dir)))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        let column = |x| (0..MAZE_SIZE).map(move |y| Self::new(x, y));
        (0..MAZE_SIZE).flat_map(column)
    }
}

impl Add<(isize, isize)> for Position {
    type Output = Option<Self>;

    fn add(self, (dx, dy): (isize, isize)) -> Self::Output {
        let new_x = self.x as isize + dx;
        let new_y = self.y as isize + dy;

        let range = 0..MAZE_SIZE as isize;
        if range.contains(&new_x) && range.contains(&new_y) {
            Some(Self::new(new_x as usize, new_y as usize))
        } else {
            None
        }
    }
}
