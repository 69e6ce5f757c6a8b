/// absolute compass direction, x grows east and y grows north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// flood-fill expansion order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    pub fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// side token used by the simulator's `setWall`
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'n',
            Self::East => 'e',
            Self::South => 's',
            Self::West => 'w',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_cycle_through_all_headings() {
        let mut heading = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(heading);
            heading = heading.rotate_right();
        }
        assert_eq!(heading, Direction::North);
        assert_eq!(seen, Direction::ALL);
    }

    #[test]
    fn left_undoes_right() {
        for dir in Direction::ALL {
            assert_eq!(dir.rotate_right().rotate_left(), dir);
        }
    }
}
