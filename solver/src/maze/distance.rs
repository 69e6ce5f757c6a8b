use super::position::{MAZE_SIZE, Position};

/// hop counts to the goal region; None where the goal is unreachable under current knowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    cells: [[Option<u16>; MAZE_SIZE]; MAZE_SIZE],
}

impl DistanceField {
    pub fn unknown() -> Self {
        Self {
            cells: [[None; MAZE_SIZE]; MAZE_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Option<u16> {
        self.cells[pos.x][pos.y]
    }

    pub fn set(&mut self, pos: Position, distance: u16) {
        self.cells[pos.x][pos.y] = Some(distance);
    }

    pub fn is_settled(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// the text shown on a cell
    pub fn label(&self, pos: Position) -> String {
        match self.get(pos) {
            Some(distance) => distance.to_string(),
            None => "?".to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<u16>)> + '_ {
        Position::all().map(|pos| (pos, self.get(pos)))
    }
}

impl Default for DistanceField {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let mut field = DistanceField::unknown();
        let pos = Position::new(2, 3);
        assert_eq!(field.label(pos), "?");
        assert!(!field.is_settled(pos));

        field.set(pos, 12);
        assert_eq!(field.get(pos), Some(12));
        assert_eq!(field.label(pos), "12");
        assert_eq!(field.iter().filter(|(_, d)| d.is_some()).count(), 1);
    }
}
