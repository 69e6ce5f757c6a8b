use super::{
    direction::Direction,
    position::{MAZE_SIZE, Position},
};

/// one stored cell boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// between cell rows `row - 1` and `row`, in column `col`
    Horizontal { row: usize, col: usize },
    /// between cell columns `col - 1` and `col`, in row `row`
    Vertical { row: usize, col: usize },
}

impl Edge {
    /// the single stored edge on `side` of `cell`
    pub fn of(cell: Position, side: Direction) -> Self {
        assert!(
            cell.x < MAZE_SIZE && cell.y < MAZE_SIZE,
            "cell ({}, {}) is outside the maze",
            cell.x,
            cell.y
        );

        match side {
            Direction::North => Self::Horizontal {
                row: cell.y + 1,
                col: cell.x,
            },
            Direction::South => Self::Horizontal {
                row: cell.y,
                col: cell.x,
            },
            Direction::East => Self::Vertical {
                row: cell.y,
                col: cell.x + 1,
            },
            Direction::West => Self::Vertical {
                row: cell.y,
                col: cell.x,
            },
        }
    }

    /// cell and side to report to a renderer; rim edges are seen from the inside cell
    pub fn render_side(self) -> (Position, Direction) {
        match self {
            Self::Horizontal { row, col } if row == MAZE_SIZE => {
                (Position::new(col, MAZE_SIZE - 1), Direction::North)
            }
            Self::Horizontal { row, col } => (Position::new(col, row), Direction::South),
            Self::Vertical { row, col } if col == MAZE_SIZE => {
                (Position::new(MAZE_SIZE - 1, row), Direction::East)
            }
            Self::Vertical { row, col } => (Position::new(col, row), Direction::West),
        }
    }
}

/// known walls; unknown edges are treated as open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallMap {
    horizontal: [[bool; MAZE_SIZE]; MAZE_SIZE + 1],
    vertical: [[bool; MAZE_SIZE + 1]; MAZE_SIZE],
}

impl WallMap {
    /// empty interior, blocked rim
    pub fn new() -> Self {
        let mut horizontal = [[false; MAZE_SIZE]; MAZE_SIZE + 1];
        let mut vertical = [[false; MAZE_SIZE + 1]; MAZE_SIZE];

        for i in 0..MAZE_SIZE {
            horizontal[0][i] = true;
            horizontal[MAZE_SIZE][i] = true;
            vertical[i][0] = true;
            vertical[i][MAZE_SIZE] = true;
        }

        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_edge_blocked(&self, edge: Edge) -> bool {
        match edge {
            Edge::Horizontal { row, col } => self.horizontal[row][col],
            Edge::Vertical { row, col } => self.vertical[row][col],
        }
    }

    /// returns true when the edge was not already known
    pub fn block_edge(&mut self, edge: Edge) -> bool {
        let slot = match edge {
            Edge::Horizontal { row, col } => &mut self.horizontal[row][col],
            Edge::Vertical { row, col } => &mut self.vertical[row][col],
        };
        !std::mem::replace(slot, true)
    }

    pub fn set_blocked(&mut self, cell: Position, side: Direction) -> bool {
        self.block_edge(Edge::of(cell, side))
    }

    pub fn is_blocked(&self, cell: Position, side: Direction) -> bool {
        self.is_edge_blocked(Edge::of(cell, side))
    }

    pub fn is_open(&self, cell: Position, side: Direction) -> bool {
        !self.is_blocked(cell, side)
    }

    /// open neighbours of `cell` in flood-fill order
    pub fn open_neighbors(
        &self,
        cell: Position,
    ) -> impl Iterator<Item = (Position, Direction)> + '_ {
        cell.neighbors()
            .filter(move |&(_, dir)| self.is_open(cell, dir))
    }

    /// every blocked edge, each reported once
    pub fn blocked_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let vertical = (0..MAZE_SIZE).flat_map(move |row| {
            (0..=MAZE_SIZE)
                .filter(move |&col| self.vertical[row][col])
                .map(move |col| Edge::Vertical { row, col })
        });
        let horizontal = (0..=MAZE_SIZE).flat_map(move |row| {
            (0..MAZE_SIZE)
                .filter(move |&col| self.horizontal[row][col])
                .map(move |col| Edge::Horizontal { row, col })
        });
        vertical.chain(horizontal)
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked_edges().count()
    }
}

impl Default for WallMap {
    fn default() -> Self {
        Self::new()
    }
}
