//! Multi-source breadth-first distance propagation from the goal block.
//!
//! Every cell reachable through open edges gets its hop count to the nearest
//! goal cell. A cell is settled the moment it is enqueued, so each cell is
//! expanded at most once and the queue never holds more than [`CELL_COUNT`]
//! entries.

use std::collections::VecDeque;

use crate::{
    maze::{CELL_COUNT, DistanceField, GOAL_CELLS, WallMap},
    robot::RenderSink,
};

/// rebuilds the whole field from scratch
pub fn recompute(walls: &WallMap) -> DistanceField {
    let mut field = DistanceField::unknown();
    let mut queue = VecDeque::with_capacity(CELL_COUNT);
    let mut enqueued = 0;

    for goal in GOAL_CELLS {
        field.set(goal, 0);
        queue.push_back((goal, 0u16));
        enqueued += 1;
    }

    while let Some((current, distance)) = queue.pop_front() {
        for (neighbor, _) in walls.open_neighbors(current) {
            if field.is_settled(neighbor) {
                continue;
            }

            enqueued += 1;
            assert!(
                enqueued <= CELL_COUNT,
                "flood fill enqueued more than {CELL_COUNT} cells"
            );

            field.set(neighbor, distance + 1);
            queue.push_back((neighbor, distance + 1));
        }
    }

    field
}

/// pushes every distance label and every known wall to the sink
pub fn publish<S: RenderSink + ?Sized>(field: &DistanceField, walls: &WallMap, sink: &S) {
    for (cell, _) in field.iter() {
        sink.set_text(cell, &field.label(cell));
    }

    for edge in walls.blocked_edges() {
        let (cell, side) = edge.render_side();
        sink.set_wall(cell, side);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::maze::{Direction, MAZE_SIZE, Position};

    #[derive(Default)]
    struct RecordingSink {
        walls: RefCell<Vec<(Position, Direction)>>,
        texts: RefCell<Vec<(Position, String)>>,
    }

    impl RenderSink for RecordingSink {
        fn set_wall(&self, cell: Position, side: Direction) {
            self.walls.borrow_mut().push((cell, side));
        }

        fn set_text(&self, cell: Position, text: &str) {
            self.texts.borrow_mut().push((cell, text.to_string()));
        }
    }

    fn nearest_goal(pos: Position) -> u16 {
        GOAL_CELLS
            .iter()
            .map(|goal| pos.manhattan_distance(*goal))
            .min()
            .unwrap() as u16
    }

    #[test]
    fn empty_maze_is_manhattan_to_the_goal_block() {
        let field = recompute(&WallMap::new());

        assert_eq!(field.get(Position::new(0, 0)), Some(14));
        assert_eq!(field.get(Position::new(0, 1)), Some(13));
        assert_eq!(field.get(Position::new(15, 15)), Some(14));
        for pos in Position::all() {
            assert_eq!(field.get(pos), Some(nearest_goal(pos)), "at {pos:?}");
        }
    }

    #[test]
    fn goals_stay_zero_even_when_walled_in() {
        let mut walls = WallMap::new();
        for goal in GOAL_CELLS {
            for dir in Direction::ALL {
                walls.set_blocked(goal, dir);
            }
        }

        let field = recompute(&walls);
        for goal in GOAL_CELLS {
            assert_eq!(field.get(goal), Some(0));
        }
        assert!(
            Position::all()
                .filter(|pos| !pos.is_goal())
                .all(|pos| field.get(pos).is_none())
        );
    }

    #[test]
    fn wall_forces_a_detour() {
        let mut walls = WallMap::new();
        // (6, 7) can no longer step east into the goal
        walls.set_blocked(Position::new(6, 7), Direction::East);

        let field = recompute(&walls);
        assert_eq!(field.get(Position::new(6, 7)), Some(2));
        assert_eq!(field.get(Position::new(6, 8)), Some(1));
    }

    #[test]
    fn enclosed_corner_stays_unknown() {
        let mut walls = WallMap::new();
        walls.set_blocked(Position::new(0, 0), Direction::North);
        walls.set_blocked(Position::new(0, 0), Direction::East);

        let field = recompute(&walls);
        assert_eq!(field.get(Position::new(0, 0)), None);
        assert_eq!(field.get(Position::new(0, 1)), Some(13));
        assert_eq!(field.label(Position::new(0, 0)), "?");
    }

    #[test]
    fn recomputing_is_idempotent() {
        let mut walls = WallMap::new();
        walls.set_blocked(Position::new(3, 3), Direction::North);
        walls.set_blocked(Position::new(8, 6), Direction::West);

        assert_eq!(recompute(&walls), recompute(&walls));
    }

    #[test]
    fn publish_labels_every_cell_and_every_wall() {
        let mut walls = WallMap::new();
        walls.set_blocked(Position::new(2, 2), Direction::North);
        let field = recompute(&walls);
        let sink = RecordingSink::default();

        publish(&field, &walls, &sink);

        let texts = sink.texts.borrow();
        assert_eq!(texts.len(), MAZE_SIZE * MAZE_SIZE);
        assert!(texts.contains(&(Position::new(0, 0), "14".to_string())));
        assert!(texts.contains(&(Position::new(8, 8), "0".to_string())));

        let rendered = sink.walls.borrow();
        assert_eq!(rendered.len(), walls.blocked_count());
        assert!(rendered.contains(&(Position::new(2, 3), Direction::South)));
        let corner = Position::new(15, 15);
        assert!(rendered.contains(&(corner, Direction::North)));
        assert!(rendered.contains(&(corner, Direction::East)));
    }
}
