use std::collections::{HashSet, VecDeque};

use micromouse::{
    algorithms::{Observation, apply_observation, recompute},
    maze::{Direction, GOAL_CELLS, MAZE_SIZE, Pose, Position, WallMap},
};
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_position() -> impl Strategy<Value = Position> {
    (0..MAZE_SIZE, 0..MAZE_SIZE).prop_map(|(x, y)| Position::new(x, y))
}

fn arb_walls() -> impl Strategy<Value = WallMap> {
    prop::collection::vec((arb_position(), arb_direction()), 0..120).prop_map(|edges| {
        let mut walls = WallMap::new();
        for (cell, side) in edges {
            walls.set_blocked(cell, side);
        }
        walls
    })
}

/// independent single-source search from `start` to the nearest goal cell
fn reference_distance(walls: &WallMap, start: Position) -> Option<u16> {
    let mut queue = VecDeque::from([(start, 0u16)]);
    let mut visited = HashSet::from([start]);

    while let Some((cell, depth)) = queue.pop_front() {
        if GOAL_CELLS.contains(&cell) {
            return Some(depth);
        }
        for side in Direction::ALL {
            if walls.is_blocked(cell, side) {
                continue;
            }
            if let Some(next) = cell.move_in_direction(side)
                && visited.insert(next)
            {
                queue.push_back((next, depth + 1));
            }
        }
    }

    None
}

fn rim_is_blocked(walls: &WallMap) -> bool {
    (0..MAZE_SIZE).all(|i| {
        walls.is_blocked(Position::new(i, 0), Direction::South)
            && walls.is_blocked(Position::new(i, MAZE_SIZE - 1), Direction::North)
            && walls.is_blocked(Position::new(0, i), Direction::West)
            && walls.is_blocked(Position::new(MAZE_SIZE - 1, i), Direction::East)
    })
}

proptest! {
    #[test]
    fn field_matches_reference_search(walls in arb_walls()) {
        let field = recompute(&walls);
        for cell in Position::all() {
            prop_assert_eq!(field.get(cell), reference_distance(&walls, cell), "at {:?}", cell);
        }
    }

    #[test]
    fn recompute_is_idempotent(walls in arb_walls()) {
        prop_assert_eq!(recompute(&walls), recompute(&walls));
    }

    #[test]
    fn goals_always_read_zero(walls in arb_walls()) {
        let field = recompute(&walls);
        for goal in GOAL_CELLS {
            prop_assert_eq!(field.get(goal), Some(0));
        }
    }

    #[test]
    fn observations_only_add_walls(
        readings in prop::collection::vec(
            (arb_position(), arb_direction(), any::<bool>(), any::<bool>(), any::<bool>()),
            0..200,
        )
    ) {
        let mut walls = WallMap::new();
        prop_assert!(rim_is_blocked(&walls));

        for (cell, heading, left, front, right) in readings {
            let before = walls.clone();
            let pose = Pose::new(cell, heading);
            let observation = Observation::new(left, front, right);
            let learned = apply_observation(&mut walls, &pose, observation);

            prop_assert_eq!(walls.blocked_count(), before.blocked_count() + learned);
            prop_assert!(before.blocked_edges().all(|edge| walls.is_edge_blocked(edge)));
        }

        prop_assert!(rim_is_blocked(&walls));
    }
}
