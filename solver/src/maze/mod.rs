mod direction;
mod distance;
mod layout;
mod pose;
mod position;
mod walls;

pub use direction::Direction;
pub use distance::DistanceField;
pub use layout::{parse_map, render_map};
pub use pose::Pose;
pub use position::{CELL_COUNT, GOAL_CELLS, MAZE_SIZE, Position};
pub use walls::{Edge, WallMap};
