//! ASCII `.map` mazes as drawn by the mms simulator.
//!
//! ```text
//! +---+---+
//! |       |
//! +   +---+
//! |   |   |
//! +---+---+
//! ```
//!
//! The first line is the north rim. Post lines carry `---` for a horizontal
//! wall under each cell, cell lines carry `|` at column `4 * x` for the west
//! wall of cell `x`.

use super::{
    position::MAZE_SIZE,
    walls::{Edge, WallMap},
};

const LINE_COUNT: usize = 2 * MAZE_SIZE + 1;

pub fn parse_map(text: &str) -> eyre::Result<WallMap> {
    let lines: Vec<&[u8]> = text
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .map(str::as_bytes)
        .collect();

    if lines.len() < LINE_COUNT {
        eyre::bail!(
            "maze has {} lines, expected {} for a {}x{} maze",
            lines.len(),
            LINE_COUNT,
            MAZE_SIZE,
            MAZE_SIZE
        );
    }

    let mut walls = WallMap::new();

    for (i, line) in lines.iter().take(LINE_COUNT).enumerate() {
        if i % 2 == 0 {
            let row = MAZE_SIZE - i / 2;
            for col in 0..MAZE_SIZE {
                if line.get(4 * col + 2) == Some(&b'-') {
                    walls.block_edge(Edge::Horizontal { row, col });
                }
            }
        } else {
            let row = MAZE_SIZE - 1 - i / 2;
            for col in 0..=MAZE_SIZE {
                if line.get(4 * col) == Some(&b'|') {
                    walls.block_edge(Edge::Vertical { row, col });
                }
            }
        }
    }

    Ok(walls)
}

pub fn render_map(walls: &WallMap) -> String {
    let mut out = String::with_capacity(LINE_COUNT * (4 * MAZE_SIZE + 2));

    for i in 0..LINE_COUNT {
        if i % 2 == 0 {
            let row = MAZE_SIZE - i / 2;
            for col in 0..MAZE_SIZE {
                out.push('+');
                out.push_str(if walls.is_edge_blocked(Edge::Horizontal { row, col }) {
                    "---"
                } else {
                    "   "
                });
            }
            out.push('+');
        } else {
            let row = MAZE_SIZE - 1 - i / 2;
            for col in 0..=MAZE_SIZE {
                out.push(if walls.is_edge_blocked(Edge::Vertical { row, col }) {
                    '|'
                } else {
                    ' '
                });
                if col < MAZE_SIZE {
                    out.push_str("   ");
                }
            }
        }
        out.push('\n');
    }

    out
}
