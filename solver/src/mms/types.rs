use std::fmt;

use crate::maze::{Direction, Position};

/// one line written to the simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MazeWidth,
    MazeHeight,
    WallFront,
    WallLeft,
    WallRight,
    MoveForward,
    TurnLeft,
    TurnRight,
    SetWall { cell: Position, side: Direction },
    SetText { cell: Position, text: String },
    ClearAllText,
    SetColor { cell: Position, color: Color },
    WasReset,
    AckReset,
}

impl Command {
    /// fire-and-forget commands get no reply
    pub fn expects_response(&self) -> bool {
        !matches!(
            self,
            Self::SetWall { .. } | Self::SetText { .. } | Self::ClearAllText | Self::SetColor { .. }
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MazeWidth => f.write_str("mazeWidth"),
            Self::MazeHeight => f.write_str("mazeHeight"),
            Self::WallFront => f.write_str("wallFront"),
            Self::WallLeft => f.write_str("wallLeft"),
            Self::WallRight => f.write_str("wallRight"),
            Self::MoveForward => f.write_str("moveForward"),
            Self::TurnLeft => f.write_str("turnLeft"),
            Self::TurnRight => f.write_str("turnRight"),
            Self::SetWall { cell, side } => {
                write!(f, "setWall {} {} {}", cell.x, cell.y, side.as_char())
            }
            Self::SetText { cell, text } => write!(f, "setText {} {} {}", cell.x, cell.y, text),
            Self::ClearAllText => f.write_str("clearAllText"),
            Self::SetColor { cell, color } => {
                write!(f, "setColor {} {} {}", cell.x, cell.y, color.as_char())
            }
            Self::WasReset => f.write_str("wasReset"),
            Self::AckReset => f.write_str("ackReset"),
        }
    }
}

/// cell colors the solver paints; only the goal block is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
}

impl Color {
    pub fn as_char(self) -> char {
        match self {
            Self::Green => 'G',
        }
    }
}

/// outcome of `moveForward`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResponse {
    Ack,
    Crash,
}

impl TryFrom<&str> for MoveResponse {
    type Error = eyre::Report;

    fn try_from(s: &str) -> eyre::Result<Self> {
        match s.trim() {
            "ack" => Ok(Self::Ack),
            "crash" => Ok(Self::Crash),
            other => eyre::bail!("invalid move response: {:?}", other),
        }
    }
}

pub fn parse_bool(s: &str) -> eyre::Result<bool> {
    match s.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => eyre::bail!("expected true or false, got {:?}", other),
    }
}

pub fn parse_ack(s: &str) -> eyre::Result<()> {
    match s.trim() {
        "ack" => Ok(()),
        other => eyre::bail!("expected ack, got {:?}", other),
    }
}

pub fn parse_dimension(s: &str) -> eyre::Result<usize> {
    s.trim()
        .parse()
        .map_err(|e| eyre::eyre!("invalid maze dimension {:?}: {}", s, e))
}
