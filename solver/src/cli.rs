use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "micromouse")]
#[command(about = "Flood-fill micromouse solver")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Delay between moves in milliseconds (0 = no delay)
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    /// Give up after this many steps
    #[arg(long)]
    pub max_steps: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drive the mms simulator over stdin/stdout
    Mms {
        /// Stop once the mouse stands in the goal block
        #[arg(long)]
        stop_at_goal: bool,
    },

    /// Solve a .map maze file in memory
    Headless {
        /// Maze drawing in the mms .map format
        #[arg(value_name = "MAZE_FILE")]
        maze: PathBuf,
    },
}
