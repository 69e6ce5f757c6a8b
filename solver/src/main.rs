mod cli;
mod logging;

use std::path::Path;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info};

use cli::{Args, Command};
use logging::Logger;
use micromouse::{
    maze::render_map,
    mms::MmsInterface,
    robot::VirtualMouse,
    solvers::{FloodSolver, RunResult},
};

const HEADLESS_STEP_LIMIT: usize = 10_000;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    if args.delay > 0 {
        debug!("delay: {}ms", args.delay);
    }

    match args.command {
        Command::Mms { stop_at_goal } => {
            let solver = FloodSolver::new(args.delay, args.max_steps, stop_at_goal);
            run_mms(solver).await?;
        }
        Command::Headless { ref maze } => {
            let limit = args.max_steps.unwrap_or(HEADLESS_STEP_LIMIT);
            let solver = FloodSolver::new(args.delay, Some(limit), true);
            run_headless(solver, maze).await?;
        }
    }

    Ok(())
}

async fn run_mms(solver: FloodSolver) -> Result<()> {
    info!("connecting to mms over stdio");

    let mms = MmsInterface::stdio();
    mms.init().await?;

    let result = solver.solve(&mms).await?;
    print_result(&result);
    Ok(())
}

async fn run_headless(solver: FloodSolver, maze: &Path) -> Result<()> {
    info!("solving {} headless", maze.display());

    let text = std::fs::read_to_string(maze)
        .wrap_err_with(|| format!("failed to read maze file {}", maze.display()))?;
    let mouse = VirtualMouse::from_map(&text)
        .wrap_err_with(|| format!("failed to parse maze file {}", maze.display()))?;
    debug!("maze:\n{}", render_map(mouse.walls()));

    let result = solver.solve(&mouse).await?;
    print_result(&result);
    Ok(())
}

fn print_result(result: &RunResult) {
    match result.reached_goal_at {
        Some(step) => info!("goal reached at step {}", step),
        None => info!("goal not reached"),
    }
    info!(
        "finished in {} steps ({} forward, {} turns) in {:?}",
        result.steps, result.forward_moves, result.turns, result.total_time
    );
}
