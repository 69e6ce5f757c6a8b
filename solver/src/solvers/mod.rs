mod controller;
mod flood;

pub use controller::Controller;
pub use flood::{FloodSolver, RunResult};
