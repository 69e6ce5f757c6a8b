pub mod flood_fill;
pub mod policy;
pub mod sensing;

pub use flood_fill::{publish, recompute};
pub use policy::{Action, Candidate, Candidates, decide};
pub use sensing::{Observation, apply_observation};
