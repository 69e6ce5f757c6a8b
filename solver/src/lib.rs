//! Flood-fill micromouse controller.
//!
//! The core ([`maze`], [`algorithms`], [`solvers::Controller`]) is synchronous
//! and owns all grid state. [`robot`] defines what it needs from the mouse,
//! [`mms`] and [`robot::VirtualMouse`] provide it.

pub mod algorithms;
pub mod maze;
pub mod mms;
pub mod robot;
pub mod solvers;
