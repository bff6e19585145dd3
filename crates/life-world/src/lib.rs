//! World simulation engine.
//!
//! This module implements the toroidal grid where cells live, die and are born
//! under Conway's rules, plus the loop that drives it generation by generation.

pub mod cell;
pub mod grid;
pub mod patterns;
pub mod simulation;
pub mod snapshot;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::Pattern;
pub use simulation::{Outcome, Simulation, SimulationResult};
pub use snapshot::Snapshot;
