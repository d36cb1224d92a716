//! # Lem-in
//!
//! Ants crossing a colony of rooms and tunnels.
//!
//! This library reads a colony description, finds a shortest path from the
//! `##start` room to the `##end` room, and moves a population of ants along it
//! turn by turn, never letting two ants share an ordinary room.

pub mod ant;
pub mod cli;
pub mod colony;
pub mod error;
pub mod simulation;

pub use ant::Ant;
pub use cli::Args;
pub use colony::Colony;
pub use error::{LemInError, Result};
pub use simulation::{find_path, Path, SimulationEngine};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{find_path, Ant, Args, Colony, LemInError, Path, Result, SimulationEngine};
}
