pub mod engine;
pub mod occupancy;
pub mod path;

pub use engine::{Move, SimulationEngine, SimulationSummary, Turn};
pub use occupancy::OccupancyTable;
pub use path::{find_path, Path};
