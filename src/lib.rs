// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-exports for convenience
pub use algorithms::genetic::GeneticSearch;
pub use algorithms::hill_climb::HillClimb;
pub use algorithms::simulated_annealing::SimulatedAnnealing;
pub use algorithms::{SearchOutcome, SearchStrategy};
pub use config::SolverConfig;
pub use error::{Result, ScheduleError};
pub use models::{Assignment, Catalog, FlightOption, Route, Traveler, TripProblem};
