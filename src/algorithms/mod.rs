pub mod cost;
pub mod genetic;
pub mod hill_climb;
pub mod neighbor;
pub mod portfolio;
pub mod simulated_annealing;

// Common algorithm traits
use rand::RngCore;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Assignment, Cost, TripProblem};

/// What a strategy hands back to the driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Display name of the strategy that produced this result
    pub strategy: String,

    /// Cheapest assignment found
    pub assignment: Assignment,

    /// Cost of `assignment`
    pub cost: Cost,

    /// Convergence trace, when the strategy was asked to record one
    pub trace: Option<Vec<Cost>>,

    /// Number of cost evaluations performed
    pub evaluations: usize,
}

/// Trait for group trip schedule searches
pub trait SearchStrategy: Send + Sync {
    /// Human readable name used in reports and charts
    fn name(&self) -> &'static str;

    /// Runs the search to completion on `problem`, drawing all randomness from `rng`
    fn run(&self, problem: &TripProblem, rng: &mut dyn RngCore) -> Result<SearchOutcome>;
}
