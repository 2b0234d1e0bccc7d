// Runs several strategies on the same problem, sequentially or on the rayon pool

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::algorithms::genetic::GeneticSearch;
use crate::algorithms::hill_climb::HillClimb;
use crate::algorithms::simulated_annealing::SimulatedAnnealing;
use crate::algorithms::{SearchOutcome, SearchStrategy};
use crate::config::SolverConfig;
use crate::error::Result;
use crate::models::TripProblem;

/// The three strategies, configured from `config`, in report order
pub fn default_strategies(config: &SolverConfig) -> Vec<Box<dyn SearchStrategy>> {
    vec![
        Box::new(HillClimb::new(config.hill_climb.clone())),
        Box::new(SimulatedAnnealing::new(config.annealing.clone())),
        Box::new(GeneticSearch::new(config.genetic.clone())),
    ]
}

/// Runs every strategy once.
///
/// Strategy `i` gets its own `ChaCha8Rng` seeded with `seed + i`, so results are
/// reproducible and identical whether the run is parallel or not. A failing
/// strategy only affects its own slot in the returned vector.
pub fn run_portfolio(
    problem: &TripProblem,
    strategies: &[Box<dyn SearchStrategy>],
    seed: u64,
    parallel: bool,
) -> Vec<Result<SearchOutcome>> {
    info!(
        strategies = strategies.len(),
        seed,
        parallel,
        "running strategy portfolio"
    );

    let run_one = |(i, strategy): (usize, &Box<dyn SearchStrategy>)| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
        let outcome = strategy.run(problem, &mut rng);
        if let Err(err) = &outcome {
            warn!(strategy = strategy.name(), error = %err, "strategy aborted");
        }
        outcome
    };

    if parallel {
        strategies.par_iter().enumerate().map(run_one).collect()
    } else {
        strategies.iter().enumerate().map(run_one).collect()
    }
}
