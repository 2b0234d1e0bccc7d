// Simulated annealing with Metropolis acceptance and geometric cooling

use rand::{Rng, RngCore};
use tracing::{debug, info, trace};

use crate::algorithms::cost::evaluate;
use crate::algorithms::neighbor::{mutate_one_field, random_assignment};
use crate::algorithms::{SearchOutcome, SearchStrategy};
use crate::config::AnnealingConfig;
use crate::error::Result;
use crate::models::{Cost, TripProblem};

/// Probability of moving to a candidate that is `delta` more expensive.
///
/// Improvements (`delta < 0`) are always taken. Equal-cost moves are taken
/// with probability one as well, which lets the walk drift across plateaus.
pub fn acceptance_probability(delta: Cost, temperature: f64) -> f64 {
    if delta < 0.0 {
        1.0
    } else {
        (-delta / temperature).exp()
    }
}

/// Draws the Metropolis decision for a move of cost change `delta`
pub fn metropolis_accept<R: Rng + ?Sized>(delta: Cost, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.gen::<f64>() < acceptance_probability(delta, temperature)
}

/// Annealing over the shared neighbor move.
///
/// A worse neighbor is accepted with probability `exp(-delta / T)`. While the
/// temperature is high the walk wanders freely, and it turns into plain
/// descent as `T` approaches the floor. The run length is fixed by the
/// schedule alone: `ceil(log(floor / initial) / log(cooling))` moves.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    pub config: AnnealingConfig,
}

impl SimulatedAnnealing {
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn run(&self, problem: &TripProblem, rng: &mut dyn RngCore) -> Result<SearchOutcome> {
        self.config.validate()?;
        let AnnealingConfig {
            initial_temperature,
            cooling_factor,
            min_temperature,
            record_trace,
        } = self.config;

        debug!(
            initial_temperature,
            cooling_factor,
            min_temperature,
            moves = self.config.iteration_count(),
            "simulated annealing started"
        );

        let mut current = random_assignment(problem, rng);
        let mut current_cost = evaluate(problem, &current)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut evaluations = 1;
        let mut uphill_moves = 0usize;

        let mut history = record_trace.then(|| vec![best_cost]);
        let mut temperature = initial_temperature;

        while temperature > min_temperature {
            let candidate = mutate_one_field(problem, &current, rng)?;
            let candidate_cost = evaluate(problem, &candidate)?;
            evaluations += 1;

            let delta = candidate_cost - current_cost;
            if metropolis_accept(delta, temperature, rng) {
                if delta > 0.0 {
                    uphill_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;

                if current_cost < best_cost {
                    trace!(temperature, cost = current_cost, "simulated annealing improved");
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            if let Some(history) = history.as_mut() {
                history.push(best_cost);
            }
            temperature *= cooling_factor;
        }

        info!(
            cost = best_cost,
            evaluations,
            uphill_moves,
            "simulated annealing finished"
        );

        Ok(SearchOutcome {
            strategy: self.name().to_string(),
            assignment: best,
            cost: best_cost,
            trace: history,
            evaluations,
        })
    }
}
