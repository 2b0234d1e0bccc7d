// Hill climbing: greedy local search that only ever accepts strict improvements

use rand::RngCore;
use tracing::{debug, info, trace};

use crate::algorithms::cost::evaluate;
use crate::algorithms::neighbor::{mutate_one_field, random_assignment};
use crate::algorithms::{SearchOutcome, SearchStrategy};
use crate::config::HillClimbConfig;
use crate::error::Result;
use crate::models::TripProblem;

/// Random-restart-free hill climber.
///
/// Starts from a uniformly random assignment and tries `iterations`
/// neighbors, keeping a neighbor only when it is strictly cheaper. It stops
/// in the first local optimum it reaches.
#[derive(Debug, Clone, Default)]
pub struct HillClimb {
    pub config: HillClimbConfig,
}

impl HillClimb {
    pub fn new(config: HillClimbConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for HillClimb {
    fn name(&self) -> &'static str {
        "Hill Climb"
    }

    fn run(&self, problem: &TripProblem, rng: &mut dyn RngCore) -> Result<SearchOutcome> {
        debug!(iterations = self.config.iterations, "hill climb started");

        let mut best = random_assignment(problem, rng);
        let mut best_cost = evaluate(problem, &best)?;
        let mut evaluations = 1;

        let mut history = self.config.record_trace.then(|| vec![best_cost]);

        for iteration in 0..self.config.iterations {
            let candidate = mutate_one_field(problem, &best, rng)?;
            let candidate_cost = evaluate(problem, &candidate)?;
            evaluations += 1;

            if candidate_cost < best_cost {
                trace!(iteration, cost = candidate_cost, "hill climb improved");
                best = candidate;
                best_cost = candidate_cost;
            }

            if let Some(history) = history.as_mut() {
                history.push(best_cost);
            }
        }

        info!(cost = best_cost, evaluations, "hill climb finished");

        Ok(SearchOutcome {
            strategy: self.name().to_string(),
            assignment: best,
            cost: best_cost,
            trace: history,
            evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use crate::test_utils::{sample_problem, seeded_rng, single_option_problem};

    #[test]
    fn test_trace_is_non_increasing() {
        let problem = sample_problem();
        let mut rng = seeded_rng(1);
        let outcome = HillClimb::default().run(&problem, &mut rng).unwrap();

        let history = outcome.trace.unwrap();
        assert_eq!(history.len(), 1001);
        assert!(history.windows(2).all(|pair| pair[1] <= pair[0]));
        assert!(outcome.cost <= history[0]);
        assert_eq!(*history.last().unwrap(), outcome.cost);
    }

    #[test]
    fn test_reported_cost_matches_assignment() {
        let problem = sample_problem();
        let mut rng = seeded_rng(2);
        let outcome = HillClimb::default().run(&problem, &mut rng).unwrap();

        assert_eq!(evaluate(&problem, &outcome.assignment).unwrap(), outcome.cost);
        assert_eq!(outcome.evaluations, 1001);
    }

    #[test]
    fn test_without_trace() {
        let problem = sample_problem();
        let mut rng = seeded_rng(3);
        let climber = HillClimb::new(HillClimbConfig {
            iterations: 50,
            record_trace: false,
        });

        assert!(climber.run(&problem, &mut rng).unwrap().trace.is_none());
    }

    #[test]
    fn test_zero_iterations_returns_start() {
        let problem = sample_problem();
        let climber = HillClimb::new(HillClimbConfig {
            iterations: 0,
            record_trace: true,
        });

        let outcome = climber.run(&problem, &mut seeded_rng(4)).unwrap();
        assert_eq!(outcome.trace.unwrap(), vec![outcome.cost]);
    }

    #[test]
    fn test_single_option_catalog() {
        let problem = single_option_problem();
        let outcome = HillClimb::default().run(&problem, &mut seeded_rng(5)).unwrap();

        assert_eq!(outcome.assignment, Assignment::new(vec![0; 6]));
        assert_eq!(outcome.cost, 750.0);
    }
}
