// Elitist genetic search over flight assignments

use std::cmp::Ordering;

use rand::seq::index;
use rand::{Rng, RngCore};
use tracing::{debug, info, trace};

use crate::algorithms::cost::evaluate;
use crate::algorithms::neighbor::{mutate_one_field, random_assignment};
use crate::algorithms::{SearchOutcome, SearchStrategy};
use crate::config::GeneticConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Assignment, Cost, TripProblem};

/// An assignment paired with its cost for ranking
#[derive(Debug, Clone)]
struct Individual {
    assignment: Assignment,
    cost: Cost,
}

impl Individual {
    fn evaluate(problem: &TripProblem, assignment: Assignment) -> Result<Self> {
        let cost = evaluate(problem, &assignment)?;
        Ok(Self { assignment, cost })
    }
}

fn by_cost(a: &Individual, b: &Individual) -> Ordering {
    a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal)
}

/// Splices `first`'s prefix with `second`'s suffix at a random cut.
///
/// The cut is drawn from `1 ..= len - 2`, so both parents contribute at least
/// one slot when the assignment has three or more slots. A single traveler
/// (two slots) can only be cut at 1.
pub fn single_point_crossover<R: Rng + ?Sized>(
    first: &Assignment,
    second: &Assignment,
    rng: &mut R,
) -> Assignment {
    let last_cut = first.len().saturating_sub(2).max(1);
    let cut = rng.gen_range(1..=last_cut);
    first.splice(second, cut)
}

/// Generational search with elitism.
///
/// Each generation ranks the population by cost and copies the `elite_count`
/// cheapest individuals forward untouched. The rest is refilled with
/// single-point crossovers of two distinct elites, occasionally mutated by
/// the shared neighbor move. Elites survive unchanged, so the best cost in
/// the population never rises between generations.
#[derive(Debug, Clone, Default)]
pub struct GeneticSearch {
    pub config: GeneticConfig,
}

impl GeneticSearch {
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }

    /// Builds the next population: elites first, then offspring
    fn breed(
        &self,
        problem: &TripProblem,
        ranked: &[Individual],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Individual>> {
        let elites = &ranked[..self.config.elite_count];
        let mut next = Vec::with_capacity(self.config.population_size);
        next.extend_from_slice(elites);

        while next.len() < self.config.population_size {
            let parents = index::sample(rng, elites.len(), 2);
            let first = &elites[parents.index(0)].assignment;
            let second = &elites[parents.index(1)].assignment;

            let mut child = single_point_crossover(first, second, rng);
            if rng.gen_bool(self.config.mutation_probability) {
                child = mutate_one_field(problem, &child, rng)?;
            }
            next.push(Individual::evaluate(problem, child)?);
        }

        Ok(next)
    }
}

impl SearchStrategy for GeneticSearch {
    fn name(&self) -> &'static str {
        "Genetic Search"
    }

    fn run(&self, problem: &TripProblem, rng: &mut dyn RngCore) -> Result<SearchOutcome> {
        self.config.validate()?;
        debug!(
            population = self.config.population_size,
            elites = self.config.elite_count,
            generations = self.config.generations,
            "genetic search started"
        );

        let mut population = (0..self.config.population_size)
            .map(|_| Individual::evaluate(problem, random_assignment(problem, rng)))
            .collect::<Result<Vec<_>>>()?;
        let mut evaluations = population.len();

        let mut history = self.config.record_trace.then(Vec::new);

        for generation in 0..self.config.generations {
            population.sort_by(by_cost);
            trace!(generation, best = population[0].cost, "generation ranked");
            if let Some(history) = history.as_mut() {
                history.push(population[0].cost);
            }

            population = self.breed(problem, &population, rng)?;
            evaluations += self.config.population_size - self.config.elite_count;
        }

        // Population size is at least the elite count, which is at least two
        let best = population
            .into_iter()
            .min_by(by_cost)
            .ok_or_else(|| ScheduleError::degenerate("empty population"))?;

        info!(cost = best.cost, evaluations, "genetic search finished");

        Ok(SearchOutcome {
            strategy: self.name().to_string(),
            assignment: best.assignment,
            cost: best.cost,
            trace: history,
            evaluations,
        })
    }
}
