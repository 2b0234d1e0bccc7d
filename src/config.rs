// Solver configuration: problem constants and per-strategy tunables, loadable from JSON

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::Traveler;

/// Hill climbing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbConfig {
    /// Number of neighbors tried
    pub iterations: usize,
    pub record_trace: bool,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            record_trace: true,
        }
    }
}

/// Simulated annealing parameters with a geometric cooling schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    pub initial_temperature: f64,
    /// Multiplier applied to the temperature after every move, in (0, 1)
    pub cooling_factor: f64,
    /// Search stops once the temperature is no longer above this floor
    pub min_temperature: f64,
    pub record_trace: bool,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10000.0,
            cooling_factor: 0.95,
            min_temperature: 0.1,
            record_trace: true,
        }
    }
}

impl AnnealingConfig {
    /// Rejects schedules that never cool or would divide by a non-positive temperature
    pub fn validate(&self) -> Result<()> {
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ScheduleError::degenerate(format!(
                "cooling factor must lie strictly between 0 and 1, got {}",
                self.cooling_factor
            )));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(ScheduleError::degenerate(format!(
                "minimum temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ScheduleError::degenerate(format!(
                "initial temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        Ok(())
    }

    /// Number of moves the schedule performs: `ceil(log(floor / initial) / log(cooling))`.
    ///
    /// Counted by replaying the cooling loop so that floating point rounding
    /// matches the search exactly. Only meaningful for a validated config.
    pub fn iteration_count(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut count = 0;
        while temperature > self.min_temperature {
            temperature *= self.cooling_factor;
            count += 1;
        }
        count
    }
}

/// Genetic search parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub population_size: usize,
    /// Best individuals carried unchanged into the next generation
    pub elite_count: usize,
    pub generations: usize,
    /// Chance that an offspring receives one neighbor move
    pub mutation_probability: f64,
    pub record_trace: bool,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            elite_count: 10,
            generations: 100,
            mutation_probability: 0.1,
            record_trace: true,
        }
    }
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.elite_count < 2 {
            return Err(ScheduleError::degenerate(format!(
                "crossover needs at least 2 elites, got {}",
                self.elite_count
            )));
        }
        if self.population_size < self.elite_count {
            return Err(ScheduleError::degenerate(format!(
                "population size {} is smaller than elite count {}",
                self.population_size, self.elite_count
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ScheduleError::degenerate(format!(
                "mutation probability must lie in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }
}

/// Full run configuration: the group, the cost constants and every strategy's tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Cost of one hour of idle waiting, per traveler
    pub wait_cost_per_hour: f64,

    /// Shared destination airport code
    pub destination: String,

    pub travelers: Vec<Traveler>,

    /// Seed for reproducible runs; a random seed is drawn when absent
    pub seed: Option<u64>,

    pub hill_climb: HillClimbConfig,
    pub annealing: AnnealingConfig,
    pub genetic: GeneticConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wait_cost_per_hour: 20.0,
            destination: "FCO".to_string(),
            travelers: default_travelers(),
            seed: None,
            hill_climb: HillClimbConfig::default(),
            annealing: AnnealingConfig::default(),
            genetic: GeneticConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Reads a JSON config file; missing fields fall back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Checks the problem-level fields only.
    ///
    /// Strategy sections are validated by each strategy when it runs, so a bad
    /// section fails that strategy alone.
    pub fn validate(&self) -> Result<()> {
        if self.travelers.is_empty() {
            return Err(ScheduleError::degenerate("at least one traveler is required"));
        }
        if !self.wait_cost_per_hour.is_finite() || self.wait_cost_per_hour < 0.0 {
            return Err(ScheduleError::degenerate(format!(
                "wait cost per hour must be a non-negative number, got {}",
                self.wait_cost_per_hour
            )));
        }
        Ok(())
    }

    /// Turns trace recording on or off for all strategies
    pub fn set_record_trace(&mut self, record: bool) {
        self.hill_climb.record_trace = record;
        self.annealing.record_trace = record;
        self.genetic.record_trace = record;
    }
}

/// Six travelers meeting in Rome
pub fn default_travelers() -> Vec<Traveler> {
    vec![
        Traveler::new("Lisboa", "LIS"),
        Traveler::new("Madrid", "MAD"),
        Traveler::new("Paris", "CDG"),
        Traveler::new("Dublin", "DUB"),
        Traveler::new("Bruxelas", "BRU"),
        Traveler::new("Londres", "LHR"),
    ]
}
