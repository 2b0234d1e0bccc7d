use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_scheduler::algorithms::portfolio::{default_strategies, run_portfolio};
use trip_scheduler::utils::charts::{draw_convergence, draw_cost_comparison};
use trip_scheduler::utils::flight_listing::load_catalog;
use trip_scheduler::utils::report::{format_itinerary, format_summary, write_outcomes_json};
use trip_scheduler::{SearchOutcome, SolverConfig, TripProblem};

/// Schedules a group trip to a shared destination at the lowest combined cost
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Flight listing, one `ORIGIN,DEST,DEPART,ARRIVE,PRICE` record per line
    #[arg(long, default_value = "data/flights.txt")]
    flights: PathBuf,

    /// JSON solver configuration; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed for the strategy generators
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write cost comparison and convergence charts into
    #[arg(long)]
    charts: Option<PathBuf>,

    /// File to write outcomes to as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run the strategies one after another instead of in parallel
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    config.validate()?;
    if args.charts.is_some() {
        config.set_record_trace(true);
    }

    let catalog = load_catalog(&args.flights)?;
    let problem = TripProblem::new(
        catalog,
        config.travelers.clone(),
        config.destination.clone(),
        config.wait_cost_per_hour,
    )?;

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let strategies = default_strategies(&config);

    let start_time = Instant::now();
    let results = run_portfolio(&problem, &strategies, seed, !args.sequential);
    let elapsed = start_time.elapsed();
    info!(seed, elapsed = ?elapsed, "portfolio finished");

    let mut outcomes: Vec<SearchOutcome> = Vec::with_capacity(results.len());
    for (strategy, result) in strategies.iter().zip(results) {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!(strategy = strategy.name(), error = %e, "no result"),
        }
    }

    if outcomes.is_empty() {
        return Err("every strategy failed".into());
    }

    println!("Results (seed {}, {:.2?}):", seed, elapsed);
    print!("{}", format_summary(&outcomes));

    for outcome in &outcomes {
        println!("\n{} itinerary:", outcome.strategy);
        print!("{}", format_itinerary(&problem, &outcome.assignment)?);
    }

    if let Some(dir) = &args.charts {
        fs::create_dir_all(dir)?;

        let costs: Vec<(&str, f64)> = outcomes
            .iter()
            .map(|outcome| (outcome.strategy.as_str(), outcome.cost))
            .collect();
        draw_cost_comparison(&dir.join("cost_comparison.png"), &costs)?;

        let traces: Vec<(&str, &[f64])> = outcomes
            .iter()
            .filter_map(|outcome| {
                outcome
                    .trace
                    .as_deref()
                    .map(|trace| (outcome.strategy.as_str(), trace))
            })
            .collect();
        draw_convergence(&dir.join("convergence.png"), &traces)?;

        info!(dir = %dir.display(), "charts written");
    }

    if let Some(path) = &args.output {
        write_outcomes_json(path, &problem, &outcomes)?;
    }

    Ok(())
}
