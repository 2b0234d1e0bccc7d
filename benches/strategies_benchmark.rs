use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trip_scheduler::{
    algorithms::cost::evaluate,
    algorithms::neighbor::random_assignment,
    Catalog, FlightOption, GeneticSearch, HillClimb, Route, SearchStrategy, SimulatedAnnealing,
    Traveler, TripProblem,
};

fn benchmark_strategies(c: &mut Criterion) {
    let problem = create_benchmark_problem();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let assignment = random_assignment(&problem, &mut rng);

    // Benchmark a single cost evaluation
    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&problem), black_box(&assignment)))
    });

    let strategies: Vec<Box<dyn SearchStrategy>> = vec![
        Box::new(HillClimb::default()),
        Box::new(SimulatedAnnealing::default()),
        Box::new(GeneticSearch::default()),
    ];

    // Benchmark each strategy with its default parameters
    for strategy in &strategies {
        c.bench_function(strategy.name(), |b| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(11);
                strategy.run(black_box(&problem), &mut rng)
            })
        });
    }
}

// Six travelers with ten flights on each route
fn create_benchmark_problem() -> TripProblem {
    let origins = ["LIS", "MAD", "CDG", "DUB", "BRU", "LHR"];
    let mut catalog = Catalog::new();

    for (i, origin) in origins.iter().enumerate() {
        for j in 0..10u32 {
            let departure = 6 * 60 + j * 75 + i as u32 * 5;
            let price = 60 + (j * 37 + i as u32 * 53) % 400;
            catalog.add_flight(
                Route::new(*origin, "FCO"),
                FlightOption::new(departure, departure + 150, price),
            );
            catalog.add_flight(
                Route::new("FCO", *origin),
                FlightOption::new(departure + 30, departure + 180, price + 20),
            );
        }
    }

    let travelers = origins
        .iter()
        .map(|origin| Traveler::new(format!("Traveler {}", origin), *origin))
        .collect();

    match TripProblem::new(catalog, travelers, "FCO", 20.0) {
        Ok(problem) => problem,
        Err(e) => panic!("benchmark problem is invalid: {}", e),
    }
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
