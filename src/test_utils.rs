// Shared fixtures for unit tests

use crate::models::{Catalog, FlightOption, Route, Traveler, TripProblem};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn add_flight(
    catalog: &mut Catalog,
    origin: &str,
    destination: &str,
    departure: u32,
    arrival: u32,
    price: u32,
) {
    catalog.add_flight(Route::new(origin, destination), FlightOption::new(departure, arrival, price));
}

/// Three travelers, several options per route, destination FCO
pub fn sample_problem() -> TripProblem {
    let mut catalog = Catalog::new();

    add_flight(&mut catalog, "LIS", "FCO", 6 * 60, 9 * 60, 250);
    add_flight(&mut catalog, "LIS", "FCO", 8 * 60, 11 * 60, 180);
    add_flight(&mut catalog, "LIS", "FCO", 11 * 60, 14 * 60, 90);
    add_flight(&mut catalog, "LIS", "FCO", 15 * 60, 18 * 60, 60);
    add_flight(&mut catalog, "FCO", "LIS", 7 * 60, 10 * 60, 70);
    add_flight(&mut catalog, "FCO", "LIS", 12 * 60, 15 * 60, 140);
    add_flight(&mut catalog, "FCO", "LIS", 17 * 60, 20 * 60, 210);

    add_flight(&mut catalog, "MAD", "FCO", 7 * 60, 9 * 60 + 30, 150);
    add_flight(&mut catalog, "MAD", "FCO", 9 * 60, 11 * 60 + 30, 120);
    add_flight(&mut catalog, "MAD", "FCO", 13 * 60, 15 * 60 + 30, 75);
    add_flight(&mut catalog, "FCO", "MAD", 8 * 60, 10 * 60 + 30, 95);
    add_flight(&mut catalog, "FCO", "MAD", 16 * 60, 18 * 60 + 30, 180);

    add_flight(&mut catalog, "DUB", "FCO", 6 * 60 + 30, 10 * 60 + 45, 310);
    add_flight(&mut catalog, "DUB", "FCO", 10 * 60, 14 * 60 + 15, 205);
    add_flight(&mut catalog, "FCO", "DUB", 9 * 60, 12 * 60 + 45, 120);
    add_flight(&mut catalog, "FCO", "DUB", 13 * 60, 16 * 60 + 45, 230);
    add_flight(&mut catalog, "FCO", "DUB", 18 * 60, 21 * 60 + 45, 260);

    let travelers = vec![
        Traveler::new("Lisboa", "LIS"),
        Traveler::new("Madrid", "MAD"),
        Traveler::new("Dublin", "DUB"),
    ];

    TripProblem::new(catalog, travelers, "FCO", 20.0).expect("fixture problem is valid")
}

/// Three travelers with exactly one flight on every route, all landing at
/// 10:00 and all leaving at 17:00
pub fn single_option_problem() -> TripProblem {
    let mut catalog = Catalog::new();

    add_flight(&mut catalog, "LIS", "FCO", 8 * 60, 10 * 60, 100);
    add_flight(&mut catalog, "FCO", "LIS", 17 * 60, 19 * 60, 110);
    add_flight(&mut catalog, "MAD", "FCO", 7 * 60 + 30, 10 * 60, 120);
    add_flight(&mut catalog, "FCO", "MAD", 17 * 60, 19 * 60 + 30, 130);
    add_flight(&mut catalog, "CDG", "FCO", 8 * 60, 10 * 60, 140);
    add_flight(&mut catalog, "FCO", "CDG", 17 * 60, 19 * 60, 150);

    let travelers = vec![
        Traveler::new("Lisboa", "LIS"),
        Traveler::new("Madrid", "MAD"),
        Traveler::new("Paris", "CDG"),
    ];

    TripProblem::new(catalog, travelers, "FCO", 20.0).expect("fixture problem is valid")
}
