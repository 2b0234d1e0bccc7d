// Models module - exports all model types

mod assignment;
mod catalog;
mod flight;
mod problem;
mod route;
mod traveler;

// Re-export model types
pub use self::assignment::{Assignment, Leg};
pub use self::catalog::Catalog;
pub use self::flight::FlightOption;
pub use self::problem::TripProblem;
pub use self::route::Route;
pub use self::traveler::Traveler;

// Common type aliases for improved code readability
pub type Minutes = u32;
pub type Price = u32;
pub type Cost = f64;
