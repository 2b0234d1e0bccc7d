// Flight catalog: every listed flight grouped by directed route

use crate::error::{Result, ScheduleError};
use crate::models::{FlightOption, Route};
use std::collections::HashMap;

/// Read-only lookup from a route to its flights, in listing order.
///
/// The position of a flight inside its route's list is the value an
/// `Assignment` stores, so the order must never change once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    routes: HashMap<Route, Vec<FlightOption>>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Appends a flight to the end of its route's option list
    pub fn add_flight(&mut self, route: Route, flight: FlightOption) {
        self.routes.entry(route).or_insert_with(Vec::new).push(flight);
    }

    /// All options for a route, or `None` if the route was never listed
    pub fn options(&self, route: &Route) -> Option<&[FlightOption]> {
        self.routes.get(route).map(|flights| flights.as_slice())
    }

    /// Options for a route that must exist and be non-empty
    pub fn require(&self, route: &Route) -> Result<&[FlightOption]> {
        match self.options(route) {
            Some(flights) if !flights.is_empty() => Ok(flights),
            _ => Err(ScheduleError::MissingRoute {
                origin: route.origin.clone(),
                destination: route.destination.clone(),
            }),
        }
    }

    pub fn has_route(&self, route: &Route) -> bool {
        self.options(route).map_or(false, |flights| !flights.is_empty())
    }

    /// Number of distinct routes
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Total number of flights across all routes
    pub fn flight_count(&self) -> usize {
        self.routes.values().map(|flights| flights.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in sorted order, for stable reporting
    pub fn routes(&self) -> Vec<&Route> {
        let mut routes: Vec<&Route> = self.routes.keys().collect();
        routes.sort();
        routes
    }
}

impl FromIterator<(Route, FlightOption)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (Route, FlightOption)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (route, flight) in iter {
            catalog.add_flight(route, flight);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_flight(Route::new("LIS", "FCO"), FlightOption::new(360, 540, 120));
        catalog.add_flight(Route::new("LIS", "FCO"), FlightOption::new(600, 780, 95));
        catalog.add_flight(Route::new("FCO", "LIS"), FlightOption::new(900, 1020, 140));
        catalog
    }

    #[test]
    fn test_options_keep_listing_order() {
        let catalog = create_test_catalog();
        let options = catalog.options(&Route::new("LIS", "FCO")).unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].price, 120);
        assert_eq!(options[1].price, 95);
    }

    #[test]
    fn test_require_missing_route() {
        let catalog = create_test_catalog();
        let err = catalog.require(&Route::new("MAD", "FCO")).unwrap_err();

        assert!(matches!(err, ScheduleError::MissingRoute { .. }));
        assert!(catalog.require(&Route::new("FCO", "LIS")).is_ok());
    }

    #[test]
    fn test_counts() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.route_count(), 2);
        assert_eq!(catalog.flight_count(), 3);
        assert!(!catalog.is_empty());
        assert!(Catalog::new().is_empty());
    }

    #[test]
    fn test_collect_from_pairs() {
        let catalog: Catalog = vec![
            (Route::new("DUB", "FCO"), FlightOption::new(480, 700, 200)),
            (Route::new("FCO", "DUB"), FlightOption::new(800, 950, 180)),
        ]
        .into_iter()
        .collect();

        assert!(catalog.has_route(&Route::new("DUB", "FCO")));
        assert_eq!(
            catalog.routes(),
            vec![&Route::new("DUB", "FCO"), &Route::new("FCO", "DUB")]
        );
    }
}
