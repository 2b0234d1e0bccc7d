// Cost evaluator: ticket prices plus the cost of waiting for the rest of the group

use serde::Serialize;

use crate::error::Result;
use crate::models::{Assignment, Cost, TripProblem};

/// The three components of an assignment's cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Sum of every booked ticket
    pub ticket_price: Cost,

    /// Time spent at the destination waiting for the last arrival
    pub outbound_wait: Cost,

    /// Time spent waiting relative to the earliest return departure
    pub return_wait: Cost,
}

impl CostBreakdown {
    pub fn wait(&self) -> Cost {
        self.outbound_wait + self.return_wait
    }

    pub fn total(&self) -> Cost {
        self.ticket_price + self.outbound_wait + self.return_wait
    }
}

/// Splits the cost of an assignment into prices and waits.
///
/// Everyone waits at the destination until the latest outbound arrival, so
/// each traveler pays `(latest_arrival - own_arrival) / 60 * rate`. The return
/// leg is measured against the earliest return departure:
/// `(own_departure - earliest_departure) / 60 * rate`.
///
/// An index outside its route's option list, or an assignment of the wrong
/// length, is a contract violation and is reported rather than clamped.
pub fn cost_breakdown(problem: &TripProblem, assignment: &Assignment) -> Result<CostBreakdown> {
    problem.check_shape(assignment)?;

    let travelers = problem.traveler_count();
    let mut ticket_price: u64 = 0;
    let mut arrivals = Vec::with_capacity(travelers);
    let mut departures = Vec::with_capacity(travelers);

    for traveler in 0..travelers {
        let outbound = problem.flight_at(traveler * 2, assignment.outbound(traveler))?;
        let inbound = problem.flight_at(traveler * 2 + 1, assignment.inbound(traveler))?;

        ticket_price += u64::from(outbound.price) + u64::from(inbound.price);
        arrivals.push(outbound.arrival);
        departures.push(inbound.departure);
    }

    // Non-empty: the problem guarantees at least one traveler
    let latest_arrival = arrivals.iter().copied().max().unwrap_or(0);
    let earliest_departure = departures.iter().copied().min().unwrap_or(0);
    let rate = problem.wait_cost_per_hour();

    let outbound_wait = arrivals
        .iter()
        .map(|&arrival| f64::from(latest_arrival - arrival) / 60.0 * rate)
        .sum();
    let return_wait = departures
        .iter()
        .map(|&departure| f64::from(departure - earliest_departure) / 60.0 * rate)
        .sum();

    Ok(CostBreakdown {
        ticket_price: ticket_price as Cost,
        outbound_wait,
        return_wait,
    })
}

/// Total cost of an assignment. Pure: same problem and assignment, same result.
pub fn evaluate(problem: &TripProblem, assignment: &Assignment) -> Result<Cost> {
    cost_breakdown(problem, assignment).map(|breakdown| breakdown.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::{Catalog, Traveler};
    use crate::test_utils::{add_flight, sample_problem, single_option_problem};

    #[test]
    fn test_two_traveler_outbound_wait() {
        let mut catalog = Catalog::new();
        add_flight(&mut catalog, "LIS", "FCO", 6 * 60, 8 * 60, 100);
        add_flight(&mut catalog, "FCO", "LIS", 18 * 60, 20 * 60, 100);
        add_flight(&mut catalog, "MAD", "FCO", 8 * 60, 10 * 60, 150);
        add_flight(&mut catalog, "FCO", "MAD", 18 * 60, 20 * 60, 150);
        let travelers = vec![Traveler::new("A", "LIS"), Traveler::new("B", "MAD")];
        let problem = TripProblem::new(catalog, travelers, "FCO", 20.0).unwrap();

        let breakdown = cost_breakdown(&problem, &Assignment::new(vec![0, 0, 0, 0])).unwrap();

        // A waits two hours for B
        assert_eq!(breakdown.outbound_wait, 40.0);
        assert_eq!(breakdown.return_wait, 0.0);
        assert_eq!(breakdown.ticket_price, 500.0);
        assert_eq!(breakdown.total(), 540.0);
    }

    #[test]
    fn test_return_wait_measured_from_earliest_departure() {
        let mut catalog = Catalog::new();
        add_flight(&mut catalog, "LIS", "FCO", 6 * 60, 9 * 60, 10);
        add_flight(&mut catalog, "FCO", "LIS", 15 * 60, 17 * 60, 10);
        add_flight(&mut catalog, "MAD", "FCO", 6 * 60, 9 * 60, 10);
        add_flight(&mut catalog, "FCO", "MAD", 16 * 60 + 30, 18 * 60, 10);
        let travelers = vec![Traveler::new("A", "LIS"), Traveler::new("B", "MAD")];
        let problem = TripProblem::new(catalog, travelers, "FCO", 20.0).unwrap();

        let breakdown = cost_breakdown(&problem, &Assignment::new(vec![0, 0, 0, 0])).unwrap();

        assert_eq!(breakdown.outbound_wait, 0.0);
        assert_eq!(breakdown.return_wait, 30.0);
        assert_eq!(evaluate(&problem, &Assignment::new(vec![0, 0, 0, 0])).unwrap(), 70.0);
    }

    #[test]
    fn test_single_option_catalog_has_no_wait() {
        let problem = single_option_problem();
        let breakdown = cost_breakdown(&problem, &Assignment::new(vec![0; 6])).unwrap();

        assert_eq!(breakdown.ticket_price, 750.0);
        assert_eq!(breakdown.wait(), 0.0);
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let problem = sample_problem();
        // LIS -> FCO has four options
        let err = evaluate(&problem, &Assignment::new(vec![4, 0, 0, 0, 0, 0])).unwrap_err();

        assert!(matches!(
            err,
            ScheduleError::InvalidIndex {
                position: 0,
                index: 4,
                available: 4
            }
        ));
    }

    #[test]
    fn test_wrong_length_fails() {
        let problem = sample_problem();
        let err = evaluate(&problem, &Assignment::new(vec![0, 0])).unwrap_err();

        assert!(matches!(
            err,
            ScheduleError::AssignmentLength {
                expected: 6,
                actual: 2
            }
        ));
    }
}
