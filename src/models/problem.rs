// Trip problem: the immutable input shared by the evaluator and every strategy

use crate::error::{Result, ScheduleError};
use crate::models::{Assignment, Catalog, FlightOption, Leg, Route, Traveler};
use tracing::debug;

/// Everything a search needs to know about one scheduling instance.
///
/// Built once, validated up front, then only read. Strategies borrow it
/// and never mutate it, so it can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct TripProblem {
    catalog: Catalog,
    travelers: Vec<Traveler>,
    destination: String,
    wait_cost_per_hour: f64,

    /// Route flown by each assignment slot, in slot order
    slot_routes: Vec<Route>,
}

impl TripProblem {
    /// Validates the inputs and builds a problem.
    ///
    /// Fails with `MissingRoute` when any traveler lacks flights in either
    /// direction, and with `DegenerateConfiguration` for an empty group or a
    /// negative wait rate.
    pub fn new<S: Into<String>>(
        catalog: Catalog,
        travelers: Vec<Traveler>,
        destination: S,
        wait_cost_per_hour: f64,
    ) -> Result<Self> {
        let destination = destination.into();

        if travelers.is_empty() {
            return Err(ScheduleError::degenerate("at least one traveler is required"));
        }
        if !wait_cost_per_hour.is_finite() || wait_cost_per_hour < 0.0 {
            return Err(ScheduleError::degenerate(format!(
                "wait cost per hour must be a non-negative number, got {}",
                wait_cost_per_hour
            )));
        }

        let mut slot_routes = Vec::with_capacity(travelers.len() * 2);
        for traveler in &travelers {
            let outbound = Route::new(traveler.origin.clone(), destination.clone());
            let inbound = outbound.reversed();
            catalog.require(&outbound)?;
            catalog.require(&inbound)?;
            slot_routes.push(outbound);
            slot_routes.push(inbound);
        }

        debug!(
            travelers = travelers.len(),
            destination = %destination,
            routes = catalog.route_count(),
            "trip problem validated"
        );

        Ok(Self {
            catalog,
            travelers,
            destination,
            wait_cost_per_hour,
            slot_routes,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    pub fn traveler_count(&self) -> usize {
        self.travelers.len()
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn wait_cost_per_hour(&self) -> f64 {
        self.wait_cost_per_hour
    }

    /// Length every assignment for this problem must have
    pub fn slot_count(&self) -> usize {
        self.slot_routes.len()
    }

    pub fn slot_route(&self, position: usize) -> &Route {
        &self.slot_routes[position]
    }

    pub fn slot_leg(&self, position: usize) -> Leg {
        Leg::of_position(position)
    }

    /// Flights selectable at a slot: the traveler's outbound list for even
    /// slots, the return list for odd ones
    pub fn options_at(&self, position: usize) -> &[FlightOption] {
        self.catalog
            .options(&self.slot_routes[position])
            .unwrap_or(&[])
    }

    /// Number of valid indices for a slot
    pub fn option_count(&self, position: usize) -> usize {
        self.options_at(position).len()
    }

    /// The flight chosen by `index` at `position`; out-of-range is an error
    pub fn flight_at(&self, position: usize, index: usize) -> Result<&FlightOption> {
        let options = self.options_at(position);
        options.get(index).ok_or(ScheduleError::InvalidIndex {
            position,
            index,
            available: options.len(),
        })
    }

    /// Fails with `AssignmentLength` unless the assignment has one slot per leg
    pub fn check_shape(&self, assignment: &Assignment) -> Result<()> {
        if assignment.len() != self.slot_count() {
            return Err(ScheduleError::AssignmentLength {
                expected: self.slot_count(),
                actual: assignment.len(),
            });
        }
        Ok(())
    }
}
