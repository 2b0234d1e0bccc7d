// Flight option model representing one scheduled flight on a route

use crate::models::{Minutes, Price};
use crate::utils::time::format_hhmm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scheduled flight that a traveler can book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOption {
    /// Departure time in minutes since midnight
    pub departure: Minutes,

    /// Arrival time in minutes since midnight (same day, no wraparound)
    pub arrival: Minutes,

    /// Ticket price in whole currency units
    pub price: Price,
}

impl FlightOption {
    /// Creates a new flight option
    pub fn new(departure: Minutes, arrival: Minutes, price: Price) -> Self {
        Self {
            departure,
            arrival,
            price,
        }
    }
}

impl fmt::Display for FlightOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}→{} ({})",
            format_hhmm(self.departure),
            format_hhmm(self.arrival),
            self.price
        )
    }
}
