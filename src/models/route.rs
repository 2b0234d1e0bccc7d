// Route model: a directed city pair used as the catalog key

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directed origin/destination pair. `LIS -> FCO` and `FCO -> LIS` are distinct routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    /// Creates a new route from two airport codes
    pub fn new<S: Into<String>, T: Into<String>>(origin: S, destination: T) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// The same city pair flown in the other direction
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_distinct() {
        let outbound = Route::new("LIS", "FCO");
        let inbound = outbound.reversed();

        assert_ne!(outbound, inbound);
        assert_eq!(inbound, Route::new("FCO", "LIS"));
        assert_eq!(inbound.reversed(), outbound);
    }
}
