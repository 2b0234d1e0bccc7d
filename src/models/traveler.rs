// Traveler model

use serde::{Deserialize, Serialize};

/// A person flying from their home city to the shared destination and back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveler {
    /// Display name used in reports
    pub name: String,

    /// Airport code of the home city
    pub origin: String,
}

impl Traveler {
    pub fn new<S: Into<String>, T: Into<String>>(name: S, origin: T) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
        }
    }
}
