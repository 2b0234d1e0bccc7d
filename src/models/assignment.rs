// Assignment model: one outbound and one return flight choice per traveler

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Which half of the round trip a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Home city to the shared destination
    Outbound,
    /// Shared destination back home
    Return,
}

impl Leg {
    /// Even slots are outbound, odd slots are return
    pub fn of_position(position: usize) -> Self {
        if position % 2 == 0 {
            Leg::Outbound
        } else {
            Leg::Return
        }
    }
}

/// Flight choices for the whole group.
///
/// Slot `2 * i` holds traveler `i`'s outbound flight index and slot
/// `2 * i + 1` the return flight index. Cost is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn new(slots: Vec<usize>) -> Self {
        Self(slots)
    }

    /// Number of slots (twice the number of travelers)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn traveler_count(&self) -> usize {
        self.0.len() / 2
    }

    pub fn outbound(&self, traveler: usize) -> usize {
        self.0[traveler * 2]
    }

    pub fn inbound(&self, traveler: usize) -> usize {
        self.0[traveler * 2 + 1]
    }

    /// Replaces a single slot
    pub fn set(&mut self, position: usize, index: usize) {
        self.0[position] = index;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Prefix of `self` up to `point` followed by the suffix of `other` from `point`
    pub fn splice(&self, other: &Assignment, point: usize) -> Assignment {
        let mut slots = Vec::with_capacity(self.len());
        slots.extend_from_slice(&self.0[..point]);
        slots.extend_from_slice(&other.0[point..]);
        Assignment(slots)
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(slots: Vec<usize>) -> Self {
        Self(slots)
    }
}

impl Index<usize> for Assignment {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.0[position]
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
