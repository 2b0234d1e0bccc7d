// Shared assignment utilities: random construction and the one-slot neighbor move

use rand::Rng;

use crate::error::Result;
use crate::models::{Assignment, TripProblem};

/// Draws every slot independently and uniformly from its valid range
pub fn random_assignment<R: Rng + ?Sized>(problem: &TripProblem, rng: &mut R) -> Assignment {
    let slots = (0..problem.slot_count())
        .map(|position| rng.gen_range(0..problem.option_count(position)))
        .collect();
    Assignment::new(slots)
}

/// Returns a copy of `assignment` with one uniformly chosen slot redrawn
/// uniformly from that slot's option list.
///
/// Every strategy generates its moves through this function. On a route with a
/// single flight the redraw can only pick index 0, so the move is a no-op.
/// An assignment shaped for a different group is rejected.
pub fn mutate_one_field<R: Rng + ?Sized>(
    problem: &TripProblem,
    assignment: &Assignment,
    rng: &mut R,
) -> Result<Assignment> {
    problem.check_shape(assignment)?;
    let mut neighbor = assignment.clone();
    let position = rng.gen_range(0..neighbor.len());
    neighbor.set(position, rng.gen_range(0..problem.option_count(position)));
    Ok(neighbor)
}
