// Text and JSON reporting of search outcomes

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::algorithms::cost::{cost_breakdown, CostBreakdown};
use crate::algorithms::SearchOutcome;
use crate::error::Result;
use crate::models::{Assignment, TripProblem};
use crate::utils::time::format_hhmm;

/// One line per strategy with the final cost to two decimals
pub fn format_summary(outcomes: &[SearchOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let _ = writeln!(out, "{}: {:.2}", outcome.strategy, outcome.cost);
    }
    out
}

/// Per-traveler flight times and prices for an assignment
pub fn format_itinerary(problem: &TripProblem, assignment: &Assignment) -> Result<String> {
    problem.check_shape(assignment)?;
    let mut out = String::new();

    for (i, traveler) in problem.travelers().iter().enumerate() {
        let outbound = problem.flight_at(i * 2, assignment.outbound(i))?;
        let inbound = problem.flight_at(i * 2 + 1, assignment.inbound(i))?;

        let _ = writeln!(
            out,
            "{}: out {}→{} ({}) | return {}→{} ({})",
            traveler.name,
            format_hhmm(outbound.departure),
            format_hhmm(outbound.arrival),
            outbound.price,
            format_hhmm(inbound.departure),
            format_hhmm(inbound.arrival),
            inbound.price
        );
    }

    Ok(out)
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
    breakdown: CostBreakdown,
}

/// Writes every outcome, with its cost breakdown, as pretty JSON
pub fn write_outcomes_json<P: AsRef<Path>>(
    path: P,
    problem: &TripProblem,
    outcomes: &[SearchOutcome],
) -> Result<()> {
    let records = outcomes
        .iter()
        .map(|outcome| -> Result<OutcomeRecord<'_>> {
            Ok(OutcomeRecord {
                outcome,
                breakdown: cost_breakdown(problem, &outcome.assignment)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), outcomes = outcomes.len(), "wrote results");
    Ok(())
}
