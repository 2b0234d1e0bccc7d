// Flight listing loader: builds a Catalog from `origin,destination,HH:MM,HH:MM,price` lines

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::info;

use crate::error::{Result, ScheduleError};
use crate::models::{Catalog, FlightOption, Price, Route};
use crate::utils::time::parse_hhmm;

/// Loads a flight listing file into a catalog
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = parse_catalog(io::BufReader::new(file))?;

    info!(
        path = %path.display(),
        routes = catalog.route_count(),
        flights = catalog.flight_count(),
        "loaded flight listing"
    );

    Ok(catalog)
}

/// Parses a listing from any buffered reader.
///
/// Blank lines are skipped. Any other line that does not hold exactly five
/// fields is rejected with its 1-based line number.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (route, flight) = parse_line(&line, i + 1)?;
        catalog.add_flight(route, flight);
    }

    Ok(catalog)
}

/// Parses a listing held in memory
pub fn parse_catalog_str(text: &str) -> Result<Catalog> {
    parse_catalog(text.as_bytes())
}

fn parse_line(line: &str, line_number: usize) -> Result<(Route, FlightOption)> {
    let malformed = |reason: String| ScheduleError::Parse {
        line: line_number,
        reason,
    };

    let parts: Vec<&str> = line.trim().split(',').map(|part| part.trim()).collect();
    if parts.len() != 5 {
        return Err(malformed(format!("expected 5 fields, found {}", parts.len())));
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err(malformed("empty airport code".to_string()));
    }

    let departure = parse_hhmm(parts[2]).map_err(malformed)?;
    let arrival = parse_hhmm(parts[3]).map_err(malformed)?;
    let price = parts[4]
        .parse::<Price>()
        .map_err(|_| malformed(format!("invalid price '{}'", parts[4])))?;

    Ok((
        Route::new(parts[0], parts[1]),
        FlightOption::new(departure, arrival, price),
    ))
}
