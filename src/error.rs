// Error types shared by the catalog loader, the cost evaluator and the search strategies

use std::fmt;
use std::io;

/// Errors raised while building a problem or running a search
#[derive(Debug)]
pub enum ScheduleError {
    /// A traveler needs a route that has no flights in the catalog
    MissingRoute { origin: String, destination: String },

    /// An assignment points past the end of a route's option list
    InvalidIndex {
        position: usize,
        index: usize,
        available: usize,
    },

    /// An assignment does not hold exactly two slots per traveler
    AssignmentLength { expected: usize, actual: usize },

    /// Parameters that would make a search meaningless or non-terminating
    DegenerateConfiguration(String),

    /// A line of the flight listing could not be parsed
    Parse { line: usize, reason: String },

    /// The configuration file is not valid JSON for `SolverConfig`
    Config(String),

    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

impl ScheduleError {
    pub fn degenerate<S: Into<String>>(message: S) -> Self {
        ScheduleError::DegenerateConfiguration(message.into())
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::MissingRoute {
                origin,
                destination,
            } => write!(f, "No flights listed for route {} -> {}", origin, destination),
            ScheduleError::InvalidIndex {
                position,
                index,
                available,
            } => write!(
                f,
                "Assignment slot {} selects flight {} but only {} options exist",
                position, index, available
            ),
            ScheduleError::AssignmentLength { expected, actual } => write!(
                f,
                "Assignment has {} slots, expected {}",
                actual, expected
            ),
            ScheduleError::DegenerateConfiguration(message) => {
                write!(f, "Degenerate configuration: {}", message)
            }
            ScheduleError::Parse { line, reason } => {
                write!(f, "Malformed flight listing at line {}: {}", line, reason)
            }
            ScheduleError::Config(message) => write!(f, "Invalid configuration: {}", message),
            ScheduleError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ScheduleError {
    fn from(err: io::Error) -> Self {
        ScheduleError::Io(err)
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Config(err.to_string())
    }
}
