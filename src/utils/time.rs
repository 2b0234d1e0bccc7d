// Clock time helpers for the HH:MM fields of the flight listing

use crate::models::Minutes;

/// Parses `HH:MM` into minutes since midnight
pub fn parse_hhmm(text: &str) -> Result<Minutes, String> {
    let (hours, minutes) = text
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got '{}'", text))?;

    let hours: Minutes = hours
        .parse()
        .map_err(|_| format!("invalid hour in '{}'", text))?;
    let minutes: Minutes = minutes
        .parse()
        .map_err(|_| format!("invalid minute in '{}'", text))?;

    if hours > 23 || minutes > 59 {
        return Err(format!("time out of range: '{}'", text));
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded `HH:MM`
pub fn format_hhmm(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
