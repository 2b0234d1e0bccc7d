pub mod charts;
pub mod flight_listing;
pub mod report;
pub mod time;
