pub mod coerce;
pub mod distance;
pub mod loader;
