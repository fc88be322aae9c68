pub mod csv;
pub mod format;
pub mod json;

pub use format::{format_distance, format_energy, format_probability, DistanceUnit};
