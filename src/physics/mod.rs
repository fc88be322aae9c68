pub mod approach;
pub mod gravity;
pub mod units;

pub use approach::{closest_approach, ClosestApproach};
