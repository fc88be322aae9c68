//! Heuristic impact probability for a selected body.
//!
//! A stand-in for the backend Monte Carlo result: a base rate from the
//! hazardous flag, scaled by proximity and size factors, capped.

use super::classifier::{CLOSE_AU, LARGE_RADIUS_KM, MASSIVE_RADIUS_KM, VERY_CLOSE_AU, VERY_LARGE_RADIUS_KM};

pub const BASE_RATE_HAZARDOUS: f64 = 1e-4;
pub const BASE_RATE_ROUTINE: f64 = 1e-7;
pub const NEAR_AU: f64 = 0.2;
pub const DEFAULT_CAP: f64 = 0.5;

fn proximity_factor(distance_au: f64) -> f64 {
    if distance_au < VERY_CLOSE_AU {
        100.0
    } else if distance_au < CLOSE_AU {
        20.0
    } else if distance_au < NEAR_AU {
        5.0
    } else {
        1.0
    }
}

fn size_factor(radius_km: f64) -> f64 {
    if radius_km > MASSIVE_RADIUS_KM {
        10.0
    } else if radius_km > VERY_LARGE_RADIUS_KM {
        5.0
    } else if radius_km > LARGE_RADIUS_KM {
        2.0
    } else {
        1.0
    }
}

/// Probability in `[0, cap]`.
pub fn heuristic_probability(distance_au: f64, radius_km: f64, is_hazardous: bool, cap: f64) -> f64 {
    let base = if is_hazardous {
        BASE_RATE_HAZARDOUS
    } else {
        BASE_RATE_ROUTINE
    };
    (base * proximity_factor(distance_au) * size_factor(radius_km))
        .min(cap)
        .max(0.0)
}
