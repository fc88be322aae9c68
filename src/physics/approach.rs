use nalgebra::Vector3;

/// Below this miss distance an approach is reported as hazardous.
pub const HAZARD_APPROACH_AU: f64 = 0.05; // 7.5 million km

/// Straight-line closest-approach estimate between a body and Earth.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClosestApproach {
    pub min_distance_au: f64,
    pub time_to_closest_days: f64, // 0 when already receding
    pub within_threshold: bool,
}

/// Estimate the closest approach assuming unaccelerated relative motion.
///
/// Positions in AU, velocities in AU/day.
pub fn closest_approach(
    body_pos: &Vector3<f64>,
    body_vel: &Vector3<f64>,
    earth_pos: &Vector3<f64>,
    earth_vel: &Vector3<f64>,
) -> ClosestApproach {
    let r = body_pos - earth_pos;
    let v = body_vel - earth_vel;
    let v2 = v.norm_squared();

    let t = if v2 > 1e-20 { -r.dot(&v) / v2 } else { 0.0 };

    let (min_distance_au, time_to_closest_days) = if t > 0.0 {
        ((r + v * t).norm(), t)
    } else {
        (r.norm(), 0.0)
    };

    ClosestApproach {
        min_distance_au,
        time_to_closest_days,
        within_threshold: min_distance_au < HAZARD_APPROACH_AU,
    }
}
