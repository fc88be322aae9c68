use serde::Serialize;

use super::elements::OrbitalElementSet;
use super::sampler::{sample, SampledOrbit};
use crate::error::Result;
use crate::physics::units;

/// Lower bound returned by the estimator; coincident grid points would
/// otherwise report exactly zero.
pub const MOID_FLOOR_AU: f64 = 1e-4;

/// Discretized minimum orbit intersection distance.
///
/// Always an upper bound on the continuous MOID (up to the floor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoidResult {
    pub distance_au: f64,
    pub sample_count: usize,
}

impl MoidResult {
    pub fn km(&self) -> f64 {
        units::au_to_km(self.distance_au)
    }

    pub fn lunar_distances(&self) -> f64 {
        units::au_to_lunar_distances(self.distance_au)
    }
}

/// Estimate the MOID between two orbits by an exhaustive scan over
/// `sample_count` true-anomaly samples of each.
///
/// Multiplying `sample_count` by an integer never raises the estimate, since
/// the finer grid contains every point of the coarser one. Other increases
/// of the count carry no such guarantee.
pub fn estimate(
    body: &OrbitalElementSet,
    other: &OrbitalElementSet,
    sample_count: usize,
) -> Result<MoidResult> {
    let a = sample(body, sample_count)?;
    let b = sample(other, sample_count)?;
    let distance_au = min_pairwise_distance(&a, &b).max(MOID_FLOOR_AU);

    log::debug!("MOID estimate {distance_au:.6} AU ({sample_count} samples)");

    Ok(MoidResult {
        distance_au,
        sample_count,
    })
}

/// MOID against the fixed Earth orbit.
pub fn estimate_against_earth(body: &OrbitalElementSet, sample_count: usize) -> Result<MoidResult> {
    estimate(body, &OrbitalElementSet::EARTH, sample_count)
}

/// Smallest distance between any point of `a` and any point of `b`.
pub fn min_pairwise_distance(a: &SampledOrbit, b: &SampledOrbit) -> f64 {
    let mut min_sq = f64::INFINITY;
    for p in a {
        for q in b {
            min_sq = min_sq.min((p - q).norm_squared());
        }
    }
    min_sq.sqrt()
}
