use serde::Serialize;

use crate::hazard::{HazardAssessment, SpectralType};
use crate::orbital::{MoidResult, OrbitalElementSet, SampledOrbit};
use crate::physics::units::joules_to_megatons;
use crate::physics::ClosestApproach;

/// Where the impact probability of a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilitySource {
    Heuristic,
    MonteCarlo,
}

/// Everything computed for one selected body.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    pub body_id: String,
    pub body_name: String,
    pub elements: OrbitalElementSet,
    pub orbit_path: SampledOrbit,
    pub moid: MoidResult,
    pub distance_au: f64, // live distance to Earth
    pub approach: ClosestApproach,
    pub spectral_type: SpectralType,
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    pub probability: f64,
    pub probability_source: ProbabilitySource,
    pub hazard: HazardAssessment,
}

impl RiskReport {
    pub fn kinetic_energy_mt(&self) -> f64 {
        joules_to_megatons(self.kinetic_energy_j)
    }
}
