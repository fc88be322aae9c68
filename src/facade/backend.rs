use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Monte Carlo impact analysis request for one body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloRequest {
    pub body_id: String,
    pub position_uncertainty_km: f64,
    pub velocity_uncertainty_m_s: f64,
    pub num_runs: u32,
    pub simulation_days: f64,
}

impl MonteCarloRequest {
    pub fn new(body_id: impl Into<String>, num_runs: u32) -> Self {
        Self {
            body_id: body_id.into(),
            position_uncertainty_km: 1_000.0,
            velocity_uncertainty_m_s: 1.0,
            num_runs,
            simulation_days: 365.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloOutcome {
    pub num_runs: u32,
    pub num_impacts: u32,
    pub impact_probability: f64,
    pub min_moid_km: f64,
}

/// Gravity-tractor deflection request for one body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GravityTractorRequest {
    pub body_id: String,
    pub spacecraft_mass_kg: f64,
    pub hover_distance_m: f64,
    pub duration_days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityTractorOutcome {
    pub delta_v_m_s: [f64; 3],
    pub estimated_deflection_time_days: f64,
}

/// The authoritative physics backend (N-body integrator, Monte Carlo sampler,
/// slow-push deflection models).
///
/// The kernel issues one call per request and owns no retry or timeout
/// logic; implementations decide how long a call may take.
pub trait ImpactBackend {
    fn monte_carlo(&self, request: &MonteCarloRequest) -> Result<MonteCarloOutcome>;

    fn gravity_tractor(&self, request: &GravityTractorRequest) -> Result<GravityTractorOutcome>;

    /// Human-readable name for logging.
    fn name(&self) -> &str {
        "unnamed"
    }
}
