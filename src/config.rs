//! Tunable constants of the risk kernel, with their defaults in one place.
//!
//! Every section deserializes with `#[serde(default)]`, so a TOML file only
//! needs to name the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{invalid, Result};
use crate::hazard::probability::DEFAULT_CAP;
use crate::orbital::{OrbitalElementSet, MOID_SAMPLES, PATH_SAMPLES};
use crate::physics::gravity::{
    JUPITER_MIN_SEPARATION, JUPITER_ORBIT_RADIUS, JUPITER_PERIOD_DAYS, SRP_COEFFICIENT,
};
use crate::physics::units::M_S_TO_AU_PER_DAY;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub sampling: SamplingConfig,
    pub projector: ProjectorConfig,
    pub fallback: FallbackConfig,
    pub hazard: HazardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub moid_samples: usize,
    pub path_samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            moid_samples: MOID_SAMPLES,
            path_samples: PATH_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    pub step_count: usize,
    pub dt_days: f64,
    /// m/s impulse -> AU/day velocity change.
    pub delta_v_scale: f64,
    pub srp_coefficient: f64,   // AU^3/day^2
    pub jupiter_radius_au: f64,
    pub jupiter_period_days: f64,
    pub jupiter_phase_rad: f64, // Jupiter's longitude at t = 0
    pub jupiter_min_separation_au: f64,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            step_count: 200,
            dt_days: 1.0,
            delta_v_scale: M_S_TO_AU_PER_DAY,
            srp_coefficient: SRP_COEFFICIENT,
            jupiter_radius_au: JUPITER_ORBIT_RADIUS,
            jupiter_period_days: JUPITER_PERIOD_DAYS,
            jupiter_phase_rad: 0.0,
            jupiter_min_separation_au: JUPITER_MIN_SEPARATION,
        }
    }
}

/// Values substituted when the snapshot lacks data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub elements: OrbitalElementSet,
    pub earth_orbit: OrbitalElementSet,
    pub earth_position_au: [f64; 3],
    pub earth_velocity_km_s: [f64; 3],
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            elements: OrbitalElementSet::FALLBACK,
            earth_orbit: OrbitalElementSet::EARTH,
            earth_position_au: [1.0, 0.0, 0.0],
            earth_velocity_km_s: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardConfig {
    pub probability_cap: f64,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            probability_cap: DEFAULT_CAP,
        }
    }
}

impl RiskConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: RiskConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject values that would put a kernel function outside its domain.
    pub fn validate(&self) -> Result<()> {
        if self.sampling.moid_samples == 0 || self.sampling.path_samples == 0 {
            return invalid("sample counts must be at least 1");
        }
        let p = &self.projector;
        if !(p.dt_days.is_finite() && p.dt_days > 0.0) {
            return invalid(format!("dt_days must be positive, got {}", p.dt_days));
        }
        if !(p.jupiter_period_days.is_finite() && p.jupiter_period_days > 0.0) {
            return invalid("jupiter_period_days must be positive");
        }
        let finite = [
            p.delta_v_scale,
            p.srp_coefficient,
            p.jupiter_radius_au,
            p.jupiter_phase_rad,
            p.jupiter_min_separation_au,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("projector constants must be finite");
        }
        let cap = self.hazard.probability_cap;
        if !(0.0..=1.0).contains(&cap) {
            return invalid(format!("probability_cap must lie in [0, 1], got {cap}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        let c = RiskConfig::default();
        c.validate().unwrap();
        assert_eq!(c.sampling.moid_samples, 72);
        assert_eq!(c.sampling.path_samples, 128);
        assert_eq!(c.projector.step_count, 200);
        assert_relative_eq!(c.projector.dt_days, 1.0);
        assert_relative_eq!(c.fallback.elements.sma(), 1.5);
        assert_relative_eq!(c.fallback.elements.ecc(), 0.2);
        assert_relative_eq!(c.hazard.probability_cap, 0.5);
    }

    #[test]
    fn partial_toml_overrides_only_named_values() {
        let c = RiskConfig::from_toml_str(
            r#"
            [sampling]
            moid_samples = 144

            [projector]
            dt_days = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(c.sampling.moid_samples, 144);
        assert_eq!(c.sampling.path_samples, 128);
        assert_relative_eq!(c.projector.dt_days, 0.5);
        assert_eq!(c.projector.step_count, 200);
    }

    #[test]
    fn fallback_elements_from_toml() {
        let c = RiskConfig::from_toml_str(
            r#"
            [fallback.elements]
            semi_major_axis_au = 2.0
            eccentricity = 0.1
            inclination_rad = 0.0
            longitude_ascending_node_rad = 0.0
            argument_perihelion_rad = 0.0
            "#,
        )
        .unwrap();
        assert_relative_eq!(c.fallback.elements.sma(), 2.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(RiskConfig::from_toml_str("[projector]\ndt_days = 0.0").is_err());
        assert!(RiskConfig::from_toml_str("[sampling]\nmoid_samples = 0").is_err());
        assert!(RiskConfig::from_toml_str("[hazard]\nprobability_cap = 2.0").is_err());
        assert!(RiskConfig::from_toml_str("[fallback.elements]\nsemi_major_axis_au = 1.0\neccentricity = 1.5\ninclination_rad = 0.0\nlongitude_ascending_node_rad = 0.0\nargument_perihelion_rad = 0.0").is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("risk.toml");
        std::fs::write(&path, "[hazard]\nprobability_cap = 0.25\n").unwrap();
        let c = RiskConfig::from_toml_file(&path).unwrap();
        assert_relative_eq!(c.hazard.probability_cap, 0.25);
    }
}
