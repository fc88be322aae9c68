use nalgebra::Vector3;

use super::backend::{GravityTractorRequest, ImpactBackend, MonteCarloRequest};
use super::report::{ProbabilitySource, RiskReport};
use crate::body::BodySnapshot;
use crate::config::RiskConfig;
use crate::error::{invalid, Result, RiskError};
use crate::hazard::{classify, composition, heuristic_probability};
use crate::orbital::{self, OrbitalElementSet, SampledOrbit};
use crate::physics::closest_approach;
use crate::physics::units::KM_S_TO_AU_PER_DAY;
use crate::sim::{TrajectoryPreview, TrajectoryProjector};

/// Live distances below this are treated as this value.
const MIN_DISTANCE_AU: f64 = 1e-12;

// ---------------------------------------------------------------------------
// Facade over sampling, MOID, classification and projection
// ---------------------------------------------------------------------------

/// Entry point for the host application.
///
/// Holds the configuration and at most one selected body. Each `select`
/// replaces the previous selection wholesale.
#[derive(Debug, Clone)]
pub struct RiskAssessmentFacade {
    config: RiskConfig,
    projector: TrajectoryProjector,
    selected: Option<Selection>,
}

#[derive(Debug, Clone)]
struct Selection {
    body: BodySnapshot,
    report: RiskReport,
}

impl RiskAssessmentFacade {
    pub fn new(config: RiskConfig) -> Result<Self> {
        config.validate()?;
        let projector = TrajectoryProjector::new(config.projector.clone())?;
        Ok(Self {
            config,
            projector,
            selected: None,
        })
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Orbital elements for `body`, or the configured fallback set.
    pub fn elements_for(&self, body: &BodySnapshot) -> OrbitalElementSet {
        body.elements.unwrap_or_else(|| {
            log::warn!("{}: no orbital elements, using fallback set", body.id);
            self.config.fallback.elements
        })
    }

    /// Earth position (AU) and velocity (AU/day), falling back to the
    /// configured stand-in when no Earth snapshot is available.
    fn earth_state(&self, earth: Option<&BodySnapshot>) -> (Vector3<f64>, Vector3<f64>) {
        match earth {
            Some(e) => (e.position(), e.velocity_au_per_day()),
            None => {
                log::warn!("no Earth snapshot, using fallback position");
                let fb = &self.config.fallback;
                (
                    Vector3::from(fb.earth_position_au),
                    Vector3::from(fb.earth_velocity_km_s) * KM_S_TO_AU_PER_DAY,
                )
            }
        }
    }

    /// Compute a full report for `body` without touching the selection.
    pub fn assess(&self, body: &BodySnapshot, earth: Option<&BodySnapshot>) -> Result<RiskReport> {
        if !(body.radius_km.is_finite() && body.radius_km > 0.0) {
            return invalid(format!("{}: radius must be positive, got {}", body.id, body.radius_km));
        }

        let elements = self.elements_for(body);
        let sampling = &self.config.sampling;
        let orbit_path = orbital::sample(&elements, sampling.path_samples)?;
        let moid = orbital::estimate(&elements, &self.config.fallback.earth_orbit, sampling.moid_samples)?;

        let (earth_pos, earth_vel) = self.earth_state(earth);
        let body_pos = body.position();
        let body_vel = body.velocity_au_per_day();
        let distance_au = (body_pos - earth_pos).norm().max(MIN_DISTANCE_AU);
        let approach = closest_approach(&body_pos, &body_vel, &earth_pos, &earth_vel);

        let spectral_type = composition::spectral_type_for(&body.name);
        let mass_kg = composition::sphere_mass(body.radius_km, spectral_type.density());
        let kinetic_energy_j = composition::kinetic_energy(mass_kg, body.speed_km_s());

        let probability = heuristic_probability(
            distance_au,
            body.radius_km,
            body.is_hazardous,
            self.config.hazard.probability_cap,
        );
        let hazard = classify(probability, kinetic_energy_j, distance_au, body.radius_km)?;

        log::debug!(
            "{}: MOID {:.5} AU, distance {:.5} AU, p = {:.2e}, level {}",
            body.id,
            moid.distance_au,
            distance_au,
            probability,
            hazard.level
        );

        Ok(RiskReport {
            body_id: body.id.clone(),
            body_name: body.name.clone(),
            elements,
            orbit_path,
            moid,
            distance_au,
            approach,
            spectral_type,
            mass_kg,
            kinetic_energy_j,
            probability,
            probability_source: ProbabilitySource::Heuristic,
            hazard,
        })
    }

    /// Select `body`, replacing any previous selection.
    pub fn select(&mut self, body: &BodySnapshot, earth: Option<&BodySnapshot>) -> Result<&RiskReport> {
        let report = self.assess(body, earth)?;
        log::info!(
            "selected {} ({}): hazard level {} [{}]",
            body.name,
            body.id,
            report.hazard.level,
            report.hazard.band.name()
        );
        let selection = self.selected.insert(Selection {
            body: body.clone(),
            report,
        });
        Ok(&selection.report)
    }

    pub fn selected(&self) -> Option<&RiskReport> {
        self.selected.as_ref().map(|s| &s.report)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Preview the selected body's path after an impulse `delta_v_m_s`.
    pub fn apply_deflection(&self, delta_v_m_s: &Vector3<f64>) -> Result<TrajectoryPreview> {
        let selection = self.selected.as_ref().ok_or(RiskError::NoSelection)?;
        self.project(&selection.body, delta_v_m_s)
    }

    /// Preview any body's path after an impulse, ignoring the selection.
    pub fn project(&self, body: &BodySnapshot, delta_v_m_s: &Vector3<f64>) -> Result<TrajectoryPreview> {
        self.projector
            .project(&body.position(), &body.velocity_au_per_day(), delta_v_m_s)
    }

    /// Preview the selection after an ion beam pushing along `direction`
    /// with `thrust_m_s2` for `duration_s`, applied as the equivalent
    /// impulse `a t`.
    pub fn preview_ion_beam(
        &self,
        direction: &Vector3<f64>,
        thrust_m_s2: f64,
        duration_s: f64,
    ) -> Result<TrajectoryPreview> {
        let selection = self.selected.as_ref().ok_or(RiskError::NoSelection)?;
        let norm = direction.norm();
        if !(norm.is_finite() && norm > 0.0) {
            return invalid("ion beam direction must be a non-zero finite vector");
        }
        if !(thrust_m_s2.is_finite() && thrust_m_s2 >= 0.0) {
            return invalid(format!("ion beam thrust must be non-negative, got {thrust_m_s2}"));
        }
        if !(duration_s.is_finite() && duration_s >= 0.0) {
            return invalid(format!("ion beam duration must be non-negative, got {duration_s}"));
        }

        let delta_v = direction / norm * (thrust_m_s2 * duration_s);
        log::debug!(
            "{}: ion beam {:.3e} m/s^2 for {:.0} s, dv {:.4} m/s",
            selection.body.id,
            thrust_m_s2,
            duration_s,
            delta_v.norm()
        );
        self.project(&selection.body, &delta_v)
    }

    /// Drawn path of the Earth orbit used for MOID.
    pub fn earth_path(&self) -> Result<SampledOrbit> {
        orbital::sample(&self.config.fallback.earth_orbit, self.config.sampling.path_samples)
    }

    /// Replace the heuristic probability of the selection with a backend
    /// Monte Carlo result and reclassify.
    pub fn refine_with_backend(
        &mut self,
        backend: &dyn ImpactBackend,
        num_runs: u32,
    ) -> Result<&RiskReport> {
        let selection = self.selected.as_mut().ok_or(RiskError::NoSelection)?;
        let request = MonteCarloRequest::new(selection.body.id.clone(), num_runs);

        let outcome = backend.monte_carlo(&request).map_err(|e| {
            log::warn!("{} monte carlo failed for {}: {e}", backend.name(), request.body_id);
            e
        })?;
        let p = outcome.impact_probability;
        if !(0.0..=1.0).contains(&p) {
            return invalid(format!("backend returned probability {p}"));
        }

        let report = &mut selection.report;
        report.hazard = classify(p, report.kinetic_energy_j, report.distance_au, selection.body.radius_km)?;
        report.probability = p;
        report.probability_source = ProbabilitySource::MonteCarlo;
        log::info!(
            "{}: {} / {} impacts, level now {}",
            request.body_id,
            outcome.num_impacts,
            outcome.num_runs,
            report.hazard.level
        );
        Ok(report)
    }

    /// Ask the backend for a gravity-tractor impulse on the selection and
    /// preview its effect.
    pub fn preview_gravity_tractor(
        &self,
        backend: &dyn ImpactBackend,
        spacecraft_mass_kg: f64,
        hover_distance_m: f64,
        duration_days: f64,
    ) -> Result<TrajectoryPreview> {
        let selection = self.selected.as_ref().ok_or(RiskError::NoSelection)?;
        let request = GravityTractorRequest {
            body_id: selection.body.id.clone(),
            spacecraft_mass_kg,
            hover_distance_m,
            duration_days,
        };
        let outcome = backend.gravity_tractor(&request)?;
        log::debug!(
            "{}: tractor impulse {:?} m/s, deflection time {:.1} d",
            request.body_id,
            outcome.delta_v_m_s,
            outcome.estimated_deflection_time_days
        );
        self.project(&selection.body, &Vector3::from(outcome.delta_v_m_s))
    }
}

impl Default for RiskAssessmentFacade {
    fn default() -> Self {
        Self {
            config: RiskConfig::default(),
            projector: TrajectoryProjector::default(),
            selected: None,
        }
    }
}
