use nalgebra::Vector3;

use super::integrator::{euler_step, HelioState};
use crate::config::ProjectorConfig;
use crate::error::{invalid, Result};
use crate::physics::gravity::{
    jupiter_perturbation, jupiter_position, radiation_pressure, solar_gravity,
};

/// Positions produced by one projection run, in AU.
///
/// Holds exactly `step_count` samples, the first being the starting position.
/// A preview is consumed once; a new one needs a fresh run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPreview {
    positions: Vec<Vector3<f64>>,
    end_position: Vector3<f64>,
    dt_days: f64,
}

impl TrajectoryPreview {
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position after the final integration step (not part of the samples).
    pub fn end_position(&self) -> Vector3<f64> {
        self.end_position
    }

    pub fn dt_days(&self) -> f64 {
        self.dt_days
    }

    pub fn span_days(&self) -> f64 {
        self.dt_days * self.positions.len() as f64
    }

    /// Smallest heliocentric distance over the samples.
    pub fn min_sun_distance(&self) -> Option<f64> {
        self.positions.iter().map(|p| p.norm()).reduce(f64::min)
    }
}

impl IntoIterator for TrajectoryPreview {
    type Item = Vector3<f64>;
    type IntoIter = std::vec::IntoIter<Vector3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

/// Short-horizon heliocentric projector: Sun + Jupiter + radiation pressure,
/// integrated with forward Euler.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryProjector {
    config: ProjectorConfig,
}

impl TrajectoryProjector {
    pub fn new(config: ProjectorConfig) -> Result<Self> {
        if !(config.dt_days.is_finite() && config.dt_days > 0.0) {
            return invalid(format!("dt_days must be positive, got {}", config.dt_days));
        }
        if !(config.jupiter_period_days.is_finite() && config.jupiter_period_days > 0.0) {
            return invalid("jupiter_period_days must be positive");
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Total acceleration at `pos`, `t_days` after the projection start.
    pub fn acceleration(&self, pos: &Vector3<f64>, t_days: f64) -> Vector3<f64> {
        let c = &self.config;
        let jupiter = jupiter_position(t_days, c.jupiter_radius_au, c.jupiter_period_days, c.jupiter_phase_rad);
        solar_gravity(pos)
            + jupiter_perturbation(pos, &jupiter, c.jupiter_min_separation_au)
            + radiation_pressure(pos, c.srp_coefficient)
    }

    /// Project from `pos` (AU) and `vel` (AU/day) after an impulse `delta_v`
    /// given in m/s and scaled by `delta_v_scale`.
    pub fn project(
        &self,
        pos: &Vector3<f64>,
        vel: &Vector3<f64>,
        delta_v: &Vector3<f64>,
    ) -> Result<TrajectoryPreview> {
        if !(all_finite(pos) && all_finite(vel) && all_finite(delta_v)) {
            return invalid("projection inputs must be finite");
        }

        let dt = self.config.dt_days;
        let steps = self.config.step_count;
        let accel = |p: &Vector3<f64>, t: f64| self.acceleration(p, t);

        let mut state = HelioState {
            time: 0.0,
            pos: *pos,
            vel: vel + delta_v * self.config.delta_v_scale,
        };
        let mut positions = Vec::with_capacity(steps);

        for _ in 0..steps {
            positions.push(state.pos);
            state = euler_step(&state, dt, &accel);
        }

        log::debug!(
            "projected {} steps of {} d, end at {:.4} AU from the Sun",
            steps,
            dt,
            state.pos.norm()
        );

        Ok(TrajectoryPreview {
            positions,
            end_position: state.pos,
            dt_days: dt,
        })
    }
}

fn all_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::gravity::GM_SUN;
    use approx::assert_relative_eq;

    fn projector(step_count: usize) -> TrajectoryProjector {
        TrajectoryProjector::new(ProjectorConfig {
            step_count,
            ..ProjectorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn produces_exactly_step_count_samples() {
        let p = projector(200);
        let preview = p
            .project(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 0.0172, 0.0), &Vector3::zeros())
            .unwrap();
        assert_eq!(preview.len(), 200);
        assert_eq!(preview.positions()[0], Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(preview.span_days(), 200.0);
        assert_eq!(preview.into_iter().count(), 200);
    }

    #[test]
    fn single_step_is_one_euler_update() {
        let p = projector(1);
        let pos = Vector3::new(30.0, 0.0, 0.0);
        let vel = Vector3::new(0.0, 0.003, 0.0);
        let preview = p.project(&pos, &vel, &Vector3::zeros()).unwrap();
        assert_eq!(preview.positions(), &[pos]);
        assert_relative_eq!(preview.end_position(), pos + vel * 1.0, epsilon = 1e-15);
    }

    #[test]
    fn circular_orbit_stays_near_one_au() {
        let p = projector(200);
        let preview = p
            .project(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, GM_SUN.sqrt(), 0.0), &Vector3::zeros())
            .unwrap();
        // forward Euler spirals outward slowly
        for pos in preview.positions() {
            let r = pos.norm();
            assert!(r > 0.99 && r < 1.08, "radius drifted to {r}");
        }
        let r_first = preview.positions()[0].norm();
        let r_last = preview.positions()[199].norm();
        assert!(r_last > r_first, "expected outward drift, {r_first} -> {r_last}");
    }

    #[test]
    fn impulse_is_scaled_from_m_s_to_au_per_day() {
        let p = projector(1);
        let pos = Vector3::new(30.0, 0.0, 0.0);
        let preview = p
            .project(&pos, &Vector3::zeros(), &Vector3::new(0.0, 1000.0, 0.0))
            .unwrap();
        let expected = 1000.0 * 86_400.0 / 1.495_978_707e11;
        assert_relative_eq!(preview.end_position().y, expected, max_relative = 1e-12);
        assert_eq!(preview.end_position().z, 0.0);
    }

    #[test]
    fn impulse_changes_the_path() {
        let p = projector(200);
        let pos = Vector3::new(1.1, 0.0, 0.0);
        let vel = Vector3::new(0.0, 0.016, 0.0);
        let base = p.project(&pos, &vel, &Vector3::zeros()).unwrap();
        let pushed = p.project(&pos, &vel, &Vector3::new(0.0, 10.0, 0.0)).unwrap();
        assert_eq!(base.positions()[0], pushed.positions()[0]);
        let drift = (base.end_position() - pushed.end_position()).norm();
        assert!(drift > 1e-4, "10 m/s over 200 d should be visible, got {drift}");
    }

    #[test]
    fn jupiter_term_contributes() {
        let pos = Vector3::new(4.0, 0.0, 0.0);
        let with = TrajectoryProjector::default().acceleration(&pos, 0.0);
        let without = TrajectoryProjector::new(ProjectorConfig {
            jupiter_min_separation_au: 100.0,
            ..ProjectorConfig::default()
        })
        .unwrap()
        .acceleration(&pos, 0.0);
        // Jupiter sits at (5.2, 0, 0) at t = 0
        assert!(with.x > without.x);
    }

    #[test]
    fn rejects_bad_configuration_and_inputs() {
        assert!(TrajectoryProjector::new(ProjectorConfig {
            dt_days: 0.0,
            ..ProjectorConfig::default()
        })
        .is_err());
        let p = TrajectoryProjector::default();
        let nan = Vector3::new(f64::NAN, 0.0, 0.0);
        assert!(p.project(&nan, &Vector3::zeros(), &Vector3::zeros()).is_err());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let p = TrajectoryProjector::default();
        let pos = Vector3::new(0.9, 0.3, 0.05);
        let vel = Vector3::new(-0.005, 0.015, 0.0);
        let dv = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(p.project(&pos, &vel, &dv).unwrap(), p.project(&pos, &vel, &dv).unwrap());
    }
}
