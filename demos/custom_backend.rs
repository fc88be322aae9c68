use nalgebra::Vector3;

use neo_risk::body::presets;
use neo_risk::facade::{
    GravityTractorOutcome, GravityTractorRequest, ImpactBackend, MonteCarloOutcome, MonteCarloRequest,
};
use neo_risk::{Result, RiskAssessmentFacade, RiskConfig};

const G: f64 = 6.674_30e-11; // m^3 kg^-1 s^-2

/// A toy backend: a fixed impact fraction for Monte Carlo and the
/// textbook constant-pull model for a hovering tractor.
struct AnalyticBackend {
    impact_fraction: f64,
}

impl ImpactBackend for AnalyticBackend {
    fn monte_carlo(&self, request: &MonteCarloRequest) -> Result<MonteCarloOutcome> {
        let num_impacts = (self.impact_fraction * request.num_runs as f64).round() as u32;
        Ok(MonteCarloOutcome {
            num_runs: request.num_runs,
            num_impacts,
            impact_probability: num_impacts as f64 / request.num_runs.max(1) as f64,
            min_moid_km: 0.0,
        })
    }

    fn gravity_tractor(&self, request: &GravityTractorRequest) -> Result<GravityTractorOutcome> {
        let accel = G * request.spacecraft_mass_kg / request.hover_distance_m.powi(2);
        let dv = accel * request.duration_days * 86_400.0;
        Ok(GravityTractorOutcome {
            delta_v_m_s: [0.0, dv, 0.0],
            estimated_deflection_time_days: request.duration_days,
        })
    }

    fn name(&self) -> &str {
        "Analytic"
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let snapshot = presets::demo_snapshot()?;
    let mut facade = RiskAssessmentFacade::new(RiskConfig::default())?;
    let backend = AnalyticBackend { impact_fraction: 0.003 };

    let body = snapshot.body("2004mn4")?;
    let before = facade.select(body, snapshot.earth())?.hazard.level;
    let after = facade.refine_with_backend(&backend, 10_000)?;
    println!("Backend: {}", backend.name());
    println!("{}: level {} -> {} (p = {:.2e})", after.body_name, before, after.hazard.level, after.probability);

    let ballistic = facade.apply_deflection(&Vector3::zeros())?;
    let tractor = facade.preview_gravity_tractor(&backend, 20_000.0, 200.0, 3650.0)?;
    let shift_km = (tractor.end_position() - ballistic.end_position()).norm() * neo_risk::physics::units::AU_KM;
    println!("Tractor end-point shift after {:.0} d: {:.1} km", tractor.span_days(), shift_km);

    Ok(())
}
