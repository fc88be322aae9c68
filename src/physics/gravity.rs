use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Heliocentric constants (AU, day)
// ---------------------------------------------------------------------------

pub const GM_SUN: f64 = 2.959_122_082_855_911e-4; // AU^3/day^2, Gaussian k^2
pub const SUN_JUPITER_MASS_RATIO: f64 = 1_047.348_6;
pub const GM_JUPITER: f64 = GM_SUN / SUN_JUPITER_MASS_RATIO; // AU^3/day^2

pub const JUPITER_ORBIT_RADIUS: f64 = 5.2; // AU, circular stand-in orbit
pub const JUPITER_PERIOD_DAYS: f64 = 4_332.59;
pub const JUPITER_MIN_SEPARATION: f64 = 0.1; // AU, term disabled inside this

pub const SRP_COEFFICIENT: f64 = 1.0e-9; // AU^3/day^2, radial outward

/// Solar point-mass gravity, `-GM r / |r|^3`.
pub fn solar_gravity(pos: &Vector3<f64>) -> Vector3<f64> {
    let r = pos.norm();
    if r < 1e-12 {
        return Vector3::zeros();
    }
    -GM_SUN / (r * r * r) * pos
}

/// Jupiter on a circular ecliptic orbit, `t_days` after the reference phase.
pub fn jupiter_position(t_days: f64, radius: f64, period_days: f64, phase: f64) -> Vector3<f64> {
    let angle = phase + std::f64::consts::TAU * t_days / period_days;
    Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// Direct pull toward Jupiter. Zero when closer than `min_separation`.
pub fn jupiter_perturbation(
    pos: &Vector3<f64>,
    jupiter: &Vector3<f64>,
    min_separation: f64,
) -> Vector3<f64> {
    let delta = jupiter - pos;
    let d = delta.norm();
    if d < min_separation {
        return Vector3::zeros();
    }
    GM_JUPITER / (d * d * d) * delta
}

/// Radial solar radiation pressure, `k / |r|^2` away from the Sun.
pub fn radiation_pressure(pos: &Vector3<f64>, coefficient: f64) -> Vector3<f64> {
    let r = pos.norm();
    if r < 1e-12 {
        return Vector3::zeros();
    }
    coefficient / (r * r) * (pos / r)
}
