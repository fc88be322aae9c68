//! Unit constants and boundary conversions.
//!
//! Positions are carried in AU and integrator velocities in AU/day. Snapshot
//! velocities arrive in km/s and impulses in m/s; both are converted here and
//! nowhere else.

pub const AU_KM: f64 = 149_597_870.7; // km per AU
pub const AU_M: f64 = AU_KM * 1000.0; // m per AU
pub const AU_TO_LD: f64 = 389.17; // lunar distances per AU
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const JOULES_PER_MEGATON: f64 = 4.184e15; // TNT equivalent

/// km/s -> AU/day
pub const KM_S_TO_AU_PER_DAY: f64 = SECONDS_PER_DAY / AU_KM;

/// m/s -> AU/day
pub const M_S_TO_AU_PER_DAY: f64 = SECONDS_PER_DAY / AU_M;

pub fn au_to_km(au: f64) -> f64 {
    au * AU_KM
}

pub fn au_to_lunar_distances(au: f64) -> f64 {
    au * AU_TO_LD
}

pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_au_in_km_and_ld() {
        assert_relative_eq!(au_to_km(1.0), 149_597_870.7);
        assert_relative_eq!(au_to_lunar_distances(1.0), 389.17);
    }

    #[test]
    fn earth_orbital_speed_in_au_per_day() {
        // ~29.78 km/s is ~0.0172 AU/day (the Gaussian constant)
        let v = 29.78 * KM_S_TO_AU_PER_DAY;
        assert!((v - 0.0172).abs() < 1e-4, "got {v}");
    }

    #[test]
    fn megaton_conversion() {
        assert_relative_eq!(joules_to_megatons(4.184e15), 1.0);
    }
}
