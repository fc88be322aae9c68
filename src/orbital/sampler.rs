use nalgebra::Vector3;

use super::elements::OrbitalElementSet;
use crate::error::{invalid, Result};

/// Sample count used for MOID grids.
pub const MOID_SAMPLES: usize = 72;
/// Sample count used for drawn orbit paths.
pub const PATH_SAMPLES: usize = 128;

/// Closed polyline approximating an orbit, in AU (ecliptic frame).
///
/// Holds `sample_count + 1` points; the last one repeats the first angle so
/// the curve closes.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledOrbit {
    points: Vec<Vector3<f64>>,
}

impl SampledOrbit {
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector3<f64>> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a SampledOrbit {
    type Item = &'a Vector3<f64>;
    type IntoIter = std::slice::Iter<'a, Vector3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Sample an orbit at `sample_count` equal true-anomaly steps (inclusive end).
///
/// `theta_j = 2 pi j / n` for `j in 0..=n`; radius from the polar conic
/// equation, rotated with a single precomputed perifocal rotation.
pub fn sample(elements: &OrbitalElementSet, sample_count: usize) -> Result<SampledOrbit> {
    if sample_count == 0 {
        return invalid("sample count must be at least 1");
    }

    let rot = elements.rotation();
    let n = sample_count as f64;
    let points = (0..=sample_count)
        .map(|j| {
            let theta = std::f64::consts::TAU * j as f64 / n;
            let r = elements.radius_at(theta);
            rot.apply(r * theta.cos(), r * theta.sin())
        })
        .collect();

    Ok(SampledOrbit { points })
}

/// Decorative in-plane orbit from `(a, e)` alone, for bodies without elements.
pub fn sample_planar(sma: f64, ecc: f64, sample_count: usize) -> Result<SampledOrbit> {
    let elements = OrbitalElementSet::new(sma, ecc, 0.0, 0.0, 0.0)?;
    sample(&elements, sample_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circular_orbit_points_lie_on_radius() {
        let el = OrbitalElementSet::circular(2.5).unwrap();
        for n in [3, 7, 72, 128] {
            let orbit = sample(&el, n).unwrap();
            assert_eq!(orbit.len(), n + 1);
            for p in &orbit {
                assert_relative_eq!(p.norm(), 2.5, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn curve_closes() {
        let el = OrbitalElementSet::new(1.4, 0.3, 0.2, 0.5, 1.0).unwrap();
        let orbit = sample(&el, 72).unwrap();
        let first = orbit.points()[0];
        let last = orbit.points()[72];
        assert!((first - last).norm() < 1e-12);
    }

    #[test]
    fn first_point_is_perihelion() {
        let el = OrbitalElementSet::new(2.0, 0.4, 0.3, 1.0, 0.7).unwrap();
        let orbit = sample(&el, 36).unwrap();
        assert_relative_eq!(orbit.points()[0].norm(), el.perihelion(), max_relative = 1e-12);
        assert_relative_eq!(orbit.points()[18].norm(), el.aphelion(), max_relative = 1e-12);
    }

    #[test]
    fn zero_inclination_stays_in_plane() {
        let el = OrbitalElementSet::new(1.2, 0.1, 0.0, 0.9, 2.0).unwrap();
        let orbit = sample(&el, PATH_SAMPLES).unwrap();
        assert!(orbit.iter().all(|p| p.z.abs() < 1e-15));
    }

    #[test]
    fn repeated_sampling_is_identical() {
        let el = OrbitalElementSet::new(1.1, 0.19, 0.058, 3.55, 2.22).unwrap();
        let a = sample(&el, PATH_SAMPLES).unwrap();
        let b = sample(&el, PATH_SAMPLES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn planar_variant_matches_zero_orientation() {
        let planar = sample_planar(1.5, 0.2, 64).unwrap();
        let full = sample(&OrbitalElementSet::FALLBACK, 64).unwrap();
        assert_eq!(planar, full);
    }

    #[test]
    fn zero_samples_rejected() {
        let el = OrbitalElementSet::circular(1.0).unwrap();
        assert!(sample(&el, 0).is_err());
        assert!(sample_planar(1.0, 1.2, 10).is_err());
    }
}
