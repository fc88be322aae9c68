use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{invalid, Result, RiskError};

/// Shape and orientation of a heliocentric elliptical orbit.
///
/// Only elliptical orbits (`0 <= e < 1`) can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementsRecord", into = "ElementsRecord")]
pub struct OrbitalElementSet {
    sma: f64,  // semi-major axis, AU
    ecc: f64,  // eccentricity
    inc: f64,  // inclination, rad
    raan: f64, // longitude of ascending node, rad
    argp: f64, // argument of perihelion, rad
}

impl OrbitalElementSet {
    /// Earth's orbit as used for MOID: a = 1 AU, e = 0.0167, argp = 102.9 deg.
    pub const EARTH: OrbitalElementSet = OrbitalElementSet {
        sma: 1.0,
        ecc: 0.0167,
        inc: 0.0,
        raan: 0.0,
        argp: 102.9 * std::f64::consts::PI / 180.0,
    };

    /// Stand-in for bodies whose snapshot carries no elements.
    pub const FALLBACK: OrbitalElementSet = OrbitalElementSet {
        sma: 1.5,
        ecc: 0.2,
        inc: 0.0,
        raan: 0.0,
        argp: 0.0,
    };

    pub fn new(sma: f64, ecc: f64, inc: f64, raan: f64, argp: f64) -> Result<Self> {
        if !(sma.is_finite() && sma > 0.0) {
            return invalid(format!("semi-major axis must be positive, got {sma}"));
        }
        if !(ecc.is_finite() && (0.0..1.0).contains(&ecc)) {
            return invalid(format!("eccentricity must lie in [0, 1), got {ecc}"));
        }
        if !(inc.is_finite() && raan.is_finite() && argp.is_finite()) {
            return invalid("orientation angles must be finite");
        }
        Ok(Self { sma, ecc, inc, raan, argp })
    }

    /// Circular orbit in the reference plane.
    pub fn circular(radius: f64) -> Result<Self> {
        Self::new(radius, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn sma(&self) -> f64 {
        self.sma
    }

    pub fn ecc(&self) -> f64 {
        self.ecc
    }

    pub fn inc(&self) -> f64 {
        self.inc
    }

    pub fn raan(&self) -> f64 {
        self.raan
    }

    pub fn argp(&self) -> f64 {
        self.argp
    }

    /// Semi-latus rectum `a(1 - e^2)`, AU.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.sma * (1.0 - self.ecc * self.ecc)
    }

    /// Heliocentric distance at true anomaly `nu`, from the polar conic equation.
    pub fn radius_at(&self, nu: f64) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.ecc * nu.cos())
    }

    pub fn perihelion(&self) -> f64 {
        self.sma * (1.0 - self.ecc)
    }

    pub fn aphelion(&self) -> f64 {
        self.sma * (1.0 + self.ecc)
    }

    pub fn rotation(&self) -> PerifocalRotation {
        PerifocalRotation::from_elements(self)
    }

    /// Heliocentric position (AU) and velocity (AU/day) at true anomaly `nu`.
    pub fn state_at(&self, nu: f64, mu: f64) -> (Vector3<f64>, Vector3<f64>) {
        let p = self.semi_latus_rectum();
        let r = self.radius_at(nu);
        let (sin_nu, cos_nu) = nu.sin_cos();
        let sqrt_mu_p = (mu / p).sqrt();

        let rot = self.rotation();
        let pos = rot.apply(r * cos_nu, r * sin_nu);
        let vel = rot.apply(-sqrt_mu_p * sin_nu, sqrt_mu_p * (self.ecc + cos_nu));
        (pos, vel)
    }
}

// ---------------------------------------------------------------------------
// Perifocal -> ecliptic rotation, R = Rz(raan) Rx(inc) Rz(argp)
// ---------------------------------------------------------------------------

/// Perifocal-to-ecliptic rotation with entries precomputed from the elements.
///
/// The six trig values are evaluated once here and reused for every point of
/// an orbit. Perifocal points have `z = 0`, so `apply` only touches the first
/// two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerifocalRotation {
    r11: f64,
    r12: f64,
    r21: f64,
    r22: f64,
    r31: f64,
    r32: f64,
    r13: f64,
    r23: f64,
    r33: f64,
}

impl PerifocalRotation {
    pub fn from_elements(el: &OrbitalElementSet) -> Self {
        let (sin_raan, cos_raan) = el.raan.sin_cos();
        let (sin_inc, cos_inc) = el.inc.sin_cos();
        let (sin_argp, cos_argp) = el.argp.sin_cos();

        PerifocalRotation {
            r11: cos_raan * cos_argp - sin_raan * sin_argp * cos_inc,
            r12: -cos_raan * sin_argp - sin_raan * cos_argp * cos_inc,
            r21: sin_raan * cos_argp + cos_raan * sin_argp * cos_inc,
            r22: -sin_raan * sin_argp + cos_raan * cos_argp * cos_inc,
            r31: sin_argp * sin_inc,
            r32: cos_argp * sin_inc,
            r13: sin_raan * sin_inc,
            r23: -cos_raan * sin_inc,
            r33: cos_inc,
        }
    }

    /// Rotate the perifocal point `(x, y, 0)` into the ecliptic frame.
    pub fn apply(&self, x: f64, y: f64) -> Vector3<f64> {
        Vector3::new(
            self.r11 * x + self.r12 * y,
            self.r21 * x + self.r22 * y,
            self.r31 * x + self.r32 * y,
        )
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.r11, self.r12, self.r13,
            self.r21, self.r22, self.r23,
            self.r31, self.r32, self.r33,
        )
    }
}

// ---------------------------------------------------------------------------
// Snapshot wire form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ElementsRecord {
    semi_major_axis_au: f64,
    eccentricity: f64,
    inclination_rad: f64,
    longitude_ascending_node_rad: f64,
    argument_perihelion_rad: f64,
}

impl TryFrom<ElementsRecord> for OrbitalElementSet {
    type Error = RiskError;

    fn try_from(r: ElementsRecord) -> Result<Self> {
        OrbitalElementSet::new(
            r.semi_major_axis_au,
            r.eccentricity,
            r.inclination_rad,
            r.longitude_ascending_node_rad,
            r.argument_perihelion_rad,
        )
    }
}

impl From<OrbitalElementSet> for ElementsRecord {
    fn from(el: OrbitalElementSet) -> Self {
        ElementsRecord {
            semi_major_axis_au: el.sma,
            eccentricity: el.ecc,
            inclination_rad: el.inc,
            longitude_ascending_node_rad: el.raan,
            argument_perihelion_rad: el.argp,
        }
    }
}
