use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::orbital::OrbitalElementSet;
use crate::physics::units::KM_S_TO_AU_PER_DAY;

pub const EARTH_ID: &str = "earth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Asteroid,
    Spacecraft,
}

impl BodyKind {
    /// Reference bodies (Sun, planets, moons) are never risk-assessed.
    pub fn is_reference(&self) -> bool {
        matches!(self, BodyKind::Star | BodyKind::Planet | BodyKind::Moon)
    }
}

/// One body as delivered by the host. Read-only to the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "body_type")]
    pub kind: BodyKind,
    pub position: [f64; 3], // AU, ecliptic
    #[serde(default)]
    pub velocity: [f64; 3], // km/s
    #[serde(rename = "radius")]
    pub radius_km: f64,
    #[serde(default)]
    pub is_hazardous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<OrbitalElementSet>,
}

impl BodySnapshot {
    pub fn position(&self) -> Vector3<f64> {
        Vector3::from(self.position)
    }

    pub fn velocity_km_s(&self) -> Vector3<f64> {
        Vector3::from(self.velocity)
    }

    pub fn velocity_au_per_day(&self) -> Vector3<f64> {
        self.velocity_km_s() * KM_S_TO_AU_PER_DAY
    }

    pub fn speed_km_s(&self) -> f64 {
        self.velocity_km_s().norm()
    }
}

/// The full polled payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub bodies: Vec<BodySnapshot>,
    #[serde(default)]
    pub julian_date: f64,
}

impl SimulationSnapshot {
    pub fn find(&self, id: &str) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body(&self, id: &str) -> Result<&BodySnapshot> {
        self.find(id).ok_or_else(|| RiskError::BodyNotFound(id.to_string()))
    }

    pub fn earth(&self) -> Option<&BodySnapshot> {
        self.find(EARTH_ID)
    }

    /// Tracked small bodies, in snapshot order.
    pub fn tracked(&self) -> impl Iterator<Item = &BodySnapshot> {
        self.bodies.iter().filter(|b| !b.kind.is_reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PAYLOAD: &str = r#"{
        "julian_date": 2460000.5,
        "bodies": [
            {"id": "earth", "name": "Earth", "body_type": "Planet",
             "position": [0.98, 0.17, 0.0], "velocity": [-5.1, 29.3, 0.0],
             "radius": 6378.137},
            {"id": "2004mn4", "name": "99942 Apophis", "body_type": "Asteroid",
             "position": [1.05, 0.12, 0.01], "velocity": [-3.0, 28.0, 1.0],
             "radius": 0.185, "is_hazardous": true,
             "elements": {"semi_major_axis_au": 0.9224, "eccentricity": 0.1912,
                          "inclination_rad": 0.0583, "longitude_ascending_node_rad": 3.568,
                          "argument_perihelion_rad": 2.2096}},
            {"id": "x1", "name": "Unknown", "body_type": "Asteroid",
             "position": [2.0, 0.0, 0.0], "radius": 0.02}
        ]
    }"#;

    #[test]
    fn parses_host_payload() {
        let snap: SimulationSnapshot = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(snap.bodies.len(), 3);
        assert!(snap.earth().is_some());
        assert_eq!(snap.tracked().count(), 2);

        let apophis = snap.body("2004mn4").unwrap();
        assert!(apophis.is_hazardous);
        assert_relative_eq!(apophis.elements.unwrap().sma(), 0.9224);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let snap: SimulationSnapshot = serde_json::from_str(PAYLOAD).unwrap();
        let unknown = snap.body("x1").unwrap();
        assert!(unknown.elements.is_none());
        assert_eq!(unknown.velocity, [0.0, 0.0, 0.0]);
        assert!(!unknown.is_hazardous);
    }

    #[test]
    fn unknown_body_is_an_error() {
        let snap: SimulationSnapshot = serde_json::from_str(PAYLOAD).unwrap();
        assert!(matches!(snap.body("nope"), Err(RiskError::BodyNotFound(_))));
    }
}
