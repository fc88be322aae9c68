//! Built-in snapshot used by the CLI and the plot when no payload is given.

use super::snapshot::{BodyKind, BodySnapshot, SimulationSnapshot, EARTH_ID};
use crate::error::Result;
use crate::orbital::OrbitalElementSet;
use crate::physics::gravity::GM_SUN;
use crate::physics::units::KM_S_TO_AU_PER_DAY;

pub const J2000: f64 = 2_451_545.0;

fn placed(
    id: &str,
    name: &str,
    kind: BodyKind,
    radius_km: f64,
    is_hazardous: bool,
    elements: OrbitalElementSet,
    true_anomaly: f64,
) -> BodySnapshot {
    let (pos, vel) = elements.state_at(true_anomaly, GM_SUN);
    let vel_km_s = vel / KM_S_TO_AU_PER_DAY;
    BodySnapshot {
        id: id.into(),
        name: name.into(),
        kind,
        position: pos.into(),
        velocity: vel_km_s.into(),
        radius_km,
        is_hazardous,
        elements: Some(elements),
    }
}

/// Sun, Earth and a handful of well-known near-Earth and main-belt objects.
pub fn demo_snapshot() -> Result<SimulationSnapshot> {
    let apophis = OrbitalElementSet::new(
        0.9224,
        0.1912,
        3.339_f64.to_radians(),
        204.43_f64.to_radians(),
        126.60_f64.to_radians(),
    )?;
    let bennu = OrbitalElementSet::new(
        1.1264,
        0.2037,
        6.035_f64.to_radians(),
        2.061_f64.to_radians(),
        66.22_f64.to_radians(),
    )?;
    let ceres = OrbitalElementSet::new(
        2.7675,
        0.0785,
        10.59_f64.to_radians(),
        80.31_f64.to_radians(),
        73.60_f64.to_radians(),
    )?;

    let earth = placed(EARTH_ID, "Earth", BodyKind::Planet, 6_378.137, false, OrbitalElementSet::EARTH, 1.0);

    // no published elements: only a live state is known
    let unnamed = BodySnapshot {
        id: "2024-xd".into(),
        name: "2024 XD".into(),
        kind: BodyKind::Asteroid,
        position: [
            earth.position[0] + 0.004,
            earth.position[1] - 0.002,
            earth.position[2] + 0.0005,
        ],
        velocity: [earth.velocity[0] + 3.5, earth.velocity[1] - 1.2, 0.4],
        radius_km: 0.03,
        is_hazardous: false,
        elements: None,
    };

    Ok(SimulationSnapshot {
        julian_date: J2000,
        bodies: vec![
            BodySnapshot {
                id: "sun".into(),
                name: "Sun".into(),
                kind: BodyKind::Star,
                position: [0.0; 3],
                velocity: [0.0; 3],
                radius_km: 696_000.0,
                is_hazardous: false,
                elements: None,
            },
            earth,
            placed("2004mn4", "99942 Apophis", BodyKind::Asteroid, 0.185, true, apophis, 2.6),
            placed("101955", "101955 Bennu", BodyKind::Asteroid, 0.245, true, bennu, 4.0),
            placed("1", "1 Ceres", BodyKind::Asteroid, 469.7, false, ceres, 0.5),
            unnamed,
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn demo_snapshot_is_consistent() {
        let snap = demo_snapshot().unwrap();
        let earth = snap.earth().unwrap();
        assert_relative_eq!(earth.position().norm(), OrbitalElementSet::EARTH.radius_at(1.0), max_relative = 1e-12);
        // Earth's orbital speed ~29.8 km/s
        assert!((earth.speed_km_s() - 29.8).abs() < 0.6, "got {}", earth.speed_km_s());
        assert_eq!(snap.tracked().count(), 4);
    }

    #[test]
    fn survives_a_json_round_trip() {
        let snap = demo_snapshot().unwrap();
        let json = serde_json::to_string(&snap).unwrap();
        let back: SimulationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bodies.len(), snap.bodies.len());
        let a = back.body("2004mn4").unwrap().elements.unwrap();
        let b = snap.body("2004mn4").unwrap().elements.unwrap();
        assert_relative_eq!(a.sma(), b.sma(), max_relative = 1e-12);
        assert_relative_eq!(a.argp(), b.argp(), max_relative = 1e-12);
    }
}
