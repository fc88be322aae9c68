use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::body::SimulationSnapshot;
use crate::error::Result;
use crate::facade::{ProbabilitySource, RiskReport};
use crate::hazard::{SeverityBand, SpectralType};
use crate::orbital::OrbitalElementSet;
use crate::physics::ClosestApproach;
use crate::sim::TrajectoryPreview;

/// Parse a host snapshot payload.
pub fn read_snapshot<R: Read>(reader: R) -> Result<SimulationSnapshot> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<SimulationSnapshot> {
    let file = std::fs::File::open(path)?;
    read_snapshot(std::io::BufReader::new(file))
}

#[derive(Debug, Serialize)]
struct ReportRecord<'a> {
    body: BodyRecord<'a>,
    orbit: OrbitRecord,
    risk: RiskRecord<'a>,
    approach: &'a ClosestApproach,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<PreviewRecord>,
}

#[derive(Debug, Serialize)]
struct BodyRecord<'a> {
    id: &'a str,
    name: &'a str,
    spectral_type: SpectralType,
    mass_kg: f64,
    kinetic_energy_j: f64,
    kinetic_energy_mt: f64,
}

#[derive(Debug, Serialize)]
struct OrbitRecord {
    elements: OrbitalElementSet,
    moid_au: f64,
    moid_km: f64,
    moid_ld: f64,
    moid_samples: usize,
}

#[derive(Debug, Serialize)]
struct RiskRecord<'a> {
    distance_au: f64,
    probability: f64,
    probability_source: ProbabilitySource,
    level: u8,
    band: SeverityBand,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct PreviewRecord {
    dt_days: f64,
    positions_au: Vec<[f64; 3]>,
}

/// Write a risk report (and optionally a deflection preview) as JSON.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &RiskReport,
    preview: Option<&TrajectoryPreview>,
) -> Result<()> {
    let record = ReportRecord {
        body: BodyRecord {
            id: &report.body_id,
            name: &report.body_name,
            spectral_type: report.spectral_type,
            mass_kg: report.mass_kg,
            kinetic_energy_j: report.kinetic_energy_j,
            kinetic_energy_mt: report.kinetic_energy_mt(),
        },
        orbit: OrbitRecord {
            elements: report.elements,
            moid_au: report.moid.distance_au,
            moid_km: report.moid.km(),
            moid_ld: report.moid.lunar_distances(),
            moid_samples: report.moid.sample_count,
        },
        risk: RiskRecord {
            distance_au: report.distance_au,
            probability: report.probability,
            probability_source: report.probability_source,
            level: report.hazard.level,
            band: report.hazard.band,
            description: report.hazard.description,
        },
        approach: &report.approach,
        preview: preview.map(|p| PreviewRecord {
            dt_days: p.dt_days(),
            positions_au: p.positions().iter().map(|v| [v.x, v.y, v.z]).collect(),
        }),
    };

    serde_json::to_writer_pretty(&mut *writer, &record)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report_file<P: AsRef<Path>>(
    path: P,
    report: &RiskReport,
    preview: Option<&TrajectoryPreview>,
) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, report, preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::presets;
    use crate::facade::RiskAssessmentFacade;
    use nalgebra::Vector3;

    #[test]
    fn report_json_is_valid() {
        let snap = presets::demo_snapshot().unwrap();
        let facade = RiskAssessmentFacade::default();
        let report = facade.assess(snap.body("2004mn4").unwrap(), snap.earth()).unwrap();
        let preview = facade.project(snap.body("2004mn4").unwrap(), &Vector3::zeros()).unwrap();

        let mut buf = Vec::new();
        write_report(&mut buf, &report, Some(&preview)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["body"]["id"], "2004mn4");
        assert_eq!(value["risk"]["level"], report.hazard.level);
        assert_eq!(value["risk"]["probability_source"], "heuristic");
        assert_eq!(value["preview"]["positions_au"].as_array().unwrap().len(), 200);
        assert!(value["orbit"]["elements"]["semi_major_axis_au"].is_number());
    }

    #[test]
    fn snapshot_file_round_trip() {
        let snap = presets::demo_snapshot().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, serde_json::to_string(&snap).unwrap()).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.bodies.len(), snap.bodies.len());
        assert!(loaded.earth().is_some());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(read_snapshot("{\"bodies\": 3}".as_bytes()).is_err());
    }
}
