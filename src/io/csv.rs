use std::io::{self, Write};

use crate::orbital::SampledOrbit;
use crate::sim::TrajectoryPreview;

/// Write a trajectory preview as CSV.
///
/// Columns: step, t_days, x_au, y_au, z_au, r_au
pub fn write_preview<W: Write>(writer: &mut W, preview: &TrajectoryPreview) -> io::Result<()> {
    writeln!(writer, "step,t_days,x_au,y_au,z_au,r_au")?;

    for (i, p) in preview.positions().iter().enumerate() {
        writeln!(
            writer,
            "{},{:.3},{:.8},{:.8},{:.8},{:.8}",
            i,
            i as f64 * preview.dt_days(),
            p.x, p.y, p.z,
            p.norm(),
        )?;
    }

    Ok(())
}

/// Write a sampled orbit as CSV (columns: index, x_au, y_au, z_au).
pub fn write_orbit<W: Write>(writer: &mut W, orbit: &SampledOrbit) -> io::Result<()> {
    writeln!(writer, "index,x_au,y_au,z_au")?;
    for (i, p) in orbit.iter().enumerate() {
        writeln!(writer, "{},{:.8},{:.8},{:.8}", i, p.x, p.y, p.z)?;
    }
    Ok(())
}

/// Write a preview CSV to the given path.
pub fn write_preview_file(path: &str, preview: &TrajectoryPreview) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_preview(&mut file, preview)
}

/// Write a sampled orbit CSV to the given path.
pub fn write_orbit_file(path: &str, orbit: &SampledOrbit) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_orbit(&mut file, orbit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectorConfig;
    use crate::orbital::{sample, OrbitalElementSet};
    use crate::sim::TrajectoryProjector;
    use nalgebra::Vector3;

    #[test]
    fn preview_csv_has_header_and_rows() {
        let projector = TrajectoryProjector::new(ProjectorConfig {
            step_count: 3,
            ..ProjectorConfig::default()
        })
        .unwrap();
        let preview = projector
            .project(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 0.0172, 0.0), &Vector3::zeros())
            .unwrap();

        let mut buf = Vec::new();
        write_preview(&mut buf, &preview).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("step,"));
        assert_eq!(lines.len(), 4); // header + 3 rows
        assert!(lines[1].starts_with("0,0.000,1.00000000,"));
        assert!(lines[3].starts_with("2,2.000,"));
    }

    #[test]
    fn orbit_csv_row_count() {
        let orbit = sample(&OrbitalElementSet::EARTH, 8).unwrap();
        let mut buf = Vec::new();
        write_orbit(&mut buf, &orbit).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 10);
    }

    #[test]
    fn orbit_file_starts_at_perihelion() {
        let el = OrbitalElementSet::circular(2.0).unwrap();
        let orbit = sample(&el, 4).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orbit.csv");
        write_orbit_file(path.to_str().unwrap(), &orbit).unwrap();

        let output = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "index,x_au,y_au,z_au");
        assert_eq!(lines[1], "0,2.00000000,0.00000000,0.00000000");
        assert_eq!(lines.len(), 6);
    }
}
