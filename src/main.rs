use std::path::PathBuf;

use clap::Parser;
use nalgebra::Vector3;

use neo_risk::body::presets;
use neo_risk::io::{self, format_distance, format_energy, format_probability, DistanceUnit};
use neo_risk::{RiskAssessmentFacade, RiskConfig, RiskError, RiskReport, TrajectoryPreview};

/// Assess the collision risk of a tracked body and preview a deflection.
#[derive(Debug, Parser)]
#[command(name = "neo-risk", version, about)]
struct Args {
    /// Host snapshot (JSON). Uses the built-in demo snapshot when omitted.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Body id to assess. Assesses every tracked body when omitted.
    #[arg(long)]
    body: Option<String>,

    /// TOML configuration overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deflection impulse in m/s as "x,y,z".
    #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
    delta_v: Option<Vector3<f64>>,

    /// Write the deflection preview to this CSV file.
    #[arg(long)]
    csv: Option<String>,

    /// Write the body's sampled orbit path to this CSV file.
    #[arg(long)]
    orbit_csv: Option<String>,

    /// Write the report to this JSON file.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Unit for displayed distances.
    #[arg(long, value_enum, default_value_t = DistanceUnit::Au)]
    unit: DistanceUnit,
}

fn parse_vector(s: &str) -> Result<Vector3<f64>, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("expected three components, got {}", parts.len())),
    }
}

fn main() -> Result<(), RiskError> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RiskConfig::from_toml_file(path)?,
        None => RiskConfig::default(),
    };
    let snapshot = match &args.snapshot {
        Some(path) => io::json::load_snapshot(path)?,
        None => presets::demo_snapshot()?,
    };
    log::info!("loaded {} bodies (JD {:.1})", snapshot.bodies.len(), snapshot.julian_date);

    let mut facade = RiskAssessmentFacade::new(config)?;
    let earth = snapshot.earth();

    let targets: Vec<_> = match &args.body {
        Some(id) => vec![snapshot.body(id)?],
        None => snapshot.tracked().collect(),
    };

    for body in targets {
        let report = facade.select(body, earth)?.clone();
        print_report(&report, args.unit);

        let preview = match &args.delta_v {
            Some(dv) => {
                let preview = facade.apply_deflection(dv)?;
                let ballistic = facade.apply_deflection(&Vector3::zeros())?;
                print_preview(&preview, &ballistic, dv, args.unit);
                Some(preview)
            }
            None => None,
        };

        if let (Some(path), Some(p)) = (&args.csv, &preview) {
            io::csv::write_preview_file(path, p)?;
            println!("  Preview written to {path}");
        }
        if let Some(path) = &args.orbit_csv {
            io::csv::write_orbit_file(path, &report.orbit_path)?;
            println!("  Orbit path written to {path}");
        }
        if let Some(path) = &args.json {
            io::json::write_report_file(path, &report, preview.as_ref())?;
            println!("  Report written to {}", path.display());
        }
    }

    Ok(())
}

fn print_report(r: &RiskReport, unit: DistanceUnit) {
    let el = &r.elements;
    println!();
    println!("====================================================================");
    println!("  RISK ASSESSMENT — {} ({})", r.body_name, r.body_id);
    println!("====================================================================");
    println!();
    println!("  Orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  a:        {:>8.4} AU     e:            {:>8.4}",
        el.sma(),
        el.ecc()
    );
    println!(
        "  i:        {:>8.3} deg    Node:         {:>8.3} deg",
        el.inc().to_degrees(),
        el.raan().to_degrees()
    );
    println!(
        "  Peri arg: {:>8.3} deg    q / Q:        {:.3} / {:.3} AU",
        el.argp().to_degrees(),
        el.perihelion(),
        el.aphelion()
    );
    println!(
        "  MOID:     {}  ({} samples)",
        format_distance(r.moid.distance_au, unit),
        r.moid.sample_count
    );
    println!();
    println!("  Encounter");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Distance to Earth:  {}", format_distance(r.distance_au, unit));
    println!(
        "  Closest approach:   {} in {:.1} d{}",
        format_distance(r.approach.min_distance_au, unit),
        r.approach.time_to_closest_days,
        if r.approach.within_threshold { "  [HAZARDOUS]" } else { "" }
    );
    println!(
        "  Composition:        {} ({:.0} kg/m^3), mass {:.3e} kg",
        r.spectral_type.label(),
        r.spectral_type.density(),
        r.mass_kg
    );
    println!("  Kinetic energy:     {}", format_energy(r.kinetic_energy_j));
    println!();
    println!("  Hazard");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Probability:        {} ({:?})",
        format_probability(r.probability),
        r.probability_source
    );
    println!(
        "  Level:              {} [{}]",
        r.hazard.level,
        r.hazard.band.name().to_uppercase()
    );
    println!("  {}", r.hazard.description);
    println!();
}

fn print_preview(
    preview: &TrajectoryPreview,
    ballistic: &TrajectoryPreview,
    dv: &Vector3<f64>,
    unit: DistanceUnit,
) {
    println!("  Deflection Preview");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Impulse:        [{:.3}, {:.3}, {:.3}] m/s  ({:.3} m/s)",
        dv.x,
        dv.y,
        dv.z,
        dv.norm()
    );
    println!(
        "  Horizon:        {} steps x {} d = {:.0} d",
        preview.len(),
        preview.dt_days(),
        preview.span_days()
    );
    let shift = (preview.end_position() - ballistic.end_position()).norm();
    println!("  End-point shift: {}", format_distance(shift, unit));
    if let Some(r_min) = preview.min_sun_distance() {
        println!("  Min Sun distance: {:.4} AU", r_min);
    }

    println!();
    println!("  {:>6}  {:>10}  {:>10}  {:>10}", "t (d)", "x (AU)", "y (AU)", "z (AU)");
    println!("  {}", "─".repeat(44));
    let sample_interval = (preview.len() / 10).max(1);
    for (i, p) in preview.positions().iter().enumerate() {
        if i % sample_interval != 0 && i != preview.len() - 1 {
            continue;
        }
        println!(
            "  {:>6.0}  {:>10.5}  {:>10.5}  {:>10.5}",
            i as f64 * preview.dt_days(),
            p.x,
            p.y,
            p.z
        );
    }
    println!("====================================================================");
    println!();
}
