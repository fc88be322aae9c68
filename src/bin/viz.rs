use eframe::egui;
use egui_plot::{Legend, Line, Plot, Points};
use nalgebra::Vector3;

use neo_risk::body::presets;
use neo_risk::io::json::load_snapshot;
use neo_risk::{BodySnapshot, RiskAssessmentFacade, RiskConfig, RiskError, RiskReport, SampledOrbit, TrajectoryPreview};

fn main() -> eframe::Result {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args.next();
    let body_id = args.next();

    let app = match RiskViz::load(snapshot_path.as_deref(), body_id.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("NEO Risk Preview", options, Box::new(|_| Ok(Box::new(app))))
}

struct RiskViz {
    facade: RiskAssessmentFacade,
    body: BodySnapshot,
    report: RiskReport,
    earth_path: SampledOrbit,
    ballistic: TrajectoryPreview,
    deflected: TrajectoryPreview,
    dv_along_track: f64, // m/s
}

impl RiskViz {
    fn load(snapshot_path: Option<&str>, body_id: Option<&str>) -> Result<Self, RiskError> {
        let snapshot = match snapshot_path {
            Some(path) => load_snapshot(path)?,
            None => presets::demo_snapshot()?,
        };
        let body = match body_id {
            Some(id) => snapshot.body(id)?.clone(),
            None => snapshot
                .tracked()
                .next()
                .cloned()
                .ok_or_else(|| RiskError::BodyNotFound("<any tracked body>".into()))?,
        };

        let mut facade = RiskAssessmentFacade::new(RiskConfig::default())?;
        let report = facade.select(&body, snapshot.earth())?.clone();
        let earth_path = facade.earth_path()?;
        let ballistic = facade.apply_deflection(&Vector3::zeros())?;
        let deflected = ballistic.clone();

        Ok(Self {
            facade,
            body,
            report,
            earth_path,
            ballistic,
            deflected,
            dv_along_track: 0.0,
        })
    }

    fn refresh_preview(&mut self) {
        let vel = self.body.velocity_km_s();
        let dir = if vel.norm() > 0.0 { vel.normalize() } else { Vector3::x() };
        match self.facade.apply_deflection(&(dir * self.dv_along_track)) {
            Ok(preview) => self.deflected = preview,
            Err(e) => log::warn!("preview failed: {e}"),
        }
    }
}

fn xy_points<'a>(points: impl Iterator<Item = &'a Vector3<f64>>) -> Vec<[f64; 2]> {
    points.map(|p| [p.x, p.y]).collect()
}

impl eframe::App for RiskViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let r = &self.report;
            ui.heading(format!("{} ({})", r.body_name, r.body_id));
            ui.label(format!(
                "MOID: {:.4} AU ({:.1} LD)  |  Distance: {:.4} AU  |  Hazard level {} [{}]",
                r.moid.distance_au,
                r.moid.lunar_distances(),
                r.distance_au,
                r.hazard.level,
                r.hazard.band.name(),
            ));
            ui.label(r.hazard.description);

            let before = self.dv_along_track;
            ui.add(egui::Slider::new(&mut self.dv_along_track, -50.0..=50.0).text("Along-track dv (m/s)"));
            if self.dv_along_track != before {
                self.refresh_preview();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Ecliptic plane view
                ui.vertical(|ui| {
                    ui.label("Ecliptic plane (AU)");
                    Plot::new("ecliptic")
                        .width(half_w)
                        .height(available.y)
                        .data_aspect(1.0)
                        .legend(Legend::default())
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Earth orbit", xy_points(self.earth_path.iter())));
                            plot_ui.line(Line::new("Body orbit", xy_points(self.report.orbit_path.iter())));
                            plot_ui.line(Line::new("Ballistic", xy_points(self.ballistic.positions().iter())));
                            plot_ui.line(Line::new("Deflected", xy_points(self.deflected.positions().iter())));
                            plot_ui.points(Points::new("Sun", vec![[0.0, 0.0]]).radius(4.0));
                        });
                });

                // Heliocentric distance vs time
                ui.vertical(|ui| {
                    ui.label("Heliocentric distance (AU)");
                    let dt = self.deflected.dt_days();
                    let series = |preview: &TrajectoryPreview| -> Vec<[f64; 2]> {
                        preview
                            .positions()
                            .iter()
                            .enumerate()
                            .map(|(i, p)| [i as f64 * dt, p.norm()])
                            .collect()
                    };
                    Plot::new("radius")
                        .width(half_w)
                        .height(available.y)
                        .x_axis_label("Time (d)")
                        .legend(Legend::default())
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Ballistic", series(&self.ballistic)));
                            plot_ui.line(Line::new("Deflected", series(&self.deflected)));
                        });
                });
            });
        });
    }
}
