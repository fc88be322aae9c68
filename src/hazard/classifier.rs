use serde::Serialize;

use crate::error::{invalid, Result};

// ---------------------------------------------------------------------------
// Proximity and size thresholds
// ---------------------------------------------------------------------------

pub const CLOSE_AU: f64 = 0.05;
pub const VERY_CLOSE_AU: f64 = 0.01;
pub const LARGE_RADIUS_KM: f64 = 0.05; // 50 m
pub const VERY_LARGE_RADIUS_KM: f64 = 0.5; // 500 m
pub const MASSIVE_RADIUS_KM: f64 = 1.0;

pub const MAX_LEVEL: u8 = 10;

const DESCRIPTIONS: [&str; 11] = [
    "No hazard: collision likelihood is effectively zero, or the object would disintegrate in the atmosphere.",
    "Normal: a routine pass with an extremely unlikely collision. No cause for public concern.",
    "Meriting attention: a somewhat close but not unusual encounter. Collision is very unlikely.",
    "Meriting attention: a close encounter with a 1% or greater chance of localized destruction.",
    "Meriting attention: a close encounter with a 1% or greater chance of regional devastation.",
    "Threatening: a close encounter posing a serious but still uncertain threat of regional devastation.",
    "Threatening: a close encounter by a large object posing a serious but uncertain threat of global catastrophe.",
    "Threatening: a very close encounter by a large object posing an unprecedented threat of global catastrophe.",
    "Certain collision: localized destruction on land or a possible tsunami if close offshore.",
    "Certain collision: unprecedented regional devastation on land or a major tsunami at sea.",
    "Certain collision: a global climatic catastrophe that may threaten civilization as we know it.",
];

/// Display grouping of hazard levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    White,
    Green,
    Yellow,
    Orange,
    Red,
}

impl SeverityBand {
    pub fn for_level(level: u8) -> Self {
        match level {
            0 => SeverityBand::White,
            1 => SeverityBand::Green,
            2..=4 => SeverityBand::Yellow,
            5..=7 => SeverityBand::Orange,
            _ => SeverityBand::Red,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeverityBand::White => "white",
            SeverityBand::Green => "green",
            SeverityBand::Yellow => "yellow",
            SeverityBand::Orange => "orange",
            SeverityBand::Red => "red",
        }
    }
}

/// Torino-like hazard level with its fixed description and band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardAssessment {
    pub level: u8,
    pub description: &'static str,
    pub band: SeverityBand,
}

impl HazardAssessment {
    /// Look up the description and band for `level` (clamped to 0..=10).
    pub fn from_level(level: u8) -> Self {
        let level = level.min(MAX_LEVEL);
        HazardAssessment {
            level,
            description: DESCRIPTIONS[level as usize],
            band: SeverityBand::for_level(level),
        }
    }
}

/// Classify a body into a 0..=10 hazard level.
///
/// The first matching branch wins; the order encodes precedence for
/// overlapping flag combinations and must not be rearranged.
pub fn classify(
    probability: f64,
    energy_j: f64,
    distance_au: f64,
    radius_km: f64,
) -> Result<HazardAssessment> {
    if !(0.0..=1.0).contains(&probability) {
        return invalid(format!("probability must lie in [0, 1], got {probability}"));
    }
    if !(energy_j.is_finite() && energy_j >= 0.0) {
        return invalid(format!("kinetic energy must be non-negative, got {energy_j}"));
    }
    if !(distance_au.is_finite() && distance_au > 0.0) {
        return invalid(format!("distance must be positive, got {distance_au}"));
    }
    if !(radius_km.is_finite() && radius_km > 0.0) {
        return invalid(format!("radius must be positive, got {radius_km}"));
    }

    let is_close = distance_au < CLOSE_AU;
    let is_very_close = distance_au < VERY_CLOSE_AU;
    let is_large = radius_km > LARGE_RADIUS_KM;
    let is_very_large = radius_km > VERY_LARGE_RADIUS_KM;
    let is_massive = radius_km > MASSIVE_RADIUS_KM;

    let energy_mag = (energy_j + 1.0).log10();

    let raw = if probability < 1e-6 && !is_very_close {
        0.0
    } else if probability < 1e-4 && !is_close {
        1.0
    } else if is_very_close && is_massive {
        (7.0 + (probability * 6.0).floor()).min(10.0)
    } else if is_very_close && is_very_large {
        (5.0 + (probability * 6.0).floor()).min(8.0)
    } else if is_close && is_large {
        (3.0 + (energy_mag / 4.0).floor()).min(6.0)
    } else if probability < 1e-2 {
        (2.0 + energy_mag / 5.0).floor().min(4.0)
    } else if probability < 0.5 {
        (4.0 + energy_mag / 5.0).floor().min(7.0)
    } else {
        (7.0 + probability * 6.0).floor().min(10.0)
    };

    let level = raw.clamp(0.0, MAX_LEVEL as f64) as u8;
    Ok(HazardAssessment::from_level(level))
}
