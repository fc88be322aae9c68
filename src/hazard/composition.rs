//! Assumed composition and mass of a tracked body.
//!
//! Real spectral data is not part of the snapshot, so the spectral type is
//! picked from a fixed five-entry table by hashing the display name. The same
//! name always maps to the same type.

use serde::Serialize;

/// Spectral classes with their bulk densities (Carry 2012, DeMeo & Carry 2013).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpectralType {
    C, // carbonaceous
    S, // silicaceous
    M, // metallic
    V, // basaltic
    Q, // ordinary chondrite
}

pub const SPECTRAL_TABLE: [SpectralType; 5] = [
    SpectralType::C,
    SpectralType::S,
    SpectralType::M,
    SpectralType::V,
    SpectralType::Q,
];

impl SpectralType {
    /// Bulk density, kg/m^3.
    pub fn density(&self) -> f64 {
        match self {
            SpectralType::C => 1_700.0,
            SpectralType::S => 2_700.0,
            SpectralType::M => 4_000.0,
            SpectralType::V => 3_200.0,
            SpectralType::Q => 2_500.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpectralType::C => "C-type",
            SpectralType::S => "S-type",
            SpectralType::M => "M-type",
            SpectralType::V => "V-type",
            SpectralType::Q => "Q-type",
        }
    }
}

/// 31-based polynomial hash over UTF-16 code units, wrapping at 32 bits.
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

pub fn spectral_type_for(name: &str) -> SpectralType {
    let idx = (name_hash(name).unsigned_abs() % SPECTRAL_TABLE.len() as u32) as usize;
    SPECTRAL_TABLE[idx]
}

/// Mass of a homogeneous sphere, kg.
pub fn sphere_mass(radius_km: f64, density: f64) -> f64 {
    let r = radius_km * 1000.0;
    density * 4.0 / 3.0 * std::f64::consts::PI * r.powi(3)
}

pub fn estimate_mass(name: &str, radius_km: f64) -> f64 {
    sphere_mass(radius_km, spectral_type_for(name).density())
}

/// `1/2 m v^2` in joules, speed given in km/s.
pub fn kinetic_energy(mass_kg: f64, speed_km_s: f64) -> f64 {
    let v = speed_km_s * 1000.0;
    0.5 * mass_kg * v * v
}
