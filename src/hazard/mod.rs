pub mod classifier;
pub mod composition;
pub mod probability;

pub use classifier::{classify, HazardAssessment, SeverityBand};
pub use composition::{estimate_mass, kinetic_energy, spectral_type_for, SpectralType};
pub use probability::heuristic_probability;
