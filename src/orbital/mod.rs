pub mod elements;
pub mod moid;
pub mod sampler;

pub use elements::{OrbitalElementSet, PerifocalRotation};
pub use moid::{estimate, estimate_against_earth, MoidResult, MOID_FLOOR_AU};
pub use sampler::{sample, sample_planar, SampledOrbit, MOID_SAMPLES, PATH_SAMPLES};
