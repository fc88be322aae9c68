//! Collision-risk kernel for tracked near-Earth objects.
//!
//! Reconstructs orbit paths from Keplerian elements, estimates the MOID
//! against Earth's orbit, assigns a Torino-like hazard level and previews
//! the heliocentric path after a deflection impulse. All computations are
//! synchronous and side-effect free; [`facade::RiskAssessmentFacade`] is the
//! entry point for host applications.

pub mod body;
pub mod config;
pub mod error;
pub mod facade;
pub mod hazard;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod sim;

pub use body::{BodyKind, BodySnapshot, SimulationSnapshot};
pub use config::RiskConfig;
pub use error::{Result, RiskError};
pub use facade::{RiskAssessmentFacade, RiskReport};
pub use hazard::{classify, HazardAssessment, SeverityBand};
pub use orbital::{MoidResult, OrbitalElementSet, SampledOrbit};
pub use sim::{TrajectoryPreview, TrajectoryProjector};
