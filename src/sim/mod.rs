pub mod integrator;
pub mod projector;

pub use integrator::{euler_step, HelioState};
pub use projector::{TrajectoryPreview, TrajectoryProjector};
