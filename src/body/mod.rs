pub mod presets;
pub mod snapshot;

pub use snapshot::{BodyKind, BodySnapshot, SimulationSnapshot, EARTH_ID};
