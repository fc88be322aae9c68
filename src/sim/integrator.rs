use nalgebra::Vector3;

/// Heliocentric translational state, AU and AU/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelioState {
    pub time: f64,           // days since projection start
    pub pos: Vector3<f64>,   // AU
    pub vel: Vector3<f64>,   // AU/day
}

// ---------------------------------------------------------------------------
// Explicit (forward) Euler
// ---------------------------------------------------------------------------

/// Single forward Euler step: both position and velocity advance from the
/// derivatives at the start of the step.
///
/// The position advances with the velocity from before the step, so the
/// acceleration first shows up in the position one step later.
pub fn euler_step(
    state: &HelioState,
    dt: f64,
    accel_fn: &dyn Fn(&Vector3<f64>, f64) -> Vector3<f64>,
) -> HelioState {
    let acc = accel_fn(&state.pos, state.time);
    HelioState {
        time: state.time + dt,
        pos: state.pos + state.vel * dt,
        vel: state.vel + acc * dt,
    }
}
