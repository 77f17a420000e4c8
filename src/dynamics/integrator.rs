//! Störmer–Verlet position integration.

use crate::core::body::Body;

/// Advances every body by one substep of length `dt`.
///
/// Runs last in the substep so corrections from collision resolution and the
/// boundary constraint are folded into the implicit velocity immediately,
/// which is what makes repeated substepping converge.
pub fn integrate(bodies: &mut [Body], dt: f32) {
    for body in bodies {
        body.integrate(dt);
    }
}
