use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable body identity handed out at spawn time.
///
/// Ids increase monotonically for the lifetime of a world; bulk clears do not
/// reset the counter, so an id never aliases an earlier body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// A disc integrated with the Störmer–Verlet scheme.
///
/// There is no velocity field: velocity is implicit in the gap between
/// `position` and `last_position`, which keeps the integrator unconditionally
/// stable under the positional corrections applied by the solver.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub last_position: Vec2,
    pub acceleration: Vec2,
    /// Collision radius; doubles as mass in the collision response.
    pub radius: f32,
}

impl Body {
    /// Creates a body at rest (`last_position == position`).
    pub fn new(id: BodyId, position: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            id,
            position,
            last_position: position,
            acceleration: Vec2::ZERO,
            radius,
        }
    }

    /// Adds to the acceleration accumulator for the current substep.
    pub fn accelerate(&mut self, accel: Vec2) {
        self.acceleration += accel;
    }

    /// Advances the body by one Verlet step and clears the accumulator.
    pub fn integrate(&mut self, dt: f32) {
        let displacement = self.position - self.last_position;
        self.last_position = self.position;
        self.position += displacement + self.acceleration * (dt * dt);
        self.acceleration = Vec2::ZERO;
    }

    /// Rewrites the implicit velocity to exactly `velocity`.
    pub fn set_velocity(&mut self, velocity: Vec2, dt: f32) {
        self.last_position = self.position - velocity * dt;
    }

    /// Adds `velocity` on top of the implicit velocity.
    pub fn add_velocity(&mut self, velocity: Vec2, dt: f32) {
        self.last_position -= velocity * dt;
    }

    /// Implicit velocity for a step of length `dt`.
    pub fn velocity(&self, dt: f32) -> Vec2 {
        (self.position - self.last_position) / dt
    }

    /// Zeroes the implicit velocity and any pending acceleration.
    pub fn halt(&mut self) {
        self.last_position = self.position;
        self.acceleration = Vec2::ZERO;
    }
}
