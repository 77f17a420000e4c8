use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::body::Body;

/// Circular boundary that clamps escaping bodies back onto the rim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleConstraint {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleConstraint {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Projects the body onto the boundary circle if it has strayed past
    /// `radius - body.radius` from the center, along the radial direction.
    pub fn apply(&self, body: &mut Body) {
        let to_center = self.center - body.position;
        let dist = to_center.length();
        let bound = self.radius - body.radius;
        if dist > bound {
            // A body exactly at the center has no radial direction to clamp
            // along; leave it for the next substep.
            if dist == 0.0 {
                return;
            }
            let normal = to_center / dist;
            body.position = self.center - normal * bound;
        }
    }
}
