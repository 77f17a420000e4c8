//! Global configuration for the sandbox solver.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default gravity vector (screen coordinates, Y points down).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 1000.0];

/// Default extent of the simulated region covered by the broad-phase grid.
pub const DEFAULT_WORLD_SIZE: [f32; 2] = [1000.0, 1000.0];

/// Default edge length of one broad-phase grid cell. Must stay at or above
/// the largest body diameter for the 3×3 neighborhood query to be complete.
pub const DEFAULT_CELL_SIZE: f32 = 25.0;

/// Default number of solver micro-steps per external frame tick.
pub const DEFAULT_SUBSTEPS: u32 = 1;

/// Fraction of a detected penetration corrected per resolution pass. Kept
/// below 1 so repeated substeps converge instead of overshooting.
pub const DEFAULT_RESPONSE_COEF: f32 = 0.75;

/// Default cap on candidates returned by a single broad-phase query.
pub const DEFAULT_QUERY_CAPACITY: usize = 1000;

/// Default center of the circular boundary constraint.
pub const DEFAULT_CONSTRAINT_CENTER: [f32; 2] = [500.0, 500.0];

/// Default radius of the circular boundary constraint.
pub const DEFAULT_CONSTRAINT_RADIUS: f32 = 450.0;

/// Externally tunable parameters of a [`crate::world::PhysicsWorld`].
///
/// Every field can also be mutated on the world between frames; the struct
/// exists so a whole parameter set can be built and handed over in one piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub world_size: Vec2,
    pub cell_size: f32,
    pub gravity: Vec2,
    pub substeps: u32,
    pub constraint_center: Vec2,
    pub constraint_radius: f32,
    pub constrain: bool,
    pub response_coef: f32,
    pub query_capacity: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: Vec2::from_array(DEFAULT_WORLD_SIZE),
            cell_size: DEFAULT_CELL_SIZE,
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            substeps: DEFAULT_SUBSTEPS,
            constraint_center: Vec2::from_array(DEFAULT_CONSTRAINT_CENTER),
            constraint_radius: DEFAULT_CONSTRAINT_RADIUS,
            constrain: true,
            response_coef: DEFAULT_RESPONSE_COEF,
            query_capacity: DEFAULT_QUERY_CAPACITY,
        }
    }
}
