//! Collision detection modules: broad-phase grid and narrow-phase resolution.

pub mod broadphase;
pub mod narrowphase;

pub use broadphase::SpatialGrid;
pub use narrowphase::resolve_pair;
