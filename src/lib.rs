//! Verlet sandbox – a real-time 2D particle physics solver.
//!
//! The crate simulates circular bodies under gravity inside a circular
//! boundary. Bodies advance with Störmer–Verlet integration, pairwise
//! collisions are pruned by a uniform spatial hash grid and resolved with a
//! damped positional correction, and the whole pipeline repeats `substeps`
//! times per frame tick for stability. Rendering, windowing, and input are
//! external: drivers call [`PhysicsWorld::step`] (or [`Sandbox::step`]) once
//! per frame and read back positions and radii afterwards.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use crate::collision::broadphase::SpatialGrid;
pub use crate::collision::narrowphase::resolve_pair;
pub use crate::config::WorldConfig;
pub use crate::core::body::{Body, BodyId};
pub use crate::dynamics::constraint::CircleConstraint;
pub use crate::world::PhysicsWorld;

/// High-level convenience wrapper that owns a [`PhysicsWorld`].
pub struct Sandbox {
    world: PhysicsWorld,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl Sandbox {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            world: PhysicsWorld::new(config),
        }
    }

    /// Spawns one body at rest and returns its id.
    pub fn spawn(&mut self, position: Vec2, radius: f32) -> BodyId {
        self.world.insert_body(position, radius)
    }

    /// Spawns a `(2*half_x + 1) × (2*half_y + 1)` lattice of bodies on unit
    /// spacing around `center` and returns their ids.
    pub fn spawn_block(
        &mut self,
        center: Vec2,
        half_x: i32,
        half_y: i32,
        radius: f32,
    ) -> Vec<BodyId> {
        let mut ids = Vec::with_capacity(((2 * half_x + 1) * (2 * half_y + 1)).max(0) as usize);
        for x in -half_x..=half_x {
            for y in -half_y..=half_y {
                let offset = Vec2::new(x as f32, y as f32);
                ids.push(self.world.insert_body(center + offset, radius));
            }
        }
        ids
    }

    /// Advances the simulation by the provided delta time.
    pub fn step(&mut self, dt: f32) {
        self.world.step(dt);
    }

    /// Removes every body from the world.
    pub fn clear(&mut self) {
        self.world.clear_bodies();
    }

    /// Brings every body to rest in place.
    pub fn halt_all(&mut self) {
        self.world.halt_all();
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }
}
