use glam::Vec2;
use log::{trace, warn};

use crate::{
    collision::{broadphase::SpatialGrid, narrowphase::resolve_pair},
    config::WorldConfig,
    core::body::{Body, BodyId},
    dynamics::{constraint::CircleConstraint, integrator},
    utils::logging::ScopedTimer,
};

/// Central simulation container owning the bodies and the broad-phase grid.
///
/// One call to [`step`](Self::step) fully completes before control returns;
/// spawning, clearing, and parameter changes must happen between calls.
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    grid: SpatialGrid,
    pub gravity: Vec2,
    pub constraint: CircleConstraint,
    constrain_enabled: bool,
    substeps: u32,
    response_coef: f32,
    query_capacity: usize,
    // Reusable candidate scratch, cleared per query.
    query_buf: Vec<usize>,
    max_query_hits: usize,
    truncation_warned: bool,
    next_id: u32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl PhysicsWorld {
    pub fn new(config: WorldConfig) -> Self {
        let grid = SpatialGrid::new(
            config.world_size.x,
            config.world_size.y,
            config.cell_size,
        );
        Self {
            bodies: Vec::new(),
            grid,
            gravity: config.gravity,
            constraint: CircleConstraint::new(config.constraint_center, config.constraint_radius),
            constrain_enabled: config.constrain,
            substeps: config.substeps.max(1),
            response_coef: config.response_coef,
            query_capacity: config.query_capacity,
            query_buf: Vec::with_capacity(config.query_capacity),
            max_query_hits: 0,
            truncation_warned: false,
            next_id: 0,
        }
    }

    /// Appends a body at rest and returns its id.
    pub fn insert_body(&mut self, position: Vec2, radius: f32) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, position, radius));
        id
    }

    /// Removes every body. Ids are not reused afterwards.
    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable body access for between-frame adjustments (initial velocities,
    /// repositioning). Must not be used while a `step` call is in progress.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn set_substeps(&mut self, substeps: u32) {
        self.substeps = substeps.max(1);
    }

    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    pub fn set_constraint_enabled(&mut self, enabled: bool) {
        self.constrain_enabled = enabled;
    }

    pub fn constraint_enabled(&self) -> bool {
        self.constrain_enabled
    }

    /// Largest candidate count any broad-phase query has returned so far.
    /// Useful for judging whether the query capacity is sized generously
    /// enough for the observed local density.
    pub fn max_query_hits(&self) -> usize {
        self.max_query_hits
    }

    /// Zeroes the implicit velocity of every body.
    pub fn halt_all(&mut self) {
        for body in &mut self.bodies {
            body.halt();
        }
    }

    /// Advances the simulation by `dt`, split into `substeps` micro-steps.
    ///
    /// Each micro-step applies gravity, rebuilds the grid from current
    /// positions, resolves collisions, applies the boundary constraint when
    /// enabled, and integrates last so corrections from this substep feed the
    /// implicit velocity immediately.
    pub fn step(&mut self, dt: f32) {
        let step_dt = dt / self.substeps as f32;
        for _ in 0..self.substeps {
            self.apply_gravity();
            {
                let _timer = ScopedTimer::new("broadphase::rebuild");
                self.grid.rebuild(&self.bodies);
            }
            {
                let _timer = ScopedTimer::new("collisions::resolve");
                self.resolve_collisions();
            }
            if self.constrain_enabled {
                self.apply_constraint();
            }
            {
                let _timer = ScopedTimer::new("integrator");
                integrator::integrate(&mut self.bodies, step_dt);
            }
        }
        trace!("max candidates per query so far: {}", self.max_query_hits);
    }

    fn apply_gravity(&mut self) {
        let gravity = self.gravity;
        for body in &mut self.bodies {
            body.accelerate(gravity);
        }
    }

    fn apply_constraint(&mut self) {
        let constraint = self.constraint;
        for body in &mut self.bodies {
            constraint.apply(body);
        }
    }

    /// Narrow phase over the broad-phase candidates.
    ///
    /// Every body queries its own 3×3 neighborhood, so a touching pair is
    /// visited twice per substep (once from each side). That redundancy is
    /// intentional and absorbed by the damped correction factor.
    fn resolve_collisions(&mut self) {
        let mut candidates = std::mem::take(&mut self.query_buf);
        for index in 0..self.bodies.len() {
            let truncated = self.grid.query(
                self.bodies[index].position,
                self.query_capacity,
                &mut candidates,
            );
            if truncated && !self.truncation_warned {
                self.truncation_warned = true;
                warn!(
                    "broad-phase query truncated at {} candidates; contacts may be missed",
                    self.query_capacity
                );
            }
            self.max_query_hits = self.max_query_hits.max(candidates.len());
            for &other in &candidates {
                if other == index {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.bodies, index, other);
                resolve_pair(a, b, self.response_coef);
            }
        }
        self.query_buf = candidates;
    }
}

/// Disjoint mutable borrows of two slice entries.
fn pair_mut(bodies: &mut [Body], first: usize, second: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(first, second);
    if first < second {
        let (left, right) = bodies.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}
