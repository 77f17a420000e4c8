//! Simulation dynamics modules: integration and the boundary constraint.

pub mod constraint;
pub mod integrator;

pub use constraint::CircleConstraint;
