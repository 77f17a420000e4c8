//! Core types describing simulated entities.

pub mod body;

pub use body::{Body, BodyId};
