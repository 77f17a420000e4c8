//! Utility helpers: logging and diagnostics.

pub mod logging;

pub use logging::ScopedTimer;
