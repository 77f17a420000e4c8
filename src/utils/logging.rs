use log::{log_enabled, trace, Level};
use std::time::Instant;

/// Scoped timer reporting the elapsed time of a solver phase at trace level.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            trace!("{} took {} µs", self.label, self.start.elapsed().as_micros());
        }
    }
}
