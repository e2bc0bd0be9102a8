//! The consumed hand-tracking capability.
//!
//! Implementations wrap whatever actually produces landmarks (the web
//! front-end binds the page's MediaPipe hand landmarker). The pipeline never
//! talks to a tracker directly; the frame driver polls once per tick and
//! feeds the result in, so a failing tracker degrades to an empty hand set
//! rather than stopping the loop.

use thiserror::Error;

use crate::landmarks::Hands;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// The user declined (or revoked) camera access; the caller may retry.
    #[error("camera permission denied")]
    PermissionDenied,
    /// Any other initialization or per-frame failure.
    #[error("hand tracking unavailable: {0}")]
    Other(String),
}

pub trait HandTracker {
    /// Poll for the current frame's hands. `timestamp_ms` is the same
    /// monotonic clock the pipeline ticks with.
    fn poll(&mut self, timestamp_ms: f64) -> Result<Hands, TrackerError>;
}
