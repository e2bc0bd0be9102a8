//! Run-length hysteresis over the resolved gesture stream.
//!
//! A transient misclassification must not flip a mode. Motion- and
//! zoom-critical gestures pass through immediately (threshold 0); discrete
//! triggers have to repeat for [`TRIGGER_STABILITY_FRAMES`] extra frames.
//! The run length counts repeats, so a threshold of 4 flips the stabilized
//! value on the fifth consecutive identical frame.

use crate::constants::TRIGGER_STABILITY_FRAMES;
use crate::resolver::GestureKind;

/// Consecutive extra frames a gesture must hold before it is believed.
pub fn stability_frames(kind: GestureKind) -> u32 {
    match kind {
        GestureKind::PinchPrimary
        | GestureKind::PinchSecondary
        | GestureKind::PalmBoth
        | GestureKind::OpenPalmPrimary => 0,
        _ => TRIGGER_STABILITY_FRAMES,
    }
}

#[derive(Debug, Default)]
pub struct GestureStabilizer {
    last: GestureKind,
    run_length: u32,
    stable: GestureKind,
}

impl GestureStabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's resolved gesture; returns the stabilized gesture.
    pub fn update(&mut self, raw: GestureKind) -> GestureKind {
        if raw == self.last {
            self.run_length += 1;
        } else {
            self.run_length = 0;
            self.last = raw;
        }
        if self.run_length >= stability_frames(raw) {
            self.stable = raw;
        }
        self.stable
    }

    /// Loss of tracking: snap to `None` with no debounce and drop counters.
    pub fn reset(&mut self) {
        self.last = GestureKind::None;
        self.run_length = 0;
        self.stable = GestureKind::None;
    }

    #[inline]
    pub fn stable(&self) -> GestureKind {
        self.stable
    }
}
