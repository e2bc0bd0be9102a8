//! The per-tick frame orchestrator.
//!
//! Owns every piece of cross-tick state (stabilizer, integrator, transform)
//! and runs the full pipeline once per animation tick:
//! ambient drift, resolve, stabilize, integrate, mode transitions.
//! The caller passes whatever hands the detector produced this tick; an
//! empty set is the correct degradation for a missing or failed detector.

use crate::integrator::MotionIntegrator;
use crate::landmarks::HandPose;
use crate::resolver::{resolve, GestureKind};
use crate::stabilizer::GestureStabilizer;
use crate::transform::TransformState;

pub struct GesturePipeline {
    stabilizer: GestureStabilizer,
    integrator: MotionIntegrator,
    transform: TransformState,
    item_count: usize,
}

impl GesturePipeline {
    /// `item_count` is the number of navigable gallery photos; it may be
    /// zero at startup and set later once assets are discovered.
    pub fn new(item_count: usize) -> Self {
        Self {
            stabilizer: GestureStabilizer::new(),
            integrator: MotionIntegrator::new(),
            transform: TransformState::default(),
            item_count,
        }
    }

    /// Run one tick. `now_ms` is a monotonic millisecond clock shared with
    /// the navigation cooldown. Returns the stabilized gesture for display.
    pub fn tick(&mut self, hands: &[HandPose], now_ms: f64) -> GestureKind {
        self.transform.tick_ambient();

        let resolved = resolve(hands);
        let stabilized = if hands.is_empty() {
            // No debounce on loss of tracking.
            self.stabilizer.reset();
            GestureKind::None
        } else {
            self.stabilizer.update(resolved.kind())
        };

        // Motion consumes the raw gesture: every motion-bearing class has a
        // zero stability threshold, so raw and stabilized agree for them.
        self.integrator
            .apply(&resolved, &mut self.transform, self.item_count, now_ms);

        // Mode transitions only believe the debounced stream.
        self.transform.apply_gesture(stabilized);

        stabilized
    }

    /// Read-only view for the renderer, refreshed once per tick.
    #[inline]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[inline]
    pub fn stabilized(&self) -> GestureKind {
        self.stabilizer.stable()
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Update the gallery size after asynchronous asset discovery. A focused
    /// index past the new end clamps rather than faulting.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if let Some(idx) = self.transform.focused_index {
            if item_count == 0 {
                self.transform.focused_index = Some(0);
                self.transform.gallery_offset = 0.0;
            } else if idx >= item_count {
                self.transform.focused_index = Some(item_count - 1);
                self.transform.gallery_offset = (item_count - 1) as f32;
            }
        }
    }
}
