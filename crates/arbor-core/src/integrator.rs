//! Frame-to-frame motion derivation.
//!
//! Retains the previous tick's continuous payload and derives three
//! independent effects per tick: a rotation impulse from the primary hand's
//! angular velocity, a zoom delta from the inter-palm distance while both
//! palms stay open, and cooldown-gated photo navigation in gallery mode.

use std::f32::consts::{PI, TAU};

use crate::constants::*;
use crate::resolver::{CompositeGesture, GestureKind};
use crate::transform::{Mode, TransformState};

#[derive(Debug)]
pub struct MotionIntegrator {
    prev_kind: GestureKind,
    prev_angle: Option<f32>,
    prev_distance: Option<f32>,
    last_nav_ms: f64,
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self {
            prev_kind: GestureKind::None,
            prev_angle: None,
            prev_distance: None,
            // far enough in the past that the first navigation is accepted
            last_nav_ms: f64::NEG_INFINITY,
        }
    }
}

/// Wrap an angle difference into (-PI, PI] so a hand crossing the atan2 seam
/// reads as a small rotation, not a full turn.
#[inline]
pub fn wrap_angle_delta(delta: f32) -> f32 {
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}

impl MotionIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick's motion to the transform, then snapshot the payload
    /// for the next tick. `now_ms` is any monotonic millisecond clock.
    pub fn apply(
        &mut self,
        gesture: &CompositeGesture,
        transform: &mut TransformState,
        item_count: usize,
        now_ms: f64,
    ) {
        self.apply_rotation(gesture, transform);
        self.apply_zoom(gesture, transform);
        self.apply_navigation(gesture, transform, item_count, now_ms);

        self.prev_kind = gesture.kind();
        self.prev_angle = gesture.angle();
        self.prev_distance = gesture.distance();
    }

    /// Rotation impulse from angular velocity, whenever two consecutive
    /// frames carried a primary-hand angle. Gallery mode takes the impulse
    /// directly; formed mode converts it into persistent drift.
    fn apply_rotation(&self, gesture: &CompositeGesture, transform: &mut TransformState) {
        let (Some(angle), Some(prev)) = (gesture.angle(), self.prev_angle) else {
            return;
        };
        let delta = wrap_angle_delta(angle - prev);
        if delta.abs() <= ANGLE_NOISE_FLOOR {
            return;
        }
        let impulse = -delta * ROTATION_IMPULSE_GAIN;
        match transform.mode {
            Mode::Gallery => transform.rotation_angle += impulse,
            Mode::Formed => {
                transform.auto_rotation_speed =
                    impulse.clamp(-AUTO_ROTATION_MAX, AUTO_ROTATION_MAX)
            }
        }
    }

    /// Reversed dual-palm zoom: hands moving apart shrink the scene. Needs
    /// two consecutive `PalmBoth` frames so the first frame only anchors.
    fn apply_zoom(&self, gesture: &CompositeGesture, transform: &mut TransformState) {
        if gesture.kind() != GestureKind::PalmBoth || self.prev_kind != GestureKind::PalmBoth {
            return;
        }
        let (Some(distance), Some(prev)) = (gesture.distance(), self.prev_distance) else {
            return;
        };
        transform.apply_zoom(-(distance - prev) * ZOOM_GAIN);
    }

    /// Paged photo navigation, gallery only: secondary pinch steps back,
    /// primary pinch steps forward, each acceptance rearming the cooldown.
    /// Out-of-range steps clamp silently.
    fn apply_navigation(
        &mut self,
        gesture: &CompositeGesture,
        transform: &mut TransformState,
        item_count: usize,
        now_ms: f64,
    ) {
        if transform.mode != Mode::Gallery || item_count == 0 {
            return;
        }
        if now_ms - self.last_nav_ms <= NAV_COOLDOWN_MS {
            return;
        }
        let current = transform.focused_index.unwrap_or(0);
        let next = match gesture.kind() {
            GestureKind::PinchSecondary => current.saturating_sub(1),
            GestureKind::PinchPrimary => (current + 1).min(item_count - 1),
            _ => return,
        };
        log::debug!("gallery nav {current} -> {next}");
        transform.focused_index = Some(next);
        transform.gallery_offset = next as f32;
        self.last_nav_ms = now_ms;
    }
}
