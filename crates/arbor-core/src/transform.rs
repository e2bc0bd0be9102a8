//! The single shared transform record and its Formed/Gallery state machine.
//!
//! Created once per session, mutated only by the per-tick update path, read
//! by the renderer as a snapshot between ticks.

use glam::Vec3;

use crate::constants::*;
use crate::resolver::GestureKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Scene composed into the tree layout; rotation drifts on its own.
    Formed,
    /// Scene scattered into the photo gallery; one photo has focus.
    Gallery,
}

#[derive(Clone, Debug)]
pub struct TransformState {
    /// Radians, unbounded; consumers wrap it trigonometrically.
    pub rotation_angle: f32,
    /// Per-tick drift applied while `Formed`, clamped to ±[`AUTO_ROTATION_MAX`].
    pub auto_rotation_speed: f32,
    pub position: Vec3,
    pub scale: f32,
    pub mode: Mode,
    /// 0 = fully formed, 1 = fully scattered; ramps during mode transitions.
    pub chaos_factor: f32,
    /// Focused photo; `Some` exactly while in `Gallery`.
    pub focused_index: Option<usize>,
    pub gallery_offset: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation_angle: 0.0,
            auto_rotation_speed: 0.0,
            position: Vec3::from(FORMED_POSITION),
            scale: 1.0,
            mode: Mode::Formed,
            chaos_factor: 0.0,
            focused_index: None,
            gallery_offset: 0.0,
        }
    }
}

impl TransformState {
    /// Scale clamp bounds for the current mode.
    pub fn scale_bounds(&self) -> (f32, f32) {
        match self.mode {
            Mode::Formed => (FORMED_SCALE_MIN, FORMED_SCALE_MAX),
            Mode::Gallery => (GALLERY_SCALE_MIN, GALLERY_SCALE_MAX),
        }
    }

    /// Add a zoom delta and clamp to the mode's bounds.
    pub fn apply_zoom(&mut self, delta: f32) {
        let (min, max) = self.scale_bounds();
        self.scale = (self.scale + delta).clamp(min, max);
    }

    /// Ambient per-tick rule: auto-rotation drifts only while formed. In the
    /// gallery, rotation moves solely through direct impulses.
    pub fn tick_ambient(&mut self) {
        if self.mode == Mode::Formed {
            self.rotation_angle += self.auto_rotation_speed;
        }
    }

    /// Drive mode transitions from the stabilized gesture.
    pub fn apply_gesture(&mut self, stabilized: GestureKind) {
        match stabilized {
            GestureKind::OpenPalmPrimary => {
                if self.mode != Mode::Gallery {
                    self.enter_gallery();
                }
                self.chaos_factor = (self.chaos_factor + CHAOS_STEP).min(1.0);
            }
            GestureKind::FistPrimary => {
                if self.mode != Mode::Formed {
                    self.enter_formed();
                }
                self.chaos_factor = (self.chaos_factor - CHAOS_STEP).max(0.0);
            }
            // No mode change; chaos holds its last value.
            _ => {}
        }
    }

    fn enter_gallery(&mut self) {
        log::debug!("mode -> gallery");
        self.mode = Mode::Gallery;
        self.rotation_angle = 0.0;
        self.auto_rotation_speed = 0.0;
        self.position = Vec3::ZERO;
        self.focused_index = Some(0);
        self.gallery_offset = 0.0;
        if self.scale > GALLERY_SCALE_MAX {
            self.scale = GALLERY_ENTRY_SCALE_RESET;
        }
    }

    fn enter_formed(&mut self) {
        log::debug!("mode -> formed");
        self.mode = Mode::Formed;
        self.focused_index = None;
        self.position = Vec3::from(FORMED_POSITION);
    }
}
