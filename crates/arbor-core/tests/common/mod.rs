//! Synthetic hand poses for gesture tests.
//!
//! All builders share the same geometry: wrist at (0.5, 0.8), middle MCP at
//! (0.5, 0.6), so the hand scale is 0.2 and the classification thresholds
//! land at 0.07 (pinch), 0.28 (folded) and 0.32 (extended).

#![allow(dead_code)]

use arbor_core::{HandPose, HandRole, LANDMARK_COUNT};
use glam::Vec3;

pub const WRIST: Vec3 = Vec3::new(0.5, 0.8, 0.0);

fn base() -> [Vec3; LANDMARK_COUNT] {
    let mut lms = [Vec3::new(0.5, 0.7, 0.0); LANDMARK_COUNT];
    lms[0] = WRIST;
    lms[9] = Vec3::new(0.5, 0.6, 0.0);
    lms
}

/// Fingertips at 0.30 from the wrist: neither folded nor extended, thumb
/// well clear of the index tip.
pub fn neutral_landmarks() -> [Vec3; LANDMARK_COUNT] {
    let mut lms = base();
    for tip in [8, 12, 16, 20] {
        lms[tip] = Vec3::new(0.5, 0.5, 0.0);
    }
    lms[4] = Vec3::new(0.35, 0.65, 0.0);
    lms
}

/// Thumb tip and index tip touching.
pub fn pinch_landmarks() -> [Vec3; LANDMARK_COUNT] {
    let mut lms = neutral_landmarks();
    lms[4] = Vec3::new(0.5, 0.55, 0.0);
    lms[8] = Vec3::new(0.5, 0.55, 0.0);
    lms
}

/// All four fingertips folded toward the wrist, thumb apart from the index.
pub fn fist_landmarks() -> [Vec3; LANDMARK_COUNT] {
    let mut lms = base();
    for tip in [8, 12, 16, 20] {
        lms[tip] = Vec3::new(0.5, 0.72, 0.0);
    }
    lms[4] = Vec3::new(0.38, 0.72, 0.0);
    lms
}

/// All four fingertips extended past the palm threshold.
pub fn open_palm_landmarks() -> [Vec3; LANDMARK_COUNT] {
    let mut lms = base();
    for (k, tip) in [8, 12, 16, 20].into_iter().enumerate() {
        lms[tip] = Vec3::new(0.44 + 0.04 * k as f32, 0.44, 0.0);
    }
    lms[4] = Vec3::new(0.30, 0.62, 0.0);
    lms
}

/// Scale all coordinates about the origin (classification must not change).
pub fn scaled(mut lms: [Vec3; LANDMARK_COUNT], k: f32) -> [Vec3; LANDMARK_COUNT] {
    for lm in &mut lms {
        *lm *= k;
    }
    lms
}

/// Rotate the hand about its wrist in the image plane, changing its
/// orientation angle without touching any intra-hand distance.
pub fn rotated(mut lms: [Vec3; LANDMARK_COUNT], theta: f32) -> [Vec3; LANDMARK_COUNT] {
    let wrist = lms[0];
    let (sin, cos) = theta.sin_cos();
    for lm in &mut lms {
        let d = *lm - wrist;
        *lm = wrist + Vec3::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos, d.z);
    }
    lms
}

/// Shift the whole hand horizontally (for two-hand layouts).
pub fn offset(mut lms: [Vec3; LANDMARK_COUNT], dx: f32) -> [Vec3; LANDMARK_COUNT] {
    for lm in &mut lms {
        lm.x += dx;
    }
    lms
}

pub fn pose(lms: [Vec3; LANDMARK_COUNT], role: HandRole) -> HandPose {
    HandPose::new(&lms, role).unwrap()
}

pub fn neutral(role: HandRole) -> HandPose {
    pose(neutral_landmarks(), role)
}

pub fn pinch(role: HandRole) -> HandPose {
    pose(pinch_landmarks(), role)
}

pub fn fist(role: HandRole) -> HandPose {
    pose(fist_landmarks(), role)
}

pub fn open_palm(role: HandRole) -> HandPose {
    pose(open_palm_landmarks(), role)
}
