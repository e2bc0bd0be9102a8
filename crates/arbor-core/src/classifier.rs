//! Stateless per-hand pose classification.
//!
//! Pure function of one frame's landmarks; no memory, no side effects.
//! Pinch wins over fist, fist over open palm. Fist and open palm cannot both
//! hold (each needs three of the same four fingertips on opposite sides of
//! disjoint thresholds), so the chain order only decides pinch precedence.

use crate::constants::*;
use crate::landmarks::{HandPose, FINGERTIPS, INDEX_TIP, THUMB_TIP, WRIST};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifiedPose {
    Neutral,
    Pinching,
    Fist,
    OpenPalm,
}

pub fn classify(pose: &HandPose) -> ClassifiedPose {
    let scale = pose.scale();
    if is_pinching(pose, scale) {
        ClassifiedPose::Pinching
    } else if is_fist(pose, scale) {
        ClassifiedPose::Fist
    } else if is_open_palm(pose, scale) {
        ClassifiedPose::OpenPalm
    } else {
        ClassifiedPose::Neutral
    }
}

#[inline]
fn is_pinching(pose: &HandPose, scale: f32) -> bool {
    pose.span(THUMB_TIP, INDEX_TIP) < PINCH_RATIO * scale
}

fn is_fist(pose: &HandPose, scale: f32) -> bool {
    let folded = FINGERTIPS
        .iter()
        .filter(|&&tip| pose.span(tip, WRIST) < FIST_FOLD_RATIO * scale)
        .count();
    folded >= CURLED_TIPS_REQUIRED
}

fn is_open_palm(pose: &HandPose, scale: f32) -> bool {
    let extended = FINGERTIPS
        .iter()
        .filter(|&&tip| pose.span(tip, WRIST) > PALM_EXTEND_RATIO * scale)
        .count();
    extended >= CURLED_TIPS_REQUIRED
}
