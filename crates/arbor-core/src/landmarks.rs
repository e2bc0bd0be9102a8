//! Hand landmark storage and per-hand geometry.
//!
//! A detected hand is 21 normalized 3D keypoints in the MediaPipe hand
//! topology. All classification distances are planar (x/y); the depth
//! coordinate is carried through for consumers but never enters thresholds.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use thiserror::Error;

pub const LANDMARK_COUNT: usize = 21;

// Landmark indices used by the pipeline
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;

/// The four non-thumb fingertips, used for fist/open-palm counting.
pub const FINGERTIPS: [usize; 4] = [8, 12, 16, 20];

/// Which hand drives rotation and primary actions.
///
/// Derived from the detector's handedness label. The camera feed is
/// mirrored, so the label `"Left"` as seen by the camera is the user's
/// anatomical right hand and maps to `Primary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandRole {
    Primary,
    Secondary,
}

#[derive(Debug, Error)]
pub enum PoseError {
    #[error("expected {LANDMARK_COUNT} hand landmarks, got {0}")]
    LandmarkCount(usize),
}

/// One detected hand for one frame: 21 landmarks plus its role tag.
#[derive(Clone, Debug)]
pub struct HandPose {
    landmarks: [Vec3; LANDMARK_COUNT],
    role: HandRole,
}

/// Per-frame hand set; at most two hands, kept inline.
pub type Hands = SmallVec<[HandPose; 2]>;

impl HandPose {
    /// Build a pose from a landmark slice, rejecting malformed input.
    ///
    /// A wrong landmark count is a precondition violation of the upstream
    /// detector; callers treat the hand as absent for that frame.
    pub fn new(landmarks: &[Vec3], role: HandRole) -> Result<Self, PoseError> {
        let landmarks: [Vec3; LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| PoseError::LandmarkCount(landmarks.len()))?;
        Ok(Self { landmarks, role })
    }

    #[inline]
    pub fn role(&self) -> HandRole {
        self.role
    }

    #[inline]
    pub fn landmark(&self, index: usize) -> Vec3 {
        self.landmarks[index]
    }

    /// Planar (x/y) position of a landmark.
    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.landmarks[index].truncate()
    }

    /// Planar distance between two landmarks of this hand.
    #[inline]
    pub fn span(&self, a: usize, b: usize) -> f32 {
        self.point(a).distance(self.point(b))
    }

    /// Normalization scale: wrist to middle-finger base.
    ///
    /// Every classification threshold is a ratio of this, so a hand close to
    /// the camera and the same hand far away classify identically.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.span(WRIST, MIDDLE_MCP)
    }

    /// Orientation of the wrist-to-middle-MCP segment, radians.
    #[inline]
    pub fn orientation(&self) -> f32 {
        let d = self.point(MIDDLE_MCP) - self.point(WRIST);
        d.y.atan2(d.x)
    }
}

/// Map a detector handedness label to a role, inverting for the mirrored
/// camera feed. An unlabeled hand is usable only when it is the sole hand in
/// the frame, in which case it is treated as primary.
pub fn role_from_label(label: Option<&str>, only_hand: bool) -> Option<HandRole> {
    match label {
        Some("Left") => Some(HandRole::Primary),
        Some("Right") => Some(HandRole::Secondary),
        _ if only_hand => Some(HandRole::Primary),
        _ => None,
    }
}

/// Planar distance between one landmark on each of two hands.
#[inline]
pub fn cross_span(a: &HandPose, b: &HandPose, index: usize) -> f32 {
    a.point(index).distance(b.point(index))
}
