//! Composite gesture resolution: combine up to two classified hands into one
//! gesture value plus the continuous data that gesture carries.
//!
//! Precedence is data, not control flow: [`RULES`] is evaluated top to
//! bottom and the first rule that matches wins. Each variant of
//! [`CompositeGesture`] carries only the auxiliary fields that are
//! meaningful for it; an absent field is "unknown", never zero.

use glam::Vec2;

use crate::classifier::{classify, ClassifiedPose};
use crate::landmarks::{cross_span, HandPose, HandRole, MIDDLE_MCP, THUMB_TIP};

/// One frame's resolved gesture with its continuous payload.
///
/// The primary hand's orientation angle is computed whenever a primary hand
/// is visible, trigger or no trigger, so rotation tracking stays continuous.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompositeGesture {
    /// Both palms open; the inter-hand distance drives zoom.
    PalmBoth { distance: f32 },
    /// Both hands pinching; thumb-tip distance.
    PinchBoth { distance: f32 },
    /// Secondary hand pinching alone; its thumb-tip position.
    PinchSecondary { tip: Vec2 },
    /// Primary hand pinching; thumb-tip position plus hand orientation.
    PinchPrimary { tip: Vec2, angle: f32 },
    /// Primary fist; palm position plus hand orientation.
    FistPrimary { at: Vec2, angle: f32 },
    /// Primary open palm; palm position plus hand orientation.
    OpenPalmPrimary { at: Vec2, angle: f32 },
    /// No trigger. Orientation is still tracked when a primary hand is
    /// visible; `None` here means no primary hand this frame.
    None { angle: Option<f32> },
}

/// Fieldless discriminant of [`CompositeGesture`], used for run-length
/// comparison and stability thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureKind {
    #[default]
    None,
    PinchPrimary,
    PinchSecondary,
    PinchBoth,
    PalmBoth,
    FistPrimary,
    OpenPalmPrimary,
}

impl CompositeGesture {
    pub fn kind(&self) -> GestureKind {
        match self {
            CompositeGesture::PalmBoth { .. } => GestureKind::PalmBoth,
            CompositeGesture::PinchBoth { .. } => GestureKind::PinchBoth,
            CompositeGesture::PinchSecondary { .. } => GestureKind::PinchSecondary,
            CompositeGesture::PinchPrimary { .. } => GestureKind::PinchPrimary,
            CompositeGesture::FistPrimary { .. } => GestureKind::FistPrimary,
            CompositeGesture::OpenPalmPrimary { .. } => GestureKind::OpenPalmPrimary,
            CompositeGesture::None { .. } => GestureKind::None,
        }
    }

    /// Primary-hand orientation, when this frame carries one.
    pub fn angle(&self) -> Option<f32> {
        match self {
            CompositeGesture::PinchPrimary { angle, .. }
            | CompositeGesture::FistPrimary { angle, .. }
            | CompositeGesture::OpenPalmPrimary { angle, .. } => Some(*angle),
            CompositeGesture::None { angle } => *angle,
            _ => None,
        }
    }

    /// Inter-hand distance, for the two-hand gestures.
    pub fn distance(&self) -> Option<f32> {
        match self {
            CompositeGesture::PalmBoth { distance }
            | CompositeGesture::PinchBoth { distance } => Some(*distance),
            _ => None,
        }
    }

    /// Tracked fingertip/palm position, when one is meaningful.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            CompositeGesture::PinchSecondary { tip } | CompositeGesture::PinchPrimary { tip, .. } => {
                Some(*tip)
            }
            CompositeGesture::FistPrimary { at, .. }
            | CompositeGesture::OpenPalmPrimary { at, .. } => Some(*at),
            _ => None,
        }
    }
}

struct ClassifiedHand<'a> {
    pose: &'a HandPose,
    class: ClassifiedPose,
}

/// Both hands of one frame after per-hand classification.
struct FrameHands<'a> {
    primary: Option<ClassifiedHand<'a>>,
    secondary: Option<ClassifiedHand<'a>>,
}

impl<'a> FrameHands<'a> {
    fn classify(hands: &'a [HandPose]) -> Self {
        let mut primary = None;
        let mut secondary = None;
        for pose in hands {
            let slot = match pose.role() {
                HandRole::Primary => &mut primary,
                HandRole::Secondary => &mut secondary,
            };
            if slot.is_none() {
                *slot = Some(ClassifiedHand {
                    pose,
                    class: classify(pose),
                });
            }
        }
        Self { primary, secondary }
    }

    fn is(&self, role: HandRole, class: ClassifiedPose) -> bool {
        let slot = match role {
            HandRole::Primary => &self.primary,
            HandRole::Secondary => &self.secondary,
        };
        slot.as_ref().map(|h| h.class == class).unwrap_or(false)
    }
}

type Rule = fn(&FrameHands) -> Option<CompositeGesture>;

/// Ordered gesture precedence; first match wins.
const RULES: [Rule; 4] = [palm_both, pinch_both, pinch_secondary, primary_hand];

/// Resolve one frame's hand set. Total: with no hands (or no rule match) the
/// result is `None` with an empty payload.
pub fn resolve(hands: &[HandPose]) -> CompositeGesture {
    let frame = FrameHands::classify(hands);
    RULES
        .iter()
        .find_map(|rule| rule(&frame))
        .unwrap_or(CompositeGesture::None { angle: None })
}

fn palm_both(frame: &FrameHands) -> Option<CompositeGesture> {
    if frame.is(HandRole::Primary, ClassifiedPose::OpenPalm)
        && frame.is(HandRole::Secondary, ClassifiedPose::OpenPalm)
    {
        let (p, s) = (frame.primary.as_ref()?, frame.secondary.as_ref()?);
        return Some(CompositeGesture::PalmBoth {
            distance: cross_span(p.pose, s.pose, MIDDLE_MCP),
        });
    }
    None
}

fn pinch_both(frame: &FrameHands) -> Option<CompositeGesture> {
    if frame.is(HandRole::Primary, ClassifiedPose::Pinching)
        && frame.is(HandRole::Secondary, ClassifiedPose::Pinching)
    {
        let (p, s) = (frame.primary.as_ref()?, frame.secondary.as_ref()?);
        return Some(CompositeGesture::PinchBoth {
            distance: cross_span(p.pose, s.pose, THUMB_TIP),
        });
    }
    None
}

fn pinch_secondary(frame: &FrameHands) -> Option<CompositeGesture> {
    if frame.is(HandRole::Secondary, ClassifiedPose::Pinching) {
        let s = frame.secondary.as_ref()?;
        return Some(CompositeGesture::PinchSecondary {
            tip: s.pose.point(THUMB_TIP),
        });
    }
    None
}

fn primary_hand(frame: &FrameHands) -> Option<CompositeGesture> {
    let p = frame.primary.as_ref()?;
    let angle = p.pose.orientation();
    let at = p.pose.point(MIDDLE_MCP);
    Some(match p.class {
        ClassifiedPose::Pinching => CompositeGesture::PinchPrimary {
            tip: p.pose.point(THUMB_TIP),
            angle,
        },
        ClassifiedPose::Fist => CompositeGesture::FistPrimary { at, angle },
        ClassifiedPose::OpenPalm => CompositeGesture::OpenPalmPrimary { at, angle },
        ClassifiedPose::Neutral => CompositeGesture::None { angle: Some(angle) },
    })
}
