/// Gesture classification and motion tuning constants.
///
/// Distance thresholds are ratios of the per-hand scale (wrist to middle
/// MCP), which makes classification invariant to camera resolution and to
/// how far the hand is from the lens.
// Pose classification (ratios of hand scale)
pub const PINCH_RATIO: f32 = 0.35; // thumb tip to index tip
pub const FIST_FOLD_RATIO: f32 = 1.4; // fingertip folded toward wrist
pub const PALM_EXTEND_RATIO: f32 = 1.6; // fingertip extended away from wrist
pub const CURLED_TIPS_REQUIRED: usize = 3; // of the four non-thumb fingertips

// Stabilization
// Motion/zoom gestures react immediately; discrete triggers hold this many
// repeat frames before they are believed.
pub const TRIGGER_STABILITY_FRAMES: u32 = 4;

// Rotation impulse
pub const ANGLE_NOISE_FLOOR: f32 = 0.05; // radians per frame below this are jitter
pub const ROTATION_IMPULSE_GAIN: f32 = 0.12;
pub const AUTO_ROTATION_MAX: f32 = 0.007; // radians per tick of persistent drift

// Zoom
pub const ZOOM_SPEED: f32 = 3.0;
pub const ZOOM_GAIN: f32 = ZOOM_SPEED * 1.5; // applied to inter-palm distance delta

// Navigation
pub const NAV_COOLDOWN_MS: f64 = 400.0; // min elapsed time between page turns

// Transform clamps
pub const FORMED_SCALE_MIN: f32 = 0.6;
pub const FORMED_SCALE_MAX: f32 = 2.0;
pub const GALLERY_SCALE_MIN: f32 = 0.7;
pub const GALLERY_SCALE_MAX: f32 = 1.4;
pub const GALLERY_ENTRY_SCALE_RESET: f32 = 1.0; // applied when entering above the gallery max

// Mode transition
pub const CHAOS_STEP: f32 = 0.05; // per-tick scatter ramp while the trigger persists
pub const FORMED_POSITION: [f32; 3] = [0.0, -0.5, 0.0];
