use std::f32::consts::FRAC_PI_2;

use arbor_core::constants::*;
use arbor_core::{wrap_angle_delta, CompositeGesture, Mode, MotionIntegrator, TransformState};
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn fist(angle: f32) -> CompositeGesture {
    CompositeGesture::FistPrimary {
        at: Vec2::new(0.5, 0.6),
        angle,
    }
}

fn palms(distance: f32) -> CompositeGesture {
    CompositeGesture::PalmBoth { distance }
}

fn pinch_primary() -> CompositeGesture {
    CompositeGesture::PinchPrimary {
        tip: Vec2::new(0.5, 0.55),
        angle: -FRAC_PI_2,
    }
}

fn pinch_secondary() -> CompositeGesture {
    CompositeGesture::PinchSecondary {
        tip: Vec2::new(0.5, 0.55),
    }
}

fn gallery(focused: usize) -> TransformState {
    TransformState {
        mode: Mode::Gallery,
        focused_index: Some(focused),
        gallery_offset: focused as f32,
        ..TransformState::default()
    }
}

#[test]
fn angle_deltas_wrap_across_the_atan2_seam() {
    assert!(approx(wrap_angle_delta(1.0), 1.0));
    assert!(approx(wrap_angle_delta(-6.0), -6.0 + std::f32::consts::TAU));
    assert!(approx(wrap_angle_delta(6.0), 6.0 - std::f32::consts::TAU));
}

#[test]
fn first_angle_frame_only_anchors() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&fist(1.0), &mut transform, 6, 0.0);
    assert_eq!(transform.auto_rotation_speed, 0.0);
    assert_eq!(transform.rotation_angle, 0.0);
}

#[test]
fn sub_noise_floor_deltas_are_ignored() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&fist(1.0), &mut transform, 6, 0.0);
    integrator.apply(&fist(1.03), &mut transform, 6, 16.0);
    assert_eq!(transform.auto_rotation_speed, 0.0);
}

#[test]
fn formed_mode_converts_the_impulse_into_clamped_drift() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&fist(1.0), &mut transform, 6, 0.0);
    integrator.apply(&fist(1.5), &mut transform, 6, 16.0);
    // raw impulse -0.5 * 0.12 = -0.06, clamped to the drift ceiling
    assert!(approx(transform.auto_rotation_speed, -AUTO_ROTATION_MAX));
    assert_eq!(
        transform.rotation_angle, 0.0,
        "formed mode must not rotate directly"
    );
}

#[test]
fn drift_is_assigned_not_accumulated() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&fist(1.0), &mut transform, 6, 0.0);
    integrator.apply(&fist(1.5), &mut transform, 6, 16.0);
    // a smaller swing in the same direction replaces the ceiling value
    integrator.apply(&fist(1.555), &mut transform, 6, 32.0);
    assert!(approx(
        transform.auto_rotation_speed,
        -0.055 * ROTATION_IMPULSE_GAIN
    ));
}

#[test]
fn gallery_mode_takes_the_impulse_directly() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(0);
    integrator.apply(&fist(3.0), &mut transform, 6, 0.0);
    integrator.apply(&fist(-3.0), &mut transform, 6, 16.0);
    // wrapped delta is tau - 6.0, well past the noise floor
    let expected = -(std::f32::consts::TAU - 6.0) * ROTATION_IMPULSE_GAIN;
    assert!(
        approx(transform.rotation_angle, expected),
        "got {}",
        transform.rotation_angle
    );
    assert_eq!(transform.auto_rotation_speed, 0.0);
}

#[test]
fn a_frame_without_an_angle_breaks_the_rotation_chain() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&fist(1.0), &mut transform, 6, 0.0);
    integrator.apply(&palms(0.5), &mut transform, 6, 16.0);
    integrator.apply(&fist(2.0), &mut transform, 6, 32.0);
    assert_eq!(
        transform.auto_rotation_speed, 0.0,
        "the delta across the gap must not be applied"
    );
}

#[test]
fn untriggered_frames_keep_rotation_tracking_alive() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&fist(1.0), &mut transform, 6, 0.0);
    integrator.apply(
        &CompositeGesture::None { angle: Some(1.2) },
        &mut transform,
        6,
        16.0,
    );
    assert!(approx(transform.auto_rotation_speed, -AUTO_ROTATION_MAX));
}

#[test]
fn palm_zoom_is_reversed_and_needs_two_frames() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();

    integrator.apply(&palms(0.5), &mut transform, 6, 0.0);
    assert_eq!(transform.scale, 1.0, "first palm frame only anchors");

    // hands moving toward each other grow the scene
    integrator.apply(&palms(0.4), &mut transform, 6, 16.0);
    assert!(approx(transform.scale, 1.0 + 0.1 * ZOOM_GAIN));
}

#[test]
fn zoom_clamps_to_the_mode_bounds() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&palms(1.0), &mut transform, 6, 0.0);
    for i in 1..20 {
        integrator.apply(&palms(1.0 - 0.1 * i as f32), &mut transform, 6, i as f64 * 16.0);
    }
    assert_eq!(transform.scale, FORMED_SCALE_MAX);

    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(0);
    integrator.apply(&palms(0.1), &mut transform, 6, 0.0);
    for i in 1..20 {
        integrator.apply(&palms(0.1 + 0.1 * i as f32), &mut transform, 6, i as f64 * 16.0);
    }
    assert_eq!(transform.scale, GALLERY_SCALE_MIN);
}

#[test]
fn zoom_re_anchors_after_any_gap() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&palms(0.5), &mut transform, 6, 0.0);
    integrator.apply(&CompositeGesture::None { angle: None }, &mut transform, 6, 16.0);
    // the jump from 0.5 to 0.2 must not zoom: the chain was broken
    integrator.apply(&palms(0.2), &mut transform, 6, 32.0);
    assert_eq!(transform.scale, 1.0);
}

#[test]
fn navigation_steps_forward_and_back_in_gallery() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(2);

    integrator.apply(&pinch_primary(), &mut transform, 6, 1000.0);
    assert_eq!(transform.focused_index, Some(3));
    assert_eq!(transform.gallery_offset, 3.0);

    integrator.apply(&pinch_secondary(), &mut transform, 6, 2000.0);
    assert_eq!(transform.focused_index, Some(2));
    assert_eq!(transform.gallery_offset, 2.0);
}

#[test]
fn navigation_is_cooldown_gated() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(0);

    integrator.apply(&pinch_primary(), &mut transform, 6, 1000.0);
    assert_eq!(transform.focused_index, Some(1));

    // 200 ms later: inside the window, ignored
    integrator.apply(&pinch_primary(), &mut transform, 6, 1200.0);
    assert_eq!(transform.focused_index, Some(1));

    // 500 ms after the accepted step: accepted again
    integrator.apply(&pinch_primary(), &mut transform, 6, 1500.0);
    assert_eq!(transform.focused_index, Some(2));
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(5);
    integrator.apply(&pinch_primary(), &mut transform, 6, 1000.0);
    assert_eq!(transform.focused_index, Some(5), "forward clamp at the last photo");
    assert_eq!(transform.gallery_offset, 5.0);

    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(0);
    integrator.apply(&pinch_secondary(), &mut transform, 6, 1000.0);
    assert_eq!(transform.focused_index, Some(0), "backward clamp at the first photo");
}

#[test]
fn navigation_needs_gallery_mode_and_items() {
    let mut integrator = MotionIntegrator::new();
    let mut transform = TransformState::default();
    integrator.apply(&pinch_primary(), &mut transform, 6, 1000.0);
    assert_eq!(transform.focused_index, None, "no navigation while formed");

    let mut integrator = MotionIntegrator::new();
    let mut transform = gallery(0);
    integrator.apply(&pinch_primary(), &mut transform, 0, 1000.0);
    assert_eq!(transform.focused_index, Some(0), "empty gallery never steps");
}
