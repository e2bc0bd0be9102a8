//! Camera-error overlay and the on-screen gesture label.

use arbor_core::{GestureKind, TrackerError};
use web_sys as web;

use crate::dom;

pub fn show_error(document: &web::Document, err: &TrackerError) {
    let message = match err {
        TrackerError::PermissionDenied => "Please enable the camera to enter the experience.",
        TrackerError::Other(_) => "Hand tracking could not start. Check the camera and retry.",
    };
    dom::set_text(document, "camera-overlay-message", message);
    if let Some(el) = document.get_element_by_id("camera-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

pub fn hide_error(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("camera-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Display label for the stabilized gesture, shown under the hand tracker.
pub fn gesture_label(kind: GestureKind) -> &'static str {
    match kind {
        GestureKind::None => "SCANNING...",
        GestureKind::PinchPrimary => "PINCH",
        GestureKind::PinchSecondary => "PINCH_LEFT",
        GestureKind::PinchBoth => "PINCH_BOTH",
        GestureKind::PalmBoth => "PALM_BOTH",
        GestureKind::FistPrimary => "FIST",
        GestureKind::OpenPalmPrimary => "OPEN_PALM",
    }
}
