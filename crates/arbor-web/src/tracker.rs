//! Bindings to the page-supplied hand landmarker.
//!
//! The landmark model itself is an external capability: the host page loads
//! the MediaPipe glue and exposes `initHandLandmarker` / `detectHands`
//! globals. This module converts its per-frame result into validated
//! [`HandPose`] values, assigning roles from the handedness label (inverted
//! for the mirrored feed) and dropping malformed hands.

use std::cell::Cell;
use std::rc::Rc;

use arbor_core::{role_from_label, HandPose, HandTracker, Hands, TrackerError};
use glam::Vec3;
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Resolves once the landmark model is loaded and ready.
    #[wasm_bindgen(catch, js_name = initHandLandmarker)]
    async fn init_hand_landmarker_js() -> Result<JsValue, JsValue>;

    /// Runs the model against the current video frame.
    #[wasm_bindgen(catch, js_name = detectHands)]
    fn detect_hands_js(video: &web::HtmlVideoElement, timestamp_ms: f64)
        -> Result<JsValue, JsValue>;
}

pub async fn init_landmarker() -> Result<(), TrackerError> {
    init_hand_landmarker_js()
        .await
        .map(|_| ())
        .map_err(|e| TrackerError::Other(format!("{e:?}")))
}

pub struct WebTracker {
    video: web::HtmlVideoElement,
    enabled: Rc<Cell<bool>>,
}

impl WebTracker {
    pub fn new(video: web::HtmlVideoElement) -> Self {
        Self {
            video,
            enabled: Rc::new(Cell::new(false)),
        }
    }

    /// Shared flag flipped once a tracking session is up.
    pub fn enable_handle(&self) -> Rc<Cell<bool>> {
        self.enabled.clone()
    }
}

impl HandTracker for WebTracker {
    fn poll(&mut self, timestamp_ms: f64) -> Result<Hands, TrackerError> {
        // Not ready yet (or no frame decoded): zero hands, not an error.
        if !self.enabled.get() || self.video.video_width() == 0 {
            return Ok(Hands::new());
        }
        let result = detect_hands_js(&self.video, timestamp_ms)
            .map_err(|e| TrackerError::Other(format!("{e:?}")))?;
        Ok(parse_result(&result))
    }
}

fn parse_result(value: &JsValue) -> Hands {
    let mut hands = Hands::new();
    if value.is_null() || value.is_undefined() {
        return hands;
    }
    let Some(sets) = array_field(value, "landmarks") else {
        return hands;
    };
    let labels = array_field(value, "handedness");

    let only_hand = sets.length() == 1;
    for i in 0..sets.length() {
        let Some(points) = parse_landmarks(&sets.get(i)) else {
            continue;
        };
        let label = labels.as_ref().and_then(|l| top_category(&l.get(i)));
        let Some(role) = role_from_label(label.as_deref(), only_hand) else {
            continue;
        };
        match HandPose::new(&points, role) {
            Ok(pose) => hands.push(pose),
            Err(e) => log::warn!("dropping malformed hand: {e}"),
        }
    }
    hands
}

fn array_field(obj: &JsValue, key: &str) -> Option<Array> {
    let value = Reflect::get(obj, &key.into()).ok()?;
    Array::is_array(&value).then(|| Array::from(&value))
}

fn parse_landmarks(value: &JsValue) -> Option<Vec<Vec3>> {
    if !Array::is_array(value) {
        return None;
    }
    let arr = Array::from(value);
    let mut out = Vec::with_capacity(arr.length() as usize);
    for j in 0..arr.length() {
        let p = arr.get(j);
        let x = number_field(&p, "x")?;
        let y = number_field(&p, "y")?;
        let z = number_field(&p, "z").unwrap_or(0.0);
        out.push(Vec3::new(x as f32, y as f32, z as f32));
    }
    Some(out)
}

fn number_field(obj: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(obj, &key.into()).ok()?.as_f64()
}

/// `handedness[i]` is a ranked category list; take the top entry's name.
fn top_category(value: &JsValue) -> Option<String> {
    if !Array::is_array(value) {
        return None;
    }
    let first = Array::from(value).get(0);
    Reflect::get(&first, &"categoryName".into())
        .ok()?
        .as_string()
}
