//! Camera acquisition with categorical error reporting.

use arbor_core::TrackerError;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const IDEAL_WIDTH: u32 = 640;
const IDEAL_HEIGHT: u32 = 480;
const IDEAL_FPS: u32 = 30;

/// Request the camera and attach the stream to the (hidden) video element.
pub async fn start(video: &web::HtmlVideoElement) -> Result<(), TrackerError> {
    let window = web::window().ok_or_else(|| TrackerError::Other("no window".into()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| TrackerError::Other(format!("camera API unavailable: {e:?}")))?;

    let mut constraints = web::MediaStreamConstraints::new();
    constraints.video(&video_constraints());

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(categorize)?;
    let stream = JsFuture::from(promise).await.map_err(categorize)?;
    let stream: web::MediaStream = stream
        .dyn_into()
        .map_err(|e| TrackerError::Other(format!("{e:?}")))?;

    video.set_src_object(Some(&stream));
    // an autoplay block is non-fatal; playback resumes on user interaction
    _ = video.play();
    Ok(())
}

fn video_constraints() -> JsValue {
    let ideal = |value: u32| {
        let o = js_sys::Object::new();
        _ = Reflect::set(&o, &"ideal".into(), &JsValue::from_f64(value as f64));
        o
    };
    let video = js_sys::Object::new();
    _ = Reflect::set(&video, &"width".into(), &ideal(IDEAL_WIDTH));
    _ = Reflect::set(&video, &"height".into(), &ideal(IDEAL_HEIGHT));
    _ = Reflect::set(&video, &"frameRate".into(), &ideal(IDEAL_FPS));
    video.into()
}

/// Map a getUserMedia rejection to the categorical tracker error.
fn categorize(err: JsValue) -> TrackerError {
    let name = Reflect::get(&err, &"name".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    match name.as_str() {
        "NotAllowedError" | "PermissionDeniedError" => TrackerError::PermissionDenied,
        _ => TrackerError::Other(format!("{err:?}")),
    }
}
