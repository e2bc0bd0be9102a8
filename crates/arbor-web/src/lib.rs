#![cfg(target_arch = "wasm32")]
//! Web front-end shell: wires the camera and the page-supplied hand
//! landmarker into the gesture pipeline, runs the requestAnimationFrame
//! tick loop, and publishes a read-only transform snapshot for the renderer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use arbor_core::{GestureKind, Mode, TrackerError, TransformState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod dom;
mod frame;
mod overlay;
mod tracker;

thread_local! {
    static SNAPSHOT: Cell<Option<TransformSnapshot>> = const { Cell::new(None) };
    static GESTURE: Cell<GestureKind> = const { Cell::new(GestureKind::None) };
    static QUEUED_PHOTO_COUNT: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Read-only view of the shared transform, refreshed once per tick.
///
/// The external renderer polls [`transform_snapshot`] once per render tick;
/// there is exactly one writer (the frame loop), so no locking applies.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct TransformSnapshot {
    pub rotation_angle: f32,
    pub auto_rotation_speed: f32,
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
    pub scale: f32,
    pub chaos_factor: f32,
    pub gallery_mode: bool,
    /// Focused photo index, or -1 outside gallery mode.
    pub focused_index: i32,
    pub gallery_offset: f32,
}

#[wasm_bindgen]
pub fn transform_snapshot() -> Option<TransformSnapshot> {
    SNAPSHOT.with(|s| s.get())
}

/// Latest stabilized gesture as a display label.
#[wasm_bindgen]
pub fn active_gesture() -> String {
    overlay::gesture_label(GESTURE.with(|g| g.get())).to_string()
}

/// Report the discovered photo count; picked up on the next tick.
#[wasm_bindgen]
pub fn set_photo_count(count: usize) {
    QUEUED_PHOTO_COUNT.with(|c| c.set(Some(count)));
}

pub(crate) fn take_queued_photo_count() -> Option<usize> {
    QUEUED_PHOTO_COUNT.with(|c| c.take())
}

pub(crate) fn publish_snapshot(t: &TransformState, stabilized: GestureKind) {
    let snapshot = TransformSnapshot {
        rotation_angle: t.rotation_angle,
        auto_rotation_speed: t.auto_rotation_speed,
        position_x: t.position.x,
        position_y: t.position.y,
        position_z: t.position.z,
        scale: t.scale,
        chaos_factor: t.chaos_factor,
        gallery_mode: t.mode == Mode::Gallery,
        focused_index: t.focused_index.map(|i| i as i32).unwrap_or(-1),
        gallery_offset: t.gallery_offset,
    };
    SNAPSHOT.with(|s| s.set(Some(snapshot)));
    GESTURE.with(|g| g.set(stabilized));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("arbor-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let video: web::HtmlVideoElement = document
        .get_element_by_id("hand-video")
        .ok_or_else(|| anyhow::anyhow!("missing #hand-video"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let debug_canvas = document
        .get_element_by_id("hand-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The tick loop runs from the start. Until a tracking session comes up
    // the tracker yields zero hands, which the pipeline degrades on cleanly.
    let tracker = tracker::WebTracker::new(video.clone());
    let enable = tracker.enable_handle();
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document.clone(),
        tracker,
        debug_canvas,
    )));
    frame::start_loop(ctx);

    {
        let document_retry = document.clone();
        let video_retry = video.clone();
        let enable_retry = enable.clone();
        dom::add_click_listener(&document, "camera-retry", move || {
            let (d, v, e) = (
                document_retry.clone(),
                video_retry.clone(),
                enable_retry.clone(),
            );
            spawn_local(async move { begin_session(d, v, e).await });
        });
    }

    begin_session(document, video, enable).await;
    Ok(())
}

/// Bring up the landmark model and camera; on failure the loop keeps ticking
/// with zero hands and the overlay offers a retry.
async fn begin_session(
    document: web::Document,
    video: web::HtmlVideoElement,
    enable: Rc<Cell<bool>>,
) {
    overlay::hide_error(&document);
    let result: Result<(), TrackerError> = async {
        tracker::init_landmarker().await?;
        camera::start(&video).await
    }
    .await;
    match result {
        Ok(()) => {
            enable.set(true);
            log::info!("hand tracking session started");
        }
        Err(e) => {
            log::error!("session start failed: {e}");
            overlay::show_error(&document, &e);
        }
    }
}
