//! Per-tick frame driver: poll the tracker, tick the pipeline, publish the
//! transform snapshot, and keep the debug overlay current.

use std::cell::RefCell;
use std::rc::Rc;

use arbor_core::{GestureKind, GesturePipeline, HandPose, HandTracker, Hands, LANDMARK_COUNT};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::tracker::WebTracker;
use crate::{dom, overlay};

/// Gallery size assumed until the page reports the discovered photo set.
pub const DEFAULT_PHOTO_COUNT: usize = 6;

pub struct FrameContext {
    pipeline: GesturePipeline,
    tracker: WebTracker,
    document: web::Document,
    debug_canvas: Option<web::HtmlCanvasElement>,
    started: Instant,
    last_label: Option<GestureKind>,
    tracker_down: bool,
}

impl FrameContext {
    pub fn new(
        document: web::Document,
        tracker: WebTracker,
        debug_canvas: Option<web::HtmlCanvasElement>,
    ) -> Self {
        Self {
            pipeline: GesturePipeline::new(DEFAULT_PHOTO_COUNT),
            tracker,
            document,
            debug_canvas,
            started: Instant::now(),
            last_label: None,
            tracker_down: false,
        }
    }

    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;

        if let Some(count) = crate::take_queued_photo_count() {
            self.pipeline.set_item_count(count);
        }

        let hands = match self.tracker.poll(now_ms) {
            Ok(hands) => {
                self.tracker_down = false;
                hands
            }
            Err(e) => {
                // Keep ticking with zero hands; the overlay offers a retry.
                if !self.tracker_down {
                    log::error!("tracker failure: {e}");
                    self.tracker_down = true;
                }
                Hands::new()
            }
        };

        let stabilized = self.pipeline.tick(&hands, now_ms);

        if self.last_label != Some(stabilized) {
            dom::set_text(
                &self.document,
                "gesture-label",
                overlay::gesture_label(stabilized),
            );
            self.last_label = Some(stabilized);
        }
        if let Some(canvas) = &self.debug_canvas {
            draw_debug(canvas, &hands);
        }

        crate::publish_snapshot(self.pipeline.transform(), stabilized);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// Dots for the detected landmarks on the corner canvas, mirrored to match
/// what the user sees.
fn draw_debug(canvas: &web::HtmlCanvasElement, hands: &[HandPose]) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str("#00ffcc");
    for hand in hands {
        for i in 0..LANDMARK_COUNT {
            let p = hand.landmark(i);
            let x = (1.0 - p.x as f64) * w;
            let y = p.y as f64 * h;
            ctx.begin_path();
            _ = ctx.arc(x, y, 2.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}
