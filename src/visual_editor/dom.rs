use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::DESKTOP_CANVAS;

use super::model::Point;

pub const CANVAS_SELECTOR: &str = "[data-canvas=\"true\"]";

// Owned by the root scope, so resize callbacks can always write it.
pub static WINDOW_WIDTH: GlobalSignal<f64> = Signal::global(|| DESKTOP_CANVAS.width);

/// Window width in CSS pixels. Falls back to a desktop width off the web.
pub fn window_width() -> f64 {
    if !cfg!(target_arch = "wasm32") {
        return DESKTOP_CANVAS.width;
    }
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(DESKTOP_CANVAS.width)
}

/// Top-left corner of the canvas element on screen, after its CSS scale.
pub fn canvas_origin() -> Option<Point> {
    let document = web_sys::window()?.document()?;
    let canvas = document.query_selector(CANVAS_SELECTOR).ok()??;
    let rect = canvas.get_bounding_client_rect();
    Some(Point::new(rect.left(), rect.top()))
}

pub fn record_window_width(width: f64) {
    if *WINDOW_WIDTH.peek() != width {
        *WINDOW_WIDTH.write() = width;
    }
}

/// Current window width. Subscribes the calling component to resizes.
pub fn use_window_width() -> f64 {
    WINDOW_WIDTH()
}

type ResizeCallback = Closure<dyn FnMut()>;

/// Keeps `WINDOW_WIDTH` in step with the browser window. Mount once, at the root.
pub fn use_resize_listener() {
    let listener = use_hook(|| {
        if !cfg!(target_arch = "wasm32") {
            return None;
        }
        let window = web_sys::window()?;
        record_window_width(window_width());
        let on_resize: ResizeCallback = Closure::new(|| record_window_width(window_width()));
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("could not listen for window resize");
            return None;
        }
        Some(Rc::new(on_resize))
    });

    use_drop(move || {
        let Some(on_resize) = listener.as_deref() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if window
            .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("could not remove resize listener");
        }
    });
}
