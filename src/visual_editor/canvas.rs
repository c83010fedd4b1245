use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::dom::{canvas_origin, use_window_width};
use super::drag::{drop_actions, DRAG_PAYLOAD};
use super::editor::{self, dispatch_all, EDITOR};
use super::element_view::{ElementBox, PreviewElement};
use super::model::Point;
use super::viewport::{Breakpoint, DeviceMode, Viewport};

pub static DEVICE_MODE: GlobalSignal<DeviceMode> = Signal::global(DeviceMode::default);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Delete,
    Deselect,
    Copy,
    Paste,
    Undo,
    Redo,
}

impl Shortcut {
    /// `key` is the DOM key name; `command` is Ctrl, or Cmd on macOS.
    pub fn from_key(key: &str, command: bool) -> Option<Self> {
        match (key, command) {
            ("Delete" | "Backspace", false) => Some(Shortcut::Delete),
            ("Escape", _) => Some(Shortcut::Deselect),
            ("c" | "C", true) => Some(Shortcut::Copy),
            ("v" | "V", true) => Some(Shortcut::Paste),
            ("z" | "Z", true) => Some(Shortcut::Undo),
            ("y" | "Y", true) => Some(Shortcut::Redo),
            _ => None,
        }
    }

    fn run(self) {
        match self {
            Shortcut::Delete => editor::delete_selected(),
            Shortcut::Deselect => editor::select(None),
            Shortcut::Copy => editor::copy(),
            Shortcut::Paste => editor::paste(),
            Shortcut::Undo => editor::undo(),
            Shortcut::Redo => editor::redo(),
        }
    }
}

pub fn use_viewport() -> Viewport {
    Viewport::resolve(*DEVICE_MODE.read(), use_window_width())
}

fn handle_drop(viewport: Viewport, pointer: Point) {
    let Some(payload) = DRAG_PAYLOAD.write().take() else {
        return;
    };
    let Some(origin) = canvas_origin() else {
        warn!("drop ignored: canvas element not found");
        return;
    };
    let at = viewport.to_canvas(pointer, origin);
    debug!(?payload, x = at.x, y = at.y, "drop");

    let actions = drop_actions(EDITOR.read().state(), payload, at);
    if !actions.is_empty() {
        dispatch_all(actions);
    }
}

#[component]
pub fn Canvas() -> Element {
    let viewport = use_viewport();
    let mut is_over = use_signal(|| false);
    let ids: Vec<_> = EDITOR.read().state().elements().map(|record| record.id).collect();

    let width = viewport.canvas_size.width;
    let height = viewport.canvas_size.height;
    let scale = viewport.scale;
    let border = if is_over() { "#3b82f6" } else { "#e2e8f0" };
    let background = if is_over() { "#eff6ff" } else { "white" };
    let hint = if viewport.breakpoint == Breakpoint::Mobile {
        "Switch to Elements tab to add components"
    } else {
        "Drag elements from the palette to begin"
    };

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: flex-start; outline: none;",
            tabindex: 0,
            onkeydown: move |e| {
                let modifiers = e.modifiers();
                let command = modifiers.ctrl() || modifiers.meta();
                if let Some(shortcut) = Shortcut::from_key(&e.key().to_string(), command) {
                    e.prevent_default();
                    shortcut.run();
                }
            },
            div {
                class: "canvas",
                "data-canvas": "true",
                style: "
                    position: relative;
                    width: {width}px;
                    height: {height}px;
                    transform: scale({scale});
                    transform-origin: top center;
                    background: {background};
                    border: 2px dashed {border};
                    border-radius: 8px;
                    overflow: hidden;
                ",
                onclick: move |_| editor::select(None),
                ondragover: move |e| {
                    e.prevent_default();
                    is_over.set(true);
                },
                ondragleave: move |_| is_over.set(false),
                ondrop: move |e| {
                    e.prevent_default();
                    is_over.set(false);
                    let pointer = e.client_coordinates();
                    handle_drop(viewport, Point::new(pointer.x, pointer.y));
                },

                for id in ids.iter().copied() {
                    ElementBox { key: "{id}", element_id: id }
                }

                if is_over() {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #2563eb; font-size: 18px; font-weight: 500; pointer-events: none;",
                        "Drop element here"
                    }
                }

                if ids.is_empty() && !is_over() {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; text-align: center; color: #64748b; pointer-events: none;",
                        div {
                            div { style: "font-size: 24px; margin-bottom: 8px;", "🎨" }
                            div { style: "font-size: 18px; font-weight: 500; margin-bottom: 8px;", "Start Building" }
                            div { style: "font-size: 13px; padding: 0 16px;", "{hint}" }
                        }
                    }
                }
            }
        }
    }
}

/// The page as visitors would see it.
#[component]
pub fn PreviewCanvas() -> Element {
    let viewport = use_viewport();
    let ids: Vec<_> = EDITOR.read().state().elements().map(|record| record.id).collect();
    let width = viewport.canvas_size.width;
    let height = viewport.canvas_size.height;

    rsx! {
        div { style: "display: flex; justify-content: center; padding: 16px;",
            div {
                style: "position: relative; width: {width}px; height: {height}px; background: white; overflow: hidden;",
                for id in ids.iter().copied() {
                    PreviewElement { key: "{id}", element_id: id }
                }
            }
        }
    }
}
