use dioxus::prelude::*;

use super::canvas::DEVICE_MODE;
use super::editor::{self, EDITOR};
use super::viewport::{Breakpoint, DeviceMode};

#[component]
pub fn Toolbar(#[props(default = true)] wide: bool) -> Element {
    let current = EDITOR.read();
    let element_count = current.state().len();
    let canvas = current.state().canvas_size();
    let can_undo = current.can_undo();
    let can_redo = current.can_redo();
    let has_selection = current.state().selected_id().is_some();
    let has_clipboard = current.has_clipboard();
    drop(current);
    let device = *DEVICE_MODE.read();

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; background: white; border-bottom: 1px solid #e2e8f0;",

            div { style: "display: flex; gap: 4px;",
                ToolButton { icon: "↶", label: "Undo", enabled: can_undo, on_press: move |_| editor::undo() }
                ToolButton { icon: "↷", label: "Redo", enabled: can_redo, on_press: move |_| editor::redo() }
                if wide {
                    ToolButton { icon: "📋", label: "Copy", enabled: has_selection, on_press: move |_| editor::copy() }
                    ToolButton { icon: "📌", label: "Paste", enabled: has_clipboard, on_press: move |_| editor::paste() }
                }
            }

            div { style: "display: flex; gap: 16px; font-size: 13px; color: #475569;",
                div {
                    "Elements: "
                    span { style: "font-weight: 500; color: #2563eb;", "{element_count}" }
                }
                if wide {
                    div {
                        "Canvas: "
                        span { style: "font-weight: 500;", "{canvas.width} × {canvas.height}" }
                    }
                }
            }

            if wide {
                div { style: "display: flex; gap: 8px;",
                    DeviceButton { label: "Auto", mode: DeviceMode::Auto, active: device == DeviceMode::Auto }
                    for breakpoint in Breakpoint::ALL {
                        DeviceButton {
                            key: "{breakpoint.label()}",
                            label: breakpoint.label(),
                            mode: DeviceMode::Fixed(breakpoint),
                            active: device == DeviceMode::Fixed(breakpoint),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ToolButton(icon: &'static str, label: &'static str, enabled: bool, on_press: EventHandler<MouseEvent>) -> Element {
    let opacity = if enabled { "1" } else { "0.4" };
    rsx! {
        button {
            title: label,
            disabled: !enabled,
            style: "padding: 8px; border: none; background: none; border-radius: 8px; cursor: pointer; font-size: 14px; opacity: {opacity};",
            onclick: move |e| on_press.call(e),
            "{icon}"
        }
    }
}

#[component]
fn DeviceButton(label: &'static str, mode: DeviceMode, active: bool) -> Element {
    let (background, color) = if active { ("#f1f5f9", "#334155") } else { ("transparent", "#64748b") };
    rsx! {
        button {
            style: "padding: 4px 12px; font-size: 12px; border: none; border-radius: 8px; background: {background}; color: {color}; cursor: pointer;",
            onclick: move |_| *DEVICE_MODE.write() = mode,
            "{label}"
        }
    }
}
