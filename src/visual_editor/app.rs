use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::config::BREAKPOINT_DESKTOP;

use super::canvas::{Canvas, PreviewCanvas};
use super::dom::{use_resize_listener, use_window_width};
use super::editor::{set_mode, EditorMode, EDITOR, EDITOR_MODE};
use super::palette::ElementPalette;
use super::property_panel::PropertyPanel;
use super::toolbar::Toolbar;

#[derive(Clone, Copy, Debug, PartialEq)]
enum MobilePanel {
    Elements,
    Canvas,
    Properties,
}

impl MobilePanel {
    const ALL: [(MobilePanel, &'static str, &'static str); 3] = [
        (MobilePanel::Elements, "Elements", "🧩"),
        (MobilePanel::Canvas, "Canvas", "🎨"),
        (MobilePanel::Properties, "Properties", "⚙️"),
    ];
}

#[component]
pub fn SiteBuilder() -> Element {
    use_resize_listener();
    let width = use_window_width();
    let mut publish_json = use_signal(|| None::<String>);
    let mode = EDITOR_MODE.read().clone();
    let wide = width >= BREAKPOINT_DESKTOP;

    let publish = move |_: MouseEvent| match EDITOR.read().state().export_json() {
        Ok(json) => {
            info!(bytes = json.len(), "page exported");
            publish_json.set(Some(json));
        }
        Err(err) => warn!(%err, "export failed"),
    };

    rsx! {
        div {
            class: "site-builder",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui;",

            Header { mode: mode.clone(), on_publish: publish }

            div { style: "flex: 1; overflow: hidden;",
                if mode == EditorMode::Preview {
                    div { style: "height: 100%; overflow: auto; background: #f1f5f9;",
                        PreviewCanvas {}
                    }
                } else if wide {
                    DesktopLayout {}
                } else {
                    MobileLayout {}
                }
            }

            if let Some(json) = publish_json() {
                div {
                    style: "position: fixed; inset: 0; background: rgba(15, 23, 42, 0.5); display: flex; align-items: center; justify-content: center;",
                    onclick: move |_| publish_json.set(None),
                    div {
                        style: "background: white; border-radius: 12px; padding: 16px; width: min(720px, 90vw); max-height: 80vh; display: flex; flex-direction: column; gap: 12px;",
                        onclick: move |e| e.stop_propagation(),
                        h3 { style: "margin: 0; font-size: 16px;", "Published page" }
                        textarea {
                            readonly: true,
                            style: "flex: 1; min-height: 320px; font-family: monospace; font-size: 12px;",
                            value: "{json}",
                        }
                        button {
                            style: "align-self: flex-end; padding: 6px 16px; cursor: pointer;",
                            onclick: move |_| publish_json.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Header(mode: EditorMode, on_publish: EventHandler<MouseEvent>) -> Element {
    let (preview_label, next_mode) = match mode {
        EditorMode::Editor => ("Preview", EditorMode::Preview),
        EditorMode::Preview => ("Edit", EditorMode::Editor),
    };

    rsx! {
        header {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background: white; border-bottom: 1px solid #e2e8f0;",
            div { style: "display: flex; align-items: center; gap: 12px;",
                div {
                    style: "width: 32px; height: 32px; background: #3b82f6; border-radius: 8px; display: flex; align-items: center; justify-content: center; color: white; font-weight: bold; font-size: 14px;",
                    "W"
                }
                div {
                    h1 { style: "margin: 0; font-size: 20px; color: #1e293b;", "Site Builder" }
                    p { style: "margin: 0; font-size: 13px; color: #64748b;", "Drag & Drop Website Creator" }
                }
            }
            div { style: "display: flex; gap: 16px;",
                button {
                    style: "padding: 8px 16px; font-size: 14px; border: none; background: none; color: #475569; cursor: pointer;",
                    onclick: move |_| set_mode(next_mode.clone()),
                    "{preview_label}"
                }
                button {
                    style: "padding: 8px 16px; font-size: 14px; border: none; border-radius: 8px; background: #3b82f6; color: white; cursor: pointer;",
                    onclick: move |e| on_publish.call(e),
                    "Publish"
                }
            }
        }
    }
}

#[component]
fn DesktopLayout() -> Element {
    rsx! {
        div { style: "display: flex; height: 100%;",
            div { style: "width: 256px; border-right: 1px solid #e2e8f0; background: white; overflow-y: auto;",
                ElementPalette {}
            }
            div { style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",
                Toolbar {}
                div { style: "flex: 1; overflow: auto; padding: 16px; background: #f8fafc;",
                    Canvas {}
                }
            }
            div { style: "width: 320px; border-left: 1px solid #e2e8f0; background: white; overflow-y: auto;",
                PropertyPanel {}
            }
        }
    }
}

#[component]
fn MobileLayout() -> Element {
    let mut active = use_signal(|| MobilePanel::Canvas);

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100%;",
            Toolbar { wide: false }
            div { style: "display: flex; background: white; border-bottom: 1px solid #e2e8f0;",
                for (panel, label, icon) in MobilePanel::ALL {
                    button {
                        key: "{label}",
                        style: if active() == panel {
                            "flex: 1; padding: 12px 0; border: none; background: none; color: #2563eb; border-bottom: 2px solid #3b82f6; font-size: 14px;"
                        } else {
                            "flex: 1; padding: 12px 0; border: none; background: none; color: #475569; font-size: 14px;"
                        },
                        onclick: move |_| active.set(panel),
                        span { style: "font-size: 18px; margin-right: 6px;", "{icon}" }
                        "{label}"
                    }
                }
            }
            div { style: "flex: 1; overflow: auto; background: white;",
                match active() {
                    MobilePanel::Elements => rsx! { ElementPalette { show_instructions: false } },
                    MobilePanel::Canvas => rsx! {
                        div { style: "padding: 16px; background: #f8fafc; min-height: 100%;", Canvas {} }
                    },
                    MobilePanel::Properties => rsx! { PropertyPanel {} },
                }
            }
        }
    }
}
