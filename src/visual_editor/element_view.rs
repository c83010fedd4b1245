use dioxus::prelude::*;

use super::drag::{DragPayload, DRAG_PAYLOAD};
use super::editor::{select, EDITOR};
use super::model::{ElementId, ElementProps, ElementRecord, Point};

/// CSS for the element's own box, without any editor chrome.
pub fn content_style(props: &ElementProps) -> String {
    match props {
        ElementProps::Text(p) => format!(
            "font-size: {}; color: {}; font-weight: {}; text-align: {}; white-space: pre-wrap; width: 100%; height: 100%; margin: 0;",
            p.font_size, p.color, p.font_weight, p.text_align
        ),
        ElementProps::Image(_) => "width: 100%; height: 100%; object-fit: cover; display: block;".to_string(),
        ElementProps::Button(p) => format!(
            "background-color: {}; color: {}; border-radius: {}; width: 100%; height: 100%; border: none; font-weight: 500; cursor: pointer;",
            p.background_color, p.text_color, p.border_radius
        ),
        ElementProps::Container(p) => format!(
            "background-color: {}; border-radius: {}; padding: {}; border: {}; display: {}; width: 100%; height: 100%; box-sizing: border-box;",
            p.background_color, p.border_radius, p.padding, p.border, p.display
        ),
    }
}

fn frame_style(record: &ElementRecord) -> String {
    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;",
        record.position.x, record.position.y, record.size.width, record.size.height
    )
}

#[component]
fn ElementContent(content: ElementProps, editing: bool) -> Element {
    let style = content_style(&content);
    match content {
        ElementProps::Text(p) => rsx! {
            div { style: "{style}", "{p.content}" }
        },
        ElementProps::Image(p) => rsx! {
            img { style: "{style}", src: "{p.src}", alt: "{p.alt}", draggable: false }
        },
        ElementProps::Button(p) => {
            if editing {
                rsx! {
                    button { style: "{style}", onclick: move |e| e.prevent_default(), "{p.text}" }
                }
            } else {
                rsx! {
                    a { href: "{p.href}", style: "display: block; width: 100%; height: 100%; text-decoration: none;",
                        button { style: "{style}", "{p.text}" }
                    }
                }
            }
        }
        ElementProps::Container(_) => rsx! {
            div { style: "{style}" }
        },
    }
}

/// An element on the editing canvas: selectable and draggable.
#[component]
pub fn ElementBox(element_id: ElementId) -> Element {
    let editor = EDITOR.read();
    let state = editor.state();
    let Some(record) = state.get(element_id) else {
        return rsx! {};
    };
    let is_selected = state.selected_id() == Some(element_id);
    let is_dragging = matches!(*DRAG_PAYLOAD.read(), Some(DragPayload::Existing { id, .. }) if id == element_id);
    let frame = frame_style(record);
    let content = record.props.clone();
    let kind = record.kind();
    let empty_container = record.is_container() && record.children.is_empty();

    let opacity = if is_dragging { "0.5" } else { "1" };
    let outline = if is_selected {
        "outline: 2px solid #3b82f6; outline-offset: 2px;"
    } else if record.is_container() {
        "outline: 2px dashed #cbd5e1;"
    } else {
        ""
    };

    rsx! {
        div {
            class: "element-box",
            style: "{frame} {outline} opacity: {opacity}; cursor: move; user-select: none;",
            draggable: true,
            onmousedown: move |e| {
                e.stop_propagation();
                select(Some(element_id));
            },
            onclick: move |e| e.stop_propagation(),
            ondragstart: move |e| {
                let grab = e.element_coordinates();
                *DRAG_PAYLOAD.write() = Some(DragPayload::Existing {
                    id: element_id,
                    grab: Point::new(grab.x, grab.y),
                });
            },
            ondragend: move |_| *DRAG_PAYLOAD.write() = None,

            ElementContent { content, editing: true }

            if empty_container {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #94a3b8; font-size: 13px; pointer-events: none;",
                    "Drop elements here"
                }
            }

            if is_selected {
                div {
                    style: "position: absolute; top: -24px; left: -4px; background: #3b82f6; color: white; padding: 2px 8px; border-radius: 4px; font-size: 11px; font-weight: 500;",
                    "{kind}"
                }
            }
        }
    }
}

/// An element as it appears on the published page.
#[component]
pub fn PreviewElement(element_id: ElementId) -> Element {
    let editor = EDITOR.read();
    let Some(record) = editor.state().get(element_id) else {
        return rsx! {};
    };
    let frame = frame_style(record);
    let content = record.props.clone();

    rsx! {
        div { style: "{frame}",
            ElementContent { content, editing: false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual_editor::model::ElementKind;

    #[test]
    fn text_style_carries_font_settings() {
        let style = content_style(&ElementProps::defaults(ElementKind::Text));
        assert!(style.contains("font-size: 16px;"));
        assert!(style.contains("color: #000000;"));
        assert!(style.contains("text-align: left;"));
    }

    #[test]
    fn container_style_carries_box_settings() {
        let style = content_style(&ElementProps::defaults(ElementKind::Container));
        assert!(style.contains("padding: 16px;"));
        assert!(style.contains("border: 1px solid #e2e8f0;"));
        assert!(style.contains("display: block;"));
    }

    #[test]
    fn frame_positions_absolutely() {
        let record = ElementRecord::new(ElementId::new(), ElementKind::Image, Point::new(12.0, 34.5));
        assert_eq!(
            frame_style(&record),
            "position: absolute; left: 12px; top: 34.5px; width: 200px; height: 100px;"
        );
    }
}
