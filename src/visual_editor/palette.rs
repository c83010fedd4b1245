use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::config::{CLICK_ADD_ORIGIN, CLICK_ADD_STEP};

use super::drag::{DragPayload, DRAG_PAYLOAD};
use super::editor::{dispatch, EDITOR};
use super::model::{ElementKind, Point};
use super::state::Action;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTemplate {
    pub kind: ElementKind,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const TEMPLATES: [ElementTemplate; 4] = [
    ElementTemplate { kind: ElementKind::Text, label: "Text", icon: "📝" },
    ElementTemplate { kind: ElementKind::Image, label: "Image", icon: "🖼️" },
    ElementTemplate { kind: ElementKind::Button, label: "Button", icon: "🔘" },
    ElementTemplate { kind: ElementKind::Container, label: "Container", icon: "📦" },
];

/// Where a click-added element goes when `count` elements already exist.
/// Cascades diagonally so consecutive adds don't stack exactly.
pub fn click_add_position(count: usize) -> Point {
    let step = (count % 10) as f64 * CLICK_ADD_STEP;
    Point::new(CLICK_ADD_ORIGIN.x + step, CLICK_ADD_ORIGIN.y + step)
}

fn add_from_click(kind: ElementKind) {
    let count = EDITOR.read().state().len();
    dispatch(Action::add(kind, click_add_position(count)));
}

#[component]
pub fn ElementPalette(#[props(default = true)] show_instructions: bool) -> Element {
    rsx! {
        div {
            class: "toolbox",
            style: "padding: 16px;",
            h3 { style: "margin: 0 0 16px 0; font-size: 18px;", "Elements" }

            div {
                class: "palette-grid",
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
                for template in TEMPLATES {
                    PaletteItem { key: "{template.label}", template }
                }
            }

            if show_instructions {
                div { style: "margin-top: 24px;",
                    h4 { style: "margin: 0 0 8px 0; font-size: 14px;", "Instructions" }
                    p { style: "font-size: 12px; color: #666; line-height: 1.4;",
                        "Drag elements to canvas"
                        br {}
                        "Click to select & edit"
                        br {}
                        "Drop onto a container to nest"
                    }
                }
            }
        }
    }
}

#[component]
fn PaletteItem(template: ElementTemplate) -> Element {
    let dragging = matches!(*DRAG_PAYLOAD.read(), Some(DragPayload::Template(kind)) if kind == template.kind);
    let opacity = if dragging { "0.5" } else { "1" };

    rsx! {
        div {
            class: "palette-item",
            style: "
                padding: 12px;
                border: 2px solid #e2e8f0;
                border-radius: 8px;
                cursor: move;
                opacity: {opacity};
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                user-select: none;
            ",
            draggable: true,
            ondragstart: move |_| {
                debug!(kind = %template.kind, "palette drag");
                *DRAG_PAYLOAD.write() = Some(DragPayload::Template(template.kind));
            },
            ondragend: move |_| *DRAG_PAYLOAD.write() = None,
            onclick: move |_| add_from_click(template.kind),
            div { style: "font-size: 24px;", "{template.icon}" }
            div { style: "font-size: 13px; font-weight: 500; color: #334155;", "{template.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_template_per_kind() {
        let kinds: Vec<_> = TEMPLATES.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, ElementKind::ALL.to_vec());
        for template in TEMPLATES {
            assert_eq!(template.label, template.kind.label());
        }
    }

    #[test]
    fn click_positions_cascade_and_wrap() {
        assert_eq!(click_add_position(0), Point::new(40.0, 40.0));
        assert_eq!(click_add_position(2), Point::new(80.0, 80.0));
        assert_eq!(click_add_position(10), click_add_position(0));
    }
}
