use dioxus::prelude::*;

use super::editor::{dispatch, dispatch_edit, EditKey, EDITOR};
use super::model::{ElementId, Point, Size};
use super::property_form::PropertyForm;
use super::state::{Action, ElementPatch};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    X,
    Y,
    Width,
    Height,
}

/// Parses a number typed into a geometry field. Sizes must be positive.
fn parse_geometry(field: Geometry, raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    match field {
        Geometry::Width | Geometry::Height if value <= 0.0 => None,
        _ => Some(value),
    }
}

fn geometry_patch(position: Point, size: Size, field: Geometry, value: f64) -> ElementPatch {
    match field {
        Geometry::X => ElementPatch::position(Point::new(value, position.y)),
        Geometry::Y => ElementPatch::position(Point::new(position.x, value)),
        Geometry::Width => ElementPatch::size(Size::new(value, size.height)),
        Geometry::Height => ElementPatch::size(Size::new(size.width, value)),
    }
}

fn edit_geometry(id: ElementId, field: Geometry, raw: &str) {
    let Some(value) = parse_geometry(field, raw) else {
        return;
    };
    let patch = {
        let editor = EDITOR.read();
        let Some(record) = editor.state().get(id) else {
            return;
        };
        geometry_patch(record.position, record.size, field, value)
    };
    dispatch_edit(Action::Update { id, patch }, EditKey::Geometry(id, field));
}

#[component]
pub fn PropertyPanel() -> Element {
    let editor = EDITOR.read();

    let Some(record) = editor.state().selected() else {
        return rsx! {
            div {
                style: "color: #64748b; text-align: center; padding: 32px;",
                div { style: "font-size: 36px; margin-bottom: 16px;", "⚙️" }
                div { style: "font-size: 18px; font-weight: 500; margin-bottom: 8px;", "Properties" }
                div { style: "font-size: 13px;", "Select an element to edit its properties" }
            }
        };
    };

    let id = record.id;
    let kind = record.kind();
    let short_id = id.short();
    let parent = record.parent_id.map(|parent| parent.short());
    let children = record.children.len();
    let geometry = [
        (Geometry::Width, "Width", record.size.width),
        (Geometry::Height, "Height", record.size.height),
        (Geometry::X, "X", record.position.x),
        (Geometry::Y, "Y", record.position.y),
    ];

    rsx! {
        div {
            class: "properties-panel",
            style: "padding: 16px;",

            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h3 { style: "margin: 0; font-size: 18px;", "Properties" }
                button {
                    onclick: move |_| dispatch(Action::Delete(id)),
                    style: "padding: 4px 12px; font-size: 13px; color: #dc2626; background: none; border: none; cursor: pointer;",
                    "Delete"
                }
            }

            div { style: "margin-bottom: 16px; padding: 12px; background: #f8fafc; border-radius: 8px;",
                div { style: "font-size: 13px; font-weight: 500; color: #334155;", "{kind} Element" }
                div { style: "font-size: 11px; color: #64748b; margin-top: 4px;", "ID: {short_id}..." }
                if let Some(parent) = parent {
                    div { style: "font-size: 11px; color: #64748b; margin-top: 4px; display: flex; gap: 8px; align-items: center;",
                        "Inside container {parent}..."
                        button {
                            onclick: move |_| dispatch(Action::Reparent { id, parent: None }),
                            style: "font-size: 11px; padding: 2px 6px; cursor: pointer;",
                            "Detach"
                        }
                    }
                }
                if record.is_container() {
                    div { style: "font-size: 11px; color: #64748b; margin-top: 4px;",
                        if children == 0 { "No children yet" } else { "Children: {children}" }
                    }
                }
            }

            PropertyForm { key: "{id}", element_id: id }

            div { style: "margin-top: 16px; padding-top: 16px; border-top: 1px solid #e2e8f0;",
                h4 { style: "margin: 0 0 12px 0; font-size: 13px; color: #334155;", "Size & Position" }
                div { style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px;",
                    for (field, label, value) in geometry {
                        div { key: "{label}",
                            label { style: "display: block; font-size: 11px; color: #64748b; margin-bottom: 4px;", "{label}" }
                            input {
                                r#type: "number",
                                value: "{value}",
                                style: "width: 100%; padding: 4px 8px; font-size: 13px; border: 1px solid #cbd5e1; border-radius: 4px; box-sizing: border-box;",
                                oninput: move |e| edit_geometry(id, field, &e.value()),
                            }
                        }
                    }
                }
            }
        }
    }
}
