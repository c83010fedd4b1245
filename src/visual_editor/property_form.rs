use dioxus::html::HasFileData;
use dioxus::prelude::*;

use super::editor::{dispatch, dispatch_edit, EditKey, EDITOR};
use super::image_upload::{use_image_upload, UploadStatus};
use super::model::{ElementId, ElementKind, ElementProps, ElementRecord, PropField};
use super::state::{Action, ElementPatch};

// Live copy of the selected element's properties. Every edit lands here first and
// the whole set is then flushed to the store.
pub static EDIT_BUFFER: GlobalSignal<Option<EditBuffer>> = Signal::global(|| None);

#[derive(Clone, Debug, PartialEq)]
pub struct EditBuffer {
    id: ElementId,
    props: ElementProps,
}

impl EditBuffer {
    pub fn load(record: &ElementRecord) -> Self {
        Self {
            id: record.id,
            props: record.props.clone(),
        }
    }

    /// Whether the buffer no longer mirrors `record`, e.g. after a selection change or undo.
    pub fn is_stale_for(&self, record: &ElementRecord) -> bool {
        self.id != record.id || self.props != record.props
    }

    /// Applies the edits and returns the update carrying the full property set,
    /// or `None` when none of the fields belong to this kind.
    pub fn edit<'a>(&mut self, edits: impl IntoIterator<Item = (PropField, &'a str)>) -> Option<Action> {
        let mut changed = false;
        for (field, value) in edits {
            changed |= self.props.set(field, value);
        }
        changed.then(|| Action::Update {
            id: self.id,
            patch: ElementPatch::props(self.props.clone()),
        })
    }
}

fn apply_edits(id: ElementId, edits: &[(PropField, &str)]) {
    flush_edits(id, edits, None);
}

// Keystrokes into one field collapse into a single undo step.
fn type_into(id: ElementId, field: PropField, value: &str) {
    flush_edits(id, &[(field, value)], Some(EditKey::Prop(id, field)));
}

fn flush_edits(id: ElementId, edits: &[(PropField, &str)], key: Option<EditKey>) {
    let action = {
        let editor = EDITOR.read();
        let Some(record) = editor.state().get(id) else {
            return;
        };
        let mut slot = EDIT_BUFFER.write();
        if slot.as_ref().map_or(true, |buffer| buffer.is_stale_for(record)) {
            *slot = Some(EditBuffer::load(record));
        }
        slot.as_mut().and_then(|buffer| buffer.edit(edits.iter().copied()))
    };
    match (action, key) {
        (Some(action), Some(key)) => dispatch_edit(action, key),
        (Some(action), None) => dispatch(action),
        (None, _) => {}
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    TextArea,
    Text(&'static str),
    Url(&'static str),
    Color,
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub field: PropField,
    pub label: &'static str,
    pub control: Control,
}

const fn row(field: PropField, label: &'static str, control: Control) -> FieldSpec {
    FieldSpec { field, label, control }
}

const FONT_SIZES: &[(&str, &str)] = &[
    ("12px", "12px"),
    ("14px", "14px"),
    ("16px", "16px"),
    ("18px", "18px"),
    ("20px", "20px"),
    ("24px", "24px"),
    ("32px", "32px"),
];
const FONT_WEIGHTS: &[(&str, &str)] = &[("normal", "Normal"), ("bold", "Bold"), ("lighter", "Light")];
const TEXT_ALIGNS: &[(&str, &str)] = &[("left", "Left"), ("center", "Center"), ("right", "Right")];
const BUTTON_RADII: &[(&str, &str)] = &[
    ("0px", "None"),
    ("4px", "Small"),
    ("8px", "Medium"),
    ("12px", "Large"),
    ("9999px", "Full"),
];
const CONTAINER_RADII: &[(&str, &str)] = &[
    ("0px", "None"),
    ("4px", "Small"),
    ("8px", "Medium"),
    ("12px", "Large"),
    ("16px", "Extra Large"),
];
const PADDINGS: &[(&str, &str)] = &[
    ("8px", "Small"),
    ("16px", "Medium"),
    ("24px", "Large"),
    ("32px", "Extra Large"),
    ("48px", "2X Large"),
];
const DISPLAYS: &[(&str, &str)] = &[
    ("block", "Block"),
    ("flex", "Flex"),
    ("grid", "Grid"),
    ("inline-block", "Inline Block"),
];

const TEXT_FIELDS: &[FieldSpec] = &[
    row(PropField::Content, "Content", Control::TextArea),
    row(PropField::FontSize, "Font Size", Control::Select(FONT_SIZES)),
    row(PropField::Color, "Color", Control::Color),
    row(PropField::FontWeight, "Font Weight", Control::Select(FONT_WEIGHTS)),
    row(PropField::TextAlign, "Text Align", Control::Select(TEXT_ALIGNS)),
];
const IMAGE_FIELDS: &[FieldSpec] = &[
    row(PropField::Src, "Image Source", Control::Url("https://example.com/image.jpg")),
    row(PropField::Alt, "Alt Text", Control::Text("Describe the image")),
];
const BUTTON_FIELDS: &[FieldSpec] = &[
    row(PropField::Text, "Button Text", Control::Text("Button")),
    row(PropField::BackgroundColor, "Background Color", Control::Color),
    row(PropField::TextColor, "Text Color", Control::Color),
    row(PropField::BorderRadius, "Border Radius", Control::Select(BUTTON_RADII)),
    row(PropField::Href, "Button Link", Control::Url("https://example.com")),
];
const CONTAINER_FIELDS: &[FieldSpec] = &[
    row(PropField::BackgroundColor, "Background Color", Control::Color),
    row(PropField::BorderRadius, "Border Radius", Control::Select(CONTAINER_RADII)),
    row(PropField::Padding, "Padding", Control::Select(PADDINGS)),
    row(PropField::Border, "Border", Control::Text("1px solid #e2e8f0")),
    row(PropField::Display, "Display", Control::Select(DISPLAYS)),
];

pub fn fields_for(kind: ElementKind) -> &'static [FieldSpec] {
    match kind {
        ElementKind::Text => TEXT_FIELDS,
        ElementKind::Image => IMAGE_FIELDS,
        ElementKind::Button => BUTTON_FIELDS,
        ElementKind::Container => CONTAINER_FIELDS,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: &'static [(PropField, &'static str)],
}

pub const BUTTON_PRESETS: &[Preset] = &[
    Preset { name: "Primary", values: &[(PropField::BackgroundColor, "#3b82f6"), (PropField::TextColor, "#ffffff")] },
    Preset { name: "Secondary", values: &[(PropField::BackgroundColor, "#6b7280"), (PropField::TextColor, "#ffffff")] },
    Preset { name: "Success", values: &[(PropField::BackgroundColor, "#10b981"), (PropField::TextColor, "#ffffff")] },
    Preset { name: "Warning", values: &[(PropField::BackgroundColor, "#f59e0b"), (PropField::TextColor, "#ffffff")] },
    Preset { name: "Danger", values: &[(PropField::BackgroundColor, "#ef4444"), (PropField::TextColor, "#ffffff")] },
    Preset { name: "Light", values: &[(PropField::BackgroundColor, "#f8fafc"), (PropField::TextColor, "#374151")] },
];

pub const CONTAINER_PRESETS: &[Preset] = &[
    Preset {
        name: "Card",
        values: &[
            (PropField::BackgroundColor, "#ffffff"),
            (PropField::BorderRadius, "12px"),
            (PropField::Padding, "24px"),
            (PropField::Border, "1px solid #e2e8f0"),
        ],
    },
    Preset {
        name: "Hero Section",
        values: &[
            (PropField::BackgroundColor, "#1f2937"),
            (PropField::BorderRadius, "0px"),
            (PropField::Padding, "48px"),
            (PropField::Border, "none"),
        ],
    },
    Preset {
        name: "Sidebar",
        values: &[
            (PropField::BackgroundColor, "#f8fafc"),
            (PropField::BorderRadius, "8px"),
            (PropField::Padding, "16px"),
            (PropField::Border, "1px solid #e2e8f0"),
        ],
    },
];

pub const SAMPLE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=400",
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400",
    "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=400",
];

pub fn presets_for(kind: ElementKind) -> &'static [Preset] {
    match kind {
        ElementKind::Button => BUTTON_PRESETS,
        ElementKind::Container => CONTAINER_PRESETS,
        ElementKind::Text | ElementKind::Image => &[],
    }
}

const INPUT_STYLE: &str =
    "width: 100%; padding: 8px 12px; border: 1px solid #cbd5e1; border-radius: 8px; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; font-size: 13px; font-weight: 500; color: #334155; margin-bottom: 6px;";

/// Inputs for the selected element's properties.
#[component]
pub fn PropertyForm(element_id: ElementId) -> Element {
    let editor = EDITOR.read();
    let Some(record) = editor.state().get(element_id) else {
        return rsx!(div { "Element not found" });
    };

    // Render from the buffer while it tracks this record, otherwise from the store.
    let props = match EDIT_BUFFER.read().as_ref() {
        Some(buffer) if !buffer.is_stale_for(record) => buffer.props.clone(),
        _ => record.props.clone(),
    };
    let kind = props.kind();

    rsx! {
        div {
            class: "property-form",
            style: "display: flex; flex-direction: column; gap: 16px;",
            for field_spec in fields_for(kind).iter().copied() {
                FieldInput {
                    key: "{field_spec.label}",
                    element_id,
                    field_spec,
                    value: props.get(field_spec.field).unwrap_or_default().to_string(),
                }
            }

            if kind == ElementKind::Image {
                ImageUploadField { element_id }
                SampleImages { element_id }
            }

            if !presets_for(kind).is_empty() {
                div {
                    label { style: LABEL_STYLE, "Preset Styles" }
                    div { style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 8px;",
                        for preset in presets_for(kind).iter().copied() {
                            PresetButton { key: "{preset.name}", element_id, preset }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(element_id: ElementId, field_spec: FieldSpec, value: String) -> Element {
    let field = field_spec.field;
    let on_edit = move |e: FormEvent| type_into(element_id, field, &e.value());

    rsx! {
        div {
            label { style: LABEL_STYLE, "{field_spec.label}" }
            match field_spec.control {
                Control::TextArea => rsx! {
                    textarea { style: INPUT_STYLE, rows: 3, value: "{value}", oninput: on_edit }
                },
                Control::Text(placeholder) => rsx! {
                    input { style: INPUT_STYLE, r#type: "text", placeholder, value: "{value}", oninput: on_edit }
                },
                Control::Url(placeholder) => rsx! {
                    input { style: INPUT_STYLE, r#type: "url", placeholder, value: "{value}", oninput: on_edit }
                },
                Control::Color => rsx! {
                    input {
                        style: "width: 100%; height: 40px; border: 1px solid #cbd5e1; border-radius: 8px;",
                        r#type: "color",
                        value: "{value}",
                        oninput: on_edit,
                    }
                },
                Control::Select(options) => rsx! {
                    select { style: INPUT_STYLE, value: "{value}", onchange: on_edit,
                        for (option_value, option_label) in options.iter().copied() {
                            option {
                                value: option_value,
                                selected: option_value == value,
                                "{option_label}"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn PresetButton(element_id: ElementId, preset: Preset) -> Element {
    let background = preset
        .values
        .iter()
        .find(|(field, _)| *field == PropField::BackgroundColor)
        .map_or("#ffffff", |(_, value)| *value);
    let color = preset
        .values
        .iter()
        .find(|(field, _)| *field == PropField::TextColor)
        .map_or("#334155", |(_, value)| *value);

    rsx! {
        button {
            r#type: "button",
            style: "padding: 8px 12px; font-size: 13px; border: 1px solid #cbd5e1; border-radius: 8px; background: {background}; color: {color}; cursor: pointer;",
            onclick: move |_| apply_edits(element_id, preset.values),
            "{preset.name}"
        }
    }
}

#[component]
fn ImageUploadField(element_id: ElementId) -> Element {
    let mut upload = use_image_upload();
    let status = upload.status.read().clone();

    rsx! {
        div {
            label { style: LABEL_STYLE, "Upload Image" }
            input {
                style: INPUT_STYLE,
                r#type: "file",
                accept: "image/*",
                onchange: move |e: FormEvent| {
                    upload.start(e.files(), move |url| apply_edits(element_id, &[(PropField::Src, url.as_str())]));
                },
            }
            match status {
                UploadStatus::Idle => rsx! {},
                UploadStatus::Loading(name) => rsx! {
                    div { style: "font-size: 12px; color: #64748b; margin-top: 4px;", "Loading {name}…" }
                },
                UploadStatus::Failed(err) => rsx! {
                    div { style: "font-size: 12px; color: #dc2626; margin-top: 4px;", "{err}" }
                },
            }
        }
    }
}

#[component]
fn SampleImages(element_id: ElementId) -> Element {
    rsx! {
        div {
            label { style: LABEL_STYLE, "Sample Images" }
            div { style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 8px;",
                for (index, src) in SAMPLE_IMAGES.iter().copied().enumerate() {
                    button {
                        key: "{src}",
                        r#type: "button",
                        style: "aspect-ratio: 1; padding: 0; overflow: hidden; border: 2px solid #e2e8f0; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| apply_edits(element_id, &[(PropField::Src, src)]),
                        img { src, alt: format!("Sample {}", index + 1), style: "width: 100%; height: 100%; object-fit: cover;" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual_editor::model::Point;

    fn record(kind: ElementKind) -> ElementRecord {
        ElementRecord::new(ElementId::new(), kind, Point::default())
    }

    #[test]
    fn every_field_belongs_to_its_kind() {
        for kind in ElementKind::ALL {
            let props = ElementProps::defaults(kind);
            for field_spec in fields_for(kind) {
                assert!(props.get(field_spec.field).is_some(), "{kind} lacks {:?}", field_spec.field);
            }
        }
    }

    #[test]
    fn presets_only_touch_their_kind() {
        for kind in ElementKind::ALL {
            let mut props = ElementProps::defaults(kind);
            for preset in presets_for(kind) {
                for (field, value) in preset.values {
                    assert!(props.set(*field, *value), "{} sets foreign field {field:?}", preset.name);
                }
            }
        }
    }

    #[test]
    fn edit_flushes_whole_property_set() {
        let record = record(ElementKind::Text);
        let mut buffer = EditBuffer::load(&record);
        let action = buffer.edit([(PropField::Color, "#ff0000")]).unwrap();

        let mut expected = record.props.clone();
        expected.set(PropField::Color, "#ff0000");
        assert_eq!(
            action,
            Action::Update {
                id: record.id,
                patch: ElementPatch::props(expected),
            }
        );
    }

    #[test]
    fn foreign_field_edit_is_dropped() {
        let record = record(ElementKind::Image);
        let mut buffer = EditBuffer::load(&record);
        assert_eq!(buffer.edit([(PropField::Padding, "8px")]), None);
        assert!(!buffer.is_stale_for(&record));
    }

    #[test]
    fn buffer_goes_stale_when_record_changes() {
        let mut record = record(ElementKind::Button);
        let buffer = EditBuffer::load(&record);
        record.props.set(PropField::Text, "Changed elsewhere");
        assert!(buffer.is_stale_for(&record));
        assert!(buffer.is_stale_for(&self::record(ElementKind::Button)));
    }

    #[test]
    fn container_preset_flushes_in_one_update() {
        let record = record(ElementKind::Container);
        let mut buffer = EditBuffer::load(&record);
        let Some(Action::Update { patch, .. }) = buffer.edit(CONTAINER_PRESETS[1].values.iter().copied()) else {
            panic!("expected an update");
        };
        let props = patch.props.unwrap();
        assert_eq!(props.get(PropField::BackgroundColor), Some("#1f2937"));
        assert_eq!(props.get(PropField::Padding), Some("48px"));
        assert_eq!(props.get(PropField::Border), Some("none"));
        assert_eq!(props.get(PropField::Display), Some("block"));
    }
}
