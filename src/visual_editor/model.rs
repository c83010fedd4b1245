use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::DEFAULT_ELEMENT_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell elements apart in the panel.
    pub fn short(&self) -> String {
        let mut simple = self.0.simple().to_string();
        simple.truncate(8);
        simple
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Button,
    Container,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Container,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
            ElementKind::Container => "Container",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub content: String,
    pub font_size: String,
    pub color: String,
    pub font_weight: String,
    pub text_align: String,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            content: "Sample Text".into(),
            font_size: "16px".into(),
            color: "#000000".into(),
            font_weight: "normal".into(),
            text_align: "left".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: "https://via.placeholder.com/200x100".into(),
            alt: "Sample Image".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub text: String,
    pub background_color: String,
    pub text_color: String,
    pub border_radius: String,
    pub href: String,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Button".into(),
            background_color: "#3b82f6".into(),
            text_color: "#ffffff".into(),
            border_radius: "8px".into(),
            href: "#".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    pub background_color: String,
    pub border_radius: String,
    pub padding: String,
    pub border: String,
    pub display: String,
}

impl Default for ContainerProps {
    fn default() -> Self {
        Self {
            background_color: "#f8fafc".into(),
            border_radius: "8px".into(),
            padding: "16px".into(),
            border: "1px solid #e2e8f0".into(),
            display: "block".into(),
        }
    }
}

/// Property set of an element. The variant fixes the element's kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties", rename_all = "lowercase")]
pub enum ElementProps {
    Text(TextProps),
    Image(ImageProps),
    Button(ButtonProps),
    Container(ContainerProps),
}

impl ElementProps {
    pub fn defaults(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => ElementProps::Text(TextProps::default()),
            ElementKind::Image => ElementProps::Image(ImageProps::default()),
            ElementKind::Button => ElementProps::Button(ButtonProps::default()),
            ElementKind::Container => ElementProps::Container(ContainerProps::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementProps::Text(_) => ElementKind::Text,
            ElementProps::Image(_) => ElementKind::Image,
            ElementProps::Button(_) => ElementKind::Button,
            ElementProps::Container(_) => ElementKind::Container,
        }
    }

    pub fn get(&self, field: PropField) -> Option<&str> {
        let value = match (self, field) {
            (ElementProps::Text(p), PropField::Content) => &p.content,
            (ElementProps::Text(p), PropField::FontSize) => &p.font_size,
            (ElementProps::Text(p), PropField::Color) => &p.color,
            (ElementProps::Text(p), PropField::FontWeight) => &p.font_weight,
            (ElementProps::Text(p), PropField::TextAlign) => &p.text_align,
            (ElementProps::Image(p), PropField::Src) => &p.src,
            (ElementProps::Image(p), PropField::Alt) => &p.alt,
            (ElementProps::Button(p), PropField::Text) => &p.text,
            (ElementProps::Button(p), PropField::BackgroundColor) => &p.background_color,
            (ElementProps::Button(p), PropField::TextColor) => &p.text_color,
            (ElementProps::Button(p), PropField::BorderRadius) => &p.border_radius,
            (ElementProps::Button(p), PropField::Href) => &p.href,
            (ElementProps::Container(p), PropField::BackgroundColor) => &p.background_color,
            (ElementProps::Container(p), PropField::BorderRadius) => &p.border_radius,
            (ElementProps::Container(p), PropField::Padding) => &p.padding,
            (ElementProps::Container(p), PropField::Border) => &p.border,
            (ElementProps::Container(p), PropField::Display) => &p.display,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Writes `value` into `field`. Returns false when this kind has no such field.
    pub fn set(&mut self, field: PropField, value: impl Into<String>) -> bool {
        let slot = match (self, field) {
            (ElementProps::Text(p), PropField::Content) => &mut p.content,
            (ElementProps::Text(p), PropField::FontSize) => &mut p.font_size,
            (ElementProps::Text(p), PropField::Color) => &mut p.color,
            (ElementProps::Text(p), PropField::FontWeight) => &mut p.font_weight,
            (ElementProps::Text(p), PropField::TextAlign) => &mut p.text_align,
            (ElementProps::Image(p), PropField::Src) => &mut p.src,
            (ElementProps::Image(p), PropField::Alt) => &mut p.alt,
            (ElementProps::Button(p), PropField::Text) => &mut p.text,
            (ElementProps::Button(p), PropField::BackgroundColor) => &mut p.background_color,
            (ElementProps::Button(p), PropField::TextColor) => &mut p.text_color,
            (ElementProps::Button(p), PropField::BorderRadius) => &mut p.border_radius,
            (ElementProps::Button(p), PropField::Href) => &mut p.href,
            (ElementProps::Container(p), PropField::BackgroundColor) => &mut p.background_color,
            (ElementProps::Container(p), PropField::BorderRadius) => &mut p.border_radius,
            (ElementProps::Container(p), PropField::Padding) => &mut p.padding,
            (ElementProps::Container(p), PropField::Border) => &mut p.border,
            (ElementProps::Container(p), PropField::Display) => &mut p.display,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

/// Named property slots, used by the property form to bind inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropField {
    Content,
    FontSize,
    Color,
    FontWeight,
    TextAlign,
    Src,
    Alt,
    Text,
    BackgroundColor,
    TextColor,
    BorderRadius,
    Href,
    Padding,
    Border,
    Display,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub id: ElementId,
    pub position: Point,
    pub size: Size,
    pub props: ElementProps,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ElementId>,
}

impl ElementRecord {
    pub fn new(id: ElementId, kind: ElementKind, position: Point) -> Self {
        Self {
            id,
            position,
            size: DEFAULT_ELEMENT_SIZE,
            props: ElementProps::defaults(kind),
            children: Vec::new(),
            parent_id: None,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    pub fn is_container(&self) -> bool {
        self.kind() == ElementKind::Container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_follow_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementProps::defaults(kind).kind(), kind);
        }
    }

    #[test]
    fn text_defaults() {
        let ElementProps::Text(text) = ElementProps::defaults(ElementKind::Text) else {
            panic!("expected text props");
        };
        assert_eq!(text.content, "Sample Text");
        assert_eq!(text.font_size, "16px");
        assert_eq!(text.color, "#000000");
        assert_eq!(text.font_weight, "normal");
        assert_eq!(text.text_align, "left");
    }

    #[test]
    fn set_rejects_fields_of_other_kinds() {
        let mut props = ElementProps::defaults(ElementKind::Image);
        assert!(!props.set(PropField::Content, "nope"));
        assert!(props.set(PropField::Alt, "Logo"));
        assert_eq!(props.get(PropField::Alt), Some("Logo"));
        assert_eq!(props.get(PropField::Content), None);
    }

    #[test]
    fn button_and_container_share_background_field() {
        let mut button = ElementProps::defaults(ElementKind::Button);
        let mut container = ElementProps::defaults(ElementKind::Container);
        assert!(button.set(PropField::BackgroundColor, "#10b981"));
        assert!(container.set(PropField::BackgroundColor, "#1f2937"));
        assert_eq!(button.get(PropField::BackgroundColor), Some("#10b981"));
        assert_eq!(container.get(PropField::BackgroundColor), Some("#1f2937"));
    }

    #[test]
    fn props_serialize_with_type_tag() {
        let value = serde_json::to_value(ElementProps::defaults(ElementKind::Image)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image",
                "properties": {
                    "src": "https://via.placeholder.com/200x100",
                    "alt": "Sample Image"
                }
            })
        );
    }

    #[test]
    fn record_omits_empty_nesting_fields() {
        let record = ElementRecord::new(ElementId::new(), ElementKind::Text, Point::new(1.0, 2.0));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("children").is_none());
        assert!(value.get("parentId").is_none());
        assert_eq!(value["size"], json!({ "width": 200.0, "height": 100.0 }));
    }

    #[test]
    fn short_id_is_eight_chars() {
        assert_eq!(ElementId::new().short().len(), 8);
    }
}
