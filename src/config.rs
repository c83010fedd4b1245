use crate::visual_editor::model::{Point, Size};

pub const DEFAULT_ELEMENT_SIZE: Size = Size::new(200.0, 100.0);

pub const CANVAS_DEFAULT: Size = Size::new(1200.0, 800.0);
pub const CANVAS_MIN: Size = Size::new(800.0, 600.0);
pub const CANVAS_MAX: Size = Size::new(1920.0, 1080.0);

pub const BREAKPOINT_MOBILE: f64 = 480.0;
pub const BREAKPOINT_TABLET: f64 = 768.0;
pub const BREAKPOINT_DESKTOP: f64 = 1024.0;

/// Horizontal gutter subtracted from the window width on phones.
pub const MOBILE_CANVAS_GUTTER: f64 = 32.0;
pub const MOBILE_CANVAS_HEIGHT: f64 = 600.0;
pub const MOBILE_SCALE: f64 = 0.8;

pub const TABLET_CANVAS: Size = Size::new(800.0, 600.0);
pub const TABLET_SCALE: f64 = 0.9;

pub const DESKTOP_CANVAS: Size = CANVAS_DEFAULT;
pub const DESKTOP_SCALE: f64 = 1.0;

/// Where a dropped child lands relative to its container's corner.
pub const CONTAINER_DROP_INSET: Point = Point::new(20.0, 20.0);
pub const PASTE_OFFSET: Point = Point::new(20.0, 20.0);

/// Click-to-add placement, for layouts without drag and drop.
pub const CLICK_ADD_ORIGIN: Point = Point::new(40.0, 40.0);
pub const CLICK_ADD_STEP: f64 = 20.0;

pub const HISTORY_LIMIT: usize = 100;
