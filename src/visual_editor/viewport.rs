use crate::config::{
    BREAKPOINT_DESKTOP, BREAKPOINT_MOBILE, BREAKPOINT_TABLET, DESKTOP_CANVAS, DESKTOP_SCALE,
    MOBILE_CANVAS_GUTTER, MOBILE_CANVAS_HEIGHT, MOBILE_SCALE, TABLET_CANVAS, TABLET_SCALE,
};

use super::model::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn for_width(window_width: f64) -> Self {
        if window_width < BREAKPOINT_TABLET {
            Breakpoint::Mobile
        } else if window_width < BREAKPOINT_DESKTOP {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "Mobile",
            Breakpoint::Tablet => "Tablet",
            Breakpoint::Desktop => "Desktop",
        }
    }
}

/// Which tier the canvas renders at: follow the window, or a forced device preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceMode {
    #[default]
    Auto,
    Fixed(Breakpoint),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub breakpoint: Breakpoint,
    pub scale: f64,
    pub canvas_size: Size,
}

impl Viewport {
    pub fn for_window(window_width: f64) -> Self {
        Self::at(Breakpoint::for_width(window_width), window_width)
    }

    pub fn resolve(mode: DeviceMode, window_width: f64) -> Self {
        match mode {
            DeviceMode::Auto => Self::for_window(window_width),
            // A forced phone preview on a wide window gets a phone-sized canvas.
            DeviceMode::Fixed(Breakpoint::Mobile) => {
                Self::at(Breakpoint::Mobile, window_width.min(BREAKPOINT_MOBILE))
            }
            DeviceMode::Fixed(breakpoint) => Self::at(breakpoint, window_width),
        }
    }

    fn at(breakpoint: Breakpoint, window_width: f64) -> Self {
        match breakpoint {
            Breakpoint::Mobile => Self {
                breakpoint,
                scale: MOBILE_SCALE,
                canvas_size: Size::new(
                    (window_width - MOBILE_CANVAS_GUTTER).max(0.0),
                    MOBILE_CANVAS_HEIGHT,
                ),
            },
            Breakpoint::Tablet => Self {
                breakpoint,
                scale: TABLET_SCALE,
                canvas_size: TABLET_CANVAS,
            },
            Breakpoint::Desktop => Self {
                breakpoint,
                scale: DESKTOP_SCALE,
                canvas_size: DESKTOP_CANVAS,
            },
        }
    }

    /// Maps a pointer position in viewport pixels to canvas space, given where the
    /// (scaled) canvas' top-left corner sits on screen.
    pub fn to_canvas(&self, pointer: Point, canvas_origin: Point) -> Point {
        Point::new(
            (pointer.x - canvas_origin.x) / self.scale,
            (pointer.y - canvas_origin.y) / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_switch_at_breakpoints() {
        assert_eq!(Breakpoint::for_width(767.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn mobile_drop_maps_through_scale() {
        let viewport = Viewport::for_window(600.0);
        assert_eq!(viewport.scale, 0.8);
        assert_eq!(viewport.canvas_size, Size::new(568.0, 600.0));

        let at = viewport.to_canvas(Point::new(100.0, 100.0), Point::new(16.0, 16.0));
        assert!((at.x - 105.0).abs() < 1e-9);
        assert!((at.y - 105.0).abs() < 1e-9);
    }

    #[test]
    fn tablet_and_desktop_have_fixed_canvas() {
        let tablet = Viewport::for_window(900.0);
        assert_eq!(tablet.scale, 0.9);
        assert_eq!(tablet.canvas_size, Size::new(800.0, 600.0));

        let desktop = Viewport::for_window(1920.0);
        assert_eq!(desktop.scale, 1.0);
        assert_eq!(desktop.canvas_size, Size::new(1200.0, 800.0));
        assert_eq!(
            desktop.to_canvas(Point::new(310.0, 220.0), Point::new(10.0, 20.0)),
            Point::new(300.0, 200.0)
        );
    }

    #[test]
    fn forced_device_overrides_window() {
        let phone = Viewport::resolve(DeviceMode::Fixed(Breakpoint::Mobile), 1920.0);
        assert_eq!(phone.breakpoint, Breakpoint::Mobile);
        assert_eq!(phone.canvas_size, Size::new(448.0, 600.0));

        let tablet = Viewport::resolve(DeviceMode::Fixed(Breakpoint::Tablet), 1920.0);
        assert_eq!(tablet.breakpoint, Breakpoint::Tablet);

        assert_eq!(
            Viewport::resolve(DeviceMode::Auto, 500.0),
            Viewport::for_window(500.0)
        );
    }
}
