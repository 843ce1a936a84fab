//! Synthetic geometry and frame recording for tests and headless drivers.
//!
//! Enabled by the `testing` feature.

use crate::slider::{GeometryResolver, Rect, SliderFrame, SliderSurface};

/// Geometry with fixed rectangles and an adjustable viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGeometry {
    /// Reported viewport width.
    pub viewport_width: f64,
    /// Reported track rectangle.
    pub track: Rect,
    /// Reported wrapper rectangle.
    pub wrapper: Rect,
}

impl FixedGeometry {
    /// Creates geometry from explicit rectangles.
    pub fn new(viewport_width: f64, track: Rect, wrapper: Rect) -> Self {
        Self {
            viewport_width,
            track,
            wrapper,
        }
    }

    /// A square track of side `length` at (`origin`, `origin`) inside a
    /// wrapper anchored at the viewport origin, so both layouts map against
    /// the same extent.
    pub fn square(viewport_width: f64, origin: f64, length: f64) -> Self {
        let extent = origin + length;
        Self::new(
            viewport_width,
            Rect::new(origin, origin, length, length),
            Rect::new(0.0, 0.0, extent, extent),
        )
    }

    /// Changes the reported viewport width, e.g. to cross the breakpoint.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }
}

impl GeometryResolver for FixedGeometry {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn track_rect(&self) -> Rect {
        self.track
    }

    fn wrapper_rect(&self) -> Rect {
        self.wrapper
    }
}

/// Surface that keeps every frame it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Vec<SliderFrame>,
}

impl RecordingSurface {
    /// All frames in application order.
    pub fn frames(&self) -> &[SliderFrame] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&SliderFrame> {
        self.frames.last()
    }

    /// Drops recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl SliderSurface for RecordingSurface {
    fn apply(&mut self, frame: &SliderFrame) {
        self.frames.push(frame.clone());
    }
}
