//! Geometry resolution and responsive layout classification.

/// An axis-aligned rectangle in viewport (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its left/top corner and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A pointer location in viewport (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Creates a pointer position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Responsive rendering mode of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: vertical track, maximum at the top.
    Compact,
    /// Wide viewport: horizontal right-to-left track, maximum at the left.
    Wide,
}

impl LayoutMode {
    /// Classifies a viewport width against `breakpoint`.
    pub fn for_viewport(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width <= breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

/// Track and wrapper geometry projected onto the motion axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    /// Track start edge (top in compact mode, left in wide mode).
    pub track_origin: f64,
    /// Track size along the motion axis.
    pub track_length: f64,
    /// Wrapper start edge along the same axis.
    pub wrapper_origin: f64,
}

impl GeometrySnapshot {
    /// Projects the track and wrapper rectangles onto the axis `mode` moves
    /// along.
    pub fn project(track: Rect, wrapper: Rect, mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Compact => Self {
                track_origin: track.top,
                track_length: track.height,
                wrapper_origin: wrapper.top,
            },
            LayoutMode::Wide => Self {
                track_origin: track.left,
                track_length: track.width,
                wrapper_origin: wrapper.left,
            },
        }
    }

    /// Track start relative to the wrapper the thumb is positioned in.
    pub fn track_offset_in_wrapper(&self) -> f64 {
        self.track_origin - self.wrapper_origin
    }
}

/// Layout mode and axis geometry resolved for one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    /// Active layout mode.
    pub mode: LayoutMode,
    /// Axis geometry under `mode`.
    pub snapshot: GeometrySnapshot,
}

/// Source of live layout measurements.
///
/// Implementations must read fresh values on every call: the track can move
/// or resize between two pointer events.
pub trait GeometryResolver {
    /// Current viewport width in px.
    fn viewport_width(&self) -> f64;
    /// Current track rectangle in viewport coordinates.
    fn track_rect(&self) -> Rect;
    /// Current rectangle of the wrapper containing the thumb.
    fn wrapper_rect(&self) -> Rect;

    /// Resolves the layout mode and axis geometry against `breakpoint`.
    fn resolve(&self, breakpoint: f64) -> ResolvedGeometry {
        let mode = LayoutMode::for_viewport(self.viewport_width(), breakpoint);
        ResolvedGeometry {
            mode,
            snapshot: GeometrySnapshot::project(self.track_rect(), self.wrapper_rect(), mode),
        }
    }
}

impl<G: GeometryResolver + ?Sized> GeometryResolver for &G {
    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }

    fn track_rect(&self) -> Rect {
        (**self).track_rect()
    }

    fn wrapper_rect(&self) -> Rect {
        (**self).wrapper_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_viewport(768.0, 768.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_viewport(320.0, 768.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_viewport(768.5, 768.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_viewport(1440.0, 768.0), LayoutMode::Wide);
    }

    #[test]
    fn test_projection_follows_mode() {
        let track = Rect::new(40.0, 120.0, 300.0, 8.0);
        let wrapper = Rect::new(30.0, 100.0, 320.0, 40.0);

        let wide = GeometrySnapshot::project(track, wrapper, LayoutMode::Wide);
        assert_eq!(wide.track_origin, 40.0);
        assert_eq!(wide.track_length, 300.0);
        assert_eq!(wide.track_offset_in_wrapper(), 10.0);

        let compact = GeometrySnapshot::project(track, wrapper, LayoutMode::Compact);
        assert_eq!(compact.track_origin, 120.0);
        assert_eq!(compact.track_length, 8.0);
        assert_eq!(compact.track_offset_in_wrapper(), 20.0);
    }

    struct Static;

    impl GeometryResolver for Static {
        fn viewport_width(&self) -> f64 {
            500.0
        }

        fn track_rect(&self) -> Rect {
            Rect::new(0.0, 50.0, 10.0, 200.0)
        }

        fn wrapper_rect(&self) -> Rect {
            Rect::new(0.0, 40.0, 40.0, 220.0)
        }
    }

    #[test]
    fn test_resolve_combines_mode_and_snapshot() {
        let resolved = Static.resolve(768.0);
        assert_eq!(resolved.mode, LayoutMode::Compact);
        assert_eq!(resolved.snapshot.track_length, 200.0);
        assert_eq!(resolved.snapshot.track_offset_in_wrapper(), 10.0);

        let resolved = Static.resolve(400.0);
        assert_eq!(resolved.mode, LayoutMode::Wide);
        assert_eq!(resolved.snapshot.track_length, 10.0);
    }
}
