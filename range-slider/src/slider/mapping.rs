//! Value, percentage and pointer position conversions.
//!
//! The slider places its maximum at the leading edge of the page's
//! right-to-left reading direction: the top of a vertical track and the left
//! of a horizontal one. Each orientation is an [`AxisMapping`] picked by
//! [`LayoutMode`]; both run the same inverted ratio along their own axis.

use crate::config::SliderConfig;

use super::layout::{GeometrySnapshot, LayoutMode, PointerPosition};

/// Converts a bounded value to its fill percentage in `[0, 100]`.
pub fn value_to_percentage(value: i32, config: &SliderConfig) -> f64 {
    let offset = i64::from(config.clamp(value)) - i64::from(config.min());
    (offset as f64 * 100.0 / config.span() as f64).clamp(0.0, 100.0)
}

/// Converts a percentage back to the nearest value inside the bounds.
///
/// Halves round towards positive infinity.
pub fn percentage_to_value(percentage: f64, config: &SliderConfig) -> i32 {
    let percentage = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };
    let raw = f64::from(config.min()) + percentage / 100.0 * config.span() as f64;
    let rounded = (raw + 0.5).floor();
    config.clamp(rounded as i32)
}

/// Coordinate convention for one layout orientation.
pub trait AxisMapping {
    /// Layout mode this mapping serves.
    fn mode(&self) -> LayoutMode;

    /// Reads the pointer coordinate along this axis.
    fn pointer_coordinate(&self, pointer: PointerPosition) -> f64;

    /// Maps a pointer position to a percentage, saturating at the track ends.
    ///
    /// Returns `None` when the track has no length to map against.
    fn pointer_percentage(
        &self,
        pointer: PointerPosition,
        geometry: &GeometrySnapshot,
    ) -> Option<f64> {
        if !(geometry.track_length > 0.0) {
            return None;
        }
        let along = self.pointer_coordinate(pointer) - geometry.track_origin;
        let ratio = (along / geometry.track_length).clamp(0.0, 1.0);
        Some((1.0 - ratio) * 100.0)
    }

    /// Distance from the wrapper's start edge to the point representing
    /// `percentage` on the track.
    fn leading_offset(&self, percentage: f64, geometry: &GeometrySnapshot) -> f64 {
        let fraction = percentage.clamp(0.0, 100.0) / 100.0;
        geometry.track_offset_in_wrapper() + geometry.track_length * (1.0 - fraction)
    }
}

/// Vertical track: percentage grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalAxis;

impl AxisMapping for VerticalAxis {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Compact
    }

    fn pointer_coordinate(&self, pointer: PointerPosition) -> f64 {
        pointer.y
    }
}

/// Horizontal right-to-left track: percentage grows leftward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RtlHorizontalAxis;

impl AxisMapping for RtlHorizontalAxis {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Wide
    }

    fn pointer_coordinate(&self, pointer: PointerPosition) -> f64 {
        pointer.x
    }
}

impl LayoutMode {
    /// The coordinate convention used in this mode.
    pub fn axis(self) -> &'static dyn AxisMapping {
        match self {
            LayoutMode::Compact => &VerticalAxis,
            LayoutMode::Wide => &RtlHorizontalAxis,
        }
    }
}

/// Maps a pointer position to a percentage under `mode`.
pub fn pointer_to_percentage(
    pointer: PointerPosition,
    geometry: &GeometrySnapshot,
    mode: LayoutMode,
) -> Option<f64> {
    mode.axis().pointer_percentage(pointer, geometry)
}
