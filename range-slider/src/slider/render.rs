//! Frame computation and the surface frames are applied to.

use std::fmt;

use crate::config::{SliderConfig, SliderOptions};

use super::{
    layout::{LayoutMode, ResolvedGeometry},
    mapping::value_to_percentage,
};

/// A CSS length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Percentage of the containing block.
    Percent(f64),
    /// Absolute pixels.
    Px(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Percent(value) => write!(f, "{value}%"),
            Length::Px(value) => write!(f, "{value}px"),
        }
    }
}

/// Fill bar sizing. `None` clears an inline override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    /// Inline width.
    pub width: Length,
    /// Inline height.
    pub height: Option<Length>,
}

/// Thumb placement. `None` clears an inline override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbStyle {
    /// Inline `left`.
    pub left: Length,
    /// Inline `top`.
    pub top: Option<Length>,
    /// Inline `transform`.
    pub transform: Option<&'static str>,
}

/// Transform that centres the thumb horizontally on its `left` point.
pub const CENTER_X_TRANSFORM: &str = "translateX(-50%)";

/// Everything a surface needs to display one value.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    /// Value written back into the numeric input.
    pub value: i32,
    /// Layout the frame was computed for.
    pub mode: LayoutMode,
    /// Fill bar sizing.
    pub fill: FillStyle,
    /// Thumb placement.
    pub thumb: ThumbStyle,
    /// Localized label text.
    pub label: String,
}

/// Receives complete frames.
///
/// A frame is applied in one call so that observers never see the input,
/// fill, thumb and label disagree.
pub trait SliderSurface {
    /// Applies `frame` to every dependent element.
    fn apply(&mut self, frame: &SliderFrame);
}

impl<S: SliderSurface + ?Sized> SliderSurface for &mut S {
    fn apply(&mut self, frame: &SliderFrame) {
        (**self).apply(frame);
    }
}

/// Computes the frame for `value` under freshly resolved geometry.
pub fn compose_frame(
    value: i32,
    config: &SliderConfig,
    options: &SliderOptions,
    geometry: &ResolvedGeometry,
) -> SliderFrame {
    let percentage = value_to_percentage(value, config);
    let offset = geometry
        .mode
        .axis()
        .leading_offset(percentage, &geometry.snapshot)
        - options.thumb_half_extent;

    let (fill, thumb) = match geometry.mode {
        LayoutMode::Compact => (
            FillStyle {
                width: Length::Percent(100.0),
                height: Some(Length::Percent(percentage)),
            },
            ThumbStyle {
                left: Length::Percent(50.0),
                top: Some(Length::Px(offset)),
                transform: Some(CENTER_X_TRANSFORM),
            },
        ),
        LayoutMode::Wide => (
            FillStyle {
                width: Length::Percent(percentage),
                height: None,
            },
            ThumbStyle {
                left: Length::Px(offset),
                top: None,
                transform: None,
            },
        ),
    };

    SliderFrame {
        value,
        mode: geometry.mode,
        fill,
        thumb,
        label: options.digits.format(value),
    }
}
