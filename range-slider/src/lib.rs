//! Headless core of a responsive range slider.
//!
//! The slider maps a 2D pointer position onto a bounded integer. On narrow
//! viewports the track is vertical with its maximum at the top; on wide
//! viewports it runs horizontally right-to-left with its maximum at the
//! left. Mouse and touch drags share one state machine, and every value
//! change produces a complete [`SliderFrame`] for the hidden input, the fill
//! bar, the thumb and the localized label.
//!
//! Platform code supplies two seams:
//!
//! - [`GeometryResolver`] measures the live track and wrapper.
//! - [`SliderSurface`] displays frames.
//!
//! See [`slider`] for a complete example.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod locale;
pub mod slider;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod tooltip;

pub use config::{DEFAULT_BREAKPOINT, DEFAULT_THUMB_HALF_EXTENT, SliderConfig, SliderOptions};
pub use error::SliderError;
pub use locale::DigitSet;
pub use slider::{
    AxisMapping, DragMachine, DragState, EventResponse, FillStyle, GeometryResolver,
    GeometrySnapshot, LayoutMode, Length, PointerId, PointerPosition, RangeSlider, Rect,
    ResolvedGeometry, SliderEvent, SliderFrame, SliderSurface, ThumbStyle,
};
pub use tooltip::TooltipState;
