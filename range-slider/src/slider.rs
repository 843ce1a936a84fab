//! A responsive range slider driven by mouse and touch drags.
//!
//! ## Usage
//!
//! Build a [`RangeSlider`] from the control's bounds, a [`GeometryResolver`]
//! that measures the live track, and a [`SliderSurface`] that displays
//! frames, then feed it [`SliderEvent`]s as they arrive.
//!
//! ```
//! use range_slider::{
//!     GeometryResolver, LayoutMode, PointerId, PointerPosition, RangeSlider, Rect,
//!     SliderConfig, SliderEvent, SliderFrame, SliderOptions, SliderSurface,
//! };
//!
//! struct Page;
//!
//! impl GeometryResolver for Page {
//!     fn viewport_width(&self) -> f64 {
//!         1024.0
//!     }
//!     fn track_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 200.0, 8.0)
//!     }
//!     fn wrapper_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 200.0, 24.0)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<SliderFrame>);
//!
//! impl SliderSurface for Log {
//!     fn apply(&mut self, frame: &SliderFrame) {
//!         self.0.push(frame.clone());
//!     }
//! }
//!
//! let config = SliderConfig::new(0, 100).unwrap();
//! let mut slider = RangeSlider::new(config, SliderOptions::default(), 50, Page, Log::default());
//!
//! slider.handle(SliderEvent::Engage(PointerId::Mouse));
//! slider.handle(SliderEvent::Move {
//!     pointer: PointerId::Mouse,
//!     position: PointerPosition::new(0.0, 4.0),
//! });
//! assert_eq!(slider.value(), 100);
//! assert_eq!(slider.surface().0.last().map(|f| f.mode), Some(LayoutMode::Wide));
//! ```
use tracing::{debug, trace};

use crate::config::{SliderConfig, SliderOptions, parse_integer};
use crate::error::SliderError;

pub use interaction::{DragMachine, DragState, PointerId};
pub use layout::{
    GeometryResolver, GeometrySnapshot, LayoutMode, PointerPosition, Rect, ResolvedGeometry,
};
pub use mapping::{
    AxisMapping, RtlHorizontalAxis, VerticalAxis, percentage_to_value, pointer_to_percentage,
    value_to_percentage,
};
pub use render::{
    CENTER_X_TRANSFORM, FillStyle, Length, SliderFrame, SliderSurface, ThumbStyle, compose_frame,
};

mod interaction;
mod layout;
mod mapping;
mod render;

/// An input the slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// A pointer pressed the thumb (mouse-down, touch-start).
    Engage(PointerId),
    /// A pointer moved anywhere in the document.
    Move {
        /// Pointer that moved.
        pointer: PointerId,
        /// New position in viewport coordinates.
        position: PointerPosition,
    },
    /// A pointer was lifted anywhere in the document (mouse-up, touch-end).
    Release(PointerId),
    /// The pointer stream was interrupted (touch-cancel, focus loss).
    Cancel,
    /// The numeric input reported a new value, e.g. from the keyboard.
    InputChanged(i32),
    /// The viewport was resized or rotated.
    Resize,
}

/// What the caller should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the platform's default drag or selection behaviour.
    pub prevent_default: bool,
    /// The stored value changed.
    pub value_changed: bool,
}

/// One slider instance: bounds, current value, drag session and the
/// resolver/surface pair it renders through.
///
/// Every value change goes through a single render path, so the surface
/// always shows exactly the stored value.
pub struct RangeSlider<G, S> {
    config: SliderConfig,
    options: SliderOptions,
    value: i32,
    drag: DragMachine,
    geometry: G,
    surface: S,
}

impl<G: GeometryResolver, S: SliderSurface> RangeSlider<G, S> {
    /// Creates a slider and renders `initial_value`, clamped into bounds.
    pub fn new(
        config: SliderConfig,
        options: SliderOptions,
        initial_value: i32,
        geometry: G,
        surface: S,
    ) -> Self {
        let mut slider = Self {
            config,
            options,
            value: config.clamp(initial_value),
            drag: DragMachine::new(),
            geometry,
            surface,
        };
        let value = slider.value;
        slider.sync(value);
        slider
    }

    /// Creates a slider from the raw `min`, `max` and `value` attribute text
    /// of a numeric input.
    ///
    /// An unreadable `value` falls back to `min`.
    pub fn from_attributes(
        min: &str,
        max: &str,
        value: &str,
        options: SliderOptions,
        geometry: G,
        surface: S,
    ) -> Result<Self, SliderError> {
        let config = SliderConfig::from_attributes(min, max)?;
        let initial = parse_integer(value).unwrap_or_else(|| {
            debug!(value, "unreadable initial value, starting at min");
            config.min()
        });
        Ok(Self::new(config, options, initial, geometry, surface))
    }

    /// Dispatches one event.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, event: SliderEvent) -> EventResponse {
        let before = self.value;
        let prevent_default = match event {
            SliderEvent::Engage(pointer) => self.engage(pointer),
            SliderEvent::Move { pointer, position } => {
                self.pointer_move(pointer, position);
                false
            }
            SliderEvent::Release(pointer) => {
                self.release(pointer);
                false
            }
            SliderEvent::Cancel => {
                self.cancel();
                false
            }
            SliderEvent::InputChanged(value) => {
                self.input_changed(value);
                false
            }
            SliderEvent::Resize => {
                self.resize();
                false
            }
        };
        EventResponse {
            prevent_default,
            value_changed: self.value != before,
        }
    }

    /// Starts a drag. Returns whether the pointer was accepted, in which case
    /// the platform default for the triggering event should be suppressed.
    pub fn engage(&mut self, pointer: PointerId) -> bool {
        let accepted = self.drag.engage(pointer);
        if accepted {
            debug!(?pointer, "drag engaged");
        }
        accepted
    }

    /// Moves the thumb to follow `pointer`. Returns whether a frame was
    /// rendered.
    ///
    /// Moves without an active session, or from a pointer other than the one
    /// that engaged, are ignored.
    pub fn pointer_move(&mut self, pointer: PointerId, position: PointerPosition) -> bool {
        if !self.drag.accepts_move(pointer) {
            return false;
        }
        let geometry = self.geometry.resolve(self.options.breakpoint);
        let Some(percentage) = pointer_to_percentage(position, &geometry.snapshot, geometry.mode)
        else {
            trace!(?geometry, "track has no length, skipping move");
            return false;
        };
        let value = percentage_to_value(percentage, &self.config);
        trace!(?pointer, percentage, value, "drag step");
        self.render_with(value, &geometry);
        true
    }

    /// Ends the drag owned by `pointer`. Returns whether a session ended.
    pub fn release(&mut self, pointer: PointerId) -> bool {
        let released = self.drag.release(pointer);
        if released {
            debug!(?pointer, value = self.value, "drag released");
        }
        released
    }

    /// Ends any drag. Returns whether a session was active.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.drag.cancel();
        if cancelled {
            debug!(value = self.value, "drag cancelled");
        }
        cancelled
    }

    /// Applies a value read from the numeric input, bypassing the drag
    /// session.
    pub fn input_changed(&mut self, value: i32) {
        self.sync(self.config.clamp(value));
    }

    /// Re-renders the current value against fresh geometry.
    pub fn resize(&mut self) {
        self.sync(self.value);
    }

    /// Sets the value programmatically. Out-of-range values are clamped.
    pub fn set_value(&mut self, value: i32) {
        self.sync(self.config.clamp(value));
    }

    fn sync(&mut self, value: i32) {
        let geometry = self.geometry.resolve(self.options.breakpoint);
        self.render_with(value, &geometry);
    }

    fn render_with(&mut self, value: i32, geometry: &ResolvedGeometry) {
        self.value = value;
        let frame = compose_frame(value, &self.config, &self.options, geometry);
        self.surface.apply(&frame);
    }
}

impl<G, S> RangeSlider<G, S> {
    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Bounds.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Presentation options.
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Returns whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Drag state machine.
    pub fn drag(&self) -> &DragMachine {
        &self.drag
    }

    /// Geometry resolver.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable geometry resolver, for harnesses that move the layout.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Surface frames are applied to.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedGeometry, RecordingSurface};

    fn wide_slider(min: i32, max: i32, value: i32) -> RangeSlider<FixedGeometry, RecordingSurface> {
        RangeSlider::new(
            SliderConfig::new(min, max).unwrap(),
            SliderOptions::default(),
            value,
            FixedGeometry::square(1280.0, 0.0, 100.0),
            RecordingSurface::default(),
        )
    }

    fn mouse_at(x: f64) -> SliderEvent {
        SliderEvent::Move {
            pointer: PointerId::Mouse,
            position: PointerPosition::new(x, 0.0),
        }
    }

    #[test]
    fn test_construction_renders_initial_value() {
        let slider = wide_slider(10, 100, 500);
        assert_eq!(slider.value(), 100);
        assert_eq!(slider.surface().frames().len(), 1);
        assert_eq!(slider.surface().last().unwrap().value, 100);
    }

    #[test]
    fn test_drag_sequence_ignores_move_after_release() {
        let mut slider = wide_slider(0, 100, 0);

        let engaged = slider.handle(SliderEvent::Engage(PointerId::Mouse));
        assert!(engaged.prevent_default);

        slider.handle(mouse_at(30.0));
        assert_eq!(slider.value(), 70);
        slider.handle(mouse_at(60.0));
        assert_eq!(slider.value(), 40);

        slider.handle(SliderEvent::Release(PointerId::Mouse));
        let frames_before = slider.surface().frames().len();
        let response = slider.handle(mouse_at(10.0));

        assert_eq!(slider.value(), 40);
        assert!(!response.value_changed);
        assert_eq!(slider.surface().frames().len(), frames_before);

        let applied: Vec<i32> = slider.surface().frames()[1..]
            .iter()
            .map(|f| f.value)
            .collect();
        assert_eq!(applied, vec![70, 40]);
    }

    #[test]
    fn test_move_without_engage_is_noop() {
        let mut slider = wide_slider(0, 100, 25);
        let response = slider.handle(mouse_at(0.0));
        assert_eq!(response, EventResponse::default());
        assert_eq!(slider.value(), 25);
        assert_eq!(slider.surface().frames().len(), 1);
    }

    #[test]
    fn test_fast_drag_past_track_saturates() {
        let mut slider = wide_slider(10, 100, 50);
        slider.engage(PointerId::Mouse);
        slider.handle(mouse_at(-500.0));
        assert_eq!(slider.value(), 100);
        slider.handle(mouse_at(5000.0));
        assert_eq!(slider.value(), 10);
    }

    #[test]
    fn test_secondary_touch_cannot_steer() {
        let mut slider = wide_slider(0, 100, 0);
        assert!(slider.engage(PointerId::Touch(1)));
        assert!(!slider.engage(PointerId::Touch(2)));

        let moved = slider.pointer_move(PointerId::Touch(2), PointerPosition::new(0.0, 0.0));
        assert!(!moved);
        assert_eq!(slider.value(), 0);

        assert!(slider.pointer_move(PointerId::Touch(1), PointerPosition::new(50.0, 0.0)));
        assert_eq!(slider.value(), 50);

        assert!(!slider.release(PointerId::Touch(2)));
        assert!(slider.is_dragging());
        assert!(slider.release(PointerId::Touch(1)));
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_cancel_ends_session() {
        let mut slider = wide_slider(0, 100, 0);
        slider.engage(PointerId::Touch(4));
        slider.handle(SliderEvent::Cancel);
        assert!(!slider.is_dragging());
        assert!(!slider.pointer_move(PointerId::Touch(4), PointerPosition::new(0.0, 0.0)));
    }

    #[test]
    fn test_input_change_bypasses_drag() {
        let mut slider = wide_slider(10, 100, 10);
        let response = slider.handle(SliderEvent::InputChanged(55));
        assert!(response.value_changed);
        assert!(!slider.is_dragging());
        assert_eq!(slider.surface().last().unwrap().fill.width, Length::Percent(50.0));

        slider.handle(SliderEvent::InputChanged(-3));
        assert_eq!(slider.value(), 10);
    }

    #[test]
    fn test_resize_replays_value_in_new_layout() {
        let config = SliderConfig::new(0, 100).unwrap();
        let mut slider = RangeSlider::new(
            config,
            SliderOptions::default(),
            30,
            FixedGeometry::square(1024.0, 0.0, 300.0),
            RecordingSurface::default(),
        );
        assert_eq!(slider.surface().last().unwrap().mode, LayoutMode::Wide);

        slider.geometry_mut().set_viewport_width(500.0);
        let response = slider.handle(SliderEvent::Resize);

        assert!(!response.value_changed);
        assert_eq!(slider.value(), 30);
        let frame = slider.surface().last().unwrap();
        assert_eq!(frame.mode, LayoutMode::Compact);
        assert_eq!(frame.fill.height, Some(Length::Percent(30.0)));
        assert_eq!(frame.fill.width, Length::Percent(100.0));

        slider.geometry_mut().set_viewport_width(769.0);
        slider.resize();
        let frame = slider.surface().last().unwrap();
        assert_eq!(frame.mode, LayoutMode::Wide);
        assert_eq!(frame.fill.width, Length::Percent(30.0));
        assert_eq!(frame.fill.height, None);
    }

    #[test]
    fn test_drag_uses_live_geometry() {
        let mut slider = wide_slider(0, 100, 0);
        slider.engage(PointerId::Mouse);
        slider.handle(mouse_at(25.0));
        assert_eq!(slider.value(), 75);

        // Narrow viewport mid-drag: the vertical axis takes over.
        slider.geometry_mut().set_viewport_width(400.0);
        slider.handle(SliderEvent::Move {
            pointer: PointerId::Mouse,
            position: PointerPosition::new(0.0, 90.0),
        });
        assert_eq!(slider.value(), 10);
        assert_eq!(slider.surface().last().unwrap().mode, LayoutMode::Compact);
    }

    #[test]
    fn test_zero_length_track_skips_move() {
        let mut slider = RangeSlider::new(
            SliderConfig::new(0, 10).unwrap(),
            SliderOptions::default(),
            5,
            FixedGeometry::square(1280.0, 0.0, 0.0),
            RecordingSurface::default(),
        );
        slider.engage(PointerId::Mouse);
        assert!(!slider.pointer_move(PointerId::Mouse, PointerPosition::new(3.0, 0.0)));
        assert_eq!(slider.value(), 5);
    }

    #[test]
    fn test_from_attributes() {
        let slider = RangeSlider::from_attributes(
            "10",
            "100",
            "40",
            SliderOptions::default(),
            FixedGeometry::square(1280.0, 0.0, 100.0),
            RecordingSurface::default(),
        )
        .unwrap();
        assert_eq!(slider.value(), 40);
        assert_eq!(slider.surface().last().unwrap().label, "۴۰");

        let fallback = RangeSlider::from_attributes(
            "10",
            "100",
            "",
            SliderOptions::default(),
            FixedGeometry::square(1280.0, 0.0, 100.0),
            RecordingSurface::default(),
        )
        .unwrap();
        assert_eq!(fallback.value(), 10);

        let empty = RangeSlider::from_attributes(
            "7",
            "7",
            "7",
            SliderOptions::default(),
            FixedGeometry::square(1280.0, 0.0, 100.0),
            RecordingSurface::default(),
        );
        assert!(matches!(empty, Err(SliderError::EmptyRange { min: 7, max: 7 })));
    }

    #[test]
    fn test_independent_instances() {
        let mut a = wide_slider(0, 100, 0);
        let mut b = wide_slider(0, 100, 0);
        a.engage(PointerId::Mouse);
        a.handle(mouse_at(20.0));
        b.handle(mouse_at(20.0));
        assert_eq!(a.value(), 80);
        assert_eq!(b.value(), 0);
        assert!(!b.is_dragging());
    }
}
