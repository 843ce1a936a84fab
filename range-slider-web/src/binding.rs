//! Event wiring between the document and one slider instance.
//!
//! Engage listeners sit on the thumb. Move and release listeners sit on the
//! document so a drag that leaves the thumb keeps tracking and still ends.

use std::{cell::RefCell, rc::Rc};

use gloo_events::{EventListener, EventListenerOptions};
use range_slider::{
    EventResponse, PointerId, PointerPosition, RangeSlider, SliderEvent, SliderOptions,
    config::parse_integer,
};
use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent, Touch, TouchEvent, TouchList, Window};

use crate::{
    dom::{DomGeometry, DomSurface, SliderElements},
    error::BindError,
    selectors::SliderSelectors,
    tooltip::TooltipBinding,
};

/// A slider rendering straight into the page.
pub type DomSlider = RangeSlider<DomGeometry, DomSurface>;

type Shared = Rc<RefCell<DomSlider>>;

const PRIMARY_BUTTON: i16 = 0;

fn dispatch(slider: &Shared, event: SliderEvent) -> EventResponse {
    match slider.try_borrow_mut() {
        Ok(mut slider) => slider.handle(event),
        Err(_) => {
            trace!(?event, "slider busy, dropping re-entrant event");
            EventResponse::default()
        }
    }
}

fn touches(list: &TouchList) -> impl Iterator<Item = Touch> + '_ {
    (0..list.length()).filter_map(|index| list.item(index))
}

fn touch_position(touch: &Touch) -> PointerPosition {
    PointerPosition::new(f64::from(touch.client_x()), f64::from(touch.client_y()))
}

/// A slider attached to the document. Dropping it detaches every listener.
pub struct MountedSlider {
    slider: Shared,
    tooltip: Option<TooltipBinding>,
    _listeners: Vec<EventListener>,
}

impl MountedSlider {
    /// Finds the slider's elements, renders the input's current value and
    /// installs the listeners.
    pub fn mount(
        window: &Window,
        document: &Document,
        selectors: &SliderSelectors,
        options: SliderOptions,
    ) -> Result<Self, BindError> {
        let elements = SliderElements::query(document, selectors)?;
        let geometry = DomGeometry::new(
            window.clone(),
            elements.track.clone(),
            elements.wrapper.clone(),
        );
        let surface = DomSurface::new(
            elements.input.clone(),
            elements.fill.clone(),
            elements.thumb.clone(),
            elements.label.clone(),
        );
        let slider = RangeSlider::from_attributes(
            &elements.input.min(),
            &elements.input.max(),
            &elements.input.value(),
            options,
            geometry,
            surface,
        )?;
        let slider: Shared = Rc::new(RefCell::new(slider));

        let mut listeners = Vec::with_capacity(9);
        listeners.extend(mouse_listeners(&slider, &elements, document));
        listeners.extend(touch_listeners(&slider, &elements, document));
        listeners.extend(page_listeners(&slider, &elements, window));

        let tooltip = TooltipBinding::attach(document, selectors);
        debug!(
            selector = %selectors.input,
            tooltip = tooltip.is_some(),
            "range slider mounted"
        );

        Ok(Self {
            slider,
            tooltip,
            _listeners: listeners,
        })
    }

    /// Current value.
    pub fn value(&self) -> Option<i32> {
        self.slider.try_borrow().ok().map(|slider| slider.value())
    }

    /// Sets the value programmatically, clamped into bounds.
    pub fn set_value(&self, value: i32) {
        if let Ok(mut slider) = self.slider.try_borrow_mut() {
            slider.set_value(value);
        }
    }

    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.slider
            .try_borrow()
            .is_ok_and(|slider| slider.is_dragging())
    }

    /// Tooltip wiring, when the page has a tooltip.
    pub fn tooltip(&self) -> Option<&TooltipBinding> {
        self.tooltip.as_ref()
    }
}

fn mouse_listeners(
    slider: &Shared,
    elements: &SliderElements,
    document: &Document,
) -> [EventListener; 3] {
    let engage = {
        let slider = slider.clone();
        EventListener::new_with_options(
            &elements.thumb,
            "mousedown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if mouse.button() != PRIMARY_BUTTON {
                    return;
                }
                if dispatch(&slider, SliderEvent::Engage(PointerId::Mouse)).prevent_default {
                    event.prevent_default();
                }
            },
        )
    };

    let drag = {
        let slider = slider.clone();
        EventListener::new(document, "mousemove", move |event: &Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let position =
                PointerPosition::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            dispatch(
                &slider,
                SliderEvent::Move {
                    pointer: PointerId::Mouse,
                    position,
                },
            );
        })
    };

    let release = {
        let slider = slider.clone();
        EventListener::new(document, "mouseup", move |_event: &Event| {
            dispatch(&slider, SliderEvent::Release(PointerId::Mouse));
        })
    };

    [engage, drag, release]
}

fn touch_listeners(
    slider: &Shared,
    elements: &SliderElements,
    document: &Document,
) -> [EventListener; 4] {
    let engage = {
        let slider = slider.clone();
        EventListener::new_with_options(
            &elements.thumb,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(touch) = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|touch_event| touch_event.changed_touches().item(0))
                else {
                    return;
                };
                let pointer = PointerId::Touch(touch.identifier());
                if dispatch(&slider, SliderEvent::Engage(pointer)).prevent_default {
                    event.prevent_default();
                }
            },
        )
    };

    let drag = {
        let slider = slider.clone();
        EventListener::new(document, "touchmove", move |event: &Event| {
            let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let active = slider
                .try_borrow()
                .ok()
                .and_then(|slider| slider.drag().active_pointer());
            let Some(PointerId::Touch(identifier)) = active else {
                return;
            };
            let list = touch_event.touches();
            let Some(touch) = touches(&list).find(|touch| touch.identifier() == identifier)
            else {
                return;
            };
            dispatch(
                &slider,
                SliderEvent::Move {
                    pointer: PointerId::Touch(identifier),
                    position: touch_position(&touch),
                },
            );
        })
    };

    let release = {
        let slider = slider.clone();
        EventListener::new(document, "touchend", move |event: &Event| {
            let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let list = touch_event.changed_touches();
            for touch in touches(&list) {
                dispatch(
                    &slider,
                    SliderEvent::Release(PointerId::Touch(touch.identifier())),
                );
            }
        })
    };

    let cancel = {
        let slider = slider.clone();
        EventListener::new(document, "touchcancel", move |_event: &Event| {
            dispatch(&slider, SliderEvent::Cancel);
        })
    };

    [engage, drag, release, cancel]
}

fn page_listeners(
    slider: &Shared,
    elements: &SliderElements,
    window: &Window,
) -> [EventListener; 3] {
    let input_changed = {
        let slider = slider.clone();
        let input = elements.input.clone();
        EventListener::new(&elements.input, "input", move |_event: &Event| {
            let raw = input.value();
            match parse_integer(&raw) {
                Some(value) => {
                    dispatch(&slider, SliderEvent::InputChanged(value));
                }
                None => debug!(raw = %raw, "ignoring unreadable input value"),
            }
        })
    };

    let resize = {
        let slider = slider.clone();
        EventListener::new(window, "resize", move |_event: &Event| {
            dispatch(&slider, SliderEvent::Resize);
        })
    };

    let blur = {
        let slider = slider.clone();
        EventListener::new(window, "blur", move |_event: &Event| {
            dispatch(&slider, SliderEvent::Cancel);
        })
    };

    [input_changed, resize, blur]
}
