//! Info tooltip wiring: toggle, close and outside-click dismissal.

use std::{cell::Cell, rc::Rc};

use gloo_events::EventListener;
use range_slider::TooltipState;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

use crate::{dom::optional, selectors::SliderSelectors};

const ACTIVE_CLASS: &str = "active";

fn show(wrapper: &Element, state: TooltipState) {
    if let Err(err) = wrapper
        .class_list()
        .toggle_with_force(ACTIVE_CLASS, state.is_open())
    {
        warn!(?err, "failed to toggle tooltip class");
    }
}

/// Listeners driving the tooltip. Dropping this detaches them.
pub struct TooltipBinding {
    state: Rc<Cell<TooltipState>>,
    _listeners: Vec<EventListener>,
}

impl TooltipBinding {
    /// Wires the tooltip if its wrapper exists. Missing buttons only skip
    /// their own listener.
    pub fn attach(document: &Document, selectors: &SliderSelectors) -> Option<Self> {
        let Some(wrapper) = optional(document, selectors.tooltip_wrapper.as_deref()) else {
            debug!("no tooltip wrapper, skipping tooltip");
            return None;
        };
        let state = Rc::new(Cell::new(TooltipState::new()));
        let mut listeners = Vec::with_capacity(3);

        if let Some(button) = optional(document, selectors.tooltip_button.as_deref()) {
            let state = state.clone();
            let wrapper = wrapper.clone();
            listeners.push(EventListener::new(&button, "click", move |event: &Event| {
                event.stop_propagation();
                let mut next = state.get();
                next.toggle();
                state.set(next);
                show(&wrapper, next);
            }));
        }

        if let Some(close) = optional(document, selectors.tooltip_close.as_deref()) {
            let state = state.clone();
            let wrapper = wrapper.clone();
            listeners.push(EventListener::new(&close, "click", move |event: &Event| {
                event.stop_propagation();
                let mut next = state.get();
                next.close();
                state.set(next);
                show(&wrapper, next);
            }));
        }

        {
            let state = state.clone();
            let wrapper = wrapper.clone();
            listeners.push(EventListener::new(document, "click", move |event: &Event| {
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|node| wrapper.contains(Some(&node)));
                let mut next = state.get();
                if next.dismiss_outside(inside) {
                    state.set(next);
                    show(&wrapper, next);
                }
            }));
        }

        Some(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Returns whether the tooltip is shown.
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }
}
