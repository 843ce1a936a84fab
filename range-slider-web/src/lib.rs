//! Browser binding for [`range_slider`].
//!
//! Resolves geometry from the rendered page, writes frames into inline
//! styles and wires mouse, touch, input, resize and tooltip events.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build range-slider-web --target web
//! ```
//!
//! Then, once the document has loaded:
//!
//! ```javascript
//! import init, { range_slider_init, mount_range_slider } from './range_slider_web.js';
//!
//! await init();
//! range_slider_init();
//! // Keep the handle alive; calling `free()` detaches every listener.
//! const slider = mount_range_slider();
//! ```
//!
//! When the page lacks any required element the mount is skipped and
//! `undefined` is returned.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod binding;
pub mod dom;
pub mod error;
pub mod selectors;
pub mod tooltip;

use range_slider::SliderOptions;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

pub use binding::{DomSlider, MountedSlider};
pub use dom::{DomGeometry, DomSurface, SliderElements};
pub use error::BindError;
pub use selectors::SliderSelectors;
pub use tooltip::TooltipBinding;

/// Installs the panic hook and routes log output to the browser console.
#[wasm_bindgen]
pub fn range_slider_init() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by the host page's own module.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Mounts a slider using `selectors` and `options`.
///
/// Missing elements or unusable bounds skip the mount; the reason is logged.
pub fn mount(selectors: &SliderSelectors, options: SliderOptions) -> Option<MountedSlider> {
    let result = web_sys::window()
        .ok_or(BindError::NoWindow)
        .and_then(|window| {
            let document = window.document().ok_or(BindError::NoDocument)?;
            MountedSlider::mount(&window, &document, selectors, options)
        });
    match result {
        Ok(mounted) => Some(mounted),
        Err(err @ BindError::Slider(_)) => {
            warn!(%err, "range slider not mounted");
            None
        }
        Err(err) => {
            debug!(%err, "range slider not mounted");
            None
        }
    }
}

/// JavaScript handle to a mounted slider.
#[wasm_bindgen]
pub struct RangeSliderHandle {
    inner: MountedSlider,
}

#[wasm_bindgen]
impl RangeSliderHandle {
    /// Current value, or `undefined` while an event is being handled.
    pub fn value(&self) -> Option<i32> {
        self.inner.value()
    }

    /// Sets the value, clamped into the input's bounds.
    pub fn set_value(&self, value: i32) {
        self.inner.set_value(value);
    }

    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Returns whether the info tooltip is shown.
    pub fn tooltip_open(&self) -> bool {
        self.inner.tooltip().is_some_and(TooltipBinding::is_open)
    }
}

/// Mounts the slider described by the stock page markup.
#[wasm_bindgen]
pub fn mount_range_slider() -> Option<RangeSliderHandle> {
    mount(&SliderSelectors::default(), SliderOptions::default())
        .map(|inner| RangeSliderHandle { inner })
}
