//! Live-DOM implementations of the slider's geometry and surface seams.

use range_slider::{GeometryResolver, Length, Rect, SliderFrame, SliderSurface};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use crate::{error::BindError, selectors::SliderSelectors};

/// Looks up a required element.
pub(crate) fn require(document: &Document, selector: &str) -> Result<Element, BindError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| BindError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Looks up an optional element; invalid selectors count as absent.
pub(crate) fn optional(document: &Document, selector: Option<&str>) -> Option<Element> {
    document.query_selector(selector?).ok().flatten()
}

fn require_as<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, BindError> {
    require(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType {
            selector: selector.to_string(),
            expected,
        })
}

/// The elements one slider instance reads from and writes to.
#[derive(Debug, Clone)]
pub struct SliderElements {
    /// Numeric input holding the value and bounds.
    pub input: HtmlInputElement,
    /// Draggable thumb.
    pub thumb: HtmlElement,
    /// Fill bar.
    pub fill: HtmlElement,
    /// Value label.
    pub label: Element,
    /// Track.
    pub track: Element,
    /// Wrapper the thumb is positioned in.
    pub wrapper: Element,
}

impl SliderElements {
    /// Resolves every required element, failing on the first one missing.
    pub fn query(document: &Document, selectors: &SliderSelectors) -> Result<Self, BindError> {
        Ok(Self {
            input: require_as(document, &selectors.input, "an input element")?,
            thumb: require_as(document, &selectors.thumb, "an HTML element")?,
            fill: require_as(document, &selectors.fill, "an HTML element")?,
            label: require(document, &selectors.label)?,
            track: require(document, &selectors.track)?,
            wrapper: require(document, &selectors.wrapper)?,
        })
    }
}

fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Measures the track and wrapper from the rendered page on every call.
pub struct DomGeometry {
    window: Window,
    track: Element,
    wrapper: Element,
}

impl DomGeometry {
    /// Creates a resolver reading `track` and `wrapper` layout.
    pub fn new(window: Window, track: Element, wrapper: Element) -> Self {
        Self {
            window,
            track,
            wrapper,
        }
    }
}

impl GeometryResolver for DomGeometry {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default()
    }

    fn track_rect(&self) -> Rect {
        client_rect(&self.track)
    }

    fn wrapper_rect(&self) -> Rect {
        client_rect(&self.wrapper)
    }
}

/// Writes frames into inline styles, the input value and the label text.
pub struct DomSurface {
    input: HtmlInputElement,
    fill: HtmlElement,
    thumb: HtmlElement,
    label: Element,
}

impl DomSurface {
    /// Creates a surface over the given elements.
    pub fn new(
        input: HtmlInputElement,
        fill: HtmlElement,
        thumb: HtmlElement,
        label: Element,
    ) -> Self {
        Self {
            input,
            fill,
            thumb,
            label,
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(err) = result {
        warn!(property, ?err, "failed to update inline style");
    }
}

fn set_length(element: &HtmlElement, property: &str, length: Option<Length>) {
    let css = length.map(|length| length.to_string());
    set_style(element, property, css.as_deref());
}

impl SliderSurface for DomSurface {
    fn apply(&mut self, frame: &SliderFrame) {
        self.input.set_value(&frame.value.to_string());

        set_length(&self.fill, "width", Some(frame.fill.width));
        set_length(&self.fill, "height", frame.fill.height);

        set_length(&self.thumb, "left", Some(frame.thumb.left));
        set_length(&self.thumb, "top", frame.thumb.top);
        set_style(&self.thumb, "transform", frame.thumb.transform);

        self.label.set_text_content(Some(&frame.label));
    }
}
