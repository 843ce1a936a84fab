//! Errors raised while binding a slider to the document.

use range_slider::SliderError;
use thiserror::Error;

/// Why a slider could not be mounted.
///
/// Mounting failures are not fatal to the page; callers log them and leave
/// the control static.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// No global `window`, e.g. outside a browser main thread.
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A required element is absent or the selector is invalid.
    #[error("no element matches `{selector}`")]
    MissingElement {
        /// Selector that matched nothing.
        selector: String,
    },
    /// An element exists but is not of the expected kind.
    #[error("element `{selector}` is not {expected}")]
    WrongElementType {
        /// Selector of the element.
        selector: String,
        /// Expected element interface.
        expected: &'static str,
    },
    /// The input's bounds are unusable.
    #[error(transparent)]
    Slider(#[from] SliderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = BindError::MissingElement {
            selector: "#rangeThumb".to_string(),
        };
        assert_eq!(missing.to_string(), "no element matches `#rangeThumb`");

        let wrong = BindError::WrongElementType {
            selector: "#rangeInput".to_string(),
            expected: "an input element",
        };
        assert_eq!(
            wrong.to_string(),
            "element `#rangeInput` is not an input element"
        );

        let slider: BindError = SliderError::EmptyRange { min: 3, max: 3 }.into();
        assert_eq!(
            slider.to_string(),
            "slider range is empty: min 3 must be below max 3"
        );
    }
}
