//! CSS selectors locating the slider's elements.

use derive_setters::Setters;

/// Where to find each element of one slider instance.
///
/// Defaults match the stock page markup. Mount several sliders on a page by
/// giving each its own selectors.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct SliderSelectors {
    /// Numeric `<input>` carrying `min`, `max` and `value`.
    pub input: String,
    /// Draggable thumb.
    pub thumb: String,
    /// Fill bar.
    pub fill: String,
    /// Value label.
    pub label: String,
    /// Track the thumb moves along.
    pub track: String,
    /// Positioned wrapper the thumb offsets are relative to.
    pub wrapper: String,
    /// Optional tooltip wrapper toggled with the `active` class.
    #[setters(strip_option, into)]
    pub tooltip_wrapper: Option<String>,
    /// Optional button toggling the tooltip.
    #[setters(strip_option, into)]
    pub tooltip_button: Option<String>,
    /// Optional button closing the tooltip.
    #[setters(strip_option, into)]
    pub tooltip_close: Option<String>,
}

impl Default for SliderSelectors {
    fn default() -> Self {
        Self {
            input: "#rangeInput".to_string(),
            thumb: "#rangeThumb".to_string(),
            fill: "#rangeTrackFill".to_string(),
            label: "#rangeValue".to_string(),
            track: ".range-track".to_string(),
            wrapper: ".range-slider-wrapper".to_string(),
            tooltip_wrapper: Some(".range-tooltip-wrapper".to_string()),
            tooltip_button: Some(".range-tooltip-btn".to_string()),
            tooltip_close: Some(".range-tooltip-close".to_string()),
        }
    }
}

impl SliderSelectors {
    /// Drops the tooltip selectors so no tooltip listeners are installed.
    pub fn without_tooltip(mut self) -> Self {
        self.tooltip_wrapper = None;
        self.tooltip_button = None;
        self.tooltip_close = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let selectors = SliderSelectors::default();
        assert_eq!(selectors.input, "#rangeInput");
        assert_eq!(selectors.track, ".range-track");
        assert_eq!(
            selectors.tooltip_wrapper.as_deref(),
            Some(".range-tooltip-wrapper")
        );
    }

    #[test]
    fn test_second_instance_selectors() {
        let selectors = SliderSelectors::default()
            .input("#budget-input")
            .thumb("#budget-thumb")
            .tooltip_button("#budget-help");
        assert_eq!(selectors.input, "#budget-input");
        assert_eq!(selectors.thumb, "#budget-thumb");
        assert_eq!(selectors.tooltip_button.as_deref(), Some("#budget-help"));

        let bare = selectors.without_tooltip();
        assert_eq!(bare.tooltip_wrapper, None);
        assert_eq!(bare.tooltip_close, None);
    }
}
