//! Slider bounds and presentation options.
//!
//! [`SliderConfig`] holds the immutable bounds read once from the control.
//! [`SliderOptions`] carries the tunables that are fixed per page design: the
//! responsive breakpoint, the thumb's half extent and the label digit set.

use derive_setters::Setters;

use crate::{error::SliderError, locale::DigitSet};

/// Viewport width (px) at or below which the slider switches to the compact,
/// vertical layout.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

/// Half of the thumb's size along the motion axis, in px.
pub const DEFAULT_THUMB_HALF_EXTENT: f64 = 6.0;

/// Inclusive integer bounds of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    min: i32,
    max: i32,
}

impl SliderConfig {
    /// Creates a config, rejecting ranges where `min >= max`.
    pub fn new(min: i32, max: i32) -> Result<Self, SliderError> {
        if min >= max {
            return Err(SliderError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a config from the raw `min`/`max` attribute text of an input.
    ///
    /// Attribute text is read the way browsers read integer prefixes, so
    /// `"10"`, `" 10"` and `"10.5"` all yield `10`.
    pub fn from_attributes(min: &str, max: &str) -> Result<Self, SliderError> {
        let min_value = parse_integer(min).ok_or_else(|| SliderError::InvalidBound {
            name: "min",
            raw: min.to_string(),
        })?;
        let max_value = parse_integer(max).ok_or_else(|| SliderError::InvalidBound {
            name: "max",
            raw: max.to_string(),
        })?;
        Self::new(min_value, max_value)
    }

    /// Lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Distance between the bounds, always positive.
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Presentation options shared by every frame a slider renders.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SliderOptions {
    /// Viewport width at or below which the compact layout is used.
    pub breakpoint: f64,
    /// Half of the thumb's size; subtracted so the thumb centres on its point.
    pub thumb_half_extent: f64,
    /// Digit glyphs used for the value label.
    pub digits: DigitSet,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            thumb_half_extent: DEFAULT_THUMB_HALF_EXTENT,
            digits: DigitSet::default(),
        }
    }
}

/// Reads the leading integer of `raw`, ignoring leading whitespace and any
/// trailing non-digit text. Returns `None` when no digit is present or the
/// number does not fit in an `i32`.
pub fn parse_integer(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_empty_range() {
        assert_eq!(
            SliderConfig::new(5, 5),
            Err(SliderError::EmptyRange { min: 5, max: 5 })
        );
        assert!(SliderConfig::new(10, 2).is_err());
        assert!(SliderConfig::new(10, 100).is_ok());
    }

    #[test]
    fn test_config_from_attributes() {
        let config = SliderConfig::from_attributes("10", " 100").unwrap();
        assert_eq!(config.min(), 10);
        assert_eq!(config.max(), 100);
        assert_eq!(config.span(), 90);

        let err = SliderConfig::from_attributes("", "100").unwrap_err();
        assert_eq!(
            err,
            SliderError::InvalidBound {
                name: "min",
                raw: String::new()
            }
        );
        assert!(matches!(
            SliderConfig::from_attributes("0", "abc"),
            Err(SliderError::InvalidBound { name: "max", .. })
        ));
    }

    #[test]
    fn test_parse_integer_prefix() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("  -7"), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer("10.9"), Some(10));
        assert_eq!(parse_integer("12px"), Some(12));
        assert_eq!(parse_integer("px"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("99999999999"), None);
    }

    #[test]
    fn test_clamp() {
        let config = SliderConfig::new(0, 10).unwrap();
        assert_eq!(config.clamp(-5), 0);
        assert_eq!(config.clamp(5), 5);
        assert_eq!(config.clamp(50), 10);
    }

    #[test]
    fn test_options_setters() {
        let options = SliderOptions::default()
            .breakpoint(600.0)
            .digits(DigitSet::Latin);
        assert_eq!(options.breakpoint, 600.0);
        assert_eq!(options.thumb_half_extent, DEFAULT_THUMB_HALF_EXTENT);
        assert_eq!(options.digits, DigitSet::Latin);
    }
}
