//! Errors raised while constructing a slider.

use thiserror::Error;

/// Error returned when a slider cannot be constructed from its declared
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// The declared bounds leave no room for a value.
    #[error("slider range is empty: min {min} must be below max {max}")]
    EmptyRange {
        /// Declared lower bound.
        min: i32,
        /// Declared upper bound.
        max: i32,
    },
    /// A bound attribute could not be read as an integer.
    #[error("invalid {name} bound `{raw}`")]
    InvalidBound {
        /// Attribute name, `min` or `max`.
        name: &'static str,
        /// Raw attribute text.
        raw: String,
    },
}
