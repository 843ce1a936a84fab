//! Open/closed state of the info tooltip next to the slider.

/// Tooltip visibility.
///
/// The info button toggles it, the close button closes it, and a click
/// anywhere outside the tooltip wrapper dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipState {
    open: bool,
}

impl TooltipState {
    /// Creates a closed tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the tooltip is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Hides the tooltip.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handles a document click. Closes unless it landed inside the wrapper.
    /// Returns whether the state changed.
    pub fn dismiss_outside(&mut self, inside_wrapper: bool) -> bool {
        if inside_wrapper || !self.open {
            return false;
        }
        self.open = false;
        true
    }
}
