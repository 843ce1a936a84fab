//! Drag session tracking for mouse and touch pointer streams.

use tracing::trace;

/// Identity of the pointer driving a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The mouse. There is only ever one.
    Mouse,
    /// A touch point, identified by the platform's touch identifier.
    Touch(i32),
}

/// State of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No pointer is engaged.
    #[default]
    Idle,
    /// `pointer` engaged the thumb and has not been released yet.
    Dragging {
        /// The pointer that owns the session.
        pointer: PointerId,
    },
}

/// Tracks which pointer, if any, is dragging the thumb.
///
/// Only the pointer that engaged the thumb can move or release it; moves from
/// any other pointer, and moves while idle, are ignored.
#[derive(Debug, Clone, Default)]
pub struct DragMachine {
    state: DragState,
}

impl DragMachine {
    /// Creates an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The pointer owning the active session.
    pub fn active_pointer(&self) -> Option<PointerId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { pointer } => Some(pointer),
        }
    }

    /// Starts a session for `pointer`.
    ///
    /// Returns `false` when another pointer already owns the session, such as
    /// a second finger landing on the thumb. Re-engaging with the active
    /// pointer is accepted.
    pub fn engage(&mut self, pointer: PointerId) -> bool {
        match self.state {
            DragState::Dragging { pointer: active } if active != pointer => {
                trace!(?pointer, ?active, "rejected secondary pointer");
                false
            }
            _ => {
                self.state = DragState::Dragging { pointer };
                true
            }
        }
    }

    /// Returns whether a move from `pointer` should drive the slider.
    pub fn accepts_move(&self, pointer: PointerId) -> bool {
        self.active_pointer() == Some(pointer)
    }

    /// Ends the session if `pointer` owns it. Returns whether it ended.
    pub fn release(&mut self, pointer: PointerId) -> bool {
        if self.accepts_move(pointer) {
            self.state = DragState::Idle;
            true
        } else {
            false
        }
    }

    /// Ends any session regardless of pointer. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
