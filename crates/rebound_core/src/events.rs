//! Raw touch event model
//!
//! Hosts translate their platform's motion events into this small
//! representation before handing them to the over-pull state machine.
//! Coordinates are raw screen-space positions, not content-relative ones,
//! so deltas stay meaningful while the content itself is being displaced.

/// Kind of a touch sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// Primary pointer went down (gesture start)
    Down,
    /// Pointer moved
    Move,
    /// Primary pointer lifted
    Up,
    /// Gesture aborted by the platform
    Cancel,
    /// Any other action kind (secondary pointers, hover, ...)
    Other,
}

/// A single touch sample in raw screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub raw_x: f32,
    pub raw_y: f32,
}

impl TouchEvent {
    pub fn new(action: TouchAction, raw_x: f32, raw_y: f32) -> Self {
        Self {
            action,
            raw_x,
            raw_y,
        }
    }

    /// Press sample
    pub fn down(raw_x: f32, raw_y: f32) -> Self {
        Self::new(TouchAction::Down, raw_x, raw_y)
    }

    /// Move sample
    pub fn move_to(raw_x: f32, raw_y: f32) -> Self {
        Self::new(TouchAction::Move, raw_x, raw_y)
    }

    /// Release sample
    pub fn up(raw_x: f32, raw_y: f32) -> Self {
        Self::new(TouchAction::Up, raw_x, raw_y)
    }

    /// Cancellation sample
    pub fn cancel(raw_x: f32, raw_y: f32) -> Self {
        Self::new(TouchAction::Cancel, raw_x, raw_y)
    }

    /// True for the two gesture-ending actions
    pub fn is_up_or_cancel(&self) -> bool {
        matches!(self.action, TouchAction::Up | TouchAction::Cancel)
    }
}
