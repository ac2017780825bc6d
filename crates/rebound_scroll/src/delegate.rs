//! Axis scroll delegate
//!
//! Folds the vertical/horizontal duplication into one type: an [`Axis`]
//! picked at construction dispatches every host query, so nothing above
//! this module branches on orientation.
//!
//! The delegate also owns the [`TouchSession`] for the current gesture.
//! All session-dependent queries answer "not dragging" (zero / false)
//! while the session is unset, so a stray move before any press is
//! harmless.

use rebound_core::TouchEvent;

use crate::host::{ScrollDirection, ScrollHost};

/// Scroll axis a delegate operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Signed distance the content has been scrolled from its start edge
    pub fn scroll_offset(&self, host: &dyn ScrollHost) -> i32 {
        match self {
            Axis::Vertical => host.vertical_scroll_offset(),
            Axis::Horizontal => host.horizontal_scroll_offset(),
        }
    }

    /// Total scrollable content extent along this axis
    pub fn scroll_range(&self, host: &dyn ScrollHost) -> i32 {
        match self {
            Axis::Vertical => host.vertical_scroll_range(),
            Axis::Horizontal => host.horizontal_scroll_range(),
        }
    }

    /// Visible extent of the scroll surface along this axis
    pub fn viewport_extent(&self, host: &dyn ScrollHost) -> i32 {
        match self {
            Axis::Vertical => host.viewport_height(),
            Axis::Horizontal => host.viewport_width(),
        }
    }

    pub fn can_scroll(&self, host: &dyn ScrollHost, direction: ScrollDirection) -> bool {
        match self {
            Axis::Vertical => host.can_scroll_vertically(direction),
            Axis::Horizontal => host.can_scroll_horizontally(direction),
        }
    }

    /// Visually translate the laid-out children along this axis
    pub fn offset_children(&self, host: &mut dyn ScrollHost, delta: i32) {
        match self {
            Axis::Vertical => host.offset_children_vertical(delta),
            Axis::Horizontal => host.offset_children_horizontal(delta),
        }
    }

    /// Real scroll step along this axis; returns the consumed amount
    pub fn scroll_step(&self, host: &mut dyn ScrollHost, diff: i32) -> i32 {
        match self {
            Axis::Vertical => host.scroll_step(0, diff).1,
            Axis::Horizontal => host.scroll_step(diff, 0).0,
        }
    }

    /// Raw touch position along this axis
    fn position(&self, event: &TouchEvent) -> f32 {
        match self {
            Axis::Vertical => event.raw_y,
            Axis::Horizontal => event.raw_x,
        }
    }
}

/// Raw-axis positions recorded for the current gesture
///
/// `None` is the explicit "unset" sentinel: initialized on press, updated
/// every move, cleared on release/cancel or reset. Never shared outside
/// the delegate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchSession {
    last: Option<f32>,
    down: Option<f32>,
}

/// Orientation-aware scroll delegate owning the gesture touch session
#[derive(Debug, Default)]
pub struct AxisDelegate {
    axis: Axis,
    session: TouchSession,
}

impl AxisDelegate {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            session: TouchSession::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn scroll_offset(&self, host: &dyn ScrollHost) -> i32 {
        self.axis.scroll_offset(host)
    }

    pub fn scroll_range(&self, host: &dyn ScrollHost) -> i32 {
        self.axis.scroll_range(host)
    }

    pub fn viewport_extent(&self, host: &dyn ScrollHost) -> i32 {
        self.axis.viewport_extent(host)
    }

    pub fn can_scroll(&self, host: &dyn ScrollHost, direction: ScrollDirection) -> bool {
        self.axis.can_scroll(host, direction)
    }

    pub fn offset_children(&self, host: &mut dyn ScrollHost, delta: i32) {
        self.axis.offset_children(host, delta)
    }

    /// Unsigned axis distance since the last touch sample
    pub fn distance(&self, event: &TouchEvent) -> i32 {
        self.signed_distance(event).abs()
    }

    /// Current raw axis position minus the last sampled one; zero while
    /// the session is unset
    pub fn signed_distance(&self, event: &TouchEvent) -> i32 {
        match self.session.last {
            Some(last) => (self.axis.position(event) - last) as i32,
            None => 0,
        }
    }

    /// Sign of the move relative to the last sample: positive toward the
    /// start edge, negative toward the end edge
    pub fn primary_direction(&self, event: &TouchEvent) -> i32 {
        self.signed_distance(event).signum()
    }

    /// Record both "last" and "down" positions (press)
    pub fn begin_gesture(&mut self, event: &TouchEvent) {
        let position = self.axis.position(event);
        self.session.last = Some(position);
        self.session.down = Some(position);
    }

    /// Update only the "last" position (every move)
    pub fn update_last(&mut self, event: &TouchEvent) {
        self.session.last = Some(self.axis.position(event));
    }

    /// Clear the touch session (release/cancel/reset)
    pub fn end_gesture(&mut self) {
        self.session = TouchSession::default();
    }

    /// True once cumulative movement since the press exceeds the slop
    /// threshold; always false without a recorded press
    pub fn is_dragging(&self, event: &TouchEvent, slop: f32) -> bool {
        match self.session.down {
            Some(down) => (self.axis.position(event) - down).abs() > slop,
            None => false,
        }
    }
}
