//! Over-pull phase state
//!
//! Exactly one phase is active at a time; the helper only changes it
//! through transitions, and every transition produces a [`PhaseChange`]
//! notification.

/// Interaction phase of an over-pullable scroll surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverPullPhase {
    /// No over-pull interaction in progress
    #[default]
    None,
    /// The start edge is pulled past its bound (gap before the first item)
    PullingStart,
    /// The end edge is pulled past its bound (gap after the last item)
    PullingEnd,
    /// A gesture is in progress but the content is inside normal bounds
    Normal,
    /// Released content is animating back to its resting position
    Settling,
}

impl OverPullPhase {
    /// True while either edge is actively being pulled past its bound
    pub fn is_pulling(&self) -> bool {
        matches!(self, OverPullPhase::PullingStart | OverPullPhase::PullingEnd)
    }

    /// True while the phase displaces content (pulling or settling back)
    pub fn is_displaced(&self) -> bool {
        self.is_pulling() || matches!(self, OverPullPhase::Settling)
    }
}

/// Notification value emitted for phase transitions
///
/// `offset` is the signed displacement of the content from rest along the
/// active axis at notification time: negative when a gap is open before
/// the first item, positive when one is open after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub previous: OverPullPhase,
    pub current: OverPullPhase,
    pub offset: i32,
}
