//! Over-pull state machine
//!
//! Decides when a drag has crossed from normal scrolling into an
//! over-pull, displaces the content by a damped amount, and hands off to
//! the rollback animator on release.
//!
//! The helper consumes a touch stream from its host:
//!
//! - [`OverPullHelper::on_touch`] for every event; the return value tells
//!   the host whether to withhold the event from normal scroll handling
//! - [`OverPullHelper::on_release_or_cancel`] for up/cancel, which settles
//!   any open gap (immediately, or deferred past an in-flight fling)
//! - [`OverPullHelper::on_scroll_state_changed`] when the host's own
//!   scroll state changes
//! - [`OverPullHelper::drive`] once per animation frame while a rollback
//!   may be active

use rebound_core::{
    ConfigError, ListenerId, OverPullPhase, PhaseChange, PhaseListeners, TouchAction, TouchEvent,
};
use tracing::debug;

use crate::delegate::{Axis, AxisDelegate};
use crate::driver::TickDriver;
use crate::host::{EdgeEffectMode, HostScrollState, ScrollDirection, ScrollHost};
use crate::rollback::{RollbackAnimator, RollbackConfig, RollbackProgress};

/// Elastic over-scroll behavior for a scrollable list/grid surface
///
/// Owns the phase, the axis delegate (and with it the gesture touch
/// session), and the rollback animator. The host surface is passed into
/// every call rather than owned, so exactly one party mutates the shared
/// layout at a time.
pub struct OverPullHelper<D: TickDriver> {
    delegate: AxisDelegate,
    animator: RollbackAnimator<D>,
    listeners: PhaseListeners,
    phase: OverPullPhase,
    /// Edge-glow mode to restore once over-pull visuals are done
    saved_edge_mode: EdgeEffectMode,
    /// Host scroll state as of its last notification
    host_scroll_state: HostScrollState,
    enabled: bool,
    detached: bool,
}

impl<D: TickDriver> OverPullHelper<D> {
    /// Create a helper for `axis`, remembering the host's current
    /// edge-glow mode for later restoration
    pub fn new(host: &dyn ScrollHost, axis: Axis, driver: D) -> Self {
        Self {
            delegate: AxisDelegate::new(axis),
            animator: RollbackAnimator::new(driver),
            listeners: PhaseListeners::new(),
            phase: OverPullPhase::None,
            saved_edge_mode: host.edge_effect_mode(),
            host_scroll_state: host.scroll_state(),
            enabled: true,
            detached: false,
        }
    }

    /// Create a helper with explicit rollback tuning
    pub fn with_config(
        host: &dyn ScrollHost,
        axis: Axis,
        driver: D,
        config: RollbackConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            delegate: AxisDelegate::new(axis),
            animator: RollbackAnimator::with_config(driver, config)?,
            listeners: PhaseListeners::new(),
            phase: OverPullPhase::None,
            saved_edge_mode: host.edge_effect_mode(),
            host_scroll_state: host.scroll_state(),
            enabled: true,
            detached: false,
        })
    }

    pub fn axis(&self) -> Axis {
        self.delegate.axis()
    }

    pub fn phase(&self) -> OverPullPhase {
        self.phase
    }

    /// True while the settle animation is running
    pub fn is_rolling_back(&self) -> bool {
        self.animator.is_active()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable over-pull handling; disabled helpers consume
    /// nothing and never displace content
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Register a phase-change listener
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PhaseChange) + 'static,
    {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Touch entry point. Returns true while the touch should be withheld
    /// from normal scroll handling: either an over-pull drag is actively
    /// consuming moves, or a rollback is running.
    pub fn on_touch(&mut self, host: &mut dyn ScrollHost, event: &TouchEvent) -> bool {
        if self.detached {
            return false;
        }
        self.animator.is_active() || self.check_over_drag(host, event)
    }

    fn check_over_drag(&mut self, host: &mut dyn ScrollHost, event: &TouchEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match event.action {
            TouchAction::Down => self.delegate.begin_gesture(event),
            TouchAction::Move => {
                let at_start = self.over_pull_at_start(host, event);
                let at_end = self.over_pull_at_end(host, event);
                if at_start || at_end {
                    // Our own gap visuals replace the platform edge-glow
                    // for the rest of this gesture.
                    host.set_edge_effect_mode(EdgeEffectMode::Never);
                    host.invalidate_edge_effects();
                    if at_start {
                        self.set_phase(host, OverPullPhase::PullingStart);
                    } else {
                        self.set_phase(host, OverPullPhase::PullingEnd);
                    }
                    // Halved to tame the drag sensitivity on both edges.
                    let delta = self.delegate.signed_distance(event) / 2;
                    self.delegate.offset_children(host, delta);
                    let change = PhaseChange {
                        previous: self.phase,
                        current: self.phase,
                        offset: self.current_offset(host),
                    };
                    self.listeners.notify(&change);
                } else {
                    self.set_phase(host, OverPullPhase::Normal);
                }
                self.delegate.update_last(event);
            }
            TouchAction::Up | TouchAction::Cancel | TouchAction::Other => self.reset(host),
        }
        self.phase.is_pulling()
    }

    /// Release path: restore the platform edge-glow and settle any open
    /// gap. If the host is still settling from a fling, the rollback is
    /// deferred until it reports idle.
    pub fn on_release_or_cancel(
        &mut self,
        host: &mut dyn ScrollHost,
        event: &TouchEvent,
        now_ms: u64,
    ) {
        if self.detached || !event.is_up_or_cancel() {
            return;
        }
        self.restore_edge_mode(host);
        if host.scroll_state() != HostScrollState::Settling {
            self.attempt_rollback(host, now_ms);
        } else {
            debug!("host is settling; rollback deferred until idle");
        }
    }

    /// Host scroll-state notification. A rollback deferred at release
    /// fires once the host's own motion ceases.
    pub fn on_scroll_state_changed(
        &mut self,
        host: &mut dyn ScrollHost,
        new_state: HostScrollState,
        now_ms: u64,
    ) {
        if self.detached {
            return;
        }
        if self.host_scroll_state != new_state && new_state == HostScrollState::Idle {
            self.attempt_rollback(host, now_ms);
        }
        self.host_scroll_state = new_state;
    }

    /// Start the settle animation for whichever edge has an open gap.
    /// The start edge takes priority; at most one edge rolls back per
    /// release.
    pub fn attempt_rollback(&mut self, host: &mut dyn ScrollHost, now_ms: u64) {
        let distance_to_start = self.delegate.scroll_offset(host);
        if distance_to_start < 0 {
            self.animator.start(distance_to_start, now_ms);
        } else {
            let end_offset = self.end_over_pull_offset(host);
            if end_offset != 0 {
                self.animator.start(end_offset, now_ms);
            }
        }
    }

    /// Advance an in-flight rollback. Hosts call this once per animation
    /// frame; it is a cheap no-op while nothing is running.
    pub fn drive(&mut self, host: &mut dyn ScrollHost, now_ms: u64) -> RollbackProgress {
        let progress = self.animator.advance(host, self.delegate.axis(), now_ms);
        match progress {
            RollbackProgress::Ticked => self.set_phase(host, OverPullPhase::Settling),
            RollbackProgress::Completed => self.set_phase(host, OverPullPhase::None),
            RollbackProgress::Idle | RollbackProgress::Skipped => {}
        }
        progress
    }

    /// Detach from the host: cancel any rollback, restore the edge-glow
    /// mode, and stop consuming touches. Further calls are no-ops.
    pub fn destroy(&mut self, host: &mut dyn ScrollHost) {
        if self.detached {
            return;
        }
        self.animator.cancel();
        self.restore_edge_mode(host);
        self.delegate.end_gesture();
        self.listeners.clear();
        self.phase = OverPullPhase::None;
        self.detached = true;
    }

    /// Signed displacement of the content from rest, per the active phase
    pub fn current_offset(&self, host: &dyn ScrollHost) -> i32 {
        match self.phase {
            OverPullPhase::PullingStart => self.delegate.scroll_offset(host),
            OverPullPhase::PullingEnd => self.end_over_pull_offset(host),
            _ => 0,
        }
    }

    /// Start-edge displacement; negative while the first item is pulled
    /// away from its resting position. Zero outside `PullingStart`.
    pub fn start_over_pull_offset(&self, host: &dyn ScrollHost) -> i32 {
        if self.phase == OverPullPhase::PullingStart {
            self.delegate.scroll_offset(host)
        } else {
            0
        }
    }

    /// Visible gap at the end edge, capped by both the blank space past
    /// the last item and the content already scrolled
    pub fn end_over_pull_offset(&self, host: &dyn ScrollHost) -> i32 {
        let content_offset = self.delegate.scroll_offset(host);
        let blank =
            content_offset + self.delegate.viewport_extent(host) - self.delegate.scroll_range(host);
        if blank > 0 && content_offset > 0 {
            blank.min(content_offset)
        } else {
            0
        }
    }

    /// True when this move is pulling the start edge past its bound: the
    /// gesture is a drag toward the start, the list is already at its
    /// start boundary, and the content would not be dragged fully out of
    /// view
    fn over_pull_at_start(&self, host: &dyn ScrollHost, event: &TouchEvent) -> bool {
        let offset = self.delegate.scroll_offset(host);
        let dist = self.delegate.distance(event) + 1;
        if offset.abs() + dist >= self.delegate.viewport_extent(host) {
            return false;
        }
        self.is_dragging(host, event)
            && self.delegate.primary_direction(event) > 0
            && !self.delegate.can_scroll(host, ScrollDirection::Backward)
    }

    /// End-edge counterpart of [`Self::over_pull_at_start`]
    fn over_pull_at_end(&self, host: &dyn ScrollHost, event: &TouchEvent) -> bool {
        let dist = self.delegate.distance(event) + 1;
        let gap_to_end = self.delegate.scroll_offset(host) + self.delegate.viewport_extent(host)
            - self.delegate.scroll_range(host);
        if gap_to_end + dist >= self.delegate.viewport_extent(host) {
            return false;
        }
        self.is_dragging(host, event)
            && self.delegate.primary_direction(event) <= 0
            && !self.delegate.can_scroll(host, ScrollDirection::Forward)
    }

    fn is_dragging(&self, host: &dyn ScrollHost, event: &TouchEvent) -> bool {
        self.delegate.is_dragging(event, host.touch_slop())
    }

    /// Transition the phase, notifying listeners with the offset as seen
    /// from the outgoing phase
    fn set_phase(&mut self, host: &dyn ScrollHost, next: OverPullPhase) {
        let change = PhaseChange {
            previous: self.phase,
            current: next,
            offset: self.current_offset(host),
        };
        if change.previous != change.current {
            debug!(
                previous = ?change.previous,
                current = ?change.current,
                offset = change.offset,
                "over-pull phase transition"
            );
        }
        self.listeners.notify(&change);
        self.phase = next;
    }

    /// Full reset: restore edge-glow, clear gesture tracking, phase to
    /// `None`
    fn reset(&mut self, host: &mut dyn ScrollHost) {
        self.restore_edge_mode(host);
        self.delegate.end_gesture();
        self.set_phase(host, OverPullPhase::None);
    }

    fn restore_edge_mode(&self, host: &mut dyn ScrollHost) {
        host.set_edge_effect_mode(self.saved_edge_mode);
    }
}
