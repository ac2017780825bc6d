//! Host scrollable surface interface
//!
//! The over-pull system never owns the list or grid it decorates. The
//! host widget implements [`ScrollHost`] and passes itself into every
//! call, which keeps the "who moves the content" hand-off explicit:
//! the state machine mutates during a drag, the rollback animator after
//! release, and the host the rest of the time.

/// Direction of a can-scroll query along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the start edge (up / left)
    Backward,
    /// Toward the end edge (down / right)
    Forward,
}

/// The host's own scroll activity, as it reports through its
/// scroll-state notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostScrollState {
    /// Not scrolling
    #[default]
    Idle,
    /// The user is actively dragging the list
    Dragging,
    /// The list is settling from a fling
    Settling,
}

/// Platform edge-glow behavior at scroll boundaries
///
/// Suppressed (set to `Never`) while over-pull visuals are active so the
/// two boundary effects never draw at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeEffectMode {
    /// Always show the edge effect
    #[default]
    Always,
    /// Show the edge effect only when the content is scrollable
    IfContentScrolls,
    /// Never show the edge effect
    Never,
}

/// Interface a scrollable list/grid surface exposes to the over-pull system
///
/// Offsets and ranges follow the host's own accounting: `*_scroll_offset`
/// is the signed distance the content has been scrolled from its start
/// edge, `*_scroll_range` the total scrollable content extent.
pub trait ScrollHost {
    fn vertical_scroll_offset(&self) -> i32;
    fn vertical_scroll_range(&self) -> i32;
    fn horizontal_scroll_offset(&self) -> i32;
    fn horizontal_scroll_range(&self) -> i32;

    /// Visible width of the scroll surface
    fn viewport_width(&self) -> i32;
    /// Visible height of the scroll surface
    fn viewport_height(&self) -> i32;

    /// True if the list has more content to reveal in `direction`
    fn can_scroll_vertically(&self, direction: ScrollDirection) -> bool;
    fn can_scroll_horizontally(&self, direction: ScrollDirection) -> bool;

    /// Visually translate all laid-out children by `delta`; the logical
    /// scroll position is unchanged
    fn offset_children_vertical(&mut self, delta: i32);
    fn offset_children_horizontal(&mut self, delta: i32);

    /// Perform a real scroll step and return the `(x, y)` amounts actually
    /// consumed by layout movement
    fn scroll_step(&mut self, dx: i32, dy: i32) -> (i32, i32);

    fn scroll_state(&self) -> HostScrollState;

    /// True while the host's item count changed but its layout has not
    /// been reconciled yet; rollback ticks must not touch layout then
    fn has_pending_data_change(&self) -> bool;

    fn edge_effect_mode(&self) -> EdgeEffectMode;
    fn set_edge_effect_mode(&mut self, mode: EdgeEffectMode);
    /// Drop any edge-glow currently being drawn
    fn invalidate_edge_effects(&mut self);

    /// Minimum cumulative touch movement before a gesture counts as a drag
    fn touch_slop(&self) -> f32;
}
