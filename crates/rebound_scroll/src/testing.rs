//! Shared test fixture: a scriptable in-memory scroll host

use crate::host::{EdgeEffectMode, HostScrollState, ScrollDirection, ScrollHost};

/// In-memory [`ScrollHost`] with scriptable geometry and a call log
///
/// `can_scroll_*` answers are derived from the geometry: backward needs a
/// positive offset, forward needs content beyond the viewport. Scroll
/// steps are fully consumed unless `consume_scroll` is cleared, in which
/// case layout absorbs nothing.
pub struct MockHost {
    pub v_offset: i32,
    pub v_range: i32,
    pub h_offset: i32,
    pub h_range: i32,
    pub viewport_w: i32,
    pub viewport_h: i32,
    pub consume_scroll: bool,
    pub pending_data_change: bool,
    pub state: HostScrollState,
    pub edge_mode: EdgeEffectMode,
    pub slop: f32,
    /// Every scroll_step call as requested (dx, dy)
    pub steps: Vec<(i32, i32)>,
    /// Every vertical child offset applied
    pub child_offsets_v: Vec<i32>,
    /// Every horizontal child offset applied
    pub child_offsets_h: Vec<i32>,
    /// Number of edge-glow invalidations
    pub invalidations: usize,
}

impl MockHost {
    pub fn vertical(offset: i32, range: i32, viewport: i32) -> Self {
        Self {
            v_offset: offset,
            v_range: range,
            h_offset: 0,
            h_range: 0,
            viewport_w: viewport,
            viewport_h: viewport,
            consume_scroll: true,
            pending_data_change: false,
            state: HostScrollState::Idle,
            edge_mode: EdgeEffectMode::Always,
            slop: 10.0,
            steps: Vec::new(),
            child_offsets_v: Vec::new(),
            child_offsets_h: Vec::new(),
            invalidations: 0,
        }
    }

    pub fn horizontal(offset: i32, range: i32, viewport: i32) -> Self {
        let mut host = Self::vertical(0, 0, viewport);
        host.h_offset = offset;
        host.h_range = range;
        host
    }

    /// Net visual child displacement along the vertical axis
    pub fn total_child_offset_v(&self) -> i32 {
        self.child_offsets_v.iter().sum()
    }
}

impl ScrollHost for MockHost {
    fn vertical_scroll_offset(&self) -> i32 {
        self.v_offset
    }

    fn vertical_scroll_range(&self) -> i32 {
        self.v_range
    }

    fn horizontal_scroll_offset(&self) -> i32 {
        self.h_offset
    }

    fn horizontal_scroll_range(&self) -> i32 {
        self.h_range
    }

    fn viewport_width(&self) -> i32 {
        self.viewport_w
    }

    fn viewport_height(&self) -> i32 {
        self.viewport_h
    }

    fn can_scroll_vertically(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Backward => self.v_offset > 0,
            ScrollDirection::Forward => self.v_offset + self.viewport_h < self.v_range,
        }
    }

    fn can_scroll_horizontally(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Backward => self.h_offset > 0,
            ScrollDirection::Forward => self.h_offset + self.viewport_w < self.h_range,
        }
    }

    fn offset_children_vertical(&mut self, delta: i32) {
        self.child_offsets_v.push(delta);
        // Computed scroll offset is derived from child positions, so a
        // visual translation shifts it: children moved toward the end
        // edge lower the offset.
        self.v_offset -= delta;
    }

    fn offset_children_horizontal(&mut self, delta: i32) {
        self.child_offsets_h.push(delta);
        self.h_offset -= delta;
    }

    fn scroll_step(&mut self, dx: i32, dy: i32) -> (i32, i32) {
        self.steps.push((dx, dy));
        if self.consume_scroll {
            self.v_offset += dy;
            self.h_offset += dx;
            (dx, dy)
        } else {
            (0, 0)
        }
    }

    fn scroll_state(&self) -> HostScrollState {
        self.state
    }

    fn has_pending_data_change(&self) -> bool {
        self.pending_data_change
    }

    fn edge_effect_mode(&self) -> EdgeEffectMode {
        self.edge_mode
    }

    fn set_edge_effect_mode(&mut self, mode: EdgeEffectMode) {
        self.edge_mode = mode;
    }

    fn invalidate_edge_effects(&mut self) {
        self.invalidations += 1;
    }

    fn touch_slop(&self) -> f32 {
        self.slop
    }
}
