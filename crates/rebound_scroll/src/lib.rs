//! Rebound Scroll Behavior
//!
//! Elastic over-scroll for scrollable list/grid surfaces: dragging past
//! the natural start or end of content displaces it by a damped amount,
//! and release settles it back flush with the boundary.
//!
//! - **Axis Scroll Delegate**: one orientation-aware view of the host's
//!   scroll geometry, owning the gesture touch session
//! - **Over-Pull State Machine**: classifies each move as normal scroll
//!   or over-pull and drives the damped displacement
//! - **Rollback Animator**: eased settle back to rest, cooperating with
//!   the host's layout lifecycle
//!
//! # Example
//!
//! ```rust,ignore
//! use rebound_scroll::{Axis, OverPullHelper, TimedDriver};
//!
//! let mut helper = OverPullHelper::new(&host, Axis::Vertical, TimedDriver::new());
//! helper.add_listener(|change| {
//!     println!("phase {:?} offset {}", change.current, change.offset);
//! });
//!
//! // In the host's touch handling:
//! let consumed = helper.on_touch(&mut host, &event);
//! if event.is_up_or_cancel() {
//!     helper.on_release_or_cancel(&mut host, &event, now_ms);
//! }
//!
//! // Once per animation frame:
//! helper.drive(&mut host, now_ms);
//! ```

pub mod delegate;
pub mod driver;
pub mod easing;
pub mod helper;
pub mod host;
pub mod rollback;

#[cfg(test)]
pub(crate) mod testing;

pub use delegate::{Axis, AxisDelegate, TouchSession};
pub use driver::{TickDriver, TickSample, TimedDriver};
pub use easing::Easing;
pub use helper::OverPullHelper;
pub use host::{EdgeEffectMode, HostScrollState, ScrollDirection, ScrollHost};
pub use rollback::{
    RollbackAnimator, RollbackConfig, RollbackProgress, DEFAULT_ROLLBACK_DURATION_MS,
};
