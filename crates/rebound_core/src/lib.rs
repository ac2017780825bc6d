//! Rebound Core Types
//!
//! This crate provides the foundational types for the Rebound over-scroll
//! system:
//!
//! - **Touch Events**: Platform-agnostic touch samples in raw screen space
//! - **Over-Pull Phases**: The interaction state a scroll surface is in
//! - **Listener Dispatch**: Ordered phase-change notification registry
//!
//! # Example
//!
//! ```rust
//! use rebound_core::{OverPullPhase, PhaseChange, PhaseListeners};
//!
//! let mut listeners = PhaseListeners::new();
//! let id = listeners.add(|change: &PhaseChange| {
//!     println!("{:?} -> {:?} at {}", change.previous, change.current, change.offset);
//! });
//!
//! listeners.notify(&PhaseChange {
//!     previous: OverPullPhase::None,
//!     current: OverPullPhase::PullingStart,
//!     offset: -12,
//! });
//!
//! listeners.remove(id);
//! ```

pub mod error;
pub mod events;
pub mod listener;
pub mod phase;

pub use error::ConfigError;
pub use events::{TouchAction, TouchEvent};
pub use listener::{ListenerId, PhaseListener, PhaseListeners};
pub use phase::{OverPullPhase, PhaseChange};
