//! Configuration errors
//!
//! Runtime operations in Rebound are total functions of the current
//! geometry and never fail; the only fallible surface is configuration
//! validation at construction time.

use thiserror::Error;

/// Errors from validating over-pull configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero-length settle would make the interpolation degenerate
    #[error("rollback duration must be greater than zero")]
    ZeroDuration,
}
