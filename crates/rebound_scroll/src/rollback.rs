//! Rollback settle animation
//!
//! After a release, over-pulled content has to travel back to its resting
//! position. The animator interpolates the open gap down to zero and feeds
//! each step through the host's scroll-step mechanism; whatever layout
//! could not absorb is applied as a direct child offset, so the visible
//! movement always matches the interpolation even when the list has no
//! more content to lay out.

use rebound_core::ConfigError;
use tracing::{debug, trace};

use crate::delegate::Axis;
use crate::driver::TickDriver;
use crate::host::ScrollHost;

/// Reference settle duration in milliseconds
pub const DEFAULT_ROLLBACK_DURATION_MS: u32 = 150;

/// Rollback tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollbackConfig {
    /// Settle duration in milliseconds
    pub duration_ms: u32,
}

impl Default for RollbackConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ROLLBACK_DURATION_MS,
        }
    }
}

impl RollbackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

/// Outcome of advancing the animator by one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackProgress {
    /// No run is active
    Idle,
    /// Host layout is mid-reconciliation; the tick was dropped
    Skipped,
    /// One interpolation step was applied to the content
    Ticked,
    /// The run reached its target and was torn down
    Completed,
}

/// State carried only while a run is active
#[derive(Debug, Clone, Copy)]
struct RollbackRun {
    /// Value applied by the previous tick
    last_value: i32,
    target: i32,
}

/// Drives over-pulled content back to rest through an injected tick driver
///
/// At most one run exists at a time: starting a new rollback cancels and
/// releases any in-flight run before the new one begins.
pub struct RollbackAnimator<D: TickDriver> {
    driver: D,
    config: RollbackConfig,
    run: Option<RollbackRun>,
}

impl<D: TickDriver> RollbackAnimator<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            config: RollbackConfig::default(),
            run: None,
        }
    }

    pub fn with_config(driver: D, config: RollbackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            driver,
            config,
            run: None,
        })
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    pub fn config(&self) -> RollbackConfig {
        self.config
    }

    /// Start a run from `from` back to zero; any in-flight run is cancelled
    /// first so no two runs ever drive the content concurrently
    pub fn start(&mut self, from: i32, now_ms: u64) {
        self.cancel();
        debug!(from, duration_ms = self.config.duration_ms, "starting rollback");
        self.run = Some(RollbackRun {
            last_value: from,
            target: 0,
        });
        self.driver.begin(from, 0, self.config.duration_ms, now_ms);
    }

    /// Detach and drop any in-flight run
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            debug!("cancelling in-flight rollback");
            self.driver.cancel();
        }
    }

    /// Sample the driver and apply one step of settle movement
    pub fn advance(
        &mut self,
        host: &mut dyn ScrollHost,
        axis: Axis,
        now_ms: u64,
    ) -> RollbackProgress {
        let Some(mut run) = self.run else {
            return RollbackProgress::Idle;
        };
        let Some(sample) = self.driver.sample(now_ms) else {
            // The driver lost its run independently; drop ours too.
            self.run = None;
            return RollbackProgress::Idle;
        };

        if host.has_pending_data_change() {
            // Item count and layout are out of step; a scroll step now could
            // index children that no longer exist. The run still ends on its
            // terminal sample so the phase never sticks in a settling state.
            trace!("rollback tick skipped: host has unreconciled data change");
            if sample.completed {
                self.run = None;
                return RollbackProgress::Completed;
            }
            return RollbackProgress::Skipped;
        }

        let diff = sample.value - run.last_value;
        if diff != 0 {
            let consumed = axis.scroll_step(host, diff);
            // Layout absorbed `consumed`; push the children directly for the
            // rest so the content moves by exactly `diff`.
            let leftover = consumed - diff;
            if leftover != 0 {
                axis.offset_children(host, leftover);
            }
            trace!(value = sample.value, diff, consumed, "rollback tick");
        }
        run.last_value = sample.value;

        if sample.completed {
            debug!(target = run.target, "rollback completed");
            self.run = None;
            return RollbackProgress::Completed;
        }
        self.run = Some(run);
        RollbackProgress::Ticked
    }
}
