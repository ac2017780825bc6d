//! Cooperative tick source for the rollback animation
//!
//! The rollback animator does not own time. A [`TickDriver`] injected at
//! construction maps wall-clock (or simulated) milliseconds to values
//! between the endpoints of the current run; the animator samples it once
//! per frame and applies the resulting step. This keeps the whole settle
//! path single-threaded and deterministic under test.

use crate::easing::Easing;

/// One sampled tick of an active run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSample {
    /// Interpolated value at the sample time
    pub value: i32,
    /// True when the run has reached its target; the driver is idle again
    pub completed: bool,
}

/// Timed-value source driving the rollback interpolation
pub trait TickDriver {
    /// Begin a run from `from` to `to` over `duration_ms`, anchored at
    /// `now_ms`. Any previous run is replaced.
    fn begin(&mut self, from: i32, to: i32, duration_ms: u32, now_ms: u64);

    /// Abandon the active run without completing it
    fn cancel(&mut self);

    /// True while a run is active
    fn is_active(&self) -> bool;

    /// Sample the active run at `now_ms`; `None` while idle. The terminal
    /// sample carries the exact target value and `completed = true`.
    fn sample(&mut self, now_ms: u64) -> Option<TickSample>;
}

#[derive(Debug, Clone, Copy)]
struct TimedRun {
    from: i32,
    to: i32,
    duration_ms: u32,
    started_ms: u64,
}

/// Default driver: fixed-duration eased interpolation against caller-supplied
/// timestamps
#[derive(Debug, Default)]
pub struct TimedDriver {
    easing: Easing,
    run: Option<TimedRun>,
}

impl TimedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            easing,
            run: None,
        }
    }
}

impl TickDriver for TimedDriver {
    fn begin(&mut self, from: i32, to: i32, duration_ms: u32, now_ms: u64) {
        self.run = Some(TimedRun {
            from,
            to,
            duration_ms,
            started_ms: now_ms,
        });
    }

    fn cancel(&mut self) {
        self.run = None;
    }

    fn is_active(&self) -> bool {
        self.run.is_some()
    }

    fn sample(&mut self, now_ms: u64) -> Option<TickSample> {
        let run = self.run?;
        let elapsed = now_ms.saturating_sub(run.started_ms) as f32;
        let progress = if run.duration_ms == 0 {
            1.0
        } else {
            elapsed / run.duration_ms as f32
        };

        if progress >= 1.0 {
            self.run = None;
            return Some(TickSample {
                value: run.to,
                completed: true,
            });
        }

        let eased = self.easing.apply(progress);
        let value = run.from + ((run.to - run.from) as f32 * eased).round() as i32;
        Some(TickSample {
            value,
            completed: false,
        })
    }
}
