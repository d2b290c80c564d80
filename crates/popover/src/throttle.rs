//! Leading/trailing rate limiter driven by caller-supplied timestamps.

use std::time::{Duration, Instant};

use tracing::trace;

/// Limits an action to at most once per `period`.
///
/// The first event after a quiet period fires immediately. Events arriving
/// inside the period collapse into a single trailing fire at the end of the
/// period, so the last event is always observed. The owner drives trailing
/// fires through [`RateLimiter::poll`].
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Name used in trace output.
    label: &'static str,
    /// Minimum spacing between fires.
    period: Duration,
    /// Time of the most recent fire.
    last_fired: Option<Instant>,
    /// Pending trailing fire.
    trailing: Option<Instant>,
}

impl RateLimiter {
    /// Create an idle limiter.
    pub fn new(label: &'static str, period: Duration) -> Self {
        Self {
            label,
            period,
            last_fired: None,
            trailing: None,
        }
    }

    /// Record an event at `now`. Returns true when the action should run now.
    pub fn hit(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now < last + self.period => {
                if self.trailing.is_none() {
                    trace!(limiter = self.label, "rate_limit: trailing scheduled");
                }
                self.trailing = Some(last + self.period);
                false
            }
            _ => {
                self.last_fired = Some(now);
                self.trailing = None;
                true
            }
        }
    }

    /// Returns true (once) when a pending trailing fire is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.trailing {
            Some(due) if now >= due => {
                self.trailing = None;
                self.last_fired = Some(now);
                trace!(limiter = self.label, "rate_limit: trailing fire");
                true
            }
            _ => false,
        }
    }

    /// When the pending trailing fire is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.trailing
    }

    /// Drop any pending trailing fire and forget the last fire time.
    pub fn cancel(&mut self) {
        if self.trailing.take().is_some() {
            trace!(limiter = self.label, "rate_limit: cancelled");
        }
        self.last_fired = None;
    }

    /// Change the period. Applies from the next event.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }
}
