//! Single-slot delayed jobs.
//!
//! A [`Timer`] holds at most one pending action. Scheduling while a job is
//! pending replaces it (last write wins, no queueing). Dropping the timer
//! drops the pending action, so an owner's teardown always cancels it.

use std::time::Duration;

/// A job that became due during [`Timer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<A> {
    /// The scheduled action.
    pub action: A,
    /// Portion of the advanced time left over after the job became due.
    pub overshoot: Duration,
}

#[derive(Debug, Clone)]
struct Pending<A> {
    remaining: Duration,
    action: A,
}

/// An owned, cancelable, single-slot delayed action.
#[derive(Debug, Clone)]
pub struct Timer<A> {
    pending: Option<Pending<A>>,
}

impl<A> Timer<A> {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `action` to fire after `delay`.
    ///
    /// Returns the action that was pending before, if any. That action
    /// will never fire.
    pub fn schedule(&mut self, delay: Duration, action: A) -> Option<A> {
        let replaced = self
            .pending
            .replace(Pending {
                remaining: delay,
                action,
            })
            .map(|p| p.action);

        if replaced.is_some() {
            tracing::trace!(?delay, "timer rescheduled over a pending job");
        }
        replaced
    }

    /// Cancels the pending action and returns it.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.action)
    }

    /// Returns true if an action is waiting to fire.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending action.
    #[must_use]
    pub fn pending(&self) -> Option<&A> {
        self.pending.as_ref().map(|p| &p.action)
    }

    /// Returns the time left before the pending action fires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.remaining)
    }

    /// Advances the timer by `dt`.
    ///
    /// Returns the action if it became due. A zero delay fires on the
    /// first advance, even when `dt` is zero.
    pub fn advance(&mut self, dt: Duration) -> Option<Fired<A>> {
        let pending = self.pending.as_mut()?;
        if dt < pending.remaining {
            pending.remaining -= dt;
            return None;
        }

        let Pending { remaining, action } = self.pending.take()?;
        Some(Fired {
            action,
            overshoot: dt - remaining,
        })
    }
}

impl<A> Default for Timer<A> {
    fn default() -> Self {
        Self::new()
    }
}
