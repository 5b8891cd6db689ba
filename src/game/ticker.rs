use std::time::{Duration, Instant};

/// Handle for a running fixed-interval tick source.  Dropping the handle
/// cancels the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickSource {
    id: u64,
    period: Duration,
    next: Instant,
}

impl TickSource {
    /// Start a tick source whose first tick falls one `period` after `now`
    pub(super) fn start(id: u64, period: Duration, now: Instant) -> TickSource {
        TickSource {
            id,
            period,
            next: now + period,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Return the moment at which the next tick is due
    pub(crate) fn deadline(&self) -> Instant {
        self.next
    }

    /// Schedule the next tick one period after `now`.  Ticks are therefore
    /// spaced at least one period apart, however late the previous one ran.
    pub(super) fn rearm(&mut self, now: Instant) {
        self.next = now + self.period;
    }
}
