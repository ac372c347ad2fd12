// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Trailing-edge call coalescing over a caller-supplied millisecond clock.
///
/// Every [`call`](Self::call) pushes the deadline to `now + delay`. Once the
/// clock reaches the deadline, [`poll`](Self::poll) reports a single firing
/// for all the calls made since the last one. The debouncer owns no timer;
/// the host schedules a wake-up for [`deadline`](Self::deadline).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// The quiet period.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a call at `now`, rescheduling any pending firing.
    pub fn call(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.delay_ms));
    }

    /// Returns `true` once per burst of calls, at the first poll on or after
    /// the deadline.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// When the pending firing is due, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Drops the pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` if a firing is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
