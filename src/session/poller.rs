use std::time::{Duration, Instant};

/// Single-slot recurring timer for position sampling.
///
/// There is at most one pending deadline: `start` replaces whatever was
/// scheduled before.
#[derive(Debug, Clone)]
pub struct PositionPoller {
    period: Duration,
    next_due: Option<Instant>,
}

impl PositionPoller {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns true when a sample is due at `now` and schedules the next one.
    /// Missed periods are skipped rather than replayed.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(at) if now >= at => {
                let mut next = at + self.period;
                if next <= now {
                    next = now + self.period;
                }
                self.next_due = Some(next);
                true
            }
            _ => false,
        }
    }
}
