//! Fixed-rate frame clock
//!
//! Produces the deadlines the event loop waits on between frames. The
//! loop blocks on pacing, not on I/O; when a deadline is missed by
//! more than a frame the clock re-anchors instead of emitting a burst
//! of catch-up frames.

use std::time::{Duration, Instant};

/// Paces frames at a fixed target rate
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let interval = Duration::from_secs(1) / target_fps.max(1);
        Self {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    /// Deadline of the upcoming frame
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Advance to the next frame deadline from `now`
    pub fn frame_complete(&mut self, now: Instant) {
        self.next_deadline += self.interval;
        if self.next_deadline < now {
            self.next_deadline = now + self.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_deadlines_are_one_sixtieth_apart() {
        let mut clock = FrameClock::new(60);
        let first = clock.next_deadline();
        clock.frame_complete(first);
        let second = clock.next_deadline();
        let delta = second - first;
        assert!(delta >= Duration::from_millis(16) && delta <= Duration::from_millis(17));
    }

    #[test]
    fn missed_deadlines_reanchor_instead_of_bursting() {
        let mut clock = FrameClock::new(60);
        let late = clock.next_deadline() + Duration::from_secs(5);
        clock.frame_complete(late);
        assert!(clock.next_deadline() > late);
    }
}
