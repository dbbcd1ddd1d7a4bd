use std::time::Duration;

use iced::time::Instant;

/// Decides whether a frame is due. The host timer wakes the loop once per
/// interval; this keeps the schedule fixed so timer jitter does not drop frames.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        let interval = Duration::from_millis(1000 / fps.max(1) as u64);
        Self {
            interval,
            next_frame: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.interval;
        // Fell behind by more than a frame: resynchronize instead of bursting.
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
        true
    }
}
