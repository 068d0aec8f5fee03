use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,
    pub frame_index: u64,
}

/// Wall-clock delta between render iterations.
///
/// The delta is clamped so a stall (debugger, window drag) does not hand the
/// simulation one enormous step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new(dt_max: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_max,
        }
    }

    /// Restart the baseline, e.g. after the outcome dialog was dismissed
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let time = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new(Duration::from_millis(100));
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(20));
        let time = clock.tick();
        assert!(time.dt <= 0.005 + f32::EPSILON);
    }
}
