use std::time::Instant;

/// Timing handed to each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started. Not clamped across stalls, so
    /// animation driven by it stays in phase with wall time.
    pub elapsed: f32,

    /// Zero for the first frame.
    pub frame_index: u64,
}

/// Monotonic per-window frame clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(origin: Instant) -> Self {
        Self { origin, frames: 0 }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let time = FrameTime {
            elapsed: now.saturating_duration_since(self.origin).as_secs_f32(),
            frame_index: self.frames,
        };
        self.frames = self.frames.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn elapsed_tracks_wall_time_without_clamping() {
        let origin = Instant::now();
        let mut clock = FrameClock::starting_at(origin);
        let t = clock.tick_at(origin + Duration::from_secs(5));
        assert!((t.elapsed - 5.0).abs() < 1e-4);
    }

    #[test]
    fn tick_before_origin_saturates_to_zero() {
        let origin = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(origin);
        assert_eq!(clock.tick_at(origin - Duration::from_millis(500)).elapsed, 0.0);
    }

    #[test]
    fn frames_are_numbered_from_zero() {
        let origin = Instant::now();
        let mut clock = FrameClock::starting_at(origin);
        assert_eq!(clock.tick_at(origin).frame_index, 0);
        assert_eq!(clock.tick_at(origin + Duration::from_millis(16)).frame_index, 1);
        assert_eq!(clock.tick_at(origin + Duration::from_millis(33)).frame_index, 2);
    }
}
