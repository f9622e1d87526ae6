use std::time::Instant;

/// Wall-clock timing for the render loop.
pub struct FrameClock {
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame_time: now,
        }
    }

    /// Seconds since the clock was created.
    pub fn elapsed(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    /// Restarts both the elapsed origin and the frame delta.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Seconds since the previous call (or since creation).
    pub fn frame_delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
