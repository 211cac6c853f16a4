//! Frames-per-second counting.

use ::tracing::trace;

/// The value reported by [`FpsCounter::fps`] before the first full second of
/// frames has been counted.
pub const INITIAL_FPS: u32 = 60;

/// Counts flipped frames and publishes the count once per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsCounter {
    /// Start of the current counting window, in clock seconds.
    window_start: f64,
    /// Frames flipped in the current counting window.
    frames: u32,
    /// The last published frame count.
    fps: u32,
}

impl FpsCounter {
    /// Constructs a counter whose first counting window starts at `now`.
    pub fn new(now: f64) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: INITIAL_FPS,
        }
    }

    /// Records one frame at time `now`. Once at least a second has passed since
    /// the counting window started, the count is published and a new window
    /// starts.
    pub fn tick(&mut self, now: f64) {
        self.frames += 1;

        if now - self.window_start >= 1.0 {
            trace!(fps = self.frames, "Frame rate updated");
            self.window_start = now;
            self.fps = self.frames;
            self.frames = 0;
        }
    }

    /// The most recently published frames-per-second value.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value() {
        let mut counter = FpsCounter::new(0.0);
        assert_eq!(counter.fps(), INITIAL_FPS);

        counter.tick(0.5);
        assert_eq!(counter.fps(), INITIAL_FPS);
    }

    #[test]
    fn test_publishes_once_per_second() {
        let mut counter = FpsCounter::new(0.0);

        for frame in 1..=30 {
            counter.tick(f64::from(frame) / 30.0);
        }
        assert_eq!(counter.fps(), 30);

        // Counting restarts from the frame that published.
        for frame in 1..=9 {
            counter.tick(1.0 + f64::from(frame) * 0.125);
        }
        assert_eq!(counter.fps(), 8);
    }
}
