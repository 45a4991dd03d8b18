//! Deceleration profile (cubic ease-out)

use serde::{Deserialize, Serialize};

/// Cubic ease-out: fast start, zero velocity at the end
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Frame-indexed offset profile from a start position to a rest target
///
/// Lazy, finite, and restartable: offsets are computed per frame via the
/// `Iterator` impl or randomly accessed with [`offset_at`]; [`reset`]
/// rewinds to frame zero. The terminal frame returns the target exactly.
///
/// [`offset_at`]: DecelerationProfile::offset_at
/// [`reset`]: DecelerationProfile::reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecelerationProfile {
    start: f64,
    target: f64,
    frame_count: u32,
    frame: u32,
}

impl DecelerationProfile {
    /// Create a profile over `frame_count` frames (at least 1)
    pub fn new(start: f64, target: f64, frame_count: u32) -> Self {
        Self {
            start,
            target,
            frame_count: frame_count.max(1),
            frame: 0,
        }
    }

    /// Offset at a given frame
    ///
    /// Frame 0 is the start position; `frame_count` and beyond is the
    /// target, bit-exact.
    pub fn offset_at(&self, frame: u32) -> f64 {
        if frame >= self.frame_count {
            return self.target;
        }
        let t = frame as f64 / self.frame_count as f64;
        self.start + (self.target - self.start) * ease_out_cubic(t)
    }

    /// Rewind to frame zero
    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// True once the terminal frame has been produced
    pub fn is_finished(&self) -> bool {
        self.frame > self.frame_count
    }

    /// Start position
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Rest target
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Number of frames between start and rest
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

impl Iterator for DecelerationProfile {
    type Item = f64;

    /// Yields `frame_count + 1` offsets: frames `0..=frame_count`
    fn next(&mut self) -> Option<f64> {
        if self.frame > self.frame_count {
            return None;
        }
        let offset = self.offset_at(self.frame);
        self.frame += 1;
        Some(offset)
    }
}
