//! Spin timing profiles

use serde::{Deserialize, Serialize};

/// Timing profile for spin pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpinProfile {
    /// Normal gameplay pacing
    #[default]
    Normal,
    /// Fast pacing for impatient sessions
    Turbo,
    /// Near-instant, for tests and previews
    Studio,
    /// Custom scaled timing
    Custom,
}

/// Detailed spin timing configuration
///
/// All phases are frame-driven and assume one `tick` per display refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Profile type
    pub profile: SpinProfile,

    /// Idle scroll speed while waiting for a stop request (px per frame)
    pub idle_velocity: f64,

    /// Frames to decelerate from the stop request to rest
    pub decel_frames: u32,

    /// Frames to hold the rest position before reporting the winner
    pub settle_frames: u32,
}

impl SpinTiming {
    /// Normal pacing: 3 s deceleration, 1.5 s settle at 60 fps
    pub fn normal() -> Self {
        Self {
            profile: SpinProfile::Normal,
            idle_velocity: 12.0,
            decel_frames: 180,
            settle_frames: 90,
        }
    }

    /// Turbo: half-length deceleration, short settle
    pub fn turbo() -> Self {
        Self {
            profile: SpinProfile::Turbo,
            idle_velocity: 20.0,
            decel_frames: 90,
            settle_frames: 30,
        }
    }

    /// Studio mode: near-instant, for automated tests
    pub fn studio() -> Self {
        Self {
            profile: SpinProfile::Studio,
            idle_velocity: 40.0,
            decel_frames: 6,
            settle_frames: 0,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: SpinProfile) -> Self {
        match profile {
            SpinProfile::Normal | SpinProfile::Custom => Self::normal(),
            SpinProfile::Turbo => Self::turbo(),
            SpinProfile::Studio => Self::studio(),
        }
    }

    /// Scale timing by factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = factor.max(f64::EPSILON);
        Self {
            profile: SpinProfile::Custom,
            idle_velocity: self.idle_velocity / factor,
            decel_frames: ((self.decel_frames as f64 * factor).round() as u32).max(1),
            settle_frames: (self.settle_frames as f64 * factor).round() as u32,
        }
    }

    /// Total frames from stop request to winner report
    pub fn stop_frames(&self) -> u32 {
        self.decel_frames + self.settle_frames
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}
