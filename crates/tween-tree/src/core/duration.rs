//! Duration model for tween nodes.
//!
//! A node either knows how long it runs (and how far it has got) or it
//! does not. Code that needs a length must branch on `Unknown`.

use std::cmp::Ordering;

use super::error::TweenError;

/// Length and progress of a tween node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Duration {
    /// Fixed length in seconds plus time already elapsed.
    /// Producers keep `0 <= current_time <= duration`.
    Known { duration: f32, current_time: f32 },
    /// Length cannot be determined in advance (e.g. predicate-gated waits).
    Unknown,
}

impl Duration {
    /// Zero-length duration, used by instantaneous nodes.
    pub const ZERO: Duration = Duration::Known {
        duration: 0.0,
        current_time: 0.0,
    };

    /// Known duration with the elapsed time clamped into `[0, duration]`.
    pub fn known(duration: f32, current_time: f32) -> Self {
        let duration = duration.max(0.0);
        let current_time = if current_time.is_nan() {
            0.0
        } else {
            current_time.clamp(0.0, duration)
        };
        Duration::Known {
            duration,
            current_time,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Duration::Known { .. })
    }

    /// Total length in seconds.
    pub fn try_duration(&self) -> Result<f32, TweenError> {
        match self {
            Duration::Known { duration, .. } => Ok(*duration),
            Duration::Unknown => Err(TweenError::UnknownDurationQueried),
        }
    }

    /// Elapsed seconds.
    pub fn try_current_time(&self) -> Result<f32, TweenError> {
        match self {
            Duration::Known { current_time, .. } => Ok(*current_time),
            Duration::Unknown => Err(TweenError::UnknownDurationQueried),
        }
    }

    /// Total length in seconds.
    ///
    /// # Panics
    /// Panics on `Unknown`; use [`Duration::try_duration`] to branch instead.
    pub fn duration(&self) -> f32 {
        match self.try_duration() {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }

    /// Elapsed seconds.
    ///
    /// # Panics
    /// Panics on `Unknown`.
    pub fn current_time(&self) -> f32 {
        match self.try_current_time() {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }

    /// The known length, or `None`.
    pub fn known_duration(&self) -> Option<f32> {
        self.try_duration().ok()
    }
}

impl PartialEq<f32> for Duration {
    fn eq(&self, other: &f32) -> bool {
        match self {
            Duration::Known { duration, .. } => duration == other,
            Duration::Unknown => false,
        }
    }
}

impl PartialOrd<f32> for Duration {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        match self {
            Duration::Known { duration, .. } => duration.partial_cmp(other),
            Duration::Unknown => None,
        }
    }
}
