//! Interpolates a [`Tweenable`] toward a target over a fixed duration.

use std::fmt;

use crate::core::time::{sanitize_dt, sanitize_duration};
use crate::core::{Duration, Ease, Tween, TweenError};
use crate::tweenable::Tweenable;

/// Drives one tweenable from its live value to `target`.
///
/// The starting value is snapshotted on the first update after construction
/// or reset, not at construction: the bound value may drift before this node
/// is reached. The snapshot is held for the rest of the run, so a write from
/// elsewhere mid-run (even at time zero) does not move the start.
pub struct ValueTween<T> {
    tweenable: Tweenable<T>,
    start: Option<T>,
    target: T,
    duration: f32,
    current_time: f32,
    ease: Ease,
}

impl<T: Clone + 'static> ValueTween<T> {
    /// Negative or NaN durations are treated as zero.
    pub fn new(tweenable: Tweenable<T>, target: T, duration: f32, ease: Ease) -> Self {
        Self {
            tweenable,
            start: None,
            target,
            duration: sanitize_duration(duration),
            current_time: 0.0,
            ease,
        }
    }

    /// Validating builder; see [`ValueTweenBuilder::build`].
    pub fn builder(tweenable: &Tweenable<T>) -> ValueTweenBuilder<T> {
        ValueTweenBuilder {
            tweenable: tweenable.clone(),
            target: None,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Normalized progress [0, 1]. Zero-duration tweens count as complete
    /// once started.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.start.is_some() {
                1.0
            } else {
                0.0
            }
        } else {
            self.current_time / self.duration
        }
    }

    fn snapshot_start(&mut self) {
        if self.start.is_none() {
            self.start = Some(self.tweenable.value());
        }
    }

    fn apply(&self) {
        if let Some(start) = &self.start {
            let eased = self.ease.apply(self.progress());
            let value = self.tweenable.lerp(start, &self.target, eased);
            self.tweenable.set_value(value);
        }
    }
}

impl<T: Clone + 'static> Tween for ValueTween<T> {
    fn update(&mut self, dt: f32) -> f32 {
        let dt = sanitize_dt(dt);
        if self.is_done() {
            return dt;
        }
        self.snapshot_start();

        let unclamped = self.current_time + dt;
        // Rounding in `unclamped` must not let overflow exceed dt.
        let overflow = (unclamped - self.duration).max(0.0).min(dt);
        self.current_time = unclamped.clamp(0.0, self.duration);
        self.apply();
        overflow
    }

    /// Not done until played at least once, even with zero duration: a fresh
    /// zero-length tween still owes its single write of the target. A
    /// composite holding one therefore stays open until its next update.
    fn is_done(&self) -> bool {
        self.start.is_some() && self.current_time >= self.duration
    }

    fn reset(&mut self) {
        self.start = None;
        self.current_time = 0.0;
    }

    fn skip_to_end(&mut self) {
        if self.is_done() {
            return;
        }
        self.snapshot_start();
        self.current_time = self.duration;
        self.apply();
    }

    fn total_duration(&self) -> Duration {
        Duration::known(self.duration, self.current_time)
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueTween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueTween")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("current_time", &self.current_time)
            .field("ease", &self.ease)
            .finish()
    }
}

/// Builder that validates a value tween before it can be played.
pub struct ValueTweenBuilder<T> {
    tweenable: Tweenable<T>,
    target: Option<T>,
    duration: f32,
    ease: Ease,
}

impl<T: Clone + 'static> ValueTweenBuilder<T> {
    pub fn to(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    /// Like [`ValueTweenBuilder::to`], for targets that may be absent.
    pub fn to_opt(mut self, target: Option<T>) -> Self {
        self.target = target;
        self
    }

    pub fn over(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// # Errors
    /// * `MissingTarget` - no target was given
    /// * `InvalidDuration` - the duration is negative or NaN
    pub fn build(self) -> Result<ValueTween<T>, TweenError> {
        let target = self.target.ok_or(TweenError::MissingTarget)?;
        if self.duration.is_nan() || self.duration < 0.0 {
            return Err(TweenError::InvalidDuration(self.duration));
        }
        Ok(ValueTween::new(self.tweenable, target, self.duration, self.ease))
    }
}
