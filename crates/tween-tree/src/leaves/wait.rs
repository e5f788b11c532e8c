//! Waiting primitives: a fixed delay and a predicate gate.

use std::fmt;

use crate::core::time::{sanitize_dt, sanitize_duration};
use crate::core::{Duration, Tween};

/// Holds playback for a fixed number of seconds.
#[derive(Debug, Clone, Copy)]
pub struct WaitSeconds {
    duration: f32,
    /// Countdown; done once it reaches zero or below.
    remaining: f32,
}

impl WaitSeconds {
    pub fn new(seconds: f32) -> Self {
        let duration = sanitize_duration(seconds);
        Self {
            duration,
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}

impl Tween for WaitSeconds {
    fn update(&mut self, dt: f32) -> f32 {
        let dt = sanitize_dt(dt);
        if self.is_done() {
            return dt;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            let overflow = (-self.remaining).max(0.0);
            self.remaining = 0.0;
            overflow
        } else {
            0.0
        }
    }

    fn is_done(&self) -> bool {
        self.remaining <= 0.0
    }

    fn reset(&mut self) {
        self.remaining = self.duration;
    }

    fn skip_to_end(&mut self) {
        self.remaining = 0.0;
    }

    fn total_duration(&self) -> Duration {
        let elapsed = if self.remaining.is_infinite() {
            0.0
        } else {
            self.duration - self.remaining()
        };
        Duration::known(self.duration, elapsed)
    }
}

/// Holds playback until a predicate becomes true.
///
/// Its length cannot be known ahead of time, so it reports `Unknown`.
pub struct WaitUntil {
    predicate: Box<dyn Fn() -> bool>,
    /// Set by `skip_to_end`; cleared by `reset`.
    skipped: bool,
}

impl WaitUntil {
    pub fn new(predicate: impl Fn() -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            skipped: false,
        }
    }
}

impl Tween for WaitUntil {
    fn update(&mut self, dt: f32) -> f32 {
        if self.is_done() {
            dt
        } else {
            0.0
        }
    }

    fn is_done(&self) -> bool {
        self.skipped || (self.predicate)()
    }

    fn reset(&mut self) {
        self.skipped = false;
    }

    fn skip_to_end(&mut self) {
        self.skipped = true;
    }

    fn total_duration(&self) -> Duration {
        Duration::Unknown
    }
}

impl fmt::Debug for WaitUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitUntil")
            .field("skipped", &self.skipped)
            .finish()
    }
}
