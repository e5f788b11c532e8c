use crate::core::{Duration, Tween};

/// Does nothing and takes no time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Empty {
    pub fn new() -> Self {
        Self
    }
}

impl Tween for Empty {
    fn update(&mut self, dt: f32) -> f32 {
        dt
    }

    fn is_done(&self) -> bool {
        true
    }

    fn reset(&mut self) {}

    fn skip_to_end(&mut self) {}

    fn total_duration(&self) -> Duration {
        Duration::ZERO
    }
}
