//! Zero-duration node that runs a closure when playback reaches it.

use std::fmt;

use crate::core::{Duration, Tween};

/// Fires its closure once per run, on the first update after
/// construction or reset.
pub struct Callback {
    action: Box<dyn FnMut()>,
    fired: bool,
}

impl Callback {
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self {
            action: Box::new(action),
            fired: false,
        }
    }

    fn fire(&mut self) {
        if !self.fired {
            self.fired = true;
            (self.action)();
        }
    }
}

impl Tween for Callback {
    fn update(&mut self, dt: f32) -> f32 {
        self.fire();
        dt
    }

    fn is_done(&self) -> bool {
        self.fired
    }

    fn reset(&mut self) {
        self.fired = false;
    }

    /// Skipping still runs the closure: its effect is part of the end state.
    fn skip_to_end(&mut self) {
        self.fire();
    }

    fn total_duration(&self) -> Duration {
        Duration::ZERO
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("fired", &self.fired).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, Callback::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn fires_exactly_once() {
        let (count, mut cb) = counter();
        assert!(!cb.is_done());
        assert_eq!(cb.update(0.1), 0.1);
        assert_eq!(cb.update(0.1), 0.1);
        assert_eq!(count.get(), 1);
        assert!(cb.is_done());
    }

    #[test]
    fn reset_rearms() {
        let (count, mut cb) = counter();
        cb.update(0.0);
        cb.reset();
        assert!(!cb.is_done());
        cb.update(0.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn skip_fires_if_pending() {
        let (count, mut cb) = counter();
        cb.skip_to_end();
        cb.skip_to_end();
        assert_eq!(count.get(), 1);
        assert!(cb.is_done());
    }
}
