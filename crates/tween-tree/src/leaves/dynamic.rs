//! Lazily generated node.
//!
//! The generator runs on first touch (any call that needs the child) and the
//! result is memoized until `reset`, so the tree it builds can depend on state
//! that only exists once playback reaches this point.

use std::cell::RefCell;
use std::fmt;

use crate::core::{BoxedTween, Duration, Tween};

pub struct Dynamic {
    generator: Box<dyn Fn() -> BoxedTween>,
    child: RefCell<Option<BoxedTween>>,
}

impl Dynamic {
    pub fn new<T, F>(generator: F) -> Self
    where
        T: Tween + 'static,
        F: Fn() -> T + 'static,
    {
        Self {
            generator: Box::new(move || Box::new(generator()) as BoxedTween),
            child: RefCell::new(None),
        }
    }

    /// Whether the child has been generated in the current run.
    pub fn is_generated(&self) -> bool {
        self.child.borrow().is_some()
    }

    fn with_child<R>(&self, f: impl FnOnce(&mut dyn Tween) -> R) -> R {
        let mut slot = self.child.borrow_mut();
        let child = slot.get_or_insert_with(|| {
            log::trace!("dynamic tween: generating child");
            (self.generator)()
        });
        f(&mut **child)
    }
}

impl Tween for Dynamic {
    fn update(&mut self, dt: f32) -> f32 {
        self.with_child(|c| c.update(dt))
    }

    fn is_done(&self) -> bool {
        self.with_child(|c| c.is_done())
    }

    /// Drops the memoized child; the next touch regenerates it.
    fn reset(&mut self) {
        *self.child.get_mut() = None;
    }

    /// Seeks the memoized child in place; only `reset` regenerates it.
    fn jump_to(&mut self, time: f32) {
        self.with_child(|c| c.jump_to(time))
    }

    fn skip_to_end(&mut self) {
        self.with_child(|c| c.skip_to_end())
    }

    fn total_duration(&self) -> Duration {
        self.with_child(|c| c.total_duration())
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynamic")
            .field("generated", &self.is_generated())
            .finish()
    }
}
