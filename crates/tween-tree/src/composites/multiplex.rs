//! Parallel composite: children play simultaneously in lockstep.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::time::sanitize_dt;
use crate::core::{BoxedTween, Duration, Tween};

use super::collection::{Composite, TweenCollection};

type SpawnQueue = RefCell<Vec<BoxedTween>>;

/// Runs every child with the same `dt` and finishes when all of them have.
///
/// Adding a child to a finished multiplex reopens it: `is_done` turns false
/// until the newcomer completes too.
#[derive(Default)]
pub struct Multiplex {
    children: TweenCollection,
    /// Children appended through a [`Spawner`], absorbed during traversal.
    spawned: Rc<SpawnQueue>,
}

/// Appends children to a [`Multiplex`] from inside its own update, e.g. from
/// a callback running as one of its descendants.
///
/// Holds only a weak reference, so capturing it in a child does not keep the
/// multiplex alive.
#[derive(Debug, Clone)]
pub struct Spawner {
    queue: Weak<SpawnQueue>,
}

impl Spawner {
    /// Queue `tween` for the multiplex. Returns false if it no longer exists.
    pub fn spawn(&self, tween: impl Tween + 'static) -> bool {
        match self.queue.upgrade() {
            Some(queue) => {
                queue.borrow_mut().push(Box::new(tween));
                true
            }
            None => false,
        }
    }
}

impl Multiplex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawner(&self) -> Spawner {
        Spawner {
            queue: Rc::downgrade(&self.spawned),
        }
    }

    fn absorb_spawned(&mut self) {
        let mut queue = self.spawned.borrow_mut();
        if queue.is_empty() {
            return;
        }
        log::trace!("multiplex: absorbing {} spawned children", queue.len());
        for tween in queue.drain(..) {
            self.children.push_boxed(tween);
        }
    }
}

impl std::fmt::Debug for Multiplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multiplex")
            .field("children", &self.children)
            .field("pending", &self.spawned.borrow().len())
            .finish()
    }
}

impl Composite for Multiplex {
    fn children(&self) -> &TweenCollection {
        &self.children
    }

    fn children_mut(&mut self) -> &mut TweenCollection {
        &mut self.children
    }
}

impl Tween for Multiplex {
    /// Overflow is the minimum over all children: the multiplex is only past
    /// a point in time once every child is.
    fn update(&mut self, dt: f32) -> f32 {
        let dt = sanitize_dt(dt);
        self.absorb_spawned();
        if self.children.is_empty() {
            return dt;
        }

        let mut overflow = dt;
        // Index-based: children spawned mid-traversal join this same pass.
        let mut i = 0;
        while i < self.children.len() {
            if let Some(child) = self.children.get_mut(i) {
                overflow = overflow.min(child.update(dt));
            }
            self.absorb_spawned();
            i += 1;
        }
        overflow
    }

    fn is_done(&self) -> bool {
        self.spawned.borrow().is_empty() && self.children.iter().all(|c| c.is_done())
    }

    fn reset(&mut self) {
        self.absorb_spawned();
        self.children.for_each_mut(|c| c.reset());
    }

    /// Parallel children need no skip-ahead of their own: reset everything
    /// and play all of them forward by `time` together.
    fn jump_to(&mut self, time: f32) {
        self.reset();
        self.update(time);
    }

    fn skip_to_end(&mut self) {
        self.absorb_spawned();
        self.children.for_each_mut(|c| c.skip_to_end());
    }

    /// Longest known child duration; unknown children don't participate.
    fn total_duration(&self) -> Duration {
        self.children.max_known()
    }
}
