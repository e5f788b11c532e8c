//! The tween node contract shared by leaves and composites.

use super::duration::Duration;

/// A node in a tween tree.
///
/// `update` is the only forward driver; it returns the overflow, i.e. the part
/// of `dt` the node could not use because it finished early. Overflow is never
/// larger than `dt`, and equals `dt` when the node was already done.
pub trait Tween {
    /// Advance by `dt` seconds and return the unconsumed remainder.
    fn update(&mut self, dt: f32) -> f32;

    /// Whether the node has nothing left to play.
    fn is_done(&self) -> bool;

    /// Rewind to the freshly constructed state.
    fn reset(&mut self);

    /// Reset, then replay to the absolute `time` in one step.
    fn jump_to(&mut self, time: f32) {
        self.reset();
        self.update(time);
    }

    /// Force the node into its completed state.
    fn skip_to_end(&mut self);

    fn total_duration(&self) -> Duration;
}

/// Owned, type-erased node as stored by composites.
pub type BoxedTween = Box<dyn Tween>;

impl<T: Tween + ?Sized> Tween for Box<T> {
    fn update(&mut self, dt: f32) -> f32 {
        (**self).update(dt)
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn jump_to(&mut self, time: f32) {
        (**self).jump_to(time)
    }

    fn skip_to_end(&mut self) {
        (**self).skip_to_end()
    }

    fn total_duration(&self) -> Duration {
        (**self).total_duration()
    }
}
