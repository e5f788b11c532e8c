//! Sequential composite: children play one after another.

use crate::core::time::sanitize_dt;
use crate::core::{Duration, Tween};

use super::collection::{Composite, TweenCollection};

/// Plays its children in insertion order, feeding each child's overflow to
/// the next one within the same update. Several instantaneous children can
/// therefore all complete in a single call.
#[derive(Debug, Default)]
pub struct Sequence {
    children: TweenCollection,
    /// Play-head: index of the child currently playing.
    index: usize,
    looping: bool,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: restart from the first child whenever the last one finishes.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Index of the child the play-head points at; equals `len()` once past the end.
    pub fn current_index(&self) -> usize {
        self.index
    }

    fn past_end(&self) -> bool {
        self.index >= self.children.len()
    }
}

impl Composite for Sequence {
    fn children(&self) -> &TweenCollection {
        &self.children
    }

    fn children_mut(&mut self) -> &mut TweenCollection {
        &mut self.children
    }
}

impl Tween for Sequence {
    fn update(&mut self, dt: f32) -> f32 {
        let mut dt = sanitize_dt(dt);
        if self.children.is_empty() {
            return dt;
        }

        // dt remaining at the last loop restart, to detect a cycle that
        // consumed nothing (e.g. infinite dt).
        let mut last_wrap: Option<f32> = None;
        loop {
            if self.past_end() {
                if !self.looping || self.children.sum_known() <= 0.0 {
                    return dt;
                }
                if matches!(last_wrap, Some(prev) if dt >= prev) {
                    return 0.0;
                }
                last_wrap = Some(dt);
                log::trace!("sequence: restarting loop with {}s left", dt);
                self.reset();
                continue;
            }

            let Some(child) = self.children.get_mut(self.index) else {
                return dt;
            };
            let overflow = child.update(dt);
            if !child.is_done() {
                return overflow;
            }
            self.index += 1;
            log::trace!("sequence: advanced to child {} with {}s overflow", self.index, overflow);
            dt = overflow;
        }
    }

    fn is_done(&self) -> bool {
        self.past_end() && !self.looping
    }

    fn reset(&mut self) {
        self.children.for_each_mut(|c| c.reset());
        self.index = 0;
    }

    /// Seek by replaying from the start. Children whose known duration is
    /// fully covered are advanced by exactly that duration in one step; the
    /// child where `time` lands (or any child of unknown length) gets the
    /// remaining time, and the walk continues only if that child finished.
    ///
    /// A covered child that rounding left short of done (a nested sequence
    /// sums its durations differently than it consumes them) is topped up
    /// with whatever time is left.
    ///
    /// Seeking to exactly the total duration can leave the last child a hair
    /// short of done, unlike playing through naturally.
    fn jump_to(&mut self, time: f32) {
        self.reset();
        let mut remaining = sanitize_dt(time);

        while let Some(child) = self.children.get_mut(self.index) {
            match child.total_duration().known_duration() {
                Some(duration) if remaining >= duration => {
                    child.update(duration);
                    remaining -= duration;
                    if !child.is_done() && remaining > 0.0 {
                        remaining = child.update(remaining);
                    }
                }
                _ => {
                    remaining = child.update(remaining);
                }
            }
            if !child.is_done() {
                return;
            }
            self.index += 1;
        }

        if self.looping && remaining > 0.0 {
            self.update(remaining);
        }
    }

    fn skip_to_end(&mut self) {
        self.children.for_each_mut(|c| c.skip_to_end());
        self.index = self.children.len();
    }

    /// Sum of the children's known durations. Children of unknown length are
    /// left out, so the total understates a sequence that contains them.
    fn total_duration(&self) -> Duration {
        self.children.sum_known()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ease;
    use crate::leaves::{Callback, Empty, WaitSeconds};
    use crate::tweenable::Tweenable;
    use std::cell::Cell;
    use std::rc::Rc;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn empty_sequence_passes_time_through() {
        let mut s = Sequence::new();
        assert_eq!(s.update(0.4), 0.4);
        assert!(s.is_done());
    }

    #[test]
    fn durations_add_up() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .with(v.tween_to(1.0, 0.5, Ease::Linear))
            .with(v.tween_to(2.0, 1.0, Ease::Linear))
            .with(v.tween_to(3.0, 1.5, Ease::Linear));
        assert_eq!(s.total_duration().duration(), 3.0);

        let overflow = s.update(3.0);
        assert_eq!(overflow, 0.0);
        assert!(s.is_done());
        assert_eq!(v.value(), 3.0);
        assert_eq!(s.total_duration(), Duration::known(3.0, 3.0));
    }

    #[test]
    fn overflow_carries_into_next_child() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .with(v.tween_to(10.0, 1.0, Ease::Linear))
            .with(v.tween_to(20.0, 1.0, Ease::Linear));
        s.update(1.5);
        assert!(approx(v.value(), 15.0));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn consecutive_callbacks_fire_in_one_update() {
        let fired = Rc::new(Cell::new(0));
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new().wait(1.0);
        for _ in 0..3 {
            let f = Rc::clone(&fired);
            s.add(Callback::new(move || f.set(f.get() + 1)));
        }
        s.add(v.tween_to(10.0, 1.0, Ease::Linear));

        assert_eq!(s.update(1.5), 0.0);
        assert_eq!(fired.get(), 3);
        assert!(approx(v.value(), 5.0));
    }

    #[test]
    fn finished_sequence_returns_full_dt() {
        let mut s = Sequence::new().wait(0.5);
        let overflow = s.update(0.75);
        assert!(approx(overflow, 0.25));
        assert!(s.is_done());
        assert_eq!(s.update(0.3), 0.3);
    }

    #[test]
    fn looping_restarts_with_overflow() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .with(v.callback_set_to(0.0))
            .with(v.tween_to(10.0, 1.0, Ease::Linear))
            .looping(true);

        assert_eq!(s.update(2.5), 0.0);
        assert!(approx(v.value(), 5.0));
        assert!(!s.is_done());
    }

    #[test]
    fn looping_without_timed_children_passes_through() {
        let mut s = Sequence::new().with(Empty).looping(true);
        assert_eq!(s.update(0.2), 0.2);
        assert!(!s.is_done());
    }

    #[test]
    fn looping_with_infinite_dt_does_not_spin() {
        let mut s = Sequence::new().wait(1.0).looping(true);
        assert_eq!(s.update(f32::INFINITY), 0.0);
    }

    #[test]
    fn waits_on_predicate_then_continues() {
        let open = Rc::new(Cell::new(false));
        let gate = Rc::clone(&open);
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .wait_until(move || gate.get())
            .with(v.tween_to(4.0, 1.0, Ease::Linear));

        s.update(10.0);
        assert_eq!(v.value(), 0.0);
        open.set(true);
        s.update(0.5);
        assert!(approx(v.value(), 2.0));
    }

    #[test]
    fn reset_rewinds_play_head() {
        let mut s = Sequence::new().wait(1.0).wait(1.0);
        s.update(1.5);
        assert_eq!(s.current_index(), 1);
        s.reset();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.total_duration(), Duration::known(2.0, 0.0));
    }

    #[test]
    fn skip_to_end_completes_everything() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .with(v.tween_to(1.0, 1.0, Ease::Linear))
            .with(v.tween_to(9.0, 1.0, Ease::Linear));
        s.skip_to_end();
        assert!(s.is_done());
        assert_eq!(v.value(), 9.0);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn jump_to_is_random_access() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .with(v.callback_set_to(0.0))
            .with(v.tween_to(10.0, 1.0, Ease::Linear))
            .with(v.tween_to(0.0, 1.0, Ease::Linear));

        s.jump_to(1.5);
        assert!(approx(v.value(), 5.0));
        assert_eq!(s.current_index(), 2);
        s.jump_to(0.25);
        assert!(approx(v.value(), 2.5));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn jump_to_stops_at_unknown_child() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .wait(1.0)
            .wait_until(|| false)
            .with(v.tween_to(10.0, 1.0, Ease::Linear));
        s.jump_to(5.0);
        assert_eq!(s.current_index(), 1);
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn jump_to_on_looping_sequence_wraps() {
        let v = Tweenable::new(0.0f32);
        let mut s = Sequence::new()
            .with(v.callback_set_to(0.0))
            .with(v.tween_to(10.0, 1.0, Ease::Linear))
            .looping(true);
        s.jump_to(3.25);
        assert!(approx(v.value(), 2.5));
    }

    #[test]
    fn zero_wait_in_sequence_completes_instantly() {
        let mut s = Sequence::new().with(WaitSeconds::new(0.0));
        assert_eq!(s.update(0.0), 0.0);
        assert!(s.is_done());
    }
}
