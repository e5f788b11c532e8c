//! Ordered child storage shared by [`Sequence`](super::Sequence) and
//! [`Multiplex`](super::Multiplex), plus the fluent building surface both
//! expose through [`Composite`].

use crate::core::{BoxedTween, Duration, Tween};
use crate::leaves::{Callback, WaitSeconds, WaitUntil};

/// Insertion-ordered list of child nodes.
///
/// Order is playback order for sequences and the tie-break order for
/// duration aggregation in both composites.
#[derive(Default)]
pub struct TweenCollection {
    children: Vec<BoxedTween>,
}

impl TweenCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tween: impl Tween + 'static) {
        self.children.push(Box::new(tween));
    }

    pub fn push_boxed(&mut self, tween: BoxedTween) {
        self.children.push(tween);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Tween> {
        self.children.get(index).map(|c| &**c)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Tween + 'static)> {
        self.children.get_mut(index).map(|c| &mut **c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Tween> {
        self.children.iter().map(|c| &**c as &dyn Tween)
    }

    /// Apply `action` to every child in order.
    pub fn for_each_mut(&mut self, mut action: impl FnMut(&mut dyn Tween)) {
        for child in self.children.iter_mut() {
            action(&mut **child);
        }
    }

    /// Number of children whose known duration is strictly positive, i.e.
    /// the ones that take visible time.
    pub fn count_with_duration(&self) -> usize {
        self.iter()
            .filter(|c| c.total_duration() > 0.0)
            .count()
    }

    /// Sum of known child durations; unknown children are skipped.
    pub fn sum_known(&self) -> Duration {
        let (duration, current_time) = self
            .iter()
            .filter_map(|c| match c.total_duration() {
                Duration::Known {
                    duration,
                    current_time,
                } => Some((duration, current_time)),
                Duration::Unknown => None,
            })
            .fold((0.0, 0.0), |(d, t), (cd, ct)| (d + cd, t + ct));
        Duration::known(duration, current_time)
    }

    /// Longest known child duration; unknown children are skipped.
    pub fn max_known(&self) -> Duration {
        let (duration, current_time) = self
            .iter()
            .filter_map(|c| match c.total_duration() {
                Duration::Known {
                    duration,
                    current_time,
                } => Some((duration, current_time)),
                Duration::Unknown => None,
            })
            .fold((0.0f32, 0.0f32), |(d, t), (cd, ct)| (d.max(cd), t.max(ct)));
        Duration::known(duration, current_time)
    }
}

impl std::fmt::Debug for TweenCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenCollection")
            .field("len", &self.len())
            .finish()
    }
}

/// Fluent construction shared by the composite nodes.
pub trait Composite: Sized {
    fn children(&self) -> &TweenCollection;

    fn children_mut(&mut self) -> &mut TweenCollection;

    /// Append a child in place.
    fn add(&mut self, tween: impl Tween + 'static) -> &mut Self {
        self.children_mut().push(tween);
        self
    }

    fn add_boxed(&mut self, tween: BoxedTween) -> &mut Self {
        self.children_mut().push_boxed(tween);
        self
    }

    /// Append a child, builder style.
    fn with(mut self, tween: impl Tween + 'static) -> Self {
        self.add(tween);
        self
    }

    fn wait(self, seconds: f32) -> Self {
        self.with(WaitSeconds::new(seconds))
    }

    fn wait_until(self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.with(WaitUntil::new(predicate))
    }

    fn call(self, action: impl FnMut() + 'static) -> Self {
        self.with(Callback::new(action))
    }

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// See [`TweenCollection::count_with_duration`].
    fn count_with_duration(&self) -> usize {
        self.children().count_with_duration()
    }
}
