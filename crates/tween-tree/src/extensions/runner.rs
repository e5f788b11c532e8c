// extensions/runner.rs
//
// Host-side driver for many independent tween trees.
// Completely decoupled from how trees are built: the runner only ticks roots.
//
// Usage:
//   let mut runner = TweenRunner::new();
//   let id = runner.add(Sequence::new().with(alpha.tween_to(1.0, 0.3, Ease::Linear)));
//   runner.tick(dt);  // once per frame

use std::collections::HashMap;

use crate::core::{BoxedTween, Tween};

/// Handle to a tree for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

struct Entry {
    tween: BoxedTween,
    /// Paused trees are skipped by `tick`.
    playing: bool,
}

/// Owns independent tween trees and advances them each frame.
///
/// Trees share nothing but whatever bindings they happen to drive; the order
/// in which they are ticked is unspecified.
#[derive(Default)]
pub struct TweenRunner {
    trees: HashMap<TweenId, Entry>,
    next_id: u32,
}

impl TweenRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tree. Returns a handle for later control.
    pub fn add(&mut self, tween: impl Tween + 'static) -> TweenId {
        self.add_boxed(Box::new(tween))
    }

    pub fn add_boxed(&mut self, tween: BoxedTween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.trees.insert(
            id,
            Entry {
                tween,
                playing: true,
            },
        );
        id
    }

    /// Remove a tree by handle, returning it.
    pub fn remove(&mut self, id: TweenId) -> Option<BoxedTween> {
        self.trees.remove(&id).map(|e| e.tween)
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.trees.contains_key(&id)
    }

    pub fn pause(&mut self, id: TweenId) {
        if let Some(entry) = self.trees.get_mut(&id) {
            entry.playing = false;
        }
    }

    pub fn resume(&mut self, id: TweenId) {
        if let Some(entry) = self.trees.get_mut(&id) {
            entry.playing = true;
        }
    }

    pub fn is_playing(&self, id: TweenId) -> bool {
        self.trees.get(&id).is_some_and(|e| e.playing)
    }

    pub fn pause_all(&mut self) {
        for entry in self.trees.values_mut() {
            entry.playing = false;
        }
    }

    pub fn resume_all(&mut self) {
        for entry in self.trees.values_mut() {
            entry.playing = true;
        }
    }

    pub fn get(&self, id: TweenId) -> Option<&dyn Tween> {
        self.trees.get(&id).map(|e| &*e.tween as &dyn Tween)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut (dyn Tween + 'static)> {
        self.trees.get_mut(&id).map(|e| &mut *e.tween)
    }

    /// Seek a tree. Returns false for unknown handles.
    pub fn jump_to(&mut self, id: TweenId, time: f32) -> bool {
        match self.trees.get_mut(&id) {
            Some(entry) => {
                entry.tween.jump_to(time);
                true
            }
            None => false,
        }
    }

    /// Force a tree to its end state. It is removed on the next tick.
    pub fn skip_to_end(&mut self, id: TweenId) -> bool {
        match self.trees.get_mut(&id) {
            Some(entry) => {
                entry.tween.skip_to_end();
                true
            }
            None => false,
        }
    }

    /// Advance every playing tree and drop the ones that finished.
    /// Returns the number of trees that finished this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut finished = Vec::new();

        for (&id, entry) in self.trees.iter_mut() {
            if !entry.playing {
                continue;
            }
            entry.tween.update(dt);
            if entry.tween.is_done() {
                finished.push(id);
            }
        }

        for id in &finished {
            log::debug!("tween runner: tree {:?} finished", id);
            self.trees.remove(id);
        }
        finished.len()
    }

    /// Number of trees still owned.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn clear(&mut self) {
        self.trees.clear();
    }
}

impl std::fmt::Debug for TweenRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenRunner")
            .field("trees", &self.trees.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
