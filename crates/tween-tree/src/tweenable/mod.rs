//! Value bindings that tweens read and write.
//!
//! A [`Tweenable`] is a thin, clonable accessor: it does not own the animated
//! object, it only knows how to get and set one value of it and how to
//! interpolate between two such values. Tweens hold clones of the handle.

pub mod lerp;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::core::{BoxedTween, Ease};
use crate::extensions::settings::TweenSettings;
use crate::leaves::{Callback, ValueTween};

pub use lerp::Lerp;

/// Interpolation function `(start, target, percent) -> value`.
pub type LerpFn<T> = fn(&T, &T, f32) -> T;

/// Handle returned by [`Tweenable::on_changed`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

enum Binding<T> {
    /// The tweenable stores the value itself.
    Owned(RefCell<T>),
    /// The value lives elsewhere; reach it through accessors.
    External {
        get: Box<dyn Fn() -> T>,
        set: Box<dyn Fn(T)>,
    },
}

struct Inner<T> {
    binding: Binding<T>,
    lerp: LerpFn<T>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn(&T)>)>>,
    next_listener: Cell<u64>,
}

/// A gettable/settable value plus its interpolation rule.
pub struct Tweenable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Tweenable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Lerp + Clone + 'static> Tweenable<T> {
    /// Own a value, initialized once.
    pub fn new(value: T) -> Self {
        Self::with_lerp(value, T::lerp)
    }

    /// Bind to a value owned elsewhere.
    pub fn bind(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self::bind_with_lerp(get, set, T::lerp)
    }
}

impl<T: Clone + 'static> Tweenable<T> {
    /// Own a value with a custom interpolation rule.
    pub fn with_lerp(value: T, lerp: LerpFn<T>) -> Self {
        Self::from_binding(Binding::Owned(RefCell::new(value)), lerp)
    }

    /// Bind to an external value with a custom interpolation rule.
    pub fn bind_with_lerp(
        get: impl Fn() -> T + 'static,
        set: impl Fn(T) + 'static,
        lerp: LerpFn<T>,
    ) -> Self {
        Self::from_binding(
            Binding::External {
                get: Box::new(get),
                set: Box::new(set),
            },
            lerp,
        )
    }

    fn from_binding(binding: Binding<T>, lerp: LerpFn<T>) -> Self {
        Self {
            inner: Rc::new(Inner {
                binding,
                lerp,
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Current value as seen through the binding.
    pub fn value(&self) -> T {
        match &self.inner.binding {
            Binding::Owned(cell) => cell.borrow().clone(),
            Binding::External { get, .. } => get(),
        }
    }

    /// Write through the binding, then notify every listener.
    pub fn set_value(&self, value: T) {
        match &self.inner.binding {
            Binding::Owned(cell) => {
                *cell.borrow_mut() = value.clone();
            }
            Binding::External { set, .. } => set(value.clone()),
        }
        self.notify(&value);
    }

    fn notify(&self, value: &T) {
        // Snapshot so listeners may subscribe or unsubscribe while being called.
        let listeners: Vec<Rc<dyn Fn(&T)>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    /// Interpolate with this binding's rule.
    pub fn lerp(&self, start: &T, target: &T, percent: f32) -> T {
        (self.inner.lerp)(start, target, percent)
    }

    /// Subscribe to every write, including writes made by tweens.
    pub fn on_changed(&self, listener: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        let listener: Rc<dyn Fn(&T)> = Rc::new(listener);
        self.inner.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Unsubscribe. Returns whether the listener was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Whether two handles refer to the same binding.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // -- Factories --

    /// Interpolate from the live value to `target` over `duration` seconds.
    pub fn tween_to(&self, target: T, duration: f32, ease: Ease) -> ValueTween<T> {
        ValueTween::new(self.clone(), target, duration, ease)
    }

    /// Zero-duration node that assigns `target` when reached.
    pub fn callback_set_to(&self, target: T) -> Callback {
        let this = self.clone();
        Callback::new(move || this.set_value(target.clone()))
    }

    /// Build a tween from data-driven settings, honoring the configured delay.
    pub fn tween(&self, target: T, settings: &TweenSettings) -> BoxedTween {
        settings.build(self.tween_to(target, settings.duration, settings.ease))
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Tweenable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner.binding {
            Binding::Owned(_) => "owned",
            Binding::External { .. } => "external",
        };
        f.debug_struct("Tweenable")
            .field("value", &self.value())
            .field("binding", &kind)
            .field("listeners", &self.listener_count())
            .finish()
    }
}
