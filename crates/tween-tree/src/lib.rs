//! Composable tween trees.
//!
//! Build a tree out of leaves ([`ValueTween`], [`WaitSeconds`], [`WaitUntil`],
//! [`Callback`], [`Empty`], [`Dynamic`]) and composites ([`Sequence`],
//! [`Multiplex`]), then call [`Tween::update`] on the root once per frame.
//! Time a node cannot use is returned as overflow and handed on, so playback
//! stays accurate across node boundaries. [`Tween::jump_to`] seeks to any
//! absolute time.
//!
//! Everything here is single-threaded and synchronous.

pub mod composites;
pub mod core;
pub mod extensions;
pub mod leaves;
pub mod tweenable;

pub use crate::composites::{Composite, Multiplex, Sequence, Spawner, TweenCollection};
pub use crate::core::{BoxedTween, Duration, Ease, Tween, TweenError};
pub use crate::leaves::{Callback, Dynamic, Empty, ValueTween, ValueTweenBuilder, WaitSeconds, WaitUntil};
pub use crate::tweenable::{Lerp, LerpFn, ListenerId, Tweenable};

// Extensions — host-side conveniences
pub use crate::extensions::{TweenId, TweenProfile, TweenRunner, TweenSettings};
