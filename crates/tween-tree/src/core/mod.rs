pub mod duration;
pub mod easing;
pub mod error;
pub mod node;
pub mod time;
#[cfg(test)]
pub(crate) mod rng;

pub use duration::Duration;
pub use easing::Ease;
pub use error::TweenError;
pub use node::{BoxedTween, Tween};
