//! Leaf primitives: nodes with no children of their own.

pub mod callback;
pub mod dynamic;
pub mod empty;
pub mod value;
pub mod wait;

pub use callback::Callback;
pub use dynamic::Dynamic;
pub use empty::Empty;
pub use value::{ValueTween, ValueTweenBuilder};
pub use wait::{WaitSeconds, WaitUntil};
