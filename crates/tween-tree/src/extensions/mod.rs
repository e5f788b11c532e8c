// extensions/mod.rs
//
// Optional helpers layered on the core node types.
// The core never depends on these — hosts opt in.

pub mod runner;
pub mod settings;

pub use runner::{TweenId, TweenRunner};
pub use settings::{TweenProfile, TweenSettings};
