//! Composite nodes: ordered (`Sequence`) and parallel (`Multiplex`).

pub mod collection;
pub mod multiplex;
pub mod sequence;

pub use collection::{Composite, TweenCollection};
pub use multiplex::{Multiplex, Spawner};
pub use sequence::Sequence;
