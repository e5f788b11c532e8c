use thiserror::Error;

/// Errors raised by the tween engine.
///
/// Most of these are contract violations: they surface either as an `Err`
/// from a fallible constructor/accessor or as a panic from the infallible one.
#[derive(Debug, Error)]
pub enum TweenError {
    /// An `Unknown` duration was asked for its length or elapsed time.
    #[error("duration is unknown and cannot be queried")]
    UnknownDurationQueried,

    /// A value tween was built without a destination value.
    #[error("value tween has no target value")]
    MissingTarget,

    /// A value tween was built with a negative or NaN duration.
    #[error("invalid tween duration: {0}")]
    InvalidDuration(f32),

    /// Tween settings could not be parsed.
    #[error("invalid tween settings: {0}")]
    Settings(#[from] serde_json::Error),
}
