//! Time sanitizing helpers shared by every node that accumulates time.
//!
//! The host promises `dt >= 0`, but a single NaN frame must not poison
//! the elapsed time of a whole tree.

/// Clamp a frame delta to a usable value: NaN and negatives become zero.
/// Positive infinity is kept; it simply finishes whatever it reaches.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        0.0
    } else {
        dt
    }
}

/// Clamp a configured duration: NaN and negatives become zero.
#[inline]
pub fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_nan() || duration < 0.0 {
        0.0
    } else {
        duration
    }
}
