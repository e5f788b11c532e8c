//! Interpolation rules for the value types tweens can drive.

/// Linear interpolation between two values of the same type.
///
/// `percent` is normally in `[0, 1]` but eased progress may leave that
/// range slightly; implementations extrapolate rather than clamp.
pub trait Lerp: Sized {
    fn lerp(start: &Self, target: &Self, percent: f32) -> Self;
}

/// Replace NaN with zero and infinities with the finite extremes.
#[inline]
pub fn sanitize_f32(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else if v == f32::INFINITY {
        f32::MAX
    } else if v == f32::NEG_INFINITY {
        f32::MIN
    } else {
        v
    }
}

#[inline]
pub fn sanitize_f64(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else if v == f64::INFINITY {
        f64::MAX
    } else if v == f64::NEG_INFINITY {
        f64::MIN
    } else {
        v
    }
}

/// Sanitized lerp. Weighted form keeps the endpoints exact and cannot
/// overflow when the endpoints sit at opposite extremes.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    let a = sanitize_f32(a);
    let b = sanitize_f32(b);
    let t = if t.is_nan() { 0.0 } else { t };
    sanitize_f32(a * (1.0 - t) + b * t)
}

#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f32) -> f64 {
    let a = sanitize_f64(a);
    let b = sanitize_f64(b);
    let t = if t.is_nan() { 0.0 } else { t as f64 };
    sanitize_f64(a * (1.0 - t) + b * t)
}

impl Lerp for f32 {
    fn lerp(start: &Self, target: &Self, percent: f32) -> Self {
        lerp_f32(*start, *target, percent)
    }
}

impl Lerp for f64 {
    fn lerp(start: &Self, target: &Self, percent: f32) -> Self {
        lerp_f64(*start, *target, percent)
    }
}

impl Lerp for i32 {
    fn lerp(start: &Self, target: &Self, percent: f32) -> Self {
        let v = lerp_f64(*start as f64, *target as f64, percent).round();
        // Float-to-int `as` saturates at the type bounds.
        v as i32
    }
}

#[cfg(feature = "vectors")]
mod vectors {
    use super::{lerp_f32, Lerp};
    use glam::{Vec2, Vec3, Vec4};

    impl Lerp for Vec2 {
        fn lerp(start: &Self, target: &Self, percent: f32) -> Self {
            Vec2::new(
                lerp_f32(start.x, target.x, percent),
                lerp_f32(start.y, target.y, percent),
            )
        }
    }

    impl Lerp for Vec3 {
        fn lerp(start: &Self, target: &Self, percent: f32) -> Self {
            Vec3::new(
                lerp_f32(start.x, target.x, percent),
                lerp_f32(start.y, target.y, percent),
                lerp_f32(start.z, target.z, percent),
            )
        }
    }

    /// Also used for RGBA colors.
    impl Lerp for Vec4 {
        fn lerp(start: &Self, target: &Self, percent: f32) -> Self {
            Vec4::new(
                lerp_f32(start.x, target.x, percent),
                lerp_f32(start.y, target.y, percent),
                lerp_f32(start.z, target.z, percent),
                lerp_f32(start.w, target.w, percent),
            )
        }
    }
}
