// core/easing.rs
//
// Pure easing curves that bias interpolation progress.
// Inputs are not clamped: callers near the boundaries may pass slightly
// out-of-range values and get the curve's natural continuation back.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized progress.
///
/// "SlowFast" starts gently and accelerates, "FastSlow" is the mirror image.
/// The "SlowFastSlow" variants are pulses built from two half-curves: they rise
/// from 0 to 1 over the first half and fall back to 0 over the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ease {
    /// Constant velocity.
    #[default]
    Linear,
    SineSlowFast,
    SineFastSlow,
    SineSlowFastSlow,
    QuadSlowFast,
    QuadFastSlow,
    QuadSlowFastSlow,
    CubicSlowFast,
    CubicFastSlow,
    CubicSlowFastSlow,
}

impl Ease {
    /// Remap progress `t`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,

            // Sine
            Ease::SineSlowFast => 1.0 - (t * PI / 2.0).cos(),
            Ease::SineFastSlow => (t * PI / 2.0).sin(),
            Ease::SineSlowFastSlow => pulse(t, sine_in_out),

            // Quadratic
            Ease::QuadSlowFast => t * t,
            Ease::QuadFastSlow => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::QuadSlowFastSlow => pulse(t, quad_in_out),

            // Cubic
            Ease::CubicSlowFast => t * t * t,
            Ease::CubicFastSlow => 1.0 - (1.0 - t).powi(3),
            Ease::CubicSlowFastSlow => pulse(t, cubic_in_out),
        }
    }

    /// All curves, in declaration order.
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::SineSlowFast,
        Ease::SineFastSlow,
        Ease::SineSlowFastSlow,
        Ease::QuadSlowFast,
        Ease::QuadFastSlow,
        Ease::QuadSlowFastSlow,
        Ease::CubicSlowFast,
        Ease::CubicFastSlow,
        Ease::CubicSlowFastSlow,
    ];

    /// Whether this curve returns to 0 at `t = 1` instead of ending at 1.
    pub fn is_pulse(self) -> bool {
        matches!(
            self,
            Ease::SineSlowFastSlow | Ease::QuadSlowFastSlow | Ease::CubicSlowFastSlow
        )
    }
}

/// Rise over `[0, 0.5]`, fall over `[0.5, 1]`, each half a full in-out curve.
#[inline]
fn pulse(t: f32, half: fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        half(t * 2.0)
    } else {
        half(2.0 - t * 2.0)
    }
}

#[inline]
fn sine_in_out(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

#[inline]
fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[inline]
fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
