//! Angle arithmetic for 2D poses and ray bearings.

use std::f32::consts::{PI, TAU};

/// Normalize angle to [-π, π].
///
/// # Example
/// ```
/// use drishti_mcl::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-6);
/// assert!((normalize_angle(-3.0 * PI) - (-PI)).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}

/// Wrap angle to [0, 2π).
///
/// Ray bearings are wrapped into this interval before casting.
///
/// # Example
/// ```
/// use drishti_mcl::core::math::wrap_two_pi;
/// use std::f32::consts::PI;
///
/// assert!((wrap_two_pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-6);
/// ```
#[inline]
pub fn wrap_two_pi(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}
