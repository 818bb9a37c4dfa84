//! Trigonometric and inverse trigonometric approximations.
//!
//! `sin` and `cos` share a single core: a parabola through the zeros and peaks of
//! the sine wave, refined by a weighted blend with its own square. `tan`, `asin`
//! and `acos` are built on top of that core; `atan2` uses an independent rational
//! fit on `[0, 1]` and reconstructs the quadrant from the signs of its inputs.

use crate::constants::{FRAC_PI_2, FRAC_PI_4, NEAR_ZERO, PI, TAN_SENTINEL, TWO_PI};

/// Linear coefficient of the sine parabola, `4/π`.
const B: f32 = 4.0 / PI;
/// Quadratic coefficient of the sine parabola, `4/π²`.
const C: f32 = 4.0 / (PI * PI);
/// Blend weight between the parabola and its square.
///
/// 0.225 minimizes the absolute error (0.218 would minimize the relative error).
const P: f32 = 0.225;

/// 64π, i.e. 32 whole turns. Beyond this magnitude the angle is folded with a
/// remainder before the shift loop.
const LOOP_REDUCTION_LIMIT: f32 = 64.0 * PI;

/// Newton-Raphson corrections applied by [`asin`].
const ASIN_ITERATIONS: usize = 3;

/// Slope of the correction term in the `atan` fit on `[0, 1]`.
const ATAN_CORRECTION: f32 = 0.273;

/// Reduces `theta` into `[-π, π]` by whole turns.
///
/// Angles up to 64π in magnitude are shifted by ±2π until they land in range.
/// Larger angles are first folded with `fmodf`, which bounds the work for any
/// finite input. Non-finite input yields NaN.
#[inline]
pub fn reduce_angle(theta: f32) -> f32 {
    let mut theta = if theta.abs() > LOOP_REDUCTION_LIMIT || !theta.is_finite() {
        libm::fmodf(theta, TWO_PI)
    } else {
        theta
    };

    while theta < -PI {
        theta += TWO_PI;
    }
    while theta > PI {
        theta -= TWO_PI;
    }
    theta
}

/// Sine core for `theta ∈ [-π, π]`.
#[inline(always)]
fn sin_core(theta: f32) -> f32 {
    // y = Bθ ± Cθ², exact at 0, ±π/2 and ±π
    let y = if theta < 0.0 {
        theta * B + C * theta * theta
    } else {
        theta * B - C * theta * theta
    };

    // y' = P·(y·|y| − y) + y
    if y < 0.0 {
        P * (y * -y - y) + y
    } else {
        P * (y * y - y) + y
    }
}

/// Fast sine.
///
/// Maximum absolute error is about 1e-3 over any period (bounded by 1e-2).
///
/// # Example
///
/// ```
/// use fast_math_rs::sin;
///
/// assert_eq!(sin(0.0), 0.0);
/// assert!((sin(1.0) - 0.841_471).abs() < 0.01);
/// ```
#[inline]
pub fn sin(theta: f32) -> f32 {
    sin_core(reduce_angle(theta))
}

/// Fast cosine, computed as the sine core shifted by a quarter turn.
#[inline]
pub fn cos(theta: f32) -> f32 {
    let mut theta = reduce_angle(theta) + FRAC_PI_2;
    if theta > PI {
        theta -= TWO_PI;
    }
    sin_core(theta)
}

/// Fast tangent as `sin / cos`.
///
/// When `|cos(θ)| < 1e-7` the result is clamped to `±1e7` (positive when the
/// cosine is non-negative) rather than dividing towards infinity.
///
/// # Example
///
/// ```
/// use fast_math_rs::{constants::TAN_SENTINEL, tan};
///
/// assert!((tan(core::f32::consts::FRAC_PI_4) - 1.0).abs() < 0.01);
/// assert_eq!(tan(core::f32::consts::FRAC_PI_2), TAN_SENTINEL);
/// ```
#[inline]
pub fn tan(theta: f32) -> f32 {
    let sin_val = sin(theta);
    let cos_val = cos(theta);

    if cos_val.abs() < NEAR_ZERO {
        return if cos_val >= 0.0 { TAN_SENTINEL } else { -TAN_SENTINEL };
    }

    sin_val / cos_val
}

/// Fast arc sine.
///
/// Inputs at or beyond ±1 clamp to ±π/2 and inputs with `|x| < 1e-7` return 0.
/// Everything else starts from the linear guess `x·π/2` and is refined with
/// three Newton-Raphson steps on `sin(y) − x`, stopping early if the
/// derivative `cos(y)` vanishes.
pub fn asin(x: f32) -> f32 {
    if x >= 1.0 {
        return FRAC_PI_2;
    }
    if x <= -1.0 {
        return -FRAC_PI_2;
    }
    if x.abs() < NEAR_ZERO {
        return 0.0;
    }

    let mut y = x * FRAC_PI_2;
    for _ in 0..ASIN_ITERATIONS {
        let sin_y = sin(y);
        let cos_y = cos(y);
        if cos_y.abs() < NEAR_ZERO {
            break;
        }
        y -= (sin_y - x) / cos_y;
    }
    y
}

/// Fast arc cosine, `π/2 − asin(x)`.
#[inline]
pub fn acos(x: f32) -> f32 {
    FRAC_PI_2 - asin(x)
}

/// Fast two-argument arc tangent. Takes `(y, x)` like `libm::atan2f`.
///
/// Returns 0 when both inputs are within 1e-7 of zero and `±π/2` (by the sign
/// of `y`) when only `x` is. The result lies in `(-π, π]`.
///
/// # Example
///
/// ```
/// use fast_math_rs::atan2;
///
/// assert!((atan2(1.0, 1.0) - core::f32::consts::FRAC_PI_4).abs() < 0.01);
/// assert_eq!(atan2(0.0, 0.0), 0.0);
/// ```
pub fn atan2(y: f32, x: f32) -> f32 {
    if x.abs() < NEAR_ZERO && y.abs() < NEAR_ZERO {
        return 0.0;
    }
    if x.abs() < NEAR_ZERO {
        return if y >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }

    let abs_y = y.abs();
    let abs_x = x.abs();

    // atan(a) ≈ a·(π/4 + 0.273·(1 − a)) for a ∈ [0, 1]
    let angle = if abs_x >= abs_y {
        let a = abs_y / abs_x;
        a * (FRAC_PI_4 + ATAN_CORRECTION * (1.0 - a))
    } else {
        let a = abs_x / abs_y;
        FRAC_PI_2 - a * (FRAC_PI_4 + ATAN_CORRECTION * (1.0 - a))
    };

    if x < 0.0 {
        if y >= 0.0 { PI - angle } else { -PI + angle }
    } else if y < 0.0 {
        -angle
    } else {
        angle
    }
}
