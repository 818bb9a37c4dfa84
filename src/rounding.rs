//! Remainder and integer rounding.
//!
//! All of these work by truncating through `i32`. `ceil`, `floor` and `round`
//! only truncate below 2²³, where an `f32` can still carry a fraction; anything
//! larger (and any non-finite input) is already integral and comes back as is.
//! `fmod` leaves the fast path whenever the precision of the quotient becomes
//! doubtful.

/// Operand and quotient magnitude beyond which `fmod` defers to `libm::fmodf`.
const FMOD_SAFE_LIMIT: f32 = 25.0;

/// 2²³. Every `f32` at least this large in magnitude is an integer.
const INTEGRAL_LIMIT: f32 = 8_388_608.0;

/// True when `x` may have a fractional part and fits the `i32` truncation.
#[inline(always)]
fn has_fraction(x: f32) -> bool {
    x.abs() < INTEGRAL_LIMIT
}

/// Floating-point remainder with the sign of the dividend.
///
/// - `divisor == 0` returns `0`.
/// - `|dividend| < |divisor|` returns `dividend` unchanged.
/// - If either operand, or the quotient, exceeds 25 in magnitude the result comes
///   from `libm::fmodf`.
/// - Otherwise `dividend − trunc(dividend / divisor) · divisor`.
///
/// # Example
///
/// ```
/// use fast_math_rs::fmod;
///
/// assert_eq!(fmod(7.0, 3.0), 1.0);
/// assert_eq!(fmod(-7.0, 3.0), -1.0);
/// assert_eq!(fmod(7.0, 0.0), 0.0);
/// ```
pub fn fmod(dividend: f32, divisor: f32) -> f32 {
    if divisor == 0.0 {
        return 0.0;
    }
    if dividend.abs() < divisor.abs() {
        return dividend;
    }

    if dividend.abs() > FMOD_SAFE_LIMIT || divisor.abs() > FMOD_SAFE_LIMIT {
        return libm::fmodf(dividend, divisor);
    }

    let quotient = dividend / divisor;
    if quotient.abs() > FMOD_SAFE_LIMIT {
        return libm::fmodf(dividend, divisor);
    }

    dividend - (quotient as i32) as f32 * divisor
}

/// Smallest integer not less than `x`.
///
/// # Example
///
/// ```
/// use fast_math_rs::ceil;
///
/// assert_eq!(ceil(2.3), 3.0);
/// assert_eq!(ceil(-2.7), -2.0);
/// ```
#[inline]
pub fn ceil(x: f32) -> f32 {
    if !has_fraction(x) {
        return x;
    }

    let int_x = x as i32;
    if x >= 0.0 && x > int_x as f32 {
        (int_x + 1) as f32
    } else {
        int_x as f32
    }
}

/// Largest integer not greater than `x`.
///
/// # Example
///
/// ```
/// use fast_math_rs::floor;
///
/// assert_eq!(floor(2.7), 2.0);
/// assert_eq!(floor(-2.3), -3.0);
/// ```
#[inline]
pub fn floor(x: f32) -> f32 {
    if !has_fraction(x) {
        return x;
    }

    let int_x = x as i32;
    if x < 0.0 && x < int_x as f32 {
        (int_x - 1) as f32
    } else {
        int_x as f32
    }
}

/// Rounds to the nearest integer, halves away from zero.
///
/// This is `floor(x + 0.5)` for non-negative `x` and `ceil(x − 0.5)` otherwise,
/// so `round(2.5) == 3` and `round(-2.5) == -3` (matching `libm::roundf`, not
/// banker's rounding).
///
/// # Example
///
/// ```
/// use fast_math_rs::round;
///
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(1.0e10), 1.0e10);
/// ```
#[inline]
pub fn round(x: f32) -> f32 {
    if !has_fraction(x) {
        return x;
    }

    if x >= 0.0 { floor(x + 0.5) } else { ceil(x - 0.5) }
}
