//! Exponential and logarithm approximations.
//!
//! Both functions split their argument into a power of two, handled exactly
//! through the float's exponent field, and a small remainder handled by a short
//! polynomial:
//!
//! ```text
//! exp(x) = 2^n · exp(r),      n = round(x / ln 2),  r ∈ [−ln2/2, ln2/2]
//! log(x) = e · ln 2 + log(m), x = m · 2^e,          m ∈ [1, 2)
//! ```

use crate::bits;
use crate::constants::{LN_2, LOG_DOMAIN_SENTINEL, LOG2_E, LOG10_E, OVERFLOW_SENTINEL};

/// Above this `exp` saturates to [`OVERFLOW_SENTINEL`].
const EXP_OVERFLOW_LIMIT: f32 = 88.0;
/// Below this `exp` flushes to zero.
const EXP_UNDERFLOW_LIMIT: f32 = -87.0;

/// Fast natural exponential.
///
/// Returns `1e38` for `x > 88` and `0` for `x < −87`. Inside that window the
/// relative error stays below 1e-5 for moderate `x`.
///
/// # Example
///
/// ```
/// use fast_math_rs::exp;
///
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0) - core::f32::consts::E).abs() < 1e-3);
/// ```
pub fn exp(x: f32) -> f32 {
    if x > EXP_OVERFLOW_LIMIT {
        return OVERFLOW_SENTINEL;
    }
    if x < EXP_UNDERFLOW_LIMIT {
        return 0.0;
    }

    // x / ln2 split into the nearest integer n and a remainder in [-0.5, 0.5]
    let fx = x * LOG2_E;
    let n = (fx + if fx >= 0.0 { 0.5 } else { -0.5 }) as i32;
    let r = (fx - n as f32) * LN_2;

    // 5th order Maclaurin polynomial for exp(r)
    let r2 = r * r;
    let poly = 1.0 + r + 0.5 * r2 + r2 * r * (1.0 / 6.0 + r * (1.0 / 24.0 + r * (1.0 / 120.0)));

    poly * bits::pow2i(n)
}

/// Fast natural logarithm.
///
/// Returns `−1e38` for `x <= 0` and exactly `0` for `x == 1`.
///
/// The mantissa `m ∈ [1, 2)` is mapped through `t = (m − 1)/(m + 1)` into
/// `[0, 1/3]`, where the odd series `2t(1 + t²/3 + t⁴/5 + t⁶/7 + t⁸/9)`
/// converges quickly.
///
/// # Example
///
/// ```
/// use fast_math_rs::log;
///
/// assert_eq!(log(1.0), 0.0);
/// assert!((log(core::f32::consts::E) - 1.0).abs() < 1e-3);
/// assert_eq!(log(-3.0), -1e38);
/// ```
pub fn log(x: f32) -> f32 {
    if x <= 0.0 {
        return LOG_DOMAIN_SENTINEL;
    }
    if x == 1.0 {
        return 0.0;
    }

    let exponent = bits::unbiased_exponent(x);
    let mantissa = bits::normalized_mantissa(x);

    let t = (mantissa - 1.0) / (mantissa + 1.0);
    let t2 = t * t;
    let poly = t * (2.0 + t2 * (2.0 / 3.0 + t2 * (2.0 / 5.0 + t2 * (2.0 / 7.0 + t2 * 2.0 / 9.0))));

    exponent as f32 * LN_2 + poly
}

/// Fast base-10 logarithm, `log(x) / ln 10`.
///
/// Inherits the sentinel of [`log`], scaled: `x <= 0` returns `−1e38 / ln 10`.
#[inline]
pub fn log10(x: f32) -> f32 {
    log(x) * LOG10_E
}

/// Fast base-2 logarithm, `log(x) / ln 2`.
#[inline]
pub fn log2(x: f32) -> f32 {
    log(x) * LOG2_E
}
