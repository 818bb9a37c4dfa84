//! Hyperbolic and inverse hyperbolic approximations.
//!
//! Each function switches between a truncated Taylor series near the origin,
//! where the closed forms lose precision to cancellation, and a closed form over
//! [`exp`], [`log`] and [`sqrt`] further out. The odd functions are evaluated on
//! `|x|` and the sign put back afterwards, so `f(-x) == -f(x)` holds bit for bit.

use crate::exponential::{exp, log};
use crate::power::sqrt;

/// Below this magnitude the Taylor branches are used.
const TAYLOR_CUTOFF: f32 = 0.5;

/// Beyond this magnitude `tanh` saturates to ±1.
const TANH_SATURATION: f32 = 5.0;

/// Below this value `acosh` uses its series around 1.
const ACOSH_SERIES_CUTOFF: f32 = 1.5;

#[inline(always)]
fn with_sign_of(x: f32, magnitude: f32) -> f32 {
    if x < 0.0 { -magnitude } else { magnitude }
}

/// Fast hyperbolic sine.
///
/// # Example
///
/// ```
/// use fast_math_rs::sinh;
///
/// assert!((sinh(1.0) - 1.175_201_2).abs() < 1e-4);
/// assert_eq!(sinh(-1.0), -sinh(1.0));
/// ```
pub fn sinh(x: f32) -> f32 {
    if x.abs() < TAYLOR_CUTOFF {
        // x + x³/3! + x⁵/5! + x⁷/7!
        let x2 = x * x;
        return x * (1.0 + x2 * (1.0 / 6.0 + x2 * (1.0 / 120.0 + x2 / 5040.0)));
    }

    let exp_x = exp(x.abs());
    let exp_neg_x = 1.0 / exp_x;
    with_sign_of(x, 0.5 * (exp_x - exp_neg_x))
}

/// Fast hyperbolic cosine.
pub fn cosh(x: f32) -> f32 {
    if x.abs() < TAYLOR_CUTOFF {
        // 1 + x²/2! + x⁴/4! + x⁶/6! + x⁸/8!
        let x2 = x * x;
        return 1.0 + x2 * (0.5 + x2 * (1.0 / 24.0 + x2 * (1.0 / 720.0 + x2 / 40320.0)));
    }

    let exp_x = exp(x.abs());
    let exp_neg_x = 1.0 / exp_x;
    0.5 * (exp_x + exp_neg_x)
}

/// Fast hyperbolic tangent, saturating to exactly ±1 beyond |x| > 5.
///
/// # Example
///
/// ```
/// use fast_math_rs::tanh;
///
/// assert_eq!(tanh(6.0), 1.0);
/// assert_eq!(tanh(-6.0), -1.0);
/// assert!((tanh(0.5) - 0.462_117_2).abs() < 5e-5);
/// ```
pub fn tanh(x: f32) -> f32 {
    let abs_x = x.abs();
    if abs_x > TANH_SATURATION {
        return with_sign_of(x, 1.0);
    }

    if abs_x < TAYLOR_CUTOFF {
        // x − x³/3 + 2x⁵/15 − 17x⁷/315
        let x2 = x * x;
        return x * (1.0 - x2 * (1.0 / 3.0 - x2 * (2.0 / 15.0 - x2 * 17.0 / 315.0)));
    }

    // (e^2x − 1) / (e^2x + 1)
    let exp_2x = exp(2.0 * abs_x);
    with_sign_of(x, (exp_2x - 1.0) / (exp_2x + 1.0))
}

/// Fast inverse hyperbolic sine, `log(x + sqrt(x² + 1))` away from the origin.
pub fn asinh(x: f32) -> f32 {
    if x.abs() < TAYLOR_CUTOFF {
        // x − x³/6 + 3x⁵/40 − 15x⁷/336
        let x2 = x * x;
        return x * (1.0 - x2 * (1.0 / 6.0 - x2 * (3.0 / 40.0 - x2 * 15.0 / 336.0)));
    }

    let abs_x = x.abs();
    with_sign_of(x, log(abs_x + sqrt(abs_x * abs_x + 1.0)))
}

/// Fast inverse hyperbolic cosine.
///
/// Returns `0` for `x < 1`. Between 1 and 1.5 a series in `t = x − 1` avoids
/// the cancellation in `x² − 1`; above that `log(x + sqrt(x² − 1))` is used.
///
/// # Example
///
/// ```
/// use fast_math_rs::acosh;
///
/// assert_eq!(acosh(0.5), 0.0);
/// assert_eq!(acosh(1.0), 0.0);
/// assert!((acosh(2.0) - 1.316_958).abs() < 1e-3);
/// ```
pub fn acosh(x: f32) -> f32 {
    if x < 1.0 {
        return 0.0;
    }

    if x < ACOSH_SERIES_CUTOFF {
        // sqrt(2t)·(1 − t/12 + 3t²/160 − 5t³/896)
        let t = x - 1.0;
        let sqrt_2t = sqrt(2.0 * t);
        return sqrt_2t * (1.0 - t * (1.0 / 12.0 - t * (3.0 / 160.0 - t * 5.0 / 896.0)));
    }

    log(x + sqrt(x * x - 1.0))
}

/// Fast inverse hyperbolic tangent.
///
/// Returns `0` for `|x| >= 1`; otherwise `½·log((1 + x)/(1 − x))` away from
/// the origin.
pub fn atanh(x: f32) -> f32 {
    let abs_x = x.abs();
    if abs_x >= 1.0 {
        return 0.0;
    }

    if abs_x < TAYLOR_CUTOFF {
        // x + x³/3 + 2x⁵/15 + 17x⁷/315
        let x2 = x * x;
        return x * (1.0 + x2 * (1.0 / 3.0 + x2 * (2.0 / 15.0 + x2 * 17.0 / 315.0)));
    }

    with_sign_of(x, 0.5 * log((1.0 + abs_x) / (1.0 - abs_x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f32; 7] = [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0];

    #[test]
    fn test_sinh_cosh_tanh_match_libm() {
        for &x in &VALUES {
            assert!((sinh(x) - libm::sinhf(x)).abs() < 1e-4, "sinh({})", x);
            assert!((cosh(x) - libm::coshf(x)).abs() < 1e-4, "cosh({})", x);
            assert!((tanh(x) - libm::tanhf(x)).abs() < 5e-5, "tanh({})", x);
        }
    }

    #[test]
    fn test_zero_is_fixed_point() {
        assert_eq!(sinh(0.0), 0.0);
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(tanh(0.0), 0.0);
        assert_eq!(asinh(0.0), 0.0);
        assert_eq!(atanh(0.0), 0.0);
    }

    #[test]
    fn test_tanh_saturation() {
        assert_eq!(tanh(5.5), 1.0);
        assert_eq!(tanh(100.0), 1.0);
        assert_eq!(tanh(-5.5), -1.0);
        assert!(tanh(5.0) < 1.0);
    }

    #[test]
    fn test_inverse_values() {
        assert!((asinh(1.0) - 0.881_373_6).abs() < 1e-4);
        assert!((asinh(-2.0) + 1.443_635_5).abs() < 1e-4);
        assert!((acosh(1.2) - 0.622_362_5).abs() < 1e-4);
        assert!((acosh(2.0) - 1.316_958).abs() < 1e-4);
        assert!((atanh(0.5) - 0.549_306_1).abs() < 1e-4);
        assert!((atanh(-0.9) + 1.472_219_5).abs() < 1e-3);
    }

    #[test]
    fn test_domain_sentinels() {
        assert_eq!(acosh(0.999), 0.0);
        assert_eq!(acosh(-3.0), 0.0);
        assert_eq!(atanh(1.0), 0.0);
        assert_eq!(atanh(-1.0), 0.0);
        assert_eq!(atanh(7.5), 0.0);
    }
}
