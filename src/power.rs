//! Square root and power.

use crate::bits;
use crate::constants::OVERFLOW_SENTINEL;
use crate::exponential::{exp, log};

/// Added to the halved bit pattern to approximate `x^0.5` from the exponent field.
const SQRT_MAGIC: i32 = 0x1FBD_1DF5;

/// Integer exponents up to this magnitude go through binary exponentiation.
const MAX_INTEGER_EXPONENT: u32 = 32;

/// Fast square root.
///
/// Returns `0` for any `n <= 0`. Otherwise the bit-pattern guess is refined by
/// exactly two Newton-Raphson steps `x ← (x + n/x) / 2`.
///
/// # Example
///
/// ```
/// use fast_math_rs::sqrt;
///
/// assert!((sqrt(4.0) - 2.0).abs() < 0.1);
/// assert_eq!(sqrt(-1.0), 0.0);
/// ```
#[inline]
pub fn sqrt(n: f32) -> f32 {
    if n <= 0.0 {
        return 0.0;
    }

    let mut x = bits::from_bits(SQRT_MAGIC + (bits::to_bits(n) >> 1));

    x = 0.5 * (x + n / x);
    x = 0.5 * (x + n / x);
    x
}

/// Fast power function.
///
/// Special cases are checked in this order:
///
/// 1. `exponent == 0` → `1`
/// 2. `exponent == 1` → `base`
/// 3. `base == 0` → `0` for a positive exponent, `1e38` otherwise
/// 4. `base == 1` → `1`
/// 5. exponents `2, 3, 4, 0.5, −1, −2` → direct multiplication, [`sqrt`] or reciprocal
/// 6. integer exponents with magnitude up to 32 → square-and-multiply; negative
///    bases keep their sign only for odd exponents
/// 7. negative base with a fractional exponent → `0`
/// 8. everything else → `exp(exponent · log(base))`
///
/// # Example
///
/// ```
/// use fast_math_rs::pow;
///
/// assert_eq!(pow(2.0, 3.0), 8.0);
/// assert_eq!(pow(-2.0, 3.0), -8.0);
/// assert_eq!(pow(0.0, -1.0), 1e38);
/// assert_eq!(pow(-8.0, 0.5), 0.0);
/// ```
pub fn pow(base: f32, exponent: f32) -> f32 {
    if exponent == 0.0 {
        return 1.0;
    }
    if exponent == 1.0 {
        return base;
    }
    if base == 0.0 {
        return if exponent > 0.0 { 0.0 } else { OVERFLOW_SENTINEL };
    }
    if base == 1.0 {
        return 1.0;
    }

    if exponent == 2.0 {
        return base * base;
    }
    if exponent == 3.0 {
        return base * base * base;
    }
    if exponent == 4.0 {
        let b2 = base * base;
        return b2 * b2;
    }
    if exponent == 0.5 {
        return sqrt(base);
    }
    if exponent == -1.0 {
        return 1.0 / base;
    }
    if exponent == -2.0 {
        return 1.0 / (base * base);
    }

    let int_exp = exponent as i32;
    if exponent == int_exp as f32 && int_exp.unsigned_abs() <= MAX_INTEGER_EXPONENT {
        return powi(base, int_exp);
    }

    if base < 0.0 {
        return 0.0;
    }

    exp(exponent * log(base))
}

/// Square-and-multiply on `|base|`, with the sign restored for odd exponents.
fn powi(base: f32, exponent: i32) -> f32 {
    let negative_result = base < 0.0 && exponent & 1 != 0;

    let mut result = 1.0;
    let mut current = base.abs();
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 != 0 {
            result *= current;
        }
        current *= current;
        remaining >>= 1;
    }

    if exponent < 0 {
        result = 1.0 / result;
    }
    if negative_result { -result } else { result }
}
