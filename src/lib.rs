#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![doc = r#"
# fast-math-rs

Fast, lower-precision single-precision substitutes for the usual `libm`
transcendental and elementary functions, for hot loops that can trade a
bounded amount of error for speed (graphics, control loops, simulation).

## Overview

Every function is a pure `f32 -> f32` (or `(f32, f32) -> f32`) transform. Nothing
allocates, nothing holds state, and nothing panics. Inputs outside a function's
domain do not signal an error: each function returns a documented sentinel
value instead (`0`, `±1e38`, `±1e7` or a clamped boundary), so callers that
care about edge cases must validate their inputs themselves.

Function families:

- Trigonometric: `sin`, `cos`, `tan`, `asin`, `acos`, `atan2`
- Exponential/Logarithmic: `exp`, `log`, `log10`, `log2`
- Power/Root: `sqrt`, `pow`
- Rounding/Remainder: `fmod`, `ceil`, `floor`, `round`
- Hyperbolic: `sinh`, `cosh`, `tanh`, `asinh`, `acosh`, `atanh`

## Quick Start

```rust
use fast_math_rs::{cos, exp, log, sin, sqrt};

assert_eq!(sin(0.0), 0.0);
assert_eq!(cos(0.0), 1.0);
assert!((sin(core::f32::consts::FRAC_PI_2) - 1.0).abs() < 0.01);
assert_eq!(exp(0.0), 1.0);
assert_eq!(log(1.0), 0.0);
assert!((sqrt(4.0) - 2.0).abs() < 0.1);
```

## Sentinels

```rust
use fast_math_rs::{acosh, constants, exp, log, pow, sqrt, tan};

assert_eq!(sqrt(-1.0), 0.0);
assert_eq!(log(0.0), constants::LOG_DOMAIN_SENTINEL);
assert_eq!(exp(100.0), constants::OVERFLOW_SENTINEL);
assert_eq!(pow(0.0, -1.0), constants::OVERFLOW_SENTINEL);
assert_eq!(tan(core::f32::consts::FRAC_PI_2), constants::TAN_SENTINEL);
assert_eq!(acosh(0.5), 0.0);
```

## Calling by Name

The [`registry`] module maps function names to implementations. The same names
are available bound to `libm`, which makes side-by-side comparisons easy:

```rust
use fast_math_rs::registry::FunctionTable;

let fast = FunctionTable::fast();
let reference = FunctionTable::reference();

let a = fast.call1("sin", 1.0).unwrap();
let b = reference.call1("sin", 1.0).unwrap();
assert!((a - b).abs() < 0.01);
```

## Accuracy

Approximate worst cases measured against `libm`:

| Function | Range | Error |
|----------|-------|-------|
| `sin`, `cos` | [-2π, 2π] | < 1e-2 absolute |
| `sqrt` | [0.001, 1000] | < 1e-1 absolute |
| `tan` | [-π/2+0.1, π/2-0.1] | < 1e-1 absolute |
| `asin`, `acos` | [-0.99, 0.99] | < 1e-1 absolute |
| `exp` | [-10, 10] | < 1% relative |
| `log` | [0.01, 100] | < 2% relative |
| `pow` | base [0.1, 10], exponent [-3, 3] | < 5% relative |
| `sinh`, `cosh`, `asinh` | [-10, 10] | < 1% relative |
| `tanh` | [-5, 5] | < 5e-5 absolute |

`ceil` and `floor` are exact. `round` rounds halves away from zero.

## Performance Notes

`sin` and `cos` reduce their argument with a ±2π shift loop, which is cheap for
angles of a few periods. Angles beyond 64π are folded with a single remainder
first, so huge inputs cost more than small ones but never loop unboundedly.

## Feature Flags

- `ffi` (default): exports every function with a `fast_math_` prefix over the C ABI
  and generates `include/fast_math_rs.h` with cbindgen.
"#]

pub mod bits;
pub mod error;
pub mod exponential;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod hyperbolic;
pub mod power;
pub mod registry;
pub mod rounding;
pub mod trig;

pub use exponential::{exp, log, log2, log10};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use power::{pow, sqrt};
pub use rounding::{ceil, floor, fmod, round};
pub use trig::{acos, asin, atan2, cos, sin, tan};

#[cfg(feature = "ffi")]
pub use ffi::*;

pub mod constants {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TWO_PI: f32 = 2.0 * PI;
    pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;
    pub const FRAC_PI_4: f32 = core::f32::consts::FRAC_PI_4;
    pub const LN_2: f32 = core::f32::consts::LN_2;
    pub const LOG2_E: f32 = core::f32::consts::LOG2_E;
    pub const LOG10_E: f32 = core::f32::consts::LOG10_E;

    /// Returned in place of an overflowing result (`exp`, `pow(0, -n)`).
    pub const OVERFLOW_SENTINEL: f32 = 1e38;

    /// Returned by `log` (and scaled by `log10`/`log2`) for `x <= 0`.
    pub const LOG_DOMAIN_SENTINEL: f32 = -1e38;

    /// Magnitude returned by `tan` when the cosine vanishes.
    pub const TAN_SENTINEL: f32 = 1e7;

    /// Magnitude under which a divisor is treated as zero by `tan`, `asin`, `atan2`.
    pub const NEAR_ZERO: f32 = 1e-7;

    pub const TEST_PRECISION: f32 = 1e-6;
}

/// Utility macro to check if two floating point values are approximately equal
/// within a specified epsilon. Supports optional format arguments like assert_eq!.
#[macro_export]
macro_rules! assert_approx_eq {
    // Case 1: assert_approx_eq!(left, right) -> use default epsilon
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    // Case 2: assert_approx_eq!(left, right, epsilon) -> use specified epsilon
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: f32 = $left;
        let right_val: f32 = $right;
        let eps: f32 = $epsilon;
        $crate::assert_approx_eq!(
            left_val,
            right_val,
            eps,
            "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
            left_val,
            right_val,
            eps
        )
    }};
    // Case 3: assert_approx_eq!(left, right, epsilon, "format message with args", args...)
    ($left:expr, $right:expr, $epsilon:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let left_val: f32 = $left;
        let right_val: f32 = $right;
        let eps: f32 = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!((left_val - right_val).abs() < eps, $fmt $(, $arg)*);
        }
    }};
}
