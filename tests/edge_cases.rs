//! Literal sentinel values and boundary behaviour.
//!
//! Callers depend on the exact numbers returned for out-of-domain input, so these
//! tests compare with `assert_eq!` wherever the result is defined exactly.

use fast_math_rs::assert_approx_eq;
use fast_math_rs::constants::{
    FRAC_PI_2, LOG_DOMAIN_SENTINEL, LOG10_E, OVERFLOW_SENTINEL, PI, TAN_SENTINEL,
};
use fast_math_rs::*;

#[test]
fn test_basic_values() {
    assert_eq!(sin(0.0), 0.0);
    assert_eq!(cos(0.0), 1.0);
    assert_approx_eq!(sin(FRAC_PI_2), 1.0, 0.01);
    assert_eq!(exp(0.0), 1.0);
    assert_eq!(log(1.0), 0.0);
    assert_approx_eq!(sqrt(4.0), 2.0, 0.1);
}

#[test]
fn test_sqrt_domain() {
    assert_eq!(sqrt(0.0), 0.0);
    assert_eq!(sqrt(-0.0), 0.0);
    assert_eq!(sqrt(-1.0), 0.0);
    assert_eq!(sqrt(f32::NEG_INFINITY), 0.0);
}

#[test]
fn test_tan_sentinel() {
    assert_eq!(tan(FRAC_PI_2), TAN_SENTINEL);
    assert_eq!(tan(-FRAC_PI_2).abs(), TAN_SENTINEL);
    assert_eq!(tan(0.0), 0.0);
}

#[test]
fn test_inverse_trig_clamps() {
    assert_eq!(asin(1.0), FRAC_PI_2);
    assert_eq!(asin(1.5), FRAC_PI_2);
    assert_eq!(asin(-1.0), -FRAC_PI_2);
    assert_eq!(asin(-42.0), -FRAC_PI_2);
    assert_eq!(asin(1e-8), 0.0);

    assert_eq!(acos(1.0), 0.0);
    assert_eq!(acos(-1.0), PI);
    assert_eq!(acos(3.0), 0.0);
}

#[test]
fn test_atan2_axes() {
    assert_eq!(atan2(0.0, 0.0), 0.0);
    assert_eq!(atan2(1e-9, -1e-9), 0.0);
    assert_eq!(atan2(1.0, 0.0), FRAC_PI_2);
    assert_eq!(atan2(-1.0, 0.0), -FRAC_PI_2);
    assert_eq!(atan2(0.0, 1.0), 0.0);
    assert_eq!(atan2(0.0, -1.0), PI);
    assert_eq!(atan2(-0.0, -1.0), PI);
}

#[test]
fn test_exp_saturation() {
    assert_eq!(exp(88.5), OVERFLOW_SENTINEL);
    assert_eq!(exp(f32::INFINITY), OVERFLOW_SENTINEL);
    assert_eq!(exp(-88.0), 0.0);
    assert_eq!(exp(f32::NEG_INFINITY), 0.0);
}

#[test]
fn test_log_sentinels() {
    assert_eq!(log(0.0), LOG_DOMAIN_SENTINEL);
    assert_eq!(log(-1.0), LOG_DOMAIN_SENTINEL);
    assert_eq!(log10(0.0), LOG_DOMAIN_SENTINEL * LOG10_E);
    assert_eq!(log2(1.0), 0.0);
    assert_eq!(log10(1.0), 0.0);
    assert_approx_eq!(log2(8.0), 3.0, 1e-4);
    assert_approx_eq!(log10(1000.0), 3.0, 1e-4);
}

#[test]
fn test_pow_closed_forms() {
    assert_eq!(pow(2.0, 0.0), 1.0);
    assert_eq!(pow(5.0, 0.0), 1.0);
    assert_eq!(pow(7.0, 1.0), 7.0);
    assert_eq!(pow(2.0, 2.0), 4.0);
    assert_eq!(pow(2.0, 3.0), 8.0);
    assert_eq!(pow(2.0, 4.0), 16.0);
    assert_eq!(pow(2.0, -1.0), 0.5);
    assert_eq!(pow(2.0, -2.0), 0.25);
    assert_approx_eq!(pow(4.0, 0.5), 2.0, 1e-4);
    assert_approx_eq!(pow(4.0, -0.5), 0.5, 1e-4);
    assert_approx_eq!(pow(8.0, 1.0 / 3.0), 2.0, 1e-4);
}

#[test]
fn test_pow_sentinels() {
    assert_eq!(pow(0.0, 5.0), 0.0);
    assert_eq!(pow(0.0, -1.0), OVERFLOW_SENTINEL);
    assert_eq!(pow(0.0, 0.0), 1.0);
    assert_eq!(pow(1.0, 1234.5), 1.0);
    assert_eq!(pow(-2.0, 5.0), -32.0);
    assert_eq!(pow(-2.0, 6.0), 64.0);
    assert_eq!(pow(-2.0, 1.5), 0.0);
    assert_eq!(pow(2.0, 10.0), 1024.0);
    assert_eq!(pow(2.0, -10.0), 1.0 / 1024.0);
}

#[test]
fn test_fmod_reference_points() {
    assert_approx_eq!(fmod(7.0, 3.0), libm::fmodf(7.0, 3.0), 1e-6);
    assert_approx_eq!(fmod(-7.0, 3.0), libm::fmodf(-7.0, 3.0), 1e-6);
    assert_eq!(fmod(7.0, 0.0), 0.0);
    assert_eq!(fmod(1.25, 4.0), 1.25);
}

#[test]
fn test_rounding_halves() {
    assert_eq!(round(2.5), 3.0);
    assert_eq!(round(-2.5), -3.0);
    assert_eq!(round(1.4999), 1.0);
    assert_eq!(ceil(-0.5), 0.0);
    assert_eq!(floor(0.5), 0.0);
    assert_eq!(ceil(3.0), 3.0);
    assert_eq!(floor(-3.0), -3.0);
}

#[test]
fn test_hyperbolic_sentinels() {
    assert_eq!(acosh(0.0), 0.0);
    assert_eq!(acosh(-10.0), 0.0);
    assert_eq!(atanh(1.0), 0.0);
    assert_eq!(atanh(-2.0), 0.0);
    assert_eq!(tanh(10.0), 1.0);
    assert_eq!(tanh(-10.0), -1.0);
}

#[test]
fn test_huge_angles_terminate() {
    assert!(sin(1.0e30).abs() <= 1.0);
    assert!(cos(-1.0e30).abs() <= 1.0);
    assert!(sin(f32::INFINITY).is_nan());
    assert!(cos(f32::NAN).is_nan());
}
