//! IEEE-754 bit-pattern primitives.
//!
//! Every place in the crate that needs to look at (or forge) the raw bits of an
//! `f32` goes through this module. A single-precision float is laid out as
//!
//! ```text
//! sign(1) | exponent(8) | mantissa(23)
//! ```
//!
//! and the helpers here expose that layout as a signed 32-bit integer so the
//! arithmetic on exponents and magic offsets reads the same way it would on
//! the integer view of the value.

/// Number of explicit mantissa bits in an `f32`.
pub const MANTISSA_BITS: i32 = 23;

/// Exponent bias of an `f32`.
pub const EXPONENT_BIAS: i32 = 127;

/// Mask selecting the 23 mantissa bits.
pub const MANTISSA_MASK: i32 = 0x007F_FFFF;

/// Bit pattern of `1.0f32` (biased exponent 127, empty mantissa).
pub const ONE_BITS: i32 = 0x3F80_0000;

/// Reinterprets the bits of `x` as a signed integer.
///
/// # Example
///
/// ```
/// use fast_math_rs::bits::to_bits;
///
/// assert_eq!(to_bits(1.0), 0x3F80_0000);
/// ```
#[inline(always)]
pub const fn to_bits(x: f32) -> i32 {
    x.to_bits() as i32
}

/// Reinterprets a signed integer as the bits of an `f32`.
#[inline(always)]
pub const fn from_bits(bits: i32) -> f32 {
    f32::from_bits(bits as u32)
}

/// Returns the stored (biased) exponent field of `x`, in `0..=255`.
///
/// The sign bit is masked away, so negative inputs report the exponent of
/// their magnitude.
#[inline(always)]
pub const fn biased_exponent(x: f32) -> i32 {
    (to_bits(x) >> MANTISSA_BITS) & 0xFF
}

/// Returns the exponent of `x` with the bias removed.
///
/// For a normal `x = m · 2^e` with `m ∈ [1, 2)` this is `e`. Subnormals and
/// zero report `-127`.
#[inline(always)]
pub const fn unbiased_exponent(x: f32) -> i32 {
    biased_exponent(x) - EXPONENT_BIAS
}

/// Returns the mantissa of `x` normalized into `[1, 2)`.
///
/// The stored exponent is forced to the bias value and the sign is dropped,
/// so `x = normalized_mantissa(x) · 2^unbiased_exponent(x)` for every
/// positive normal `x`.
#[inline(always)]
pub const fn normalized_mantissa(x: f32) -> f32 {
    from_bits((to_bits(x) & MANTISSA_MASK) | ONE_BITS)
}

/// Builds `2^n` by writing the biased exponent straight into the bit pattern.
///
/// `n` must lie in `-126..=127`; callers clamp their inputs so that holds.
#[inline(always)]
pub const fn pow2i(n: i32) -> f32 {
    debug_assert!(n >= -126 && n <= 127);
    from_bits((n + EXPONENT_BIAS) << MANTISSA_BITS)
}
