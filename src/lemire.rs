//! Fast estimation of the correctly-rounded representation of a float.
//!
//! Implements the Eisel-Lemire algorithm: approximate `w * 5^q` to 128
//! bits of precision against a precomputed table, then read the
//! mantissa and binary exponent straight out of the product. The
//! approximation is conclusive for every input except a narrow window
//! around exact halves, where it reports a sentinel instead of
//! guessing.
//!
//! The algorithm is described in depth in:
//!     https://arxiv.org/abs/2101.11408
//! and an accessible walkthrough may be found here:
//!     https://nigeltao.github.io/blog/2020/eisel-lemire.html
//!
//! # Magic Number Generation
//!
//! The base-10 to base-2 exponent estimate uses
//! `(217706 * q) >> 16 = floor(q * log2(10))`, exact for every `q` the
//! table covers:
//!
//! ```python
//! import math
//!
//! num = int(math.ceil(math.log2(10) * (1 << 16)))
//! for exp10 in range(-400, 400):
//!     assert num * exp10 >> 16 == int(math.floor(math.log2(10) * exp10))
//! ```

#![doc(hidden)]

use crate::fp::BiasedFp;
use crate::num::Float;
use crate::powers::{POWER_OF_FIVE_128, SMALLEST_POWER_OF_FIVE};

// MUL
// ---

/// Multiply two 64-bit integers to a full 128-bit product.
#[inline]
fn full_multiplication(a: u64, b: u64) -> (u64, u64) {
    let r = (a as u128) * (b as u128);
    (r as u64, (r >> 64) as u64)
}

/// Estimate `floor(q * log2(10)) + 63`, the unbiased base-2 exponent
/// of the normalized product.
#[inline]
fn power(q: i32) -> i32 {
    (q.wrapping_mul(152_170 + 65536) >> 16) + 63
}

/// Approximate `w * 5^q` to the top 128 bits of the 192-bit product.
///
/// The first multiplication against the high table word is enough
/// whenever the result has a zero bit below the `precision` cutoff.
/// Otherwise the low table word refines the product; if even the
/// refined low half is all ones, the truncated reciprocal may have
/// absorbed a carry and the caller must treat the result as suspect.
#[inline]
fn compute_product_approx(q: i64, w: u64, precision: usize) -> (u64, u64) {
    debug_assert!(q >= SMALLEST_POWER_OF_FIVE as i64);
    debug_assert!(precision <= 64);

    let mask = if precision < 64 {
        0xFFFF_FFFF_FFFF_FFFF_u64 >> precision
    } else {
        0xFFFF_FFFF_FFFF_FFFF_u64
    };

    let index = (q - SMALLEST_POWER_OF_FIVE as i64) as usize;
    let (hi5, lo5) = POWER_OF_FIVE_128[index];
    let (mut first_lo, mut first_hi) = full_multiplication(w, hi5);
    if first_hi & mask == mask {
        // The nth power of 5 is exact below 5^55, so the refinement
        // can only wrap for the truncated reciprocals; round the high
        // product up when it does.
        let (_, second_hi) = full_multiplication(w, lo5);
        first_lo = first_lo.wrapping_add(second_hi);
        if second_hi > first_lo {
            first_hi += 1;
        }
    }
    (first_lo, first_hi)
}

// EISEL-LEMIRE
// ------------

/// Compute `w * 10^q` as a [`BiasedFp`], rounded to nearest with ties
/// to even.
///
/// Zero and out-of-range exponents resolve immediately to the zero and
/// infinity sentinels. A result with a negative exponent means the
/// product sat too close to an exact half for the 128-bit
/// approximation to decide the rounding, and the caller must fall back
/// to the big-decimal path.
pub fn compute_float<F: Float>(q: i64, mut w: u64) -> BiasedFp {
    let fp_zero = BiasedFp::zero_pow2(0);
    let fp_inf = BiasedFp::zero_pow2(F::INFINITE_POWER);
    let fp_error = BiasedFp { f: 0, e: -1 };

    // Short-circuit if the value can only be a literal zero or
    // infinity.
    if w == 0 || q < F::SMALLEST_POWER_OF_TEN as i64 {
        return fp_zero;
    } else if q > F::LARGEST_POWER_OF_TEN as i64 {
        return fp_inf;
    }

    // Normalize the mantissa for the multiplication.
    let lz = w.leading_zeros();
    w <<= lz;

    // Multiply against the power of five. The precision keeps one spare
    // bit below the explicit mantissa, the hidden bit, and the rounding
    // bit, plus one for a product that needs no carry shift.
    let (lo, hi) = compute_product_approx(q, w, F::MANTISSA_EXPLICIT_BITS + 3);
    if lo == 0xFFFF_FFFF_FFFF_FFFF {
        // The approximation is ambiguous: the discarded bits could
        // carry all the way up. Powers in `[-27, 55]` are exact in the
        // table (5^q fits 128 bits, or the reciprocal rounding cannot
        // reach the cutoff), so only outside that range do we give up.
        let inside_safe_exponent = (-27..=55).contains(&q);
        if !inside_safe_exponent {
            return fp_error;
        }
    }

    let upperbit = (hi >> 63) as i32;
    let mut mantissa = hi >> (upperbit + 64 - F::MANTISSA_EXPLICIT_BITS as i32 - 3);
    let mut power2 = power(q as i32) + upperbit - lz as i32 - F::MINIMUM_EXPONENT;
    if power2 <= 0 {
        // Subnormal, or underflow past the smallest subnormal.
        if -power2 + 1 >= 64 {
            return fp_zero;
        }
        mantissa >>= -power2 + 1;
        mantissa += mantissa & 1;
        mantissa >>= 1;
        // Rounding up may have carried into the hidden bit, which
        // makes the value the smallest normal again.
        power2 = (mantissa >= (1_u64 << F::MANTISSA_EXPLICIT_BITS)) as i32;
        return BiasedFp { f: mantissa, e: power2 };
    }

    // The product is an exact half when the discarded bits are zero
    // and the mantissa ends in `01` before the shift. Clearing the low
    // bit makes the round-to-nearest below round down, which is the
    // ties-to-even result. Only decimal exponents whose power of five
    // divides a 64-bit mantissa can produce such halves.
    if lo <= 1
        && q >= F::MIN_EXPONENT_ROUND_TO_EVEN as i64
        && q <= F::MAX_EXPONENT_ROUND_TO_EVEN as i64
        && mantissa & 3 == 1
        && (mantissa << (upperbit + 64 - F::MANTISSA_EXPLICIT_BITS as i32 - 3)) == hi
    {
        mantissa &= !1_u64;
    }

    // Round to nearest, then renormalize if the carry walked out of
    // the mantissa window.
    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >= (2_u64 << F::MANTISSA_EXPLICIT_BITS) {
        mantissa = 1_u64 << F::MANTISSA_EXPLICIT_BITS;
        power2 += 1;
    }

    // Strip the hidden bit.
    mantissa &= !(1_u64 << F::MANTISSA_EXPLICIT_BITS);
    if power2 >= F::INFINITE_POWER {
        return fp_inf;
    }
    BiasedFp { f: mantissa, e: power2 }
}
