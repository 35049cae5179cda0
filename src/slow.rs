//! Simple Decimal Conversion: the complete fallback for inputs the
//! 128-bit approximation cannot decide.
//!
//! The big decimal is shifted by powers of two until the value lies in
//! `[1/2, 1)`, walked down into the subnormal range if needed, and then
//! scaled up so that rounding to an integer yields the mantissa. Every
//! step is exact, so the result is always correctly rounded.

#![doc(hidden)]

use crate::decimal::{parse_decimal, Decimal};
use crate::fp::BiasedFp;
use crate::num::Float;

/// The largest shift the decimal arithmetic supports in one step.
const MAX_SHIFT: usize = 60;

/// The largest right shift guaranteed not to lose integer digits, by
/// the number of digits before the decimal point. `10^n` needs a bit
/// over `3.32 n` bits, so shifting by less keeps a non-zero integer
/// part.
#[inline]
fn max_safe_shift(n: usize) -> usize {
    #[rustfmt::skip]
    const SHIFTS: [u8; 19] = [
        0, 3, 6, 9, 13, 16, 19, 23, 26, 29, 33, 36, 39, 43, 46, 49, 53, 56, 59,
    ];
    if n < SHIFTS.len() {
        SHIFTS[n] as usize
    } else {
        MAX_SHIFT
    }
}

/// Parse a literal whose mantissa overflowed every faster tier into a
/// correctly-rounded [`BiasedFp`].
pub fn parse_long_mantissa<F: Float>(bytes: &[u8]) -> BiasedFp {
    let fp_zero = BiasedFp::zero_pow2(0);
    let fp_inf = BiasedFp::zero_pow2(F::INFINITE_POWER);

    let mut d = parse_decimal(bytes);

    // Short-circuit if the value can only be a literal zero or
    // infinity: nothing below 10^-324 rounds away from zero, and
    // nothing at 10^310 or above stays finite.
    if d.num_digits == 0 || d.decimal_point < -324 {
        return fp_zero;
    } else if d.decimal_point >= 310 {
        return fp_inf;
    }

    let mut exp2 = 0_i32;
    // Shift right until the value drops below one.
    while d.decimal_point > 0 {
        let shift = max_safe_shift(d.decimal_point as usize);
        d.right_shift(shift);
        if d.decimal_point < -Decimal::DECIMAL_POINT_RANGE {
            return fp_zero;
        }
        exp2 += shift as i32;
    }
    // Shift left until the value reaches the binade `[1/2, 1)`.
    while d.decimal_point <= 0 {
        let shift = if d.decimal_point == 0 {
            match d.digits[0] {
                digit if digit >= 5 => break,
                0 | 1 => 2,
                _ => 1,
            }
        } else {
            max_safe_shift(-d.decimal_point as usize)
        };
        d.left_shift(shift);
        if d.decimal_point > Decimal::DECIMAL_POINT_RANGE {
            return fp_inf;
        }
        exp2 -= shift as i32;
    }
    // The loops leave the value in `[1/2, 1)`; binary mantissas live in
    // `[1, 2)`.
    exp2 -= 1;

    // Walk subnormal values down to the format's minimum exponent.
    while (F::MINIMUM_EXPONENT + 1) > exp2 {
        let mut n = ((F::MINIMUM_EXPONENT + 1) - exp2) as usize;
        if n > MAX_SHIFT {
            n = MAX_SHIFT;
        }
        d.right_shift(n);
        exp2 += n as i32;
    }
    if (exp2 - F::MINIMUM_EXPONENT) >= F::INFINITE_POWER {
        return fp_inf;
    }

    // Scale the value so the integer part is the mantissa, and round.
    d.left_shift(F::MANTISSA_EXPLICIT_BITS + 1);
    let mut mantissa = d.round();
    if mantissa >= (1_u64 << (F::MANTISSA_EXPLICIT_BITS + 1)) {
        // Rounding up carried past the hidden bit; scale back down and
        // round again.
        d.right_shift(1);
        exp2 += 1;
        mantissa = d.round();
        if (exp2 - F::MINIMUM_EXPONENT) >= F::INFINITE_POWER {
            return fp_inf;
        }
    }
    let mut power2 = exp2 - F::MINIMUM_EXPONENT;
    if mantissa < (1_u64 << F::MANTISSA_EXPLICIT_BITS) {
        power2 -= 1;
    }
    // Strip the hidden bit.
    mantissa &= (1_u64 << F::MANTISSA_EXPLICIT_BITS) - 1;
    BiasedFp { f: mantissa, e: power2 }
}
