//! Lexical product: the significant digits and decimal exponent of a
//! literal, plus the native fast path that consumes it.

#![doc(hidden)]

use crate::num::Float;

/// Exact powers of ten that fit in a 64-bit integer, for shifting
/// excess exponent into the mantissa on the disguised fast path.
#[rustfmt::skip]
const INT_POW10: [u64; 16] = [
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    100000000000000,
    1000000000000000,
];

/// The decomposed form of a decimal literal.
///
/// When `many_digits` is false, `mantissa * 10^exponent` is exactly the
/// value the text denotes. When true, more than 19 significant digits
/// were present and `mantissa` holds a 19-digit truncation, so rounding
/// needs the extra care of the truncated path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Number {
    /// Up to 19 significant decimal digits.
    pub mantissa: u64,
    /// Decimal exponent, adjusted for the position of the point.
    pub exponent: i64,
    /// Leading minus sign seen.
    pub negative: bool,
    /// The mantissa is a truncation of a longer digit string.
    pub many_digits: bool,
}

impl Number {
    /// Detect if both operands of the scaling multiplication are
    /// exactly representable as native floats.
    #[inline]
    fn is_fast_path<F: Float>(&self) -> bool {
        !self.many_digits
            && F::MIN_EXPONENT_FAST_PATH <= self.exponent
            && self.exponent <= F::MAX_EXPONENT_DISGUISED_FAST_PATH
            && self.mantissa <= F::MAX_MANTISSA_FAST_PATH
    }

    /// Try the machine-float shortcut.
    ///
    /// When the mantissa and the power of ten are both exact, a single
    /// native multiplication or division is correctly rounded by
    /// IEEE-754, so no further work is needed. A positive exponent
    /// slightly beyond the exact-power window may still qualify as a
    /// disguised fast path: the excess powers of ten are first folded
    /// into the mantissa as an integer multiplication, provided the
    /// result still fits.
    #[inline]
    pub fn try_fast_path<F: Float>(&self) -> Option<F> {
        if !self.is_fast_path::<F>() {
            return None;
        }

        let mut value = if self.exponent <= F::MAX_EXPONENT_FAST_PATH {
            // Normal fast path. Do not use powi, which compounds error.
            let mantissa = F::from_u64(self.mantissa);
            if self.exponent < 0 {
                mantissa / F::pow10_fast_path(-self.exponent as usize)
            } else {
                mantissa * F::pow10_fast_path(self.exponent as usize)
            }
        } else {
            // Disguised fast path.
            let shift = self.exponent - F::MAX_EXPONENT_FAST_PATH;
            let mantissa = self.mantissa.checked_mul(INT_POW10[shift as usize])?;
            if mantissa > F::MAX_MANTISSA_FAST_PATH {
                return None;
            }
            F::from_u64(mantissa) * F::pow10_fast_path(F::MAX_EXPONENT_FAST_PATH as usize)
        };
        if self.negative {
            value = -value;
        }
        Some(value)
    }
}
