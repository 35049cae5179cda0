//! Parse byte slices to correctly-rounded floats.
//!
//! The dispatcher lives here: sign and special-token handling, the
//! decimal lexer producing a [`Number`], and the tiered hand-off from
//! the fast path through Eisel-Lemire to the big-decimal fallback.

#![doc(hidden)]

use crate::errors::Error;
use crate::hex::parse_partial_hex_float;
use crate::lemire::compute_float;
use crate::num::Float;
use crate::number::Number;
use crate::slice::{is_8digits, ByteSlice};
use crate::slow::parse_long_mantissa;

// Mantissa threshold where accumulating one more decimal digit may
// overflow 64 bits.
const MIN_19DIGIT_INT: u64 = 1_000_000_000_000_000_000;

// Saturation bound while accumulating explicit exponent digits.
const EXPONENT_CLAMP: i64 = (i32::MAX as i64) / 10 - 10;

// LEXER
// -----

/// Parse 8 digits from a 64-bit little-endian load in three
/// multiplications.
///
/// The technique is described in "Fast numeric string to int":
///     https://johnnylee-sde.github.io/Fast-numeric-string-to-int/
#[inline]
fn parse_8digits(mut v: u64) -> u64 {
    const MASK: u64 = 0x0000_00FF_0000_00FF;
    const MUL1: u64 = 0x000F_4240_0000_0064;
    const MUL2: u64 = 0x0000_2710_0000_0001;
    v -= 0x3030_3030_3030_3030;
    v = (v * 10) + (v >> 8); // fits in 63 bits, cannot overflow
    let v1 = (v & MASK).wrapping_mul(MUL1);
    let v2 = ((v >> 16) & MASK).wrapping_mul(MUL2);
    ((v1.wrapping_add(v2) >> 32) as u32) as u64
}

/// Consume a run of decimal digits into `mantissa`, eight at a time
/// where the input allows. Overflow wraps; the caller detects it from
/// the digit count.
#[inline]
fn consume_digit_run(bytes: &mut &[u8], mantissa: &mut u64) {
    while bytes.len() >= 8 {
        let v = bytes.read_u64le();
        if !is_8digits(v) {
            break;
        }
        *mantissa = mantissa
            .wrapping_mul(100_000_000)
            .wrapping_add(parse_8digits(v));
        *bytes = &bytes[8..];
    }
    *bytes = bytes.consume_digits(|digit| {
        *mantissa = mantissa.wrapping_mul(10).wrapping_add(digit as u64);
    });
}

/// Consume digits only while the mantissa is guaranteed not to
/// overflow, leaving the rest of the run unread.
#[inline]
fn consume_digit_run_capped(bytes: &mut &[u8], mantissa: &mut u64) {
    while *mantissa < MIN_19DIGIT_INT {
        match bytes.split_first() {
            Some((&c, rest)) if c.wrapping_sub(b'0') < 10 => {
                *mantissa = (*mantissa * 10) + (c - b'0') as u64;
                *bytes = rest;
            }
            _ => break,
        }
    }
}

/// Parse an explicit `e`/`E` exponent suffix.
///
/// If no digit follows the marker and optional sign, the suffix is not
/// part of the number: rewind so partial parsing reports it as
/// trailing data.
#[inline]
fn parse_scientific(bytes: &mut &[u8]) -> i64 {
    let start = *bytes;
    *bytes = &bytes[1..];

    let mut negative = false;
    if let Some((&c, rest)) = bytes.split_first() {
        if c == b'-' || c == b'+' {
            negative = c == b'-';
            *bytes = rest;
        }
    }
    match bytes.first() {
        Some(&c) if c.is_ascii_digit() => {
            let mut exponent = 0_i64;
            *bytes = bytes.consume_digits(|digit| {
                if exponent < EXPONENT_CLAMP {
                    exponent = 10 * exponent + digit as i64;
                }
            });
            if negative {
                -exponent
            } else {
                exponent
            }
        }
        _ => {
            *bytes = start;
            0
        }
    }
}

/// Lex the decimal form into a [`Number`], returning it with the
/// number of bytes consumed.
///
/// Significant digits beyond the 19 that fit a 64-bit mantissa force a
/// second scan: leading zeros are discounted first, and if the count
/// still exceeds the window, the most significant 19 digits are
/// re-accumulated and `many_digits` marks the mantissa as truncated.
pub fn parse_number(bytes: &[u8], negative: bool) -> Option<(Number, usize)> {
    debug_assert!(!bytes.is_empty());

    let start = bytes;
    let mut bytes = bytes;

    // Integer digits.
    let mut mantissa = 0_u64;
    consume_digit_run(&mut bytes, &mut mantissa);
    let mut n_digits = bytes.offset_from(start);

    // Fraction digits; each one lowers the decimal exponent.
    let int_end = bytes;
    let mut n_after_dot = 0;
    let mut exponent = 0_i64;
    if let Some((&b'.', rest)) = bytes.split_first() {
        bytes = rest;
        let before = bytes;
        consume_digit_run(&mut bytes, &mut mantissa);
        n_after_dot = bytes.offset_from(before);
        exponent = -n_after_dot as i64;
    }

    n_digits += n_after_dot;
    if n_digits == 0 {
        return None;
    }

    // Explicit exponent.
    let mut exp_number = 0_i64;
    if let Some(&c) = bytes.first() {
        if c == b'e' || c == b'E' {
            exp_number = parse_scientific(&mut bytes);
            exponent += exp_number;
        }
    }

    let len = bytes.offset_from(start) as usize;

    if n_digits <= 19 {
        let number = Number {
            mantissa,
            exponent,
            negative,
            many_digits: false,
        };
        return Some((number, len));
    }

    // More digits than the window; leading zeros carry no significance,
    // so discount them before concluding the mantissa truncates.
    n_digits -= 19;
    let mut prefix = start;
    while let Some((&c, rest)) = prefix.split_first() {
        if c == b'0' {
            n_digits -= 1;
            prefix = rest;
        } else if c == b'.' {
            prefix = rest;
        } else {
            break;
        }
    }
    let mut many_digits = false;
    if n_digits > 0 {
        // Truly truncated: re-accumulate the 19 most significant
        // digits and recompute the exponent from where they end.
        many_digits = true;
        mantissa = 0;
        let mut digits = start;
        consume_digit_run_capped(&mut digits, &mut mantissa);
        exponent = if mantissa >= MIN_19DIGIT_INT {
            // The window closed before the decimal point.
            int_end.offset_from(digits)
        } else {
            // The window crossed the point; skip it and continue.
            digits = &digits[1..];
            let before = digits;
            consume_digit_run_capped(&mut digits, &mut mantissa);
            -digits.offset_from(before)
        } as i64;
        exponent += exp_number;
    }

    let number = Number {
        mantissa,
        exponent,
        negative,
        many_digits,
    };
    Some((number, len))
}

// SPECIALS
// --------

#[inline]
fn starts_with_ignore_case(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Parse the ASCII spellings of the non-finite values: `inf`,
/// `infinity` and `nan`, case-insensitive.
pub fn parse_special<F: Float>(bytes: &[u8], negative: bool) -> Option<(F, usize)> {
    let (mut float, len) = if starts_with_ignore_case(bytes, b"infinity") {
        (F::infinity(), 8)
    } else if starts_with_ignore_case(bytes, b"inf") {
        (F::infinity(), 3)
    } else if starts_with_ignore_case(bytes, b"nan") {
        (F::nan(), 3)
    } else {
        return None;
    };
    if negative {
        float = -float;
    }
    Some((float, len))
}

// DISPATCH
// --------

/// Parse a float, requiring the complete input to be consumed.
pub fn parse_float<F: Float>(bytes: &[u8]) -> Result<F, Error> {
    let (float, len) = parse_partial_float::<F>(bytes)?;
    if len == bytes.len() {
        Ok(float)
    } else {
        Err(Error::Invalid)
    }
}

/// Parse a float from the front of `bytes`, returning the value and
/// the number of bytes consumed.
pub fn parse_partial_float<F: Float>(bytes: &[u8]) -> Result<(F, usize), Error> {
    if bytes.is_empty() {
        return Err(Error::Invalid);
    }

    // Sign.
    let mut negative = false;
    let mut rest = bytes;
    if let Some((&c, tail)) = rest.split_first() {
        if c == b'-' || c == b'+' {
            negative = c == b'-';
            rest = tail;
        }
    }
    if rest.is_empty() {
        return Err(Error::UnexpectedEnd);
    }
    let prefix_len = bytes.len() - rest.len();

    // Non-finite spellings.
    if matches!(rest[0], b'i' | b'I' | b'n' | b'N') {
        return parse_special::<F>(rest, negative)
            .map(|(float, len)| (float, len + prefix_len))
            .ok_or(Error::InvalidSpecial);
    }

    // Hexadecimal literals, handled by their own exact pipeline.
    if rest.len() >= 2 && rest[0] == b'0' && (rest[1] | 0x20) == b'x' {
        let (float, len) = parse_partial_hex_float::<F>(&rest[2..], negative)?;
        return Ok((float, len + 2 + prefix_len));
    }

    // Decimal pipeline: lex, then fast path, then Eisel-Lemire, then
    // the big-decimal fallback.
    let (num, len) = parse_number(rest, negative).ok_or(Error::NoDigits)?;
    if let Some(value) = num.try_fast_path::<F>() {
        return Ok((value, len + prefix_len));
    }

    let mut fp = compute_float::<F>(num.exponent, num.mantissa);
    if num.many_digits && fp.e >= 0 && fp != compute_float::<F>(num.exponent, num.mantissa + 1) {
        // A truncated mantissa is only trusted when one extra unit in
        // the last place cannot change the rounding.
        fp.e = -1;
    }
    if fp.e < 0 {
        fp = parse_long_mantissa::<F>(rest);
    }

    let mut float = F::from_u64_bits(fp.f | ((fp.e as u64) << F::MANTISSA_EXPLICIT_BITS));
    if negative {
        float = -float;
    }
    Ok((float, len + prefix_len))
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_test() {
        let (num, len) = parse_number(b"1234.567e2", false).unwrap();
        assert_eq!(num.mantissa, 1234567);
        assert_eq!(num.exponent, -1);
        assert!(!num.many_digits);
        assert_eq!(len, 10);

        // 20 significant digits truncate to a 19-digit window.
        let (num, len) = parse_number(b"12345678901234567890", false).unwrap();
        assert_eq!(num.mantissa, 1234567890123456789);
        assert_eq!(num.exponent, 1);
        assert!(num.many_digits);
        assert_eq!(len, 20);

        // Leading zeros do not count as significant digits.
        let (num, _) = parse_number(b"00000000000000000000001", false).unwrap();
        assert_eq!(num.mantissa, 1);
        assert_eq!(num.exponent, 0);
        assert!(!num.many_digits);
    }

    #[test]
    fn parse_scientific_rewind_test() {
        // A dangling exponent marker is trailing data, not an error.
        let (num, len) = parse_number(b"1e", false).unwrap();
        assert_eq!((num.mantissa, num.exponent), (1, 0));
        assert_eq!(len, 1);

        let (num, len) = parse_number(b"2.5e+x", false).unwrap();
        assert_eq!((num.mantissa, num.exponent), (25, -1));
        assert_eq!(len, 3);
    }
}
