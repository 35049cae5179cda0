//! Hexadecimal float parsing.
//!
//! Hex digits are exact in base 2, so no approximation tiers are
//! needed: accumulate the digits into a 64-bit mantissa with a sticky
//! bit for anything that falls off the end, apply the mandatory binary
//! exponent, and round once into the target format. The `0x` prefix
//! has already been consumed by the dispatcher.

#![doc(hidden)]

use crate::errors::Error;
use crate::num::Float;

/// Convert a hexadecimal character to its digit, if valid.
#[inline]
fn to_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// The lexed pieces of a hexadecimal significand and exponent.
struct HexParts {
    /// Up to 61 bits of leading mantissa.
    mantissa: u64,
    /// Base-2 exponent scaling the mantissa, exponent suffix included.
    exponent: i64,
    /// A non-zero digit fell outside the mantissa window.
    sticky: bool,
    /// Bytes consumed after the `0x` prefix.
    len: usize,
}

/// Lex `HEX+ ('.' HEX*)? | '.' HEX+` with a mandatory `p` exponent.
fn parse_hex_parts(bytes: &[u8]) -> Result<HexParts, Error> {
    let mut bytes = bytes;
    let start = bytes;

    let mut mantissa = 0_u64;
    let mut exponent = 0_i64;
    let mut sticky = false;
    let mut n_digits = 0_usize;

    // Integer digits. Once the mantissa window is full, further digits
    // only scale the value.
    while let Some((&c, rest)) = bytes.split_first() {
        match to_hex_digit(c) {
            Some(digit) => {
                if mantissa >> 60 == 0 {
                    mantissa = (mantissa << 4) | digit as u64;
                } else {
                    exponent += 4;
                    sticky |= digit != 0;
                }
                n_digits += 1;
                bytes = rest;
            }
            None => break,
        }
    }
    // Fraction digits.
    if let Some((&b'.', rest)) = bytes.split_first() {
        bytes = rest;
        while let Some((&c, rest)) = bytes.split_first() {
            match to_hex_digit(c) {
                Some(digit) => {
                    if mantissa >> 60 == 0 {
                        mantissa = (mantissa << 4) | digit as u64;
                        exponent -= 4;
                    } else {
                        sticky |= digit != 0;
                    }
                    n_digits += 1;
                    bytes = rest;
                }
                None => break,
            }
        }
    }
    if n_digits == 0 {
        return Err(Error::NoHexDigits);
    }

    // The binary exponent is not optional.
    match bytes.split_first() {
        Some((&c, rest)) if c == b'p' || c == b'P' => bytes = rest,
        _ => return Err(Error::UnexpectedEnd),
    }
    let mut negative = false;
    if let Some((&c, rest)) = bytes.split_first() {
        if c == b'-' || c == b'+' {
            negative = c == b'-';
            bytes = rest;
        }
    }
    match bytes.first() {
        Some(&c) if c.is_ascii_digit() => (),
        _ => return Err(Error::NoDigits),
    }
    let mut p_exponent = 0_i64;
    while let Some((&c, rest)) = bytes.split_first() {
        let digit = c.wrapping_sub(b'0');
        if digit >= 10 {
            break;
        }
        p_exponent = p_exponent * 10 + digit as i64;
        if p_exponent > i32::MAX as i64 {
            return Err(Error::Range);
        }
        bytes = rest;
    }
    if negative {
        p_exponent = -p_exponent;
    }

    Ok(HexParts {
        mantissa,
        exponent: exponent + p_exponent,
        sticky,
        len: (start.len() - bytes.len()),
    })
}

/// Round `mantissa * 2^exponent` (plus a sticky tail) into the target
/// format, to nearest with ties to even.
fn assemble<F: Float>(mantissa: u64, exponent: i64, sticky: bool) -> u64 {
    if mantissa == 0 {
        return 0;
    }
    let lz = mantissa.leading_zeros() as i64;
    let m = mantissa << lz;
    // The value is now `m / 2^63 * 2^e`.
    let e = exponent - lz + 63;

    let mut biased = e - F::MINIMUM_EXPONENT as i64;
    if biased >= F::INFINITE_POWER as i64 {
        return F::INFINITY_BITS;
    }
    let mut shift = 64 - (F::MANTISSA_EXPLICIT_BITS as i64 + 1);
    if biased <= 0 {
        // Subnormal: fewer mantissa bits survive.
        shift += 1 - biased;
        biased = 0;
        if shift > 64 {
            return 0;
        }
    }
    if shift == 64 {
        // Nothing survives but the rounding decision itself; only
        // exactly half the smallest subnormal or more rounds up, and
        // half exactly is a tie resolved down to even zero.
        let round_up = (m >> 63) == 1 && (sticky || m << 1 != 0);
        return round_up as u64;
    }

    let guard = (m >> (shift - 1)) & 1;
    let rest = m & ((1_u64 << (shift - 1)) - 1);
    let mut out = m >> shift;
    if guard == 1 && (sticky || rest != 0 || out & 1 == 1) {
        out += 1;
    }
    if out >= (2_u64 << F::MANTISSA_EXPLICIT_BITS) {
        out >>= 1;
        biased += 1;
    } else if biased == 0 && out >= (1_u64 << F::MANTISSA_EXPLICIT_BITS) {
        // Rounding carried a subnormal up to the smallest normal.
        biased = 1;
    }
    if biased >= F::INFINITE_POWER as i64 {
        return F::INFINITY_BITS;
    }
    if biased > 0 {
        out &= (1_u64 << F::MANTISSA_EXPLICIT_BITS) - 1;
    }
    out | ((biased as u64) << F::MANTISSA_EXPLICIT_BITS)
}

/// Parse a hexadecimal literal after its `0x` prefix, returning the
/// value and the bytes consumed past the prefix.
pub fn parse_partial_hex_float<F: Float>(
    bytes: &[u8],
    negative: bool,
) -> Result<(F, usize), Error> {
    let parts = parse_hex_parts(bytes)?;
    let mut float = F::from_u64_bits(assemble::<F>(parts.mantissa, parts.exponent, parts.sticky));
    if negative {
        float = -float;
    }
    Ok((float, parts.len))
}
