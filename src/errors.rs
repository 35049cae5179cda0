//! Error type for the parse pipeline.
//!
//! Every failure surfaces as one of these variants, carrying the
//! diagnostic message verbatim; the pipeline itself cannot fail once
//! the lexer has accepted the input.

use thiserror::Error;

/// Reason a literal could not be converted to a float.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was empty, or strict parsing left unconsumed bytes.
    #[error("Floating point conversion error")]
    Invalid,
    /// The input ended where more characters were mandatory, such as
    /// after a lone sign or before the binary exponent of a
    /// hexadecimal literal.
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    /// No significant digits in the decimal form, or no digits after
    /// an exponent prefix.
    #[error("no digits seen")]
    NoDigits,
    /// No digits after the `0x` prefix of a hexadecimal literal.
    #[error("No digits seen.")]
    NoHexDigits,
    /// A binary exponent too large in magnitude to represent.
    #[error("Range error")]
    Range,
    /// A token starting like `inf`/`infinity`/`nan` that spells
    /// neither.
    #[error("error converting input to floating point")]
    InvalidSpecial,
}
