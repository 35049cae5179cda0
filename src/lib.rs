//! Correctly-rounded float-parsing algorithms.
//!
//! `exact-lexical` converts a textual numeric literal to the unique
//! IEEE-754 binary value produced by round-to-nearest, ties-to-even of
//! the real number the text denotes. Parsing runs through three tiers:
//!
//! 1. a fast path using native float multiplication, valid when the
//!    mantissa and the power of ten are both exactly representable;
//! 2. the Eisel-Lemire algorithm, a 128-bit fixed-precision
//!    approximation of `w * 5^q` against a precomputed table;
//! 3. a big-decimal fallback that shifts an arbitrary-precision decimal
//!    buffer by powers of two until it lies in the target binade, then
//!    rounds. The fallback is complete, so the pipeline always produces
//!    a value for a lexable input.
//!
//! The parser is a pure function of its input: no I/O, no allocation,
//! no global mutable state. Hexadecimal literals and the ASCII
//! spellings of `inf`/`infinity`/`nan` are accepted at the surface.

// FEATURES

// Require intrinsics in a no_std context.
#![cfg_attr(not(feature = "std"), no_std)]

// DEPENDENCIES
#[macro_use]
extern crate cfg_if;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
cfg_if! {
if #[cfg(feature = "std")] {
    pub(crate) use std::*;
} else {
    pub(crate) use core::*;
}
} // cfg_if
}

// MODULES
pub mod decimal;
pub mod errors;
pub mod fp;
pub mod hex;
pub mod lemire;
pub mod num;
pub mod number;
pub mod parse;
pub mod powers;
pub mod slice;
pub mod slow;

// API
pub use self::errors::Error;
pub use self::num::Float;
pub use self::parse::{parse_float, parse_partial_float};
