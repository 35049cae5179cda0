//! Exhaustive-leaning f32 round-trip test.
//!
//! Random 32-bit patterns cover the f32 space densely enough to catch
//! systematic rounding errors in the single-precision constants.

extern crate exact_lexical;
extern crate rand_core;
extern crate rand_xorshift;
extern crate ryu;

use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use exact_lexical::parse_float;

pub fn main() {
    let mut rng = XorShiftRng::seed_from_u64(0x7b0a_53b1_fe23_9d11);
    let mut buffer = ryu::Buffer::new();
    let mut checked = 0_u64;

    for _ in 0..50_000_000 {
        let bits = rng.next_u32();
        let value = f32::from_bits(bits);
        if !value.is_finite() {
            continue;
        }

        let formatted = buffer.format_finite(value);
        let parsed: f32 = parse_float(formatted.as_bytes()).unwrap();
        assert_eq!(
            parsed.to_bits(),
            bits,
            "round-trip mismatch for {}",
            formatted
        );
        checked += 1;
    }

    println!("{} floats round-tripped", checked);
}
