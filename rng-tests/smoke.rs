//! RNG round-trip smoke test.
//!
//! Draw random bit patterns, format them with `ryu` (shortest
//! round-trippable digits), re-parse, and demand the identical bits
//! back. Any rounding defect in the pipeline shows up as a mismatch.

extern crate exact_lexical;
extern crate rand_core;
extern crate rand_xorshift;
extern crate ryu;

use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use exact_lexical::parse_float;

pub fn main() {
    let mut rng = XorShiftRng::seed_from_u64(0x1172_5550_6b30_f15c);
    let mut buffer = ryu::Buffer::new();
    let mut checked = 0_u64;

    for _ in 0..10_000_000 {
        let bits = rng.next_u64();
        let value = f64::from_bits(bits);
        if !value.is_finite() {
            continue;
        }

        let formatted = buffer.format_finite(value);
        let parsed: f64 = parse_float(formatted.as_bytes()).unwrap();
        assert_eq!(
            parsed.to_bits(),
            bits,
            "round-trip mismatch for {}",
            formatted
        );
        checked += 1;
    }

    println!("{} doubles round-tripped", checked);
}
