#![no_main]
use libfuzzer_sys::fuzz_target;

// Differential fuzzing against the standard library, which is also a
// correctly-rounded parser: both sides must agree bit for bit on every
// decimal literal the grammar accepts.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = exact_lexical::parse_float::<f64>(data) {
        if let Ok(text) = core::str::from_utf8(data) {
            if let Ok(expected) = text.parse::<f64>() {
                if value.is_nan() {
                    assert!(expected.is_nan());
                } else {
                    assert_eq!(value.to_bits(), expected.to_bits());
                }
            }
        }
    }
});
