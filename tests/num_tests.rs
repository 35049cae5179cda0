use exact_lexical::num::Float;

fn check_float<F: Float>(one: F) {
    // The fast-path window must stay within the exactly-representable
    // mantissa range.
    assert_eq!(F::MAX_MANTISSA_FAST_PATH, 2u64 << F::MANTISSA_EXPLICIT_BITS);
    assert!(F::MIN_EXPONENT_FAST_PATH < 0);
    assert!(F::MAX_EXPONENT_FAST_PATH <= F::MAX_EXPONENT_DISGUISED_FAST_PATH);

    // Bit-level constants reassemble to the special values.
    assert!(F::nan() != F::nan());
    assert_eq!(F::from_u64(1) == one, true);
}

#[test]
fn float_test() {
    check_float(1f32);
    check_float(1f64);
}

#[test]
fn pow10_fast_path_test() {
    // Every table entry in the window is an exact power of ten.
    assert_eq!(f64::pow10_fast_path(0), 1e0);
    assert_eq!(f64::pow10_fast_path(22), 1e22);
    assert_eq!(f32::pow10_fast_path(10), 1e10);
}

#[test]
fn bits_test() {
    assert_eq!(f64::infinity(), f64::INFINITY);
    assert_eq!(f32::infinity(), f32::INFINITY);
    assert_eq!(f64::nan().to_bits(), 0x7FF8000000000000);
    assert_eq!(f32::nan().to_bits(), 0x7FC00000);
    assert_eq!(f64::from_u64_bits(0x3FF0000000000000), 1.0);
    assert_eq!(f32::from_u64_bits(0x3F800000), 1.0);
}
