use exact_lexical::{parse_float, parse_partial_float, Error};

fn f64_bits(bytes: &[u8]) -> u64 {
    parse_float::<f64>(bytes).unwrap().to_bits()
}

fn f32_bits(bytes: &[u8]) -> u32 {
    parse_float::<f32>(bytes).unwrap().to_bits()
}

#[test]
fn basic_test() {
    assert_eq!(f64_bits(b"0x1p0"), 0x3FF0000000000000);
    assert_eq!(f64_bits(b"0x1.8p1"), 0x4008000000000000);
    assert_eq!(f64_bits(b"0xf.fp0"), 0x402FE00000000000);
    assert_eq!(f64_bits(b"0x0.8p1"), 0x3FF0000000000000);
    assert_eq!(f64_bits(b"0x1.7p4"), 0x4037000000000000);
    assert_eq!(f64_bits(b"0X1.8P1"), 0x4008000000000000);
    assert_eq!(f64_bits(b"-0x1.8p1"), 0xC008000000000000);
    assert_eq!(f32_bits(b"0x1p0"), 0x3F800000);
    assert_eq!(f32_bits(b"0x1.8p1"), 0x40400000);
}

#[test]
fn subnormal_test() {
    assert_eq!(f64_bits(b"0x1p-1074"), 0x0000000000000001);
    assert_eq!(f64_bits(b"0x3p-1074"), 0x0000000000000003);
    assert_eq!(f64_bits(b"0x1p-1022"), 0x0010000000000000);
    assert_eq!(f64_bits(b"0x0.fffffffffffffp-1022"), 0x000FFFFFFFFFFFFF);
    assert_eq!(f32_bits(b"0x1p-149"), 0x00000001);

    // Exactly half the smallest subnormal ties down to zero.
    assert_eq!(f64_bits(b"0x1p-1075"), 0);
    assert_eq!(f64_bits(b"0x1p-1076"), 0);
    assert_eq!(f32_bits(b"0x1p-150"), 0);
}

#[test]
fn overflow_test() {
    assert_eq!(f64_bits(b"0x1.fffffffffffffp1023"), 0x7FEFFFFFFFFFFFFF);
    // The next half step rounds up and out of the finite range.
    assert_eq!(f64_bits(b"0x1.fffffffffffff8p1023"), 0x7FF0000000000000);
    assert_eq!(f64_bits(b"0x1p1024"), 0x7FF0000000000000);
    assert_eq!(f32_bits(b"0x1.fffffep127"), 0x7F7FFFFF);
    assert_eq!(f32_bits(b"0x1.ffffffp127"), 0x7F800000);
    assert_eq!(f32_bits(b"0x1p128"), 0x7F800000);
}

#[test]
fn long_mantissa_test() {
    // More than 64 bits of hex digits round once through the sticky
    // bit.
    assert_eq!(f64_bits(b"0x123456789abcdef11p0"), 0x43F23456789ABCDF);
    assert_eq!(f64_bits(b"0x1.00000000000000001p0"), 0x3FF0000000000000);
}

#[test]
fn partial_test() {
    let (value, len) = parse_partial_float::<f64>(b"0x1.8p1 + rest").unwrap();
    assert_eq!((value, len), (3.0, 7));
}

#[test]
fn error_test() {
    // The binary exponent is mandatory.
    assert_eq!(parse_float::<f64>(b"0x1.8"), Err(Error::UnexpectedEnd));
    assert_eq!(parse_float::<f64>(b"0xp3"), Err(Error::NoHexDigits));
    assert_eq!(parse_float::<f64>(b"0x.p3"), Err(Error::NoHexDigits));
    assert_eq!(parse_float::<f64>(b"0x1p-"), Err(Error::NoDigits));
    assert_eq!(parse_float::<f64>(b"0x1p12345678901"), Err(Error::Range));
}
