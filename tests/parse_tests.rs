use exact_lexical::{parse_float, parse_partial_float, Error};

// HELPERS
// -------

fn f64_bits(bytes: &[u8]) -> u64 {
    parse_float::<f64>(bytes).unwrap().to_bits()
}

fn f32_bits(bytes: &[u8]) -> u32 {
    parse_float::<f32>(bytes).unwrap().to_bits()
}

// TESTS
// -----

#[test]
fn known_bits_test() {
    assert_eq!(f64_bits(b"0"), 0x0000000000000000);
    assert_eq!(f64_bits(b"-0"), 0x8000000000000000);
    assert_eq!(f64_bits(b"1"), 0x3FF0000000000000);
    assert_eq!(f64_bits(b"0.1"), 0x3FB999999999999A);
    assert_eq!(f64_bits(b"1e309"), 0x7FF0000000000000);
    assert_eq!(f64_bits(b"5e-324"), 0x0000000000000001);
    assert_eq!(f64_bits(b"2.2250738585072014e-308"), 0x0010000000000000);
    assert_eq!(f64_bits(b"inf"), 0x7FF0000000000000);

    // Ties-to-even rounds 2^24 + 1 down.
    assert_eq!(f32_bits(b"16777217"), 0x4B800000);
}

#[test]
fn general_test() {
    assert_eq!(f64_bits(b"12345.6789"), 0x40C81CD6E631F8A1);
    assert_eq!(f64_bits(b"1e22"), 0x4480F0CF064DD592);
    // One past the largest exact power of ten takes the Lemire path.
    assert_eq!(f64_bits(b"1e23"), 0x44B52D02C7E14AF6);
    assert_eq!(f64_bits(b"123456789012345678901234567890"), 0x45F8EE90FF6C373E);
    assert_eq!(f64_bits(b"1090544144181609348835077142190"), 0x462B8779F2474DFB);
    assert_eq!(f32_bits(b"0.1"), 0x3DCCCCCD);
    assert_eq!(f32_bits(b"33554435"), 0x4C000001);
}

#[test]
fn sign_symmetry_test() {
    for literal in [
        "0",
        "1",
        "0.1",
        "1e309",
        "5e-324",
        "16777217",
        "123456789012345678901234567890",
        "inf",
    ] {
        let positive = parse_float::<f64>(literal.as_bytes()).unwrap();
        let negated = parse_float::<f64>(format!("-{}", literal).as_bytes()).unwrap();
        assert_eq!((-positive).to_bits(), negated.to_bits(), "{}", literal);
        let explicit = parse_float::<f64>(format!("+{}", literal).as_bytes()).unwrap();
        assert_eq!(positive.to_bits(), explicit.to_bits(), "{}", literal);
    }
}

#[test]
fn subnormal_test() {
    assert_eq!(f64_bits(b"4.9406564584124654e-324"), 0x0000000000000001);
    assert_eq!(f64_bits(b"2.2250738585072011e-308"), 0x000FFFFFFFFFFFFF);
    assert_eq!(f64_bits(b"8.98846567431158e307"), 0x7FE0000000000000);
    assert_eq!(f32_bits(b"1.1754943508222875e-38"), 0x00800000);
    assert_eq!(f32_bits(b"1.1754942e-38"), 0x007FFFFF);
    assert_eq!(f32_bits(b"1e-45"), 0x00000001);
}

#[test]
fn infinity_boundary_test() {
    // The double rounding cutoff is 2^1024 - 2^970; just below stays
    // at the largest finite value, at or above rounds to infinity.
    let below = b"1.7976931348623158079372897140530341507993413271003782693617377898044e308";
    let above = b"1.7976931348623158079372897140530341507993413271003782693617377898045e308";
    assert_eq!(f64_bits(below), 0x7FEFFFFFFFFFFFFF);
    assert_eq!(f64_bits(above), 0x7FF0000000000000);
    assert_eq!(f64_bits(b"1.7976931348623157e308"), 0x7FEFFFFFFFFFFFFF);
    assert_eq!(f32_bits(b"3.4028235e38"), 0x7F7FFFFF);
    assert_eq!(f32_bits(b"3.4028236e38"), 0x7F800000);
}

#[test]
fn zero_boundary_test() {
    // Halfway to the smallest subnormal and below rounds to zero.
    assert_eq!(f64_bits(b"2.4703282292062327208828439643411e-324"), 0);
    assert_eq!(f64_bits(b"2.4703282292062327208828439643412e-324"), 1);
    assert_eq!(f64_bits(b"1e-1075"), 0);
    assert_eq!(f64_bits(b"-1e-1075"), 0x8000000000000000);
}

#[test]
fn special_test() {
    assert_eq!(f64_bits(b"infinity"), 0x7FF0000000000000);
    assert_eq!(f64_bits(b"-inf"), 0xFFF0000000000000);
    assert_eq!(f64_bits(b"InFiNiTy"), 0x7FF0000000000000);
    assert!(parse_float::<f64>(b"nan").unwrap().is_nan());
    assert!(parse_float::<f64>(b"-NaN").unwrap().is_nan());
    assert!(parse_float::<f32>(b"NAN").unwrap().is_nan());
    assert_eq!(parse_float::<f64>(b"nan").unwrap().to_bits(), 0x7FF8000000000000);
    assert_eq!(parse_float::<f32>(b"nan").unwrap().to_bits(), 0x7FC00000);
}

#[test]
fn consumed_count_test() {
    let (value, len) = parse_partial_float::<f64>(b"12345.67 narnia").unwrap();
    assert_eq!((value, len), (12345.67, 8));

    let (value, len) = parse_partial_float::<f64>(b"1e+5x").unwrap();
    assert_eq!((value, len), (1e5, 4));

    // A dangling exponent marker is trailing data.
    let (value, len) = parse_partial_float::<f64>(b"1e+x").unwrap();
    assert_eq!((value, len), (1.0, 1));

    let (value, len) = parse_partial_float::<f64>(b"+.5x").unwrap();
    assert_eq!((value, len), (0.5, 3));

    let (value, len) = parse_partial_float::<f64>(b"inf inity").unwrap();
    assert_eq!((value, len), (f64::INFINITY, 3));

    let (value, len) = parse_partial_float::<f64>(b"-infinity!").unwrap();
    assert_eq!((value, len), (f64::NEG_INFINITY, 9));

    let (value, len) = parse_partial_float::<f64>(b"0x1.8p2 tail").unwrap();
    assert_eq!((value, len), (6.0, 7));
}

#[test]
fn strict_test() {
    // Strict parsing fails exactly when partial parsing leaves a tail.
    assert_eq!(parse_float::<f64>(b"1.5x"), Err(Error::Invalid));
    assert_eq!(parse_float::<f64>(b"1e"), Err(Error::Invalid));
    assert_eq!(parse_float::<f64>(b"1.5 "), Err(Error::Invalid));
    assert!(parse_float::<f64>(b"1.5").is_ok());
}

#[test]
fn error_test() {
    assert_eq!(parse_float::<f64>(b""), Err(Error::Invalid));
    assert_eq!(parse_float::<f64>(b"-"), Err(Error::UnexpectedEnd));
    assert_eq!(parse_float::<f64>(b"+"), Err(Error::UnexpectedEnd));
    assert_eq!(parse_float::<f64>(b"."), Err(Error::NoDigits));
    assert_eq!(parse_float::<f64>(b"e5"), Err(Error::NoDigits));
    assert_eq!(parse_float::<f64>(b"in"), Err(Error::InvalidSpecial));
    assert_eq!(parse_float::<f64>(b"none"), Err(Error::InvalidSpecial));
    assert_eq!(parse_float::<f64>(b"0xp1"), Err(Error::NoHexDigits));
    assert_eq!(parse_float::<f64>(b"0x1"), Err(Error::UnexpectedEnd));
    assert_eq!(parse_float::<f64>(b"0x1p"), Err(Error::NoDigits));
    assert_eq!(parse_float::<f64>(b"0x1p+"), Err(Error::NoDigits));
    assert_eq!(parse_float::<f64>(b"0x1p99999999999"), Err(Error::Range));
}

#[test]
fn error_message_test() {
    assert_eq!(Error::Invalid.to_string(), "Floating point conversion error");
    assert_eq!(Error::UnexpectedEnd.to_string(), "Unexpected end of input");
    assert_eq!(Error::NoDigits.to_string(), "no digits seen");
    assert_eq!(Error::NoHexDigits.to_string(), "No digits seen.");
    assert_eq!(Error::Range.to_string(), "Range error");
    assert_eq!(
        Error::InvalidSpecial.to_string(),
        "error converting input to floating point"
    );
}

#[test]
fn idempotence_test() {
    // Shortest round-trippable formatting re-parses to the same bits.
    for bits in [
        0x3FB999999999999A_u64,
        0x0000000000000001,
        0x0010000000000000,
        0x7FEFFFFFFFFFFFFF,
        0x4480F0CF064DD592,
        0x000FFFFFFFFFFFFF,
    ] {
        let value = f64::from_bits(bits);
        let formatted = format!("{:e}", value);
        assert_eq!(f64_bits(formatted.as_bytes()), bits, "{}", formatted);
    }
}

#[test]
fn truncated_mantissa_test() {
    // 770 digits saturate the big-decimal buffer.
    let ones = "1".repeat(770);
    assert_eq!(f64_bits(ones.as_bytes()), 0x7FF0000000000000);

    let long = format!("0.{}1", "0".repeat(300));
    assert_eq!(f64_bits(long.as_bytes()), f64_bits(b"1e-301"));

    // Fractions on either side of the spacing-2 halfway point.
    let tie_down = b"9007199254740992.5";
    let tie_up = b"9007199254740993.5";
    assert_eq!(f64_bits(tie_down), 0x4340000000000000);
    assert_eq!(f64_bits(tie_up), 0x4340000000000001);
}
