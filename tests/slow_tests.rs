use exact_lexical::slow::parse_long_mantissa;

fn slow64(bytes: &[u8]) -> (u64, i32) {
    let fp = parse_long_mantissa::<f64>(bytes);
    (fp.f, fp.e)
}

fn slow32(bytes: &[u8]) -> (u64, i32) {
    let fp = parse_long_mantissa::<f32>(bytes);
    (fp.f, fp.e)
}

#[test]
fn simple_test() {
    assert_eq!(slow64(b"0.1"), (2702159776422298, 1019));
    assert_eq!(slow64(b"12.34e5"), (796390015893504, 1043));
    assert_eq!(slow64(b"3.243"), (2798987168410763, 1024));
    assert_eq!(slow32(b"16777217"), (0, 151));
}

#[test]
fn halfway_test() {
    // The tie at the 2^53 spacing boundary rounds to even.
    assert_eq!(slow64(b"9007199254740993"), (0, 1076));
}

#[test]
fn subnormal_boundary_test() {
    // Halfway between zero and the smallest subnormal, and one digit
    // above it.
    assert_eq!(slow64(b"2.4703282292062327208828439643411e-324"), (0, 0));
    assert_eq!(slow64(b"2.4703282292062327208828439643412e-324"), (1, 0));
}

#[test]
fn infinity_boundary_test() {
    // Digit strings either side of 2^1024 - 2^970, the overflow
    // cutoff.
    let below = b"1.7976931348623158079372897140530341507993413271003782693617377898044e308";
    let above = b"1.7976931348623158079372897140530341507993413271003782693617377898045e308";
    assert_eq!(slow64(below), (4503599627370495, 2046));
    assert_eq!(slow64(above), (0, 2047));
}

#[test]
fn saturated_test() {
    // 770 digits of ones is far past the largest double.
    let ones = "1".repeat(770);
    assert_eq!(slow64(ones.as_bytes()), (0, 2047));

    // And a deeply negative decimal point is a literal zero.
    assert_eq!(slow64(b"1e-400"), (0, 0));
}
