use exact_lexical::decimal::{parse_decimal, Decimal};

#[test]
fn parse_decimal_test() {
    let d = parse_decimal(b"123.456e-4");
    assert_eq!(d.num_digits, 6);
    assert_eq!(d.decimal_point, -1);
    assert!(!d.truncated);
    assert_eq!(&d.digits[..6], &[1, 2, 3, 4, 5, 6]);

    // Trailing zeros of the significand are dropped.
    let d = parse_decimal(b"1230000");
    assert_eq!(d.num_digits, 3);
    assert_eq!(d.decimal_point, 7);

    // Leading zeros of a fraction only move the decimal point.
    let d = parse_decimal(b"1e-3000");
    assert_eq!(d.num_digits, 1);
    assert_eq!(d.decimal_point, -2999);
}

#[test]
fn parse_decimal_truncated_test() {
    // 780 significant digits exceed the capacity and set the sticky
    // flag for rounding.
    let long = format!("0.000{}", "1".repeat(780));
    let d = parse_decimal(long.as_bytes());
    assert_eq!(d.num_digits, Decimal::MAX_DIGITS);
    assert_eq!(d.decimal_point, -3);
    assert!(d.truncated);
}

#[test]
fn round_test() {
    assert_eq!(parse_decimal(b"17.9").round(), 18);

    // Ties resolve on the parity of the integer digit.
    assert_eq!(parse_decimal(b"2.5").round(), 2);
    assert_eq!(parse_decimal(b"3.5").round(), 4);

    // A truncated tail means the value exceeds the half, so it rounds
    // up regardless of parity.
    let mut d = parse_decimal(b"2.5");
    d.truncated = true;
    assert_eq!(d.round(), 3);
}

#[test]
fn left_shift_test() {
    let mut d = parse_decimal(b"123");
    d.left_shift(7);
    assert_eq!(&d.digits[..d.num_digits], &[1, 5, 7, 4, 4]);
    assert_eq!(d.decimal_point, 5);

    d.right_shift(7);
    assert_eq!(&d.digits[..d.num_digits], &[1, 2, 3]);
    assert_eq!(d.decimal_point, 3);
    assert!(!d.truncated);
}

#[test]
fn right_shift_test() {
    // 25 / 2^60 needs 44 digits but stays exact.
    let mut d = parse_decimal(b"25");
    d.right_shift(60);
    assert_eq!(d.num_digits, 44);
    assert_eq!(d.decimal_point, -16);
    assert_eq!(&d.digits[..8], &[2, 1, 6, 8, 4, 0, 4, 3]);
    assert!(!d.truncated);

    let mut d = parse_decimal(b"1");
    d.right_shift(60);
    assert_eq!(d.num_digits, 42);
    assert_eq!(d.decimal_point, -18);
    assert_eq!(&d.digits[..8], &[8, 6, 7, 3, 6, 1, 7, 3]);
}

#[test]
fn shift_collapse_test() {
    // Shifting far below the decimal-point range collapses the value
    // to a literal zero.
    let mut d = parse_decimal(b"1e-2040");
    for _ in 0..3 {
        d.right_shift(60);
    }
    assert_eq!(d.num_digits, 0);
    assert_eq!(d.decimal_point, 0);
}
