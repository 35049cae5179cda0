use exact_lexical::fp::BiasedFp;
use exact_lexical::lemire::compute_float;

fn compute_float64(q: i64, w: u64) -> (u64, i32) {
    let fp = compute_float::<f64>(q, w);
    (fp.f, fp.e)
}

fn compute_float32(q: i64, w: u64) -> (u64, i32) {
    let fp = compute_float::<f32>(q, w);
    (fp.f, fp.e)
}

#[test]
fn halfway_round_down_test() {
    // Exact halves at the 2^53 spacing boundary resolve to even
    // without escalating to the slow path.
    assert_eq!(compute_float64(0, 9007199254740992), (0, 1076));
    assert_eq!(compute_float64(0, 9007199254740993), (0, 1076));
    assert_eq!(compute_float64(0, 9007199254740994), (1, 1076));
    assert_eq!(compute_float64(0, 9007199254740995), (2, 1076));

    // The same tie disguised behind a power of ten.
    assert_eq!(compute_float64(-3, 9007199254740993000), (0, 1076));
}

#[test]
fn boundary_test() {
    assert_eq!(compute_float64(0, 1), (0, 1023));
    assert_eq!(compute_float64(-1, 1), (2702159776422298, 1019));

    // Exponents past the table resolve immediately.
    assert_eq!(compute_float64(-343, 1), (0, 0));
    assert_eq!(compute_float64(309, 1), (0, 2047));

    // The largest finite double overflows on the mantissa, not the
    // table.
    assert_eq!(compute_float64(308, 17976931348623157), (0, 2047));
}

#[test]
fn subnormal_test() {
    // Deep subnormal: the mantissa shrinks with the biased exponent
    // pinned at zero.
    assert_eq!(compute_float64(-326, 12345678901234567), (24987932282184, 0));
    assert_eq!(compute_float64(-342, 2), (0, 0));
    assert_eq!(compute_float64(-324, 49406564584124654), (496400372629504, 2));
    assert_eq!(compute_float32(-45, 1), (1, 0));
    assert_eq!(compute_float32(-46, 7006492321624085), (6512553, 26));
}

#[test]
fn single_precision_test() {
    // 2^24 + 1 is a tie in f32 and rounds down to even.
    assert_eq!(compute_float32(0, 16777217), (0, 151));
    assert_eq!(compute_float32(0, 16777216), (0, 151));
    assert_eq!(compute_float32(0, 16777218), (1, 151));

    // Either side of the f32 overflow cutoff.
    assert_eq!(compute_float32(31, 34028235), (8388607, 254));
    assert_eq!(compute_float32(31, 34028236), (0, 255));
    assert_eq!(compute_float32(38, 1), (1472153, 253));
}

#[test]
fn zero_mantissa_test() {
    assert_eq!(compute_float64(0, 0), (0, 0));
    assert_eq!(compute_float64(300, 0), (0, 0));
    assert_eq!(compute_float::<f64>(0, 0), BiasedFp::zero_pow2(0));
}
