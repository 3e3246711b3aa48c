//! Reference year fractions for the built-in day-count conventions.

use lg_time::{Actual360, Actual365Fixed, ActualActualIsda, Date, DayCounter, Thirty360};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Actual/Actual (ISDA) ─────────────────────────────────────────────────────

#[test]
fn test_actual_actual_isda() {
    let dc = ActualActualIsda;

    let cases: Vec<(Date, Date, f64)> = vec![
        (date(2003, 11, 1), date(2004, 5, 1), 0.497724380567),
        (date(1999, 2, 1), date(1999, 7, 1), 0.410958904110),
        (date(1999, 7, 1), date(2000, 7, 1), 1.001377348600),
        (date(2002, 8, 15), date(2003, 7, 15), 0.915068493151),
        (date(2003, 7, 15), date(2004, 1, 15), 0.504004790778),
        (date(1999, 7, 30), date(2000, 1, 30), 0.503892506924),
        (date(2000, 1, 30), date(2000, 6, 30), 0.415300546448),
    ];

    for (i, (d1, d2, expected)) in cases.iter().enumerate() {
        let calculated = dc.year_fraction(*d1, *d2);
        assert!(
            (calculated - expected).abs() < 1.0e-10,
            "ISDA case {i}: from {d1} to {d2}: calculated {calculated:.12}, expected {expected:.12}"
        );
    }
}

#[test]
fn test_multi_year_isda_span() {
    let dc = ActualActualIsda;
    // 2023-07-01 → 2026-07-01: 184/365 + 2 full years + 181/365
    let expected = 184.0 / 365.0 + 2.0 + 181.0 / 365.0;
    let calculated = dc.year_fraction(date(2023, 7, 1), date(2026, 7, 1));
    assert!((calculated - expected).abs() < 1e-12, "{calculated} vs {expected}");
}

// ─── Simple conventions ───────────────────────────────────────────────────────

#[test]
fn test_names() {
    assert_eq!(Actual365Fixed.name(), "Actual/365 (Fixed)");
    assert_eq!(Actual360.name(), "Actual/360");
    assert_eq!(Thirty360.name(), "30/360");
    assert_eq!(ActualActualIsda.name(), "Actual/Actual (ISDA)");
}

#[test]
fn test_actual_conventions_share_day_count() {
    let (d1, d2) = (date(2025, 1, 15), date(2026, 1, 15));
    assert_eq!(Actual365Fixed.day_count(d1, d2), 365);
    assert_eq!(Actual360.day_count(d1, d2), 365);
    assert!((Actual360.year_fraction(d1, d2) - 365.0 / 360.0).abs() < 1e-15);
}

proptest! {
    #[test]
    fn year_fraction_is_additive(a in 0i64..4000, b in 0i64..4000) {
        let base = date(2000, 1, 1);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let d1 = base.add_days(lo).unwrap();
        let d2 = base.add_days(hi).unwrap();
        let mid = base.add_days((lo + hi) / 2).unwrap();
        for dc in [&Actual365Fixed as &dyn DayCounter, &Actual360, &ActualActualIsda] {
            let whole = dc.year_fraction(d1, d2);
            let split = dc.year_fraction(d1, mid) + dc.year_fraction(mid, d2);
            prop_assert!((whole - split).abs() < 1e-12);
            prop_assert!(whole >= 0.0);
        }
    }
}
