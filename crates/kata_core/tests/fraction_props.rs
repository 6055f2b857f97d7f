//! Property tests for Fraction reduction, equality and indexed access.

use kata_core::{CoreError, Fraction};
use proptest::prelude::*;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn nonzero() -> impl Strategy<Value = i32> {
    prop_oneof![-10_000i32..=-1, 1i32..=10_000]
}

proptest! {
    #[test]
    fn of_is_lowest_terms_and_same_value(n in -10_000i32..=10_000, d in nonzero()) {
        let f = Fraction::of(n, d).unwrap();
        let (fn_, fd) = f.parts();
        prop_assert_eq!(gcd(fn_.unsigned_abs() as u64, fd.unsigned_abs() as u64), 1);
        // Same rational: n * fd == fn * d
        prop_assert_eq!(i64::from(n) * i64::from(fd), i64::from(fn_) * i64::from(d));
    }

    #[test]
    fn zero_denominator_always_rejected(n in any::<i32>()) {
        prop_assert_eq!(Fraction::of(n, 0), Err(CoreError::ZeroDenominator));
    }

    #[test]
    fn equality_laws(a in -500i32..=500, b in nonzero(), k in 1i32..=20) {
        let x = Fraction::of(a, b).unwrap();
        let scaled = x.copy_with(Some(x.numerator() * k), Some(x.denominator() * k)).unwrap();
        let again = Fraction::of(a * k, b * k).unwrap();
        // reflexive
        prop_assert_eq!(x, x);
        // symmetric
        prop_assert_eq!(x == scaled, scaled == x);
        // transitive through an unreduced middle term
        prop_assert!(x == scaled && scaled == again && x == again);
    }

    #[test]
    fn index_matches_parts(n in -1000i32..=1000, d in nonzero(), idx in 2usize..64) {
        let f = Fraction::of(n, d).unwrap();
        prop_assert_eq!(f.get(0), Ok(f.numerator()));
        prop_assert_eq!(f.get(1), Ok(f.denominator()));
        prop_assert_eq!(f.get(idx), Err(CoreError::IndexOutOfBounds(idx)));
    }

    #[test]
    fn sum_and_product_match_value(a in -300i32..=300, b in nonzero(), c in -300i32..=300, d in nonzero()) {
        let x = Fraction::of(a, b).unwrap();
        let y = Fraction::of(c, d).unwrap();
        let sum = x + y;
        let prod = x * y;
        let xd = i64::from(x.denominator());
        let yd = i64::from(y.denominator());
        let xn = i64::from(x.numerator());
        let yn = i64::from(y.numerator());
        prop_assert_eq!(i64::from(sum.numerator()), xn * yd + yn * xd);
        prop_assert_eq!(i64::from(sum.denominator()), xd * yd);
        prop_assert_eq!(i64::from(prod.numerator()), xn * yn);
        prop_assert_eq!(i64::from(prod.denominator()), xd * yd);
    }

    #[test]
    fn display_parses_back_to_equal_value(n in any::<i32>(), d in nonzero()) {
        let f = Fraction::of(n, d).unwrap();
        let back: Fraction = f.to_string().parse().unwrap();
        prop_assert_eq!(back, f);
    }
}
