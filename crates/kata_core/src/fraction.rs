//! crates/kata_core/src/fraction.rs
//! Immutable rational value over `i32` terms.
//!
//! Notes:
//! - Only `Fraction::of` reduces by GCD. Operator results keep whatever terms
//!   the arithmetic produced; route them back through `of` for lowest terms.
//! - Sign is never canonicalized: `of(1, -2)` keeps the negative denominator.
//! - Equality is exact (cross-multiply in `i64`). Ordering compares the `f64`
//!   decimal values and inherits their rounding for large terms, so `Ord`
//!   disagrees with `Eq` in places (`0/-1` vs `0/1`). Keep fractions out of
//!   ordered-collection keys.
//! - `Hash` reads the literal fields, so `1/2` and `2/4` (built through
//!   `copy_with`) compare equal yet hash differently.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Index, Mul, Neg};
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::errors::CoreError;

/// Rational number `numerator / denominator` with a non-zero denominator.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `floor(x + 0.5)` computed without `std` float intrinsics.
/// Ties go toward +inf; values past the `i64` range saturate.
fn round_half_up(x: f64) -> i64 {
    let t = x as i64;
    let floor = if (t as f64) > x { t.saturating_sub(1) } else { t };
    if x - (floor as f64) >= 0.5 {
        floor.saturating_add(1)
    } else {
        floor
    }
}

impl Fraction {
    /// Non-reducing constructor shared by every operator path.
    #[inline]
    fn raw(numerator: i32, denominator: i32) -> Result<Self, CoreError> {
        if denominator == 0 {
            return Err(CoreError::ZeroDenominator);
        }
        Ok(Self { numerator, denominator })
    }

    /// Narrow widened terms back to `i32`, checking the denominator first.
    fn from_wide(numerator: i64, denominator: i64, ctx: &'static str) -> Result<Self, CoreError> {
        if denominator == 0 {
            return Err(CoreError::ZeroDenominator);
        }
        let n = i32::try_from(numerator).map_err(|_| CoreError::Overflow(ctx))?;
        let d = i32::try_from(denominator).map_err(|_| CoreError::Overflow(ctx))?;
        Ok(Self { numerator: n, denominator: d })
    }

    /// Build `numerator / denominator` reduced by `gcd(|numerator|, |denominator|)`.
    ///
    /// `of(0, d)` gives `0/1` for positive `d` (the gcd is `|d|`).
    pub fn of(numerator: i32, denominator: i32) -> Result<Self, CoreError> {
        if denominator == 0 {
            return Err(CoreError::ZeroDenominator);
        }
        let g = i64::from(gcd_u32(numerator.unsigned_abs(), denominator.unsigned_abs()));
        Self::from_wide(i64::from(numerator) / g, i64::from(denominator) / g, "reduce")
    }

    /// Whole number `n/1`.
    #[inline]
    pub const fn of_int(n: i32) -> Self {
        Self { numerator: n, denominator: 1 }
    }

    #[inline]
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Floating-point quotient used for ordering and numeric conversions.
    #[inline]
    pub fn decimal_value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Positional decomposition: `let (n, d) = f.parts();`
    #[inline]
    pub const fn parts(self) -> (i32, i32) {
        (self.numerator, self.denominator)
    }

    /// Indexed access: 0 → numerator, 1 → denominator.
    pub fn get(&self, index: usize) -> Result<i32, CoreError> {
        match index {
            0 => Ok(self.numerator),
            1 => Ok(self.denominator),
            other => Err(CoreError::IndexOutOfBounds(other)),
        }
    }

    /// New fraction with selectively overridden terms. Not re-reduced.
    pub fn copy_with(self, numerator: Option<i32>, denominator: Option<i32>) -> Result<Self, CoreError> {
        Self::raw(
            numerator.unwrap_or(self.numerator),
            denominator.unwrap_or(self.denominator),
        )
    }

    #[inline]
    pub fn with_numerator(self, numerator: i32) -> Self {
        Self { numerator, ..self }
    }

    #[inline]
    pub fn with_denominator(self, denominator: i32) -> Result<Self, CoreError> {
        Self::raw(self.numerator, denominator)
    }

    // ---------------------------------------------------------------- unary

    /// Unary plus: both terms forced non-negative.
    pub fn checked_abs(self) -> Result<Self, CoreError> {
        let n = self.numerator.checked_abs().ok_or(CoreError::Overflow("abs"))?;
        let d = self.denominator.checked_abs().ok_or(CoreError::Overflow("abs"))?;
        Self::raw(n, d)
    }

    /// Unary minus: numerator negated, denominator forced non-negative.
    pub fn checked_neg(self) -> Result<Self, CoreError> {
        let n = self.numerator.checked_neg().ok_or(CoreError::Overflow("neg"))?;
        let d = self.denominator.checked_abs().ok_or(CoreError::Overflow("neg"))?;
        Self::raw(n, d)
    }

    /// Unary plus.
    ///
    /// # Panics
    /// When a term is `i32::MIN`, like `i32::abs` in debug builds.
    pub fn abs(self) -> Self {
        match self.checked_abs() {
            Ok(f) => f,
            Err(e) => panic!("fraction abs failed: {e}"),
        }
    }

    // ----------------------------------------------------------- arithmetic

    /// `(a/b) + (c/d) = (a*d + c*b) / (b*d)`
    pub fn checked_add(self, rhs: Fraction) -> Result<Self, CoreError> {
        let (a, b) = (i64::from(self.numerator), i64::from(self.denominator));
        let (c, d) = (i64::from(rhs.numerator), i64::from(rhs.denominator));
        let n = (a * d).checked_add(c * b).ok_or(CoreError::Overflow("add"))?;
        Self::from_wide(n, b * d, "add")
    }

    /// `(a/b) + n = (a + n*b) / b`
    pub fn checked_add_int(self, rhs: i32) -> Result<Self, CoreError> {
        let (a, b) = (i64::from(self.numerator), i64::from(self.denominator));
        Self::from_wide(a + i64::from(rhs) * b, b, "add")
    }

    /// `(a/b) * (c/d) = (a*c) / (b*d)`
    pub fn checked_mul(self, rhs: Fraction) -> Result<Self, CoreError> {
        let n = i64::from(self.numerator) * i64::from(rhs.numerator);
        let d = i64::from(self.denominator) * i64::from(rhs.denominator);
        Self::from_wide(n, d, "mul")
    }

    /// `(a/b) * n = (a*n) / b`
    pub fn checked_mul_int(self, rhs: i32) -> Result<Self, CoreError> {
        let n = i64::from(self.numerator) * i64::from(rhs);
        Self::from_wide(n, i64::from(self.denominator), "mul")
    }

    // ---------------------------------------------------------- conversions

    /// Nearest `i32`, ties toward +inf, saturating at the `i32` range.
    pub fn round_to_i32(&self) -> i32 {
        let r = round_half_up(self.decimal_value());
        r.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Nearest `i64`, ties toward +inf.
    pub fn round_to_i64(&self) -> i64 {
        round_half_up(self.decimal_value())
    }

    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.decimal_value() as f32
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.decimal_value()
    }

    /// Java-style `31 * numerator + denominator` over the literal terms.
    /// Used by `Hash`; not normalized.
    #[inline]
    pub fn hash_code(&self) -> i32 {
        31i32.wrapping_mul(self.numerator).wrapping_add(self.denominator)
    }
}

/* ----------------------------- Operator impls ----------------------------- */

// Operators panic on zero denominators or overflow, the same way integer `/`
// does; the `checked_*` methods are the fallible forms.

impl Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Fraction {
        match self.checked_add(rhs) {
            Ok(f) => f,
            Err(e) => panic!("fraction addition failed: {e}"),
        }
    }
}

impl Add<i32> for Fraction {
    type Output = Fraction;
    fn add(self, rhs: i32) -> Fraction {
        match self.checked_add_int(rhs) {
            Ok(f) => f,
            Err(e) => panic!("fraction addition failed: {e}"),
        }
    }
}

impl Mul for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Fraction {
        match self.checked_mul(rhs) {
            Ok(f) => f,
            Err(e) => panic!("fraction multiplication failed: {e}"),
        }
    }
}

impl Mul<i32> for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: i32) -> Fraction {
        match self.checked_mul_int(rhs) {
            Ok(f) => f,
            Err(e) => panic!("fraction multiplication failed: {e}"),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        match self.checked_neg() {
            Ok(f) => f,
            Err(e) => panic!("fraction negation failed: {e}"),
        }
    }
}

impl Index<usize> for Fraction {
    type Output = i32;

    /// # Panics
    /// For any index other than 0 or 1, like slice indexing.
    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.numerator,
            1 => &self.denominator,
            other => panic!("{}", CoreError::IndexOutOfBounds(other)),
        }
    }
}

/* ------------------------ Equality, hashing, order ------------------------ */

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        i64::from(self.numerator) * i64::from(other.denominator)
            == i64::from(other.numerator) * i64::from(self.denominator)
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Total order over the decimal values (`f64::total_cmp`). Not consistent
/// with `Eq`: `0/-1 == 0/1` yet `0/-1 < 0/1`, and large terms that differ can
/// round to the same `f64`. Do not use `Fraction` as a `BTreeMap`/`BTreeSet`
/// key.
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decimal_value().total_cmp(&other.decimal_value())
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------------- Conversions ------------------------------ */

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Split `n` or `n/d` (surrounding whitespace allowed) and hand the terms to
/// `build`. A bare integer has denominator 1.
fn parse_terms(
    s: &str,
    build: fn(i32, i32) -> Result<Fraction, CoreError>,
) -> Result<Fraction, CoreError> {
    let s = s.trim();
    let (n, d) = match s.split_once('/') {
        Some((n, d)) => (n.trim(), d.trim()),
        None => (s, "1"),
    };
    let n: i32 = n.parse().map_err(|_| CoreError::InvalidFraction)?;
    let d: i32 = d.parse().map_err(|_| CoreError::InvalidFraction)?;
    build(n, d)
}

impl FromStr for Fraction {
    type Err = CoreError;

    /// Accepts `n` or `n/d`; reduces via `of`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_terms(s, Fraction::of)
    }
}

/// Wire form: keeps the terms as written, so an unreduced `"2/4"` comes back
/// as `2/4` with the same `hash_code`. Zero denominators are rejected.
impl TryFrom<String> for Fraction {
    type Error = CoreError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_terms(&value, Fraction::raw)
    }
}

impl From<Fraction> for String {
    fn from(f: Fraction) -> Self {
        f.to_string()
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(n: i32) -> Self {
        Fraction::of_int(n)
    }
}

impl From<Fraction> for (i32, i32) {
    #[inline]
    fn from(f: Fraction) -> Self {
        f.parts()
    }
}

impl From<Fraction> for f64 {
    #[inline]
    fn from(f: Fraction) -> Self {
        f.decimal_value()
    }
}

/// `2.over(4)` reads as `2/4` and goes through `Fraction::of`.
pub trait Over {
    fn over(self, denominator: i32) -> Result<Fraction, CoreError>;
}

impl Over for i32 {
    #[inline]
    fn over(self, denominator: i32) -> Result<Fraction, CoreError> {
        Fraction::of(self, denominator)
    }
}

// ------------------------------
// Tests
// ------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn f(n: i32, d: i32) -> Fraction {
        Fraction::of(n, d).unwrap()
    }

    fn hash_of(x: &Fraction) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn of_reduces_to_lowest_terms() {
        assert_eq!(f(2, 4).parts(), (1, 2));
        assert_eq!(f(-6, 9).parts(), (-2, 3));
        assert_eq!(f(6, -9).parts(), (2, -3));
        assert_eq!(f(0, 5).parts(), (0, 1));
        assert_eq!(f(i32::MIN, i32::MIN).parts(), (-1, -1));
    }

    #[test]
    fn zero_over_negative_keeps_sign() {
        let neg_zero = f(0, -5);
        assert_eq!(neg_zero.parts(), (0, -1));
        assert_eq!(neg_zero, f(0, 5));
        assert!(neg_zero < f(0, 5));
        assert_ne!(neg_zero.cmp(&f(0, 5)), Ordering::Equal);
    }

    #[test]
    fn wire_string_keeps_terms() {
        let x = Fraction::try_from(String::from("2/4")).unwrap();
        assert_eq!(x.parts(), (2, 4));
        assert_eq!(Fraction::try_from(String::from(" -3 ")).unwrap().parts(), (-3, 1));
        assert_eq!(Fraction::try_from(String::from("1/0")), Err(CoreError::ZeroDenominator));
        assert_eq!(Fraction::try_from(String::from("1/x")), Err(CoreError::InvalidFraction));
        // FromStr still reduces
        assert_eq!("2/4".parse::<Fraction>().unwrap().parts(), (1, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_keeps_unreduced_terms() {
        let unreduced = f(1, 2).copy_with(Some(2), Some(4)).unwrap();
        let json = serde_json::to_string(&unreduced).unwrap();
        assert_eq!(json, r#""2/4""#);
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.parts(), (2, 4));
        assert_eq!(back.hash_code(), unreduced.hash_code());

        let product = f(1, 2) * f(2, 3);
        let back: Fraction = serde_json::from_str(&serde_json::to_string(&product).unwrap()).unwrap();
        assert_eq!(back.parts(), (2, 6));

        assert!(serde_json::from_str::<Fraction>(r#""1/0""#).is_err());
    }

    #[test]
    fn of_rejects_zero_denominator() {
        assert_eq!(Fraction::of(1, 0), Err(CoreError::ZeroDenominator));
        assert_eq!(Fraction::of(0, 0), Err(CoreError::ZeroDenominator));
        assert!(CoreError::ZeroDenominator.is_invalid_argument());
    }

    #[test]
    fn of_int_and_over() {
        assert_eq!(Fraction::of_int(8).parts(), (8, 1));
        assert_eq!(2_i32.over(4).unwrap().parts(), (1, 2));
        assert!(1_i32.over(0).is_err());
    }

    #[test]
    fn unary_ops() {
        assert_eq!(f(2, 4).abs().parts(), (1, 2));
        assert_eq!(f(-1, -3).abs().parts(), (1, 3));
        assert_eq!((-f(2, 6)).parts(), (-1, 3));
        assert_eq!((-f(1, -3)).parts(), (-1, 3));
        assert!(Fraction::of_int(i32::MIN).checked_neg().is_err());
    }

    #[test]
    fn addition() {
        assert_eq!(f(1, 2) + f(2, 3), f(7, 6));
        assert_eq!((f(1, 2) + f(2, 3)).parts(), (7, 6));
        assert_eq!(f(1, 2) + 1, f(3, 2));
        // Not reduced: 1/2 + 1/2 = 4/4
        assert_eq!((f(1, 2) + f(1, 2)).parts(), (4, 4));
    }

    #[test]
    fn multiplication() {
        assert_eq!(f(1, 2) * f(2, 3), f(1, 3));
        assert_eq!((f(1, 2) * f(2, 3)).parts(), (2, 6));
        assert_eq!(f(1, 2) * 2, f(1, 1));
        assert_eq!((f(1, 2) * 2).parts(), (2, 2));
    }

    #[test]
    fn arithmetic_overflow_is_reported() {
        let big = f(1, 65_536);
        assert_eq!(big.checked_mul(big), Err(CoreError::Overflow("mul")));
        assert!(Fraction::of_int(i32::MAX).checked_add_int(1).is_err());
    }

    #[test]
    #[should_panic(expected = "fraction multiplication failed")]
    fn operator_panics_on_overflow() {
        let big = f(1, 65_536);
        let _ = big * big;
    }

    #[test]
    fn ordering_uses_decimal_value() {
        assert!(f(3, 2) > f(2, 2));
        assert!(f(1, 2) <= f(2, 4));
        assert!(f(4, 6) >= f(2, 3));
        assert!(f(-1, 2) < Fraction::of_int(0));
        let mut xs = vec![f(3, 4), f(1, 3), f(1, 2)];
        xs.sort();
        assert_eq!(xs, vec![f(1, 3), f(1, 2), f(3, 4)]);
    }

    #[test]
    fn equality_is_value_based() {
        assert_eq!(f(1, 2), f(2, 4));
        assert_eq!(f(1, 2), f(1, 2));
        assert_ne!(f(1, 3), f(3, 5));
        let unreduced = f(1, 2).copy_with(Some(2), Some(4)).unwrap();
        assert_eq!(unreduced, f(1, 2));
        assert_eq!(f(1, -2), f(-1, 2));
    }

    #[test]
    fn hash_reads_literal_terms() {
        assert_eq!(hash_of(&f(1, 2)), hash_of(&f(1, 2)));
        assert_eq!(hash_of(&f(1, 2)), hash_of(&f(2, 4)));
        assert_ne!(f(1, 3).hash_code(), f(3, 5).hash_code());

        let unreduced = f(1, 2).copy_with(Some(2), Some(4)).unwrap();
        assert_eq!(unreduced, f(1, 2));
        assert_eq!(f(1, 2).hash_code(), 33);
        assert_eq!(unreduced.hash_code(), 66);
        assert_ne!(hash_of(&unreduced), hash_of(&f(1, 2)));
    }

    #[test]
    fn indexed_access() {
        let x = f(1, 2);
        assert_eq!(x[0], 1);
        assert_eq!(x[1], 2);
        assert_eq!(x.get(0), Ok(1));
        assert_eq!(x.get(1), Ok(2));
        assert_eq!(x.get(2), Err(CoreError::IndexOutOfBounds(2)));
    }

    #[test]
    #[should_panic(expected = "index must be 0 or 1")]
    fn index_out_of_bounds_panics() {
        let _ = f(1, 2)[2];
    }

    #[test]
    fn destructuring() {
        let (n, d) = f(1, 2).parts();
        assert_eq!((n, d), (1, 2));
        let (n, _): (i32, i32) = f(3, 4).into();
        assert_eq!(n, 3);
    }

    #[test]
    fn copy_overrides_without_reducing() {
        let x = f(1, 2);
        assert_eq!(x.copy_with(None, None).unwrap(), x);
        let y = x.copy_with(Some(2), None).unwrap();
        assert_eq!(y.parts(), (2, 2));
        assert_eq!(x.with_numerator(6).parts(), (6, 2));
        assert_eq!(x.with_denominator(0), Err(CoreError::ZeroDenominator));
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(f(1, 2).round_to_i32(), 1);
        assert_eq!(f(-1, 2).round_to_i32(), 0);
        assert_eq!(f(-3, 2).round_to_i64(), -1);
        assert_eq!(f(7, 3).round_to_i64(), 2);
        assert_eq!(f(-7, 3).round_to_i32(), -2);
        assert_eq!(f(1, 4).to_f32(), 0.25f32);
        assert_eq!(f(1, 4).to_f64(), 0.25f64);
        assert_eq!(f64::from(f(3, 4)), 0.75);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(f(1, 2).to_string(), "1/2");
        assert_eq!(f(1, -2).to_string(), "1/-2");
        assert_eq!("2/4".parse::<Fraction>().unwrap().parts(), (1, 2));
        assert_eq!(" 8 ".parse::<Fraction>().unwrap().parts(), (8, 1));
        assert_eq!("1/0".parse::<Fraction>(), Err(CoreError::ZeroDenominator));
        assert_eq!("a/b".parse::<Fraction>(), Err(CoreError::InvalidFraction));
        assert_eq!("".parse::<Fraction>(), Err(CoreError::InvalidFraction));
    }
}
