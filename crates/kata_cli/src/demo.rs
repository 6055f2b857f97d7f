//! Console demos. Each writes plain lines to `out` and returns the first error.

use std::io::Write;
use std::path::Path;

use kata_catalog::{
    count_of_each_product, delivered_orders, delivered_products, partition_delivered,
    product_list, product_set, sample, sorted_by_price_then_favorites_desc, Catalog, Order,
    Product,
};
use kata_core::{Fraction, Over, UserProfile};
use kata_io::prelude::{build_summary, load_catalog, to_canonical_string};

use crate::args::{CalcOp, FractionCmd};
use crate::MainError;

const SAMPLE_BIO: &str = "RxMobileTeam is a mobile full-stack development team.\n\n\n\n\n                 \n";

pub(crate) fn fraction(cmd: &FractionCmd, out: &mut impl Write) -> Result<(), MainError> {
    match cmd {
        FractionCmd::Demo => fraction_demo(out),
        FractionCmd::Calc { lhs, op, rhs } => {
            let line = calc(lhs, *op, rhs)?;
            writeln!(out, "{line}")?;
            Ok(())
        }
    }
}

/// Evaluate one `lhs op rhs`. A bare-integer `rhs` of `+`/`*` uses the
/// integer forms, so `1/2 * 2` stays `2/2`.
pub(crate) fn calc(lhs: &str, op: CalcOp, rhs: &str) -> Result<String, MainError> {
    let a: Fraction = lhs.parse()?;
    let int_rhs = if rhs.contains('/') { None } else { rhs.trim().parse::<i32>().ok() };

    let text = match (op, int_rhs) {
        (CalcOp::Add, Some(n)) => a.checked_add_int(n)?.to_string(),
        (CalcOp::Mul, Some(n)) => a.checked_mul_int(n)?.to_string(),
        _ => {
            let b: Fraction = rhs.parse()?;
            match op {
                CalcOp::Add => a.checked_add(b)?.to_string(),
                CalcOp::Mul => a.checked_mul(b)?.to_string(),
                CalcOp::Lt => (a < b).to_string(),
                CalcOp::Le => (a <= b).to_string(),
                CalcOp::Gt => (a > b).to_string(),
                CalcOp::Ge => (a >= b).to_string(),
                CalcOp::Eq => (a == b).to_string(),
            }
        }
    };
    tracing::debug!(%lhs, %op, %rhs, result = %text, "calc");
    Ok(text)
}

fn fraction_demo(out: &mut impl Write) -> Result<(), MainError> {
    let f = Fraction::of;

    writeln!(out, "1/2: {}", f(1, 2)?)?;
    writeln!(out, "2/3: {}", f(2, 3)?)?;
    writeln!(out, "8: {}", Fraction::of_int(8))?;
    writeln!(out, "2/4: {}", 2_i32.over(4)?)?;

    writeln!(out, "+2/4: {}", f(2, 4)?.checked_abs()?)?;
    writeln!(out, "-2/6: {}", f(2, 6)?.checked_neg()?)?;

    writeln!(out, "1/2 + 2/3: {}", f(1, 2)?.checked_add(f(2, 3)?)?)?;
    writeln!(out, "1/2 + 1: {}", f(1, 2)?.checked_add_int(1)?)?;
    writeln!(out, "1/2 * 2/3: {}", f(1, 2)?.checked_mul(f(2, 3)?)?)?;
    writeln!(out, "1/2 * 2: {}", f(1, 2)?.checked_mul_int(2)?)?;

    writeln!(out, "3/2 > 2/2: {}", f(3, 2)? > f(2, 2)?)?;
    writeln!(out, "1/2 <= 2/4: {}", f(1, 2)? <= f(2, 4)?)?;
    writeln!(out, "4/6 >= 2/3: {}", f(4, 6)? >= f(2, 3)?)?;

    let half = f(1, 2)?;
    // literal terms 2/4, equal to 1/2 but hashed from its own fields
    let two_quarters = half.copy_with(Some(2), Some(4))?;
    writeln!(out, "hash_code 1/2 == 2/4: {}", half.hash_code() == two_quarters.hash_code())?;
    writeln!(out, "hash_code 1/2 == 1/2: {}", half.hash_code() == f(1, 2)?.hash_code())?;
    writeln!(out, "hash_code 1/3 == 3/5: {}", f(1, 3)?.hash_code() == f(3, 5)?.hash_code())?;

    writeln!(out, "1/2 == 2/4: {}", half == two_quarters)?;
    writeln!(out, "1/2 == 1/2: {}", half == f(1, 2)?)?;
    writeln!(out, "1/3 == 3/5: {}", f(1, 3)? == f(3, 5)?)?;

    writeln!(out, "copy 1/2: {}", half.copy_with(None, None)?)?;
    writeln!(out, "copy 1/2 with numerator 2: {}", half.with_numerator(2))?;
    writeln!(out, "copy 1/2 with denominator 3: {}", half.with_denominator(3)?)?;
    writeln!(out, "copy 1/2 with 2 and 3: {}", half.copy_with(Some(2), Some(3))?)?;

    let (n, d): (i32, i32) = half.into();
    writeln!(out, "parts of 1/2: {n}, {d}")?;
    writeln!(out, "numerator of 10/30: {}", f(10, 30)?.numerator())?;
    writeln!(out, "denominator of 10/79: {}", f(10, 79)?.denominator())?;

    writeln!(out, "get 0 of 1/2: {}", half.get(0)?)?;
    writeln!(out, "get 1 of 1/2: {}", half.get(1)?)?;
    match half.get(2) {
        Ok(v) => writeln!(out, "get 2 of 1/2: {v}")?,
        Err(e) => writeln!(out, "get 2 of 1/2: error: {e}")?,
    }

    writeln!(out, "round_to_i32 1/2: {}", half.round_to_i32())?;
    writeln!(out, "round_to_i64 1/2: {}", half.round_to_i64())?;
    writeln!(out, "to_f32 1/2: {}", half.to_f32())?;
    writeln!(out, "to_f64 1/2: {}", half.to_f64())?;

    let range = f(1, 2)?..=f(2, 3)?;
    for (label, x) in [("1/2", f(1, 2)?), ("2/3", f(2, 3)?), ("7/12", f(7, 12)?)] {
        writeln!(out, "{label} in 1/2..=2/3: {}", range.contains(&x))?;
    }
    Ok(())
}

pub(crate) fn profile(name: Option<&str>, bio: Option<&str>, out: &mut impl Write) -> Result<(), MainError> {
    let mut user = UserProfile::default();
    writeln!(out, "name is '{}'", user.name())?;
    writeln!(out, "bio is '{}'", user.bio())?;

    user.set_name(name.unwrap_or("RxMobileTeam"));
    user.set_bio(bio.unwrap_or(SAMPLE_BIO));

    writeln!(out, "After update:")?;
    writeln!(out, "name is '{}'", user.name())?;
    writeln!(out, "bio is '{}'", user.bio())?;
    Ok(())
}

/// Text sections by default; `json` swaps them for the canonical summary
/// on a single line.
pub(crate) fn catalog(
    path: Option<&Path>,
    seed: Option<u64>,
    json: bool,
    out: &mut impl Write,
) -> Result<(), MainError> {
    let catalog = match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "loading catalog");
            load_catalog(p)?
        }
        None => sample::catalog(seed.unwrap_or(sample::DEFAULT_SEED)),
    };

    if json {
        writeln!(out, "{}", to_canonical_string(&build_summary(&catalog))?)?;
        return Ok(());
    }
    print_catalog(&catalog, out)
}

fn print_catalog(catalog: &Catalog, out: &mut impl Write) -> Result<(), MainError> {
    let orders = &catalog.orders;

    section(out, "sorted_by_price_then_favorites_desc", sorted_by_price_then_favorites_desc(&catalog.products))?;
    section(out, "product_set", product_set(orders))?;
    section(out, "product_list", product_list(orders))?;
    section(out, "delivered_orders", delivered_orders(orders))?;
    section(out, "delivered_products", delivered_products(orders))?;

    let (delivered, pending) = partition_delivered(orders);
    writeln!(out, "partition_delivered")?;
    section(out, " delivered", delivered)?;
    section(out, " pending", pending)?;

    writeln!(out, "count_of_each_product")?;
    for (p, n) in count_of_each_product(orders) {
        writeln!(out, "  {n} x {p}")?;
    }

    writeln!(out, "orders")?;
    for o in orders {
        print_order(o, out)?;
    }
    Ok(())
}

fn print_order(o: &Order, out: &mut impl Write) -> Result<(), MainError> {
    let show = |p: Option<&Product>| p.map_or_else(|| "-".to_string(), |p| p.id.to_string());
    writeln!(
        out,
        "  {o}: total_price={} max_price_product={} min_price_product={}",
        o.total_price(),
        show(o.max_price_product()),
        show(o.min_price_product())
    )?;
    Ok(())
}

fn section<T: std::fmt::Display>(
    out: &mut impl Write,
    title: &str,
    items: impl IntoIterator<Item = T>,
) -> Result<(), MainError> {
    writeln!(out, "{title}")?;
    for it in items {
        writeln!(out, "  {it}")?;
    }
    Ok(())
}
