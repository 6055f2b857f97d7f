//! Product-list helpers.

use core::cmp::{Ordering, Reverse};

use crate::entities::Product;

/// Ascending by price; equal prices put the most-favorited product first.
/// Stable: products equal on both keys keep their input order.
pub fn sorted_by_price_then_favorites_desc(products: &[Product]) -> Vec<&Product> {
    let mut out: Vec<&Product> = products.iter().collect();
    out.sort_by(|a, b| cmp_price_then_favorites_desc(a, b));
    out
}

/// Comparator behind [`sorted_by_price_then_favorites_desc`].
#[inline]
pub fn cmp_price_then_favorites_desc(a: &Product, b: &Product) -> Ordering {
    (a.price, Reverse(a.favorite_count)).cmp(&(b.price, Reverse(b.favorite_count)))
}

/// First product with the highest price (earliest wins on ties).
pub fn max_price<'a, I>(products: I) -> Option<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .reduce(|best, p| if p.price > best.price { p } else { best })
}

/// First product with the lowest price (earliest wins on ties).
pub fn min_price<'a, I>(products: I) -> Option<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .reduce(|best, p| if p.price < best.price { p } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ProductCategory;

    fn p(id: &str, price: f64, favs: i32) -> Product {
        Product::new(id.parse().unwrap(), id, price, ProductCategory::Laptop, favs)
    }

    #[test]
    fn price_ascending_then_favorites_descending() {
        let xs = vec![p("a", 2.3, 1), p("b", 6.7, 2), p("c", 6.7, 3), p("d", 6.7, 4), p("e", 1.0, 5), p("f", 10.0, 0)];
        let got: Vec<&str> = sorted_by_price_then_favorites_desc(&xs).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(got, vec!["e", "a", "d", "c", "b", "f"]);
    }

    #[test]
    fn sort_is_stable_on_full_ties() {
        let xs = vec![p("x", 1.0, 1), p("y", 1.0, 1)];
        let got: Vec<&str> = sorted_by_price_then_favorites_desc(&xs).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(got, vec!["x", "y"]);
    }

    #[test]
    fn extremes_prefer_first_on_ties() {
        let xs = vec![p("a", 5.0, 0), p("b", 9.0, 0), p("c", 9.0, 0), p("d", 1.0, 0), p("e", 1.0, 0)];
        assert_eq!(max_price(&xs).unwrap().id.as_str(), "b");
        assert_eq!(min_price(&xs).unwrap().id.as_str(), "d");
        assert!(max_price(&xs[..0]).is_none());
    }
}
