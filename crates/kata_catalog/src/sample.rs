//! Reference sample catalog with reproducible ids.
//!
//! One "special edition" product is shared by value across every order; the
//! other products look alike but each draw a fresh id, so set/count helpers
//! have something to tell apart.

use kata_core::rng::IdRng;

use crate::entities::{Catalog, Order, Product, ProductCategory};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x5EED_CA7A_1060;

/// Build the sample catalog from `seed`. Same seed → identical catalog.
pub fn catalog(seed: u64) -> Catalog {
    let mut rng = IdRng::from_seed_u64(seed);

    let mut product = |name: &str, price: f64, category: ProductCategory, favorites: i32| {
        Product::new(rng.next_product_id(), name, price, category, favorites)
    };

    let special = product("Sandy Short Special Edition", 2.3, ProductCategory::Laptop, 1);

    let products = vec![
        special.clone(),
        product("Stacie Riddle", 6.7, ProductCategory::Phone, 2),
        product("Stacie Riddle", 6.7, ProductCategory::Laptop, 3),
        product("Stacie Riddle", 6.7, ProductCategory::SmartWatch, 4),
        product("Stacie Riddle", 1.0, ProductCategory::Headphones, 5),
        product("Stacie Riddle", 10.0, ProductCategory::Camera, 0),
    ];

    let first = vec![special.clone(), product("Stacie Riddle", 6.7, ProductCategory::Phone, 2)];
    let second = vec![special.clone(), product("Stacie Riddle", 100.0, ProductCategory::SmartWatch, 3)];
    let third = vec![
        special,
        product("Stacie Riddle", 6.7, ProductCategory::Phone, 2),
        product("Efrain Hawkins", 100.0, ProductCategory::Camera, 5235),
    ];

    let orders = vec![
        Order::new(rng.next_order_id(), first, true),
        Order::new(rng.next_order_id(), second, false),
        Order::new(rng.next_order_id(), third, true),
    ];

    tracing::debug!(
        seed,
        products = products.len(),
        orders = orders.len(),
        words = %rng.words_consumed(),
        "built sample catalog"
    );

    Catalog { products, orders }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_of_each_product, product_set, sorted_by_price_then_favorites_desc};

    #[test]
    fn deterministic_for_a_seed() {
        assert_eq!(catalog(7), catalog(7));
        assert_ne!(catalog(7), catalog(8));
    }

    #[test]
    fn shape_matches_reference_data() {
        let c = catalog(DEFAULT_SEED);
        assert_eq!(c.products.len(), 6);
        assert_eq!(c.orders.len(), 3);
        let delivered: Vec<bool> = c.orders.iter().map(|o| o.is_delivered).collect();
        assert_eq!(delivered, vec![true, false, true]);
    }

    #[test]
    fn shared_product_counted_across_orders() {
        let c = catalog(DEFAULT_SEED);
        // 7 product slots, the special edition fills 3 of them.
        assert_eq!(product_set(&c.orders).len(), 5);
        let counts = count_of_each_product(&c.orders);
        let special = &c.products[0];
        assert_eq!(counts[special], 3);
        assert_eq!(counts.values().sum::<usize>(), 7);
    }

    #[test]
    fn sample_sort_order() {
        let c = catalog(DEFAULT_SEED);
        let got: Vec<(f64, i32)> = sorted_by_price_then_favorites_desc(&c.products)
            .iter()
            .map(|p| (p.price(), p.favorite_count))
            .collect();
        assert_eq!(got, vec![(1.0, 5), (2.3, 1), (6.7, 4), (6.7, 3), (6.7, 2), (10.0, 0)]);
    }

    #[test]
    fn first_order_extremes() {
        let c = catalog(DEFAULT_SEED);
        let o = &c.orders[0];
        assert_eq!(o.max_price_product().unwrap().price(), 6.7);
        assert_eq!(o.min_price_product().unwrap().name, "Sandy Short Special Edition");
        assert!((o.total_price() - 9.0).abs() < 1e-9);
    }
}
