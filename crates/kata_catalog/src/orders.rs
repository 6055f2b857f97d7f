//! Order-list helpers and per-order aggregates.
//!
//! Everything borrows from the input slice; nothing clones products.
//! Set/map results are `BTree*` so iteration order is stable run to run.

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::{Order, Product};
use crate::products::{max_price, min_price};

/// Distinct products across all orders.
pub fn product_set(orders: &[Order]) -> BTreeSet<&Product> {
    orders.iter().flat_map(|o| o.products.iter()).collect()
}

/// All products across all orders, duplicates kept, in order of appearance.
pub fn product_list(orders: &[Order]) -> Vec<&Product> {
    orders.iter().flat_map(|o| o.products.iter()).collect()
}

pub fn delivered_orders(orders: &[Order]) -> Vec<&Order> {
    orders.iter().filter(|o| o.is_delivered).collect()
}

/// Products of delivered orders, duplicates kept.
pub fn delivered_products(orders: &[Order]) -> Vec<&Product> {
    orders
        .iter()
        .filter(|o| o.is_delivered)
        .flat_map(|o| o.products.iter())
        .collect()
}

/// `(delivered, not_delivered)`, each in input order.
pub fn partition_delivered(orders: &[Order]) -> (Vec<&Order>, Vec<&Order>) {
    orders.iter().partition(|o| o.is_delivered)
}

/// Occurrences of each product across all orders.
pub fn count_of_each_product(orders: &[Order]) -> BTreeMap<&Product, usize> {
    let mut counts: BTreeMap<&Product, usize> = BTreeMap::new();
    for p in orders.iter().flat_map(|o| o.products.iter()) {
        *counts.entry(p).or_insert(0) += 1;
    }
    counts
}

impl Order {
    /// Sum of product prices (0.0 for an empty order).
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(Product::price).sum()
    }

    /// First product with the highest price; `None` for an empty order.
    pub fn max_price_product(&self) -> Option<&Product> {
        let out = max_price(&self.products);
        if out.is_none() {
            tracing::warn!(order = %self.id, "max_price_product on an empty order");
        }
        out
    }

    /// First product with the lowest price; `None` for an empty order.
    pub fn min_price_product(&self) -> Option<&Product> {
        let out = min_price(&self.products);
        if out.is_none() {
            tracing::warn!(order = %self.id, "min_price_product on an empty order");
        }
        out
    }
}
