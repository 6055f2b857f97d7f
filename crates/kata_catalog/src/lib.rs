// crates/kata_catalog/src/lib.rs
#![forbid(unsafe_code)]

// Core ids re-exported so callers only need this crate for catalog work.
pub use kata_core::ids::{OrderId, ProductId};

// ----------------------------- Model ------------------------------------------------

pub mod entities;

pub use entities::{Catalog, Order, Product, ProductCategory};

// ----------------------------- Collection utilities (public surface) ----------------

pub mod products;
pub mod orders;

pub use products::sorted_by_price_then_favorites_desc;
pub use orders::{
    count_of_each_product, delivered_orders, delivered_products, partition_delivered,
    product_list, product_set,
};

// ----------------------------- Sample data ------------------------------------------

pub mod sample;
