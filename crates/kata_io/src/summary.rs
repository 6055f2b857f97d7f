//! Summary: every catalog utility applied to one catalog, as a JSON value.
//! Products are referenced by id; arrays keep the utility's own ordering so
//! the canonical bytes are stable for a given catalog.

use serde_json::{json, Value};

use kata_catalog::{
    count_of_each_product, delivered_orders, delivered_products, partition_delivered,
    product_list, product_set, sorted_by_price_then_favorites_desc, Catalog, Order, Product,
};

pub fn build_summary(catalog: &Catalog) -> Value {
    let orders = &catalog.orders;
    let (delivered, pending) = partition_delivered(orders);

    let counts: Vec<Value> = count_of_each_product(orders)
        .into_iter()
        .map(|(p, n)| json!({ "product": p.id.as_str(), "count": n }))
        .collect();

    json!({
        "products": catalog.products.len(),
        "sorted_by_price_then_favorites_desc": product_ids(sorted_by_price_then_favorites_desc(&catalog.products)),
        "product_set": product_ids(product_set(orders)),
        "product_list": product_ids(product_list(orders)),
        "delivered_orders": order_ids(delivered_orders(orders)),
        "delivered_products": product_ids(delivered_products(orders)),
        "partition_delivered": {
            "delivered": order_ids(delivered),
            "pending": order_ids(pending),
        },
        "count_of_each_product": counts,
        "orders": orders.iter().map(order_summary).collect::<Vec<_>>(),
    })
}

fn order_summary(o: &Order) -> Value {
    json!({
        "id": o.id.as_str(),
        "is_delivered": o.is_delivered,
        "total_price": o.total_price(),
        "max_price_product": o.max_price_product().map(|p| p.id.as_str()),
        "min_price_product": o.min_price_product().map(|p| p.id.as_str()),
    })
}

fn product_ids<'a>(xs: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
    xs.into_iter().map(|p| p.id.as_str()).collect()
}

fn order_ids<'a>(xs: impl IntoIterator<Item = &'a Order>) -> Vec<&'a str> {
    xs.into_iter().map(|o| o.id.as_str()).collect()
}
