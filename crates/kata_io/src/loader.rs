//! Loader: read a local catalog JSON file, decode it into `Catalog`, then check
//! the domain rules serde cannot express. No network I/O.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use kata_catalog::{Catalog, Product};

use crate::{looks_like_url_strict, IoError, IoResult};

/// Largest catalog file the loader will read.
pub const MAX_CATALOG_BYTES: u64 = 4 * 1024 * 1024;

/// Read, decode and validate the catalog at `path`.
pub fn load_catalog(path: &Path) -> IoResult<Catalog> {
    let shown = path.to_string_lossy();
    if looks_like_url_strict(&shown) {
        return Err(IoError::Path(format!("not a local path: {shown}")));
    }

    let f = File::open(path).map_err(|e| IoError::Path(format!("{shown}: {e}")))?;
    let len = f.metadata()?.len();
    if len > MAX_CATALOG_BYTES {
        return Err(IoError::Limit(format!(
            "{shown} is {len} bytes (max {MAX_CATALOG_BYTES})"
        )));
    }

    // take() guards against the file growing between stat and read
    let mut buf = Vec::with_capacity(len as usize);
    f.take(MAX_CATALOG_BYTES + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > MAX_CATALOG_BYTES {
        return Err(IoError::Limit(format!("{shown} exceeds {MAX_CATALOG_BYTES} bytes")));
    }

    tracing::debug!(path = %shown, bytes = buf.len(), "read catalog file");
    parse_catalog(&buf)
}

/// Decode and validate catalog JSON already in memory.
pub fn parse_catalog(bytes: &[u8]) -> IoResult<Catalog> {
    let catalog: Catalog = serde_json::from_slice(bytes)?;
    validate_catalog(&catalog)?;
    tracing::debug!(
        products = catalog.products.len(),
        orders = catalog.orders.len(),
        "catalog validated"
    );
    Ok(catalog)
}

/// Domain checks: finite non-negative prices, non-negative favorite counts,
/// unique product ids in `/products`, unique order ids.
pub fn validate_catalog(catalog: &Catalog) -> IoResult<()> {
    let mut seen_products = BTreeSet::new();
    for (i, p) in catalog.products.iter().enumerate() {
        let at = format!("/products/{i}");
        check_product(&at, p)?;
        if !seen_products.insert(&p.id) {
            return Err(invalid(format!("{at}/id"), format!("duplicate product id {}", p.id)));
        }
    }

    let mut seen_orders = BTreeSet::new();
    for (i, o) in catalog.orders.iter().enumerate() {
        if !seen_orders.insert(&o.id) {
            return Err(invalid(format!("/orders/{i}/id"), format!("duplicate order id {}", o.id)));
        }
        for (j, p) in o.products.iter().enumerate() {
            check_product(&format!("/orders/{i}/products/{j}"), p)?;
        }
        if o.products.is_empty() {
            tracing::warn!(order = %o.id, "order has no products");
        }
    }
    Ok(())
}

fn check_product(at: &str, p: &Product) -> IoResult<()> {
    let price = p.price();
    if !price.is_finite() || price < 0.0 {
        return Err(invalid(format!("{at}/price"), format!("price must be finite and >= 0, got {price}")));
    }
    if p.favorite_count < 0 {
        return Err(invalid(
            format!("{at}/favorite_count"),
            format!("favorite_count must be >= 0, got {}", p.favorite_count),
        ));
    }
    Ok(())
}

fn invalid(pointer: String, msg: String) -> IoError {
    IoError::Invalid { pointer, msg }
}
