//! entities.rs
//! Product/order value types. Equality and hashing cover every field, so two
//! products with the same content but different ids are distinct.

use core::fmt;
use core::str::FromStr;

use ordered_float::OrderedFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use kata_core::ids::{OrderId, ProductId};

// ------------ Macros ------------

/// Define an enum with explicit wire tokens (serde rename + FromStr/Display).
macro_rules! wire_enum {
    ($(#[$m:meta])* $name:ident => { $($variant:ident = $token:literal),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_token())
            }
        }

        impl FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($name))),
                }
            }
        }
    };
}

// ------------ Canonical enums (wire tokens explicit) ------------

wire_enum!(
    /// Product family.
    ProductCategory => {
        Laptop     = "LAPTOP",
        Phone      = "PHONE",
        Headphones = "HEADPHONES",
        SmartWatch = "SMART_WATCH",
        Camera     = "CAMERA",
    }
);

// ------------ Value types ------------

/// `price` is an `OrderedFloat` so products can live in sets and map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: OrderedFloat<f64>,
    pub category: ProductCategory,
    pub favorite_count: i32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category: ProductCategory,
        favorite_count: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: OrderedFloat(price),
            category,
            favorite_count,
        }
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price.into_inner()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} @ {} ({} favorites)",
            self.name, self.category, self.id, self.price, self.favorite_count
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub id: OrderId,
    pub products: Vec<Product>,
    pub is_delivered: bool,
}

impl Order {
    pub fn new(id: OrderId, products: Vec<Product>, is_delivered: bool) -> Self {
        Self { id, products, is_delivered }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order {} ({} products, {})",
            self.id,
            self.products.len(),
            if self.is_delivered { "delivered" } else { "pending" }
        )
    }
}

/// Products on offer plus the orders placed against them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub products: Vec<Product>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub orders: Vec<Order>,
}
