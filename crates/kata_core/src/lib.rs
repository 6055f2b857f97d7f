//! kata_core: core value types shared across the kata workspace.
//!
//! This crate is **I/O-free**. It defines stable types/APIs used by
//! `kata_catalog`, `kata_io` and `kata_cli`.
//!
//! - `Fraction`: immutable rational value with operator ergonomics
//! - `TransformingHolder`: string storage that rewrites values on write
//! - Id tokens: `ProductId`, `OrderId`
//! - Seedable id RNG (ChaCha20) for reproducible sample data
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod errors;
pub mod fraction;
pub mod holder;
pub mod ids;
pub mod rng;

pub use errors::CoreError;
pub use fraction::{Fraction, Over};
pub use holder::{TransformingHolder, UserProfile};
pub use ids::{OrderId, ProductId};
pub use rng::IdRng;
