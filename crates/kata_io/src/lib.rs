//! crates/kata_io/src/lib.rs
//! I/O edge of the workspace: local JSON in, canonical JSON out.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Offline only: URL-looking paths are rejected before touching the filesystem.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for kata_io (loader/canonical_json/summary).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, metadata, read)
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors with a JSON Pointer.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Input parsed but broke a domain rule.
    #[error("invalid {pointer}: {msg}")]
    Invalid { pointer: String, msg: String },

    /// Input larger than the loader accepts.
    #[error("limit exceeded: {0}")]
    Limit(String),
}

pub type IoResult<T> = Result<T, IoError>;

/* ---------------- From conversions (used by file modules) ---------------- */

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column rather than a pointer; default to root.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

pub mod canonical_json;
pub mod loader;
pub mod summary;

/// Returns true if `s` looks like a URL (any `<scheme>://`, including `file://`).
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    s.trim().contains("://")
}

pub mod prelude {
    pub use crate::{looks_like_url_strict, IoError, IoResult};

    pub use crate::canonical_json::{to_canonical_json_bytes, to_canonical_string};
    pub use crate::loader::{load_catalog, parse_catalog};
    pub use crate::summary::build_summary;
}
