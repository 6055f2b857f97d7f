//! Canonical JSON output (kata_io)
//! - Objects: keys sorted lexicographically (UTF-8 byte order)
//! - Arrays: order preserved (caller is responsible for stable ordering)
//! - Output: compact, no trailing newline

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::{IoError, IoResult};

/// Serialize `v` through `serde_json::Value`, then emit canonical bytes.
pub fn to_canonical_json_bytes<T: Serialize + ?Sized>(v: &T) -> IoResult<Vec<u8>> {
    let value = serde_json::to_value(v)?;
    let mut out = Vec::with_capacity(1024);
    write_canonical_value(&value, &mut out)?;
    Ok(out)
}

pub fn to_canonical_string<T: Serialize + ?Sized>(v: &T) -> IoResult<String> {
    let bytes = to_canonical_json_bytes(v)?;
    String::from_utf8(bytes).map_err(|e| IoError::Json { pointer: "/".into(), msg: e.to_string() })
}

fn write_canonical_value<W: Write>(v: &Value, out: &mut W) -> IoResult<()> {
    match v {
        Value::Null => out.write_all(b"null")?,
        Value::Bool(true) => out.write_all(b"true")?,
        Value::Bool(false) => out.write_all(b"false")?,
        Value::Number(n) => out.write_all(n.to_string().as_bytes())?,
        // serde_json produces the correctly escaped literal
        Value::String(s) => serde_json::to_writer(&mut *out, s)?,
        Value::Array(arr) => {
            out.write_all(b"[")?;
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    out.write_all(b",")?;
                }
                write_canonical_value(elem, out)?;
            }
            out.write_all(b"]")?;
        }
        Value::Object(map) => {
            out.write_all(b"{")?;
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (i, (k, val)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.write_all(b",")?;
                }
                serde_json::to_writer(&mut *out, k)?;
                out.write_all(b":")?;
                write_canonical_value(val, out)?;
            }
            out.write_all(b"}")?;
        }
    }
    Ok(())
}
