//! Content fingerprints for datasets.
//!
//! A fingerprint is the blake3 digest of a value's JSON encoding. Two datasets
//! with the same customers, products and suppliers in the same order share one.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Fingerprint(blake3::hash(bytes))
    }

    /// Fingerprint of the JSON encoding of `value`.
    pub fn of_json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(value).map_err(|e| Error::Hash(e.to_string()))?;
        Ok(Self::of_bytes(&bytes))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }

    /// Leading 12 hex digits, for log lines.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(12);
        hex
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_share_a_fingerprint() {
        let a = Fingerprint::of_json(&["ALFKI", "ANATR"]).unwrap();
        let b = Fingerprint::of_json(&["ALFKI", "ANATR"]).unwrap();
        let c = Fingerprint::of_json(&["ANATR", "ALFKI"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, Fingerprint::of_bytes(br#"["ALFKI","ANATR"]"#));
    }

    #[test]
    fn short_form_prefixes_the_hex_digest() {
        let fp = Fingerprint::of_bytes(b"quarry");
        let hex = fp.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(fp.short(), hex[..12]);
        assert_eq!(fp.to_string(), hex);
    }
}
