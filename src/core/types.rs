//! core::types
//!
//! Strong types for binary Git object identifiers.
//!
//! # Types
//!
//! - [`Oid`] - 20-byte SHA-1 object identifier
//! - [`TypeError`] - Identifier validation failures
//!
//! # Encodings
//!
//! An identifier crosses the host boundary in exactly one of two forms:
//!
//! - a 40-character hexadecimal string
//! - a raw 20-byte sequence
//!
//! Decoding is atomic. Either the whole identifier is produced or an error is
//! returned; no partially populated identifier is ever observable.
//!
//! # Examples
//!
//! ```
//! use gitbind::core::types::Oid;
//!
//! let oid = Oid::from_hex("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391").unwrap();
//! assert_eq!(oid.as_bytes().len(), 20);
//! assert_eq!(Oid::from_bytes(oid.as_bytes()).unwrap(), oid);
//!
//! assert!(Oid::from_hex("e69de29b").is_err());
//! assert!(Oid::from_bytes(&[0u8; 19]).is_err());
//! ```

use thiserror::Error;

/// Number of bytes in a binary identifier.
pub const OID_RAW_LEN: usize = 20;

/// Number of characters in the hexadecimal form of an identifier.
pub const OID_HEX_LEN: usize = 2 * OID_RAW_LEN;

/// Errors from identifier validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The string form had the wrong length or non-hexadecimal content.
    #[error("{0}")]
    InvalidOidFormat(String),

    /// The binary form had the wrong number of bytes.
    #[error("Git SHA-1 binary identifier must have {expected} bytes, got {actual}")]
    InvalidOidLength { expected: usize, actual: usize },
}

/// A Git SHA-1 object identifier.
///
/// Stored inline as 20 bytes, so copies are cheap and carry no reference to
/// the repository the identifier was resolved in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid([u8; OID_RAW_LEN]);

impl Oid {
    /// Decode an identifier from its 40-character hexadecimal form.
    ///
    /// The length is checked here; the character-level conversion is handed
    /// to the native library so that accepted digits match the object store
    /// exactly (upper-case digits are accepted, as libgit2 does).
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidOidFormat`] if the string is not exactly
    /// 40 characters long or if the native library rejects its content.
    pub fn from_hex(hex: &str) -> Result<Self, TypeError> {
        if hex.len() != OID_HEX_LEN {
            return Err(TypeError::InvalidOidFormat(format!(
                "Git SHA-1 string must have {} characters",
                OID_HEX_LEN
            )));
        }
        crate::git::decode_hex_oid(hex)
    }

    /// Decode an identifier from its raw 20-byte form.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidOidLength`] for any other length. The input
    /// is never truncated or padded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        let raw: [u8; OID_RAW_LEN] =
            bytes
                .try_into()
                .map_err(|_| TypeError::InvalidOidLength {
                    expected: OID_RAW_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(raw))
    }

    /// Build an identifier from an array already known to be the right size.
    pub const fn from_raw(raw: [u8; OID_RAW_LEN]) -> Self {
        Self(raw)
    }

    /// The raw 20-byte identifier.
    pub fn as_bytes(&self) -> &[u8; OID_RAW_LEN] {
        &self.0
    }

    /// Encode as 40 lower-case hexadecimal characters. Never fails.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated hexadecimal form (at most `len` characters).
    ///
    /// # Example
    ///
    /// ```
    /// use gitbind::core::types::Oid;
    ///
    /// let oid = Oid::from_raw([0xab; 20]);
    /// assert_eq!(oid.short(7), "abababa");
    /// ```
    pub fn short(&self, len: usize) -> String {
        let mut hex = self.to_hex();
        hex.truncate(len.min(OID_HEX_LEN));
        hex
    }
}

impl std::fmt::Debug for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Oid({})", self.short(8))
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; OID_RAW_LEN]> for Oid {
    fn from(raw: [u8; OID_RAW_LEN]) -> Self {
        Self(raw)
    }
}

impl AsRef<[u8]> for Oid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
