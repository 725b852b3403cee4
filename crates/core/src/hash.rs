//! SHA-1 content hashing.
//!
//! The service verifies every upload against a SHA-1 digest supplied in the
//! request headers, so the digest is a first-class type rather than a bare
//! string.

use sha1::{Digest, Sha1};
use std::fmt;

/// A SHA-1 content hash represented as 20 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha1Hash([u8; 20]);

impl Sha1Hash {
    /// Create a new Sha1Hash from raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Compute the SHA-1 hash of data.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create an incremental hasher.
    pub fn hasher() -> Sha1Hasher {
        Sha1Hasher(Sha1::new())
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        if s.len() != 40 {
            return Err(crate::Error::InvalidHash(format!(
                "expected 40 hex chars, got {}",
                s.len()
            )));
        }
        let mut bytes = [0u8; 20];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            let hex_str =
                std::str::from_utf8(chunk).map_err(|e| crate::Error::InvalidHash(e.to_string()))?;
            bytes[i] = u8::from_str_radix(hex_str, 16)
                .map_err(|e| crate::Error::InvalidHash(e.to_string()))?;
        }
        Ok(Self(bytes))
    }

    /// Encode as lowercase hex string, the form the service expects in the
    /// `X-Bz-Content-Sha1` header.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Debug for Sha1Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha1Hash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Sha1Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Incremental SHA-1 hasher for streaming file contents.
pub struct Sha1Hasher(Sha1);

impl Sha1Hasher {
    /// Update the hasher with data.
    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> Sha1Hash {
        Sha1Hash(self.0.finalize().into())
    }
}

impl Default for Sha1Hasher {
    fn default() -> Self {
        Sha1Hash::hasher()
    }
}
