use std::fmt;

use serde::{Serialize, Serializer};

/// A finished 16-byte MD5 digest.
///
/// Rendered as 32 lowercase hex characters, which is the form the
/// achievement database publishes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 16]);

impl Digest {
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the digest as an owned lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<[u8; 16]> for Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x0A;
        bytes[15] = 0xFF;
        let digest = Digest::new(bytes);
        assert_eq!(digest.to_hex(), "0a0000000000000000000000000000ff");
        assert_eq!(digest.to_hex().len(), 32);
    }

    #[test]
    fn test_each_call_returns_its_own_string() {
        let a = Digest::new([0x11; 16]).to_hex();
        let b = Digest::new([0x22; 16]).to_hex();
        assert_ne!(a, b);
        assert!(a.starts_with("1111"));
    }
}
