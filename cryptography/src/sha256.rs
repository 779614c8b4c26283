//! Double SHA-256 digests.
//!
//! Blocks and transactions are identified on the wire by [double_hash], SHA-256 applied twice.
//! A [Digest] is carried verbatim: its 32 bytes are written in the order they are stored.

use bytes::{Buf, BufMut};
use peerwire_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use peerwire_utils::hex;
use sha2::{Digest as _, Sha256};
use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

const DIGEST_LENGTH: usize = 32;

/// Generate a double SHA-256 digest from a message (the digest of the digest).
pub fn double_hash(message: &[u8]) -> Digest {
    let first = Sha256::digest(message);
    Digest(Sha256::digest(first).into())
}

/// A 32-byte block or transaction digest.
///
/// The default digest is all zeros, which is also what messages carry when a digest is absent
/// from the wire.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// Returns true if every byte of the digest is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LENGTH]
    }
}

impl Write for Digest {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl Read for Digest {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        <[u8; DIGEST_LENGTH]>::read(buf).map(Self)
    }
}

impl FixedSize for Digest {
    const SIZE: usize = DIGEST_LENGTH;
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(value: [u8; DIGEST_LENGTH]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Digest {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peerwire_codec::{DecodeExt, Encode};

    // Hash of the empty string, hashed again.
    const EMPTY_DOUBLE_DIGEST: &str =
        "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456";

    #[test]
    fn test_double_hash() {
        assert_eq!(hex(double_hash(b"").as_ref()), EMPTY_DOUBLE_DIGEST);
        assert_ne!(double_hash(b"tx"), double_hash(b"block"));
    }

    #[test]
    fn test_default_is_zero() {
        assert!(Digest::default().is_zero());
        let mut bytes = [0u8; DIGEST_LENGTH];
        bytes[31] = 1;
        assert!(!Digest::from(bytes).is_zero());
        assert!(!double_hash(b"tx").is_zero());
    }

    #[test]
    fn test_display() {
        let digest = Digest::from([0xAB; DIGEST_LENGTH]);
        assert_eq!(digest.to_string(), "ab".repeat(DIGEST_LENGTH));
        assert_eq!(format!("{digest:?}"), digest.to_string());
    }

    #[test]
    fn test_codec() {
        let digest = double_hash(b"hello world");

        let encoded = digest.encode();
        assert_eq!(encoded.len(), DIGEST_LENGTH);
        assert_eq!(encoded, digest.as_ref());

        let decoded = Digest::decode(encoded).unwrap();
        assert_eq!(digest, decoded);

        assert!(Digest::decode(&[0u8; 33][..]).is_err());
        assert!(Digest::decode(&[0u8; 31][..]).is_err());
    }
}
