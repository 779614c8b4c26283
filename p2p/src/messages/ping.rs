use super::{level, Error, Identifier, Message};
use bytes::{Buf, BufMut};
use peerwire_codec::{FixedSize, ReadExt, Write};

/// Liveness probe.
///
/// Before [level::BIP31] the payload is empty. From [level::BIP31] on, it carries a nonce the
/// peer echoes back in a [super::Pong].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ping {
    /// Value echoed by the responding `pong` (zero when the payload is empty).
    pub nonce: u64,
}

impl Ping {
    /// Creates a ping carrying `nonce`.
    pub const fn new(nonce: u64) -> Self {
        Self { nonce }
    }

    /// Returns true if the payload at `version` carries the nonce.
    pub const fn has_nonce(version: u32) -> bool {
        version >= level::BIP31
    }
}

impl Message for Ping {
    type Cfg = ();

    const ID: Identifier = Identifier::Ping;
    const VERSION_MINIMUM: u32 = level::MINIMUM_PROTOCOL;
    const VERSION_MAXIMUM: u32 = level::MAXIMUM_PROTOCOL;

    fn size(&self, version: u32) -> usize {
        if Self::has_nonce(version) {
            u64::SIZE
        } else {
            0
        }
    }

    fn write(&self, version: u32, buf: &mut impl BufMut) {
        if Self::has_nonce(version) {
            self.nonce.write(buf);
        }
    }

    fn read(version: u32, buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Self::check_version(version)?;
        let nonce = if Self::has_nonce(version) {
            u64::read(buf)?
        } else {
            0
        };
        Ok(Self { nonce })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_identity() {
        assert_eq!(Ping::COMMAND, "ping");
        assert_eq!(Ping::ID, Identifier::Ping);
        assert_eq!(Ping::VERSION_MINIMUM, 31402);
        assert_eq!(Ping::VERSION_MAXIMUM, level::MAXIMUM_PROTOCOL);
    }

    #[test]
    fn test_nonce() {
        let ping = Ping::new(0x0102_0304_0506_0708);
        let encoded = ping.encode(level::BIP31).unwrap();
        assert_eq!(
            &encoded[..],
            &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(*Ping::deserialize(level::BIP31, &encoded).unwrap(), ping);
    }

    #[test_case(level::MINIMUM_PROTOCOL; "minimum")]
    #[test_case(level::BIP31 - 1; "before nonce")]
    fn test_empty_before_nonce(version: u32) {
        let ping = Ping::new(42);
        assert_eq!(ping.size(version), 0);
        assert!(ping.encode(version).unwrap().is_empty());

        // The nonce is not carried, so it decodes as zero.
        let decoded = Ping::deserialize(version, &[]).unwrap();
        assert_eq!(decoded.nonce, 0);
        assert!(Ping::deserialize(version, &[0; 8]).is_none());
    }

    #[test_case(level::BIP31; "bip31")]
    #[test_case(level::MAXIMUM_PROTOCOL; "maximum")]
    fn test_truncated_nonce(version: u32) {
        let encoded = Ping::new(u64::MAX).encode(version).unwrap();
        assert_eq!(encoded.len(), 8);
        for len in 0..encoded.len() {
            assert!(Ping::deserialize(version, &encoded[..len]).is_none());
        }
    }

    #[test_case(level::MINIMUM_PROTOCOL - 1; "below minimum")]
    #[test_case(level::MAXIMUM_PROTOCOL + 1; "above maximum")]
    fn test_version_out_of_range(version: u32) {
        assert!(!Ping::supports(version));
        assert!(Ping::deserialize(version, &[0; 8]).is_none());
        assert!(Ping::default().encode(version).is_none());
    }
}
