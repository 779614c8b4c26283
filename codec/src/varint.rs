//! Variable-length integer encoding and decoding
//!
//! This module implements the CompactSize encoding used for every length prefix on the wire.
//! The first byte selects the width of the value:
//! - `0x00..=0xFC`: the byte itself is the value
//! - `0xFD`: a little-endian `u16` follows
//! - `0xFE`: a little-endian `u32` follows
//! - `0xFF`: a little-endian `u64` follows
//!
//! Decoding only accepts the shortest encoding of each value, so every value has exactly one
//! valid byte representation.

use crate::{util::at_least, Error};
use bytes::{Buf, BufMut};

const U16_PREFIX: u8 = 0xFD;
const U32_PREFIX: u8 = 0xFE;
const U64_PREFIX: u8 = 0xFF;

/// Encodes a `u64` as a CompactSize.
pub fn write(value: u64, buf: &mut impl BufMut) {
    if value < U16_PREFIX as u64 {
        buf.put_u8(value as u8);
    } else if value <= u16::MAX as u64 {
        buf.put_u8(U16_PREFIX);
        buf.put_u16_le(value as u16);
    } else if value <= u32::MAX as u64 {
        buf.put_u8(U32_PREFIX);
        buf.put_u32_le(value as u32);
    } else {
        buf.put_u8(U64_PREFIX);
        buf.put_u64_le(value);
    }
}

/// Decodes a CompactSize into a `u64`, rejecting non-minimal encodings.
pub fn read(buf: &mut impl Buf) -> Result<u64, Error> {
    at_least(buf, 1)?;
    let (value, minimum) = match buf.get_u8() {
        U16_PREFIX => {
            at_least(buf, 2)?;
            (buf.get_u16_le() as u64, U16_PREFIX as u64)
        }
        U32_PREFIX => {
            at_least(buf, 4)?;
            (buf.get_u32_le() as u64, u16::MAX as u64 + 1)
        }
        U64_PREFIX => {
            at_least(buf, 8)?;
            (buf.get_u64_le(), u32::MAX as u64 + 1)
        }
        byte => return Ok(byte as u64),
    };
    if value < minimum {
        return Err(Error::InvalidVarint);
    }
    Ok(value)
}

/// Decodes a CompactSize that is used as a length.
///
/// Fails if the value does not fit in a `usize` on this platform.
pub fn read_len(buf: &mut impl Buf) -> Result<usize, Error> {
    let value = read(buf)?;
    usize::try_from(value).map_err(|_| Error::InvalidVarint)
}

/// Calculates the number of bytes needed to encode a value as a CompactSize.
pub fn size(value: u64) -> usize {
    if value < U16_PREFIX as u64 {
        1
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use test_case::test_case;

    #[test_case(0, &[0x00]; "zero")]
    #[test_case(0xFC, &[0xFC]; "largest single byte")]
    #[test_case(0xFD, &[0xFD, 0xFD, 0x00]; "smallest u16")]
    #[test_case(0xFFFF, &[0xFD, 0xFF, 0xFF]; "largest u16")]
    #[test_case(0x10000, &[0xFE, 0x00, 0x00, 0x01, 0x00]; "smallest u32")]
    #[test_case(0xFFFF_FFFF, &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF]; "largest u32")]
    #[test_case(0x1_0000_0000, &[0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]; "smallest u64")]
    #[test_case(u64::MAX, &[0xFF; 9]; "largest u64")]
    fn test_conformity(value: u64, expected: &[u8]) {
        let mut encoded = Vec::<u8>::new();
        write(value, &mut encoded);
        assert_eq!(&encoded[..], expected);
        assert_eq!(size(value), expected.len());

        let mut buf = expected;
        assert_eq!(read(&mut buf).unwrap(), value);
        assert!(buf.is_empty());
    }

    #[test_case(&[0xFD, 0xFC, 0x00]; "u16 holding single byte value")]
    #[test_case(&[0xFE, 0xFF, 0xFF, 0x00, 0x00]; "u32 holding u16 value")]
    #[test_case(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]; "u64 holding u32 value")]
    fn test_non_canonical(bytes: &[u8]) {
        let mut buf = bytes;
        assert!(matches!(read(&mut buf), Err(Error::InvalidVarint)));
    }

    #[test]
    fn test_insufficient_buffer() {
        let mut buf = Bytes::from_static(&[]);
        assert!(matches!(read(&mut buf), Err(Error::EndOfBuffer)));
        let mut buf = Bytes::from_static(&[0xFD, 0x01]);
        assert!(matches!(read(&mut buf), Err(Error::EndOfBuffer)));
        let mut buf = Bytes::from_static(&[0xFE, 0x01, 0x02, 0x03]);
        assert!(matches!(read(&mut buf), Err(Error::EndOfBuffer)));
        let mut buf = Bytes::from_static(&[0xFF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
        assert!(matches!(read(&mut buf), Err(Error::EndOfBuffer)));
    }

    #[test]
    fn test_read_len() {
        let mut buf = &[0xFD, 0x00, 0x01][..];
        assert_eq!(read_len(&mut buf).unwrap(), 256);
        assert!(buf.is_empty());
    }
}
