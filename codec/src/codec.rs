//! Core codec traits and implementations

use crate::{Error, RangeCfg};
use bytes::{Buf, BufMut, BytesMut};
use core::ops::RangeBounds;

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations panic if the buffer doesn't have enough capacity. Callers that write
    /// into a fixed slice must size it with [EncodeSize::encode_size] first.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that know the exact length of their encoding.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes that will be written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

// Automatically implement `EncodeSize` for types with a known size.
impl<T: FixedSize> EncodeSize for T {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

/// Trait for types that can be read/decoded from a buffer.
///
/// The `Cfg` associated type allows for configuration during the read process. It is used to
/// limit the maximum size of allocated buffers when decoding untrusted data. Use `()` for types
/// that do not require configuration.
pub trait Read: Sized {
    /// Configuration consulted while reading.
    type Cfg: Clone + Send + Sync + 'static;

    /// Reads a value from the buffer using the provided configuration `cfg`, consuming the
    /// necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., invalid data, not enough bytes). On failure
    /// the buffer may be partially consumed.
    fn read_cfg(buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error>;
}

/// Trait for types that can be encoded to a freshly allocated buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer allocated with the exact encoded size.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> BytesMut {
        let len = self.encode_size();
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        buffer
    }
}

// Automatically implement `Encode` for types that implement `Write` and `EncodeSize`.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be decoded from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode_cfg(mut buf: impl Buf, cfg: &Self::Cfg) -> Result<Self, Error> {
        let result = Self::read_cfg(&mut buf, cfg)?;

        // Check that the buffer is fully consumed.
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Extension trait providing an ergonomic read method for types requiring no configuration.
pub trait ReadExt: Read<Cfg = ()> {
    /// Reads a value using the default `()` config.
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        Self::read_cfg(buf, &())
    }
}

// Automatically implement `ReadExt` for types that implement `Read` with no config.
impl<T: Read<Cfg = ()>> ReadExt for T {}

/// Extension trait providing ergonomic decode method for types requiring no configuration.
pub trait DecodeExt: Decode + Read<Cfg = ()> {
    /// Decodes a value using the default `()` config.
    fn decode(buf: impl Buf) -> Result<Self, Error> {
        Self::decode_cfg(buf, &())
    }
}

// Automatically implement `DecodeExt` for types that implement `Decode` with no config.
impl<T: Decode + Read<Cfg = ()>> DecodeExt for T {}

/// Extension trait for length-prefixed types configured only by a length range.
pub trait ReadRangeExt: Read<Cfg = RangeCfg<usize>> {
    /// Reads a value whose length prefix must fall within `range`.
    fn read_range(buf: &mut impl Buf, range: impl RangeBounds<usize>) -> Result<Self, Error> {
        Self::read_cfg(buf, &RangeCfg::new(range))
    }

    /// Decodes a value whose length prefix must fall within `range`, consuming all of `buf`.
    fn decode_range(buf: impl Buf, range: impl RangeBounds<usize>) -> Result<Self, Error> {
        Self::decode_cfg(buf, &RangeCfg::new(range))
    }
}

// Automatically implement `ReadRangeExt` for types configured by a length range.
impl<T: Read<Cfg = RangeCfg<usize>>> ReadRangeExt for T {}
