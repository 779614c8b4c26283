//! Codec implementation for length-prefixed [Bytes].
//!
//! The length is written as a CompactSize. When reading, the length must satisfy the supplied
//! [RangeCfg] and fit within the remaining input before any bytes are copied.

use crate::{util::at_least, varint, EncodeSize, Error, RangeCfg, Read, Write};
use bytes::{Buf, BufMut, Bytes};

impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        varint::write(self.len() as u64, buf);
        buf.put_slice(self);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        varint::size(self.len() as u64) + self.len()
    }
}

impl Read for Bytes {
    type Cfg = RangeCfg<usize>;

    #[inline]
    fn read_cfg(buf: &mut impl Buf, range: &Self::Cfg) -> Result<Self, Error> {
        let len = range.check(varint::read_len(buf)?)?;
        at_least(buf, len)?;
        Ok(buf.copy_to_bytes(len))
    }
}
