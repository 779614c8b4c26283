use bytes::{Buf, BufMut};
use peerwire_codec::{Error, FixedSize, Read, ReadExt, Write};

/// A slot of a compact block, identified by its position in the block.
///
/// Items are embedded in other messages rather than framed on their own, so they implement the
/// codec traits directly. Their shape does not depend on the negotiated version or on whether
/// witness data is requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompactBlockItem {
    pub index: u64,
}

impl CompactBlockItem {
    /// Creates an item for the slot at `index`.
    pub const fn new(index: u64) -> Self {
        Self { index }
    }

    /// Returns the number of bytes the item occupies on the wire.
    pub const fn size(&self, _version: u32, _witness: bool) -> usize {
        Self::SIZE
    }
}

impl Write for CompactBlockItem {
    fn write(&self, buf: &mut impl BufMut) {
        self.index.write(buf);
    }
}

impl Read for CompactBlockItem {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let index = u64::read(buf)?;
        Ok(Self { index })
    }
}

impl FixedSize for CompactBlockItem {
    const SIZE: usize = u64::SIZE;
}
