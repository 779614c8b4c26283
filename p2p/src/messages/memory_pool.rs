use super::{level, Error, Identifier, Message};
use bytes::{Buf, BufMut};

/// Request for the transactions in a peer's memory pool.
///
/// The message has no payload: it is an announcement and the command alone carries its meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemoryPool;

impl Message for MemoryPool {
    type Cfg = ();

    const ID: Identifier = Identifier::MemoryPool;
    const VERSION_MINIMUM: u32 = level::BIP35;
    const VERSION_MAXIMUM: u32 = level::MAXIMUM_PROTOCOL;

    fn size(&self, _: u32) -> usize {
        0
    }

    fn write(&self, _: u32, _: &mut impl BufMut) {}

    fn read(version: u32, _: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Self::check_version(version)?;
        Ok(MemoryPool)
    }
}
