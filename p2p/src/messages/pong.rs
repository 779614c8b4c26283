use super::{level, Error, Identifier, Message, Ping};
use bytes::{Buf, BufMut};
use peerwire_codec::{FixedSize, ReadExt, Write};

/// Reply to a [Ping], echoing its nonce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pong {
    pub nonce: u64,
}

impl Pong {
    /// Creates the reply to `ping`.
    pub const fn reply(ping: &Ping) -> Self {
        Self { nonce: ping.nonce }
    }
}

impl Message for Pong {
    type Cfg = ();

    const ID: Identifier = Identifier::Pong;
    const VERSION_MINIMUM: u32 = level::BIP31;
    const VERSION_MAXIMUM: u32 = level::MAXIMUM_PROTOCOL;

    fn size(&self, _: u32) -> usize {
        u64::SIZE
    }

    fn write(&self, _: u32, buf: &mut impl BufMut) {
        self.nonce.write(buf);
    }

    fn read(version: u32, buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Self::check_version(version)?;
        let nonce = u64::read(buf)?;
        Ok(Self { nonce })
    }
}
