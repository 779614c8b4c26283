//! Messages exchanged between peers.
//!
//! Every message type implements [Message], which fixes its command, its identifier, and the
//! inclusive range of negotiated protocol versions for which it may appear on the wire. The
//! streaming [Message::write] and [Message::read] hold all field logic; the slice and
//! whole-buffer entry points are provided on top of them.
//!
//! # Sizing
//!
//! [Message::size] returns the exact number of bytes [Message::write] produces for a given
//! version, so callers can allocate one buffer per message up front.

use bytes::{Buf, BufMut, BytesMut};
use std::sync::Arc;
use thiserror::Error;

mod compact_block_item;
pub use compact_block_item::CompactBlockItem;
pub mod identifier;
pub use identifier::{is_chain, parse_command, Identifier, CHAIN_COMMANDS, COMMAND_SIZE};
pub mod level;
mod memory_pool;
pub use memory_pool::MemoryPool;
mod ping;
pub use ping::Ping;
mod pong;
pub use pong::Pong;
mod reject;
pub use reject::{ReasonCode, Reject, RejectCfg};

/// Errors that can occur when reading a message.
#[derive(Error, Debug)]
pub enum Error {
    #[error("codec error: {0}")]
    Codec(#[from] peerwire_codec::Error),
    #[error("{command} is not supported at version {version}")]
    UnsupportedVersion { command: &'static str, version: u32 },
}

/// The contract satisfied by every wire message.
pub trait Message: Sized + Send + Sync + 'static {
    /// Limits applied while reading untrusted input.
    type Cfg: Clone + Send + Sync + 'static;

    /// Identifier used to dispatch the message.
    const ID: Identifier;

    /// Command carried in the frame header.
    const COMMAND: &'static str = Self::ID.command();

    /// Lowest negotiated version (inclusive) at which the message may be sent or accepted.
    const VERSION_MINIMUM: u32;

    /// Highest negotiated version (inclusive) at which the message may be sent or accepted.
    const VERSION_MAXIMUM: u32;

    /// Returns the exact number of bytes written by [Message::write] at `version`.
    fn size(&self, version: u32) -> usize;

    /// Writes the payload for `version` to a growable sink.
    ///
    /// The version range is not checked here: the shape for `version` is written as is.
    fn write(&self, version: u32, buf: &mut impl BufMut);

    /// Reads the payload for `version` from a cursor.
    ///
    /// Fails if `version` is outside of the supported range or the input is malformed. On
    /// failure the cursor may be partially consumed.
    fn read(version: u32, buf: &mut impl Buf, cfg: &Self::Cfg) -> Result<Self, Error>;

    /// Returns true if the message may appear on the wire at `version`.
    fn supports(version: u32) -> bool {
        (Self::VERSION_MINIMUM..=Self::VERSION_MAXIMUM).contains(&version)
    }

    /// Returns an error if the message may not appear on the wire at `version`.
    fn check_version(version: u32) -> Result<(), Error> {
        if !Self::supports(version) {
            return Err(Error::UnsupportedVersion {
                command: Self::COMMAND,
                version,
            });
        }
        Ok(())
    }

    /// Writes the payload into the front of `data`, which should be sized with
    /// [Message::size].
    ///
    /// Returns false without touching `data` if `version` is unsupported or `data` is too
    /// small. If fewer bytes than [Message::size] were produced, the first [Message::size]
    /// bytes of `data` are zeroed and false is returned.
    fn serialize(&self, version: u32, data: &mut [u8]) -> bool {
        if !Self::supports(version) {
            return false;
        }
        let size = self.size(version);
        let Some(target) = data.get_mut(..size) else {
            return false;
        };
        let mut cursor = &mut *target;
        self.write(version, &mut cursor);
        let complete = cursor.is_empty();
        if !complete {
            target.fill(0);
        }
        complete
    }

    /// Encodes the payload into a buffer allocated with the exact size.
    ///
    /// Returns `None` if `version` is unsupported.
    fn encode(&self, version: u32) -> Option<BytesMut> {
        if !Self::supports(version) {
            return None;
        }
        let len = self.size(version);
        let mut buffer = BytesMut::with_capacity(len);
        self.write(version, &mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        Some(buffer)
    }

    /// Decodes a complete payload, failing if any bytes are left over.
    fn decode_cfg(version: u32, mut data: &[u8], cfg: &Self::Cfg) -> Result<Self, Error> {
        let message = Self::read(version, &mut data, cfg)?;
        let remaining = data.remaining();
        if remaining > 0 {
            return Err(peerwire_codec::Error::ExtraData(remaining).into());
        }
        Ok(message)
    }

    /// Decodes a complete payload into a shared, immutable message.
    ///
    /// Returns `None` on any malformed input.
    fn deserialize_cfg(version: u32, data: &[u8], cfg: &Self::Cfg) -> Option<Arc<Self>> {
        Self::decode_cfg(version, data, cfg).ok().map(Arc::new)
    }

    /// Decodes a complete payload using the default limits.
    fn deserialize(version: u32, data: &[u8]) -> Option<Arc<Self>>
    where
        Self::Cfg: Default,
    {
        Self::deserialize_cfg(version, data, &Default::default())
    }
}
