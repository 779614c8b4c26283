//! Negative acknowledgement of a previously received message.
//!
//! # Wire Format
//!
//! ```text
//! +-----------+------+----------+-----------------------+
//! | message   | code | reason   | hash                  |
//! | var bytes | u8   | var bytes| 32 bytes, chain only  |
//! +-----------+------+----------+-----------------------+
//! ```
//!
//! The `hash` is present if and only if `message` names a block or transaction relay command
//! (see [is_chain]). No flag marks its presence: sizing, writing, and reading all derive it from
//! the value of `message`.
//!
//! `message` and `reason` are carried as raw bytes. Peers are not required to send UTF-8 or to
//! stay within any length other than the payload itself, and every payload that decodes must
//! re-encode to the same bytes.

use super::{identifier::is_chain, level, Error, Identifier, Message};
use bytes::{Buf, BufMut, Bytes};
use peerwire_codec::{EncodeSize, Error as CodecError, FixedSize, RangeCfg, Read, ReadExt, Write};
use peerwire_cryptography::sha256::Digest;

/// Reason a message was rejected.
///
/// Each variant has a fixed byte on the wire. Bytes without a variant decode to
/// [ReasonCode::Undefined] so that codes introduced by newer peers do not break parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// The reason code is not defined.
    #[default]
    Undefined,

    /// The message was malformed.
    Malformed,

    /// The block or transaction is invalid.
    Invalid,

    /// The version or block version is obsolete.
    Obsolete,

    /// The transaction double spends, or a duplicate `version` was received.
    Duplicate,

    /// The transaction is nonstandard.
    Nonstandard,

    /// The transaction has dust outputs.
    Dust,

    /// The transaction pays an insufficient fee.
    InsufficientFee,

    /// The block conflicts with a checkpoint.
    Checkpoint,
}

impl ReasonCode {
    /// Returns the byte that represents the code on the wire.
    pub const fn to_byte(self) -> u8 {
        match self {
            ReasonCode::Undefined => 0x00,
            ReasonCode::Malformed => 0x01,
            ReasonCode::Invalid => 0x10,
            ReasonCode::Obsolete => 0x11,
            ReasonCode::Duplicate => 0x12,
            ReasonCode::Nonstandard => 0x40,
            ReasonCode::Dust => 0x41,
            ReasonCode::InsufficientFee => 0x42,
            ReasonCode::Checkpoint => 0x43,
        }
    }

    /// Returns the code represented by `byte`, or [ReasonCode::Undefined] if there is none.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0x01 => ReasonCode::Malformed,
            0x10 => ReasonCode::Invalid,
            0x11 => ReasonCode::Obsolete,
            0x12 => ReasonCode::Duplicate,
            0x40 => ReasonCode::Nonstandard,
            0x41 => ReasonCode::Dust,
            0x42 => ReasonCode::InsufficientFee,
            0x43 => ReasonCode::Checkpoint,
            _ => ReasonCode::Undefined,
        }
    }
}

impl Write for ReasonCode {
    fn write(&self, buf: &mut impl BufMut) {
        self.to_byte().write(buf);
    }
}

impl Read for ReasonCode {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        u8::read(buf).map(Self::from_byte)
    }
}

impl FixedSize for ReasonCode {
    const SIZE: usize = u8::SIZE;
}

/// Limits applied when reading a [Reject].
///
/// By default lengths are bounded only by the bytes remaining in the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectCfg {
    /// Allowed length of the rejected command.
    pub message: RangeCfg<usize>,

    /// Allowed length of the reason text.
    pub reason: RangeCfg<usize>,
}

impl Default for RejectCfg {
    fn default() -> Self {
        Self {
            message: (..).into(),
            reason: (..).into(),
        }
    }
}

/// Rejection of a message received from a peer.
///
/// `hash` is only carried on the wire when `message` is a chain command. For any other
/// `message` it should be left as the default (zero) digest, which is what decoding produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reject {
    /// Command of the rejected message.
    pub message: Bytes,

    /// Why the message was rejected.
    pub code: ReasonCode,

    /// Explanation, usually (but not necessarily) printable text.
    pub reason: Bytes,

    /// Digest of the rejected block or transaction.
    pub hash: Digest,
}

impl Reject {
    /// Creates a rejection of `rejected` without a subject digest.
    pub fn new(rejected: Identifier, code: ReasonCode, reason: impl Into<Bytes>) -> Self {
        Self {
            message: Bytes::from_static(rejected.command().as_bytes()),
            code,
            reason: reason.into(),
            hash: Digest::default(),
        }
    }

    /// Creates a rejection of `rejected` referring to the block or transaction `hash`.
    pub fn with_hash(
        rejected: Identifier,
        code: ReasonCode,
        reason: impl Into<Bytes>,
        hash: Digest,
    ) -> Self {
        Self {
            hash,
            ..Self::new(rejected, code, reason)
        }
    }

    /// Returns the wire byte of `code`.
    pub const fn reason_to_byte(code: ReasonCode) -> u8 {
        code.to_byte()
    }

    /// Returns the code for a wire byte, canonicalizing unknown bytes to
    /// [ReasonCode::Undefined].
    pub const fn byte_to_reason(byte: u8) -> ReasonCode {
        ReasonCode::from_byte(byte)
    }

    /// Returns true if the wire form carries `hash`.
    pub fn has_hash(&self) -> bool {
        is_chain(&self.message)
    }
}

impl Message for Reject {
    type Cfg = RejectCfg;

    const ID: Identifier = Identifier::Reject;
    const VERSION_MINIMUM: u32 = level::BIP61;
    const VERSION_MAXIMUM: u32 = level::MAXIMUM_PROTOCOL;

    fn size(&self, _: u32) -> usize {
        let hash = if self.has_hash() { Digest::SIZE } else { 0 };
        self.message.encode_size() + ReasonCode::SIZE + self.reason.encode_size() + hash
    }

    fn write(&self, _: u32, buf: &mut impl BufMut) {
        self.message.write(buf);
        self.code.write(buf);
        self.reason.write(buf);
        if self.has_hash() {
            self.hash.write(buf);
        }
    }

    fn read(version: u32, buf: &mut impl Buf, cfg: &RejectCfg) -> Result<Self, Error> {
        Self::check_version(version)?;
        let message = Bytes::read_cfg(buf, &cfg.message)?;
        let code = ReasonCode::read(buf)?;
        let reason = Bytes::read_cfg(buf, &cfg.reason)?;
        let hash = if is_chain(&message) {
            Digest::read(buf)?
        } else {
            Digest::default()
        };
        Ok(Self {
            message,
            code,
            reason,
            hash,
        })
    }
}
