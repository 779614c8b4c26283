//! Command identifiers used to dispatch wire messages.
//!
//! Each message type is named on the wire by a short ASCII command carried in the frame header,
//! padded with zeros to [COMMAND_SIZE] bytes.

use std::fmt::{self, Display};

/// Number of bytes occupied by a command in the frame header.
pub const COMMAND_SIZE: usize = 12;

/// Commands that relay blocks or transactions.
///
/// A `reject` of one of these commands carries the digest of the rejected block or
/// transaction. Relay commands added to the protocol belong here.
pub const CHAIN_COMMANDS: &[Identifier] = &[Identifier::Block, Identifier::Transaction];

/// Identifier of every command in the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    Address,
    AddressV2,
    Alert,
    Block,
    BlockTransactions,
    CompactBlock,
    FeeFilter,
    FilterAdd,
    FilterClear,
    FilterLoad,
    GetAddress,
    GetBlocks,
    GetBlockTransactions,
    GetData,
    GetHeaders,
    Headers,
    Inventory,
    MemoryPool,
    MerkleBlock,
    NotFound,
    Ping,
    Pong,
    Reject,
    SendAddressV2,
    SendCompact,
    SendHeaders,
    Transaction,
    Verack,
    Version,
    WitnessTxIdRelay,
}

impl Identifier {
    /// All identifiers, in command order.
    pub const ALL: [Identifier; 30] = [
        Identifier::Address,
        Identifier::AddressV2,
        Identifier::Alert,
        Identifier::Block,
        Identifier::BlockTransactions,
        Identifier::CompactBlock,
        Identifier::FeeFilter,
        Identifier::FilterAdd,
        Identifier::FilterClear,
        Identifier::FilterLoad,
        Identifier::GetAddress,
        Identifier::GetBlocks,
        Identifier::GetBlockTransactions,
        Identifier::GetData,
        Identifier::GetHeaders,
        Identifier::Headers,
        Identifier::Inventory,
        Identifier::MemoryPool,
        Identifier::MerkleBlock,
        Identifier::NotFound,
        Identifier::Ping,
        Identifier::Pong,
        Identifier::Reject,
        Identifier::SendAddressV2,
        Identifier::SendCompact,
        Identifier::SendHeaders,
        Identifier::Transaction,
        Identifier::Verack,
        Identifier::Version,
        Identifier::WitnessTxIdRelay,
    ];

    /// Returns the command carried on the wire.
    pub const fn command(self) -> &'static str {
        match self {
            Identifier::Address => "addr",
            Identifier::AddressV2 => "addrv2",
            Identifier::Alert => "alert",
            Identifier::Block => "block",
            Identifier::BlockTransactions => "blocktxn",
            Identifier::CompactBlock => "cmpctblock",
            Identifier::FeeFilter => "feefilter",
            Identifier::FilterAdd => "filteradd",
            Identifier::FilterClear => "filterclear",
            Identifier::FilterLoad => "filterload",
            Identifier::GetAddress => "getaddr",
            Identifier::GetBlocks => "getblocks",
            Identifier::GetBlockTransactions => "getblocktxn",
            Identifier::GetData => "getdata",
            Identifier::GetHeaders => "getheaders",
            Identifier::Headers => "headers",
            Identifier::Inventory => "inv",
            Identifier::MemoryPool => "mempool",
            Identifier::MerkleBlock => "merkleblock",
            Identifier::NotFound => "notfound",
            Identifier::Ping => "ping",
            Identifier::Pong => "pong",
            Identifier::Reject => "reject",
            Identifier::SendAddressV2 => "sendaddrv2",
            Identifier::SendCompact => "sendcmpct",
            Identifier::SendHeaders => "sendheaders",
            Identifier::Transaction => "tx",
            Identifier::Verack => "verack",
            Identifier::Version => "version",
            Identifier::WitnessTxIdRelay => "wtxidrelay",
        }
    }

    /// Looks up the identifier for a command.
    pub fn from_command(command: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.command() == command)
    }

    /// Returns the command padded to its frame header representation.
    pub fn to_wire(self) -> [u8; COMMAND_SIZE] {
        let command = self.command().as_bytes();
        let mut wire = [0u8; COMMAND_SIZE];
        wire[..command.len()].copy_from_slice(command);
        wire
    }

    /// Returns true if the command relays a block or transaction.
    pub fn is_chain(self) -> bool {
        CHAIN_COMMANDS.contains(&self)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Returns true if `command` names a block or transaction relay command.
///
/// Messages whose wire shape depends on the command they refer to (see
/// [crate::messages::Reject]) consult this for sizing, writing, and reading alike. The command
/// is compared as raw bytes, so text that is not a known command (or not UTF-8) is never a
/// chain command.
pub fn is_chain(command: impl AsRef<[u8]>) -> bool {
    let command = command.as_ref();
    CHAIN_COMMANDS
        .iter()
        .any(|id| id.command().as_bytes() == command)
}

/// Extracts the command from its frame header representation.
///
/// The command must be printable ASCII followed only by zero padding.
pub fn parse_command(wire: &[u8; COMMAND_SIZE]) -> Option<&str> {
    let end = wire.iter().position(|b| *b == 0).unwrap_or(COMMAND_SIZE);
    let (command, padding) = wire.split_at(end);
    if padding.iter().any(|b| *b != 0) || !command.iter().all(u8::is_ascii_graphic) {
        return None;
    }
    std::str::from_utf8(command).ok()
}
