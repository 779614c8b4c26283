//! Negotiated protocol versions at which the wire format changed.
//!
//! Message types express their supported range in terms of these levels.

/// Used to compute sizes outside of a peer session (no negotiated version).
pub const CANONICAL: u32 = 0;

/// Lowest protocol version accepted from a peer (`addr` entries carry a timestamp).
pub const MINIMUM_PROTOCOL: u32 = 31402;

/// `getheaders` and `headers` messages.
pub const HEADERS: u32 = 31800;

/// `pong` message and the `ping` nonce.
pub const BIP31: u32 = 60001;

/// `mempool` message.
pub const BIP35: u32 = 60002;

/// Bloom filters and the `version` relay flag.
pub const BIP37: u32 = 70001;

/// `reject` message.
pub const BIP61: u32 = 70002;

/// `NODE_BLOOM` service bit.
pub const BIP111: u32 = 70011;

/// `sendheaders` message.
pub const BIP130: u32 = 70012;

/// `feefilter` message.
pub const BIP133: u32 = 70013;

/// Compact block relay.
pub const BIP152: u32 = 70014;

/// `wtxidrelay` message.
pub const BIP339: u32 = 70016;

/// Highest protocol version this implementation speaks.
pub const MAXIMUM_PROTOCOL: u32 = BIP339;
