//! Encode and decode the messages exchanged between blockchain peers.
//!
//! Each message type knows its command, the range of negotiated protocol versions in which it
//! may appear, and how to size, write, and read its payload at a given version (see
//! [messages::Message]). Payloads arriving from a peer are routed to their type by command with
//! [dispatch::Payload::deserialize].
//!
//! Decoding never panics on untrusted input: malformed payloads, unsupported versions, and
//! oversized length prefixes are reported as errors before anything is allocated for them.
//!
//! # Example
//!
//! ```rust
//! use peerwire_p2p::{
//!     messages::{level, Identifier, Message, ReasonCode, Reject},
//!     Config, Payload,
//! };
//!
//! let reject = Reject::new(Identifier::Version, ReasonCode::Obsolete, "upgrade");
//! let encoded = reject.encode(level::BIP61).unwrap();
//!
//! let payload = Payload::deserialize(&Config::default(), "reject", level::BIP61, &encoded).unwrap();
//! assert_eq!(payload.identifier(), Identifier::Reject);
//! assert_eq!(payload.encode(level::BIP61).unwrap(), encoded);
//! ```
//!
//! # Status
//!
//! `peerwire-p2p` is **ALPHA** software and is not yet recommended for production use. Developers
//! should expect breaking changes and occasional instability.

pub mod config;
pub use config::Config;
pub mod dispatch;
pub use dispatch::{Error, Payload};
pub mod messages;
pub use messages::Message;
