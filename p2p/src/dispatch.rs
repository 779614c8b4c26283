//! Route payloads to their message type by command.
//!
//! The frame header names the command and the session fixes the negotiated version. Given both,
//! [Payload::deserialize] picks the message type, decodes the whole payload with the limits in
//! [Config], and returns a shared handle to the result.

use crate::{
    config::Config,
    messages::{self, Identifier, MemoryPool, Message, Ping, Pong, Reject},
};
use bytes::BytesMut;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur when dispatching a payload.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("no decoder for command: {0}")]
    Unimplemented(Identifier),
    #[error("{command} is not supported at version {version}")]
    UnsupportedVersion { command: &'static str, version: u32 },
    #[error("malformed {0} payload")]
    Malformed(&'static str),
}

/// A decoded message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    MemoryPool(Arc<MemoryPool>),
    Ping(Arc<Ping>),
    Pong(Arc<Pong>),
    Reject(Arc<Reject>),
}

impl Payload {
    /// Decodes `data` as the payload of `command` at `version`.
    ///
    /// All of `data` must be consumed.
    pub fn deserialize(
        config: &Config,
        command: &str,
        version: u32,
        data: &[u8],
    ) -> Result<Self, Error> {
        let Some(id) = Identifier::from_command(command) else {
            debug!(command, len = data.len(), "dropping unknown command");
            return Err(Error::UnknownCommand(command.to_string()));
        };
        let payload = match id {
            Identifier::MemoryPool => Self::MemoryPool(decode(version, data, &())?),
            Identifier::Ping => Self::Ping(decode(version, data, &())?),
            Identifier::Pong => Self::Pong(decode(version, data, &())?),
            Identifier::Reject => Self::Reject(decode(version, data, &config.reject_cfg())?),
            id => {
                debug!(command = id.command(), "dropping unimplemented command");
                return Err(Error::Unimplemented(id));
            }
        };
        trace!(command, version, len = data.len(), "decoded payload");
        Ok(payload)
    }

    /// Returns the identifier of the decoded message.
    pub fn identifier(&self) -> Identifier {
        match self {
            Self::MemoryPool(_) => MemoryPool::ID,
            Self::Ping(_) => Ping::ID,
            Self::Pong(_) => Pong::ID,
            Self::Reject(_) => Reject::ID,
        }
    }

    /// Returns the number of bytes the payload occupies at `version`.
    pub fn size(&self, version: u32) -> usize {
        match self {
            Self::MemoryPool(m) => m.size(version),
            Self::Ping(m) => m.size(version),
            Self::Pong(m) => m.size(version),
            Self::Reject(m) => m.size(version),
        }
    }

    /// Encodes the payload at `version`, or returns `None` if the message is not supported there.
    pub fn encode(&self, version: u32) -> Option<BytesMut> {
        match self {
            Self::MemoryPool(m) => m.encode(version),
            Self::Ping(m) => m.encode(version),
            Self::Pong(m) => m.encode(version),
            Self::Reject(m) => m.encode(version),
        }
    }
}

fn decode<M: Message>(version: u32, data: &[u8], cfg: &M::Cfg) -> Result<Arc<M>, Error> {
    match M::decode_cfg(version, data, cfg) {
        Ok(message) => Ok(Arc::new(message)),
        Err(messages::Error::UnsupportedVersion { command, version }) => {
            debug!(command, version, "dropping message at unsupported version");
            Err(Error::UnsupportedVersion { command, version })
        }
        Err(messages::Error::Codec(err)) => {
            debug!(command = M::COMMAND, version, ?err, "dropping malformed message");
            Err(Error::Malformed(M::COMMAND))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{level, ReasonCode};
    use peerwire_cryptography::double_hash;
    use peerwire_macros::test_traced;

    #[test_traced]
    fn test_dispatch_reject() {
        let reject = Reject::with_hash(
            Identifier::Transaction,
            ReasonCode::InsufficientFee,
            "fee too low",
            double_hash(b"tx"),
        );
        let encoded = reject.encode(level::BIP61).unwrap();

        let payload =
            Payload::deserialize(&Config::default(), "reject", level::BIP61, &encoded).unwrap();
        assert_eq!(payload.identifier(), Identifier::Reject);
        assert_eq!(payload.size(level::BIP61), encoded.len());
        assert_eq!(payload.encode(level::BIP61).unwrap(), encoded);
        assert_eq!(payload, Payload::Reject(Arc::new(reject)));
    }

    #[test_traced]
    fn test_dispatch_empty_payloads() {
        let version = level::MAXIMUM_PROTOCOL;
        let payload = Payload::deserialize(&Config::default(), "mempool", version, &[]).unwrap();
        assert_eq!(payload, Payload::MemoryPool(Arc::new(MemoryPool)));
        assert!(payload.encode(version).unwrap().is_empty());

        // Ping predating the nonce
        let payload =
            Payload::deserialize(&Config::default(), "ping", level::HEADERS, &[]).unwrap();
        assert_eq!(payload.identifier(), Identifier::Ping);
        assert_eq!(payload.size(level::HEADERS), 0);
    }

    #[test_traced]
    fn test_dispatch_ping_pong() {
        let version = level::BIP31;
        let nonce = 0xdead_beef_u64.to_le_bytes();
        let ping = Payload::deserialize(&Config::default(), "ping", version, &nonce).unwrap();
        let pong = Payload::deserialize(&Config::default(), "pong", version, &nonce).unwrap();
        assert_eq!(ping.encode(version), pong.encode(version));
        assert_ne!(ping.identifier(), pong.identifier());
    }

    #[test_traced("TRACE")]
    fn test_unknown_command() {
        let result = Payload::deserialize(&Config::default(), "nonsense", level::BIP61, &[]);
        assert!(matches!(result, Err(Error::UnknownCommand(c)) if c == "nonsense"));
    }

    #[test_traced]
    fn test_unimplemented_command() {
        let result = Payload::deserialize(&Config::default(), "block", level::BIP61, &[]);
        assert!(matches!(result, Err(Error::Unimplemented(Identifier::Block))));
    }

    #[test_traced]
    fn test_unsupported_version() {
        let result = Payload::deserialize(&Config::default(), "mempool", level::BIP35 - 1, &[]);
        assert!(matches!(
            result,
            Err(Error::UnsupportedVersion {
                command: "mempool",
                version: 60001,
            })
        ));

        let result = Payload::deserialize(&Config::default(), "pong", level::HEADERS, &[0; 8]);
        assert!(matches!(
            result,
            Err(Error::UnsupportedVersion {
                command: "pong",
                ..
            })
        ));
    }

    #[test_traced]
    fn test_malformed() {
        let version = level::MAXIMUM_PROTOCOL;
        let result = Payload::deserialize(&Config::default(), "mempool", version, &[0]);
        assert!(matches!(result, Err(Error::Malformed("mempool"))));

        let result = Payload::deserialize(&Config::default(), "reject", version, &[0x02, b't']);
        assert!(matches!(result, Err(Error::Malformed("reject"))));
    }

    #[test_traced]
    fn test_config_limits() {
        let reject = Reject::new(Identifier::Headers, ReasonCode::Invalid, "too many headers");
        let encoded = reject.encode(level::BIP61).unwrap();

        let strict = Config {
            max_reject_reason: Some(8),
            ..Default::default()
        };
        assert!(matches!(
            Payload::deserialize(&strict, "reject", level::BIP61, &encoded),
            Err(Error::Malformed("reject"))
        ));
        assert!(Payload::deserialize(&Config::default(), "reject", level::BIP61, &encoded).is_ok());
    }

    #[test_traced]
    fn test_long_reason_accepted_by_default() {
        let reject = Reject::new(Identifier::Transaction, ReasonCode::Dust, vec![0xFFu8; 150]);
        let encoded = reject.encode(level::BIP61).unwrap();
        let payload =
            Payload::deserialize(&Config::default(), "reject", level::BIP61, &encoded).unwrap();
        assert_eq!(payload.encode(level::BIP61).unwrap(), encoded);
    }
}
