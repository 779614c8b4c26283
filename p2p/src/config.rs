use crate::messages::RejectCfg;
use peerwire_codec::RangeCfg;

/// Limits applied when decoding payloads received from peers.
///
/// By default every length is bounded only by the bytes remaining in the payload, so any
/// well-formed payload is accepted and nothing is allocated beyond the payload's own size.
/// Setting a limit rejects otherwise well-formed payloads that exceed it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum length of the command named by a `reject` message.
    pub max_reject_message: Option<usize>,

    /// Maximum length of the reason text in a `reject` message.
    pub max_reject_reason: Option<usize>,
}

impl Config {
    /// Returns the limits used to read a `reject` payload.
    pub fn reject_cfg(&self) -> RejectCfg {
        RejectCfg {
            message: limit(self.max_reject_message),
            reason: limit(self.max_reject_reason),
        }
    }
}

fn limit(max: Option<usize>) -> RangeCfg<usize> {
    match max {
        Some(max) => (..=max).into(),
        None => (..).into(),
    }
}
