//! Hash digests carried by peer wire messages.
//!
//! Messages reference blocks and transactions by their double SHA-256 digests. This crate
//! provides the [Digest] type that messages embed. Computing digests of message contents is
//! left to the layers that validate them.

pub mod sha256;
pub use sha256::{double_hash, Digest};
