//! Read and write the primitives of the peer wire format.
//!
//! # Overview
//!
//! A binary serialization library designed to efficiently and safely:
//! - Serialize structured data into the peer wire format
//! - Deserialize untrusted binary input into structured data
//!
//! # Wire Conventions
//!
//! - Fixed-width integers are little-endian.
//! - Lengths are encoded as CompactSize variable-length integers (see [varint]).
//! - Variable-length values ([bytes::Bytes]) are a CompactSize length followed by the raw
//!   bytes. Readers require a [RangeCfg] bounding the length, which is checked before
//!   any allocation takes place.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `bool`
//! - Fixed-size arrays like `[u8; N]`
//! - Length-prefixed [bytes::Bytes]
//!
//! User-defined types can be serialized and deserialized by implementing [Write], [Read], and
//! [EncodeSize] (or [FixedSize] for types with a constant encoded size).
//!
//! # Example
//!
//! ```
//! use bytes::{Buf, BufMut, Bytes};
//! use peerwire_codec::{DecodeExt, Encode, EncodeSize, Error, RangeCfg, Read, ReadExt, Write};
//!
//! // Define a custom struct
//! #[derive(Debug, Clone, PartialEq)]
//! struct Item {
//!     height: u32,
//!     label: Bytes,
//! }
//!
//! // Implement the `Write` trait
//! impl Write for Item {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.height.write(buf);
//!         self.label.write(buf);
//!     }
//! }
//!
//! // Implement the `Read` trait
//! impl Read for Item {
//!     type Cfg = ();
//!
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let height = u32::read(buf)?;
//!         let label = Bytes::read_cfg(buf, &RangeCfg::from(..=64))?;
//!         Ok(Self { height, label })
//!     }
//! }
//!
//! // Since `Item` has a variable size, we implement `EncodeSize` manually.
//! impl EncodeSize for Item {
//!     fn encode_size(&self) -> usize {
//!         self.height.encode_size() + self.label.encode_size()
//!     }
//! }
//!
//! let item = Item { height: 7, label: Bytes::from_static(b"tip") };
//! let encoded = item.encode();
//! assert_eq!(encoded.len(), 4 + 1 + 3);
//! assert_eq!(Item::decode(encoded).unwrap(), item);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod types;
pub(crate) mod util;
pub mod varint;

// Re-export main types and traits
pub use codec::{
    Decode, DecodeExt, Encode, EncodeSize, FixedSize, Read, ReadExt, ReadRangeExt, Write,
};
pub use config::RangeCfg;
pub use error::Error;
