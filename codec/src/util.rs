//! Helpers shared by the codec implementations.

use crate::Error;
use bytes::Buf;

/// Checks that at least `len` bytes remain in the buffer.
///
/// Every read of a wire-supplied length passes through here before allocating.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    let rem = buf.remaining();
    if rem < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}
