//! Address codec - fixed-width actor address segments
//!
//! An [`ActorAddress`] occupies exactly [`ActorAddress::SIZE`] bytes on the
//! wire, written and read via its zerocopy representation. No
//! variable-length data, no padding: the width is a compile-time fact both
//! ends of a connection share.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::{EnvelopeError, EnvelopeResult};
use types::ActorAddress;
use zerocopy::{AsBytes, FromBytes};

/// Append the fixed-width encoding of `addr` to the frame
pub fn encode_address(
    addr: &ActorAddress,
    cursor: &mut WriteCursor<'_>,
    context: &str,
) -> EnvelopeResult<()> {
    cursor.put(addr.as_bytes(), context)
}

/// Decode a fixed-width address, failing with BufferUnderrun when fewer
/// than [`ActorAddress::SIZE`] bytes remain
pub fn decode_address(cursor: &mut ReadCursor<'_>, context: &str) -> EnvelopeResult<ActorAddress> {
    let offset = cursor.position();
    let bytes = cursor.take(ActorAddress::SIZE, context)?;
    ActorAddress::read_from(bytes).ok_or_else(|| {
        EnvelopeError::buffer_underrun(ActorAddress::SIZE, bytes.len(), offset, context)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_codec_roundtrip() {
        let addr = ActorAddress::new(2, 3);
        let mut buf = [0u8; ActorAddress::SIZE];
        let mut writer = WriteCursor::new(&mut buf);
        encode_address(&addr, &mut writer, "to").unwrap();
        assert_eq!(writer.written(), ActorAddress::SIZE);

        let mut reader = ReadCursor::new(&buf);
        let back = decode_address(&mut reader, "to").unwrap();
        assert_eq!(back, addr);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_address_decode_underrun() {
        let buf = [0u8; ActorAddress::SIZE - 1];
        let mut reader = ReadCursor::new(&buf);

        let err = decode_address(&mut reader, "from address").unwrap_err();
        assert!(matches!(
            err,
            EnvelopeError::BufferUnderrun { need: 8, remaining: 7, offset: 0, .. }
        ));
    }
}
