//! Name codec - length-prefixed actor name segments
//!
//! A named destination spends one length byte followed by up to
//! [`MAX_ACTOR_NAME`] raw UTF-8 bytes. Oversized names are rejected
//! outright - the wire format cannot represent them and silent truncation
//! would deliver mail to the wrong actor.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::{EnvelopeError, EnvelopeResult};
use types::{MAX_ACTOR_NAME, NAME_LEN_PREFIX_SIZE};

/// Encoded width of `name`: one length byte plus the raw bytes
pub fn encoded_len(name: &str) -> usize {
    NAME_LEN_PREFIX_SIZE + name.len()
}

/// Append the length-prefixed encoding of `name` to the frame
///
/// Fails with NameTooLong before writing anything when the name exceeds
/// [`MAX_ACTOR_NAME`] bytes.
pub fn encode_name(name: &str, cursor: &mut WriteCursor<'_>) -> EnvelopeResult<()> {
    if name.len() > MAX_ACTOR_NAME {
        return Err(EnvelopeError::name_too_long(name.len()));
    }
    cursor.put_u8(name.len() as u8, "name length")?;
    cursor.put(name.as_bytes(), "name bytes")
}

/// Decode a length-prefixed name, consuming `1 + L` bytes
///
/// Reads the length byte `L`, then requires `L` further bytes in the
/// source range. The boundary is `1 + L <= remaining` - a name may end
/// exactly at the end of the segment the caller handed over.
pub fn decode_name(cursor: &mut ReadCursor<'_>) -> EnvelopeResult<String> {
    let len = cursor.take_u8("name length")? as usize;
    let offset = cursor.position();
    let bytes = cursor.take(len, "name bytes")?;
    let name = std::str::from_utf8(bytes).map_err(|_| EnvelopeError::NameNotUtf8 { offset })?;
    Ok(name.to_string())
}
