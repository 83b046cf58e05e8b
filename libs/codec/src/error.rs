//! Envelope codec errors
//!
//! Every failure the codec can produce, with enough context to tell a
//! truncated frame from an undersized destination buffer from a caller-side
//! data error. All variants are detected locally, returned to the immediate
//! caller and never retried - a malformed buffer cannot become well-formed
//! by trying again.

use thiserror::Error;
use types::MAX_ACTOR_NAME;

/// Mail envelope codec errors
///
/// `BufferTooSmall` is a pack-side failure (the caller's destination buffer
/// cannot hold the frame). `BufferUnderrun` is an unpack-side failure (the
/// received frame ends before the next field does). `NameTooLong` is a
/// caller-side data error surfaced at encode time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Destination buffer capacity is below the frame's required size
    #[error("Buffer too small: need {need} bytes, capacity {capacity} (context: {context})")]
    BufferTooSmall {
        need: usize,
        capacity: usize,
        context: String,
    },

    /// Source range ends before the next field can be decoded
    #[error("Buffer underrun: need {need} bytes at offset {offset}, {remaining} remain (context: {context})")]
    BufferUnderrun {
        need: usize,
        remaining: usize,
        offset: usize,
        context: String,
    },

    /// Actor name exceeds the single length byte the wire format affords
    #[error("Actor name too long: {len} bytes exceeds limit {limit}, rejecting without truncation")]
    NameTooLong { len: usize, limit: usize },

    /// Mode byte does not map to any known addressing mode
    #[error("Unknown addressing mode {mode}: known modes are 1 (ByAddress) and 2 (ByName)")]
    UnknownAddressingMode { mode: u8 },

    /// Decoded name bytes are not valid UTF-8
    #[error("Actor name at frame offset {offset} is not valid UTF-8")]
    NameNotUtf8 { offset: usize },
}

impl EnvelopeError {
    /// Create a BufferTooSmall error with pack-site context
    pub fn buffer_too_small(need: usize, capacity: usize, context: impl Into<String>) -> Self {
        Self::BufferTooSmall {
            need,
            capacity,
            context: context.into(),
        }
    }

    /// Create a BufferUnderrun error naming the field that ran out of bytes
    pub fn buffer_underrun(
        need: usize,
        remaining: usize,
        offset: usize,
        context: impl Into<String>,
    ) -> Self {
        Self::BufferUnderrun {
            need,
            remaining,
            offset,
            context: context.into(),
        }
    }

    /// Create a NameTooLong error for the wire-format name limit
    pub fn name_too_long(len: usize) -> Self {
        Self::NameTooLong {
            len,
            limit: MAX_ACTOR_NAME,
        }
    }
}

/// Result type for envelope codec operations
pub type EnvelopeResult<T> = std::result::Result<T, EnvelopeError>;
