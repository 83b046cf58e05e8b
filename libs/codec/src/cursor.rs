//! Bounds-checked buffer cursors
//!
//! Every codec step advances a cursor instead of doing ad-hoc pointer
//! arithmetic, so the bounds check is structural: a field simply cannot be
//! read past the end of the source range or written past the end of the
//! destination range. Underrun errors carry the offset and the field that
//! ran dry.

use crate::error::{EnvelopeError, EnvelopeResult};

/// Read-side cursor over a received frame
///
/// Tracks position and remaining length across decode steps. Decoding from
/// untrusted input discovers the frame's real size field by field, so every
/// `take` checks before it reads.
#[derive(Debug)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Start a cursor at the beginning of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the frame
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume exactly `count` bytes, or fail without reading out of bounds
    pub fn take(&mut self, count: usize, context: &str) -> EnvelopeResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(EnvelopeError::buffer_underrun(
                count,
                self.remaining(),
                self.pos,
                context,
            ));
        }
        let bytes = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    /// Consume a single byte
    pub fn take_u8(&mut self, context: &str) -> EnvelopeResult<u8> {
        Ok(self.take(1, context)?[0])
    }

    /// Consume everything left in the frame
    pub fn take_rest(&mut self) -> &'a [u8] {
        let bytes = &self.buf[self.pos..];
        self.pos = self.buf.len();
        bytes
    }
}

/// Write-side cursor over a caller-supplied destination buffer
///
/// Pack checks the full frame size once up front (the encoder knows its
/// size in advance from owned state), so these writes are expected to
/// succeed; the per-write check keeps an arithmetic slip from ever
/// escaping the buffer.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Start a cursor at the beginning of `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Append `bytes`, or fail without touching anything past the buffer end
    pub fn put(&mut self, bytes: &[u8], context: &str) -> EnvelopeResult<()> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(EnvelopeError::buffer_too_small(
                end,
                self.buf.len(),
                context,
            ));
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Append a single byte
    pub fn put_u8(&mut self, byte: u8, context: &str) -> EnvelopeResult<()> {
        self.put(&[byte], context)
    }
}
