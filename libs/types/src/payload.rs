//! Opaque payload contract
//!
//! The envelope layers treat payloads as uninterpreted byte carriers. This
//! module defines the entire contract: expose your bytes for transport,
//! report your size, and reconstruct yourself from the received tail.
//!
//! Does NOT handle:
//! - Payload framing (the envelope knows where the payload starts)
//! - Application-level validation or schemas
//! - Ownership policy (callers share payloads however they like)

use std::fmt;

/// Payload contract for mail delivery - bytes in, bytes out
///
/// Implementations own their bytes; the envelope only borrows them while
/// packing and never assumes exclusive ownership, since the sender may keep
/// holders of the same payload alive after handoff to the transport.
pub trait MailPayload: Send + Sync + fmt::Debug {
    /// Raw payload bytes appended verbatim to the packed frame
    fn as_bytes(&self) -> &[u8];

    /// Payload size in bytes (for buffer sizing)
    fn byte_size(&self) -> usize {
        self.as_bytes().len()
    }

    /// Reconstruct the payload from the received frame tail
    ///
    /// The envelope hands over the remaining bytes verbatim; whatever
    /// internal structure they carry is this type's business alone.
    fn from_wire(bytes: &[u8]) -> Self
    where
        Self: Sized;
}

/// Raw byte payload - the simplest mail payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueBytes {
    pub data: Vec<u8>,
}

impl OpaqueBytes {
    /// Create a new byte payload
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create from a slice (will allocate)
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl MailPayload for OpaqueBytes {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn from_wire(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}
