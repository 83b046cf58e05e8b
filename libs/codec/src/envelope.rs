//! Mail envelope - the packed unit of cross-process actor mail
//!
//! A [`MailEnvelope`] carries one message from a sender address to either a
//! concrete remote actor or a named actor resolved inside the destination
//! framework. [`MailEnvelope::pack`] lays it out as mode byte, sender
//! address, destination descriptor and raw payload; [`MailEnvelope::unpack`]
//! reverses the layout field by field from untrusted input.
//!
//! The encoder checks the destination buffer once up front against
//! [`MailEnvelope::required_size`] - its size is known in advance from owned
//! state. The decoder checks incrementally per field - a received frame's
//! real extent is only discoverable as it is walked. That asymmetry is
//! deliberate and both sides must agree on the arithmetic exactly.

use std::sync::Arc;

use crate::address::{decode_address, encode_address};
use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::name::{decode_name, encode_name, encoded_len};
use crate::protocol::AddressingMode;
use types::{ActorAddress, MailPayload, RemoteActorName, MAX_ACTOR_NAME, MODE_BYTE_SIZE};

/// Destination descriptor - exactly one variant is ever populated
///
/// The addressing mode is derived from the variant rather than stored
/// beside it, so an envelope cannot claim one mode while carrying the
/// other descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailDestination {
    /// Concrete remote actor address
    Address(ActorAddress),
    /// Framework id plus a name the remote framework resolves on delivery
    Named(RemoteActorName),
}

impl MailDestination {
    /// Addressing mode this descriptor encodes as
    pub fn addressing_mode(&self) -> AddressingMode {
        match self {
            MailDestination::Address(_) => AddressingMode::ByAddress,
            MailDestination::Named(_) => AddressingMode::ByName,
        }
    }

    /// Framework instance this mail must be carried to
    pub fn framework_id(&self) -> u32 {
        match self {
            MailDestination::Address(addr) => addr.framework_id,
            MailDestination::Named(remote) => remote.framework_id,
        }
    }

    /// Encoded width of this descriptor on the wire
    fn encoded_len(&self) -> usize {
        match self {
            MailDestination::Address(_) => ActorAddress::SIZE,
            MailDestination::Named(remote) => encoded_len(&remote.actor_name),
        }
    }
}

/// One unit of cross-process actor mail
///
/// Created fresh for every outbound or inbound message; holds the payload
/// behind an `Arc` because other holders (a sender-side copy, a local
/// delivery path) may outlive the envelope.
#[derive(Debug, Clone)]
pub struct MailEnvelope<M> {
    from: ActorAddress,
    destination: MailDestination,
    payload: Arc<M>,
}

impl<M: MailPayload> MailEnvelope<M> {
    /// Mail addressed to a concrete remote actor
    pub fn by_address(from: ActorAddress, to: ActorAddress, payload: Arc<M>) -> Self {
        Self {
            from,
            destination: MailDestination::Address(to),
            payload,
        }
    }

    /// Mail addressed by name, resolved inside the destination framework
    pub fn by_name(
        from: ActorAddress,
        framework_id: u32,
        name: impl Into<String>,
        payload: Arc<M>,
    ) -> Self {
        Self {
            from,
            destination: MailDestination::Named(RemoteActorName::new(framework_id, name)),
            payload,
        }
    }

    /// Sender address
    pub fn from_address(&self) -> &ActorAddress {
        &self.from
    }

    /// Destination descriptor
    pub fn destination(&self) -> &MailDestination {
        &self.destination
    }

    /// Addressing mode carried in the frame's first byte
    pub fn addressing_mode(&self) -> AddressingMode {
        self.destination.addressing_mode()
    }

    /// Framework that must receive this frame, regardless of mode
    pub fn destination_framework_id(&self) -> u32 {
        self.destination.framework_id()
    }

    /// Shared payload handle
    pub fn payload(&self) -> &Arc<M> {
        &self.payload
    }

    /// Exact frame size `pack` will write
    ///
    /// Mode byte + sender address + destination descriptor + payload.
    /// Pack writes precisely this many bytes; any divergence between the
    /// two is a wire-breaking bug, not an inefficiency.
    pub fn required_size(&self) -> usize {
        MODE_BYTE_SIZE + ActorAddress::SIZE + self.destination.encoded_len() + self.payload.byte_size()
    }

    /// Pack the envelope into `buf`, returning the bytes written
    ///
    /// Fails with NameTooLong for an unencodable destination name and with
    /// BufferTooSmall when `buf` cannot hold [`Self::required_size`]
    /// bytes - in both cases before a single byte of `buf` is touched.
    /// On success only the caller's buffer changes; the envelope itself
    /// is unaffected.
    pub fn pack(&self, buf: &mut [u8]) -> EnvelopeResult<usize> {
        if let MailDestination::Named(remote) = &self.destination {
            if remote.actor_name.len() > MAX_ACTOR_NAME {
                return Err(EnvelopeError::name_too_long(remote.actor_name.len()));
            }
        }
        let need = self.required_size();
        if buf.len() < need {
            return Err(EnvelopeError::buffer_too_small(need, buf.len(), "envelope pack"));
        }

        let mut cursor = WriteCursor::new(buf);
        cursor.put_u8(self.addressing_mode() as u8, "mode byte")?;
        encode_address(&self.from, &mut cursor, "from address")?;
        match &self.destination {
            MailDestination::Address(to) => encode_address(to, &mut cursor, "to address")?,
            MailDestination::Named(remote) => encode_name(&remote.actor_name, &mut cursor)?,
        }
        cursor.put(self.payload.as_bytes(), "payload")?;

        Ok(cursor.written())
    }

    /// Unpack an envelope from a received frame
    ///
    /// Walks the frame field by field with per-field bounds checks; the
    /// remaining bytes become the payload verbatim via `M::from_wire`. Any
    /// codec failure aborts the whole unpack - no partially-decoded
    /// envelope is ever returned.
    pub fn unpack(buf: &[u8]) -> EnvelopeResult<Self> {
        let mut cursor = ReadCursor::new(buf);

        let mode_byte = cursor.take_u8("mode byte")?;
        let mode = AddressingMode::try_from(mode_byte)
            .map_err(|_| EnvelopeError::UnknownAddressingMode { mode: mode_byte })?;

        let from = decode_address(&mut cursor, "from address")?;
        let destination = match mode {
            AddressingMode::ByAddress => {
                MailDestination::Address(decode_address(&mut cursor, "to address")?)
            }
            AddressingMode::ByName => {
                // The wire carries only the name: the frame already reached
                // the destination framework, so its id is not encoded.
                MailDestination::Named(RemoteActorName::new(0, decode_name(&mut cursor)?))
            }
        };

        let payload = Arc::new(M::from_wire(cursor.take_rest()));
        Ok(Self {
            from,
            destination,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::OpaqueBytes;

    #[test]
    fn test_required_size_by_address() {
        let envelope = MailEnvelope::by_address(
            ActorAddress::new(1, 7),
            ActorAddress::new(2, 3),
            Arc::new(OpaqueBytes::from_slice(b"hello")),
        );
        assert_eq!(envelope.required_size(), 1 + 8 + 8 + 5);
    }

    #[test]
    fn test_required_size_by_name() {
        let envelope = MailEnvelope::by_name(
            ActorAddress::new(1, 7),
            9,
            "worker-42",
            Arc::new(OpaqueBytes::from_slice(b"hi")),
        );
        assert_eq!(envelope.required_size(), 1 + 8 + (1 + 9) + 2);
    }

    #[test]
    fn test_destination_framework_id() {
        let payload = Arc::new(OpaqueBytes::new(Vec::new()));
        let by_addr = MailEnvelope::by_address(
            ActorAddress::new(1, 1),
            ActorAddress::new(2, 3),
            Arc::clone(&payload),
        );
        let by_name = MailEnvelope::by_name(ActorAddress::new(1, 1), 9, "log", payload);

        assert_eq!(by_addr.destination_framework_id(), 2);
        assert_eq!(by_name.destination_framework_id(), 9);
    }

    #[test]
    fn test_payload_is_shared_not_copied() {
        let payload = Arc::new(OpaqueBytes::from_slice(b"shared"));
        let envelope = MailEnvelope::by_address(
            ActorAddress::new(1, 1),
            ActorAddress::new(2, 2),
            Arc::clone(&payload),
        );

        // Sender keeps its handle; the envelope did not take ownership.
        assert_eq!(Arc::strong_count(&payload), 2);
        assert_eq!(envelope.payload().as_bytes(), b"shared");
    }
}
