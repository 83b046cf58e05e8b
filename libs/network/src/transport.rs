//! Mail transports and the outbound send path
//!
//! A transport carries packed frames to a destination framework id; it
//! supplies received buffers to the unpacking side and consumes packed
//! buffers from the sending side, without ever interpreting the envelope's
//! internal structure.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use codec::MailEnvelope;
use tokio::sync::mpsc;
use tracing::{debug, error};
use types::MailPayload;

use crate::error::{Result, TransportError};

/// Frame carrier between framework instances
///
/// Implementations move opaque byte frames; the envelope layout is the
/// codec's business on both ends.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one packed frame to the given framework
    async fn send(&self, framework_id: u32, frame: Bytes) -> Result<()>;
}

/// In-process transport connecting frameworks hosted in one process
///
/// Each registered framework gets an unbounded channel; `send` routes a
/// frame to the matching channel. Used by tests and demos in place of a
/// socket transport.
pub struct LoopbackTransport {
    endpoints: Mutex<HashMap<u32, mpsc::UnboundedSender<Bytes>>>,
}

impl LoopbackTransport {
    /// Create a transport with no registered endpoints
    pub fn new() -> Self {
        Self {
            endpoints: Mutex::new(HashMap::new()),
        }
    }

    /// Register a framework and return its inbound frame stream
    ///
    /// Re-registering an id replaces the previous endpoint; frames already
    /// queued on the old channel stay with its receiver.
    pub fn register(&self, framework_id: u32) -> mpsc::UnboundedReceiver<Bytes> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.endpoints
            .lock()
            .expect("endpoint registry poisoned")
            .insert(framework_id, tx);
        debug!(framework_id, "framework endpoint registered");
        rx
    }
}

impl Default for LoopbackTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for LoopbackTransport {
    async fn send(&self, framework_id: u32, frame: Bytes) -> Result<()> {
        let endpoint = self
            .endpoints
            .lock()
            .expect("endpoint registry poisoned")
            .get(&framework_id)
            .cloned();

        let Some(endpoint) = endpoint else {
            return Err(TransportError::UnknownFramework { framework_id });
        };

        let frame_len = frame.len();
        endpoint
            .send(frame)
            .map_err(|_| TransportError::Disconnected { framework_id })?;
        debug!(framework_id, frame_len, "frame delivered");
        Ok(())
    }
}

/// Pack `envelope` and deliver it to its destination framework
///
/// This is the canonical outbound path: size the frame, pack it, hand it
/// to the transport. Codec rejects (an oversized destination name, most
/// likely) are logged here as structured errors AND returned to the
/// caller - the codec itself never logs, so delivery-policy layers like
/// this one own the diagnostic.
pub async fn send_mail<M, T>(transport: &T, envelope: &MailEnvelope<M>) -> Result<()>
where
    M: MailPayload,
    T: MailTransport + ?Sized,
{
    let mut frame = vec![0u8; envelope.required_size()];
    let written = match envelope.pack(&mut frame) {
        Ok(written) => written,
        Err(err) => {
            error!(
                destination = envelope.destination_framework_id(),
                %err,
                "mail envelope rejected, dropping message"
            );
            return Err(err.into());
        }
    };
    frame.truncate(written);

    transport
        .send(envelope.destination_framework_id(), Bytes::from(frame))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use types::{ActorAddress, OpaqueBytes};

    #[tokio::test]
    async fn test_loopback_delivers_registered_frames() {
        let transport = LoopbackTransport::new();
        let mut inbox = transport.register(2);

        transport
            .send(2, Bytes::from_static(b"frame"))
            .await
            .unwrap();

        let frame = inbox.recv().await.unwrap();
        assert_eq!(&frame[..], b"frame");
    }

    #[tokio::test]
    async fn test_loopback_rejects_unknown_framework() {
        let transport = LoopbackTransport::new();

        let err = transport.send(9, Bytes::from_static(b"x")).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnknownFramework { framework_id: 9 }
        ));
    }

    #[tokio::test]
    async fn test_loopback_reports_dropped_endpoint() {
        let transport = LoopbackTransport::new();
        let inbox = transport.register(3);
        drop(inbox);

        let err = transport.send(3, Bytes::from_static(b"x")).await.unwrap_err();
        assert!(matches!(err, TransportError::Disconnected { framework_id: 3 }));
    }

    #[tokio::test]
    async fn test_send_mail_roundtrip() {
        let transport = LoopbackTransport::new();
        let mut inbox = transport.register(2);

        let envelope = MailEnvelope::by_address(
            ActorAddress::new(1, 7),
            ActorAddress::new(2, 3),
            Arc::new(OpaqueBytes::from_slice(b"hello")),
        );
        send_mail(&transport, &envelope).await.unwrap();

        let frame = inbox.recv().await.unwrap();
        let received: MailEnvelope<OpaqueBytes> = MailEnvelope::unpack(&frame).unwrap();
        assert_eq!(*received.from_address(), ActorAddress::new(1, 7));
        assert_eq!(received.payload().as_bytes(), b"hello");
    }

    #[tokio::test]
    async fn test_send_mail_by_name_routes_on_framework_id() {
        let transport = LoopbackTransport::new();
        let mut inbox = transport.register(6);

        let envelope = MailEnvelope::by_name(
            ActorAddress::new(1, 1),
            6,
            "logger",
            Arc::new(OpaqueBytes::from_slice(b"line")),
        );
        send_mail(&transport, &envelope).await.unwrap();

        let frame = inbox.recv().await.unwrap();
        let received: MailEnvelope<OpaqueBytes> = MailEnvelope::unpack(&frame).unwrap();
        match received.destination() {
            codec::MailDestination::Named(remote) => assert_eq!(remote.actor_name, "logger"),
            other => panic!("expected named destination, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_mail_surfaces_codec_reject() {
        let transport = LoopbackTransport::new();
        let mut inbox = transport.register(2);

        let envelope = MailEnvelope::by_name(
            ActorAddress::new(1, 1),
            2,
            "n".repeat(300),
            Arc::new(OpaqueBytes::new(Vec::new())),
        );
        let err = send_mail(&transport, &envelope).await.unwrap_err();

        assert!(matches!(
            err,
            TransportError::Envelope(codec::EnvelopeError::NameTooLong { len: 300, .. })
        ));
        // Nothing reached the destination.
        assert!(inbox.try_recv().is_err());
    }
}
