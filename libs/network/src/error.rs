//! Transport error types

use codec::EnvelopeError;
use thiserror::Error;

/// Transport-layer failures
///
/// Codec failures surface here too: the outbound path packs the envelope
/// before handing it to the transport, and a frame that cannot be encoded
/// is a delivery failure from the caller's point of view.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No endpoint is registered for the destination framework
    #[error("Unknown framework {framework_id}: no endpoint registered")]
    UnknownFramework { framework_id: u32 },

    /// The destination endpoint has shut down
    #[error("Framework {framework_id} disconnected: endpoint dropped its receiver")]
    Disconnected { framework_id: u32 },

    /// The envelope could not be packed into a frame
    #[error("Envelope rejected before transport: {0}")]
    Envelope(#[from] EnvelopeError),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;
